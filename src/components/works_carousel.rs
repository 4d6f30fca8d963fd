//! Home-page works carousel: project cards, arrows, page dots, and swipe.
//!
//! ARCHITECTURE
//! ============
//! The slide math lives in `gallery::carousel::CarouselModel`; this component
//! only measures the viewport, renders cards, and translates the track. The
//! model is (re)configured from an effect that runs after the cards for a new
//! catalog have rendered, so the slide count always matches the DOM.

use leptos::prelude::*;

use gallery::carousel::{CarouselModel, Direction};
use gallery::catalog::{Project, ProjectCatalog};
use gallery::gesture::SwipeTracker;
use gallery::modal::ProjectModalController;
use gallery::viewport::{slides_per_view, track_transform};

use crate::util::dom::{changed_touch_x, viewport_width};

/// Works carousel bound to the catalog and carousel model in context.
#[component]
pub fn WorksCarousel() -> impl IntoView {
    let catalog = expect_context::<RwSignal<ProjectCatalog>>();
    let works = expect_context::<RwSignal<CarouselModel>>();
    let swipe = RwSignal::new(SwipeTracker::new());
    let container_width = RwSignal::new(0.0_f64);
    let container = NodeRef::<leptos::html::Div>::new();

    let relayout = move |total: usize| {
        let per_view = slides_per_view(viewport_width());
        works.update(|model| model.configure(total, per_view));
        #[cfg(feature = "csr")]
        {
            if let Some(el) = container.get_untracked() {
                container_width.set(f64::from(el.offset_width()));
            }
        }
    };

    Effect::new(move || relayout(catalog.with(ProjectCatalog::len)));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            relayout(catalog.with_untracked(ProjectCatalog::len));
        });
        on_cleanup(move || handle.remove());
    }

    let step = move |direction: Direction| works.update(|model| model.step(direction));

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = changed_touch_x(&ev) {
            swipe.update(|tracker| tracker.begin(x));
        }
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        let Some(x) = changed_touch_x(&ev) else {
            return;
        };
        let mut tracker = swipe.get_untracked();
        let swiped = tracker.end(x);
        swipe.set(tracker);
        if let Some(direction) = swiped {
            step(direction);
        }
    };

    let dot_count = Memo::new(move |_| works.with(CarouselModel::dot_count));
    let active_dot = Memo::new(move |_| works.with(CarouselModel::active_dot_index));

    view! {
        <div class="works-carousel">
            <button class="carousel-btn carousel-btn--prev" on:click=move |_| step(Direction::Prev) title="Previous">
                "‹"
            </button>
            <div
                class="carousel-container"
                node_ref=container
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
            >
                <div
                    class="carousel-track"
                    style:transform=move || works.with(|model| track_transform(model, container_width.get()))
                >
                    {move || {
                        catalog
                            .with(|c| c.projects().to_vec())
                            .into_iter()
                            .map(|project| view! { <WorkCard project/> })
                            .collect_view()
                    }}
                </div>
            </div>
            <button class="carousel-btn carousel-btn--next" on:click=move |_| step(Direction::Next) title="Next">
                "›"
            </button>
            <div class="carousel-dots">
                {move || {
                    (0..dot_count.get())
                        .map(|dot| {
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:active=move || active_dot.get() == dot
                                    on:click=move |_| works.update(|model| model.go_to_dot(dot))
                                    title=format!("Page {}", dot + 1)
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || catalog.with(ProjectCatalog::is_empty)>
                <p class="works-empty">"Projects are on their way."</p>
            </Show>
        </div>
    }
}

/// One project card. "View Project" opens the detail modal.
#[component]
fn WorkCard(project: Project) -> impl IntoView {
    let catalog = expect_context::<RwSignal<ProjectCatalog>>();
    let modal = expect_context::<RwSignal<ProjectModalController>>();
    let id = project.id;

    let on_view = move |_| {
        catalog.with_untracked(|c| {
            modal.update(|m| {
                m.open(c, id);
            });
        });
    };

    view! {
        <div class="work-item fadeInUp" data-project=id.to_string()>
            <div
                class="work-image-wrapper"
                style=format!("--work-bg-image: url({})", project.thumbnail)
            >
                <img src=project.thumbnail.clone() alt=project.name.clone() class="work-thumbnail"/>
                <div class="work-overlay">
                    <h3>{project.name}</h3>
                    <p>{project.short_description}</p>
                </div>
            </div>
            <button class="work-view-btn" on:click=on_view>"View Project"</button>
        </div>
    }
}
