//! Project detail modal with its own image carousel.
//!
//! Open/close and slide state belong to `ProjectModalController` in context;
//! this component renders whichever project is open and maps clicks and
//! Escape/ArrowLeft/ArrowRight onto controller calls.

use leptos::prelude::*;

use gallery::carousel::Direction;
use gallery::catalog::{Project, ProjectCatalog};
#[cfg(feature = "csr")]
use gallery::modal::ModalKey;
use gallery::modal::ProjectModalController;

/// Modal overlay. Renders nothing inside the dialog while closed.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let catalog = expect_context::<RwSignal<ProjectCatalog>>();
    let modal = expect_context::<RwSignal<ProjectModalController>>();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if !modal.with_untracked(ProjectModalController::is_open) {
                return;
            }
            let Some(key) = ModalKey::from_key_name(&ev.key()) else {
                return;
            };
            ev.prevent_default();
            modal.update(|m| {
                m.handle_key(key);
            });
        });
        on_cleanup(move || handle.remove());
    }

    let project = Memo::new(move |_| {
        modal
            .with(ProjectModalController::active_project_id)
            .and_then(|id| catalog.with(|c| c.get(id).cloned()))
    });
    let current = Memo::new(move |_| modal.with(ProjectModalController::current_index).unwrap_or(0));
    let close = move |_| modal.update(ProjectModalController::close);

    view! {
        <div
            class="modal"
            class:active=move || modal.with(ProjectModalController::is_open)
            on:click=close
        >
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <button class="modal-close" on:click=close title="Close">
                    "×"
                </button>
                {move || project.get().map(|project| view! { <ModalBody project current/> })}
            </div>
        </div>
    }
}

#[component]
fn ModalBody(project: Project, current: Memo<usize>) -> impl IntoView {
    let modal = expect_context::<RwSignal<ProjectModalController>>();
    let change = move |direction: Direction| {
        modal.update(|m| {
            m.change_slide(direction);
        });
    };

    let background_images = project.images.clone();
    let background = move || {
        background_images
            .get(current.get())
            .map(|src| format!("--modal-bg-image: url({src})"))
            .unwrap_or_default()
    };

    let slides = project
        .images
        .iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <div class="carousel-slide" class:active=move || current.get() == index>
                    <img src=src.clone() alt=format!("Project image {}", index + 1)/>
                </div>
            }
        })
        .collect_view();

    let indicators = (0..project.images.len())
        .map(|index| {
            view! {
                <button
                    class="indicator"
                    class:active=move || current.get() == index
                    on:click=move |_| modal.update(|m| {
                        m.select_slide(index);
                    })
                    title=format!("Image {}", index + 1)
                ></button>
            }
        })
        .collect_view();

    let tech_tags = project
        .tech_stack
        .iter()
        .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
        .collect_view();

    let link = (!project.link.is_empty()).then(|| {
        view! {
            <a class="btn btn-primary modal-link" href=project.link.clone() target="_blank" rel="noopener noreferrer">
                "View Live"
            </a>
        }
    });

    view! {
        <div class="modal-carousel" style=background>
            <div class="carousel-images">{slides}</div>
            <button class="carousel-nav carousel-nav--prev" on:click=move |_| change(Direction::Prev) title="Previous image">
                "‹"
            </button>
            <button class="carousel-nav carousel-nav--next" on:click=move |_| change(Direction::Next) title="Next image">
                "›"
            </button>
            <div class="carousel-indicators">{indicators}</div>
        </div>
        <div class="modal-info">
            <h2 class="modal-title">{project.name}</h2>
            <p class="modal-description">{project.description}</p>
            <div class="tech-stack">{tech_tags}</div>
            {link}
        </div>
    }
}
