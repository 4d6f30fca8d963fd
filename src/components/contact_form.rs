//! Contact form posting through the email transport.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::contact::{FormSubmission, SubmissionStatus};

/// Contact form. The submit button is disabled while a send is in flight.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormSubmission>>();
    let config = expect_context::<SiteConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = form.get_untracked();
        let draft = next.begin();
        form.set(next);
        #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
        let Some(draft) = draft else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::email::send_message(&config.email, draft).await;
            if let Err(err) = &outcome {
                log::warn!("contact message failed: {err}");
            }
            form.update(|f| f.finish(outcome));
        });
    };

    let busy = move || form.with(FormSubmission::is_busy);
    let failed = move || form.with(|f| matches!(f.status, SubmissionStatus::Failed(_)));

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <input
                    type="text"
                    id="name"
                    placeholder="Your Name"
                    prop:value=move || form.with(|f| f.draft.name.clone())
                    on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                    disabled=busy
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    id="email"
                    placeholder="Your Email"
                    prop:value=move || form.with(|f| f.draft.email.clone())
                    on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                    disabled=busy
                />
            </div>
            <div class="form-group">
                <textarea
                    id="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || form.with(|f| f.draft.message.clone())
                    on:input=move |ev| form.update(|f| f.draft.message = event_target_value(&ev))
                    disabled=busy
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary" disabled=busy>
                {move || form.with(FormSubmission::submit_label)}
            </button>
            {move || {
                form.with(|f| f.notice(config.contact_email))
                    .map(|text| {
                        view! {
                            <p class=move || if failed() { "form-notice form-notice--error" } else { "form-notice" }>
                                {text}
                            </p>
                        }
                    })
            }}
        </form>
    }
}
