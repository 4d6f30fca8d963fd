//! Full-screen loader shown while the page settles.

use leptos::prelude::*;

/// Delay before the loader fades out after mount.
pub const LOADER_HIDE_DELAY_MS: u32 = 500;

/// Loader overlay; hides itself [`LOADER_HIDE_DELAY_MS`] after mount.
#[component]
pub fn PageLoader(visible: RwSignal<bool>) -> impl IntoView {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(LOADER_HIDE_DELAY_MS).await;
        visible.set(false);
    });

    view! {
        <div class="page-loader" class:hidden=move || !visible.get() aria-hidden="true">
            <div class="loader-spinner"></div>
        </div>
    }
}
