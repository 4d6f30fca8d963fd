//! Root application component with configuration context and page metadata.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;

/// Root application component.
///
/// Provides the build-time configuration to every component and renders the
/// single home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    provide_context(config);

    view! {
        <Title text=format!("{} | Portfolio", config.owner_name)/>
        <Meta name="description" content=format!("Projects and contact details for {}.", config.owner_name)/>
        <HomePage/>
    }
}
