use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, UiConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("UI config could not be parsed, using defaults: {e}");
            UiConfig::default()
        }
    };
    provide_context(config);

    // Navigation state only (opened / active tabs); page state lives in each page.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
