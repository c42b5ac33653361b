//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle and the application title.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Operations Console"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>"Administrator"</span>
                </div>
            </div>
        </div>
    }
}
