//! PageFrame - standard root wrapper for every page rendered inside a tab.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  - `"{entity}--{category}"`, e.g. `"a005_event--list"`
//!   - `data-page-category`  - one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every tab page.
///
/// - `list`   → `page`
/// - `detail` → `page page--detail`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
