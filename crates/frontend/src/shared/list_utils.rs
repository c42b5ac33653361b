//! Shared list page helpers (search box, search state)
use crate::shared::config::use_ui_config;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search text counts as active once it reaches `min_chars` non-blank characters
pub fn is_search_active(text: &str, min_chars: usize) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_chars
}

/// One line description of a list page's search text and filter selection
pub fn query_summary(search_text: &str, selected_labels: &[String], min_chars: usize) -> String {
    let mut parts = Vec::new();
    if is_search_active(search_text, min_chars) {
        parts.push(format!("search \"{}\"", search_text.trim()));
    }
    if !selected_labels.is_empty() {
        parts.push(format!("filter: {}", selected_labels.join(", ")));
    }
    if parts.is_empty() {
        "No search or filter applied".to_string()
    } else {
        parts.join("; ")
    }
}

/// Replaces the item whose key matches `item`'s key, or appends it when absent.
///
/// Saved details forms hand back a whole snapshot; this is how list pages
/// swap it in.
pub fn replace_or_push<T, K, F>(items: &mut Vec<T>, item: T, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let item_key = key(&item);
    match items.iter().position(|existing| key(existing) == item_key) {
        Some(pos) => items[pos] = item,
        None => items.push(item),
    }
}

/// Handle of the pending debounce timer, if any
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebounceSlot(Option<i32>);

impl DebounceSlot {
    pub fn pending(timeout_id: i32) -> Self {
        Self(Some(timeout_id))
    }

    /// Empties the slot and returns the timer that still has to be cancelled
    pub fn take(&mut self) -> Option<i32> {
        self.0.take()
    }
}

fn cancel_pending(slot: StoredValue<DebounceSlot>, window: &web_sys::Window) {
    let mut current = slot.get_value();
    if let Some(timeout_id) = current.take() {
        window.clear_timeout_with_handle(timeout_id);
    }
    slot.set_value(current);
}

/// Search component with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current search text (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let config = use_ui_config().search;
    let min_chars = config.min_chars;
    let debounce_ms = config.debounce_ms as i32;

    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {min_chars} characters)...")
    } else {
        placeholder
    };

    // Local input text (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(DebounceSlot::default());

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        cancel_pending(debounce_timeout, &window);

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            debounce_ms,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(DebounceSlot::pending(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {e:?}"),
        }
        closure.forget();
    };

    let is_filter_active = move || is_search_active(&value.get(), min_chars);

    // A timer still pending would write the old text back after the clear
    let clear_filter = move |_| {
        if let Some(window) = web_sys::window() {
            cancel_pending(debounce_timeout, &window);
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_below_threshold_is_inactive() {
        assert!(!is_search_active("", 3));
        assert!(!is_search_active("ab", 3));
        assert!(!is_search_active("   ab   ", 3));
    }

    #[test]
    fn test_search_at_threshold_is_active() {
        assert!(is_search_active("abc", 3));
        assert!(is_search_active("  gala dinner ", 3));
    }

    #[test]
    fn test_query_summary() {
        assert_eq!(query_summary("", &[], 3), "No search or filter applied");
        assert_eq!(query_summary("ga", &[], 3), "No search or filter applied");
        assert_eq!(query_summary(" gala ", &[], 3), "search \"gala\"");
        assert_eq!(
            query_summary("gala", &["Planned".to_string(), "Confirmed".to_string()], 3),
            "search \"gala\"; filter: Planned, Confirmed"
        );
    }

    #[test]
    fn test_replace_or_push_replaces_in_place() {
        let mut items = vec![(1, "a"), (2, "b"), (3, "c")];
        replace_or_push(&mut items, (2, "B"), |i| i.0);
        assert_eq!(items, vec![(1, "a"), (2, "B"), (3, "c")]);
    }

    #[test]
    fn test_replace_or_push_appends_new() {
        let mut items = vec![(1, "a")];
        replace_or_push(&mut items, (7, "z"), |i| i.0);
        assert_eq!(items, vec![(1, "a"), (7, "z")]);
    }

    #[test]
    fn test_debounce_slot_hands_out_pending_timer_once() {
        let mut slot = DebounceSlot::pending(42);
        assert_eq!(slot.take(), Some(42));
        assert_eq!(slot.take(), None);
        assert_eq!(slot, DebounceSlot::default());
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        assert!(!is_search_active("éé", 3));
        assert!(is_search_active("ééé", 3));
    }
}
