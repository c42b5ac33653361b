//! Multi-select dropdown filter for list pages.
//!
//! - `state` - pure selection logic (toggle, clear, caption)

pub mod state;

pub use state::FilterSelection;

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Dropdown with one checkbox per option.
///
/// `selected` holds the picked option values; it is replaced as a whole on
/// every change.
#[component]
pub fn MultiSelectFilter(
    #[prop(into)] label: String,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let options = StoredValue::new(options);

    let selection = move || FilterSelection::new(selected.get());

    let caption = move || options.with_value(|opts| selection().summary(opts));

    let toggle_value = move |value: String| {
        let mut next = selection();
        next.toggle(&value);
        on_change.run(next.into_values());
    };

    let clear = move |_| {
        on_change.run(Vec::new());
        is_open.set(false);
    };

    view! {
        <div class="multi-select">
            <span class="multi-select__label">{label}</span>
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| is_open.update(|open| *open = !*open)
            >
                {caption}
                {icon("chevron-down")}
            </Button>
            <Show when=move || is_open.get()>
                <div class="multi-select__dropdown">
                    {options.get_value().into_iter().map(|(value, option_label)| {
                        let value_for_check = value.clone();
                        let checked = move || selected.get().contains(&value_for_check);
                        view! {
                            <label class="multi-select__option">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| toggle_value(value.clone())
                                />
                                <span>{option_label}</span>
                            </label>
                        }
                    }).collect_view()}
                    <div class="multi-select__footer">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=clear
                        >
                            "Clear"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
