use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Middle mouse button, as reported by `MouseEvent::button`
const MIDDLE_BUTTON: i16 = 1;

/// One entry of the tab strip. Click activates, the cross or a middle click closes.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        key.with_value(|key| tabs_store.active.get().as_deref() == Some(key.as_str()))
    });

    let on_click = move |_| key.with_value(|key| tabs_store.activate_tab(key));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|key| tabs_store.close_tab(key));
    };

    let on_aux_click = move |ev: ev::MouseEvent| {
        if ev.button() == MIDDLE_BUTTON {
            ev.prevent_default();
            key.with_value(|key| tabs_store.close_tab(key));
        }
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            title=tab.key
            on:click=on_click
            on:auxclick=on_aux_click
        >
            <span>{tab.title}</span>
            <button class="tab-close" title="Close" on:click=on_close>"×"</button>
        </div>
    }
}
