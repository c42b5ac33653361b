use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned surface for details forms opened from a list.
///
/// Renders no header of its own; details screens bring their own header and
/// Save/Close buttons.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra style for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so selecting text inside the form and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // The overlay is removed by on_close; run it after the current dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    let modal_style = match modal_style {
        Some(extra) if !extra.is_empty() => format!("position: relative; {extra}"),
        _ => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class style=modal_style on:click=stop_propagation>
                {children()}
            </div>
        </div>
    }
}
