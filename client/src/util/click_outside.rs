//! Close-on-click-outside behavior for dropdowns and date popovers.
//!
//! Registers a window `mousedown` listener for the lifetime of the calling
//! component. A press whose target lies outside `container` clears `open`.

#[cfg(test)]
#[path = "click_outside_test.rs"]
mod click_outside_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Clear `open` whenever the user presses outside `container`.
pub fn close_on_click_outside(container: NodeRef<Div>, open: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !open.get_untracked() {
                return;
            }
            let Some(el) = container.get_untracked() else {
                return;
            };
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !el.contains(target.as_ref()) {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (container, open);
    }
}
