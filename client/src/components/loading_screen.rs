//! Full-screen splash shown while the shell settles.

use leptos::prelude::*;

use crate::util::body_scroll;

/// Spinner overlay. Page scrolling is locked while `loading` is set and
/// released when it clears or the component unmounts.
#[component]
pub fn LoadingScreen(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    Effect::new(move || body_scroll::set_locked(loading.get()));
    on_cleanup(|| body_scroll::set_locked(false));

    view! {
        <Show when=move || loading.get()>
            <div class="splash" role="status">
                <div class="splash__spinner"></div>
            </div>
        </Show>
    }
}
