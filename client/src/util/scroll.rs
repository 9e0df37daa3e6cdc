//! Window scroll tracking for the sticky header shadow.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

/// Vertical offset in pixels past which the header is drawn raised.
pub const SHADOW_THRESHOLD_PX: f64 = 10.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SHADOW_THRESHOLD_PX
}

/// Keep `scrolled` in sync with the window scroll position until the
/// calling component unmounts.
pub fn track_scrolled(scrolled: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        let read = move || {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let next = is_scrolled(y);
            if scrolled.get_untracked() != next {
                scrolled.set(next);
            }
        };
        // First read after hydration so the server markup is adopted as-is.
        Effect::new(read);
        let handle = window_event_listener(leptos::ev::scroll, move |_| read());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scrolled;
    }
}
