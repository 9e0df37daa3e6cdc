//! Page scroll locking while full-screen overlays are up.

#[cfg(test)]
#[path = "body_scroll_test.rs"]
mod body_scroll_test;

/// CSS `overflow` value for the `<body>` element.
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "auto" }
}

/// Lock or release scrolling on `<body>`.
pub fn set_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", overflow_value(locked));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
