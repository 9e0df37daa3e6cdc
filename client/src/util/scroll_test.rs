use super::*;

#[test]
fn shadow_starts_past_ten_pixels() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(10.0));
    assert!(is_scrolled(10.5));
    assert!(is_scrolled(400.0));
}
