#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn overflow_hidden_only_while_locked() {
    assert_eq!(overflow_value(true), "hidden");
    assert_eq!(overflow_value(false), "auto");
}

#[test]
fn set_locked_is_noop_but_callable() {
    set_locked(true);
    set_locked(false);
}
