//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser side effects (`body_scroll`, `click_outside`, `scroll`) live here
//! behind `hydrate` gates so components stay renderable on the server. The
//! `calendar` and `validation` modules are pure and carry most of the tests.

pub mod body_scroll;
pub mod calendar;
pub mod click_outside;
pub mod scroll;
pub mod validation;
