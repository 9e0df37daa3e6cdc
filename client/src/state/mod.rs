//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` and `settings` are provided once by `App` as `RwSignal` contexts;
//! `search` and `forms` are owned by the components that render them.

pub mod forms;
pub mod search;
pub mod settings;
pub mod ui;
