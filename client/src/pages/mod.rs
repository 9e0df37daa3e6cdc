//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped form state and delegates rendering details
//! to `components`.

pub mod about;
pub mod admin;
pub mod contact;
pub mod forgot_password;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reset_password;
pub mod services;
