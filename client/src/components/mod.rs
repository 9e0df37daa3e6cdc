//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (`header`, `mobile_menu`, `footer`, `loading_screen`) reads
//! shared state from Leptos context providers; the home-page sections and
//! form widgets take their inputs as props.

pub mod about_sections;
pub mod calendar_view;
pub mod country_code_selector;
pub mod date_picker;
pub mod date_range_selector;
pub mod digital_experience;
pub mod footer;
pub mod form_elements;
pub mod header;
pub mod hero_banner;
pub mod hotel_gallery;
pub mod language_switcher;
pub mod loading_screen;
pub mod mobile_menu;
pub mod promo_section;
pub mod search_units_bar;
pub mod skeleton;
