pub mod country_codes;
pub mod gallery;
pub mod navigation;
