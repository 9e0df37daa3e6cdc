//! Translation lookup for the site's two languages.
//!
//! Bundles are the JSON files under `locales/`, embedded at compile time and
//! parsed once. Keys are dotted paths into the bundle (`auth.login.title`).
//! Lookup falls back from the active language to English and finally to the
//! key (or a caller-supplied default), so a missing Arabic string never
//! renders blank.
//!
//! The language preference is persisted in `localStorage` and mirrored onto
//! the `<html>` element's `lang` and `dir` attributes. Those helpers only do
//! work in the browser; SSR and tests see English and no-ops.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::LazyLock;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "hala_lang";

static EN_BUNDLE: LazyLock<Value> = LazyLock::new(|| parse_bundle(include_str!("../../locales/en.json")));
static AR_BUNDLE: LazyLock<Value> = LazyLock::new(|| parse_bundle(include_str!("../../locales/ar.json")));

fn parse_bundle(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

/// Supported site languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// BCP 47 primary language subtag.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a language tag such as `ar`, `ar-SA` or `en_US`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Language name written in that language, for switcher entries.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    /// Label of the language menu itself, in this language.
    pub fn language_label(self) -> &'static str {
        match self {
            Self::En => "Language",
            Self::Ar => "اللغة",
        }
    }

    /// The other language, for the single-button switcher.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    fn bundle(self) -> &'static Value {
        match self {
            Self::En => &*EN_BUNDLE,
            Self::Ar => &*AR_BUNDLE,
        }
    }
}

fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(bundle, |node, part| node.get(part))
}

fn fallback_chain(locale: Locale) -> [&'static Value; 2] {
    [locale.bundle(), Locale::En.bundle()]
}

/// First string found for `key` across `bundles`, in order, else `default`.
fn translate_in(bundles: &[&Value], key: &str, default: &str) -> String {
    bundles
        .iter()
        .find_map(|bundle| lookup(bundle, key).and_then(Value::as_str))
        .map_or_else(|| default.to_owned(), str::to_owned)
}

/// First string array found for `key` across `bundles`; non-string entries
/// are skipped and a missing key yields an empty list.
fn translate_list_in(bundles: &[&Value], key: &str) -> Vec<String> {
    bundles
        .iter()
        .find_map(|bundle| lookup(bundle, key).and_then(Value::as_array))
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_owned).collect())
        .unwrap_or_default()
}

/// Translate `key`, returning the key itself when no bundle has it.
pub fn translate(locale: Locale, key: &str) -> String {
    translate_or(locale, key, key)
}

/// Translate `key`, returning `default` when no bundle has it.
pub fn translate_or(locale: Locale, key: &str, default: &str) -> String {
    translate_in(&fallback_chain(locale), key, default)
}

/// Resolve a key whose value is an array of strings.
pub fn translate_list(locale: Locale, key: &str) -> Vec<String> {
    translate_list_in(&fallback_chain(locale), key)
}

/// Reactive translation handle bound to the shared [`UiState`].
///
/// Reading through the handle tracks the locale, so views re-render when
/// the language changes.
#[derive(Clone, Copy)]
pub struct I18n {
    ui: RwSignal<UiState>,
}

impl I18n {
    pub fn new(ui: RwSignal<UiState>) -> Self {
        Self { ui }
    }

    pub fn locale(self) -> Locale {
        self.ui.with(|ui| ui.locale)
    }

    pub fn t(self, key: &str) -> String {
        translate(self.locale(), key)
    }

    pub fn t_or(self, key: &str, default: &str) -> String {
        translate_or(self.locale(), key, default)
    }

    pub fn list(self, key: &str) -> Vec<String> {
        translate_list(self.locale(), key)
    }

    /// Switch language and remember the choice.
    pub fn set_locale(self, locale: Locale) {
        if self.show_locale(locale) {
            save_preference(locale);
        }
    }

    /// Switch language without persisting it, for a detected or restored
    /// language. Returns whether the language changed.
    pub fn show_locale(self, locale: Locale) -> bool {
        if self.ui.with_untracked(|ui| ui.locale) == locale {
            return false;
        }
        self.ui.update(|ui| ui.locale = locale);
        true
    }
}

/// Fetch the [`I18n`] handle from context.
pub fn use_i18n() -> I18n {
    I18n::new(expect_context::<RwSignal<UiState>>())
}

/// Read the stored language, falling back to the browser language, then
/// English.
pub fn read_preference() -> Locale {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Locale::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(locale) = Locale::from_code(&val) {
                    return locale;
                }
            }
        }

        window
            .navigator()
            .language()
            .and_then(|tag| Locale::from_code(&tag))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Locale::default()
    }
}

/// Persist the language choice to `localStorage`.
pub fn save_preference(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, locale.code());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}

/// Mirror the language onto `<html lang dir>`.
pub fn apply(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("lang", locale.code());
                let _ = el.set_attribute("dir", locale.dir());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}
