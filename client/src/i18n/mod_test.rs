use super::*;

fn leaf_keys(node: &Value, prefix: &str, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                leaf_keys(child, &path, out);
            }
        }
        _ => out.push(prefix.to_owned()),
    }
}

// =============================================================
// Locale
// =============================================================

#[test]
fn locale_default_is_english() {
    assert_eq!(Locale::default(), Locale::En);
}

#[test]
fn locale_from_code_accepts_region_tags() {
    assert_eq!(Locale::from_code("ar"), Some(Locale::Ar));
    assert_eq!(Locale::from_code("ar-SA"), Some(Locale::Ar));
    assert_eq!(Locale::from_code("EN_us"), Some(Locale::En));
    assert_eq!(Locale::from_code(" en "), Some(Locale::En));
}

#[test]
fn locale_from_code_rejects_unknown_languages() {
    assert_eq!(Locale::from_code("fr"), None);
    assert_eq!(Locale::from_code(""), None);
}

#[test]
fn locale_direction_follows_script() {
    assert_eq!(Locale::En.dir(), "ltr");
    assert_eq!(Locale::Ar.dir(), "rtl");
    assert!(Locale::Ar.is_rtl());
    assert!(!Locale::En.is_rtl());
}

#[test]
fn locale_toggle_round_trips() {
    for locale in Locale::ALL {
        assert_ne!(locale.toggled(), locale);
        assert_eq!(locale.toggled().toggled(), locale);
    }
}

#[test]
fn locale_code_parses_back() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_code(locale.code()), Some(locale));
    }
}

// =============================================================
// Bundles
// =============================================================

#[test]
fn bundles_parse_as_objects() {
    assert!(Locale::En.bundle().is_object());
    assert!(Locale::Ar.bundle().is_object());
}

#[test]
fn bundles_share_the_same_keys() {
    let mut en = Vec::new();
    let mut ar = Vec::new();
    leaf_keys(Locale::En.bundle(), "", &mut en);
    leaf_keys(Locale::Ar.bundle(), "", &mut ar);
    en.sort();
    ar.sort();
    assert_eq!(en, ar);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn translate_resolves_nested_keys() {
    assert_eq!(translate(Locale::En, "header.home"), "Home");
    assert_eq!(translate(Locale::Ar, "header.home"), "الرئيسية");
}

#[test]
fn translate_returns_key_when_missing_everywhere() {
    assert_eq!(translate(Locale::Ar, "header.missing"), "header.missing");
}

#[test]
fn translate_or_uses_default_when_missing() {
    assert_eq!(translate_or(Locale::En, "notFound.nope", "Fallback"), "Fallback");
    assert_eq!(translate_or(Locale::En, "notFound.title", "Fallback"), "Page Not Found");
}

#[test]
fn translate_does_not_return_objects_as_text() {
    assert_eq!(translate(Locale::En, "header"), "header");
}

#[test]
fn translate_list_returns_array_entries() {
    let features = translate_list(Locale::En, "home.promo.features");
    assert_eq!(features.len(), 4);
    assert_eq!(features[0], "Elegant rooms and suites");
}

#[test]
fn translate_list_missing_key_is_empty() {
    assert!(translate_list(Locale::En, "home.promo.nothing").is_empty());
    assert!(translate_list(Locale::En, "header.home").is_empty());
}

#[test]
fn arabic_lookup_falls_back_to_english_then_key() {
    let ar = serde_json::json!({ "nav": { "home": "الرئيسية" } });
    let en = serde_json::json!({ "nav": { "home": "Home", "careers": "Careers" } });
    let chain = [&ar, &en];
    assert_eq!(translate_in(&chain, "nav.home", "nav.home"), "الرئيسية");
    assert_eq!(translate_in(&chain, "nav.careers", "nav.careers"), "Careers");
    assert_eq!(translate_in(&chain, "nav.news", "nav.news"), "nav.news");
}

#[test]
fn arabic_list_falls_back_to_english() {
    let ar = serde_json::json!({ "promo": {} });
    let en = serde_json::json!({ "promo": { "features": ["Spa", 3, "Pool"] } });
    assert_eq!(translate_list_in(&[&ar, &en], "promo.features"), vec!["Spa", "Pool"]);
}

#[test]
fn show_locale_switches_without_reporting_repeat() {
    let i18n = I18n::new(RwSignal::new(UiState::default()));
    assert!(i18n.show_locale(Locale::Ar));
    assert_eq!(i18n.ui.get_untracked().locale, Locale::Ar);
    assert!(!i18n.show_locale(Locale::Ar));
}

#[test]
fn lookup_walks_dotted_path() {
    let bundle = serde_json::json!({ "a": { "b": { "c": "deep" } } });
    assert_eq!(lookup(&bundle, "a.b.c").and_then(Value::as_str), Some("deep"));
    assert!(lookup(&bundle, "a.x.c").is_none());
}

// =============================================================
// Browser helpers (SSR no-ops)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_english_outside_browser() {
    save_preference(Locale::Ar);
    apply(Locale::Ar);
    assert_eq!(read_preference(), Locale::En);
}
