use super::*;

#[test]
fn nav_links_cover_primary_sections() {
    let paths: Vec<&str> = NAV_LINKS.iter().map(|l| l.path).collect();
    assert_eq!(paths, vec!["/", "/about", "/services", "/contact"]);
}

#[test]
fn about_menu_lists_sub_pages() {
    let paths: Vec<&str> = ABOUT_MENU.iter().map(|l| l.path).collect();
    assert_eq!(paths, vec!["/about/about-hala", "/about/careers", "/about/news"]);
    assert!(ABOUT_MENU.iter().all(|l| l.translation_key.starts_with("header.")));
}

#[test]
fn mobile_list_skips_about() {
    let paths: Vec<&str> = mobile_main_links().map(|l| l.path).collect();
    assert_eq!(paths, vec!["/", "/services", "/contact"]);
}

#[test]
fn every_key_resolves_in_both_languages() {
    for link in NAV_LINKS.iter().chain(ABOUT_MENU) {
        for locale in crate::i18n::Locale::ALL {
            let text = crate::i18n::translate(locale, link.translation_key);
            assert_ne!(text, link.translation_key, "{locale:?} {}", link.translation_key);
        }
    }
}

#[test]
fn home_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/about"));
}

#[test]
fn section_is_active_on_sub_pages() {
    assert!(is_active("/about", "/about"));
    assert!(is_active("/about", "/about/careers"));
    assert!(!is_active("/about", "/aboutus"));
    assert!(!is_active("/services", "/contact"));
}
