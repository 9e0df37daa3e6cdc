use super::*;

#[test]
fn gallery_has_eight_unique_venues() {
    assert_eq!(GALLERY_ITEMS.len(), 8);
    let mut ids: Vec<&str> = GALLERY_ITEMS.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[test]
fn captions_resolve_in_both_languages() {
    for item in GALLERY_ITEMS {
        for locale in crate::i18n::Locale::ALL {
            let key = item.name_key();
            assert_ne!(crate::i18n::translate(locale, &key), key);
        }
    }
}

#[test]
fn detail_path_uses_id() {
    assert_eq!(GALLERY_ITEMS[0].detail_path(), "/hotel/lobby");
}

#[test]
fn images_are_sized_unsplash_urls() {
    for item in GALLERY_ITEMS {
        assert!(item.image.starts_with("https://images.unsplash.com/photo-"));
        assert!(item.image.ends_with("&w=800&q=80"));
    }
}
