use super::*;

#[test]
fn table_starts_with_default_code() {
    assert_eq!(COUNTRY_CODES.len(), 84);
    assert_eq!(COUNTRY_CODES[0], CountryCode { code: DEFAULT_DIAL_CODE, country: "US" });
}

#[test]
fn find_returns_matching_entry() {
    assert_eq!(find_or_default("+966").country, "SA");
    assert_eq!(find_or_default("+44").country, "UK");
}

#[test]
fn find_unknown_code_falls_back_to_first() {
    assert_eq!(find_or_default("+0000").code, "+1");
    assert_eq!(find_or_default("").code, "+1");
}

#[test]
fn filter_by_code_fragment() {
    let found = filter("+96");
    assert!(!found.is_empty());
    assert!(found.iter().all(|c| c.code.contains("+96")));
    assert!(found.iter().any(|c| c.country == "SA"));
}

#[test]
fn filter_by_country_is_case_insensitive() {
    let upper = filter("SA");
    let lower = filter("sa");
    assert_eq!(upper, lower);
    assert!(lower.iter().any(|c| c.code == "+966"));
}

#[test]
fn filter_keeps_table_order() {
    let found = filter("+3");
    let positions: Vec<usize> = found
        .iter()
        .filter_map(|c| COUNTRY_CODES.iter().position(|x| x == c))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_or_blank_term_matches_everything() {
    assert_eq!(filter("").len(), COUNTRY_CODES.len());
    assert_eq!(filter("   ").len(), COUNTRY_CODES.len());
}

#[test]
fn unmatched_term_yields_nothing() {
    assert!(filter("zzz").is_empty());
}
