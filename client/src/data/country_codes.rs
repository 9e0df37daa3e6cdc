//! International dial codes for the phone-number selector.

#[cfg(test)]
#[path = "country_codes_test.rs"]
mod country_codes_test;

/// Dial code preselected on the registration form.
pub const DEFAULT_DIAL_CODE: &str = "+1";

/// One selectable dial code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    /// Short country label shown next to the code.
    pub country: &'static str,
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "+1", country: "US" },
    CountryCode { code: "+44", country: "UK" },
    CountryCode { code: "+33", country: "FR" },
    CountryCode { code: "+49", country: "DE" },
    CountryCode { code: "+39", country: "IT" },
    CountryCode { code: "+34", country: "ES" },
    CountryCode { code: "+31", country: "NL" },
    CountryCode { code: "+46", country: "SE" },
    CountryCode { code: "+47", country: "NO" },
    CountryCode { code: "+45", country: "DK" },
    CountryCode { code: "+41", country: "CH" },
    CountryCode { code: "+43", country: "AT" },
    CountryCode { code: "+32", country: "BE" },
    CountryCode { code: "+351", country: "PT" },
    CountryCode { code: "+30", country: "GR" },
    CountryCode { code: "+48", country: "PL" },
    CountryCode { code: "+420", country: "CZ" },
    CountryCode { code: "+36", country: "HU" },
    CountryCode { code: "+40", country: "RO" },
    CountryCode { code: "+359", country: "BG" },
    CountryCode { code: "+385", country: "HR" },
    CountryCode { code: "+386", country: "SI" },
    CountryCode { code: "+421", country: "SK" },
    CountryCode { code: "+370", country: "LT" },
    CountryCode { code: "+371", country: "LV" },
    CountryCode { code: "+372", country: "EE" },
    CountryCode { code: "+358", country: "FI" },
    CountryCode { code: "+353", country: "IE" },
    CountryCode { code: "+356", country: "MT" },
    CountryCode { code: "+357", country: "CY" },
    CountryCode { code: "+377", country: "MC" },
    CountryCode { code: "+378", country: "SM" },
    CountryCode { code: "+379", country: "VA" },
    CountryCode { code: "+380", country: "UA" },
    CountryCode { code: "+381", country: "RS" },
    CountryCode { code: "+382", country: "ME" },
    CountryCode { code: "+383", country: "XK" },
    CountryCode { code: "+389", country: "MK" },
    CountryCode { code: "+355", country: "AL" },
    CountryCode { code: "+387", country: "BA" },
    CountryCode { code: "+7", country: "RU" },
    CountryCode { code: "+90", country: "TR" },
    CountryCode { code: "+20", country: "EG" },
    CountryCode { code: "+27", country: "ZA" },
    CountryCode { code: "+52", country: "MX" },
    CountryCode { code: "+55", country: "BR" },
    CountryCode { code: "+54", country: "AR" },
    CountryCode { code: "+56", country: "CL" },
    CountryCode { code: "+57", country: "CO" },
    CountryCode { code: "+51", country: "PE" },
    CountryCode { code: "+58", country: "VE" },
    CountryCode { code: "+593", country: "EC" },
    CountryCode { code: "+595", country: "PY" },
    CountryCode { code: "+598", country: "UY" },
    CountryCode { code: "+591", country: "BO" },
    CountryCode { code: "+86", country: "CN" },
    CountryCode { code: "+81", country: "JP" },
    CountryCode { code: "+82", country: "KR" },
    CountryCode { code: "+91", country: "IN" },
    CountryCode { code: "+92", country: "PK" },
    CountryCode { code: "+93", country: "AF" },
    CountryCode { code: "+94", country: "LK" },
    CountryCode { code: "+95", country: "MM" },
    CountryCode { code: "+98", country: "IR" },
    CountryCode { code: "+964", country: "IQ" },
    CountryCode { code: "+965", country: "KW" },
    CountryCode { code: "+966", country: "SA" },
    CountryCode { code: "+967", country: "YE" },
    CountryCode { code: "+968", country: "OM" },
    CountryCode { code: "+971", country: "AE" },
    CountryCode { code: "+972", country: "IL" },
    CountryCode { code: "+973", country: "BH" },
    CountryCode { code: "+974", country: "QA" },
    CountryCode { code: "+975", country: "BT" },
    CountryCode { code: "+976", country: "MN" },
    CountryCode { code: "+977", country: "NP" },
    CountryCode { code: "+60", country: "MY" },
    CountryCode { code: "+65", country: "SG" },
    CountryCode { code: "+66", country: "TH" },
    CountryCode { code: "+84", country: "VN" },
    CountryCode { code: "+62", country: "ID" },
    CountryCode { code: "+63", country: "PH" },
    CountryCode { code: "+61", country: "AU" },
    CountryCode { code: "+64", country: "NZ" },
];

/// Entry for `code`, or the first entry when the code is unknown.
pub fn find_or_default(code: &str) -> CountryCode {
    COUNTRY_CODES.iter().find(|c| c.code == code).copied().unwrap_or(COUNTRY_CODES[0])
}

/// Entries whose dial code contains `term`, or whose country contains it
/// case-insensitively. An empty term matches everything.
pub fn filter(term: &str) -> Vec<CountryCode> {
    let term = term.trim();
    let lowered = term.to_lowercase();
    COUNTRY_CODES
        .iter()
        .filter(|c| c.code.contains(term) || c.country.to_lowercase().contains(&lowered))
        .copied()
        .collect()
}
