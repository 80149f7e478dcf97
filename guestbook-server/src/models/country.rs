//! Country inference from a phone number's dialing code

/// Dialing code → country, checked in order. First prefix match wins.
const DIALING_CODES: &[(&str, &str)] = &[
    ("+7", "Russia"),
    ("+1", "USA"),
    ("+44", "United Kingdom"),
    ("+86", "China"),
    ("+91", "India"),
];

/// Look up the country for a phone number by its leading dialing code.
///
/// Returns `None` when no known code prefixes the number.
///
/// # Example
/// ```
/// use guestbook_server::models::country_for_phone;
///
/// assert_eq!(country_for_phone("+71234567890"), Some("Russia"));
/// assert_eq!(country_for_phone("0800123456"), None);
/// ```
pub fn country_for_phone(phone: &str) -> Option<&'static str> {
    DIALING_CODES
        .iter()
        .find(|(code, _)| phone.starts_with(code))
        .map(|(_, country)| *country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(country_for_phone("+71234567890"), Some("Russia"));
        assert_eq!(country_for_phone("+19998887777"), Some("USA"));
        assert_eq!(country_for_phone("+442071234567"), Some("United Kingdom"));
        assert_eq!(country_for_phone("+8613800138000"), Some("China"));
        assert_eq!(country_for_phone("+919876543210"), Some("India"));
    }

    #[test]
    fn unknown_code() {
        assert_eq!(country_for_phone("+33123456789"), None);
        assert_eq!(country_for_phone("89991234567"), None);
        assert_eq!(country_for_phone(""), None);
    }

    #[test]
    fn prefix_must_lead() {
        assert_eq!(country_for_phone("00+7123"), None);
    }
}
