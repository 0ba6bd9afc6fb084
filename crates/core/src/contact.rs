//! Contact link builders

/// `tel:` link with separators stripped
///
/// Keeps the digits and a leading `+`.
///
/// ```
/// use delta_core::contact::tel_href;
///
/// assert_eq!(tel_href("03-1234567"), "tel:031234567");
/// assert_eq!(tel_href("+972 (3) 123-4567"), "tel:+97231234567");
/// ```
#[must_use]
pub fn tel_href(phone: &str) -> String {
    let trimmed = phone.trim();
    let plus = if trimmed.starts_with('+') { "+" } else { "" };
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{plus}{digits}")
}

#[must_use]
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Israeli country code used for `wa.me` links
pub const COUNTRY_CODE: &str = "972";

/// `wa.me` chat link for a phone number
///
/// `wa.me` only takes international numbers, so a local number's trunk `0`
/// is replaced with [`COUNTRY_CODE`].
///
/// ```
/// use delta_core::contact::whatsapp_href;
///
/// assert_eq!(whatsapp_href("050-1234567"), "https://wa.me/972501234567");
/// assert_eq!(whatsapp_href("+972 50 1234567"), "https://wa.me/972501234567");
/// ```
#[must_use]
pub fn whatsapp_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let international = if phone.trim().starts_with('+') {
        digits
    } else {
        digits
            .strip_prefix('0')
            .map_or_else(|| digits.clone(), |local| format!("{COUNTRY_CODE}{local}"))
    };
    format!("https://wa.me/{international}")
}
