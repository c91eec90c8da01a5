//! WhatsApp reminder deep links. Glue around the compliance scanner:
//! normalizes a stored phone number and builds a pre-filled `wa.me` URL.

use crate::scanner::UnpaidTenantGroup;

/// Country code prefixed to numbers stored in local format.
pub const DEFAULT_COUNTRY_CODE: &str = "92";

/// Normalizes a phone number for `wa.me`: strips spaces, dashes, and
/// parentheses; replaces a leading `0` with the country code; prefixes the
/// country code when missing; drops any `+`.
pub fn normalize_number(phone: &str, country_code: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let with_code = if let Some(rest) = cleaned.strip_prefix('0') {
        format!("{country_code}{rest}")
    } else if cleaned.starts_with(country_code) || cleaned.starts_with(&format!("+{country_code}")) {
        cleaned
    } else {
        format!("{country_code}{cleaned}")
    };
    with_code.replace('+', "")
}

/// Reminder text naming the tenant, their unpaid offices, and the month.
pub fn reminder_message(group: &UnpaidTenantGroup, month: &str) -> String {
    let offices = group
        .unpaid_offices
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Hello {}, this is a gentle reminder from JR Arcade Management that your rent and \
         water charges for Office(s) {} for the month of {} is due. Kindly clear the dues \
         at your earliest convenience. Thank you!",
        group.tenant_name, offices, month
    )
}

/// Full `wa.me` deep link with the percent-encoded reminder message.
pub fn reminder_link(group: &UnpaidTenantGroup, month: &str, country_code: &str) -> String {
    let number = normalize_number(&group.phone, country_code);
    let message = percent_encode(&reminder_message(group, month));
    format!("https://wa.me/{number}?text={message}")
}

/// Percent-encodes a query value, leaving the characters `encodeURIComponent`
/// leaves bare.
fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}
