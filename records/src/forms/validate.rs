//! Field validators.
//!
//! Pure string checks shared by the record forms. Each returns the error
//! message to attach to the field, or `Ok(())`.

use url::Url;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_BAD_DATE: &str = "Please provide the date in yyyy-mm-dd format.";
pub const MSG_BAD_EMAIL: &str = "That email address does not look quite right.";
pub const MSG_BAD_URL: &str = "That URL does not look quite right.";
pub const MSG_NO_PROTOCOL: &str = "Please provide the protocol (e.g. \"http://\", \"mailto:\").";
pub const MSG_BAD_CHOICE: &str = "Not a valid choice.";
pub const MSG_NOT_IN_THESAURUS: &str = "Value must be drawn from the UNESCO Thesaurus.";

/// Accepts W3C-style dates: `yyyy`, `yyyy-mm`, or `yyyy-mm-dd`.
///
/// # Errors
///
/// Returns the date-format message for anything else.
pub fn w3c_date(value: &str) -> Result<(), String> {
    let parts: Vec<&str> = value.split('-').collect();
    let valid = match parts.as_slice() {
        [y] => is_digits(y, 4),
        [y, m] => is_digits(y, 4) && is_digits(m, 2),
        [y, m, d] => is_digits(y, 4) && is_digits(m, 2) && is_digits(d, 2),
        _ => false,
    };
    if valid { Ok(()) } else { Err(MSG_BAD_DATE.to_owned()) }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Accepts an absolute URL or a `mailto:` address.
///
/// # Errors
///
/// Returns a protocol, URL, or email message depending on what went wrong.
pub fn email_or_url(value: &str) -> Result<(), String> {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "mailto" => {
            if is_plausible_email(url.path()) {
                Ok(())
            } else {
                Err(MSG_BAD_EMAIL.to_owned())
            }
        }
        Ok(url) => {
            if url.host_str().is_some() {
                Ok(())
            } else {
                Err(MSG_BAD_URL.to_owned())
            }
        }
        Err(_) => {
            if value.contains(':') {
                Err(MSG_BAD_URL.to_owned())
            } else {
                Err(MSG_NO_PROTOCOL.to_owned())
            }
        }
    }
}

// local@domain.tld, no whitespace, at least one dot in the domain.
fn is_plausible_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.split_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !domain.chars().any(char::is_whitespace)
        && !host.contains('@')
        && !tld.contains('@')
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
