//! Flash messages.
//!
//! One-shot notices that survive a redirect: pushed onto a short-lived
//! HttpOnly cookie when a handler redirects, taken (and cleared) by the
//! next page render. The payload is JSON, hex-armored so the cookie value
//! stays within the token charset.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use views::layout::Flash;

const FLASH_COOKIE: &str = "msc_flash";

fn hex_encode(raw: &str) -> String {
    crate::services::session::bytes_to_hex(raw.as_bytes())
}

fn hex_decode(raw: &str) -> Option<String> {
    if raw.len() % 2 != 0 {
        return None;
    }
    let mut bytes = Vec::with_capacity(raw.len() / 2);
    for pair in raw.as_bytes().chunks(2) {
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        bytes.push(u8::try_from((hi << 4) | lo).ok()?);
    }
    String::from_utf8(bytes).ok()
}

fn encode(flashes: &[Flash]) -> String {
    let pairs: Vec<(&str, &str)> = flashes
        .iter()
        .map(|f| (f.category.as_str(), f.message.as_str()))
        .collect();
    hex_encode(&serde_json::to_string(&pairs).unwrap_or_else(|_| "[]".to_owned()))
}

fn decode(raw: &str) -> Vec<Flash> {
    let Some(json) = hex_decode(raw) else {
        return Vec::new();
    };
    let Ok(pairs) = serde_json::from_str::<Vec<(String, String)>>(&json) else {
        return Vec::new();
    };
    pairs
        .into_iter()
        .map(|(category, message)| Flash { category, message })
        .collect()
}

fn current(jar: &CookieJar) -> Vec<Flash> {
    jar.get(FLASH_COOKIE).map(|c| decode(c.value())).unwrap_or_default()
}

/// Append a flash message for the next rendered page.
#[must_use]
pub fn push(jar: CookieJar, category: &str, message: impl Into<String>) -> CookieJar {
    let mut flashes = current(&jar);
    flashes.push(Flash::new(category, message));
    let cookie = Cookie::build((FLASH_COOKIE, encode(&flashes)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Take all pending flash messages, clearing the cookie.
#[must_use]
pub fn take(jar: CookieJar) -> (CookieJar, Vec<Flash>) {
    let flashes = current(&jar);
    let clear = Cookie::build((FLASH_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO);
    (jar.add(clear), flashes)
}

#[cfg(test)]
#[path = "flash_test.rs"]
mod tests;
