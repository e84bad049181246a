//! Human-readable rendering of ISO-8601 timestamps.
//!
//! In the browser the instant is shown in the user's locale and time zone.
//! Elsewhere it is shown as UTC. Input that is not RFC 3339 is shown as-is.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Render `raw` for display.
pub fn display_timestamp(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(parsed) => render(raw, parsed),
        Err(_) => raw.to_owned(),
    }
}

#[cfg(feature = "csr")]
fn render(raw: &str, _parsed: OffsetDateTime) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[cfg(not(feature = "csr"))]
fn render(raw: &str, parsed: OffsetDateTime) -> String {
    format_utc(parsed).unwrap_or_else(|| raw.to_owned())
}

/// `YYYY-MM-DD HH:MM:SS UTC`, or `None` when the UTC instant falls outside
/// the representable year range.
#[cfg_attr(feature = "csr", allow(dead_code))]
fn format_utc(instant: OffsetDateTime) -> Option<String> {
    let utc = instant.checked_to_offset(time::UtcOffset::UTC)?;
    Some(format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
    ))
}
