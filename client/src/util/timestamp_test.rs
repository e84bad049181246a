#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn display_timestamp_renders_iso_instant_as_utc() {
    assert_eq!(display_timestamp("2024-03-05T07:08:09.042Z"), "2024-03-05 07:08:09 UTC");
}

#[test]
fn display_timestamp_converts_offsets_to_utc() {
    assert_eq!(display_timestamp("2024-03-05T09:08:09+02:00"), "2024-03-05 07:08:09 UTC");
}

#[test]
fn display_timestamp_passes_through_garbage() {
    assert_eq!(display_timestamp("yesterday-ish"), "yesterday-ish");
    assert_eq!(display_timestamp(""), "");
}

#[test]
fn display_timestamp_passes_through_out_of_range_utc() {
    let raw = "9999-12-31T23:00:00-05:00";
    assert_eq!(display_timestamp(raw), raw);
}
