// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    convert, day_offset, format_instant, offset_difference_minutes, CivilDateTime, Error,
    FormatOptions, ZoneId, ZonedInstant,
};

fn civil(s: &str) -> CivilDateTime {
    s.parse().unwrap()
}

#[test]
fn test_offset_read_at_same_instant() {
    // On 2024-03-15 New York is already on EDT while London is still on GMT,
    // so the gap is 4h rather than the usual 5h.
    let result = convert(&civil("2024-03-15T12:00:00"), "America/New_York", "Europe/London").unwrap();
    assert_eq!(result.source.utc_offset_minutes(), -240);
    assert_eq!(result.target.utc_offset_minutes(), 0);
    assert_eq!(result.offset_difference_minutes(), 240);

    // Two weeks later both are on summer time again
    let result = convert(&civil("2024-04-01T12:00:00"), "America/New_York", "Europe/London").unwrap();
    assert_eq!(result.offset_difference_minutes(), 300);
}

#[test]
fn test_southern_hemisphere_dst() {
    // Sydney observes DST in January (AEDT, UTC+11) but not in July (AEST, UTC+10)
    let jan = convert(&civil("2024-01-15T12:00:00"), "UTC", "Australia/Sydney").unwrap();
    assert_eq!(jan.target.utc_offset_minutes(), 660);
    let jul = convert(&civil("2024-07-15T12:00:00"), "UTC", "Australia/Sydney").unwrap();
    assert_eq!(jul.target.utc_offset_minutes(), 600);
}

#[test]
fn test_quarter_hour_zone() {
    let result = convert(&civil("2024-01-01T00:00:00"), "UTC", "Asia/Kathmandu").unwrap();
    assert_eq!(result.target.civil().to_string(), "2024-01-01T05:45:00");
    assert_eq!(result.offset_difference_minutes(), 345);
}

#[test]
fn test_free_functions_match_result_helpers() {
    let result = convert(&civil("2024-12-31T22:00:00"), "Europe/Paris", "Asia/Tokyo").unwrap();
    assert_eq!(
        offset_difference_minutes(&result.source, &result.target),
        result.offset_difference_minutes()
    );
    assert_eq!(day_offset(&result.source, &result.target), 1);
    assert_eq!(result.target.civil().to_string(), "2025-01-01T06:00:00");
}

#[test]
fn test_same_zone_is_identity() {
    let zone = ZoneId::parse("Europe/Madrid").unwrap();
    let source = ZonedInstant::bind(&civil("2024-08-01T10:15:30"), &zone).unwrap();
    let target = source.in_zone(&zone);
    assert_eq!(source, target);
    assert_eq!(offset_difference_minutes(&source, &target), 0);
    assert_eq!(day_offset(&source, &target), 0);
}

#[test]
fn test_format_converted_target() {
    let result = convert(&civil("2024-06-15T09:00:00"), "America/New_York", "Asia/Kolkata").unwrap();
    let opts = FormatOptions::from_flags(false, false);
    assert_eq!(format_instant(&result.target, &opts).unwrap(), "6:30 PM");
    let opts = FormatOptions::from_flags(true, true);
    assert_eq!(format_instant(&result.target, &opts).unwrap(), "18:30:00");
}

#[test]
fn test_errors_are_deterministic() {
    let first = convert(&civil("2024-06-15T09:00:00"), "Nowhere/City", "UTC").unwrap_err();
    let second = convert(&civil("2024-06-15T09:00:00"), "Nowhere/City", "UTC").unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "Invalid timezone: Nowhere/City");
    assert!(matches!(first, Error::InvalidZone(_)));
}
