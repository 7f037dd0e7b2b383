// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Deterministic, locale-free rendering of zoned values.
//!
//! Nothing here guesses a locale: the only switches are the ones the caller
//! passes in [`FormatOptions`].

use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::Result;
use crate::instant::ZonedInstant;

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 12-hour (`h:mm AM`) or 24-hour (`HH:mm`) clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourCycle {
    H12,
    #[default]
    H24,
}

impl FromStr for HourCycle {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "12" | "12h" | "h12" => Ok(HourCycle::H12),
            "24" | "24h" | "h24" => Ok(HourCycle::H24),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub hour_cycle: HourCycle,
    pub include_seconds: bool,
}

impl FormatOptions {
    /// Build options from the widget's `show24Hour` / `showSeconds` flags.
    pub fn from_flags(show_24_hour: bool, show_seconds: bool) -> Self {
        Self {
            hour_cycle: if show_24_hour {
                HourCycle::H24
            } else {
                HourCycle::H12
            },
            include_seconds: show_seconds,
        }
    }
}

/// Push a number, zero-padded to two digits when asked.
#[inline]
fn push_number(out: &mut String, value: u32, two_digit: bool) {
    let mut buf = itoa::Buffer::new();
    if two_digit && value < 10 {
        out.push('0');
    }
    out.push_str(buf.format(value));
}

/// Render the wall-clock part of `instant`:
/// `HH:mm[:ss]` on a 24-hour clock, `h:mm[:ss] AM|PM` on a 12-hour clock.
pub fn format_instant(instant: &ZonedInstant, options: &FormatOptions) -> Result<String> {
    let civil = instant.civil();
    let mut out = String::with_capacity(11);

    let hour = civil.hour();
    match options.hour_cycle {
        HourCycle::H24 => push_number(&mut out, hour, true),
        HourCycle::H12 => {
            let hour12 = match hour {
                0 => 12,
                13..=23 => hour - 12,
                _ => hour,
            };
            push_number(&mut out, hour12, false);
        },
    }
    out.push(':');
    push_number(&mut out, civil.minute(), true);
    if options.include_seconds {
        out.push(':');
        push_number(&mut out, civil.second(), true);
    }
    if options.hour_cycle == HourCycle::H12 {
        out.push_str(if hour < 12 { " AM" } else { " PM" });
    }

    Ok(out)
}

/// Short local date, e.g. `Sat, Jun 15`.
pub fn format_date(instant: &ZonedInstant) -> Result<String> {
    let date = instant.civil().date();
    let mut out = String::with_capacity(11);
    write!(
        out,
        "{}, {} {}",
        weekday_short(date),
        MONTH_NAMES_SHORT[date.month0() as usize],
        date.day()
    )?;
    Ok(out)
}

/// `UTC+5:30`, `UTC-4`, `UTC+0`.
pub fn format_utc_offset(offset_minutes: i32) -> String {
    let mut out = String::with_capacity(9);
    out.push_str("UTC");
    out.push(if offset_minutes < 0 { '-' } else { '+' });
    let abs = offset_minutes.unsigned_abs();
    push_number(&mut out, abs / 60, false);
    if abs % 60 != 0 {
        out.push(':');
        push_number(&mut out, abs % 60, true);
    }
    out
}

/// Same as `OffsetDifference::from_minutes(minutes).to_string()`.
pub fn format_offset_difference(minutes: i32) -> String {
    OffsetDifference::from_minutes(minutes).to_string()
}

/// How far a target clock is from a source clock.
///
/// The zero case is its own variant so that "same offset" is never shown
/// as `+0h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetDifference {
    Same,
    Ahead(u32),
    Behind(u32),
}

impl OffsetDifference {
    pub fn from_minutes(minutes: i32) -> Self {
        match minutes {
            0 => OffsetDifference::Same,
            m if m > 0 => OffsetDifference::Ahead(m.unsigned_abs()),
            m => OffsetDifference::Behind(m.unsigned_abs()),
        }
    }

    /// Signed minutes, positive when ahead.
    pub fn minutes(&self) -> i32 {
        match *self {
            OffsetDifference::Same => 0,
            OffsetDifference::Ahead(m) => m as i32,
            OffsetDifference::Behind(m) => -(m as i32),
        }
    }
}

impl fmt::Display for OffsetDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, minutes) = match *self {
            OffsetDifference::Same => return f.write_str("Same timezone"),
            OffsetDifference::Ahead(m) => ('+', m),
            OffsetDifference::Behind(m) => ('-', m),
        };
        write!(f, "{sign}{}h", minutes / 60)?;
        if minutes % 60 != 0 {
            write!(f, " {}m", minutes % 60)?;
        }
        Ok(())
    }
}

fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::CivilDateTime;
    use crate::zone::ZoneId;

    fn instant(h: u32, m: u32, s: u32) -> ZonedInstant {
        let civil = CivilDateTime::new(2024, 6, 15, h, m, s).unwrap();
        ZonedInstant::bind(&civil, &ZoneId::utc()).unwrap()
    }

    #[test]
    fn test_format_24h() {
        let opts = FormatOptions::from_flags(true, false);
        assert_eq!(format_instant(&instant(0, 5, 9), &opts).unwrap(), "00:05");
        assert_eq!(format_instant(&instant(18, 30, 0), &opts).unwrap(), "18:30");

        let opts = FormatOptions::from_flags(true, true);
        assert_eq!(format_instant(&instant(0, 5, 9), &opts).unwrap(), "00:05:09");
    }

    #[test]
    fn test_format_12h() {
        let opts = FormatOptions::from_flags(false, false);
        assert_eq!(format_instant(&instant(0, 5, 0), &opts).unwrap(), "12:05 AM");
        assert_eq!(format_instant(&instant(9, 0, 0), &opts).unwrap(), "9:00 AM");
        assert_eq!(format_instant(&instant(12, 0, 0), &opts).unwrap(), "12:00 PM");
        assert_eq!(format_instant(&instant(23, 59, 0), &opts).unwrap(), "11:59 PM");

        let opts = FormatOptions::from_flags(false, true);
        assert_eq!(format_instant(&instant(13, 4, 7), &opts).unwrap(), "1:04:07 PM");
    }

    #[test]
    fn test_hour_cycle_parse() {
        assert_eq!("12".parse::<HourCycle>().unwrap(), HourCycle::H12);
        assert_eq!("24".parse::<HourCycle>().unwrap(), HourCycle::H24);
        assert_eq!(" h12 ".parse::<HourCycle>(), Ok(HourCycle::H12));
        assert_eq!("13".parse::<HourCycle>(), Err(()));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&instant(9, 0, 0)).unwrap(), "Sat, Jun 15");
    }

    #[test]
    fn test_format_utc_offset() {
        assert_eq!(format_utc_offset(330), "UTC+5:30");
        assert_eq!(format_utc_offset(-240), "UTC-4");
        assert_eq!(format_utc_offset(0), "UTC+0");
        assert_eq!(format_utc_offset(-570), "UTC-9:30");
        assert_eq!(format_utc_offset(345), "UTC+5:45");
    }

    #[test]
    fn test_offset_difference_display() {
        assert_eq!(format_offset_difference(570), "+9h 30m");
        assert_eq!(format_offset_difference(-300), "-5h");
        assert_eq!(format_offset_difference(-30), "-0h 30m");
        assert_eq!(format_offset_difference(0), "Same timezone");
        assert_eq!(OffsetDifference::from_minutes(0), OffsetDifference::Same);
    }

    #[test]
    fn test_offset_difference_minutes_roundtrip() {
        for m in [-780, -570, -1, 0, 1, 45, 570, 840] {
            assert_eq!(OffsetDifference::from_minutes(m).minutes(), m);
        }
    }
}
