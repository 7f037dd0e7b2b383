// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};

/// Accepted layouts for civil (offset-less) date/times.
const CIVIL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only input, read as midnight.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date plus wall-clock time, with second precision and no zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    inner: NaiveDateTime,
}

impl CivilDateTime {
    /// Build a civil date/time, rejecting out-of-range fields
    /// (month 13, February 30th, hour 24, second 60, ...).
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::InvalidDateTime(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
        })?;
        let inner = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
            Error::InvalidDateTime(format!(
                "{hour:02}:{minute:02}:{second:02} is not a wall-clock time"
            ))
        })?;
        Ok(Self { inner })
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub fn date(&self) -> NaiveDate {
        self.inner.date()
    }

    pub(crate) fn naive(&self) -> NaiveDateTime {
        self.inner
    }

    /// Drops sub-second precision, which civil time does not carry.
    pub(crate) fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            inner: naive.with_nanosecond(0).unwrap_or(naive),
        }
    }
}

impl FromStr for CivilDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        CIVIL_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(Self::from_naive)
            .ok_or_else(|| Error::InvalidDateTime(format!("cannot parse '{s}'")))
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}
