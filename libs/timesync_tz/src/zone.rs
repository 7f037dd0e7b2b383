// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Validated IANA zone identifiers.
//!
//! The engine never interprets the identifier itself: resolution and offset
//! rules are delegated entirely to the tz database shipped with `chrono-tz`.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::{Error, Result};

/// An IANA timezone identifier known to the tz database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(Tz);

impl ZoneId {
    /// Parse an identifier such as `"Asia/Kolkata"`.
    ///
    /// Matching is exact; an unknown identifier is an error and is never
    /// replaced by UTC or by the host zone.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        name.parse::<Tz>()
            .map(Self)
            .map_err(|_| Error::InvalidZone(name.to_string()))
    }

    pub fn utc() -> Self {
        Self(chrono_tz::UTC)
    }

    /// The zone the host is configured with, or UTC when it cannot be
    /// determined or is unknown to the tz database.
    pub fn system() -> Self {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| Self::parse(&name).ok())
            .unwrap_or_else(Self::utc)
    }

    /// The canonical IANA name of this zone.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Every identifier known to the tz database, sorted by name.
    pub fn list() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn tz(&self) -> Tz {
        self.0
    }
}

impl From<Tz> for ZoneId {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZoneId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
