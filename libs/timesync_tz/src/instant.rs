// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::civil::CivilDateTime;
use crate::error::{Error, Result};
use crate::zone::ZoneId;

/// How far forward (in local minutes) a DST gap is searched before giving up.
/// The widest gap in the tz database is a full skipped day.
const MAX_GAP_MINUTES: i64 = 26 * 60;

/// Offset-carrying layouts accepted besides RFC 3339. `%#z` also takes `Z`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

/// A civil date/time bound to a zone: one unambiguous point in absolute time.
///
/// Equality requires both the instant and the zone to match; use
/// [`ZonedInstant::same_instant`] to compare absolute time only.
#[derive(Debug, Clone, Copy)]
pub struct ZonedInstant {
    inner: DateTime<Tz>,
}

impl PartialEq for ZonedInstant {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner && self.inner.timezone() == other.inner.timezone()
    }
}

impl Eq for ZonedInstant {}

impl Hash for ZonedInstant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
        self.inner.timezone().hash(state);
    }
}

impl ZonedInstant {
    /// Bind `civil` to `zone`.
    ///
    /// Civil times skipped by a forward DST transition move forward to the
    /// first valid instant after the gap. Civil times that occur twice
    /// resolve to the earlier occurrence.
    pub fn bind(civil: &CivilDateTime, zone: &ZoneId) -> Result<Self> {
        let tz = zone.tz();
        let naive = civil.naive();
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(Self { inner: dt }),
            LocalResult::Ambiguous(earlier, _later) => Ok(Self { inner: earlier }),
            LocalResult::None => first_instant_after_gap(&tz, naive)
                .map(|inner| Self { inner })
                .ok_or_else(|| {
                    Error::InvalidDateTime(format!("{civil} does not exist in {zone}"))
                }),
        }
    }

    /// The instant `secs` seconds after the Unix epoch, seen from `zone`.
    pub fn from_timestamp(secs: i64, zone: &ZoneId) -> Result<Self> {
        let utc = DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| Error::InvalidDateTime(format!("timestamp {secs} is out of range")))?;
        Ok(Self::from_utc(utc, zone))
    }

    /// The current instant, seen from `zone`.
    pub fn now(zone: &ZoneId) -> Self {
        Self::from_utc(Utc::now().with_nanosecond(0).unwrap_or_else(Utc::now), zone)
    }

    /// Parse an ISO-8601 string in the context of `zone`.
    ///
    /// With an explicit offset (`+05:30`, `Z`) the string names an absolute
    /// instant which is then shown in `zone`; seconds may be omitted. Without
    /// one it is civil time in `zone` and goes through [`ZonedInstant::bind`].
    /// A bare date means midnight civil time.
    pub fn parse(iso: &str, zone: &ZoneId) -> Result<Self> {
        let iso = iso.trim();
        let fixed = DateTime::parse_from_rfc3339(iso).ok().or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(iso, fmt).ok())
        });
        if let Some(fixed) = fixed {
            let utc = fixed.with_timezone(&Utc);
            return Ok(Self::from_utc(utc.with_nanosecond(0).unwrap_or(utc), zone));
        }
        let civil: CivilDateTime = iso.parse()?;
        Self::bind(&civil, zone)
    }

    /// The same instant, shown in another zone.
    pub fn in_zone(&self, zone: &ZoneId) -> Self {
        Self {
            inner: self.inner.with_timezone(&zone.tz()),
        }
    }

    pub fn civil(&self) -> CivilDateTime {
        CivilDateTime::from_naive(self.inner.naive_local())
    }

    pub fn zone(&self) -> ZoneId {
        ZoneId::from(self.inner.timezone())
    }

    /// Offset from UTC in effect at this instant, in minutes
    /// (positive east of Greenwich).
    pub fn utc_offset_minutes(&self) -> i32 {
        self.inner.offset().fix().local_minus_utc() / 60
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.inner.timestamp()
    }

    /// Whether both values name the same point in absolute time,
    /// regardless of zone.
    pub fn same_instant(&self, other: &ZonedInstant) -> bool {
        self.timestamp() == other.timestamp()
    }

    pub fn to_rfc3339(&self) -> String {
        self.inner.to_rfc3339()
    }

    fn from_utc(utc: DateTime<Utc>, zone: &ZoneId) -> Self {
        Self {
            inner: utc.with_timezone(&zone.tz()),
        }
    }
}

impl fmt::Display for ZonedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.to_rfc3339(), self.zone())
    }
}

fn exists_at(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&local).earliest()
}

/// Walk forward through local time until the wall clock exists again.
///
/// A coarse pass finds the first whole minute past the gap. The gap may end on
/// any second before that minute (LMT offsets carry seconds), so a second pass
/// walks the preceding minute one second at a time.
fn first_instant_after_gap(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    let start = naive.with_second(0)?;
    let coarse = (1..=MAX_GAP_MINUTES)
        .filter_map(|step| start.checked_add_signed(Duration::minutes(step)))
        .find(|candidate| exists_at(tz, *candidate).is_some())?;
    let floor = coarse
        .checked_sub_signed(Duration::seconds(59))?
        .max(naive);
    (0..60).find_map(|step| {
        let candidate = floor.checked_add_signed(Duration::seconds(step))?;
        if candidate > coarse {
            return None;
        }
        exists_at(tz, candidate)
    })
}
