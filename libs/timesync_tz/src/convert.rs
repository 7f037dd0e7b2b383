// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Conversions between zones and the quantities derived from them.
//!
//! Offset difference and calendar-day difference are independent: a 13 hour
//! offset difference can leave both clocks on the same date or on different
//! dates depending on the wall-clock hour. Both are therefore read from the
//! two zoned values directly and never derived from one another.

use crate::civil::CivilDateTime;
use crate::error::Result;
use crate::instant::ZonedInstant;
use crate::zone::ZoneId;

/// The same instant seen from a source and a target zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionResult {
    pub source: ZonedInstant,
    pub target: ZonedInstant,
}

impl ConversionResult {
    /// See [`offset_difference_minutes`].
    pub fn offset_difference_minutes(&self) -> i32 {
        offset_difference_minutes(&self.source, &self.target)
    }

    /// See [`day_offset`].
    pub fn day_offset(&self) -> i64 {
        day_offset(&self.source, &self.target)
    }

    /// Swap source and target.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

/// Interpret `civil` as wall-clock time in `source` and show the same
/// instant in `target`. Zone ids are plain strings so URL-decoded values can
/// be passed straight through.
pub fn convert(civil: &CivilDateTime, source: &str, target: &str) -> Result<ConversionResult> {
    let source = ZoneId::parse(source)?;
    let target = ZoneId::parse(target)?;
    convert_zoned(civil, &source, &target)
}

pub fn convert_zoned(
    civil: &CivilDateTime,
    source: &ZoneId,
    target: &ZoneId,
) -> Result<ConversionResult> {
    let source = ZonedInstant::bind(civil, source)?;
    let target = source.in_zone(target);
    Ok(ConversionResult { source, target })
}

/// Like [`convert`], with the time given as an ISO-8601 string.
/// See [`ZonedInstant::parse`] for how offsets in the string are treated.
pub fn convert_iso(time: &str, source: &str, target: &str) -> Result<ConversionResult> {
    let source = ZoneId::parse(source)?;
    let target = ZoneId::parse(target)?;
    let source = ZonedInstant::parse(time, &source)?;
    let target = source.in_zone(&target);
    Ok(ConversionResult { source, target })
}

/// Convert one source time into several zones at once.
/// Fails on the first target that is not a valid zone.
pub fn convert_many<S: AsRef<str>>(
    civil: &CivilDateTime,
    source: &str,
    targets: &[S],
) -> Result<Vec<ConversionResult>> {
    let source = ZonedInstant::bind(civil, &ZoneId::parse(source)?)?;
    targets
        .iter()
        .map(|target| {
            let zone = ZoneId::parse(target.as_ref())?;
            Ok(ConversionResult {
                source,
                target: source.in_zone(&zone),
            })
        })
        .collect()
}

/// `target` offset minus `source` offset, in minutes. Positive means the
/// target clock is ahead. Zero is a distinct, meaningful answer: the two
/// clocks agree right now, even if the zones differ.
///
/// Both values must describe the same instant; offsets move with DST, so
/// reading them at different instants gives a meaningless answer.
pub fn offset_difference_minutes(source: &ZonedInstant, target: &ZonedInstant) -> i32 {
    target.utc_offset_minutes() - source.utc_offset_minutes()
}

/// Whole calendar days between the target's local date and the source's
/// local date. `1` means the target is already on the next day.
pub fn day_offset(source: &ZonedInstant, target: &ZonedInstant) -> i64 {
    (target.civil().date() - source.civil().date()).num_days()
}
