// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Timezone conversion engine for TimeSync.
//!
//! Everything in this crate is a pure function of its inputs: there is no
//! shared state, no I/O and no notion of "now" beyond [`ZonedInstant::now`],
//! which simply reads the system clock for the caller.
//!
//! # Model
//!
//! - [`CivilDateTime`] is a calendar date and wall-clock time with no zone.
//! - [`ZoneId`] is a validated IANA identifier backed by the tz database.
//! - [`ZonedInstant`] binds the two into a point on the universal timeline.
//!
//! Binding a civil time to a zone follows one policy everywhere:
//!
//! - A time inside a DST gap (clocks jumped forward) is moved forward to the
//!   first valid instant after the gap.
//! - A time inside a DST overlap (clocks fell back) resolves to the earlier
//!   of the two occurrences.
//!
//! # Example
//!
//! ```
//! use timesync_tz::{convert, CivilDateTime};
//!
//! let civil = CivilDateTime::new(2024, 6, 15, 9, 0, 0).unwrap();
//! let result = convert(&civil, "America/New_York", "Asia/Kolkata").unwrap();
//!
//! assert_eq!(result.target.civil().to_string(), "2024-06-15T18:30:00");
//! assert_eq!(result.offset_difference_minutes(), 570);
//! assert_eq!(result.day_offset(), 0);
//! ```

mod civil;
mod convert;
mod error;
mod format;
mod instant;
mod zone;

pub use civil::CivilDateTime;
pub use convert::{
    convert, convert_iso, convert_many, convert_zoned, day_offset, offset_difference_minutes,
    ConversionResult,
};
pub use error::{Error, Result};
pub use format::{
    format_date, format_instant, format_offset_difference, format_utc_offset, FormatOptions,
    HourCycle, OffsetDifference,
};
pub use instant::ZonedInstant;
pub use zone::ZoneId;

#[cfg(test)]
mod tests;
