// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

use thiserror::Error;

/// Every failure the engine can report.
///
/// Errors are a deterministic function of the input, so none of them is worth
/// retrying: callers should surface them to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The identifier is not a zone known to the tz database.
    #[error("Invalid timezone: {0}")]
    InvalidZone(String),

    /// The civil fields do not describe a real calendar date and time.
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Formatting failed. Unreachable for instants built by this crate.
    #[error("Unable to format instant: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Error::Format(err.to_string())
    }
}
