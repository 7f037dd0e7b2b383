// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Query-parameter contract between TimeSync pages and the conversion engine.
//!
//! An embedded widget is described entirely by its URL query
//! (`/embed?cities=London,Tokyo&ref=New+York&showTimeDiff=true`). This module
//! parses that query into a [`WidgetConfig`], turns it into display rows, and
//! regenerates the URL and `<iframe>` snippet from a config. The main page's
//! share link ([`ShareState`]) uses a separate, id-based query.

mod config;
mod embed;
mod rows;
mod share;

use thiserror::Error;

pub use config::{Layout, Theme, WidgetConfig, WidgetSize};
pub use embed::{embed_url, iframe_snippet, DEFAULT_ORIGIN};
pub use rows::{compare, render_rows, WidgetRow};
pub use share::ShareState;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Engine(#[from] timesync_tz::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
