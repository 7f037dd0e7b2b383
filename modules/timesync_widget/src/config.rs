// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{fmt, str::FromStr};

use serde::Serialize;
use timesync_cities::{resolve, Place};
use timesync_tz::{FormatOptions, ZoneId, ZonedInstant};
use tracing::{debug, trace};
use url::{form_urlencoded, Url};

use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preset widget dimensions. Each size also caps how many cities are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl WidgetSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
            WidgetSize::Full => "full",
        }
    }

    pub fn max_cities(&self) -> usize {
        match self {
            WidgetSize::Small => 2,
            WidgetSize::Medium => 4,
            WidgetSize::Large => 6,
            WidgetSize::Full => 8,
        }
    }

    /// Pixel width; `None` for the responsive full-width widget.
    pub fn width(&self) -> Option<u32> {
        match self {
            WidgetSize::Small => Some(320),
            WidgetSize::Medium => Some(520),
            WidgetSize::Large => Some(720),
            WidgetSize::Full => None,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            WidgetSize::Small => 200,
            WidgetSize::Medium => 280,
            WidgetSize::Large => 380,
            WidgetSize::Full => 220,
        }
    }

    /// e.g. `520×280`
    pub fn dimensions(&self) -> String {
        match self.width() {
            Some(width) => format!("{width}×{}", self.height()),
            None => format!("100%×{}", self.height()),
        }
    }
}

impl FromStr for WidgetSize {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            "full" => Ok(WidgetSize::Full),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::List => "list",
        }
    }
}

impl FromStr for Layout {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Layout::Grid),
            "list" => Ok(Layout::List),
            _ => Err(()),
        }
    }
}

/// Everything an embedded widget needs, decoded from its URL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub cities: Vec<Place>,
    pub reference: Option<Place>,
    /// Fixed display time; `None` means live.
    pub time: Option<ZonedInstant>,
    pub theme: Theme,
    pub size: WidgetSize,
    pub layout: Layout,
    pub show_time_diff: bool,
    pub show_date: bool,
    pub show_seconds: bool,
    pub use_24_hour: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            reference: None,
            time: None,
            theme: Theme::Light,
            size: WidgetSize::Medium,
            layout: Layout::Grid,
            show_time_diff: false,
            show_date: true,
            show_seconds: false,
            use_24_hour: true,
        }
    }
}

impl WidgetConfig {
    /// Parse a query string, with or without its leading `?`.
    ///
    /// Unknown parameters are ignored and unknown enum values fall back to
    /// their defaults. Cities that resolve neither to a directory entry nor
    /// to an IANA zone are dropped. A `time` that does not parse is an error.
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut config = Self::default();
        let mut time = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            trace!(%key, %value, "widget param");
            match key.as_ref() {
                "cities" => config.cities = resolve_list(&value),
                "ref" => {
                    config.reference = resolve(&value);
                    if config.reference.is_none() {
                        debug!(token = %value, "dropping unknown reference city");
                    }
                },
                "time" if !value.trim().is_empty() => time = Some(value.into_owned()),
                "theme" => config.theme = parse_or_default(&key, &value),
                "size" => config.size = parse_or_default(&key, &value),
                "layout" => config.layout = parse_or_default(&key, &value),
                "showTimeDiff" => config.show_time_diff = value == "true",
                "showDate" => config.show_date = value != "false",
                "showSeconds" => config.show_seconds = value == "true",
                "use24Hour" | "show24Hour" => config.use_24_hour = value != "false",
                _ => {},
            }
        }

        if config.theme == Theme::System {
            config.theme = Theme::Light;
        }
        if let Some(time) = time {
            config.time = Some(ZonedInstant::parse(&time, &config.anchor_zone())?);
        }
        Ok(config)
    }

    /// Parse the query part of a full widget URL.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        Self::from_query(url.query().unwrap_or_default())
    }

    /// Accepts either a full URL or a bare query string.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.contains("://") {
            Self::from_url(input)
        } else {
            Self::from_query(input)
        }
    }

    /// Zone a civil `time` parameter is read in: the reference city's, else UTC.
    pub fn anchor_zone(&self) -> ZoneId {
        self.reference
            .as_ref()
            .map(|place| place.zone)
            .unwrap_or_else(ZoneId::utc)
    }

    /// Cities actually rendered, capped by the widget size.
    pub fn displayed_cities(&self) -> &[Place] {
        let len = self.cities.len().min(self.size.max_cities());
        &self.cities[..len]
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::from_flags(self.use_24_hour, self.show_seconds)
    }
}

fn resolve_list(value: &str) -> Vec<Place> {
    value
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| {
            let place = resolve(token);
            if place.is_none() {
                debug!(token, "dropping unknown city");
            }
            place
        })
        .collect()
}

fn parse_or_default<T: FromStr + Default>(key: &str, value: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        debug!(key, value, "unknown value, using default");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::from_query("cities=London").unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.size, WidgetSize::Medium);
        assert_eq!(config.layout, Layout::Grid);
        assert!(!config.show_time_diff);
        assert!(config.show_date);
        assert!(!config.show_seconds);
        assert!(config.use_24_hour);
        assert!(config.time.is_none());
        assert!(config.reference.is_none());
    }

    #[test]
    fn test_cities_with_plus_and_case() {
        let config = WidgetConfig::from_query("?cities=new+york,TOKYO,New%2BDelhi").unwrap();
        let labels: Vec<_> = config.cities.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["New York", "Tokyo", "New Delhi"]);
    }

    #[test]
    fn test_unknown_cities_are_dropped() {
        let config = WidgetConfig::from_query("cities=London,Gotham,,Asia/Dubai").unwrap();
        let zones: Vec<_> = config.cities.iter().map(|p| p.zone.name()).collect();
        assert_eq!(zones, vec!["Europe/London", "Asia/Dubai"]);

        let config = WidgetConfig::from_query("cities=London&ref=Gotham").unwrap();
        assert!(config.reference.is_none());
    }

    #[test]
    fn test_flags() {
        let config = WidgetConfig::from_query(
            "showTimeDiff=true&showDate=false&showSeconds=true&use24Hour=false",
        )
        .unwrap();
        assert!(config.show_time_diff);
        assert!(!config.show_date);
        assert!(config.show_seconds);
        assert!(!config.use_24_hour);

        // Only the literal "true" switches opt-in flags on
        let config = WidgetConfig::from_query("showTimeDiff=1&showSeconds=yes").unwrap();
        assert!(!config.show_time_diff);
        assert!(!config.show_seconds);

        let config = WidgetConfig::from_query("show24Hour=false").unwrap();
        assert!(!config.use_24_hour);
    }

    #[test]
    fn test_enums_fall_back() {
        let config = WidgetConfig::from_query("theme=neon&size=huge&layout=list").unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.size, WidgetSize::Medium);
        assert_eq!(config.layout, Layout::List);

        let config = WidgetConfig::from_query("theme=system").unwrap();
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_time_read_in_reference_zone() {
        let config = WidgetConfig::from_query("ref=New+York&time=2024-06-15T09:00").unwrap();
        let time = config.time.unwrap();
        assert_eq!(time.zone().name(), "America/New_York");
        assert_eq!(time.timestamp(), 1718456400);

        // Without a reference a civil time is UTC
        let config = WidgetConfig::from_query("time=2024-06-15T13:00:00").unwrap();
        assert_eq!(config.time.unwrap().timestamp(), 1718456400);

        // An explicit offset wins over the reference zone
        let config =
            WidgetConfig::from_query("ref=Tokyo&time=2024-06-15T13:00:00Z").unwrap();
        assert_eq!(config.time.unwrap().timestamp(), 1718456400);
    }

    #[test]
    fn test_time_short_forms() {
        let config = WidgetConfig::from_query("cities=London&time=2024-06-15T13:00Z").unwrap();
        assert_eq!(config.time.unwrap().timestamp(), 1718456400);

        let config = WidgetConfig::from_query("ref=Tokyo&time=2024-06-15T09:00-04:00").unwrap();
        let time = config.time.unwrap();
        assert_eq!(time.timestamp(), 1718456400);
        assert_eq!(time.zone().name(), "Asia/Tokyo");

        // A bare date is midnight in the reference zone
        let config = WidgetConfig::from_query("ref=New+York&time=2024-06-15").unwrap();
        assert_eq!(config.time.unwrap().timestamp(), 1718424000);
    }

    #[test]
    fn test_invalid_time_is_an_error() {
        assert!(WidgetConfig::from_query("cities=London&time=yesterday").is_err());
    }

    #[test]
    fn test_from_url() {
        let config =
            WidgetConfig::parse("https://timesync.app/embed?cities=Paris&size=small").unwrap();
        assert_eq!(config.cities.len(), 1);
        assert_eq!(config.size, WidgetSize::Small);
        assert!(WidgetConfig::from_url("not a url").is_err());
    }

    #[test]
    fn test_displayed_cities_capped_by_size() {
        let config = WidgetConfig::from_query(
            "size=small&cities=London,Paris,Tokyo,Sydney,Dubai",
        )
        .unwrap();
        assert_eq!(config.cities.len(), 5);
        assert_eq!(config.displayed_cities().len(), 2);

        let config = WidgetConfig::from_query("size=full&cities=London").unwrap();
        assert_eq!(config.displayed_cities().len(), 1);
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(WidgetSize::Medium.dimensions(), "520×280");
        assert_eq!(WidgetSize::Full.dimensions(), "100%×220");
    }
}
