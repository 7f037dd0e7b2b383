// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use timesync_cities::{by_id, City};
use timesync_tz::{ZoneId, ZonedInstant};
use tracing::debug;
use url::{form_urlencoded, Url};

use crate::{config::Theme, Result};

/// Comparison state behind the main page's share link.
///
/// Unlike the widget query this one names cities by id
/// (`?ref=new-york&targets=london,tokyo&format=24h`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareState {
    pub reference: Option<&'static City>,
    pub targets: Vec<&'static City>,
    /// Fixed comparison time; `None` follows the current time.
    pub time: Option<ZonedInstant>,
    pub show_24_hour: bool,
    pub theme: Theme,
    pub compact: bool,
}

impl Default for ShareState {
    fn default() -> Self {
        Self {
            reference: by_id("new-york"),
            targets: ["london", "tokyo"].into_iter().filter_map(by_id).collect(),
            time: None,
            show_24_hour: false,
            theme: Theme::System,
            compact: false,
        }
    }
}

impl ShareState {
    /// Adds `city` unless it is already a target.
    pub fn add_target(&mut self, city: &'static City) -> bool {
        if self.targets.iter().any(|target| target.id == city.id) {
            return false;
        }
        self.targets.push(city);
        true
    }

    pub fn remove_target(&mut self, id: &str) {
        self.targets.retain(|target| target.id != id);
    }

    /// The first target becomes the reference and the old reference takes
    /// its place. No-op without a reference or targets.
    pub fn swap(&mut self) {
        if let (Some(reference), Some(first)) = (self.reference, self.targets.first_mut()) {
            self.reference = Some(*first);
            *first = reference;
        }
    }

    pub fn to_url(&self, origin: &str) -> Result<Url> {
        let mut url = Url::parse(origin)?;
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut query = url.query_pairs_mut();
            if let Some(reference) = self.reference {
                query.append_pair("ref", reference.id);
            }
            if !self.targets.is_empty() {
                let ids: Vec<_> = self.targets.iter().map(|city| city.id).collect();
                query.append_pair("targets", &ids.join(","));
            }
            if let Some(time) = &self.time {
                query.append_pair("time", &time.to_rfc3339());
            }
            if self.show_24_hour {
                query.append_pair("format", "24h");
            }
            if self.theme != Theme::System {
                query.append_pair("theme", self.theme.as_str());
            }
            if self.compact {
                query.append_pair("compact", "true");
            }
        }
        // No parameters at all: drop the dangling `?`
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    /// Apply a share link on top of the default state. Parameters that are
    /// missing or unusable leave the corresponding default untouched.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        let mut time = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "ref" => match by_id(&value) {
                    Some(city) => state.reference = Some(city),
                    None => debug!(id = %value, "unknown reference city id"),
                },
                "targets" => {
                    state.targets = value
                        .split(',')
                        .filter_map(|id| {
                            let city = by_id(id);
                            if city.is_none() {
                                debug!(id, "unknown target city id");
                            }
                            city
                        })
                        .collect();
                },
                "time" => time = Some(value.into_owned()),
                "format" => state.show_24_hour = value == "24h",
                "theme" => match value.as_ref() {
                    "light" => state.theme = Theme::Light,
                    "dark" => state.theme = Theme::Dark,
                    _ => {},
                },
                "compact" => state.compact = value == "true",
                _ => {},
            }
        }

        if let Some(time) = time {
            let zone = state
                .reference
                .and_then(|city| city.zone_id().ok())
                .unwrap_or_else(ZoneId::utc);
            match ZonedInstant::parse(&time, &zone) {
                Ok(instant) => state.time = Some(instant),
                Err(err) => debug!(%err, "ignoring share link time"),
            }
        }
        state
    }
}
