// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use timesync_cities::Place;
use timesync_tz::{
    day_offset, format_date, format_instant, format_utc_offset, offset_difference_minutes,
    FormatOptions, OffsetDifference, ZonedInstant,
};

use crate::{config::WidgetConfig, Result};

/// One rendered city line of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetRow {
    pub label: String,
    pub zone: &'static str,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub utc_offset: String,
    /// Present only when a reference city is set and `showTimeDiff` is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_offset: Option<i64>,
}

/// Render the displayed cities at the config's fixed time, or at `now` when
/// the widget is live.
pub fn render_rows(config: &WidgetConfig, now: &ZonedInstant) -> Result<Vec<WidgetRow>> {
    let reference = config.reference.as_ref().filter(|_| config.show_time_diff);
    compare(
        config.displayed_cities(),
        reference,
        config.time.as_ref().unwrap_or(now),
        &config.format_options(),
        config.show_date,
    )
}

/// One row per place showing `instant` there. With a `reference`, each row
/// also carries its offset and calendar-day difference from that place,
/// both read at the same instant.
pub fn compare(
    places: &[Place],
    reference: Option<&Place>,
    instant: &ZonedInstant,
    options: &FormatOptions,
    show_date: bool,
) -> Result<Vec<WidgetRow>> {
    let reference = reference.map(|place| instant.in_zone(&place.zone));

    let mut rows = Vec::with_capacity(places.len());
    for place in places {
        let local = instant.in_zone(&place.zone);
        let date = if show_date {
            Some(format_date(&local)?)
        } else {
            None
        };
        let (difference, difference_minutes, days) = match &reference {
            Some(reference) => {
                let minutes = offset_difference_minutes(reference, &local);
                (
                    Some(OffsetDifference::from_minutes(minutes).to_string()),
                    Some(minutes),
                    Some(day_offset(reference, &local)),
                )
            },
            None => (None, None, None),
        };
        rows.push(WidgetRow {
            label: place.label.clone(),
            zone: place.zone.name(),
            time: format_instant(&local, options)?,
            date,
            utc_offset: format_utc_offset(local.utc_offset_minutes()),
            difference,
            difference_minutes,
            day_offset: days,
        });
    }
    Ok(rows)
}
