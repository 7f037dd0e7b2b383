// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::fmt::Write;

use timesync_cities::City;
use timesync_widget::WidgetRow;

/// Left-aligned columns separated by two spaces. Trailing blanks trimmed.
fn table(lines: &[Vec<String>]) -> String {
    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            lines
                .iter()
                .filter_map(|line| line.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in lines {
        let mut text = String::new();
        for (cell, width) in line.iter().zip(&widths) {
            let _ = write!(text, "{cell:<width$}  ");
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

fn day_marker(days: i64) -> String {
    match days {
        0 => String::new(),
        1 | -1 => format!("({days:+} day)"),
        _ => format!("({days:+} days)"),
    }
}

pub fn rows_table(rows: &[WidgetRow]) -> String {
    let lines: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut line = vec![row.label.clone()];
            if let Some(date) = &row.date {
                line.push(date.clone());
            }
            line.push(row.time.clone());
            line.push(row.utc_offset.clone());
            if let Some(difference) = &row.difference {
                line.push(difference.clone());
            }
            if let Some(days) = row.day_offset {
                line.push(day_marker(days));
            }
            line
        })
        .collect();
    table(&lines)
}

pub fn cities_table(cities: &[&City]) -> String {
    let lines: Vec<Vec<String>> = cities
        .iter()
        .map(|city| {
            vec![
                city.id.to_string(),
                format!("{}, {}", city.name, city.country),
                city.zone.to_string(),
            ]
        })
        .collect();
    table(&lines)
}
