// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{
    env,
    fmt::{self, Write},
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::{field::Visit, Id, Level, Subscriber};
use tracing_core::Field;

use crate::environment::ENV_RUST_LOG;

struct StringVisitor<'a> {
    string: &'a mut String,
}

impl Visit for StringVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        // Writing into a String cannot fail
        let _ = if field.name() == "message" {
            write!(self.string, "{value:?} ")
        } else {
            write!(self.string, "{} = {:?}; ", field.name(), value)
        };
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let _ = if field.name() == "message" {
            write!(self.string, "{value} ")
        } else {
            write!(self.string, "{} = {}; ", field.name(), value)
        };
    }
}

#[derive(Debug, PartialEq, Eq)]
struct LogFilter {
    target: Option<String>,
    level: Option<Level>,
}

impl LogFilter {
    /// A filter level admits that level and everything more severe.
    fn matches(&self, metadata: &tracing::Metadata<'_>) -> bool {
        if let Some(level) = self.level {
            if *metadata.level() > level {
                return false;
            }
        }
        if let Some(target) = &self.target {
            if !metadata.target().starts_with(target.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Stderr subscriber driven by `RUST_LOG`. Without the variable nothing is
/// logged, so command output on stdout stays clean.
pub struct MinimalTracer {
    enabled: bool,
    filters: Vec<LogFilter>,
}

fn string_to_level(string: &str) -> Option<Level> {
    match string.trim().to_lowercase().as_str() {
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "warn" | "warning" => Some(Level::WARN),
        "trace" => Some(Level::TRACE),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// `level`, `target` or `target=level`, comma separated.
fn parse_filters(value: &str) -> Vec<LogFilter> {
    value
        .split(',')
        .map(str::trim)
        .filter(|filter| !filter.is_empty())
        .map(|filter| match filter.split_once('=') {
            Some((target, level)) => LogFilter {
                target: Some(target.to_string()),
                level: string_to_level(level),
            },
            None => match string_to_level(filter) {
                Some(level) => LogFilter {
                    target: None,
                    level: Some(level),
                },
                None => LogFilter {
                    target: Some(filter.to_string()),
                    level: None,
                },
            },
        })
        .collect()
}

impl MinimalTracer {
    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(value) => MinimalTracer {
                enabled: true,
                filters: parse_filters(&value),
            },
            None => MinimalTracer {
                enabled: false,
                filters: Vec::new(),
            },
        }
    }

    pub fn register() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let tracer = Self::from_env_value(env::var(ENV_RUST_LOG).ok());
        tracing::subscriber::set_global_default(tracer)
    }
}

static AUTO_ID: AtomicUsize = AtomicUsize::new(1);

impl Subscriber for MinimalTracer {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        if !self.enabled {
            return false;
        }
        self.filters.is_empty() || self.filters.iter().any(|filter| filter.matches(metadata))
    }

    fn new_span(&self, _span: &tracing_core::span::Attributes<'_>) -> tracing_core::span::Id {
        Id::from_u64(AUTO_ID.fetch_add(1, Ordering::Relaxed) as u64)
    }

    fn record(&self, _span: &tracing_core::span::Id, _values: &tracing_core::span::Record<'_>) {}

    fn record_follows_from(
        &self,
        _span: &tracing_core::span::Id,
        _follows: &tracing_core::span::Id,
    ) {
    }

    fn event(&self, event: &tracing::Event<'_>) {
        let metadata = event.metadata();
        let mut text = String::new();
        event.record(&mut StringVisitor { string: &mut text });
        eprintln!("{} {}: {}", metadata.level(), metadata.target(), text.trim_end());
    }

    fn enter(&self, _span: &tracing_core::span::Id) {}

    fn exit(&self, _span: &tracing_core::span::Id) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        let filters = parse_filters("debug, timesync_widget=trace,timesync_cities");
        assert_eq!(
            filters,
            vec![
                LogFilter {
                    target: None,
                    level: Some(Level::DEBUG)
                },
                LogFilter {
                    target: Some("timesync_widget".into()),
                    level: Some(Level::TRACE)
                },
                LogFilter {
                    target: Some("timesync_cities".into()),
                    level: None
                },
            ]
        );
        assert!(parse_filters("").is_empty());
    }

    #[test]
    fn test_disabled_without_env() {
        let tracer = MinimalTracer::from_env_value(None);
        assert!(!tracer.enabled);
        let tracer = MinimalTracer::from_env_value(Some(String::new()));
        assert!(tracer.enabled);
        assert!(tracer.filters.is_empty());
    }

    #[test]
    fn test_level_names() {
        assert_eq!(string_to_level("WARNING"), Some(Level::WARN));
        assert_eq!(string_to_level("error"), Some(Level::ERROR));
        assert_eq!(string_to_level("verbose"), None);
    }
}
