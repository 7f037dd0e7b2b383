// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::env;

use timesync_cities::{resolve, Place};
use timesync_tz::ZoneId;
use timesync_widget::DEFAULT_ORIGIN;
use tracing::warn;

//log
pub const ENV_RUST_LOG: &str = "RUST_LOG";

//embed
pub const ENV_TIMESYNC_ORIGIN: &str = "TIMESYNC_ORIGIN";

//conversion
pub const ENV_TIMESYNC_REF: &str = "TIMESYNC_REF";

/// Settings taken from the environment. Command-line flags win over these.
#[derive(Debug, Clone)]
pub struct Config {
    pub origin: String,
    pub reference: Place,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(env::var(ENV_TIMESYNC_ORIGIN).ok(), env::var(ENV_TIMESYNC_REF).ok())
    }

    fn from_values(origin: Option<String>, reference: Option<String>) -> Self {
        let origin = origin
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

        let reference = match reference.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => resolve(token).unwrap_or_else(|| {
                warn!(token, "{ENV_TIMESYNC_REF} is not a known city or zone, using system zone");
                system_place()
            }),
            _ => system_place(),
        };

        Self { origin, reference }
    }
}

fn system_place() -> Place {
    let zone = ZoneId::system();
    Place {
        label: zone.name().to_string(),
        zone,
        city: None,
    }
}
