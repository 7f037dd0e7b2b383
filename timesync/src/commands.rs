// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{future::Future, io, iter, time::Duration};

use clap::Args;
use timesync_cities::{resolve, search, Place};
use timesync_tz::{Error, FormatOptions, ZoneId, ZonedInstant};
use timesync_widget::{
    compare, embed_url, iframe_snippet, render_rows, Layout, Theme, WidgetConfig, WidgetRow,
    WidgetSize,
};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, trace, warn};

use crate::{
    environment::Config,
    output::{cities_table, rows_table},
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Use a 24-hour clock
    #[arg(long = "24h")]
    pub hour24: bool,

    /// Include seconds
    #[arg(long)]
    pub seconds: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl DisplayArgs {
    fn format_options(&self) -> FormatOptions {
        FormatOptions::from_flags(self.hour24, self.seconds)
    }
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Local time such as 2024-06-15T09:00, an RFC 3339 instant, or "now"
    pub time: String,

    /// City or IANA zone the time is read in [default: $TIMESYNC_REF or the system zone]
    #[arg(long)]
    pub from: Option<String>,

    /// Cities or IANA zones to convert to
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    pub to: Vec<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Debug, Args)]
pub struct NowArgs {
    /// Reference city or IANA zone [default: $TIMESYNC_REF or the system zone]
    #[arg(long = "ref")]
    pub reference: Option<String>,

    /// Cities or IANA zones to compare against the reference
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub to: Vec<String>,

    /// Refresh every second until interrupted
    #[arg(long)]
    pub watch: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Debug, Args)]
pub struct WidgetArgs {
    /// Widget URL or its query string, e.g. "cities=London,Tokyo&showSeconds=true"
    pub input: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct EmbedArgs {
    /// Cities or IANA zones shown by the widget
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    pub cities: Vec<String>,

    /// Reference city for time differences
    #[arg(long = "ref")]
    pub reference: Option<String>,

    /// Show each city's difference from the reference city
    #[arg(long)]
    pub time_diff: bool,

    /// Fixed display time; the widget shows the live time otherwise
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long, value_parser = parse_size, default_value = "medium")]
    pub size: WidgetSize,

    #[arg(long, value_parser = parse_theme, default_value = "light")]
    pub theme: Theme,

    #[arg(long, value_parser = parse_layout, default_value = "grid")]
    pub layout: Layout,

    #[arg(long)]
    pub hide_date: bool,

    #[arg(long)]
    pub seconds: bool,

    /// Use a 12-hour clock
    #[arg(long = "12h")]
    pub hour12: bool,

    /// Site the widget is served from [default: $TIMESYNC_ORIGIN]
    #[arg(long)]
    pub origin: Option<String>,
}

#[derive(Debug, Args)]
pub struct CitiesArgs {
    /// Name, country, country code, zone or alias fragment
    pub query: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ZonesArgs {
    /// Case-insensitive substring filter
    pub filter: Option<String>,
}

fn parse_size(value: &str) -> Result<WidgetSize, String> {
    value
        .parse()
        .map_err(|_| format!("unknown size '{value}' (small, medium, large, full)"))
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    match value.parse() {
        Ok(Theme::System) | Err(_) => Err(format!("unknown theme '{value}' (light, dark)")),
        Ok(theme) => Ok(theme),
    }
}

fn parse_layout(value: &str) -> Result<Layout, String> {
    value
        .parse()
        .map_err(|_| format!("unknown layout '{value}' (grid, list)"))
}

/// Unlike widget URLs, the command line rejects unknown places outright.
fn resolve_place(token: &str) -> Result<Place, Error> {
    resolve(token).ok_or_else(|| Error::InvalidZone(token.trim().to_string()))
}

fn resolve_places(tokens: &[String]) -> Result<Vec<Place>, Error> {
    tokens.iter().map(|token| resolve_place(token)).collect()
}

fn render(rows: &[WidgetRow], json: bool) -> Result<String, BoxError> {
    if json {
        let mut out = serde_json::to_string_pretty(rows)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(rows_table(rows))
    }
}

/// Rows for `reference` followed by `targets`, all at `instant`.
fn comparison(
    reference: &Place,
    targets: &[String],
    instant: &ZonedInstant,
    display: &DisplayArgs,
) -> Result<String, BoxError> {
    let places: Vec<Place> = iter::once(reference.clone())
        .chain(resolve_places(targets)?)
        .collect();
    let rows = compare(&places, Some(reference), instant, &display.format_options(), true)?;
    render(&rows, display.json)
}

pub fn convert(config: &Config, args: &ConvertArgs) -> Result<String, BoxError> {
    let source = match &args.from {
        Some(token) => resolve_place(token)?,
        None => config.reference.clone(),
    };
    let instant = if args.time.trim().eq_ignore_ascii_case("now") {
        ZonedInstant::now(&source.zone)
    } else {
        ZonedInstant::parse(&args.time, &source.zone)?
    };
    debug!(source = %source.zone, %instant, "converting");
    comparison(&source, &args.to, &instant, &args.display)
}

pub fn now(config: &Config, args: &NowArgs) -> Result<String, BoxError> {
    let reference = match &args.reference {
        Some(token) => resolve_place(token)?,
        None => config.reference.clone(),
    };
    let instant = ZonedInstant::now(&reference.zone);
    comparison(&reference, &args.to, &instant, &args.display)
}

pub fn widget(args: &WidgetArgs) -> Result<String, BoxError> {
    let config = WidgetConfig::parse(&args.input)?;
    let rows = render_rows(&config, &ZonedInstant::now(&ZoneId::utc()))?;
    if rows.is_empty() && !args.json {
        return Ok("No cities to display\n".to_string());
    }
    render(&rows, args.json)
}

pub fn embed(config: &Config, args: &EmbedArgs) -> Result<String, BoxError> {
    let mut widget = WidgetConfig {
        cities: resolve_places(&args.cities)?,
        reference: args.reference.as_deref().map(resolve_place).transpose()?,
        time: None,
        theme: args.theme,
        size: args.size,
        layout: args.layout,
        show_time_diff: args.time_diff,
        show_date: !args.hide_date,
        show_seconds: args.seconds,
        use_24_hour: !args.hour12,
    };
    if let Some(time) = &args.time {
        widget.time = Some(ZonedInstant::parse(time, &widget.anchor_zone())?);
    }
    if widget.cities.len() > widget.size.max_cities() {
        debug!(
            size = widget.size.as_str(),
            max = widget.size.max_cities(),
            "widget will only show the first cities"
        );
    }

    let origin = args.origin.as_deref().unwrap_or(&config.origin);
    let url = embed_url(origin, &widget)?;
    let html = iframe_snippet(origin, &widget)?;
    Ok(format!("{url}\n\n{html}\n"))
}

pub fn cities(args: &CitiesArgs) -> Result<String, BoxError> {
    let hits = search(args.query.as_deref().unwrap_or_default());
    if args.json {
        let mut out = serde_json::to_string_pretty(&hits)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(cities_table(&hits))
}

pub fn zones(args: &ZonesArgs) -> String {
    let filter = args.filter.as_deref().unwrap_or_default().to_lowercase();
    ZoneId::list()
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&filter))
        .fold(String::new(), |mut out, name| {
            out.push_str(name);
            out.push('\n');
            out
        })
}

/// Call `tick` immediately and then once per `period` until `stop` resolves.
pub async fn watch<F, S>(period: Duration, mut tick: F, stop: S) -> Result<(), BoxError>
where
    F: FnMut() -> Result<(), BoxError>,
    S: Future<Output = ()>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(stop);
    loop {
        tokio::select! {
            _ = &mut stop => {
                trace!("watch stopped");
                return Ok(());
            },
            _ = ticker.tick() => tick()?,
        }
    }
}

/// Resolve when `signal` fires. If the listener fails to install, log it and
/// never resolve, leaving the process to be killed some other way.
pub async fn until_signal<S>(signal: S)
where
    S: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(%err, "unable to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
