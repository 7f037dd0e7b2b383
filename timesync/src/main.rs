// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

mod commands;
mod environment;
mod minimal_tracer;
mod output;

use std::{error::Error, io::Write, process::exit, time::Duration};

use clap::{Parser, Subcommand};
use commands::{BoxError, CitiesArgs, ConvertArgs, EmbedArgs, NowArgs, WidgetArgs, ZonesArgs};
use environment::Config;
use minimal_tracer::MinimalTracer;
use tracing::{error, trace};

#[derive(Parser)]
#[command(name = "timesync", version)]
#[command(about = "Compare wall-clock times across cities and timezones", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a local time from one place to others
    Convert(ConvertArgs),
    /// Show the current time in several places
    Now(NowArgs),
    /// Render an embed widget from its URL or query string
    Widget(WidgetArgs),
    /// Generate an embed URL and iframe snippet
    Embed(EmbedArgs),
    /// Search the city directory
    Cities(CitiesArgs),
    /// List IANA timezone identifiers
    Zones(ZonesArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    MinimalTracer::register()?;
    let cli = Cli::parse();
    let config = Config::from_env();
    trace!(origin = %config.origin, reference = %config.reference.zone, "loaded config");

    if let Err(err) = run(cli.command, &config).await {
        error!(%err, "command failed");
        eprintln!("{err}");
        exit(1);
    }
    Ok(())
}

async fn run(command: Command, config: &Config) -> Result<(), BoxError> {
    let out = match command {
        Command::Convert(args) => commands::convert(config, &args)?,
        Command::Now(args) if args.watch => {
            return commands::watch(
                Duration::from_secs(1),
                || {
                    let out = commands::now(config, &args)?;
                    // Clear the screen and home the cursor
                    print!("\x1b[2J\x1b[H{out}");
                    std::io::stdout().flush()?;
                    Ok(())
                },
                commands::until_signal(tokio::signal::ctrl_c()),
            )
            .await;
        },
        Command::Now(args) => commands::now(config, &args)?,
        Command::Widget(args) => commands::widget(&args)?,
        Command::Embed(args) => commands::embed(config, &args)?,
        Command::Cities(args) => commands::cities(&args)?,
        Command::Zones(args) => commands::zones(&args),
    };
    print!("{out}");
    Ok(())
}
