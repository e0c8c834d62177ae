//! CLI entry point for `fetch_data`.
//!
//! Fetches one day of air temperature, barometric pressure, and wind speed
//! readings from the Lake Pend Oreille data server and writes five-field
//! interchange rows to stdout, ready to pipe into `crunch_data`.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::Local;
use clap::Parser;
use lpo_weather::endpoints::{self, Quantity};
use lpo_weather::fetch::{BasicClient, fetch_text};
use lpo_weather::merge::merge_tables;
use lpo_weather::parser::is_error_page;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fetch_data")]
#[command(about = "Fetch Lake Pend Oreille sensor readings for one day", long_about = None)]
struct Cli {
    /// Date to fetch, YYYYMMDD. Defaults to today (results may be incomplete).
    #[arg(value_name = "YYYYMMDD")]
    date: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    lpo_weather::init_tracing();

    let cli = Cli::parse();

    // Validate the date before touching the network.
    let date = match cli.date {
        Some(arg) => endpoints::parse_cli_date(&arg)?,
        None => Local::now().date_naive(),
    };

    let base = endpoints::base_url();
    let client = BasicClient::new();

    info!(date = %date, base = %base, "Fetching sensor data");

    // The air temperature document is fetched first and gates the rest:
    // an unavailable date redirects every document to the error page.
    let air_url = endpoints::series_url(&base, date, Quantity::AirTemp);
    let air_body = fetch_text(&client, &air_url).await?;
    if is_error_page(&air_body) {
        bail!("web page error reported, confirm the date ({date}) is correct");
    }

    let press_url = endpoints::series_url(&base, date, Quantity::BarometricPress);
    let wind_url = endpoints::series_url(&base, date, Quantity::WindSpeed);
    let (press_body, wind_body) = tokio::try_join!(
        fetch_text(&client, &press_url),
        fetch_text(&client, &wind_url),
    )?;

    debug!(
        air_bytes = air_body.len(),
        press_bytes = press_body.len(),
        wind_bytes = wind_body.len(),
        "Documents received, merging"
    );

    let records = merge_tables(&air_body, &press_body, &wind_body)?;
    info!(rows = records.len(), "Tables merged");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        writeln!(out, "{record}")?;
    }

    Ok(())
}
