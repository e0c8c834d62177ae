//! Endpoint addresses for the Lake Pend Oreille data server.
//!
//! Addresses are built from named components instead of patching a template
//! string at fixed offsets. The host can be overridden with `LPO_BASE_URL`
//! for testing against a local server.

use anyhow::{Result, ensure};
use chrono::NaiveDate;

/// Default base URL of the Acoustic Research Dept. data server.
pub const DEFAULT_BASE_URL: &str = "http://lpo.dt.navy.mil";

/// The three measured quantities, in interchange column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    AirTemp,
    BarometricPress,
    WindSpeed,
}

impl Quantity {
    /// Path segment used by the server for this quantity.
    pub fn path_segment(self) -> &'static str {
        match self {
            Quantity::AirTemp => "Air_Temp",
            Quantity::BarometricPress => "Barometric_Press",
            Quantity::WindSpeed => "Wind_Speed",
        }
    }
}

/// Returns the base URL, honoring the `LPO_BASE_URL` override.
pub fn base_url() -> String {
    std::env::var("LPO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Validates a `YYYYMMDD` command-line date argument.
///
/// The argument must be exactly 8 ASCII digits naming a real calendar
/// date. Validation happens before any network access.
pub fn parse_cli_date(arg: &str) -> Result<NaiveDate> {
    ensure!(
        arg.len() == 8 && arg.bytes().all(|b| b.is_ascii_digit()),
        "improper date format: use YYYYMMDD"
    );

    NaiveDate::parse_from_str(arg, "%Y%m%d")
        .map_err(|_| anyhow::anyhow!("{arg} is not a valid calendar date"))
}

/// Underscore-delimited date label, `YYYY_MM_DD`, as used both in the
/// server paths and in the interchange rows.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y_%m_%d").to_string()
}

/// Builds the document URL for one quantity on one date:
/// `<base>/data/DM/<year>/<YYYY_MM_DD>/<segment>`.
pub fn series_url(base: &str, date: NaiveDate, quantity: Quantity) -> String {
    format!(
        "{}/data/DM/{}/{}/{}",
        base,
        date.format("%Y"),
        date_label(date),
        quantity.path_segment(),
    )
}
