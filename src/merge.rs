//! Merges the three per-quantity source tables into interchange records.
//!
//! The server serves the tables as independent documents that are expected
//! to be row-aligned. That assumption is validated here: the tables must
//! have the same number of rows and matching date/time stamps row by row,
//! otherwise the merge fails with a misalignment diagnostic.

use anyhow::{Result, bail};

use crate::parser::{SourceSample, parse_source_table};
use crate::record::Record;

/// Parses and merges the three source-table bodies into records, one per
/// aligned row.
pub fn merge_tables(air_temp: &str, pressure: &str, wind_speed: &str) -> Result<Vec<Record>> {
    let air = parse_source_table(air_temp)?;
    let press = parse_source_table(pressure)?;
    let wind = parse_source_table(wind_speed)?;

    merge_samples(&air, &press, &wind)
}

fn merge_samples(
    air: &[SourceSample],
    press: &[SourceSample],
    wind: &[SourceSample],
) -> Result<Vec<Record>> {
    if air.len() != press.len() || air.len() != wind.len() {
        bail!(
            "misaligned source data: {} air temperature rows, {} pressure rows, {} wind rows",
            air.len(),
            press.len(),
            wind.len(),
        );
    }

    let mut records = Vec::with_capacity(air.len());

    for (i, ((a, p), w)) in air.iter().zip(press).zip(wind).enumerate() {
        let aligned = a.date == p.date
            && a.date == w.date
            && a.time == p.time
            && a.time == w.time;
        if !aligned {
            bail!(
                "misaligned source data at row {}: timestamps {} {} / {} {} / {} {}",
                i + 1,
                a.date,
                a.time,
                p.date,
                p.time,
                w.date,
                w.time,
            );
        }

        records.push(Record {
            date: a.date,
            time: a.time,
            temperature: a.value,
            pressure: p.value,
            wind_speed: w.value,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIR: &str = "2015_02_03 09:02:34 38.86\r\n2015_02_03 09:03:34 38.90\r\n";
    const PRESS: &str = "2015_02_03 09:02:34 30.07\r\n2015_02_03 09:03:34 30.08\r\n";
    const WIND: &str = "2015_02_03 09:02:34  3.00\r\n2015_02_03 09:03:34  4.50\r\n";

    #[test]
    fn test_merge_aligned_tables() {
        let records = merge_tables(AIR, PRESS, WIND).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].temperature, 38.86);
        assert_eq!(records[0].pressure, 30.07);
        assert_eq!(records[0].wind_speed, 3.0);
        assert_eq!(records[1].wind_speed, 4.5);
        assert_eq!(
            records[0].to_string(),
            "2015_02_03 09:02:34 38.86 30.07 3"
        );
    }

    #[test]
    fn test_merge_rejects_row_count_mismatch() {
        let short_wind = "2015_02_03 09:02:34  3.00\r\n";
        let err = merge_tables(AIR, PRESS, short_wind).unwrap_err();
        assert!(err.to_string().contains("misaligned source data"));
    }

    #[test]
    fn test_merge_rejects_timestamp_mismatch() {
        let shifted_press = "2015_02_03 09:02:34 30.07\r\n2015_02_03 09:04:00 30.08\r\n";
        let err = merge_tables(AIR, shifted_press, WIND).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_merge_empty_tables() {
        assert!(merge_tables("", "", "").unwrap().is_empty());
    }
}
