//! Text parsers for the two formats the tools deal with: the raw source
//! tables served by the data server and the five-field interchange lines.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveTime};

use crate::record::Record;

/// Marker the server embeds in its redirect body when a date has no data.
const ERROR_PAGE_MARKER: &str = "error.html";

/// One row of a raw source table: the 19-character date/time prefix split
/// into its parts, plus the trailing value.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSample {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub value: f64,
}

/// Returns true if the response body is the server's error page rather
/// than a data table (wrong or unavailable date).
pub fn is_error_page(body: &str) -> bool {
    body.contains(ERROR_PAGE_MARKER)
}

/// Parses one raw source-table body into samples.
///
/// Each line has the form `YYYY_MM_DD HH:MM:SS<value>`, CRLF-terminated.
/// Trailing carriage returns and blank lines are tolerated; anything else
/// malformed is an error naming the offending line.
pub fn parse_source_table(body: &str) -> Result<Vec<SourceSample>> {
    let mut samples = Vec::new();

    for (idx, raw) in body.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        samples.push(
            parse_source_line(line)
                .with_context(|| format!("source table line {}: {:?}", idx + 1, line))?,
        );
    }

    Ok(samples)
}

fn parse_source_line(line: &str) -> Result<SourceSample> {
    // 19-char prefix: "YYYY_MM_DD HH:MM:SS"
    if line.len() < 20 || !line.is_ascii() {
        bail!("line too short for a date/time prefix and a value");
    }

    let date = NaiveDate::parse_from_str(&line[..10], "%Y_%m_%d").context("bad date prefix")?;
    let time = NaiveTime::parse_from_str(&line[11..19], "%H:%M:%S").context("bad time prefix")?;
    let value = line[19..]
        .trim()
        .parse::<f64>()
        .context("bad numeric value")?;

    Ok(SourceSample { date, time, value })
}

/// Parses one interchange line into a [`Record`].
///
/// Expects exactly five whitespace-separated fields:
/// `YYYY_MM_DD HH:MM:SS <temperature> <pressure> <windSpeed>`.
pub fn parse_record(line: &str) -> Result<Record> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        bail!("expected 5 fields, found {}", fields.len());
    }

    let date = NaiveDate::parse_from_str(fields[0], "%Y_%m_%d")
        .with_context(|| format!("bad date field {:?}", fields[0]))?;
    let time = NaiveTime::parse_from_str(fields[1], "%H:%M:%S")
        .with_context(|| format!("bad time field {:?}", fields[1]))?;

    let mut values = [0.0f64; 3];
    for (v, field) in values.iter_mut().zip(&fields[2..]) {
        *v = field
            .parse()
            .with_context(|| format!("bad numeric field {:?}", field))?;
    }

    Ok(Record {
        date,
        time,
        temperature: values[0],
        pressure: values[1],
        wind_speed: values[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_valid_line() {
        let r = parse_record("2015_02_03 09:02:34 38.86 30.07 3.00").unwrap();

        assert_eq!(r.date, NaiveDate::from_ymd_opt(2015, 2, 3).unwrap());
        assert_eq!(r.time, NaiveTime::from_hms_opt(9, 2, 34).unwrap());
        assert_eq!(r.temperature, 38.86);
        assert_eq!(r.pressure, 30.07);
        assert_eq!(r.wind_speed, 3.0);
    }

    #[test]
    fn test_parse_record_tolerates_extra_spacing() {
        // The original server pads values with spaces; the parser splits on
        // any run of whitespace.
        let r = parse_record("2015_02_03 09:02:34 38.86  30.07   3.00").unwrap();
        assert_eq!(r.pressure, 30.07);
    }

    #[test]
    fn test_parse_record_wrong_field_count() {
        assert!(parse_record("2015_02_03 09:02:34 38.86 30.07").is_err());
        assert!(parse_record("").is_err());
    }

    #[test]
    fn test_parse_record_rejects_bad_number() {
        assert!(parse_record("2015_02_03 09:02:34 38.86 xx 3.00").is_err());
    }

    #[test]
    fn test_parse_record_rejects_bad_date() {
        assert!(parse_record("2015-02-03 09:02:34 38.86 30.07 3.00").is_err());
        assert!(parse_record("2015_13_03 09:02:34 38.86 30.07 3.00").is_err());
    }

    #[test]
    fn test_roundtrip_display_then_parse() {
        let original = parse_record("2015_02_03 09:02:34 38.86 30.07 3.00").unwrap();
        let reparsed = parse_record(&original.to_string()).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_parse_source_table_crlf_lines() {
        let body = "2015_02_03 09:02:34 38.86\r\n2015_02_03 09:03:34 38.90\r\n";
        let samples = parse_source_table(body).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].value, 38.86);
        assert_eq!(
            samples[1].time,
            NaiveTime::from_hms_opt(9, 3, 34).unwrap()
        );
    }

    #[test]
    fn test_parse_source_table_padded_values() {
        let body = "2015_02_03 09:02:34   30.07\r\n";
        let samples = parse_source_table(body).unwrap();
        assert_eq!(samples[0].value, 30.07);
    }

    #[test]
    fn test_parse_source_table_skips_blank_lines() {
        let body = "2015_02_03 09:02:34 38.86\r\n\r\n";
        assert_eq!(parse_source_table(body).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_source_table_malformed_line_is_error() {
        let err = parse_source_table("not a table at all\r\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_is_error_page() {
        assert!(is_error_page("<html>see /error.html</html>"));
        assert!(!is_error_page("2015_02_03 09:02:34 38.86\r\n"));
    }
}
