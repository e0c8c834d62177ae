//! Rendering of the daily summary as plain text or JSON.

use std::fmt::Write;

use anyhow::Result;

use crate::stats::{ColumnSummary, DaySummary};

/// Renders the indented plain-text report. Floats use six decimal places,
/// matching printf `%f`.
pub fn render_text(summary: &DaySummary) -> String {
    let sections = [
        ("Air Temperature", &summary.air_temperature),
        ("Barometric Pressure", &summary.barometric_pressure),
        ("Wind Speed", &summary.wind_speed),
    ];

    let mut out = String::new();
    writeln!(out, "{}", summary.date).unwrap();
    for (name, col) in sections {
        writeln!(out, "\t{name}").unwrap();
        writeln!(out, "\t\tMean\t{:.6}", col.mean).unwrap();
        writeln!(out, "\t\tMedian\t{:.6}", col.median).unwrap();
    }
    out
}

/// Renders the summary as pretty-printed JSON keyed by the date label.
pub fn render_json(summary: &DaySummary) -> Result<String> {
    let mut root = serde_json::Map::new();
    root.insert(summary.date.clone(), serde_json::to_value(summary)?);
    Ok(serde_json::to_string_pretty(&root)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> DaySummary {
        DaySummary {
            date: "2015-02-03".to_string(),
            air_temperature: ColumnSummary { mean: 20.0, median: 20.0 },
            barometric_pressure: ColumnSummary { mean: 30.0, median: 30.0 },
            wind_speed: ColumnSummary { mean: 3.0, median: 3.0 },
        }
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sample_summary());
        let expected = "2015-02-03\n\
                        \tAir Temperature\n\
                        \t\tMean\t20.000000\n\
                        \t\tMedian\t20.000000\n\
                        \tBarometric Pressure\n\
                        \t\tMean\t30.000000\n\
                        \t\tMedian\t30.000000\n\
                        \tWind Speed\n\
                        \t\tMean\t3.000000\n\
                        \t\tMedian\t3.000000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&sample_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let day = &value["2015-02-03"];
        assert_eq!(day["airTemperature"]["mean"], 20.0);
        assert_eq!(day["airTemperature"]["median"], 20.0);
        assert_eq!(day["barometricPressure"]["mean"], 30.0);
        assert_eq!(day["windSpeed"]["median"], 3.0);

        // Exactly the three camelCase column keys under the date.
        let keys: Vec<_> = day.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            ["airTemperature", "barometricPressure", "windSpeed"]
        );
    }
}
