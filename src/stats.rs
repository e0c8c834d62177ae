//! Column accumulation and summary statistics for `crunch_data`.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::record::Record;

/// Growable column of one sensor's values across a run.
#[derive(Debug, Default)]
pub struct Series(Vec<f64>);

impl Series {
    pub fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arithmetic mean, `None` for an empty series.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.iter().sum::<f64>() / self.0.len() as f64)
    }

    /// Median of the sorted values, `None` for an empty series.
    ///
    /// Odd count: the middle element (index `n/2`, 0-based). Even count:
    /// the average of the two elements adjacent to the midpoint.
    pub fn median(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }

        let mut sorted = self.0.clone();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        if n % 2 == 1 {
            Some(sorted[n / 2])
        } else {
            Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        }
    }
}

/// Mean and median for one column.
#[derive(Debug, Serialize, PartialEq)]
pub struct ColumnSummary {
    pub mean: f64,
    pub median: f64,
}

impl ColumnSummary {
    fn from_series(series: &Series) -> Option<Self> {
        Some(ColumnSummary {
            mean: series.mean()?,
            median: series.median()?,
        })
    }
}

/// Summary of one day's records: the date label plus per-column stats.
///
/// Serializes to the inner JSON object; the date keys the outer object
/// (see [`crate::output`]).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// Hyphenated date of the first input row, e.g. `2015-02-03`.
    #[serde(skip)]
    pub date: String,
    pub air_temperature: ColumnSummary,
    pub barometric_pressure: ColumnSummary,
    pub wind_speed: ColumnSummary,
}

impl DaySummary {
    /// Accumulates all records into three series and summarizes them.
    ///
    /// Fails with a "no data" diagnostic when `records` is empty, rather
    /// than dividing by zero.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        let Some(first) = records.first() else {
            bail!("no data on standard input");
        };

        let mut air_temp = Series::default();
        let mut bar_press = Series::default();
        let mut wind_speed = Series::default();

        for r in records {
            air_temp.push(r.temperature);
            bar_press.push(r.pressure);
            wind_speed.push(r.wind_speed);
        }

        // Non-empty input, so every from_series below is Some.
        Ok(DaySummary {
            date: first.date.format("%Y-%m-%d").to_string(),
            air_temperature: ColumnSummary::from_series(&air_temp).unwrap(),
            barometric_pressure: ColumnSummary::from_series(&bar_press).unwrap(),
            wind_speed: ColumnSummary::from_series(&wind_speed).unwrap(),
        })
    }
}
