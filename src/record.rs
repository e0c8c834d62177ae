//! The interchange record passed between `fetch_data` and `crunch_data`.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// One aligned sample: date, time of day, and the three sensor values.
///
/// `Display` renders the five-field interchange line consumed by
/// `crunch_data`:
///
/// ```text
/// 2015_02_03 09:02:34 38.86 30.07 3.00
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub temperature: f64,
    pub pressure: f64,
    pub wind_speed: f64,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.date.format("%Y_%m_%d"),
            self.time.format("%H:%M:%S"),
            self.temperature,
            self.pressure,
            self.wind_speed,
        )
    }
}
