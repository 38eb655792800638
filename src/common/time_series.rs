use std::collections::BTreeMap;
use std::path::Path;

use crate::common::codec;
use crate::common::ops::FirstDifference;
use crate::common::stats;
use crate::common::time_point::{TimePoint, Timestamp, Value};
use crate::common::utils::{day_window, is_in_window, render_lines, round_price};
use crate::storage::{CsvStorage, Storage};
use crate::{Result, TicklineErr};

pub const DEFAULT_DELIMITER: char = ',';

/// The greatest single step of a series, stamped with the time of its later point.
#[derive(Clone, Debug, PartialEq)]
pub struct Increment {
    pub at: String,
    pub value: Value,
}

///
/// A named price series holding at most one price per timestamp, always time-ascending.
///
/// Prices are rounded to five decimal places once, when they enter the series.
/// Every argument that names a point in time is date text (`YYYY-MM-DD` or
/// `YYYY-MM-DD HH:MM:SS`, UTC); only file records and `insert_raw` take raw epoch seconds.
#[derive(Clone, Debug)]
pub struct TimeSeries {
    name: String,
    delimiter: char,
    observations: BTreeMap<Timestamp, Value>,
}

impl Default for TimeSeries {
    fn default() -> Self {
        TimeSeries {
            name: String::new(),
            delimiter: DEFAULT_DELIMITER,
            observations: BTreeMap::new(),
        }
    }
}

/// Two series are equal when they hold the same observations; name and delimiter are ignored.
impl PartialEq for TimeSeries {
    fn eq(&self, other: &Self) -> bool {
        self.observations == other.observations
    }
}

impl TimeSeries {
    pub fn new() -> Self {
        TimeSeries::default()
    }

    pub fn with_name(name: &str) -> Self {
        TimeSeries {
            name: name.to_string(),
            ..TimeSeries::default()
        }
    }

    /// Build from parallel vectors; later duplicates of a timestamp win.
    pub fn from_vecs(times: &[Timestamp], prices: &[Value], name: &str) -> Result<Self> {
        if times.len() != prices.len() {
            return Err(TicklineErr::ShapeMismatch(times.len(), prices.len()));
        }
        let mut series = TimeSeries::with_name(name);
        for (timestamp, price) in times.iter().zip(prices.iter()) {
            series.insert_raw(*timestamp, *price);
        }
        Ok(series)
    }

    pub fn from_time_points(name: &str, time_points: Vec<TimePoint>) -> Self {
        let mut series = TimeSeries::with_name(name);
        for tp in time_points {
            series.insert_raw(tp.timestamp, tp.value);
        }
        series
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        TimeSeries::from_file_with_delimiter(path, DEFAULT_DELIMITER)
    }

    pub fn from_file_with_delimiter<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Self> {
        CsvStorage::new(path.as_ref(), delimiter)?.read_series()
    }

    /// Write header and records to exactly `path`, using the series' current delimiter.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        CsvStorage::new(path.as_ref(), self.delimiter)?.write_series(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: char) -> Result<()> {
        CsvStorage::delimiter_byte(delimiter)?;
        self.delimiter = delimiter;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn times(&self) -> Vec<Timestamp> {
        self.observations.keys().cloned().collect()
    }

    pub fn prices(&self) -> Vec<Value> {
        self.observations.values().cloned().collect()
    }

    pub fn time_points(&self) -> Vec<TimePoint> {
        self.observations
            .iter()
            .map(|(timestamp, value)| TimePoint::new(*timestamp, *value))
            .collect()
    }

    pub fn first(&self) -> Option<TimePoint> {
        self.observations.iter().next().map(|(t, v)| TimePoint::new(*t, *v))
    }

    pub fn last(&self) -> Option<TimePoint> {
        self.observations.iter().next_back().map(|(t, v)| TimePoint::new(*t, *v))
    }

    pub fn mean(&self) -> Result<Value> {
        stats::mean(&self.prices())
    }

    pub fn standard_deviation(&self) -> Result<Value> {
        stats::standard_deviation(&self.prices())
    }

    pub fn increment_mean(&self) -> Result<Value> {
        self.increment_series()?.mean()
    }

    pub fn increment_standard_deviation(&self) -> Result<Value> {
        self.increment_series()?.standard_deviation()
    }

    /// Insert or replace the price at `datetime`.
    pub fn insert(&mut self, datetime: &str, price: Value) -> Result<()> {
        let timestamp = codec::parse_to_epoch(datetime)?;
        self.insert_raw(timestamp, price);
        Ok(())
    }

    /// Insert or replace the price at raw epoch seconds, returning the replaced price.
    pub fn insert_raw(&mut self, timestamp: Timestamp, price: Value) -> Option<Value> {
        self.observations.insert(timestamp, round_price(price))
    }

    /// Invalid text removes nothing.
    pub fn remove_at(&mut self, datetime: &str) -> bool {
        match codec::parse_to_epoch(datetime) {
            Ok(timestamp) => self.observations.remove(&timestamp).is_some(),
            Err(_) => false,
        }
    }

    pub fn remove_greater_than(&mut self, price: Value) -> bool {
        self.retain(|_, v| v <= price)
    }

    pub fn remove_less_than(&mut self, price: Value) -> bool {
        self.retain(|_, v| v >= price)
    }

    /// Observations exactly at `date` are kept.
    pub fn remove_before(&mut self, date: &str) -> bool {
        match codec::parse_to_epoch(date) {
            Ok(boundary) => self.retain(|t, _| t >= boundary),
            Err(_) => false,
        }
    }

    /// Observations exactly at `date` are kept.
    pub fn remove_after(&mut self, date: &str) -> bool {
        match codec::parse_to_epoch(date) {
            Ok(boundary) => self.retain(|t, _| t <= boundary),
            Err(_) => false,
        }
    }

    pub fn price_at(&self, datetime: &str) -> Result<Value> {
        let timestamp = codec::parse_to_epoch(datetime)?;
        self.observations
            .get(&timestamp)
            .cloned()
            .ok_or_else(|| TicklineErr::NotFound(datetime.to_string()))
    }

    /// Prices in `[start, start + 1 day)`, one per line.
    pub fn prices_on_date(&self, date: &str) -> Result<String> {
        let (start, end) = day_window(codec::parse_to_epoch(date)?);
        Ok(render_lines(self.observations.range(start..end).map(|(_, v)| *v)))
    }

    /// Increments whose later point falls in `[start, start + 1 day)`, one per line.
    pub fn increments_on_date(&self, date: &str) -> Result<String> {
        let (start, end) = day_window(codec::parse_to_epoch(date)?);
        let increments = self.time_points().first_difference();
        Ok(render_lines(
            Self::between(increments, start, end).into_iter().map(|tp| tp.value),
        ))
    }

    pub fn greatest_increment(&self) -> Result<Increment> {
        let increments = self.increments()?;
        Self::greatest_of(&increments).ok_or(TicklineErr::InsufficientData {
            required: 2,
            found: self.count(),
        })
    }

    /// Like `greatest_increment`, restricted to increments landing on one day.
    pub fn greatest_increment_on_date(&self, date: &str) -> Result<Increment> {
        let (start, end) = day_window(codec::parse_to_epoch(date)?);
        let increments = Self::between(self.increments()?, start, end);
        Self::greatest_of(&increments).ok_or_else(|| TicklineErr::NotFound(date.to_string()))
    }

    fn ensure_increments(&self) -> Result<()> {
        if self.count() < 2 {
            return Err(TicklineErr::InsufficientData {
                required: 2,
                found: self.count(),
            });
        }
        Ok(())
    }

    fn increments(&self) -> Result<Vec<TimePoint>> {
        self.ensure_increments()?;
        Ok(self.time_points().first_difference())
    }

    fn between(points: Vec<TimePoint>, start: Timestamp, end: Timestamp) -> Vec<TimePoint> {
        points
            .into_iter()
            .filter(|tp| is_in_window(tp.timestamp, start, end))
            .collect()
    }

    /// First differences indexed `0..n-1`, so only their values matter.
    fn increment_series(&self) -> Result<TimeSeries> {
        self.ensure_increments()?;
        let values = self.prices().first_difference();
        let index: Vec<Timestamp> = (0..values.len() as Timestamp).collect();
        TimeSeries::from_vecs(&index, &values, &self.name)
    }

    fn greatest_of(increments: &[TimePoint]) -> Option<Increment> {
        let values: Vec<Value> = increments.iter().map(|tp| tp.value).collect();
        stats::max_with_index(&values).map(|(i, value)| Increment {
            at: codec::format_from_epoch(increments[i].timestamp),
            value,
        })
    }

    fn retain<F: Fn(Timestamp, Value) -> bool>(&mut self, keep: F) -> bool {
        let before = self.observations.len();
        self.observations.retain(|t, v| keep(*t, *v));
        let removed = before - self.observations.len();
        debug!("removed {} observations from series {:?}", removed, self.name);
        removed > 0
    }
}
