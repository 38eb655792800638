use std::cmp::Ordering;

/// Seconds since the Unix epoch, UTC.
pub type Timestamp = i64;
pub type Value = f64;

pub const DECIMAL_PLACES: i32 = 5;
pub const F64_MARGIN: f64 = 0.000000001;

/// One observation of the series.
#[derive(Clone, Copy, Debug)]
pub struct TimePoint {
    pub timestamp: Timestamp,
    pub value: Value,
}

impl TimePoint {
    pub fn new(timestamp: Timestamp, value: Value) -> TimePoint {
        TimePoint { timestamp, value }
    }
}

impl Eq for TimePoint {}

impl PartialEq for TimePoint {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp && (self.value - other.value).abs() < F64_MARGIN
    }
}

impl Ord for TimePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl PartialOrd for TimePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
