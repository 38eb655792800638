use crate::common::time_point::{Timestamp, Value, DECIMAL_PLACES};

pub const SECONDS_PER_DAY: Timestamp = 86400;

/// Round half away from zero to `DECIMAL_PLACES`.
pub fn round_price(value: Value) -> Value {
    let power_of_10 = 10f64.powi(DECIMAL_PLACES);
    (value * power_of_10).round() / power_of_10
}

/// Half-open `[start, start + SECONDS_PER_DAY)`.
pub fn day_window(start: Timestamp) -> (Timestamp, Timestamp) {
    (start, start + SECONDS_PER_DAY)
}

pub fn is_in_window(timestamp: Timestamp, start: Timestamp, end: Timestamp) -> bool {
    start <= timestamp && timestamp < end
}

/// One line per value, newline terminated.
pub fn render_lines<I: IntoIterator<Item = Value>>(values: I) -> String {
    values
        .into_iter()
        .map(|v| format!("{:.*}\n", DECIMAL_PLACES as usize, v))
        .collect()
}

#[cfg(test)]
mod test {
    use crate::common::utils::{day_window, is_in_window, render_lines, round_price};

    #[test]
    fn round_to_five_places() {
        assert_eq!(round_price(61.438141), 61.43814);
        assert_eq!(round_price(2.123456), 2.12346);
        assert_eq!(round_price(-2.123456), -2.12346);
        assert_eq!(round_price(7.0), 7.0);
    }

    #[test]
    fn window_is_half_open() {
        let (start, end) = day_window(86400);
        assert!(is_in_window(86400, start, end));
        assert!(is_in_window(172799, start, end));
        assert!(!is_in_window(172800, start, end));
        assert!(!is_in_window(86399, start, end));
    }

    #[test]
    fn render_one_line_per_value() {
        assert_eq!(render_lines(vec![5.0, 6.5]), "5.00000\n6.50000\n");
        assert_eq!(render_lines(Vec::new()), "");
    }
}
