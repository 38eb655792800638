mod common;

use common::{assert_close, write_file, EMPTY_FILE, PIPE_FILE, SAMPLE_FILE};
use std::fs;
use tempfile::TempDir;
use tickline::codec::is_valid_date;
use tickline::{Result, TicklineErr, TimePoint, TimeSeries};

#[test]
fn test_load_sample_file() -> Result<()> {
    let series = TimeSeries::from_file(SAMPLE_FILE)?;
    assert_eq!(series.name(), "ShareX");
    assert_eq!(series.count(), 5);
    assert_eq!(series.times()[0], 1619120010);
    assert_close(series.prices()[0], 61.43814, 10e-5);
    assert_eq!(series.times()[4], 1619210010);
    assert_close(series.prices()[4], 63.2, 10e-5);
    Ok(())
}

#[test]
fn test_sample_statistics() -> Result<()> {
    let series = TimeSeries::from_file(SAMPLE_FILE)?;
    assert_close(series.mean()?, 62.177628, 10e-7);
    // increments 0.66186, -1.15, 2.25, 0
    assert_close(series.increment_mean()?, 0.44046500, 10e-7);
    assert_close(series.increment_standard_deviation()?, 1.4197442, 10e-6);

    let greatest = series.greatest_increment()?;
    assert_eq!(greatest.at, "2021-04-23 19:33:30");
    assert_close(greatest.value, 2.25, 10e-9);
    Ok(())
}

#[test]
fn test_sample_day_queries() -> Result<()> {
    let series = TimeSeries::from_file(SAMPLE_FILE)?;
    assert_eq!(series.prices_on_date("2021-04-22")?, "61.43814\n62.10000\n60.95000\n");
    assert_eq!(series.prices_on_date("2021-04-23")?, "63.20000\n63.20000\n");
    assert_eq!(series.prices_on_date("2021-04-24")?, "");
    assert_eq!(series.increments_on_date("2021-04-22")?, "0.66186\n-1.15000\n");
    assert_eq!(series.increments_on_date("2021-04-23")?, "2.25000\n0.00000\n");
    assert_close(series.price_at("2021-04-22 20:33:30")?, 62.1, 10e-9);
    Ok(())
}

#[test]
fn test_empty_file_with_header() -> Result<()> {
    let series = TimeSeries::from_file(EMPTY_FILE)?;
    assert_eq!(series.name(), "ShareX");
    assert_eq!(series.count(), 0);
    assert!(series.mean().is_err());
    assert!(series.standard_deviation().is_err());
    assert!(series.increment_mean().is_err());
    assert!(series.increment_standard_deviation().is_err());
    assert!(series.greatest_increment().is_err());
    assert_eq!(series.increments_on_date("1970-01-01")?, "");
    Ok(())
}

#[test]
fn test_load_pipe_file_with_duplicates() -> Result<()> {
    let series = TimeSeries::from_file_with_delimiter(PIPE_FILE, '|')?;
    assert_eq!(series.name(), "ShareY");
    assert_eq!(series.delimiter(), '|');
    assert_eq!(series.times(), vec![10, 20, 30]);
    assert_eq!(series.prices(), vec![1.75, 2.25, 3.33333]);
    Ok(())
}

#[test]
fn test_file_does_not_exist() {
    match TimeSeries::from_file("./tests/data/file_does_not_exist.csv") {
        Err(TicklineErr::SourceErr(path, _)) => assert!(path.contains("file_does_not_exist")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_trailing_blank_lines() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "blank.csv", "TIMESTAMP,ShareX\n1,1\n2,2\n\n\n");
    assert_eq!(TimeSeries::from_file(&path)?.count(), 2);
    Ok(())
}

#[test]
fn test_save_and_reload() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let original = TimeSeries::from_file(SAMPLE_FILE)?;
    let path = temp_dir.path().join("TEST_SAVE.csv");
    original.save(&path)?;

    let reloaded = TimeSeries::from_file(&path)?;
    assert_eq!(reloaded, original);
    assert_eq!(reloaded.name(), "ShareX");
    assert!(fs::read_to_string(&path)?.starts_with("TIMESTAMP,ShareX\n1619120010,61.43814\n"));
    Ok(())
}

#[test]
fn test_save_uses_current_delimiter() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let mut series = TimeSeries::from_vecs(&[3, 1, 2], &[3.123456, 1.0, 2.5], "ShareX")?;
    series.set_delimiter('|')?;
    let path = temp_dir.path().join("out.psv");
    series.save(&path)?;

    assert_eq!(fs::read_to_string(&path)?, "TIMESTAMP|ShareX\n1|1\n2|2.5\n3|3.12346\n");
    assert_eq!(TimeSeries::from_file_with_delimiter(&path, '|')?, series);
    Ok(())
}

#[test]
fn test_save_to_unwritable_path() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let series = TimeSeries::from_vecs(&[1], &[1.0], "ShareX")?;
    match series.save(temp_dir.path().join("missing_dir").join("out.csv")) {
        Err(TicklineErr::IoErr(_)) => {}
        other => panic!("unexpected {:?}", other),
    }
    Ok(())
}

#[test]
fn test_order_independent_of_insertion() -> Result<()> {
    let times = [50, 10, 40, 20, 30, 10];
    let prices = [5.0, 1.0, 4.0, 2.0, 3.0, 1.5];
    let expected = TimeSeries::from_vecs(&times, &prices, "")?;
    assert_eq!(expected.times(), vec![10, 20, 30, 40, 50]);
    assert_eq!(expected.prices(), vec![1.5, 2.0, 3.0, 4.0, 5.0]);

    let mut by_points = TimeSeries::new();
    for (t, p) in times.iter().zip(prices.iter()) {
        by_points.insert_raw(*t, *p);
    }
    assert_eq!(by_points, expected);

    let points: Vec<TimePoint> = times
        .iter()
        .zip(prices.iter())
        .map(|(t, p)| TimePoint::new(*t, *p))
        .collect();
    assert_eq!(TimeSeries::from_time_points("", points), expected);
    Ok(())
}

#[test]
fn test_unordered_vectors_keep_alignment() -> Result<()> {
    let series = TimeSeries::from_vecs(&[4, 1, 2, 3], &[1.0, 2.0, 3.0, 4.0], "")?;
    assert_eq!(series.times(), vec![1, 2, 3, 4]);
    assert_eq!(series.price_at("1970-01-01 00:00:01")?, 2.0);
    assert_eq!(series.price_at("1970-01-01 00:00:02")?, 3.0);
    assert_eq!(series.price_at("1970-01-01 00:00:03")?, 4.0);
    assert_eq!(series.price_at("1970-01-01 00:00:04")?, 1.0);
    Ok(())
}

#[test]
fn test_prices_on_day() -> Result<()> {
    let series = TimeSeries::from_vecs(
        &[10, 20, 30, 86399, 86400, 86410, 86420],
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
        "",
    )?;
    let output = series.prices_on_date("1970-01-02")?;
    assert_eq!(output.matches('\n').count(), 3);
    assert_eq!(output, "5.00000\n6.00000\n7.00000\n");
    Ok(())
}

#[test]
fn test_increments_on_day() -> Result<()> {
    let series = TimeSeries::from_vecs(&[1, 2, 3, 86401], &[1.0, 2.0, 3.0, 4.0], "")?;
    assert_eq!(series.increments_on_date("1970-01-01")?.matches('\n').count(), 2);
    Ok(())
}

#[test]
fn test_tricky_day() {
    let series = TimeSeries::from_vecs(&[86401, 86402, 86403], &[1.0, 2.0, 3.0], "").unwrap();
    assert!(!is_valid_date("1970-02-31"));
    assert!(!is_valid_date("1970-02-31 00:00:00"));
    for date in &["1970-02-31", "1970-02-31 00:00:00"] {
        match series.prices_on_date(date) {
            Err(TicklineErr::InvalidDate(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        match series.increments_on_date(date) {
            Err(TicklineErr::InvalidDate(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn test_remove_before_and_after() -> Result<()> {
    let mut series = TimeSeries::from_vecs(&[10, 20, 30, 40, 50], &[1.0, 2.0, 3.0, 4.0, 5.0], "")?;
    assert!(series.remove_before("1970-01-01 00:00:11"));
    assert!(series.remove_after("1970-01-01 00:00:41"));
    assert_eq!(series.times(), vec![20, 30, 40]);
    assert!(!series.remove_before("1970-01-01 00:00:20"));
    assert!(!series.remove_after("1970-01-01 00:00:40"));
    Ok(())
}
