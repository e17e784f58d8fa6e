use chrono::NaiveDate;
use price_forecast::data::{DataLoader, TimeSeries};
use price_forecast::error::ForecastError;
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_time_series_operations() {
    let dates = vec!["2023-01-01", "2023-01-02", "2023-01-03"]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let values = vec![100.0, 103.0, 106.0];

    let data = TimeSeries::from_parts(dates, values).unwrap();

    assert_eq!(data.len(), 3);
    assert!(!data.is_empty());
    assert_eq!(data.last().unwrap().value, 106.0);
    assert_eq!(data.last().unwrap().timestamp, date(2023, 1, 3));

    let subset = data.slice(1, Some(3)).unwrap();
    assert_eq!(subset.len(), 2);
    assert_eq!(subset.points()[0].value, 103.0);

    let mean = data.mean().unwrap();
    assert!((mean - 103.0).abs() < 1e-12);

    let std_dev = data.std_dev().unwrap();
    assert!(std_dev > 2.0 && std_dev < 3.0);
}

#[test]
fn test_rejects_unsorted_timestamps() {
    let dates = vec![date(2023, 1, 2), date(2023, 1, 1)];
    let result = TimeSeries::from_parts(dates, vec![1.0, 2.0]);

    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_rejects_duplicate_timestamps() {
    let dates = vec![date(2023, 1, 1), date(2023, 1, 1)];
    let result = TimeSeries::from_parts(dates, vec![1.0, 2.0]);

    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_rejects_non_finite_values() {
    let dates = vec![date(2023, 1, 1), date(2023, 1, 2)];
    let result = TimeSeries::from_parts(dates, vec![1.0, f64::NAN]);

    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_rejects_length_mismatch() {
    let result = TimeSeries::from_parts(vec![date(2023, 1, 1)], vec![1.0, 2.0]);

    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_empty_series_is_constructible() {
    let data = TimeSeries::from_parts(Vec::new(), Vec::new()).unwrap();

    assert!(data.is_empty());
    assert!(data.last().is_none());
    assert!(matches!(
        data.mean(),
        Err(ForecastError::EmptySeries(_))
    ));
}

#[test]
fn test_slice_bounds_checked() {
    let dates = vec![date(2023, 1, 1), date(2023, 1, 2)];
    let data = TimeSeries::from_parts(dates, vec![1.0, 2.0]).unwrap();

    assert!(data.slice(0, Some(5)).is_err());
    assert!(data.slice(2, Some(1)).is_err());
}

#[test]
fn test_data_loader_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,open,high,low,close,volume").unwrap();
    writeln!(file, "2023-01-01,100.0,105.0,98.0,103.0,1000").unwrap();
    writeln!(file, "2023-01-02,103.0,107.0,101.0,106.0,1200").unwrap();
    writeln!(file, "2023-01-03,106.0,110.0,104.0,108.0,1500").unwrap();

    let data = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(data.len(), 3);
    // The close column wins over open/high/low
    assert_eq!(data.values(), vec![103.0, 106.0, 108.0]);
    assert_eq!(data.timestamps()[0], date(2023, 1, 1));
}

#[test]
fn test_data_loader_price_column_fallback() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Price").unwrap();
    writeln!(file, "2023-06-01,42.5").unwrap();
    writeln!(file, "2023-06-02,43.25").unwrap();

    let data = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(data.values(), vec![42.5, 43.25]);
}

#[test]
fn test_data_loader_datetime_suffix() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Datetime,Close").unwrap();
    writeln!(file, "2023-01-01 09:30:00-05:00,101.5").unwrap();
    writeln!(file, "2023-01-02 09:30:00-05:00,102.5").unwrap();

    let data = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(data.timestamps(), vec![date(2023, 1, 1), date(2023, 1, 2)]);
}

#[test]
fn test_data_loader_missing_file() {
    let result = DataLoader::from_csv("nonexistent_file.csv");

    assert!(matches!(result, Err(ForecastError::DataUnavailable(_))));
}

#[test]
fn test_data_loader_missing_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "foo,bar").unwrap();
    writeln!(file, "1,2").unwrap();

    let result = DataLoader::from_csv(file.path());
    assert!(matches!(result, Err(ForecastError::DataError(_))));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,volume").unwrap();
    writeln!(file, "2023-01-01,1000").unwrap();

    let result = DataLoader::from_csv(file.path());
    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_data_loader_rejects_unsorted_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,close").unwrap();
    writeln!(file, "2023-01-02,100.0").unwrap();
    writeln!(file, "2023-01-01,99.0").unwrap();

    let result = DataLoader::from_csv(file.path());

    assert!(matches!(result, Err(ForecastError::DataError(_))));
}
