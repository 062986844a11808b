//! Tests for column resolution and series extraction
//!
//! Tests cover:
//! - Header-driven lookup independent of column order
//! - Missing columns reported as errors instead of position zero
//! - Malformed cells aborting extraction
//! - Equal-length series from one log

use crate::common::parse_csv;
use crate::common::synthetic::{csv, launch_and_stop, vehicle_csv};
use forzastats::columns::{ColumnMap, Field};
use forzastats::error::StatsError;
use forzastats::series::SeriesExtractor;

// ============================================
// Column Resolution
// ============================================

#[test]
fn test_column_order_is_irrelevant() {
    let a = parse_csv("Speed,Gear\n10,2\n");
    let b = parse_csv("Gear,Speed\n2,10\n");

    let speed_a = SeriesExtractor::new(&a).unwrap().series(Field::Speed).unwrap();
    let speed_b = SeriesExtractor::new(&b).unwrap().series(Field::Speed).unwrap();
    assert_eq!(speed_a, speed_b);
}

#[test]
fn test_missing_speed_is_not_column_zero() {
    // Power sits in column 0; a missing Speed must not read it
    let log = parse_csv("Power,Gear\n250000,3\n");
    let extractor = SeriesExtractor::new(&log).unwrap();
    assert!(matches!(
        extractor.series(Field::Speed),
        Err(StatsError::MissingColumn(Field::Speed))
    ));
}

#[test]
fn test_all_vehicle_columns_resolve() {
    let log = parse_csv(&vehicle_csv(&launch_and_stop(), "700", "1", "2"));
    let map = ColumnMap::resolve(&log.header);
    assert!(map.require(&Field::VEHICLE).is_ok());
    // IsRaceOn is not a known field
    assert_eq!(map.len(), Field::VEHICLE.len());
}

// ============================================
// Series Extraction
// ============================================

#[test]
fn test_series_share_length_and_order() {
    let samples = launch_and_stop();
    let log = parse_csv(&vehicle_csv(&samples, "700", "1", "2"));
    let extractor = SeriesExtractor::new(&log).unwrap();

    let times = extractor.series(Field::TimestampMs).unwrap();
    let speeds = extractor.series(Field::Speed).unwrap();
    let gears = extractor.series(Field::Gear).unwrap();

    assert_eq!(times.len(), samples.len());
    assert_eq!(speeds.len(), samples.len());
    assert_eq!(gears.len(), samples.len());

    for (i, sample) in samples.iter().enumerate() {
        assert_eq!(times.values[i], sample.seconds);
        assert!((speeds.values[i] - sample.mph).abs() < 1e-9);
        assert_eq!(gears.values[i], sample.gear as f64);
    }
}

#[test]
fn test_malformed_row_aborts_extraction() {
    let rows = vec![
        vec!["0".to_string(), "1".to_string()],
        vec!["1000".to_string(), "--".to_string()],
        vec!["2000".to_string(), "3".to_string()],
    ];
    let log = parse_csv(&csv(&["TimestampMS", "Speed"], &rows));
    let extractor = SeriesExtractor::new(&log).unwrap();

    match extractor.series(Field::Speed) {
        Err(StatsError::MalformedData { row, value, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(value, "--");
        }
        other => panic!("expected MalformedData, got {:?}", other),
    }
}

#[test]
fn test_header_only_log_is_empty_input() {
    let log = parse_csv("Speed,Gear,Power\n");
    assert!(matches!(
        SeriesExtractor::new(&log),
        Err(StatsError::EmptyInput)
    ));
}
