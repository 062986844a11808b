//! End-to-end tests for race statistics
//!
//! Tests cover:
//! - Best lap correction when the log ends past the finish line
//! - Sector times of the best lap
//! - Top speed over the session
//! - Unknown sectors when no lap qualifies

use crate::common::float_cmp::*;
use crate::common::parse_csv;
use crate::common::synthetic::{race_csv, RaceSample};
use forzastats::analysis::format::UNKNOWN_SECTOR;
use forzastats::analysis::sectors::CourseConfig;
use forzastats::{Analyzer, RaceStatsAnalyzer};

/// Boundaries every 100 m on a 400 m lap
fn test_course() -> CourseConfig {
    CourseConfig {
        name: "Test Oval".to_string(),
        sector_boundaries: [100.0, 200.0, 300.0, 400.0],
        window: 1.0,
        finish_offset: 0.0125,
    }
}

fn sample(lap: u32, distance: f64, clock: f64, best_lap: f64, speed_mps: f64) -> RaceSample {
    RaceSample {
        best_lap,
        current_lap: clock,
        distance,
        lap,
        speed_mps,
    }
}

/// Two laps; the log ends just after crossing the line at the end of the second
fn two_lap_session() -> Vec<RaceSample> {
    vec![
        sample(0, 0.0, 0.0, 0.0, 0.0),
        sample(0, 100.5, 10.0, 0.0, 20.0),
        sample(0, 200.5, 21.0, 0.0, 25.0),
        sample(0, 300.5, 33.0, 0.0, 30.0),
        sample(0, 350.0, 38.0, 0.0, 32.0),
        sample(0, 399.0, 42.0, 0.0, 30.0),
        sample(1, 400.0, 0.0, 42.0125, 31.0),
        sample(1, 500.4, 9.0, 42.0125, 35.0),
        sample(1, 600.4, 19.0, 42.0125, 40.0),
        sample(1, 700.4, 30.0, 42.0125, 36.0),
        sample(1, 750.0, 35.0, 42.0125, 33.0),
        sample(1, 799.0, 39.99, 42.0125, 30.0),
        sample(1, 801.0, 40.0004, 42.0125, 30.0),
    ]
}

#[test]
fn test_two_lap_session_row() {
    let log = parse_csv(&race_csv(&two_lap_session()));
    let stats = RaceStatsAnalyzer::new(test_course()).analyze(&log).unwrap();

    // Unregistered second lap beats the reported 42.0125
    assert_approx_eq(stats.best_lap, 40.0129, 1e-9);

    assert_eq!(
        stats.to_row(),
        vec![
            "00:40.013",
            "89.48",
            "00:00:09.000",
            "00:00:10.000",
            "00:00:11.000",
            "00:00:10.013",
        ]
    );
}

#[test]
fn test_best_lap_sectors_sum_to_best_lap() {
    let log = parse_csv(&race_csv(&two_lap_session()));
    let stats = RaceStatsAnalyzer::new(test_course()).analyze(&log).unwrap();

    let total: f64 = stats.sectors.iter().flatten().sum();
    assert_approx_eq(total, stats.best_lap, 1e-9);
}

#[test]
fn test_reported_best_lap_kept_before_finish() {
    // Drop the final sample so the log stops short of the line
    let mut samples = two_lap_session();
    samples.pop();
    let log = parse_csv(&race_csv(&samples));
    let stats = RaceStatsAnalyzer::new(test_course()).analyze(&log).unwrap();

    assert_approx_eq(stats.best_lap, 42.0125, 1e-9);
    // Lap 1 never reached the line, so the sectors are lap 0's
    assert_eq!(stats.sectors[0], Some(10.0));
    assert_eq!(stats.sectors[2], Some(12.0));
    let total: f64 = stats.sectors.iter().flatten().sum();
    assert_approx_eq(total, stats.best_lap, 1e-9);
}

#[test]
fn test_session_stopped_mid_lap_keeps_best_lap_sectors() {
    // Lap 0 finishes in 40 s, lap 1 is abandoned 150 m in
    let samples = vec![
        sample(0, 0.0, 0.0, 0.0, 0.0),
        sample(0, 100.5, 10.0, 0.0, 20.0),
        sample(0, 200.5, 21.0, 0.0, 25.0),
        sample(0, 300.5, 33.0, 0.0, 30.0),
        sample(0, 399.0, 40.0, 0.0, 30.0),
        sample(1, 400.0, 0.0, 40.0125, 31.0),
        sample(1, 500.5, 9.0, 40.0125, 35.0),
        sample(1, 550.0, 15.0, 40.0125, 30.0),
    ];
    let log = parse_csv(&race_csv(&samples));
    let stats = RaceStatsAnalyzer::new(test_course()).analyze(&log).unwrap();

    assert_approx_eq(stats.best_lap, 40.0125, 1e-9);
    assert_eq!(stats.sectors[0], Some(10.0));
    assert_eq!(stats.sectors[1], Some(11.0));
    assert_eq!(stats.sectors[2], Some(12.0));
    assert_approx_eq(stats.sectors[3].unwrap(), 7.0125, 1e-9);
}

#[test]
fn test_no_qualifying_lap_leaves_sectors_unknown() {
    let samples: Vec<RaceSample> = two_lap_session()
        .into_iter()
        .map(|mut s| {
            s.best_lap = 5.0;
            s
        })
        .collect();
    let log = parse_csv(&race_csv(&samples[..samples.len() - 1]));
    let stats = RaceStatsAnalyzer::new(test_course()).analyze(&log).unwrap();

    assert_eq!(stats.sectors, [None; 4]);
    let row = stats.to_row();
    assert_eq!(row[0], "00:05.000");
    assert!(row[2..].iter().all(|s| s == UNKNOWN_SECTOR));
}
