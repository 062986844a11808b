//! Tests for lap sector splitting
//!
//! Tests cover:
//! - The default La Selva geometry
//! - Sector sums matching the lap clock
//! - Laps with boundaries that were never sampled
//! - Best lap selection

use crate::common::float_cmp::*;
use forzastats::analysis::format;
use forzastats::analysis::sectors::{best_lap_splits, lap_splits, CourseConfig};

/// Parallel (distance, lap, clock) series built from per-lap samples
fn session(laps: &[(f64, &[(f64, f64)])], course: &CourseConfig) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut distance = Vec::new();
    let mut lap = Vec::new();
    let mut clock = Vec::new();
    for (number, samples) in laps {
        let start = number * course.lap_length();
        for &(d, t) in samples.iter() {
            distance.push(start + d);
            lap.push(*number);
            clock.push(t);
        }
    }
    (distance, lap, clock)
}

// ============================================
// La Selva
// ============================================

#[test]
fn test_la_selva_splits() {
    let course = CourseConfig::la_selva();
    let samples: &[(f64, f64)] = &[
        (0.0, 0.0),
        (1878.5, 30.0),
        (3184.5, 52.0),
        (4311.5, 70.0),
        (5900.0, 95.0004),
    ];
    let (d, l, t) = session(&[(0.0, samples)], &course);

    let splits = lap_splits(&d, &l, &t, &course).unwrap();
    assert_eq!(splits.len(), 1);
    let sectors = splits[0].sectors;
    assert_eq!(sectors[0], Some(30.0));
    assert_eq!(sectors[1], Some(22.0));
    assert_eq!(sectors[2], Some(18.0));
    assert_approx_eq(sectors[3].unwrap(), 25.0129, 1e-9);

    assert_eq!(format::sector_time(sectors[0].unwrap()), "00:00:30.000");
    assert_eq!(format::sector_time(sectors[3].unwrap()), "00:00:25.013");
}

#[test]
fn test_second_lap_uses_its_own_start_distance() {
    let course = CourseConfig::la_selva();
    let first: &[(f64, f64)] = &[
        (0.0, 0.0),
        (1878.5, 30.0),
        (3184.5, 52.0),
        (4311.5, 70.0),
        (5900.0, 95.0),
    ];
    let second: &[(f64, f64)] = &[
        (0.0, 0.0),
        (1878.2, 28.0),
        (3184.9, 49.5),
        (4311.1, 66.0),
        (5940.0, 90.0),
    ];
    let (d, l, t) = session(&[(0.0, first), (1.0, second)], &course);

    let splits = lap_splits(&d, &l, &t, &course).unwrap();
    assert_eq!(splits.len(), 2);
    assert_eq!(splits[1].sectors[0], Some(28.0));
    assert_eq!(splits[1].sectors[1], Some(21.5));
    assert_eq!(splits[1].sectors[2], Some(16.5));
}

// ============================================
// Sector Sums
// ============================================

#[test]
fn test_complete_lap_sums_to_lap_clock_plus_offset() {
    let course = CourseConfig::la_selva();
    let samples: &[(f64, f64)] = &[
        (0.0, 0.0),
        (900.0, 14.2),
        (1878.9, 29.37),
        (3184.1, 51.02),
        (4311.6, 69.81),
        (5949.0, 96.44),
    ];
    let (d, l, t) = session(&[(0.0, samples)], &course);

    let splits = lap_splits(&d, &l, &t, &course).unwrap();
    let lap = &splits[0];
    assert!(lap.is_complete());
    assert_approx_eq(lap.total(), lap.lap_time + course.finish_offset, 1e-9);
}

#[test]
fn test_skipped_boundary_leaves_neighbouring_sectors_unknown() {
    let course = CourseConfig::la_selva();
    // No sample inside the window after 3184
    let samples: &[(f64, f64)] = &[
        (0.0, 0.0),
        (1878.5, 30.0),
        (3190.0, 52.0),
        (4311.5, 70.0),
        (5900.0, 95.0),
    ];
    let (d, l, t) = session(&[(0.0, samples)], &course);

    let lap = &lap_splits(&d, &l, &t, &course).unwrap()[0];
    assert!(!lap.is_complete());
    assert_eq!(lap.sectors[0], Some(30.0));
    assert_eq!(lap.sectors[1], None);
    assert_eq!(lap.sectors[2], None);
    assert!(lap.sectors[3].is_some());
    assert_eq!(format::sector_time_or_unknown(lap.sectors[1]), format::UNKNOWN_SECTOR);
}

// ============================================
// Best Lap Selection
// ============================================

#[test]
fn test_best_lap_is_last_lap_within_best_time() {
    let course = CourseConfig::la_selva();
    let slow: &[(f64, f64)] = &[
        (0.0, 0.0),
        (1878.5, 30.0),
        (3184.5, 52.0),
        (4311.5, 70.0),
        (5900.0, 99.0),
    ];
    let fast: &[(f64, f64)] = &[
        (0.0, 0.0),
        (1878.5, 27.0),
        (3184.5, 48.0),
        (4311.5, 65.0),
        (5900.0, 91.0),
    ];
    let (d, l, t) = session(&[(0.0, slow), (1.0, fast), (2.0, slow)], &course);

    let best = best_lap_splits(&d, &l, &t, 91.0125, &course)
        .unwrap()
        .expect("the fast lap qualifies");
    assert_eq!(best.lap, 1.0);
    assert_eq!(best.sectors[0], Some(27.0));

    assert!(best_lap_splits(&d, &l, &t, 80.0, &course).unwrap().is_none());
}
