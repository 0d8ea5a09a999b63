//! Unit tests for the synthetic series generator.
//!
//! Generation uses live randomness, so these assert on shape and bounds,
//! never exact values.
//!
//! Run with: cargo test --test synth_unit_test

use chrono::{TimeZone, Utc};
use horizon_api::series::{RangeToken, synth};

#[test]
fn generates_exactly_target_samples() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    assert_eq!(synth::generate(RangeToken::H24, now).len(), 24);
    assert_eq!(synth::generate(RangeToken::D7, now).len(), 28);
    assert_eq!(synth::generate(RangeToken::D30, now).len(), 30);
}

#[test]
fn timestamps_evenly_spaced_ending_at_now() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    for token in [RangeToken::H24, RangeToken::D7, RangeToken::D30] {
        let spec = token.spec();
        let series = synth::generate(token, now);

        assert_eq!(series.last().unwrap().t, now, "{token} must end at now");
        for pair in series.windows(2) {
            assert_eq!(pair[1].t - pair[0].t, spec.interval, "{token} spacing");
        }
    }
}

#[test]
fn values_stay_within_wave_plus_noise_bounds() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    for token in [RangeToken::H24, RangeToken::D7, RangeToken::D30] {
        for p in synth::generate(token, now) {
            let ph = p.ph.unwrap();
            let ntu = p.ntu.unwrap();
            let tds = p.tds.unwrap();
            let temp = p.temp.unwrap();
            let dox = p.dissolved_oxygen.unwrap();

            assert!((6.65..=7.35).contains(&ph), "ph out of bounds: {ph}");
            assert!((0.0..=2.2).contains(&ntu), "ntu out of bounds: {ntu}");
            assert!((227.0..=273.0).contains(&tds), "tds out of bounds: {tds}");
            assert!((18.5..=25.5).contains(&temp), "temp out of bounds: {temp}");
            assert!((6.85..=9.15).contains(&dox), "do out of bounds: {dox}");
        }
    }
}

#[test]
fn values_carry_wire_precision() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    for p in synth::generate(RangeToken::H24, now) {
        let ph = p.ph.unwrap();
        assert!(
            ((ph * 100.0).round() - ph * 100.0).abs() < 1e-9,
            "ph not rounded to 2 decimals: {ph}"
        );
        let tds = p.tds.unwrap();
        assert!((tds.round() - tds).abs() < 1e-9, "tds not integral: {tds}");
    }
}
