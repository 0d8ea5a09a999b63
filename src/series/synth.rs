//! Synthetic series generation.
//!
//! Produces a plausible-looking series for a range: slow sinusoidal waves per
//! parameter plus a little uniform noise. Used both as pure mock output when
//! no database is configured and as filler for the hybrid branch. Randomness
//! is live and unseeded; callers must not expect reproducible values.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::{RangeToken, SeriesPoint, round2};

/// Generate exactly `target_samples` points for the range, evenly spaced by
/// its interval and ending at `now`. `now` is injected so tests can pin the
/// timestamps.
#[must_use]
pub fn generate(token: RangeToken, now: DateTime<Utc>) -> Vec<SeriesPoint> {
    let spec = token.spec();
    let interval_hours = spec.interval.num_hours();
    let mut rng = rand::thread_rng();

    (0..spec.target_samples)
        .map(|k| {
            let t = now - spec.interval * (spec.target_samples - 1 - k) as i32;
            // Wave phase is indexed by elapsed hours, not sample index, so
            // the diurnal shape is the same across the three ranges.
            let h = (k as i64 * interval_hours) as f64;

            let ph = 7.0 + 0.3 * (h / 12.0).sin() + rng.gen_range(-0.05..=0.05);
            let ntu = 1.5 + 0.5 * (h / 8.0).cos() + rng.gen_range(-0.1..=0.1);
            let tds = 250.0 + 20.0 * (h / 6.0).sin() + rng.gen_range(-2.5..=2.5);
            let temp = 22.0 + 3.0 * (h / 24.0).sin() + rng.gen_range(-0.5..=0.5);
            let dox = 8.0 + 1.0 * (h / 16.0).cos() + rng.gen_range(-0.15..=0.15);

            SeriesPoint {
                t,
                ph: Some(round2(ph)),
                ntu: Some(round2(ntu.max(0.0))),
                tds: Some(tds.round()),
                temp: Some(round2(temp)),
                dissolved_oxygen: Some(round2(dox)),
            }
        })
        .collect()
}
