//! Real/synthetic series combination and summary statistics.
//!
//! Three branches, decided in order: no data source configured at all means
//! full mock output; enough real readings means they are returned as-is;
//! otherwise the gap is filled with synthetic points blended toward the last
//! known real baseline.

use chrono::{DateTime, Utc};

use super::{
    DataSource, ParameterStats, ParameterSummaries, Reading, SeriesPoint, TimeRange, Trend,
    TrendPoint, TrendSummary, range::RangeToken, round2, synth, zero_when_missing,
};

/// Weight of the raw synthetic value when blending filler toward the
/// baseline; the baseline contributes the remaining `1 - SYNTH_WEIGHT`.
pub const SYNTH_WEIGHT: f64 = 0.7;

/// Relative change (percent) between first-third and last-third averages
/// beyond which a parameter is classified as trending.
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// What the data-source query produced. `Unconfigured` covers both "no
/// database configured" and "the query failed" — the fetch error is logged
/// by the caller and never surfaces in the response.
#[derive(Debug, Clone)]
pub enum SourceData {
    Unconfigured,
    Readings(Vec<Reading>),
}

/// A completed series with its provenance.
#[derive(Debug, Clone)]
pub struct Combined {
    pub data: Vec<TrendPoint>,
    pub summary: Option<TrendSummary>,
    pub data_source: DataSource,
    pub note: String,
}

/// Reference values that hybrid filler is blended toward: the most recent
/// real reading where it has values, fixed defaults otherwise.
#[derive(Debug, Clone, Copy)]
struct Baseline {
    ph: f64,
    ntu: f64,
    tds: f64,
    temp: f64,
    dissolved_oxygen: f64,
}

impl Baseline {
    const DEFAULT: Self = Self {
        ph: 7.2,
        ntu: 1.5,
        tds: 250.0,
        temp: 22.0,
        dissolved_oxygen: 8.5,
    };

    fn from_point(p: &SeriesPoint) -> Self {
        Self {
            ph: p.ph.unwrap_or(Self::DEFAULT.ph),
            ntu: p.ntu.unwrap_or(Self::DEFAULT.ntu),
            tds: p.tds.unwrap_or(Self::DEFAULT.tds),
            temp: p.temp.unwrap_or(Self::DEFAULT.temp),
            dissolved_oxygen: p.dissolved_oxygen.unwrap_or(Self::DEFAULT.dissolved_oxygen),
        }
    }

    fn blend_into(self, p: &mut SeriesPoint) {
        p.ph = p.ph.map(|v| round2(blend(v, self.ph)));
        p.ntu = p.ntu.map(|v| round2(blend(v, self.ntu)));
        p.tds = p.tds.map(|v| blend(v, self.tds).round());
        p.temp = p.temp.map(|v| round2(blend(v, self.temp)));
        p.dissolved_oxygen = p.dissolved_oxygen.map(|v| round2(blend(v, self.dissolved_oxygen)));
    }
}

/// Blend a raw synthetic value toward the baseline. The result always lies
/// on the segment between the two inputs.
#[must_use]
pub fn blend(raw: f64, baseline: f64) -> f64 {
    raw * SYNTH_WEIGHT + baseline * (1.0 - SYNTH_WEIGHT)
}

/// Assemble the final series for a device request.
///
/// Pure apart from the synthesizer's internal randomness: no I/O, no shared
/// state, bounded by the range's target sample count.
#[must_use]
pub fn combine(source: SourceData, token: RangeToken, now: DateTime<Utc>) -> Combined {
    match source {
        SourceData::Unconfigured => finish(
            synth::generate(token, now),
            DataSource::Mock,
            "Using mock data - sensor database not configured".to_string(),
        ),
        SourceData::Readings(readings) => {
            let real: Vec<SeriesPoint> = readings.iter().map(SeriesPoint::from_reading).collect();
            if real.len() >= token.spec().min_real_samples {
                let note = format!("Real data from sensor database ({} readings)", real.len());
                finish(real, DataSource::Database, note)
            } else {
                hybrid(real, token, now)
            }
        }
    }
}

/// Gap-fill: real readings first, then blended synthetic filler up to the
/// range's target sample count.
fn hybrid(real: Vec<SeriesPoint>, token: RangeToken, now: DateTime<Utc>) -> Combined {
    let spec = token.spec();
    let baseline = real.last().map_or(Baseline::DEFAULT, Baseline::from_point);

    let needed = spec.target_samples.saturating_sub(real.len());
    let mut filler: Vec<SeriesPoint> = synth::generate(token, now)
        .into_iter()
        .take(needed)
        .collect();

    // Filler timestamps continue from the last real reading; with no real
    // readings at all the generated timestamps (ending at now) stand.
    if let Some(last) = real.last() {
        for (i, p) in filler.iter_mut().enumerate() {
            p.t = last.t + spec.interval * (i as i32 + 1);
        }
    }
    for p in &mut filler {
        baseline.blend_into(p);
    }

    let note = format!(
        "Hybrid data: {} real readings + {} simulated",
        real.len(),
        filler.len()
    );

    let mut series = real;
    series.extend(filler);
    finish(series, DataSource::Hybrid, note)
}

fn finish(series: Vec<SeriesPoint>, data_source: DataSource, note: String) -> Combined {
    let summary = summarize(&series);
    let data = series.iter().map(TrendPoint::from).collect();
    Combined {
        data,
        summary,
        data_source,
        note,
    }
}

/// Summary statistics over a completed series. `None` for an empty series.
#[must_use]
pub fn summarize(series: &[SeriesPoint]) -> Option<TrendSummary> {
    let first = series.first()?;
    let last = series.last()?;

    let parameters = ParameterSummaries {
        ph: param_stats(series, |p| p.ph),
        ntu: param_stats(series, |p| p.ntu),
        tds: param_stats(series, |p| p.tds),
        temp: param_stats(series, |p| p.temp),
        dissolved_oxygen: param_stats(series, |p| p.dissolved_oxygen),
    };

    Some(TrendSummary {
        total_readings: series.len(),
        time_range: TimeRange {
            start: first.t,
            end: last.t,
        },
        parameters,
    })
}

/// Stats for one parameter, computed over its non-null values only. A
/// parameter with no valid values anywhere in the series yields `None` and
/// is omitted from the summary.
fn param_stats(
    series: &[SeriesPoint],
    get: impl Fn(&SeriesPoint) -> Option<f64>,
) -> Option<ParameterStats> {
    let values: Vec<f64> = series.iter().filter_map(&get).collect();
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    // Current is the last series element's value, not the last valid one;
    // a null there goes through the same zero substitution as the wire.
    let current = zero_when_missing(series.last().and_then(&get));

    Some(ParameterStats {
        current: round2(current),
        min: round2(min),
        max: round2(max),
        avg: round2(avg),
        trend: classify_trend(&values),
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Compare the first-third average against the last-third average. With
/// fewer than 3 valid values both thirds would be empty, so the trend is
/// pinned to stable. A zero first-third average makes the percent change
/// undefined; any nonzero last-third average then counts as increasing.
fn classify_trend(values: &[f64]) -> Trend {
    let third = values.len() / 3;
    if third == 0 {
        return Trend::Stable;
    }

    let first_avg = mean(&values[..third]);
    let last_avg = mean(&values[values.len() - third..]);

    if first_avg == 0.0 {
        return if last_avg == 0.0 {
            Trend::Stable
        } else {
            Trend::Increasing
        };
    }

    let change = (last_avg - first_avg) / first_avg * 100.0;
    if change.abs() > TREND_THRESHOLD_PCT {
        if change > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        }
    } else {
        Trend::Stable
    }
}
