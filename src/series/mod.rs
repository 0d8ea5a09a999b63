//! Trend series assembly: range resolution, synthetic generation, and the
//! real/synthetic combiner with summary statistics.
//!
//! The combiner is a pure, synchronous computation: the caller fetches (or
//! fails to fetch) real readings, hands them in as [`SourceData`], and gets
//! back a complete series plus summary. Nothing here performs I/O.

pub mod combine;
pub mod range;
pub mod synth;

pub use combine::{Combined, SourceData, combine};
pub use range::{RangeSpec, RangeToken};

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One raw reading as it comes out of the data source. Numeric fields are
/// nullable in the hosted table, so they stay `Option` here; the lossy
/// null-to-zero coercion happens only at the wire edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub ph: Option<f64>,
    pub turbidity: Option<f64>,
    pub tds: Option<f64>,
    pub temperature: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
}

/// One formatted point carried through combination. Values are rounded but
/// still `Option` so the summary can tell "missing" apart from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub t: DateTime<Utc>,
    pub ph: Option<f64>,
    pub ntu: Option<f64>,
    pub tds: Option<f64>,
    pub temp: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
}

impl SeriesPoint {
    /// Format a raw reading: round to wire precision, keep nulls as nulls.
    #[must_use]
    pub fn from_reading(r: &Reading) -> Self {
        Self {
            t: r.timestamp,
            ph: r.ph.map(round2),
            ntu: r.turbidity.map(round2),
            tds: r.tds.map(f64::round),
            temp: r.temperature.map(round2),
            dissolved_oxygen: r.dissolved_oxygen.map(round2),
        }
    }
}

/// One point on the wire. Field names are part of the dashboard contract.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrendPoint {
    /// Reading timestamp (ISO 8601)
    pub t: DateTime<Utc>,
    /// pH
    pub ph: f64,
    /// Turbidity (NTU)
    pub ntu: f64,
    /// Total dissolved solids (ppm)
    pub tds: i64,
    /// Water temperature (°C)
    pub temp: f64,
    /// Dissolved oxygen (mg/L)
    #[serde(rename = "do")]
    pub dissolved_oxygen: f64,
}

impl From<&SeriesPoint> for TrendPoint {
    fn from(p: &SeriesPoint) -> Self {
        Self {
            t: p.t,
            ph: zero_when_missing(p.ph),
            ntu: zero_when_missing(p.ntu),
            tds: zero_when_missing(p.tds) as i64,
            temp: zero_when_missing(p.temp),
            dissolved_oxygen: zero_when_missing(p.dissolved_oxygen),
        }
    }
}

/// Where the series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Database,
    Hybrid,
    Mock,
}

/// Coarse direction of change for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// Per-parameter aggregate stats.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParameterStats {
    pub current: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub trend: Trend,
}

/// First and last timestamp of the series.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Parameters with at least one valid value across the series. A parameter
/// that is null everywhere is omitted from the JSON object entirely.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ParameterSummaries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<ParameterStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntu: Option<ParameterStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tds: Option<ParameterStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<ParameterStats>,
    #[serde(rename = "do", skip_serializing_if = "Option::is_none")]
    pub dissolved_oxygen: Option<ParameterStats>,
}

/// Aggregate view of a completed series.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub total_readings: usize,
    pub time_range: TimeRange,
    pub parameters: ParameterSummaries,
}

/// Round to 2 decimal places (wire precision for all float parameters).
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Missing-value substitution at the wire edge: nulls become 0. Lossy, but
/// the dashboard contract depends on it.
#[must_use]
pub fn zero_when_missing(v: Option<f64>) -> f64 {
    v.unwrap_or(0.0)
}
