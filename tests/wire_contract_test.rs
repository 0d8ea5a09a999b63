//! Serialization tests for the trends envelope. The dashboard parses these
//! field names as-is, so they are asserted on the serialized JSON rather
//! than on the Rust structs.
//!
//! Run with: cargo test --test wire_contract_test

use chrono::{TimeZone, Utc};
use horizon_api::routes::trends::TrendsResponse;
use horizon_api::series::{RangeToken, Reading, SourceData, combine};

fn envelope(source: SourceData) -> serde_json::Value {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    let combined = combine(source, RangeToken::H24, now);
    let response = TrendsResponse {
        device_id: "WQ-001".to_string(),
        range: RangeToken::H24.as_str().to_string(),
        data: combined.data,
        summary: combined.summary,
        data_source: combined.data_source,
        note: combined.note,
    };
    serde_json::to_value(&response).expect("envelope serializes")
}

#[test]
fn envelope_field_names() {
    let v = envelope(SourceData::Unconfigured);
    let obj = v.as_object().unwrap();

    for key in ["deviceId", "range", "data", "summary", "dataSource", "note"] {
        assert!(obj.contains_key(key), "missing envelope key {key}");
    }
    assert_eq!(v["deviceId"], "WQ-001");
    assert_eq!(v["range"], "24h");
    assert_eq!(v["dataSource"], "mock");
}

#[test]
fn point_field_names() {
    let v = envelope(SourceData::Unconfigured);
    let first = v["data"][0].as_object().unwrap();

    for key in ["t", "ph", "ntu", "tds", "temp", "do"] {
        assert!(first.contains_key(key), "missing point key {key}");
    }
    assert!(first["t"].is_string(), "timestamps are ISO strings");
    assert!(first["tds"].is_i64(), "tds is an integer on the wire");
}

#[test]
fn summary_field_names() {
    let v = envelope(SourceData::Unconfigured);
    let summary = v["summary"].as_object().unwrap();

    assert_eq!(summary["totalReadings"], 24);
    assert!(summary["timeRange"]["start"].is_string());
    assert!(summary["timeRange"]["end"].is_string());

    let params = summary["parameters"].as_object().unwrap();
    for key in ["ph", "ntu", "tds", "temp", "do"] {
        let stats = params[key].as_object().unwrap();
        for field in ["current", "min", "max", "avg", "trend"] {
            assert!(stats.contains_key(field), "missing {key}.{field}");
        }
        let trend = stats["trend"].as_str().unwrap();
        assert!(["increasing", "decreasing", "stable"].contains(&trend));
    }
}

#[test]
fn all_null_parameter_missing_from_parameters_object() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    let readings: Vec<Reading> = (1..=15)
        .map(|i| Reading {
            timestamp: now - chrono::Duration::hours(16 - i),
            ph: None,
            turbidity: Some(1.5),
            tds: Some(250.0),
            temperature: None,
            dissolved_oxygen: None,
        })
        .collect();

    let v = envelope(SourceData::Readings(readings));
    assert_eq!(v["dataSource"], "database");

    let params = v["summary"]["parameters"].as_object().unwrap();
    assert!(!params.contains_key("ph"), "all-null ph must be absent");
    assert!(!params.contains_key("temp"));
    assert!(!params.contains_key("do"));
    assert!(params.contains_key("ntu"));
    assert!(params.contains_key("tds"));
}
