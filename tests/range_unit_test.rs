//! Unit tests for range token resolution.
//!
//! Run with: cargo test --test range_unit_test

use chrono::Duration;
use horizon_api::series::RangeToken;

#[test]
fn known_tokens_parse() {
    assert_eq!(RangeToken::parse("24h"), Some(RangeToken::H24));
    assert_eq!(RangeToken::parse("7d"), Some(RangeToken::D7));
    assert_eq!(RangeToken::parse("30d"), Some(RangeToken::D30));
}

#[test]
fn unknown_tokens_rejected() {
    assert_eq!(RangeToken::parse(""), None);
    assert_eq!(RangeToken::parse("24H"), None);
    assert_eq!(RangeToken::parse("1d"), None);
    assert_eq!(RangeToken::parse("24h "), None);
    assert_eq!(RangeToken::parse("90d"), None);
}

#[test]
fn resolved_table_values() {
    let h24 = RangeToken::H24.spec();
    assert_eq!(h24.span, Duration::hours(24));
    assert_eq!(h24.min_real_samples, 12);
    assert_eq!(h24.target_samples, 24);
    assert_eq!(h24.interval, Duration::hours(1));

    let d7 = RangeToken::D7.spec();
    assert_eq!(d7.span, Duration::days(7));
    assert_eq!(d7.min_real_samples, 14);
    assert_eq!(d7.target_samples, 28);
    assert_eq!(d7.interval, Duration::hours(6));

    let d30 = RangeToken::D30.spec();
    assert_eq!(d30.span, Duration::days(30));
    assert_eq!(d30.min_real_samples, 15);
    assert_eq!(d30.target_samples, 30);
    assert_eq!(d30.interval, Duration::hours(24));
}

#[test]
fn spec_is_consistent_with_span() {
    // target_samples evenly spaced at interval must cover the span exactly
    for token in [RangeToken::H24, RangeToken::D7, RangeToken::D30] {
        let spec = token.spec();
        assert_eq!(
            spec.interval * spec.target_samples as i32,
            spec.span,
            "{token} interval times target should equal span"
        );
    }
}

#[test]
fn token_round_trips_through_display() {
    for token in [RangeToken::H24, RangeToken::D7, RangeToken::D30] {
        assert_eq!(RangeToken::parse(&token.to_string()), Some(token));
    }
}
