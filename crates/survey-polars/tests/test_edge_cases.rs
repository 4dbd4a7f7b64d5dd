//! Tests for edge cases and error handling

mod common;

use common::survey_df;
use polars::prelude::*;
use survey_polars::{Error, PValue, SurveyStatsExt};

#[test]
fn test_empty_column() {
    let df = survey_df("q", &[]);

    let analysis = df.analyze_column("q").unwrap();
    assert_eq!(analysis.sample_size(), 0);
    assert!(analysis.table().is_empty());
    assert_eq!(analysis.p_value(), PValue::NotComputable);
}

#[test]
fn test_all_null_column() {
    let df = survey_df("q", &[None, None, None]);

    let analysis = df.analyze_column("q").unwrap();
    assert_eq!(analysis.sample_size(), 0);
    assert!(analysis.is_empty());
    assert_eq!(analysis.p_value(), PValue::NotComputable);
}

#[test]
fn test_invalid_column_error() {
    let df = survey_df("q", &[Some("A")]);

    let result = df.analyze_column("nonexistent");
    match result {
        Err(Error::InvalidColumn(column)) => assert_eq!(column, "nonexistent"),
        other => panic!("expected InvalidColumn, got {other:?}"),
    }
}

#[test]
fn test_invalid_column_leaves_frame_usable() {
    let df = survey_df("q", &[Some("A"), Some("B")]);

    assert!(df.analyze_column("nonexistent").is_err());
    // The failure mutated nothing; a valid request still works
    let analysis = df.analyze_column("q").unwrap();
    assert_eq!(analysis.sample_size(), 2);
}

#[test]
fn test_empty_string_is_a_category() {
    let df = survey_df("q", &[Some(""), Some(""), None, Some("A")]);

    let analysis = df.analyze_column("q").unwrap();
    assert_eq!(analysis.sample_size(), 3);
    let rows = analysis.table().rows();
    assert_eq!(rows[0].category, "");
    assert_eq!(rows[0].frequency, 2);
}

#[test]
fn test_single_response() {
    let df = survey_df("q", &[Some("Yes")]);

    let analysis = df.analyze_column("q").unwrap();
    assert_eq!(analysis.sample_size(), 1);
    assert_eq!(analysis.table().rows()[0].percent, 100.0);
    assert_eq!(analysis.p_value(), PValue::NotComputable);
    assert_eq!(analysis.p_value().to_string(), "p-value: N/A");
}

#[test]
fn test_boolean_column() {
    let df = df!["Has well" => [Some(true), Some(false), Some(true), None]].unwrap();

    let analysis = df.analyze_column("Has well").unwrap();
    assert_eq!(analysis.sample_size(), 3);
    assert_eq!(analysis.table().rows()[0].category, "true");
    assert_eq!(analysis.table().rows()[0].frequency, 2);
}
