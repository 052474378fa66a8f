use crate::aggregate::BucketStore;
use crate::parse::parse_line;
use crate::report::{OutputFormat, ReportRequest, render};
use serde_json::json;

/// One success and one failure at 12:00, one success at 12:01.
fn sample_store() -> BucketStore {
    let mut store = BucketStore::new();
    for line in [
        "127.0.0.1 - - [26/May/2015:12:00:00 +0100] \"GET /a HTTP/1.1\" 200 10 200",
        "127.0.0.1 - - [26/May/2015:12:00:30 +0100] \"GET /b HTTP/1.1\" 500 10 200",
        "127.0.0.1 - - [26/May/2015:12:01:30 +0100] \"GET /c HTTP/1.1\" 200 10 200",
    ] {
        store.accumulate(&parse_line(line).unwrap()).unwrap();
    }
    store
}

fn request(detail: bool, aggregate: bool, format: OutputFormat) -> ReportRequest {
    ReportRequest {
        detail,
        aggregate,
        format,
    }
}

//-----------------------------------------------------------------------------
// YAML rendering
//-----------------------------------------------------------------------------
#[test]
fn yaml_document_contains_both_views() {
    // Arrange
    let store = sample_store();

    // Act
    let out = render(&store, request(true, true, OutputFormat::Yaml)).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();

    // Assert
    let detail = value["detail"].as_sequence().unwrap();
    assert_eq!(detail.len(), 2);
    assert_eq!(detail[0]["successful"].as_u64(), Some(1));
    assert_eq!(detail[0]["failures"].as_u64(), Some(1));
    assert_eq!(detail[0]["meanResponseTime"].as_u64(), Some(200));
    assert_eq!(
        detail[0]["mbSent"].as_f64(),
        Some(20.0 / (1024.0 * 1024.0))
    );

    let aggregate = &value["aggregate"];
    assert_eq!(aggregate["durationInMinutes"].as_u64(), Some(2));
    assert_eq!(aggregate["successfulPerMinute"].as_f64(), Some(1.0));
    assert_eq!(aggregate["failuresPerMinute"].as_f64(), Some(0.5));
    assert_eq!(aggregate["meanResponseTime"].as_u64(), Some(200));
    assert_eq!(aggregate["timeSpentRespondingPerMinute"].as_u64(), Some(300));
    assert_eq!(
        aggregate["mbSentPerMinute"].as_f64(),
        Some(30.0 / (1024.0 * 1024.0 * 2.0))
    );
}

#[test]
fn yaml_detail_rows_are_in_minute_order() {
    // Arrange
    let store = sample_store();

    // Act
    let out = render(&store, request(true, false, OutputFormat::Yaml)).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();

    // Assert
    let minutes: Vec<&str> = value["detail"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|row| row["minute"].as_str().unwrap())
        .collect();
    assert_eq!(
        minutes,
        vec!["2015-05-26T12:00:00+01:00", "2015-05-26T12:01:00+01:00"]
    );
}

#[test]
fn disabled_views_leave_no_keys() {
    // Arrange
    let store = sample_store();

    // Act
    let out = render(&store, request(false, true, OutputFormat::Yaml)).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();

    // Assert
    assert!(value.get("detail").is_none());
    assert!(value.get("aggregate").is_some());
}

//-----------------------------------------------------------------------------
// Empty store
//-----------------------------------------------------------------------------
#[test]
fn no_data_line_when_aggregate_is_requested_on_an_empty_store() {
    // Arrange
    let store = BucketStore::new();

    // Act
    let out = render(&store, request(true, true, OutputFormat::Yaml)).unwrap();

    // Assert
    assert_eq!(out, "No data\n");
}

#[test]
fn empty_store_detail_only_renders_an_empty_sequence() {
    // Arrange
    let store = BucketStore::new();

    // Act
    let out = render(&store, request(true, false, OutputFormat::Yaml)).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();

    // Assert
    assert_eq!(value["detail"].as_sequence().map(Vec::len), Some(0));
}

//-----------------------------------------------------------------------------
// JSON rendering
//-----------------------------------------------------------------------------
#[test]
fn json_aggregate_matches_the_expected_document() {
    // Arrange
    let store = sample_store();

    // Act
    let out = render(&store, request(false, true, OutputFormat::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    // Assert
    assert_eq!(
        value,
        json!({
            "aggregate": {
                "durationInMinutes": 2,
                "successfulPerMinute": 1.0,
                "failuresPerMinute": 0.5,
                "meanResponseTime": 200,
                "timeSpentRespondingPerMinute": 300,
                "mbSentPerMinute": 30.0 / (1024.0 * 1024.0 * 2.0),
            }
        })
    );
}

#[test]
fn json_output_ends_with_a_newline() {
    // Arrange
    let store = sample_store();

    // Act
    let out = render(&store, request(true, true, OutputFormat::Json)).unwrap();

    // Assert
    assert!(out.ends_with('\n'));
}
