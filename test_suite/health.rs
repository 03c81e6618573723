use reqwest::StatusCode;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    helpers::{ResponseParts, load_app_settings_for_testing, split_response},
    test_case::TestCase,
};

/// Check that the health check endpoint returns a healthy status.
#[tokio::test]
async fn health_check_returns_a_healthy_status() {
    // The health check never calls the external API nor the database
    let app_settings = load_app_settings_for_testing(String::from("http://127.0.0.1:9"));
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.get_health().await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::OK, "{}", body);
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["database"], "placeholder_api");
    assert_eq!(value["application"], "placeholder-api");
    OffsetDateTime::parse(value["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();

    test_case.end().await;
}

/// Check that the health check timestamp increases between successive calls.
#[tokio::test]
async fn health_check_timestamp_increases_between_calls() {
    let app_settings = load_app_settings_for_testing(String::from("http://127.0.0.1:9"));
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.get_health().await;
    let ResponseParts { body, .. } = split_response(response).await;
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    let first = OffsetDateTime::parse(value["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let response = test_case.get_health().await;
    let ResponseParts { body, .. } = split_response(response).await;
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    let second = OffsetDateTime::parse(value["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();

    assert!(second > first, "{} should be after {}", second, first);

    test_case.end().await;
}
