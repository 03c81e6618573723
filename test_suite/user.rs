use reqwest::StatusCode;

use crate::{
    helpers::{
        ResponseParts, load_app_settings_for_testing, spawn_placeholder_stub, split_response,
        todos_fixture, users_fixture,
    },
    test_case::TestCase,
};

/// Check that the users endpoint returns the external records without a count.
#[tokio::test]
async fn the_users_endpoint_returns_the_external_records() {
    let stub = spawn_placeholder_stub(StatusCode::OK, todos_fixture(), users_fixture()).await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.user_list(None).await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::OK, "{}", body);
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert!(value.get("count").is_none());
    let users = value["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[0]["name"], "Leanne Graham");
    assert_eq!(users[0]["username"], "Bret");
    assert_eq!(users[0]["email"], "Sincere@april.biz");

    test_case.end().await;
    stub.end();
}

/// Check that the users endpoint includes the count when the flag is true.
#[tokio::test]
async fn the_users_endpoint_returns_a_count_when_requested() {
    let stub = spawn_placeholder_stub(StatusCode::OK, todos_fixture(), users_fixture()).await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.user_list(Some(true)).await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::OK, "{}", body);
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["users"].as_array().unwrap().len(), 2);

    test_case.end().await;
    stub.end();
}

/// Check that the users endpoint omits the count when the flag is false.
#[tokio::test]
async fn the_users_endpoint_omits_the_count_when_the_flag_is_false() {
    let stub = spawn_placeholder_stub(StatusCode::OK, todos_fixture(), users_fixture()).await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.user_list(Some(false)).await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::OK, "{}", body);
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert!(value.get("count").is_none());
    assert_eq!(value["users"].as_array().unwrap().len(), 2);

    test_case.end().await;
    stub.end();
}

/// Check that an external failure surfaces as a server error.
#[tokio::test]
async fn the_users_endpoint_fails_when_the_external_api_fails() {
    let stub = spawn_placeholder_stub(
        StatusCode::SERVICE_UNAVAILABLE,
        serde_json::json!([]),
        serde_json::json!([]),
    )
    .await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.user_list(Some(true)).await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_GATEWAY, "{}", body);
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert!(value.get("users").is_none());

    test_case.end().await;
    stub.end();
}
