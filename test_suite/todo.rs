use reqwest::StatusCode;

use domain::models::Todo;

use crate::{
    helpers::{
        ResponseParts, load_app_settings_for_testing, spawn_placeholder_stub, split_response,
        todos_fixture, users_fixture,
    },
    test_case::TestCase,
};

/// Check that the todos endpoint returns the external records unmodified.
#[tokio::test]
async fn the_todos_endpoint_returns_the_external_records() {
    let stub = spawn_placeholder_stub(StatusCode::OK, todos_fixture(), users_fixture()).await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.todo_list().await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::OK, "{}", body);
    let todos = serde_json::from_str::<Vec<Todo>>(&body).unwrap();
    assert_eq!(todos.len(), 3);
    assert_eq!(todos[0].id.0, 1);
    assert_eq!(todos[0].user_id.0, 1);
    assert_eq!(todos[0].title.0, "delectus aut autem");
    assert!(!todos[0].completed);
    assert!(todos[2].completed);
    // The response body is the external payload, record for record
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(value, todos_fixture());

    test_case.end().await;
    stub.end();
}

/// Check that an external failure surfaces as a server error with no partial data.
#[tokio::test]
async fn the_todos_endpoint_fails_when_the_external_api_fails() {
    let stub = spawn_placeholder_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!([]),
        serde_json::json!([]),
    )
    .await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.todo_list().await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_GATEWAY, "{}", body);
    let value = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(value["messages"].as_array().unwrap().len(), 1);
    assert!(value.get("todos").is_none());

    test_case.end().await;
    stub.end();
}

/// Check that a malformed external body surfaces as a server error.
#[tokio::test]
async fn the_todos_endpoint_fails_when_the_external_body_is_malformed() {
    let stub = spawn_placeholder_stub(
        StatusCode::OK,
        serde_json::json!({"not": "an array"}),
        users_fixture(),
    )
    .await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.todo_list().await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_GATEWAY, "{}", body);

    test_case.end().await;
    stub.end();
}

/// Check that a record with an empty title surfaces as a server error.
#[tokio::test]
async fn the_todos_endpoint_fails_when_a_title_is_empty() {
    let todos = serde_json::json!([
        {"userId": 1, "id": 1, "title": "", "completed": false}
    ]);
    let stub = spawn_placeholder_stub(StatusCode::OK, todos, users_fixture()).await;
    let app_settings = load_app_settings_for_testing(stub.base_url.clone());
    let test_case = TestCase::begin(app_settings).await;

    let response = test_case.todo_list().await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_GATEWAY, "{}", body);

    test_case.end().await;
    stub.end();
}
