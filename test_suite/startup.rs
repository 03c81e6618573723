use uuid::Uuid;

use settings::Environment;

use crate::helpers::{TEST_DATABASE_PREFIX, load_app_settings_for_testing, setup_database};

/// Check that startup validation creates the todos table and lists it.
#[tokio::test]
#[ignore]
async fn startup_validation_lists_the_tables_in_the_schema() {
    let mut app_settings = load_app_settings_for_testing(String::from("http://127.0.0.1:9"));
    app_settings.database.name =
        format!("{}{}", TEST_DATABASE_PREFIX, Uuid::new_v4()).replace('-', "_");
    let pool = setup_database(&app_settings.database).await;

    let tables = app::validate_startup(&app_settings, &pool).await.unwrap();

    assert_eq!(tables, vec![String::from("todos")]);
}

/// Check that startup validation is idempotent in the development mode.
#[tokio::test]
#[ignore]
async fn startup_validation_is_idempotent() {
    let mut app_settings = load_app_settings_for_testing(String::from("http://127.0.0.1:9"));
    app_settings.database.name =
        format!("{}{}", TEST_DATABASE_PREFIX, Uuid::new_v4()).replace('-', "_");
    let pool = setup_database(&app_settings.database).await;

    let first = app::validate_startup(&app_settings, &pool).await.unwrap();
    let second = app::validate_startup(&app_settings, &pool).await.unwrap();

    assert_eq!(first, second);
}

/// Check that a schema that does not exist yields an empty listing.
///
/// The production mode skips the schema bootstrap, so the configured schema
/// is genuinely absent when the diagnostic query runs.
#[tokio::test]
#[ignore]
async fn startup_validation_with_a_missing_schema() {
    let mut app_settings = load_app_settings_for_testing(String::from("http://127.0.0.1:9"));
    app_settings.database.name =
        format!("{}{}", TEST_DATABASE_PREFIX, Uuid::new_v4()).replace('-', "_");
    let pool = setup_database(&app_settings.database).await;
    app_settings.environment = Environment::Production;
    app_settings.database.schema = String::from("missing_schema");

    let tables = app::validate_startup(&app_settings, &pool).await.unwrap();

    assert!(tables.is_empty());
}
