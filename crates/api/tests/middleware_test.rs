use axum::{http::StatusCode, response::IntoResponse};
use courtside_api::middleware::error_handling::AppError;
use courtside_core::errors::CourtsideError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(CourtsideError::NotFound("Court not found".into()), StatusCode::NOT_FOUND)]
#[case(CourtsideError::Validation("Invalid time".into()), StatusCode::BAD_REQUEST)]
#[case(CourtsideError::Authentication("Invalid password".into()), StatusCode::UNAUTHORIZED)]
#[case(CourtsideError::Authorization("Not the owner".into()), StatusCode::FORBIDDEN)]
#[case(CourtsideError::Conflict("Time slot not available".into()), StatusCode::CONFLICT)]
#[case(CourtsideError::Database(eyre::eyre!("connection refused")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: CourtsideError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();
    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_is_json_with_message() {
    let response =
        AppError(CourtsideError::Conflict("Time slot not available".into())).into_response();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("valid JSON body");

    assert_eq!(json["error"], "Conflict: Time slot not available");
}

#[test]
fn test_eyre_report_converts_to_database_error() {
    let report = eyre::eyre!("pool timed out");
    let app_error: AppError = report.into();

    assert!(matches!(app_error.0, CourtsideError::Database(_)));
}
