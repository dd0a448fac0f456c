use courtside_core::errors::{CourtsideError, CourtsideResult};
use std::error::Error;

#[test]
fn test_courtside_error_display() {
    let not_found = CourtsideError::NotFound("Court not found".to_string());
    let validation = CourtsideError::Validation("Invalid input".to_string());
    let authentication = CourtsideError::Authentication("Invalid password".to_string());
    let authorization = CourtsideError::Authorization("Not authorized".to_string());
    let conflict = CourtsideError::Conflict("Time slot not available".to_string());
    let database = CourtsideError::Database(eyre::eyre!("Database connection failed"));
    let internal = CourtsideError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Court not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Invalid password"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Not authorized"
    );
    assert_eq!(conflict.to_string(), "Conflict: Time slot not available");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let courtside_error = CourtsideError::Internal(Box::new(io_error));

    assert!(courtside_error.source().is_some());
}

#[test]
fn test_courtside_result() {
    let result: CourtsideResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: CourtsideResult<i32> = Err(CourtsideError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Database error");
    let courtside_error = CourtsideError::Database(eyre_error);

    assert!(courtside_error.to_string().contains("Database error"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let courtside_error = CourtsideError::Internal(boxed_error);

    assert!(courtside_error.to_string().contains("IO error"));
}
