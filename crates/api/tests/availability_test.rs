use chrono::{NaiveDate, Utc};
use courtside_core::{
    availability::{is_range_available, TimeRange},
    errors::CourtsideError,
    models::booking::AvailabilityResponse,
};
use courtside_db::{
    mock::repositories::MockBookingRepo,
    models::DbBooking,
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn booking_row(court_id: Uuid, date: NaiveDate, start: &str, end: &str) -> DbBooking {
    DbBooking {
        id: Uuid::new_v4(),
        court_id,
        user_id: Uuid::new_v4(),
        event_id: None,
        date,
        start_time: start.to_string(),
        end_time: end.to_string(),
        status: "confirmed".to_string(),
        created_at: Utc::now(),
    }
}

// Mirrors the handler's check strategy against a mock repository: prefer
// the server-side check, fall back to snapshot + engine when it fails.
async fn check_with_repo(
    repo: &MockBookingRepo,
    court_id: Uuid,
    date: NaiveDate,
    start: &'static str,
    end: &'static str,
) -> Result<AvailabilityResponse, CourtsideError> {
    let proposed = TimeRange::parse(start, end)?;

    match repo.is_court_available(court_id, date, start, end).await {
        Ok(available) => Ok(AvailabilityResponse { available }),
        Err(_) => {
            let snapshot = repo.active_for_court_date(court_id, date).await?;
            let bookings = snapshot
                .iter()
                .map(|b| TimeRange::parse(&b.start_time, &b.end_time))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(AvailabilityResponse {
                available: is_range_available(&bookings, &proposed),
            })
        }
    }
}

#[tokio::test]
async fn test_server_side_check_is_preferred() {
    let court_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();

    let mut repo = MockBookingRepo::new();
    repo.expect_is_court_available()
        .times(1)
        .returning(|_, _, _, _| Ok(false));
    // The snapshot fetch must not run when the server-side check answers.
    repo.expect_active_for_court_date().times(0);

    let response = check_with_repo(&repo, court_id, date, "10:00", "11:00")
        .await
        .expect("check succeeds");
    assert!(!response.available);
}

#[tokio::test]
async fn test_fallback_uses_snapshot_and_engine() {
    let court_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();

    let mut repo = MockBookingRepo::new();
    repo.expect_is_court_available()
        .times(1)
        .returning(|_, _, _, _| Err(eyre::eyre!("function check_court_availability not found")));
    repo.expect_active_for_court_date()
        .times(1)
        .returning(move |cid, d| Ok(vec![booking_row(cid, d, "09:00", "10:30")]));

    let response = check_with_repo(&repo, court_id, date, "10:00", "11:00")
        .await
        .expect("fallback check succeeds");
    assert!(!response.available);
}

#[tokio::test]
async fn test_fallback_reports_free_range_as_available() {
    let court_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();

    let mut repo = MockBookingRepo::new();
    repo.expect_is_court_available()
        .returning(|_, _, _, _| Err(eyre::eyre!("rpc unavailable")));
    repo.expect_active_for_court_date()
        .returning(move |cid, d| Ok(vec![booking_row(cid, d, "09:00", "10:00")]));

    // Back-to-back with the existing booking, so still free.
    let response = check_with_repo(&repo, court_id, date, "10:00", "11:00")
        .await
        .expect("fallback check succeeds");
    assert!(response.available);
}

#[tokio::test]
async fn test_malformed_range_is_rejected_before_any_query() {
    let mut repo = MockBookingRepo::new();
    repo.expect_is_court_available().times(0);
    repo.expect_active_for_court_date().times(0);

    let result = check_with_repo(
        &repo,
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        "9:00",
        "10:00",
    )
    .await;

    assert!(matches!(result, Err(CourtsideError::Validation(_))));
}

#[tokio::test]
async fn test_inverted_range_is_rejected_before_any_query() {
    let mut repo = MockBookingRepo::new();
    repo.expect_is_court_available().times(0);

    let result = check_with_repo(
        &repo,
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        "11:00",
        "10:00",
    )
    .await;

    assert!(matches!(result, Err(CourtsideError::Validation(_))));
}
