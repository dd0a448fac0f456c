use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbCourt, DbEvent, DbEventWithVenue};

// Mock repositories for testing
mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            court_id: Uuid,
            user_id: Uuid,
            event_id: Option<Uuid>,
            date: NaiveDate,
            start_time: &'static str,
            end_time: &'static str,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn active_for_court_date(
            &self,
            court_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn is_court_available(
            &self,
            court_id: Uuid,
            date: NaiveDate,
            start_time: &'static str,
            end_time: &'static str,
        ) -> eyre::Result<bool>;

        pub async fn cancel_booking(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub CourtRepo {
        pub async fn get_court_by_id(&self, id: Uuid) -> eyre::Result<Option<DbCourt>>;

        pub async fn courts_by_venue(&self, venue_id: Uuid) -> eyre::Result<Vec<DbCourt>>;
    }
}

mock! {
    pub EventRepo {
        pub async fn get_event_by_id(&self, id: Uuid) -> eyre::Result<Option<DbEvent>>;

        pub async fn list_events(
            &self,
            sport: Option<&'static str>,
            level: Option<&'static str>,
            query: Option<&'static str>,
        ) -> eyre::Result<Vec<DbEventWithVenue>>;

        pub async fn join_event(
            &self,
            event_id: Uuid,
            user_id: Uuid,
        ) -> eyre::Result<Option<i32>>;
    }
}
