use chrono::{NaiveDate, Utc};
use courtside_core::models::{
    booking::{Booking, BookingStatus, CreateBookingRequest},
    community::{Community, CommunityRole, CreateCommunityRequest},
    event::{CreateEventRequest, Event},
    profile::{Profile, Role},
    venue::{Court, CreateCourtRequest, Venue},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date literal")
}

#[test]
fn test_booking_serialization() {
    let booking = Booking {
        id: Uuid::new_v4(),
        court_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        event_id: Some(Uuid::new_v4()),
        date: date("2026-09-12"),
        start_time: "10:00".parse().unwrap(),
        end_time: "11:00".parse().unwrap(),
        status: BookingStatus::Confirmed,
        created_at: Utc::now(),
    };

    let json = to_string(&booking).expect("Failed to serialize booking");
    let deserialized: Booking = from_str(&json).expect("Failed to deserialize booking");

    assert_eq!(deserialized.id, booking.id);
    assert_eq!(deserialized.court_id, booking.court_id);
    assert_eq!(deserialized.date, booking.date);
    assert_eq!(deserialized.start_time, booking.start_time);
    assert_eq!(deserialized.end_time, booking.end_time);
    assert_eq!(deserialized.status, booking.status);

    // Time values stay zero-padded HH:MM on the wire.
    assert!(json.contains(r#""start_time":"10:00""#));
    assert!(json.contains(r#""status":"confirmed""#));
}

#[test]
fn test_venue_and_court_serialization() {
    let venue = Venue {
        id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        name: "Riverside Sports Park".to_string(),
        location: "12 River Road".to_string(),
        lat: Some(52.3676),
        lng: Some(4.9041),
        created_at: Utc::now(),
    };

    let json = to_string(&venue).expect("Failed to serialize venue");
    let deserialized: Venue = from_str(&json).expect("Failed to deserialize venue");
    assert_eq!(deserialized.id, venue.id);
    assert_eq!(deserialized.lat, venue.lat);

    let court = Court {
        id: Uuid::new_v4(),
        venue_id: venue.id,
        name: "Court 1".to_string(),
        sport: "padel".to_string(),
        capacity: 4,
        is_active: true,
        created_at: Utc::now(),
    };

    let json = to_string(&court).expect("Failed to serialize court");
    let deserialized: Court = from_str(&json).expect("Failed to deserialize court");
    assert_eq!(deserialized.venue_id, court.venue_id);
    assert_eq!(deserialized.capacity, 4);
}

#[test]
fn test_event_serialization() {
    let event = Event {
        id: Uuid::new_v4(),
        creator_id: Uuid::new_v4(),
        title: "Friday Night Futsal".to_string(),
        sport: "futsal".to_string(),
        level: "Intermediate".to_string(),
        date: date("2026-09-18"),
        start_time: "19:00".parse().unwrap(),
        end_time: "21:00".parse().unwrap(),
        venue_id: None,
        court_id: None,
        location: Some("City Hall".to_string()),
        max_players: 10,
        participants_count: 1,
        is_featured: false,
        created_at: Utc::now(),
    };

    let json = to_string(&event).expect("Failed to serialize event");
    let deserialized: Event = from_str(&json).expect("Failed to deserialize event");

    assert_eq!(deserialized.title, event.title);
    assert_eq!(deserialized.start_time, event.start_time);
    assert_eq!(deserialized.participants_count, 1);
}

#[test]
fn test_community_serialization() {
    let community = Community {
        id: Uuid::new_v4(),
        creator_id: Uuid::new_v4(),
        name: "Sunday Smashers".to_string(),
        description: Some("Badminton every Sunday".to_string()),
        sport: Some("badminton".to_string()),
        has_membership: true,
        created_at: Utc::now(),
    };

    let json = to_string(&community).expect("Failed to serialize community");
    let deserialized: Community = from_str(&json).expect("Failed to deserialize community");

    assert_eq!(deserialized.name, community.name);
    assert_eq!(deserialized.has_membership, community.has_membership);
}

#[rstest]
#[case(Role::Player, r#""player""#)]
#[case(Role::Organizer, r#""organizer""#)]
#[case(Role::VenueOwner, r#""venue_owner""#)]
fn test_role_wire_format(#[case] role: Role, #[case] expected: &str) {
    assert_eq!(to_string(&role).unwrap(), expected);
}

#[rstest]
#[case(CommunityRole::Leader, "leader")]
#[case(CommunityRole::Member, "member")]
fn test_community_role_as_str(#[case] role: CommunityRole, #[case] expected: &str) {
    assert_eq!(role.as_str(), expected);
    assert_eq!(to_string(&role).unwrap(), format!("\"{expected}\""));
}

#[test]
fn test_profile_without_role_round_trips() {
    let profile = Profile {
        id: Uuid::new_v4(),
        display_name: "Sam".to_string(),
        role: None,
        created_at: Utc::now(),
    };

    let json = to_string(&profile).expect("Failed to serialize profile");
    let deserialized: Profile = from_str(&json).expect("Failed to deserialize profile");
    assert_eq!(deserialized.role, None);
}

#[rstest]
#[case("Morning Padel", "padel", "Open", "07:00", "08:00")]
#[case("Lunch Basketball", "basketball", "Beginner", "12:00", "13:30")]
fn test_create_event_request(
    #[case] title: &str,
    #[case] sport: &str,
    #[case] level: &str,
    #[case] start: &str,
    #[case] end: &str,
) {
    let request = CreateEventRequest {
        creator_id: Uuid::new_v4(),
        title: title.to_string(),
        sport: sport.to_string(),
        level: level.to_string(),
        date: date("2026-10-01"),
        start_time: start.parse().unwrap(),
        end_time: end.parse().unwrap(),
        venue_id: Some(Uuid::new_v4()),
        court_id: Some(Uuid::new_v4()),
        location: None,
        max_players: 4,
    };

    let json = to_string(&request).expect("Failed to serialize create event request");
    let deserialized: CreateEventRequest =
        from_str(&json).expect("Failed to deserialize create event request");

    assert_eq!(deserialized.title, request.title);
    assert_eq!(deserialized.start_time, request.start_time);
    assert_eq!(deserialized.court_id, request.court_id);
}

#[test]
fn test_create_booking_request_rejects_malformed_time() {
    let json = r#"{
        "user_id": "a1b2c3d4-e5f6-4890-abcd-ef1234567890",
        "date": "2026-09-12",
        "start_time": "9:00",
        "end_time": "10:00",
        "event_id": null
    }"#;

    assert!(from_str::<CreateBookingRequest>(json).is_err());
}

#[test]
fn test_create_community_request_defaults_membership_flag() {
    let json = format!(
        r#"{{ "creator_id": "{}", "name": "Runners", "description": null, "sport": null }}"#,
        Uuid::new_v4()
    );
    let request: CreateCommunityRequest = from_str(&json).unwrap();
    assert!(!request.has_membership);
}

#[test]
fn test_create_court_request_capacity_is_optional() {
    let json = format!(
        r#"{{ "owner_id": "{}", "name": "Court 2", "sport": "tennis" }}"#,
        Uuid::new_v4()
    );
    let request: CreateCourtRequest = from_str(&json).unwrap();
    assert_eq!(request.capacity, None);
}
