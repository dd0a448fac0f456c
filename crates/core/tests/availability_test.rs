use courtside_core::availability::{
    available_slots, is_range_available, Slot, SlotConfig, TimeOfDay, TimeRange,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn t(s: &str) -> TimeOfDay {
    s.parse().expect("valid HH:MM literal")
}

fn range(start: &str, end: &str) -> TimeRange {
    TimeRange::parse(start, end).expect("valid range literal")
}

#[rstest]
#[case("08:00")]
#[case("00:00")]
#[case("23:59")]
#[case("09:05")]
fn test_time_of_day_round_trips(#[case] s: &str) {
    assert_eq!(t(s).to_string(), s);
}

#[rstest]
#[case("8:00")]
#[case("08:0")]
#[case("24:00")]
#[case("12:60")]
#[case("ab:cd")]
#[case("1200")]
#[case("")]
fn test_time_of_day_rejects_malformed_input(#[case] s: &str) {
    assert!(s.parse::<TimeOfDay>().is_err(), "accepted {s:?}");
}

#[test]
fn test_time_of_day_ordering_matches_lexicographic() {
    let times = ["00:00", "08:00", "08:30", "09:00", "21:59", "22:00"];
    for pair in times.windows(2) {
        assert!(t(pair[0]) < t(pair[1]), "{} < {}", pair[0], pair[1]);
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_time_range_rejects_inverted_and_empty_ranges() {
    assert!(TimeRange::parse("11:00", "10:00").is_err());
    assert!(TimeRange::parse("10:00", "10:00").is_err());
}

#[test]
fn test_empty_booking_set_is_always_available() {
    assert!(is_range_available(&[], &range("10:00", "11:00")));
    assert!(is_range_available(&[], &range("00:00", "23:59")));
}

#[rstest]
// Back-to-back adjacency: shared endpoints never conflict.
#[case("09:00", "10:00", true)]
#[case("11:00", "12:00", true)]
// Plain containment and partial overlap.
#[case("10:00", "11:00", false)]
#[case("10:30", "11:30", false)]
#[case("09:30", "10:30", false)]
#[case("09:00", "12:00", false)]
fn test_overlap_against_existing_booking(
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected: bool,
) {
    let bookings = vec![range("10:00", "11:00")];
    let proposed = range(start, end);
    assert_eq!(is_range_available(&bookings, &proposed), expected);
}

#[test]
fn test_partial_overlap_with_half_hour_booking() {
    let bookings = vec![range("09:00", "10:30")];

    assert!(!is_range_available(&bookings, &range("10:00", "11:00")));
    assert!(is_range_available(&bookings, &range("08:00", "09:00")));
}

#[test]
fn test_any_single_conflict_makes_range_unavailable() {
    let bookings = vec![
        range("08:00", "09:00"),
        range("12:00", "13:00"),
        range("20:00", "21:00"),
    ];

    assert!(!is_range_available(&bookings, &range("12:30", "14:00")));
    assert!(is_range_available(&bookings, &range("09:00", "12:00")));
}

#[test]
fn test_default_config_with_no_bookings_yields_fourteen_hourly_slots() {
    let slots = available_slots(&[], &SlotConfig::default());

    assert_eq!(slots.len(), 14);
    assert_eq!(slots[0].start_time, t("08:00"));
    assert_eq!(slots[13].end_time, t("22:00"));

    // Contiguous hourly tiling.
    for pair in slots.windows(2) {
        assert_eq!(pair[0].end_time, pair[1].start_time);
        assert_eq!(
            pair[0].end_time.minutes() - pair[0].start_time.minutes(),
            60
        );
    }
}

#[test]
fn test_single_booking_removes_exactly_its_slot() {
    let bookings = vec![range("12:00", "13:00")];
    let slots = available_slots(&bookings, &SlotConfig::default());

    assert_eq!(slots.len(), 13);
    assert!(!slots
        .iter()
        .any(|slot| slot.start_time == t("12:00")));

    // Chronological and contiguous around the gap.
    assert!(slots.windows(2).all(|pair| pair[0].end_time <= pair[1].start_time));
    assert!(slots.iter().any(|slot| slot.end_time == t("12:00")));
    assert!(slots.iter().any(|slot| slot.start_time == t("13:00")));
}

#[test]
fn test_booking_near_closing_removes_final_slot() {
    // The 21:00-22:00 candidate is still generated and tested even though
    // a conflicting booking only touches its last half hour.
    let bookings = vec![range("21:30", "22:00")];
    let slots = available_slots(&bookings, &SlotConfig::default());

    assert_eq!(slots.len(), 13);
    assert_eq!(slots.last().map(|slot| slot.end_time), Some(t("21:00")));
}

#[test]
fn test_final_slot_may_run_past_operating_end() {
    // Slot generation gates only the slot start, so a 90-minute duration
    // tiles one slot past the end of the window.
    let config = SlotConfig {
        operating_start: t("20:00"),
        operating_end: t("22:00"),
        slot_duration_minutes: 90,
    };
    let slots = available_slots(&[], &config);

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].start_time, t("21:30"));
    assert_eq!(slots[1].end_time, t("23:00"));
}

#[test]
fn test_operations_are_idempotent() {
    let bookings = vec![range("10:00", "11:30"), range("15:00", "16:00")];
    let proposed = range("11:00", "12:00");
    let config = SlotConfig::default();

    assert_eq!(
        is_range_available(&bookings, &proposed),
        is_range_available(&bookings, &proposed)
    );
    assert_eq!(
        available_slots(&bookings, &config),
        available_slots(&bookings, &config)
    );
}

#[test]
fn test_oversized_duration_saturates_instead_of_wrapping() {
    // u16::MAX minutes added to 08:00 saturates, so the single candidate
    // ends at the representable maximum and the cursor leaves the window
    // after one step instead of wrapping back below it.
    let config = SlotConfig {
        slot_duration_minutes: u16::MAX,
        ..SlotConfig::default()
    };
    let slots = available_slots(&[], &config);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start_time, t("08:00"));
    assert_eq!(slots[0].end_time.minutes(), u16::MAX);
}

#[rstest]
#[case(0)]
#[case(1441)]
#[case(u16::MAX)]
fn test_slot_config_rejects_out_of_bounds_durations(#[case] minutes: u16) {
    assert!(SlotConfig::new(t("08:00"), t("22:00"), minutes).is_err());
}

#[test]
fn test_slot_config_accepts_full_day_duration_and_rejects_empty_window() {
    assert!(SlotConfig::new(t("00:00"), t("23:59"), 1440).is_ok());
    assert!(SlotConfig::new(t("22:00"), t("08:00"), 60).is_err());
    assert!(SlotConfig::new(t("08:00"), t("08:00"), 60).is_err());
}

#[test]
fn test_zero_duration_produces_no_slots() {
    let config = SlotConfig {
        slot_duration_minutes: 0,
        ..SlotConfig::default()
    };
    assert_eq!(available_slots(&[], &config), Vec::<Slot>::new());
}

#[test]
fn test_slot_serializes_as_time_strings() {
    let slots = available_slots(&[], &SlotConfig::default());
    let json = serde_json::to_value(&slots[0]).expect("serialize slot");

    assert_eq!(
        json,
        serde_json::json!({ "start_time": "08:00", "end_time": "09:00" })
    );
}
