//! Interchange format of schedule entries.
#![cfg(feature = "serde")]

use rota_shifts::{cycle, find_long_weekends, generate_schedule, ScheduleEntry, Shift};
use rota_time::{BespokeCalendar, Date};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn entry_fields_in_order_with_iso_date() {
    let cal = BespokeCalendar::new("Stub").with_holiday(date(2024, 10, 7), "Stub Day");
    let s = generate_schedule(
        date(2024, 10, 6),
        date(2024, 10, 7),
        cycle("A").unwrap(),
        &cal,
    )
    .unwrap();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"[{"date":"2024-10-06","weekday":"Sunday","shift":"Night","holiday":""},"#,
            r#"{"date":"2024-10-07","weekday":"Monday","shift":"Night","holiday":"Stub Day"}]"#
        )
    );
}

#[test]
fn entry_deserializes_empty_holiday_as_none() {
    let e: ScheduleEntry = serde_json::from_str(
        r#"{"date":"2024-10-11","weekday":"Friday","shift":"Off","holiday":""}"#,
    )
    .unwrap();
    assert_eq!(e, ScheduleEntry::new(date(2024, 10, 11), Shift::Off, None));
}

#[test]
fn entry_with_wrong_weekday_is_rejected() {
    let err = serde_json::from_str::<ScheduleEntry>(
        r#"{"date":"2024-10-07","weekday":"Friday","shift":"Off","holiday":""}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("2024-10-07 is a Monday, not a Friday"), "{err}");
}

#[test]
fn mislabelled_days_cannot_form_a_long_weekend() {
    let json = concat!(
        r#"[{"date":"2024-10-07","weekday":"Friday","shift":"Off","holiday":""},"#,
        r#"{"date":"2024-10-08","weekday":"Saturday","shift":"Off","holiday":""}]"#
    );
    assert!(serde_json::from_str::<Vec<ScheduleEntry>>(json).is_err());

    let json = concat!(
        r#"[{"date":"2024-10-11","weekday":"Friday","shift":"Off","holiday":""},"#,
        r#"{"date":"2024-10-12","weekday":"Saturday","shift":"Off","holiday":""}]"#
    );
    let entries: Vec<ScheduleEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(find_long_weekends(&entries).len(), 2);
}
