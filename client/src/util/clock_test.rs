use super::*;
use time::macros::date;

#[test]
fn iso_round_trips_through_date_input_format() {
    assert_eq!(format_iso(date!(2024 - 03 - 05)), "2024-03-05");
    assert_eq!(parse_iso("2024-03-05"), Some(date!(2024 - 03 - 05)));
}

#[test]
fn parse_iso_rejects_garbage() {
    assert_eq!(parse_iso(""), None);
    assert_eq!(parse_iso("2024-13-01"), None);
    assert_eq!(parse_iso("2023-02-29"), None);
    assert_eq!(parse_iso("march"), None);
}

#[test]
fn display_formats() {
    assert_eq!(format_short(date!(2024 - 03 - 05)), "Mar 5");
    assert_eq!(format_long(date!(2024 - 03 - 05)), "Tuesday, March 5, 2024");
}
