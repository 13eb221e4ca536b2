//! Today's date for calendar and schedule views.
//!
//! Browser builds read the local date from `js_sys::Date`; server and test
//! builds use the UTC date. The two can disagree around midnight, which only
//! shifts the initially highlighted day.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::Date;

/// The current calendar date.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = time::Month::try_from(now.get_month() as u8 + 1).unwrap_or(time::Month::January);
        Date::from_calendar_date(now.get_full_year() as i32, month, now.get_date() as u8).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn format_iso(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse `YYYY-MM-DD`; `None` for anything else.
pub fn parse_iso(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = time::Month::try_from(parts.next()?.parse::<u8>().ok()?).ok()?;
    let day = parts.next()?.parse().ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// `Mar 5`.
pub fn format_short(date: Date) -> String {
    let month = date.month().to_string();
    format!("{} {}", &month[..3], date.day())
}

/// `Tuesday, March 5, 2024`.
pub fn format_long(date: Date) -> String {
    format!("{}, {} {}, {}", date.weekday(), date.month(), date.day(), date.year())
}
