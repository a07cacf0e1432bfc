use thiserror::*;

use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

#[derive(Debug, Error)]
pub enum TallyDateUtilsError {
    #[error("Invalid date: {0}")]
    DateError(#[from] time::error::ComponentRange),

    #[error("Invalid UTC offset: {0}")]
    OffsetError(Box<str>),
}

/// Inclusive start-of-day and end-of-day timestamps for a report date.
pub fn day_bounds(date: Date) -> (PrimitiveDateTime, PrimitiveDateTime) {
    (
        PrimitiveDateTime::new(date, Time::MIDNIGHT),
        PrimitiveDateTime::new(date, Time::from_hms(23, 59, 59).unwrap()),
    )
}

/// The day before `now` in the reference timezone given as a fixed UTC offset.
pub fn yesterday(now: OffsetDateTime, offset: UtcOffset) -> Date {
    (now.to_offset(offset) - Duration::days(1)).date()
}

/// Parse a `[+-]HH:MM` offset string such as `+05:30` or `-08:00`.
pub fn parse_utc_offset(raw: &str) -> Result<UtcOffset, TallyDateUtilsError> {
    let invalid = || TallyDateUtilsError::OffsetError(raw.into());
    let (sign, rest) = match raw.split_at_checked(1) {
        Some(("+", rest)) => (1i8, rest),
        Some(("-", rest)) => (-1i8, rest),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i8 = hours.parse().map_err(|_| invalid())?;
    let minutes: i8 = minutes.parse().map_err(|_| invalid())?;
    UtcOffset::from_hms(sign * hours, sign * minutes, 0).map_err(TallyDateUtilsError::from)
}
