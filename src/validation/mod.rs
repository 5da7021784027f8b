/// Input validation for dates and output file names
use crate::domain::DateRange;
use crate::errors::ValidationError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn date_pattern() -> &'static Regex {
    static DATE: OnceLock<Regex> = OnceLock::new();
    DATE.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern is valid")
    })
}

/// Year, month and day of a well-formed `YYYY-MM-DD` string, not yet
/// checked against the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    year: i32,
    month: u32,
    day: u32,
}

impl DateFields {
    /// Resolve to a real calendar day
    pub fn to_date(self) -> Result<NaiveDate, ValidationError> {
        if self.year == 0 {
            return Err(ValidationError::BadCalendarValue);
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(ValidationError::BadCalendarValue)
    }
}

/// Check the `YYYY-MM-DD` shape only
pub fn parse_date_fields(input: &str) -> Result<DateFields, ValidationError> {
    let caps = date_pattern()
        .captures(input)
        .ok_or(ValidationError::BadFormat)?;

    // The pattern guarantees ASCII digits.
    Ok(DateFields {
        year: caps[1].parse().map_err(|_| ValidationError::BadFormat)?,
        month: caps[2].parse().map_err(|_| ValidationError::BadFormat)?,
        day: caps[3].parse().map_err(|_| ValidationError::BadFormat)?,
    })
}

/// Parse a `YYYY-MM-DD` string into a real calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    parse_date_fields(input)?.to_date()
}

/// Parse both ends of a range and require `start <= end`
pub fn parse_range(start: &str, end: &str) -> Result<DateRange, ValidationError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    DateRange::new(start, end)
}

/// Reject dates strictly after `today`
pub fn ensure_not_future(
    date: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    if date > today {
        return Err(ValidationError::FutureDate);
    }
    Ok(date)
}

/// Check a user-supplied output file name
pub fn validate_file_name(
    name: &str,
    required_extension: Option<&str>,
) -> Result<(), ValidationError> {
    if name.is_empty() || name == " " {
        return Err(ValidationError::EmptyName);
    }

    if let Some(ext) = required_extension {
        if !name.ends_with(ext) {
            return Err(ValidationError::WrongExtension {
                required: ext.to_string(),
            });
        }
    }

    Ok(())
}
