use chrono::NaiveDate;

/// Earliest year accepted by the range check.
pub const MIN_YEAR: i32 = 1902;

/// Latest year accepted by the range check.
pub const MAX_YEAR: i32 = 2050;

/// The outcome of checking a submitted date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCheck {
    /// A real calendar date within the accepted range, rendered canonically.
    Valid(String),
    /// The text does not have a day/month/year shape.
    InvalidFormat,
    /// Shaped like a date, but not an actual calendar date or the year is
    /// outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    OutOfRange,
}

impl DateCheck {
    /// Check if the date was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Get the normalized date, if accepted.
    pub fn as_valid(&self) -> Option<&str> {
        match self {
            Self::Valid(normalized) => Some(normalized),
            _ => None,
        }
    }
}

/// How a checked date is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Form display rendering, `DD/MM/YYYY`.
    Display,
    /// Storage rendering, `YYYY-MM-DD`.
    Storage,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Display => "%d/%m/%Y",
            Self::Storage => "%Y-%m-%d",
        }
    }
}

/// Parse, range-check, and normalize a submitted date string.
///
/// Accepts three numeric segments separated by `/`, `-`, or `.`, ordered
/// day-first (`31/12/2024`) or year-first when the leading segment has four
/// digits (`2024-12-31`). Classification is independent of `style`:
///
/// - a text without that shape is [`DateCheck::InvalidFormat`];
/// - a shaped text naming an impossible calendar date, or a year outside
///   [`MIN_YEAR`]..=[`MAX_YEAR`], is [`DateCheck::OutOfRange`];
/// - anything else comes back [`DateCheck::Valid`] in the requested
///   rendering.
///
/// # Example
/// ```
/// use questionnaire_types::{DateCheck, DateStyle, check_date};
///
/// assert_eq!(
///     check_date("1/2/2024", DateStyle::Display),
///     DateCheck::Valid("01/02/2024".to_string()),
/// );
/// assert_eq!(check_date("31/02/2024", DateStyle::Display), DateCheck::OutOfRange);
/// assert_eq!(check_date("soon", DateStyle::Display), DateCheck::InvalidFormat);
/// ```
pub fn check_date(raw: &str, style: DateStyle) -> DateCheck {
    let segments: Vec<&str> = raw.trim().split(['/', '-', '.']).collect();
    if segments.len() != 3 {
        return DateCheck::InvalidFormat;
    }
    if segments
        .iter()
        .any(|s| s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()))
    {
        return DateCheck::InvalidFormat;
    }

    let (year, month, day) = if segments[0].len() == 4 {
        (segments[0], segments[1], segments[2])
    } else {
        (segments[2], segments[1], segments[0])
    };

    let (Ok(year), Ok(month), Ok(day)) = (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>())
    else {
        return DateCheck::InvalidFormat;
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return DateCheck::OutOfRange;
    }
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => DateCheck::Valid(date.format(style.pattern()).to_string()),
        None => DateCheck::OutOfRange,
    }
}
