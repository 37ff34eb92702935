use crate::{MAX_YEAR, MIN_YEAR};

/// Localized text lookup for everything the question types display.
///
/// The host survey engine supplies its own catalog; [`EnglishStrings`] is
/// the built-in default. Typed lookups replace the engine's key-based
/// `get_string` calls, so a missing key cannot happen at runtime.
pub trait Strings {
    /// Label of the yes option.
    fn yes(&self) -> String;

    /// Label of the no option.
    fn no(&self) -> String;

    /// Label of the no-answer option. May contain markup; it is passed to
    /// the template as-is.
    fn no_answer(&self) -> String;

    /// Notification for a submitted date that does not match the expected
    /// format. The offending literal is interpolated.
    fn wrong_date_format(&self, entered: &str) -> String;

    /// Notification for a date outside the accepted range.
    fn wrong_date_range(&self) -> String;
}

/// The built-in English string catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl Strings for EnglishStrings {
    fn yes(&self) -> String {
        "Yes".to_string()
    }

    fn no(&self) -> String {
        "No".to_string()
    }

    fn no_answer(&self) -> String {
        "No answer".to_string()
    }

    fn wrong_date_format(&self, entered: &str) -> String {
        format!("The date entered ({entered}) does not match the day/month/year format.")
    }

    fn wrong_date_range(&self) -> String {
        format!("The date entered must fall between the years {MIN_YEAR} and {MAX_YEAR}.")
    }
}
