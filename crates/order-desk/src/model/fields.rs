//! Field rules shared by several record kinds.

use time::macros::format_description;
use time::Date;

/// Longest name accepted for a food or a client, in characters.
pub const MAX_NAME_CHARS: usize = 49;
/// Longest phone number accepted for a client, in characters.
pub const MAX_PHONE_CHARS: usize = 14;

/// Returns `Err(len)` when `text` is longer than `max` characters.
pub fn check_length(text: &str, max: usize) -> Result<(), usize> {
    let len = text.chars().count();
    if len > max {
        Err(len)
    } else {
        Ok(())
    }
}

/// Whether `text` is a real calendar date written as `YYYY-MM-DD`, year 0001 or later.
pub fn is_calendar_date(text: &str) -> bool {
    // `[year]` alone would also take a leading sign.
    if text.len() != 10 || !text.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        return false;
    }
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .is_ok_and(|date| date.year() >= 1)
}

/// Label used for availability in listings and in the exported document.
pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Si"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(check_length("Piña", 4), Ok(()));
        assert_eq!(check_length("Piñata", 4), Err(6));
        assert_eq!(check_length(&"x".repeat(MAX_NAME_CHARS), MAX_NAME_CHARS), Ok(()));
        assert_eq!(check_length(&"x".repeat(50), MAX_NAME_CHARS), Err(50));
    }

    #[test]
    fn dates_must_exist_on_the_calendar() {
        assert!(is_calendar_date("2024-01-01"));
        assert!(is_calendar_date("2024-02-29"));
        assert!(!is_calendar_date("2023-02-29"));
        assert!(!is_calendar_date("2024-13-01"));
        assert!(!is_calendar_date("2024-1-1"));
        assert!(!is_calendar_date("01/02/2024"));
        assert!(!is_calendar_date("2024-01-01 "));
        assert!(!is_calendar_date(""));
        assert!(!is_calendar_date("+2024-01-01"));
        assert!(!is_calendar_date("-2024-01-01"));
        assert!(!is_calendar_date("+024-01-01"));
        assert!(!is_calendar_date("0000-01-01"));
        assert!(is_calendar_date("0001-01-01"));
    }
}
