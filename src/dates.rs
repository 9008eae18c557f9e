//! Date normalisation.
//!
//! Date pickers hand us ISO dates while people type "01 January 2024"; AGLC4
//! wants "1 January 2024". Anything not recognised passes through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:T[0-9:.]+(?:Z|[+-]\d{2}:?\d{2})?)?$").unwrap()
});
static ISO_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})$").unwrap());
static WRITTEN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0*(\d{1,2}) ([A-Za-z]+) (\d{4})$").unwrap());

fn month_number(month: &str) -> Option<usize> {
    month.parse().ok().filter(|m| (1..=12).contains(m))
}

fn month_name(month: usize) -> &'static str {
    MONTHS[month - 1]
}

fn month_from_name(name: &str) -> Option<usize> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|index| index + 1)
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: usize) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parses a day that exists in the given month.
fn valid_day(day: &str, year: &str, month: usize) -> Option<u32> {
    let year: u32 = year.parse().ok()?;
    day.parse::<u32>()
        .ok()
        .filter(|d| (1..=days_in_month(year, month)).contains(d))
}

/// Normalises a date to AGLC4 form.
///
/// # Examples
///
/// ```
/// use aglc_cite::dates::normalize_date;
///
/// assert_eq!(normalize_date("2024-03-05"), "5 March 2024");
/// assert_eq!(normalize_date("2024-03"), "March 2024");
/// assert_eq!(normalize_date("01 January 2024"), "1 January 2024");
/// assert_eq!(normalize_date("Spring 1998"), "Spring 1998");
/// ```
pub fn normalize_date(input: &str) -> String {
    let trimmed = input.trim();

    if let Some(caps) = ISO_DATE.captures(trimmed) {
        if let Some(month) = month_number(&caps[2]) {
            if let Some(day) = valid_day(&caps[3], &caps[1], month) {
                return format!("{} {} {}", day, month_name(month), &caps[1]);
            }
        }
        return trimmed.to_string();
    }

    if let Some(caps) = ISO_MONTH.captures(trimmed) {
        if let Some(month) = month_number(&caps[2]) {
            return format!("{} {}", month_name(month), &caps[1]);
        }
        return trimmed.to_string();
    }

    if let Some(caps) = WRITTEN_DATE.captures(trimmed) {
        // Month names we do not recognise keep the 1..=31 range.
        let month = month_from_name(&caps[2]);
        let day = match month {
            Some(month) => valid_day(&caps[1], &caps[3], month),
            None => caps[1].parse::<u32>().ok().filter(|d| (1..=31).contains(d)),
        };
        if let Some(day) = day {
            return format!("{} {} {}", day, &caps[2], &caps[3]);
        }
    }

    trimmed.to_string()
}
