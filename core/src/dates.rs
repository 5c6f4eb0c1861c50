//! Calendar helpers for fixed-width DD-MM-YYYY date strings.
//!
//! Arithmetic clamps the day to 28 so month-length edge cases never
//! produce an invalid date. Validation of user input still accepts any
//! real calendar date (chrono does the leap-year bookkeeping).

use chrono::{Datelike, Local, NaiveDate};

use crate::employee::EmployeeType;
use crate::error::{CoreError, CoreResult};
use crate::rng::DeskRng;

pub const MIN_BIRTH_YEAR: i32 = 1900;
pub const MAX_BIRTH_YEAR: i32 = 2005;
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 3000;
/// Youngest age at which a date of joining is accepted.
pub const MIN_WORKING_AGE_YEARS: i32 = 18;
/// Contract lengths used when a date of leaving is materialized.
pub const INTERN_CONTRACT_MONTHS: i32 = 6;
pub const CONTRACTOR_CONTRACT_MONTHS: i32 = 12;

/// Split a DD-MM-YYYY string into (day, month, year).
pub fn parse(date: &str) -> CoreResult<(i32, i32, i32)> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && date[0..2].bytes().all(|b| b.is_ascii_digit())
        && date[3..5].bytes().all(|b| b.is_ascii_digit())
        && date[6..10].bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(CoreError::InvalidDate(date.to_string()));
    }
    let day = date[0..2].parse().expect("digits checked");
    let month = date[3..5].parse().expect("digits checked");
    let year = date[6..10].parse().expect("digits checked");
    Ok((day, month, year))
}

/// Compose a DD-MM-YYYY string, clamping day to 1..=28 and month to 1..=12.
pub fn format(day: i32, month: i32, year: i32) -> String {
    let day = day.clamp(1, 28);
    let month = month.clamp(1, 12);
    format!("{day:02}-{month:02}-{year:04}")
}

/// True when the string is a real calendar date (leap years included)
/// with a year in 1900..=3000.
pub fn is_valid_date(date: &str) -> bool {
    let Ok((day, month, year)) = parse(date) else {
        return false;
    };
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).is_some()
}

/// Today's date in DD-MM-YYYY.
pub fn current_date() -> String {
    let today = Local::now().date_naive();
    format(today.day() as i32, today.month() as i32, today.year())
}

/// Add months via month-index arithmetic, floored at year 0, day
/// clamped to 28.
pub fn add_months(date: &str, months: i32) -> CoreResult<String> {
    let (day, month, year) = parse(date)?;
    let total_months = (year * 12 + (month - 1) + months).max(0);
    Ok(format(day, (total_months % 12) + 1, total_months / 12))
}

/// Add whole years, day clamped to 28.
pub fn add_years(date: &str, years: i32) -> CoreResult<String> {
    let (day, month, year) = parse(date)?;
    Ok(format(day, month, year + years))
}

/// True when `to` is at least `years` years after `from`, measured in
/// whole months.
pub fn is_at_least_years_apart(from: &str, to: &str, years: i32) -> CoreResult<bool> {
    let (_, from_month, from_year) = parse(from)?;
    let (_, to_month, to_year) = parse(to)?;
    let from_index = from_year * 12 + (from_month - 1);
    let to_index = to_year * 12 + (to_month - 1);
    Ok(to_index - from_index >= years * 12)
}

/// Random date of birth: year 1900..=2005, day 1..=28.
pub fn random_dob(rng: &mut DeskRng) -> String {
    let day = rng.range_inclusive(1, 28);
    let month = rng.range_inclusive(1, 12);
    let year = rng.range_inclusive(MIN_BIRTH_YEAR, MAX_BIRTH_YEAR);
    format(day, month, year)
}

/// Random date of joining at least 18 years after the date of birth,
/// plus up to 20 extra years and 11 extra months.
pub fn random_doj_from_dob(rng: &mut DeskRng, dob: &str) -> CoreResult<String> {
    let base = add_years(dob, MIN_WORKING_AGE_YEARS)?;
    let with_years = add_years(&base, rng.range_inclusive(0, 20))?;
    add_months(&with_years, rng.range_inclusive(0, 11))
}

/// Date of leaving policy, materialized when a record resigns:
/// - Contractor: doj + 12 months with +/- 3 months jitter, floor 1 month.
/// - Intern: doj + 6 months.
/// - Full-time (and archived records): doj + 1..=10 years + 0..=11 months.
pub fn date_of_leaving(
    rng: &mut DeskRng,
    employee_type: EmployeeType,
    doj: &str,
) -> CoreResult<String> {
    match employee_type {
        EmployeeType::Contractor => {
            let jitter = rng.range_inclusive(-3, 3);
            let months = (CONTRACTOR_CONTRACT_MONTHS + jitter).max(1);
            add_months(doj, months)
        }
        EmployeeType::Intern => add_months(doj, INTERN_CONTRACT_MONTHS),
        EmployeeType::FullTime => {
            let with_years = add_years(doj, rng.range_inclusive(1, 10))?;
            add_months(&with_years, rng.range_inclusive(0, 11))
        }
    }
}
