//! Date helper tests: DD-MM-YYYY arithmetic, the day-clamp policy, and
//! the per-type date-of-leaving ranges.

use hrdesk_core::dates;
use hrdesk_core::employee::EmployeeType;
use hrdesk_core::rng::DeskRng;

fn month_index(date: &str) -> i32 {
    let (_, month, year) = dates::parse(date).expect("well-formed test date");
    year * 12 + (month - 1)
}

#[test]
fn add_months_rolls_over_year_boundaries() {
    assert_eq!(dates::add_months("15-11-2020", 3).unwrap(), "15-02-2021");
    assert_eq!(dates::add_months("01-01-2020", 12).unwrap(), "01-01-2021");
    assert_eq!(dates::add_months("10-03-2020", -3).unwrap(), "10-12-2019");
}

#[test]
fn arithmetic_clamps_day_to_28() {
    // 31st carried into a shorter month is clamped, by policy.
    assert_eq!(dates::add_months("31-01-2020", 1).unwrap(), "28-02-2020");
    assert_eq!(dates::add_years("29-02-2004", 1).unwrap(), "28-02-2005");
}

#[test]
fn add_years_preserves_month() {
    assert_eq!(dates::add_years("05-07-1999", 21).unwrap(), "05-07-2020");
}

#[test]
fn validation_accepts_real_calendar_dates_only() {
    assert!(dates::is_valid_date("01-01-1990"));
    assert!(dates::is_valid_date("29-02-2020"), "2020 is a leap year");
    assert!(dates::is_valid_date("31-12-3000"));

    assert!(!dates::is_valid_date("29-02-2019"), "2019 is not a leap year");
    assert!(!dates::is_valid_date("31-04-2020"), "April has 30 days");
    assert!(!dates::is_valid_date("00-01-2020"));
    assert!(!dates::is_valid_date("01-13-2020"));
    assert!(!dates::is_valid_date("01-01-1899"), "below the year floor");
    assert!(!dates::is_valid_date("1-1-2020"), "not fixed-width");
    assert!(!dates::is_valid_date("2020-01-01"), "wrong field order");
    assert!(!dates::is_valid_date("aa-bb-cccc"));
}

#[test]
fn years_apart_uses_whole_months() {
    assert!(dates::is_at_least_years_apart("01-01-1990", "01-01-2008", 18).unwrap());
    assert!(
        !dates::is_at_least_years_apart("01-01-1990", "01-12-2007", 18).unwrap(),
        "one month short of 18 years"
    );
    // Day of month does not matter at month granularity.
    assert!(dates::is_at_least_years_apart("28-01-1990", "01-01-2008", 18).unwrap());
}

#[test]
fn intern_leaves_exactly_six_months_after_joining() {
    let mut rng = DeskRng::from_seed(1);
    let dol = dates::date_of_leaving(&mut rng, EmployeeType::Intern, "01-03-2021").unwrap();
    assert_eq!(dol, "01-09-2021");
}

#[test]
fn contractor_leaving_is_a_year_with_bounded_jitter() {
    let mut rng = DeskRng::from_seed(99);
    let doj = "01-06-2020";
    for _ in 0..200 {
        let dol = dates::date_of_leaving(&mut rng, EmployeeType::Contractor, doj).unwrap();
        let months = month_index(&dol) - month_index(doj);
        assert!(
            (9..=15).contains(&months),
            "contractor offset {months} months outside 12 +/- 3"
        );
    }
}

#[test]
fn full_time_leaving_is_one_to_ten_years_out() {
    let mut rng = DeskRng::from_seed(7);
    let doj = "01-06-2020";
    for _ in 0..200 {
        let dol = dates::date_of_leaving(&mut rng, EmployeeType::FullTime, doj).unwrap();
        let months = month_index(&dol) - month_index(doj);
        assert!(
            (12..=131).contains(&months),
            "full-time offset {months} months outside 1y..10y11m"
        );
    }
}

#[test]
fn random_doj_is_adult_relative_to_dob() {
    let mut rng = DeskRng::from_seed(123);
    for _ in 0..200 {
        let dob = dates::random_dob(&mut rng);
        assert!(dates::is_valid_date(&dob), "random dob {dob} must be valid");
        let doj = dates::random_doj_from_dob(&mut rng, &dob).unwrap();
        assert!(
            dates::is_at_least_years_apart(&dob, &doj, 18).unwrap(),
            "doj {doj} less than 18 years after dob {dob}"
        );
    }
}

#[test]
fn current_date_is_well_formed() {
    assert!(dates::is_valid_date(&dates::current_date()));
}
