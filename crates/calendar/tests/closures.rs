use chrono::NaiveDate;
use gateau_calendar::{default_holidays, HolidaySpec, OfficeCalendar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn default_closures_2020_span() {
    let cal = OfficeCalendar::resolve(&default_holidays(), 2020);
    let closures: Vec<NaiveDate> = cal.closures().collect();

    assert_eq!(
        closures,
        vec![
            date(2019, 1, 1),   // Tuesday
            date(2019, 12, 25), // Wednesday
            date(2019, 12, 26), // Thursday
            date(2020, 1, 1),   // Wednesday
            date(2020, 12, 25), // Friday
            date(2020, 12, 28), // Boxing Day 2020 (Sat) rolled to Monday
            date(2021, 1, 1),   // Friday
            date(2021, 12, 27), // Christmas 2021 (Sat) rolled to Monday
            date(2021, 12, 28), // Boxing Day 2021 (Sun) rolled past it
        ]
    );
}

#[test]
fn rollover_respects_earlier_closures() {
    // With 2021 as the target, Christmas 2022 lands on a Sunday and rolls
    // to Monday the 26th, which then pushes Boxing Day's own closure to
    // Tuesday the 27th.
    let cal = OfficeCalendar::resolve(&default_holidays(), 2021);
    assert!(!cal.is_working_day(date(2022, 12, 26)));
    assert!(!cal.is_working_day(date(2022, 12, 27)));
    assert!(cal.is_working_day(date(2022, 12, 28)));
}

#[test]
fn custom_holiday_list() {
    let specs = vec![
        HolidaySpec::parse("4 July").unwrap(),
        HolidaySpec::parse("25 December").unwrap(),
    ];
    let cal = OfficeCalendar::resolve(&specs, 2020);

    // Independence Day 2020 is a Saturday, so Monday the 6th is closed.
    assert!(!cal.is_working_day(date(2020, 7, 6)));
    assert!(cal.is_working_day(date(2020, 7, 3)));
    // New Year's Day is not in this list.
    assert!(cal.is_working_day(date(2020, 1, 1)));
}

#[test]
fn empty_spec_list_leaves_only_weekends() {
    let cal = OfficeCalendar::resolve(&[], 2020);
    assert_eq!(cal.closures().count(), 0);
    assert!(cal.is_working_day(date(2020, 12, 25)));
    assert!(!cal.is_working_day(date(2020, 12, 26))); // Saturday regardless
}

#[test]
fn leap_day_holiday_resolves_in_common_years() {
    let specs = vec![HolidaySpec::parse("29 February").unwrap()];
    let cal = OfficeCalendar::resolve(&specs, 2020);

    // 2020 materializes Feb 29 (a Saturday, rolled to Monday Mar 2);
    // 2019 and 2021 fall back to Mar 1.
    assert!(!cal.is_working_day(date(2020, 3, 2)));
    assert!(!cal.is_working_day(date(2019, 3, 1))); // Friday
    assert!(!cal.is_working_day(date(2021, 3, 1))); // Monday
}
