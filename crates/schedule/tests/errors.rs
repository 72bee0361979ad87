use gateau_schedule::{compute_cake_days, RawBirthday, ScheduleConfig, ScheduleError};

fn config_2020() -> ScheduleConfig {
    ScheduleConfig::new().with_year(2020)
}

#[test]
fn duplicate_name_yields_no_schedule() {
    let records = vec![
        RawBirthday::new("Dave", "1986-06-26"),
        RawBirthday::new("Rob", "1950-07-05"),
        RawBirthday::new("Dave", "1991-07-22"),
    ];
    assert_eq!(
        compute_cake_days(&records, &config_2020()).unwrap_err(),
        ScheduleError::DuplicateName {
            name: "Dave".to_string()
        }
    );
}

#[test]
fn invalid_date_yields_no_schedule() {
    let records = vec![RawBirthday::new("Dave", "1979-19-26")];
    assert_eq!(
        compute_cake_days(&records, &config_2020()).unwrap_err(),
        ScheduleError::InvalidDate {
            value: "1979-19-26".to_string()
        }
    );
}

#[test]
fn impossible_calendar_date_is_rejected() {
    let records = vec![RawBirthday::new("Dave", "2020-02-30")];
    assert!(matches!(
        compute_cake_days(&records, &config_2020()),
        Err(ScheduleError::InvalidDate { .. })
    ));
}

#[test]
fn blank_name_is_rejected() {
    let records = vec![
        RawBirthday::new("Dave", "1986-06-26"),
        RawBirthday::new("  ", "1990-05-01"),
    ];
    assert_eq!(
        compute_cake_days(&records, &config_2020()).unwrap_err(),
        ScheduleError::EmptyName { index: 1 }
    );
}

#[test]
fn first_failure_wins() {
    // The duplicate appears before the bad date, so it is reported.
    let records = vec![
        RawBirthday::new("Dave", "1986-06-26"),
        RawBirthday::new("Dave", "1990-05-01"),
        RawBirthday::new("Kate", "1990-99-99"),
    ];
    assert!(matches!(
        compute_cake_days(&records, &config_2020()),
        Err(ScheduleError::DuplicateName { .. })
    ));
}

#[test]
fn empty_roster_gives_empty_schedule() {
    assert_eq!(compute_cake_days(&[], &config_2020()).unwrap(), Vec::new());
}
