use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tagrule::{Clock, MessageOverrides, Record, Validator, ValidatorConfig, ValidatorError};

#[derive(Record)]
struct Event {
    #[validate(rules = "equal_date:today", name = "CreateAt")]
    created_at: DateTime<Utc>,
    #[validate(rules = "after:today+1", name = "StartsAt")]
    starts_at: DateTime<FixedOffset>,
}

fn clock() -> Clock {
    Clock::fixed(
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 0, 0, 1)
            .unwrap(),
    )
}

fn event(created: (i32, u32, u32), starts_in_days: i64) -> Event {
    let (y, m, d) = created;
    let created_at = Utc.with_ymd_and_hms(y, m, d, 15, 30, 0).unwrap();
    let starts_at = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .unwrap()
        + chrono::Duration::days(starts_in_days);
    Event {
        created_at,
        starts_at,
    }
}

#[test]
fn test_today_relative_rules_use_the_clock() {
    let validator = Validator::new().with_clock(clock());
    assert!(validator
        .validate(&event((2024, 5, 1), 2), &MessageOverrides::new())
        .unwrap()
        .is_empty());

    let violations = validator
        .validate(&event((2024, 5, 2), 0), &MessageOverrides::new())
        .unwrap();
    assert_eq!(
        violations.messages(),
        vec![
            "The CreateAt have to be equals to 2024-5-1, the date informed was 2024-5-2.",
            "The StartsAt have to be after 2024-5-2 0:0:1, the timestamp informed was 2024-5-1 12:0:0.",
        ]
    );
}

#[test]
fn test_configured_formats() {
    let config = ValidatorConfig {
        date_format: "%d/%m/%Y".to_owned(),
        timestamp_format: "%Y-%m-%dT%H:%M:%S".to_owned(),
        ..ValidatorConfig::default()
    };
    let violations = Validator::with_config(config)
        .with_clock(clock())
        .validate(&event((2024, 4, 30), 0), &MessageOverrides::new())
        .unwrap();
    assert_eq!(
        violations.messages(),
        vec![
            "The CreateAt have to be equals to 01/05/2024, the date informed was 30/04/2024.",
            "The StartsAt have to be after 2024-05-02T00:00:01, the timestamp informed was 2024-05-01T12:00:00.",
        ]
    );
}

#[test]
fn test_naive_date_field() {
    #[derive(Record)]
    struct Birthday {
        #[validate(rules = "before_date:today", name = "Born")]
        born: NaiveDate,
    }

    let validator = Validator::new().with_clock(clock());
    let past = Birthday {
        born: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    };
    assert!(validator
        .validate(&past, &MessageOverrides::new())
        .unwrap()
        .is_empty());
}

#[test]
fn test_bad_argument_is_fatal() {
    #[derive(Record)]
    struct Bad {
        #[validate("after:tomorrow")]
        at: DateTime<Utc>,
    }

    let err = Validator::new()
        .with_clock(clock())
        .validate(&Bad { at: Utc::now() }, &MessageOverrides::new())
        .unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidArgument { .. }));
}
