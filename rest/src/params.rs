use service::ValidationFailureItem;
use time::macros::format_description;
use time::Date;
use uuid::Uuid;

/// Parses an optional `YYYY-MM-DD` query parameter, collecting a per-field
/// failure instead of aborting on the first bad value.
pub fn parse_date_param(
    field: &str,
    raw: Option<&str>,
    failures: &mut Vec<ValidationFailureItem>,
) -> Option<Date> {
    let date_format = format_description!("[year]-[month]-[day]");
    match raw {
        None => None,
        Some(raw) => match Date::parse(raw, &date_format) {
            Ok(date) => Some(date),
            Err(_) => {
                failures.push(ValidationFailureItem::InvalidValue(
                    field.into(),
                    "must be a date in YYYY-MM-DD format".into(),
                ));
                None
            }
        },
    }
}

pub fn parse_uuid_param(
    field: &str,
    raw: Option<&str>,
    failures: &mut Vec<ValidationFailureItem>,
) -> Option<Uuid> {
    match raw {
        None => None,
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                failures.push(ValidationFailureItem::InvalidValue(
                    field.into(),
                    "must be a UUID".into(),
                ));
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn test_parse_date_param() {
        let mut failures = Vec::new();
        assert_eq!(parse_date_param("date", None, &mut failures), None);
        assert_eq!(
            parse_date_param("date", Some("2024-01-10"), &mut failures),
            Some(date!(2024 - 01 - 10))
        );
        assert!(failures.is_empty());

        assert_eq!(
            parse_date_param("date", Some("10.01.2024"), &mut failures),
            None
        );
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field(), "date");
    }

    #[test]
    fn test_parse_uuid_param_collects_all_failures() {
        let mut failures = Vec::new();
        parse_uuid_param("region", Some("not-a-uuid"), &mut failures);
        parse_uuid_param("cohort", Some("also-bad"), &mut failures);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field(), "region");
        assert_eq!(failures[1].field(), "cohort");
    }
}
