//! Single-value codecs: booleans, dates, month/year pairs and enums.

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime};
use fostering_protocol::{FosteringType, HoursOfWork};

use crate::error::{CodecError, Result};

/// Wire format for dates written to the store.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const DATE_READ_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y"];
const DATE_TIME_READ_FORMATS: [&str; 4] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Boolean literal pair a given field uses. Fields disagree; never unify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolEncoding {
    /// `"Yes"` / `"No"`
    YesNo,
    /// `"true"` / `"false"`
    TrueFalse,
}

impl BoolEncoding {
    fn literals(self) -> (&'static str, &'static str) {
        match self {
            BoolEncoding::YesNo => ("Yes", "No"),
            BoolEncoding::TrueFalse => ("true", "false"),
        }
    }
}

/// Unanswered encodes as the empty string.
pub fn encode_bool(value: Option<bool>, encoding: BoolEncoding) -> String {
    let (yes, no) = encoding.literals();
    match value {
        Some(true) => yes.to_string(),
        Some(false) => no.to_string(),
        None => String::new(),
    }
}

/// Case-insensitive match against the field's own literals. Anything else,
/// including the other encoding's literals, reads as unanswered.
pub fn decode_bool(raw: Option<&str>, encoding: BoolEncoding) -> Option<bool> {
    let raw = raw?.trim();
    let (yes, no) = encoding.literals();
    if raw.eq_ignore_ascii_case(yes) {
        Some(true)
    } else if raw.eq_ignore_ascii_case(no) {
        Some(false)
    } else {
        None
    }
}

pub fn encode_date(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Permissive date parsing: store format, ISO dates, and date-times whose
/// time part is dropped.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_READ_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_TIME_READ_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|stamp| stamp.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|stamp| stamp.date_naive())
        })
}

pub fn decode_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    let parsed = parse_date(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        log::debug!("Ignoring unparsable date {raw:?}");
    }
    parsed
}

/// Month and year strings for a month-precision date.
pub fn encode_month_year(value: Option<NaiveDate>) -> (String, String) {
    match value {
        Some(date) => (date.month().to_string(), date.year().to_string()),
        None => (String::new(), String::new()),
    }
}

/// First day of the given month. Months may be numbers or English names.
pub fn decode_month_year(month: &str, year: &str) -> Option<NaiveDate> {
    let month = month.trim();
    let month = month
        .parse::<u32>()
        .ok()
        .or_else(|| month.parse::<Month>().ok().map(|m| m.number_from_month()))?;
    let year = year.trim().parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Empty means unanswered; an unknown name is a hard failure.
pub fn decode_hours_of_work(field: &str, raw: Option<&str>) -> Result<Option<HoursOfWork>> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => HoursOfWork::from_name(value)
            .map(Some)
            .ok_or_else(|| CodecError::unknown_enum(field, value)),
    }
}

pub fn encode_hours_of_work(value: Option<HoursOfWork>) -> String {
    value.map(HoursOfWork::as_str).unwrap_or_default().to_string()
}

/// Comma-joined list of fostering type names.
pub fn decode_fostering_types(field: &str, raw: Option<&str>) -> Result<Vec<FosteringType>> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            FosteringType::from_name(name).ok_or_else(|| CodecError::unknown_enum(field, name))
        })
        .collect()
}

pub fn encode_fostering_types(types: &[FosteringType]) -> String {
    types
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn booleans_keep_their_field_literals() {
        assert_eq!(encode_bool(Some(true), BoolEncoding::YesNo), "Yes");
        assert_eq!(encode_bool(Some(false), BoolEncoding::TrueFalse), "false");
        assert_eq!(encode_bool(None, BoolEncoding::YesNo), "");

        assert_eq!(decode_bool(Some("YES"), BoolEncoding::YesNo), Some(true));
        assert_eq!(decode_bool(Some("False"), BoolEncoding::TrueFalse), Some(false));
        assert_eq!(decode_bool(Some("true"), BoolEncoding::YesNo), None);
        assert_eq!(decode_bool(Some(""), BoolEncoding::YesNo), None);
        assert_eq!(decode_bool(None, BoolEncoding::TrueFalse), None);
    }

    #[test]
    fn dates_write_day_month_year() {
        assert_eq!(encode_date(Some(date(2020, 1, 5))), "05/01/2020");
        assert_eq!(encode_date(None), "");
    }

    #[test]
    fn dates_parse_permissively() {
        let expected = Some(date(2019, 3, 7));
        assert_eq!(parse_date("07/03/2019"), expected);
        assert_eq!(parse_date("7/3/2019"), expected);
        assert_eq!(parse_date("2019-03-07"), expected);
        assert_eq!(parse_date("07/03/2019 00:00:00"), expected);
        assert_eq!(parse_date("2019-03-07T10:15:00"), expected);
        assert_eq!(parse_date("2019-03-07T10:15:00+01:00"), expected);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("  "), None);
        assert_eq!(decode_date(Some("31/02/2019")), None);
    }

    #[test]
    fn month_year_pairs() {
        assert_eq!(
            encode_month_year(Some(date(2011, 9, 1))),
            ("9".to_string(), "2011".to_string())
        );
        assert_eq!(decode_month_year("9", "2011"), Some(date(2011, 9, 1)));
        assert_eq!(decode_month_year("September", "2011"), Some(date(2011, 9, 1)));
        assert_eq!(decode_month_year("13", "2011"), None);
        assert_eq!(decode_month_year("", "2011"), None);
    }

    #[test]
    fn unknown_enum_names_fail() {
        assert_eq!(
            decode_hours_of_work("hoursofwork", Some("PartTime")).expect("hours"),
            Some(HoursOfWork::PartTime)
        );
        assert_eq!(decode_hours_of_work("hoursofwork", Some(" ")).expect("hours"), None);
        assert!(matches!(
            decode_hours_of_work("hoursofwork", Some("Weekends")),
            Err(CodecError::UnknownEnumValue { .. })
        ));

        assert_eq!(
            decode_fostering_types("typesoffostering", Some("ShortBreaks, LongTerm"))
                .expect("types"),
            vec![FosteringType::ShortBreaks, FosteringType::LongTerm]
        );
        assert!(decode_fostering_types("typesoffostering", Some("ShortBreaks,Adoption")).is_err());
        assert_eq!(
            encode_fostering_types(&[FosteringType::Emergency, FosteringType::ShortTerm]),
            "Emergency,ShortTerm"
        );
    }
}
