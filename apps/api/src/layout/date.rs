//! Date normalization for the report's date fields and caption.

use chrono::{DateTime, NaiveDate};

/// Placeholder shown when a date field is empty.
pub const MISSING_DATE: &str = "N/A";

/// Long-form calendar date, e.g. `May 4, 2010`.
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Formats a calendar date as `<Month> <day>, <year>`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Normalizes a wire date for display.
///
/// - empty → `N/A`
/// - RFC 3339 timestamp → long-form date, in the timestamp's own offset
/// - anything else → returned unchanged
///
/// Never fails: an unreadable date is still shown to the reader verbatim.
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return MISSING_DATE.to_string();
    }
    if !is_strict_timestamp_shape(raw) {
        return raw.to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => format_long_date(timestamp.date_naive()),
        Err(_) => raw.to_string(),
    }
}

/// Shape checks chrono's RFC 3339 parser is lenient about: the date/time
/// separator must be an uppercase `T`, a UTC offset an uppercase `Z`, and the
/// seconds field no leap second.
fn is_strict_timestamp_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.get(10) == Some(&b'T')
        && bytes.get(17..19) != Some(b"60".as_slice())
        && !raw.ends_with('z')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_available() {
        assert_eq!(normalize_date(""), "N/A");
    }

    #[test]
    fn test_utc_timestamp() {
        assert_eq!(normalize_date("2010-05-04T00:00:00Z"), "May 4, 2010");
    }

    #[test]
    fn test_fractional_seconds_accepted() {
        assert_eq!(
            normalize_date("2019-12-31T18:30:00.000Z"),
            "December 31, 2019"
        );
    }

    #[test]
    fn test_offset_keeps_local_calendar_day() {
        // 23:30 at -05:00 is already the next day in UTC; the local day is shown.
        assert_eq!(
            normalize_date("2021-03-01T23:30:00-05:00"),
            "March 1, 2021"
        );
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(normalize_date("not-a-date"), "not-a-date");
        // Date without time or offset is not an RFC 3339 timestamp.
        assert_eq!(normalize_date("2010-05-04"), "2010-05-04");
        assert_eq!(normalize_date("04/05/2010"), "04/05/2010");
    }

    #[test]
    fn test_lenient_timestamp_shapes_pass_through() {
        for raw in [
            "2010-05-04 00:00:00Z",
            "2010-05-04t00:00:00z",
            "2010-05-04T00:00:00z",
            "2010-05-04t00:00:00+05:30",
            "2010-05-04T23:59:60Z",
        ] {
            assert_eq!(normalize_date(raw), raw);
        }
    }

    #[test]
    fn test_numeric_offset_with_uppercase_separator() {
        assert_eq!(normalize_date("2010-05-04T09:15:00+05:30"), "May 4, 2010");
    }

    #[test]
    fn test_whitespace_is_not_treated_as_empty() {
        assert_eq!(normalize_date(" "), " ");
    }

    #[test]
    fn test_format_long_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2006, 1, 2).unwrap();
        assert_eq!(format_long_date(date), "January 2, 2006");
    }
}
