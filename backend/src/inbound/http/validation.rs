//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query strings and form bodies share one decoding rule: the first
//! non-blank occurrence of a field wins, and blank values count as absent.

use chrono::NaiveDate;

use crate::domain::{Error, Location, ReviewCriteria, parse_calendar_day};
use crate::domain::ports::ReviewSubmissionRequest;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const LOCATION: FieldName = FieldName::new("location");
pub(crate) const START_DATE: FieldName = FieldName::new("start_date");
pub(crate) const END_DATE: FieldName = FieldName::new("end_date");
pub(crate) const REVIEW_BODY: FieldName = FieldName::new("ReviewBody");
pub(crate) const FORM_LOCATION: FieldName = FieldName::new("Location");

/// Return the first non-blank value of `field` in URL-encoded `input`.
pub(crate) fn first_value(input: &[u8], field: FieldName) -> Option<String> {
    url::form_urlencoded::parse(input)
        .find(|(key, value)| key == field.as_str() && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

fn parse_day(input: &[u8], field: FieldName) -> Result<Option<NaiveDate>, Error> {
    first_value(input, field)
        .map(|raw| {
            parse_calendar_day(&raw).map_err(|_| {
                Error::invalid_request(format!(
                    "{} '{raw}' does not match format YYYY-MM-DD",
                    field.as_str()
                ))
            })
        })
        .transpose()
}

/// Decode listing filters from a raw query string.
pub(crate) fn parse_review_criteria(query: &str) -> Result<ReviewCriteria, Error> {
    let input = query.as_bytes();
    let mut criteria = ReviewCriteria::default();
    if let Some(location) = first_value(input, LOCATION) {
        criteria = criteria.with_location(Location::new(location));
    }
    if let Some(day) = parse_day(input, START_DATE)? {
        criteria = criteria.with_start_date(day);
    }
    if let Some(day) = parse_day(input, END_DATE)? {
        criteria = criteria.with_end_date(day);
    }
    Ok(criteria)
}

/// Decode a submission from a form-encoded body.
pub(crate) fn parse_submission_form(body: &[u8]) -> Result<ReviewSubmissionRequest, Error> {
    std::str::from_utf8(body)
        .map_err(|_| Error::invalid_request("request body is not valid UTF-8"))?;
    Ok(ReviewSubmissionRequest {
        review_body: first_value(body, REVIEW_BODY),
        location: first_value(body, FORM_LOCATION),
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("location=Denver%2C+Colorado", Some("Denver, Colorado"))]
    #[case("location=&location=Denver%2C+Colorado", Some("Denver, Colorado"))]
    #[case("location=Tucson%2C+Arizona&location=Denver%2C+Colorado", Some("Tucson, Arizona"))]
    #[case("location=", None)]
    #[case("other=1", None)]
    fn first_non_blank_value_wins(#[case] query: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            first_value(query.as_bytes(), LOCATION).as_deref(),
            expected
        );
    }

    #[rstest]
    fn empty_query_yields_no_filters() {
        let criteria = parse_review_criteria("").expect("criteria");
        assert_eq!(criteria, ReviewCriteria::default());
    }

    #[rstest]
    fn all_filters_are_decoded() {
        let criteria = parse_review_criteria(
            "location=San+Diego%2C+California&start_date=2024-01-01&end_date=2024-02-01",
        )
        .expect("criteria");

        assert_eq!(criteria.location().map(Location::as_str), Some("San Diego, California"));
        assert_eq!(criteria.start_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(criteria.end_date(), NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[rstest]
    #[case("start_date=yesterday", "start_date 'yesterday' does not match format YYYY-MM-DD")]
    #[case("end_date=2024-13-01", "end_date '2024-13-01' does not match format YYYY-MM-DD")]
    fn malformed_dates_are_rejected(#[case] query: &str, #[case] message: &str) {
        let err = parse_review_criteria(query).expect_err("malformed date");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), message);
    }

    #[rstest]
    fn submission_form_keeps_missing_fields_absent() {
        let request = parse_submission_form(b"ReviewBody=Great+food&Location=").expect("form");
        assert_eq!(request.review_body.as_deref(), Some("Great food"));
        assert_eq!(request.location, None);
    }

    #[rstest]
    fn submission_form_rejects_invalid_utf8() {
        let err = parse_submission_form(&[0xff, 0xfe]).expect_err("invalid utf8");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
