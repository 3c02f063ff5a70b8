//! Location and date-range filtering for review listings.
//!
//! Criteria are applied one after another, each narrowing the working set:
//! location first, then the lower date bound, then the upper date bound.
//! The result equals the intersection of all supplied predicates. Only
//! records still in the working set have their timestamps parsed, so a
//! corrupt timestamp on a record already excluded by location is ignored.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{Location, Review, ReviewId};

/// Failure raised while comparing stored timestamps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewCriteriaError {
    /// A stored timestamp did not match the fixed format.
    #[error("review {review_id} has unparseable timestamp '{timestamp}'")]
    UnparseableTimestamp {
        /// Offending record.
        review_id: ReviewId,
        /// Raw stored value.
        timestamp: String,
    },
}

/// Optional listing filters.
///
/// Date bounds are calendar days compared against full timestamps at
/// midnight: `start_date` keeps records at or after `00:00:00` that day,
/// `end_date` keeps records at or before `00:00:00` that day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use review_analyzer::domain::{Location, ReviewCriteria};
///
/// let criteria = ReviewCriteria::default()
///     .with_location(Location::new("Denver, Colorado"))
///     .with_start_date(NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid day"));
/// assert!(criteria.location().is_some());
/// assert!(criteria.end_date().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCriteria {
    location: Option<Location>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl ReviewCriteria {
    /// Restrict to an exact location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Restrict to records at or after the start of `day`.
    #[must_use]
    pub fn with_start_date(mut self, day: NaiveDate) -> Self {
        self.start_date = Some(day);
        self
    }

    /// Restrict to records at or before the start of `day`.
    #[must_use]
    pub fn with_end_date(mut self, day: NaiveDate) -> Self {
        self.end_date = Some(day);
        self
    }

    /// Location filter, if any.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Inclusive lower bound, if any.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Inclusive upper bound, if any.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Narrow `reviews` to the records matching every supplied criterion.
    ///
    /// Preserves input order.
    pub fn apply(&self, reviews: Vec<Review>) -> Result<Vec<Review>, ReviewCriteriaError> {
        let mut working = reviews;
        if let Some(location) = &self.location {
            working.retain(|review| review.location() == location);
        }
        if let Some(start) = self.start_date.map(start_of_day) {
            working = keep_by_timestamp(working, |at| at >= start)?;
        }
        if let Some(end) = self.end_date.map(start_of_day) {
            working = keep_by_timestamp(working, |at| at <= end)?;
        }
        Ok(working)
    }
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn keep_by_timestamp(
    reviews: Vec<Review>,
    keep: impl Fn(NaiveDateTime) -> bool,
) -> Result<Vec<Review>, ReviewCriteriaError> {
    let mut kept = Vec::with_capacity(reviews.len());
    for review in reviews {
        let at = review
            .timestamp()
            .parse()
            .map_err(|_| ReviewCriteriaError::UnparseableTimestamp {
                review_id: review.id().clone(),
                timestamp: review.timestamp().as_str().to_owned(),
            })?;
        if keep(at) {
            kept.push(review);
        }
    }
    Ok(kept)
}
