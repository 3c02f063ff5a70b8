//! Review data model.
//!
//! Stored field values are carried verbatim: nothing read back from the store
//! is re-validated, so records written under older rules stay readable.
//! Validation happens once, on submission, in [`crate::domain::ReviewService`].

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text format of [`ReviewTimestamp`] values, e.g. `2023-01-01 10:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text format of calendar-day filter bounds, e.g. `2023-01-01`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Server-assigned review identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(String);

impl ReviewId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier read from storage.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form review text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewBody(String);

impl ReviewBody {
    /// Wrap review text.
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    /// Borrow the review text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// "City, State" location string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Wrap a location string.
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Borrow the location text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creation time in [`TIMESTAMP_FORMAT`], kept as the stored text.
///
/// Parsing is deferred until a date filter needs it so one corrupt record
/// only fails requests that actually compare timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewTimestamp(String);

impl ReviewTimestamp {
    /// Format a wall-clock time.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use review_analyzer::domain::ReviewTimestamp;
    ///
    /// let at = NaiveDate::from_ymd_opt(2023, 1, 1)
    ///     .and_then(|day| day.and_hms_opt(10, 0, 0))
    ///     .expect("valid fixture time");
    /// assert_eq!(ReviewTimestamp::from_datetime(at).as_str(), "2023-01-01 10:00:00");
    /// ```
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(at.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Wrap timestamp text read from storage.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the timestamp text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Parse the stored text under [`TIMESTAMP_FORMAT`].
    pub fn parse(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.0, TIMESTAMP_FORMAT)
    }
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_calendar_day(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
}

/// A stored customer review.
///
/// Serialises with the column names used by the durable store:
/// `ReviewId`, `ReviewBody`, `Location`, `Timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    id: ReviewId,
    #[serde(rename = "ReviewBody")]
    body: ReviewBody,
    #[serde(rename = "Location")]
    location: Location,
    #[serde(rename = "Timestamp")]
    timestamp: ReviewTimestamp,
}

impl Review {
    /// Assemble a review from its parts.
    pub fn new(
        id: ReviewId,
        body: ReviewBody,
        location: Location,
        timestamp: ReviewTimestamp,
    ) -> Self {
        Self {
            id,
            body,
            location,
            timestamp,
        }
    }

    /// Review identifier.
    pub fn id(&self) -> &ReviewId {
        &self.id
    }

    /// Review text.
    pub fn body(&self) -> &ReviewBody {
        &self.body
    }

    /// Review location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Creation timestamp.
    pub fn timestamp(&self) -> &ReviewTimestamp {
        &self.timestamp
    }
}

/// Polarity measures produced by a sentiment scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Share of negative sentiment.
    pub neg: f64,
    /// Share of neutral sentiment.
    pub neu: f64,
    /// Share of positive sentiment.
    pub pos: f64,
    /// Normalised aggregate in `[-1, 1]`; the sort key for listings.
    pub compound: f64,
}

/// A review with its transient sentiment attached.
///
/// Serialises as the review's fields followed by a nested `sentiment`
/// object. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    review: Review,
    sentiment: SentimentScores,
}

impl ScoredReview {
    /// Attach sentiment scores to a review.
    pub fn new(review: Review, sentiment: SentimentScores) -> Self {
        Self { review, sentiment }
    }

    /// The underlying review.
    pub fn review(&self) -> &Review {
        &self.review
    }

    /// The attached scores.
    pub fn sentiment(&self) -> &SentimentScores {
        &self.sentiment
    }
}
