//! Domain primitives, services, and ports.
//!
//! Purpose: hold the review model, the listing filter, and the service that
//! orchestrates listing and submission. Nothing here knows about HTTP or
//! CSV; those live in the inbound and outbound adapters.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Review and its field newtypes, ScoredReview, SentimentScores.
//! - ReviewCriteria: location and date-range filter.
//! - ServiceArea: recognized submission locations.
//! - ReviewService: implements [`ports::ReviewsQuery`] and
//!   [`ports::ReviewSubmission`].

pub mod error;
pub mod ports;
pub mod review;
pub mod review_criteria;
pub mod review_service;
pub mod service_area;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::review::{
    DATE_FORMAT, Location, Review, ReviewBody, ReviewId, ReviewTimestamp, ScoredReview,
    SentimentScores, TIMESTAMP_FORMAT, parse_calendar_day,
};
pub use self::review_criteria::{ReviewCriteria, ReviewCriteriaError};
pub use self::review_service::{
    INVALID_LOCATION_MESSAGE, MISSING_PARAMETERS_MESSAGE, ReviewService,
};
pub use self::service_area::{RECOGNIZED_LOCATIONS, ServiceArea};

/// Header carrying the request trace identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";
