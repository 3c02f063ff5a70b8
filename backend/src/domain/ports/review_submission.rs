//! Driving port for accepting new reviews.

use async_trait::async_trait;

use crate::domain::{Error, Review};

/// Raw submission fields as received at the boundary.
///
/// Either field may be absent; [`ReviewSubmission::submit_review`] decides
/// whether the request is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewSubmissionRequest {
    /// Review text (`ReviewBody`).
    pub review_body: Option<String>,
    /// "City, State" location (`Location`).
    pub location: Option<String>,
}

/// Domain use-case port for storing a new review.
#[async_trait]
pub trait ReviewSubmission: Send + Sync {
    /// Validate `request`, assign an id and timestamp, append the review to
    /// the store, and return the stored record.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidRequest`] when a field
    /// is missing and [`crate::domain::ErrorCode::InvalidLocation`] when the
    /// location is outside the service area. The store is left untouched on
    /// any failure.
    async fn submit_review(&self, request: ReviewSubmissionRequest) -> Result<Review, Error>;
}
