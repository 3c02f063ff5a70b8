//! Driving port for sentiment-ranked review listings.
//!
//! Inbound adapters translate query parameters into [`ReviewCriteria`] and
//! call this port; the domain loads, filters, scores, and orders.

use async_trait::async_trait;

use crate::domain::{Error, ReviewCriteria, ScoredReview};

/// Domain use-case port for listing reviews.
#[async_trait]
pub trait ReviewsQuery: Send + Sync {
    /// Return reviews matching `criteria`, ordered by descending compound
    /// sentiment. Reviews with equal scores keep their storage order.
    async fn list_reviews(&self, criteria: &ReviewCriteria) -> Result<Vec<ScoredReview>, Error>;
}
