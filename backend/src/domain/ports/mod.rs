//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`ReviewsQuery`], [`ReviewSubmission`]) are called by
//! inbound adapters. Driven ports ([`ReviewStore`], [`SentimentScorer`]) are
//! implemented by outbound adapters and injected into the domain service.

mod macros;
pub(crate) use macros::define_port_error;

mod review_store;
mod review_submission;
mod reviews_query;
mod sentiment_scorer;

#[cfg(test)]
pub use review_store::MockReviewStore;
pub use review_store::{InMemoryReviewStore, ReviewStore, ReviewStoreError};
pub use review_submission::{ReviewSubmission, ReviewSubmissionRequest};
pub use reviews_query::ReviewsQuery;
#[cfg(test)]
pub use sentiment_scorer::MockSentimentScorer;
pub use sentiment_scorer::{NeutralSentimentScorer, SentimentScorer};
