//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ReviewSubmission, ReviewsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub reviews: Arc<dyn ReviewsQuery>,
    pub submissions: Arc<dyn ReviewSubmission>,
}

impl HttpState {
    /// Construct state from the two review use-cases.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use review_analyzer::domain::ports::{InMemoryReviewStore, NeutralSentimentScorer};
    /// use review_analyzer::domain::{ReviewService, ServiceArea};
    /// use review_analyzer::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(ReviewService::new(
    ///     Arc::new(InMemoryReviewStore::default()),
    ///     Arc::new(NeutralSentimentScorer),
    ///     Arc::new(DefaultClock),
    ///     ServiceArea::default(),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _ = state.reviews.clone();
    /// ```
    pub fn new(reviews: Arc<dyn ReviewsQuery>, submissions: Arc<dyn ReviewSubmission>) -> Self {
        Self {
            reviews,
            submissions,
        }
    }
}
