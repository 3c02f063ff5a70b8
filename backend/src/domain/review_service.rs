//! Review domain service implementing the listing and submission ports.
//!
//! Every call re-reads the whole store; nothing is cached between requests.
//! Submissions append to the snapshot loaded by that same call and write the
//! whole collection back, so concurrent submissions are last-writer-wins.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    ReviewStore, ReviewStoreError, ReviewSubmission, ReviewSubmissionRequest, ReviewsQuery,
    SentimentScorer,
};
use crate::domain::{
    Error, Location, Review, ReviewBody, ReviewCriteria, ReviewCriteriaError, ReviewId,
    ReviewTimestamp, ScoredReview, ServiceArea,
};

/// Message returned when a submission lacks `ReviewBody` or `Location`.
pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required parameters";

/// Message returned when a submission names an unrecognized location.
pub const INVALID_LOCATION_MESSAGE: &str = "Invalid location";

/// Review service backed by a store and a sentiment scorer.
#[derive(Clone)]
pub struct ReviewService<S, A> {
    store: Arc<S>,
    scorer: Arc<A>,
    clock: Arc<dyn Clock>,
    service_area: ServiceArea,
}

impl<S, A> ReviewService<S, A> {
    /// Create a service over the given store and scorer.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use review_analyzer::domain::ports::{InMemoryReviewStore, NeutralSentimentScorer};
    /// # use review_analyzer::domain::{ReviewService, ServiceArea};
    /// let service = ReviewService::new(
    ///     Arc::new(InMemoryReviewStore::default()),
    ///     Arc::new(NeutralSentimentScorer),
    ///     Arc::new(DefaultClock),
    ///     ServiceArea::default(),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(
        store: Arc<S>,
        scorer: Arc<A>,
        clock: Arc<dyn Clock>,
        service_area: ServiceArea,
    ) -> Self {
        Self {
            store,
            scorer,
            clock,
            service_area,
        }
    }
}

impl<S, A> ReviewService<S, A>
where
    S: ReviewStore,
    A: SentimentScorer,
{
    fn map_store_error(error: ReviewStoreError) -> Error {
        Error::service_unavailable(error.to_string())
    }

    fn map_criteria_error(error: ReviewCriteriaError) -> Error {
        Error::internal(error.to_string())
    }

    fn score(&self, review: Review) -> ScoredReview {
        let sentiment = self.scorer.polarity_scores(review.body().as_str());
        ScoredReview::new(review, sentiment)
    }

    fn accept(&self, request: ReviewSubmissionRequest) -> Result<(ReviewBody, Location), Error> {
        let ReviewSubmissionRequest {
            review_body,
            location,
        } = request;
        let (Some(body), Some(location)) = (review_body, location) else {
            return Err(Error::invalid_request(MISSING_PARAMETERS_MESSAGE));
        };

        let location = Location::new(location);
        if !self.service_area.contains(&location) {
            return Err(Error::invalid_location(INVALID_LOCATION_MESSAGE));
        }
        Ok((ReviewBody::new(body), location))
    }

    fn fresh_id(existing: &[Review]) -> ReviewId {
        loop {
            let id = ReviewId::generate();
            if existing.iter().all(|review| review.id() != &id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl<S, A> ReviewsQuery for ReviewService<S, A>
where
    S: ReviewStore,
    A: SentimentScorer,
{
    async fn list_reviews(&self, criteria: &ReviewCriteria) -> Result<Vec<ScoredReview>, Error> {
        let reviews = self.store.load_all().await.map_err(Self::map_store_error)?;
        let loaded = reviews.len();
        let matching = criteria.apply(reviews).map_err(Self::map_criteria_error)?;
        debug!(loaded, matched = matching.len(), "filtered reviews");

        let mut scored: Vec<ScoredReview> =
            matching.into_iter().map(|review| self.score(review)).collect();
        // Stable: equal compounds keep storage order.
        scored.sort_by(|a, b| b.sentiment().compound.total_cmp(&a.sentiment().compound));
        Ok(scored)
    }
}

#[async_trait]
impl<S, A> ReviewSubmission for ReviewService<S, A>
where
    S: ReviewStore,
    A: SentimentScorer,
{
    async fn submit_review(&self, request: ReviewSubmissionRequest) -> Result<Review, Error> {
        let mut reviews = self.store.load_all().await.map_err(Self::map_store_error)?;
        let (body, location) = self.accept(request)?;

        let review = Review::new(
            Self::fresh_id(&reviews),
            body,
            location,
            ReviewTimestamp::from_datetime(self.clock.local().naive_local()),
        );
        reviews.push(review.clone());
        self.store
            .save_all(&reviews)
            .await
            .map_err(Self::map_store_error)?;

        info!(
            review_id = %review.id(),
            location = %review.location(),
            total = reviews.len(),
            "review stored"
        );
        Ok(review)
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
