//! Driven port for the durable review collection.
//!
//! The store exposes only whole-collection reads and whole-collection
//! overwrites. There is no append, update, or delete primitive and no
//! locking: two writers that load the same snapshot race, and the later
//! `save_all` wins.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::Review;

use super::define_port_error;

define_port_error! {
    /// Errors raised by review store adapters.
    pub enum ReviewStoreError {
        /// The backing resource does not exist.
        Missing { location: String } => "review store not found at {location}",
        /// The backing resource exists but could not be read.
        Read { message: String } => "review store read failed: {message}",
        /// The stored records could not be decoded.
        Malformed { message: String } => "review store is malformed: {message}",
        /// The collection could not be written back.
        Write { message: String } => "review store write failed: {message}",
    }
}

/// Port for loading and overwriting the full review collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Read every stored review in storage order.
    async fn load_all(&self) -> Result<Vec<Review>, ReviewStoreError>;

    /// Replace the stored collection with exactly `reviews`, in order.
    async fn save_all(&self, reviews: &[Review]) -> Result<(), ReviewStoreError>;
}

/// Process-local store used by tests and demos.
///
/// # Examples
/// ```
/// use review_analyzer::domain::ports::{InMemoryReviewStore, ReviewStore};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryReviewStore::default();
/// assert!(store.load_all().await.expect("load").is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
}

impl InMemoryReviewStore {
    /// Seed the store with existing reviews.
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Mutex::new(reviews),
        }
    }
}

fn poisoned<T>(err: PoisonError<T>) -> ReviewStoreError {
    ReviewStoreError::read(format!("in-memory store lock poisoned: {err}"))
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn load_all(&self) -> Result<Vec<Review>, ReviewStoreError> {
        let guard = self.reviews.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }

    async fn save_all(&self, reviews: &[Review]) -> Result<(), ReviewStoreError> {
        let mut guard = self.reviews.lock().map_err(poisoned)?;
        *guard = reviews.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{Location, ReviewBody, ReviewId, ReviewTimestamp};
    use rstest::rstest;

    fn review(id: &str) -> Review {
        Review::new(
            ReviewId::new(id),
            ReviewBody::new("Lovely"),
            Location::new("Fresno, California"),
            ReviewTimestamp::new("2023-03-04 05:06:07"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn save_all_overwrites_the_whole_collection() {
        let store = InMemoryReviewStore::with_reviews(vec![review("a"), review("b")]);
        store.save_all(&[review("c")]).await.expect("save");

        let loaded = store.load_all().await.expect("load");
        assert_eq!(loaded, vec![review("c")]);
    }

    #[rstest]
    #[tokio::test]
    async fn stale_snapshot_write_discards_concurrent_append() {
        let store = InMemoryReviewStore::with_reviews(vec![review("a")]);
        let mut first = store.load_all().await.expect("first load");
        let mut second = store.load_all().await.expect("second load");

        first.push(review("first"));
        second.push(review("second"));
        store.save_all(&first).await.expect("first save");
        store.save_all(&second).await.expect("second save");

        let loaded = store.load_all().await.expect("load");
        assert_eq!(loaded, vec![review("a"), review("second")]);
    }

    #[rstest]
    fn error_messages_name_the_failure() {
        let err = ReviewStoreError::missing("data/reviews.csv");
        assert_eq!(err.to_string(), "review store not found at data/reviews.csv");
    }
}
