//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the app harness and fixtures they share live here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use actix_http::Request;
use mockable::DefaultClock;
use tempfile::TempDir;

use review_analyzer::Trace;
use review_analyzer::domain::ports::SentimentScorer;
use review_analyzer::domain::{ReviewService, SentimentScores, ServiceArea};
use review_analyzer::inbound::http::reviews::{list_reviews, submit_review};
use review_analyzer::inbound::http::state::HttpState;
use review_analyzer::outbound::CsvReviewStore;

/// Deterministic scorer summing per-word weights into a clamped compound.
#[derive(Debug, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    fn weight(word: &str) -> f64 {
        match word {
            "great" | "excellent" | "lovely" => 0.6,
            "good" | "nice" | "fine" => 0.3,
            "bad" | "slow" => -0.3,
            "terrible" | "awful" | "rude" => -0.6,
            _ => 0.0,
        }
    }
}

impl SentimentScorer for KeywordScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let lowered = text.to_lowercase();
        let compound = lowered
            .split(|c: char| !c.is_alphanumeric())
            .map(Self::weight)
            .sum::<f64>()
            .clamp(-1.0, 1.0);
        SentimentScores {
            neg: if compound < 0.0 { 1.0 } else { 0.0 },
            neu: if compound == 0.0 { 1.0 } else { 0.0 },
            pos: if compound > 0.0 { 1.0 } else { 0.0 },
            compound,
        }
    }
}

/// Temporary directory holding a review file.
pub struct ReviewFile {
    _dir: TempDir,
    path: PathBuf,
}

impl ReviewFile {
    /// Create `reviews.csv` containing `contents` in a fresh directory.
    pub fn with_contents(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("reviews.csv");
        std::fs::write(&path, contents).expect("seed review file");
        Self { _dir: dir, path }
    }

    /// Create a review file with only the header row.
    pub fn empty() -> Self {
        Self::with_contents("ReviewId,ReviewBody,Location,Timestamp\n")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of data rows currently stored.
    pub fn record_count(&self) -> usize {
        let mut reader = csv::Reader::from_path(&self.path).expect("open review file");
        reader.records().count()
    }
}

/// Build the review endpoints over a CSV store at `path`.
///
/// Takes the path by value so the returned service borrows nothing.
pub async fn review_app<A>(
    path: PathBuf,
    scorer: A,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
where
    A: SentimentScorer + 'static,
{
    let service = Arc::new(ReviewService::new(
        Arc::new(CsvReviewStore::new(path)),
        Arc::new(scorer),
        Arc::new(DefaultClock),
        ServiceArea::default(),
    ));
    let state = web::Data::new(HttpState::new(service.clone(), service));
    test::init_service(
        App::new()
            .app_data(state)
            .wrap(Trace)
            .service(list_reviews)
            .service(submit_review),
    )
    .await
}
