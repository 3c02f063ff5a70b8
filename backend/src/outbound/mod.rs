//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **csv_store**: flat-file [`crate::domain::ports::ReviewStore`]
//! - **vader**: lexicon-based [`crate::domain::ports::SentimentScorer`]
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod csv_store;
pub mod vader;

pub use csv_store::CsvReviewStore;
pub use vader::VaderSentimentScorer;
