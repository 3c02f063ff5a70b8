//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod reviews;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::{ListingFailure, SubmissionErrorBody, SubmissionFailure};
