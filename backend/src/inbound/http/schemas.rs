//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Review`].
///
/// A stored review as returned by a successful submission.
#[derive(ToSchema)]
#[schema(as = crate::domain::Review)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewSchema {
    /// Server-assigned UUID.
    #[schema(rename = "ReviewId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    review_id: String,
    /// Free-form review text.
    #[schema(rename = "ReviewBody", example = "The burritos were fantastic.")]
    review_body: String,
    /// "City, State" location.
    #[schema(rename = "Location", example = "Denver, Colorado")]
    location: String,
    /// Local creation time, `YYYY-MM-DD HH:MM:SS`.
    #[schema(rename = "Timestamp", example = "2024-03-15 12:34:56")]
    timestamp: String,
}

/// OpenAPI schema for [`crate::domain::SentimentScores`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SentimentScores)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SentimentScoresSchema {
    /// Share of negative sentiment.
    #[schema(example = 0.0)]
    neg: f64,
    /// Share of neutral sentiment.
    #[schema(example = 0.58)]
    neu: f64,
    /// Share of positive sentiment.
    #[schema(example = 0.42)]
    pos: f64,
    /// Normalised aggregate in `[-1, 1]`.
    #[schema(example = 0.5574)]
    compound: f64,
}

/// OpenAPI schema for [`crate::domain::ScoredReview`].
///
/// Review fields flattened alongside a nested `sentiment` object.
#[derive(ToSchema)]
#[schema(as = crate::domain::ScoredReview)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ScoredReviewSchema {
    #[schema(rename = "ReviewId")]
    review_id: String,
    #[schema(rename = "ReviewBody")]
    review_body: String,
    #[schema(rename = "Location")]
    location: String,
    #[schema(rename = "Timestamp")]
    timestamp: String,
    /// Polarity scores computed at request time.
    sentiment: SentimentScoresSchema,
}

/// OpenAPI schema for the form-encoded submission body.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewFormSchema {
    /// Review text. Required.
    #[schema(rename = "ReviewBody")]
    review_body: String,
    /// One of the recognized service locations. Required.
    #[schema(rename = "Location", example = "Tucson, Arizona")]
    location: String,
}

/// OpenAPI schema for [`super::error::SubmissionErrorBody`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::error::SubmissionErrorBody)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SubmissionErrorSchema {
    /// Human-readable failure message.
    #[schema(example = "Invalid location")]
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn review_schema_uses_store_column_names() {
        let schema_json = schema_to_json::<ReviewSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ReviewSchema::name(), "crate.domain.Review");
        for column in ["ReviewId", "ReviewBody", "Location", "Timestamp"] {
            assert!(schema_json.contains(column), "missing {column}");
        }
    }

    #[test]
    fn scored_review_schema_nests_sentiment() {
        let schema_json = schema_to_json::<ScoredReviewSchema>();
        assert_eq!(ScoredReviewSchema::name(), "crate.domain.ScoredReview");
        assert!(schema_json.contains("sentiment"));
        assert!(schema_json.contains("ReviewId"));
    }

    #[test]
    fn sentiment_schema_lists_all_measures() {
        let schema_json = schema_to_json::<SentimentScoresSchema>();
        for measure in ["neg", "neu", "pos", "compound"] {
            assert!(schema_json.contains(measure), "missing {measure}");
        }
    }

    #[test]
    fn submission_error_schema_has_error_field() {
        assert!(schema_to_json::<SubmissionErrorSchema>().contains("error"));
    }
}
