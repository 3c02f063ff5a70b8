//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the review and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], keeping domain
//! types free of utoipa derives. Exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ReviewFormSchema, ReviewSchema, ScoredReviewSchema, SentimentScoresSchema,
    SubmissionErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Review analyzer API",
        description = "Submit customer reviews and list them ranked by sentiment."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::reviews::list_reviews,
        crate::inbound::http::reviews::submit_review,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ReviewSchema,
        ScoredReviewSchema,
        SentimentScoresSchema,
        ReviewFormSchema,
        SubmissionErrorSchema
    )),
    tags(
        (name = "reviews", description = "Review submission and sentiment listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
