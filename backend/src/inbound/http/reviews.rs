//! Review API handlers.
//!
//! ```text
//! GET  /?location=..&start_date=..&end_date=..
//! POST /   (application/x-www-form-urlencoded: ReviewBody, Location)
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use futures_util::StreamExt as _;

use crate::domain::{Error, ScoredReview};
use crate::inbound::http::error::{ListingFailure, SubmissionFailure};
use crate::inbound::http::schemas::{
    ReviewFormSchema, ReviewSchema, ScoredReviewSchema, SubmissionErrorSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_review_criteria, parse_submission_form};

/// List reviews ranked by descending compound sentiment.
#[utoipa::path(
    get,
    path = "/",
    params(
        ("location" = Option<String>, Query, description = "Exact location match"),
        ("start_date" = Option<String>, Query, description = "Inclusive lower bound, YYYY-MM-DD"),
        ("end_date" = Option<String>, Query, description = "Upper bound at 00:00:00 of the day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Scored reviews", body = [ScoredReviewSchema]),
        (status = 500, description = "Any failure", body = String, content_type = "text/plain")
    ),
    tags = ["reviews"],
    operation_id = "listReviews"
)]
#[get("/")]
pub async fn list_reviews(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> Result<web::Json<Vec<ScoredReview>>, ListingFailure> {
    let criteria = parse_review_criteria(req.query_string())?;
    let reviews = state.reviews.list_reviews(&criteria).await?;
    Ok(web::Json(reviews))
}

/// Store a new review and return it with its assigned id and timestamp.
#[utoipa::path(
    post,
    path = "/",
    request_body(
        content = ReviewFormSchema,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 201, description = "Review stored", body = ReviewSchema),
        (status = 400, description = "Rejected submission", body = SubmissionErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "submitReview"
)]
#[post("/")]
pub async fn submit_review(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> Result<HttpResponse, SubmissionFailure> {
    let body = read_body(payload).await?;
    let request = parse_submission_form(&body)?;
    let review = state.submissions.submit_review(request).await?;
    Ok(HttpResponse::Created().json(review))
}

/// Drain the request stream. Review bodies have no size cap.
async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, Error> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| Error::invalid_request(format!("failed to read request body: {e}")))?;
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

#[cfg(test)]
#[path = "reviews_tests.rs"]
mod tests;
