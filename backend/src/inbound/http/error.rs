//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while rendering the two
//! request flows the way clients expect them:
//!
//! - listing failures become `500 Internal Server Error` with a plain-text
//!   body, whatever the error code;
//! - submission failures become `400 Bad Request` with a JSON
//!   `{"error": "<message>"}` body, store faults included.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Error, TRACE_ID_HEADER};

/// Prefix of every plain-text listing failure body.
pub const LISTING_FAILURE_PREFIX: &str = "An error occurred: ";

fn with_trace_header(mut builder: HttpResponseBuilder, error: &Error) -> HttpResponseBuilder {
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    builder
}

/// Failure of `GET /`.
#[derive(Debug)]
pub struct ListingFailure(Error);

impl From<Error> for ListingFailure {
    fn from(error: Error) -> Self {
        warn!(code = ?error.code(), message = error.message(), "review listing failed");
        Self(error)
    }
}

impl fmt::Display for ListingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LISTING_FAILURE_PREFIX}{}", self.0)
    }
}

impl ResponseError for ListingFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        with_trace_header(HttpResponse::build(self.status_code()), &self.0)
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// JSON body of a failed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionErrorBody {
    /// Human-readable failure message.
    pub error: String,
}

/// Failure of `POST /`.
#[derive(Debug)]
pub struct SubmissionFailure(Error);

impl From<Error> for SubmissionFailure {
    fn from(error: Error) -> Self {
        warn!(code = ?error.code(), message = error.message(), "review submission rejected");
        Self(error)
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for SubmissionFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        with_trace_header(HttpResponse::build(self.status_code()), &self.0).json(
            SubmissionErrorBody {
                error: self.0.message().to_owned(),
            },
        )
    }
}

#[cfg(test)]
mod tests;
