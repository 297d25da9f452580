//! Actix responder for outcomes.
//!
//! Purpose: let handlers return an [`Outcome`] directly while the response
//! code and JSON body follow the projection rules.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, warn};

use super::options::SerializerConfig;
use super::projection::{Projection, ResponseProjector};
use crate::domain::Outcome;

/// An outcome ready to be sent as an HTTP response.
///
/// # Examples
/// ```
/// use actix_web::get;
/// use outcome::Outcome;
/// use outcome::inbound::http::{IntoOutcomeResponse, OutcomeResponse};
///
/// #[get("/ping")]
/// async fn ping() -> OutcomeResponse<&'static str> {
///     Outcome::success("pong").into_response()
/// }
/// ```
#[derive(Debug)]
pub struct OutcomeResponse<T> {
    outcome: Outcome<T>,
    envelope: Option<bool>,
    projector: Option<ResponseProjector>,
}

impl<T> OutcomeResponse<T> {
    /// Wrap an outcome using the configured body mode.
    #[must_use]
    pub const fn new(outcome: Outcome<T>) -> Self {
        Self {
            outcome,
            envelope: None,
            projector: None,
        }
    }

    /// Force value or envelope mode for this response.
    #[must_use]
    pub const fn envelope(mut self, envelope: bool) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// Project with explicit options instead of the process-wide ones.
    #[must_use]
    pub fn with_projector(mut self, projector: ResponseProjector) -> Self {
        self.projector = Some(projector);
        self
    }
}

impl<T> From<Outcome<T>> for OutcomeResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self::new(outcome)
    }
}

/// Conversion of outcomes into [`OutcomeResponse`]s.
pub trait IntoOutcomeResponse<T> {
    /// Respond using the configured body mode.
    fn into_response(self) -> OutcomeResponse<T>;

    /// Respond in the given body mode.
    fn into_response_with(self, envelope: bool) -> OutcomeResponse<T>;
}

impl<T> IntoOutcomeResponse<T> for Outcome<T> {
    fn into_response(self) -> OutcomeResponse<T> {
        OutcomeResponse::new(self)
    }

    fn into_response_with(self, envelope: bool) -> OutcomeResponse<T> {
        OutcomeResponse::new(self).envelope(envelope)
    }
}

fn status_for(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or_else(|_| {
        warn!(code, "outcome code is not a valid HTTP status; using 500");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body("Internal server error")
}

/// Render a projection as an HTTP response.
#[must_use]
pub fn render(projection: &Projection, serializer: SerializerConfig) -> HttpResponse {
    let encoded = if serializer.pretty {
        serde_json::to_string_pretty(projection.body())
    } else {
        serde_json::to_string(projection.body())
    };
    match encoded {
        Ok(body) => HttpResponse::build(status_for(projection.code()))
            .content_type(ContentType::json())
            .body(body),
        Err(err) => {
            error!(error = %err, "failed to encode response body");
            internal_error()
        }
    }
}

impl<T: Serialize> Responder for OutcomeResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let projector = self.projector.unwrap_or_else(ResponseProjector::from_global);
        let serializer = projector.options().serializer();
        match projector.project(self.outcome, self.envelope) {
            Ok(projection) => render(&projection, serializer),
            Err(err) => {
                // Do not leak payload details to clients.
                error!(error = %err, "outcome projection failed");
                internal_error()
            }
        }
    }
}

impl<T: Serialize> Responder for Outcome<T> {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        OutcomeResponse::new(self).respond_to(req)
    }
}

#[cfg(test)]
mod tests;
