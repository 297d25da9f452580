//! Projection of an outcome to a numeric code and a JSON body.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::options::{self, ResponseOptions};
use crate::domain::{Outcome, Status};

/// Failure while turning an outcome into a response body.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The payload could not be encoded as JSON.
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A response code paired with its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    code: u16,
    body: Value,
}

impl Projection {
    /// Numeric response code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// JSON body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Split into code and body.
    #[must_use]
    pub fn into_parts(self) -> (u16, Value) {
        (self.code, self.body)
    }
}

/// Response code for an outcome.
///
/// A non-zero external code wins; otherwise the status code is used.
///
/// # Examples
/// ```
/// use outcome::Outcome;
/// use outcome::inbound::http::response_code;
///
/// assert_eq!(response_code(&Outcome::<()>::failed("bad")), 400);
/// assert_eq!(response_code(&Outcome::<()>::failed("bad").with_external_code(422)), 422);
/// ```
#[must_use]
pub const fn response_code<T>(outcome: &Outcome<T>) -> u16 {
    match outcome.external_code() {
        Some(code) if code > 0 => code,
        _ => outcome.status().code(),
    }
}

/// Maps outcomes to [`Projection`]s under a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct ResponseProjector {
    options: ResponseOptions,
}

impl ResponseProjector {
    /// Projector bound to explicit options.
    #[must_use]
    pub const fn new(options: ResponseOptions) -> Self {
        Self { options }
    }

    /// Projector bound to a snapshot of the process-wide options.
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(options::global())
    }

    /// Options this projector applies.
    #[must_use]
    pub const fn options(&self) -> &ResponseOptions {
        &self.options
    }

    /// Project an outcome.
    ///
    /// `envelope` picks the body mode for this call; `None` defers to the
    /// configured default, then to value mode.
    ///
    /// # Errors
    /// Returns [`ProjectionError::Serialize`] when the payload cannot be
    /// encoded as JSON.
    ///
    /// # Examples
    /// ```
    /// use outcome::Outcome;
    /// use outcome::inbound::http::ResponseProjector;
    /// use serde_json::json;
    ///
    /// let projector = ResponseProjector::default();
    /// let projection = projector
    ///     .project(Outcome::<u8>::failed("name is required"), None)
    ///     .expect("projects");
    ///
    /// assert_eq!(projection.code(), 400);
    /// assert_eq!(projection.body(), &json!("name is required"));
    /// ```
    pub fn project<T: Serialize>(
        &self,
        outcome: Outcome<T>,
        envelope: Option<bool>,
    ) -> Result<Projection, ProjectionError> {
        let code = response_code(&outcome);
        let body = if self.options.resolve_envelope(envelope) {
            self.envelope_body(outcome, code)?
        } else {
            value_body(outcome)?
        };
        debug!(code, "projected outcome");
        Ok(Projection { code, body })
    }

    /// Await an outcome future, then [`project`](Self::project) it.
    ///
    /// # Errors
    /// Returns [`ProjectionError::Serialize`] when the payload cannot be
    /// encoded as JSON.
    pub async fn project_async<T, F>(
        &self,
        outcome: F,
        envelope: Option<bool>,
    ) -> Result<Projection, ProjectionError>
    where
        T: Serialize,
        F: Future<Output = Outcome<T>>,
    {
        self.project(outcome.await, envelope)
    }

    fn envelope_body<T: Serialize>(
        &self,
        outcome: Outcome<T>,
        code: u16,
    ) -> Result<Value, ProjectionError> {
        let mut enveloped = outcome.with_external_code(code);
        if enveloped.message().is_none_or(str::is_empty) {
            let name = enveloped.status().name();
            enveloped.set_message(Some(name.to_owned()));
        }
        match self.options.envelope_transform() {
            Some(transform) => Ok(transform(enveloped.into_json_payload()?)),
            None => Ok(serde_json::to_value(&enveloped)?),
        }
    }
}

fn value_body<T: Serialize>(outcome: Outcome<T>) -> Result<Value, ProjectionError> {
    let status = outcome.status();
    let text = match status {
        Status::Success => {
            return match outcome.into_payload() {
                Some(payload) => Ok(serde_json::to_value(payload)?),
                None => Ok(Value::Null),
            };
        }
        Status::Fault => outcome.full_fault_message(),
        _ => outcome.message().map(str::to_owned),
    };
    Ok(Value::String(
        text.filter(|text| !text.is_empty())
            .unwrap_or_else(|| status.name().to_owned()),
    ))
}
