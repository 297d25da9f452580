//! HTTP adapter projecting outcomes to response codes and JSON bodies.
//!
//! Purpose: keep [`Outcome`](crate::Outcome) free of transport concerns while
//! Actix handlers can return outcomes directly.
//!
//! Two body modes exist. Value mode sends the payload on success and a
//! message string otherwise. Envelope mode sends the whole outcome as
//! `{status, message, statusCode, data}`.

pub mod options;
pub mod projection;
pub mod responder;
pub mod settings;

pub use options::{
    EnvelopeTransform, ResponseOptions, SerializerConfig, install_global, set_envelope_default,
    set_envelope_transform, set_serializer_config,
};
pub use projection::{Projection, ProjectionError, ResponseProjector, response_code};
pub use responder::{IntoOutcomeResponse, OutcomeResponse, render};
pub use settings::ResponseSettings;
