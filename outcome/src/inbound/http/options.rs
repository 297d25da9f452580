//! Response formatting options.
//!
//! [`ResponseOptions`] is a plain value handed to a
//! [`ResponseProjector`](super::ResponseProjector). Hosts that cannot thread
//! it through may install one process-wide with the `set_*` functions below;
//! these are meant to be called once at startup, before requests are served.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use crate::domain::Outcome;

/// Rewrites an envelope into an arbitrary JSON shape.
pub type EnvelopeTransform = Arc<dyn Fn(Outcome<Value>) -> Value + Send + Sync>;

/// JSON encoding preferences for response bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Emit indented JSON instead of the compact form.
    pub pretty: bool,
}

impl SerializerConfig {
    /// Compact JSON.
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented JSON.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Knobs consulted by the response projection.
///
/// Each knob is optional and independent.
///
/// # Examples
/// ```
/// use outcome::inbound::http::ResponseOptions;
///
/// let options = ResponseOptions::new().with_envelope_default(Some(true));
/// assert!(options.resolve_envelope(None));
/// assert!(!options.resolve_envelope(Some(false)));
/// ```
#[derive(Clone, Default)]
pub struct ResponseOptions {
    envelope_default: Option<bool>,
    envelope_transform: Option<EnvelopeTransform>,
    serializer: Option<SerializerConfig>,
}

impl ResponseOptions {
    /// Options with every knob unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            envelope_default: None,
            envelope_transform: None,
            serializer: None,
        }
    }

    /// Set or clear the default body mode.
    #[must_use]
    pub const fn with_envelope_default(mut self, envelope: Option<bool>) -> Self {
        self.envelope_default = envelope;
        self
    }

    /// Set or clear the envelope rewrite.
    #[must_use]
    pub fn with_envelope_transform(mut self, transform: Option<EnvelopeTransform>) -> Self {
        self.envelope_transform = transform;
        self
    }

    /// Set or clear the serializer configuration.
    #[must_use]
    pub const fn with_serializer_config(mut self, serializer: Option<SerializerConfig>) -> Self {
        self.serializer = serializer;
        self
    }

    /// Default body mode, if one was chosen.
    #[must_use]
    pub const fn envelope_default(&self) -> Option<bool> {
        self.envelope_default
    }

    /// Registered envelope rewrite, if any.
    #[must_use]
    pub fn envelope_transform(&self) -> Option<&EnvelopeTransform> {
        self.envelope_transform.as_ref()
    }

    /// Serializer configuration, falling back to compact JSON.
    #[must_use]
    pub fn serializer(&self) -> SerializerConfig {
        self.serializer.unwrap_or_default()
    }

    /// Decide the body mode for one call.
    ///
    /// An explicit per-call choice wins, then the default, then value mode.
    #[must_use]
    pub fn resolve_envelope(&self, explicit: Option<bool>) -> bool {
        explicit.or(self.envelope_default).unwrap_or(false)
    }
}

impl fmt::Debug for ResponseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseOptions")
            .field("envelope_default", &self.envelope_default)
            .field("envelope_transform", &self.envelope_transform.is_some())
            .field("serializer", &self.serializer)
            .finish()
    }
}

static GLOBAL_OPTIONS: RwLock<ResponseOptions> = RwLock::new(ResponseOptions::new());

fn update_global(apply: impl FnOnce(&mut ResponseOptions)) {
    let mut guard = GLOBAL_OPTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    apply(&mut guard);
}

/// Snapshot of the process-wide options.
#[must_use]
pub fn global() -> ResponseOptions {
    GLOBAL_OPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace every process-wide knob at once.
pub fn install_global(options: ResponseOptions) {
    update_global(|current| *current = options);
}

/// Set or clear the process-wide default body mode.
pub fn set_envelope_default(envelope: Option<bool>) {
    update_global(|current| current.envelope_default = envelope);
}

/// Set or clear the process-wide envelope rewrite.
pub fn set_envelope_transform<F>(transform: Option<F>)
where
    F: Fn(Outcome<Value>) -> Value + Send + Sync + 'static,
{
    let transform = transform.map(|f| Arc::new(f) as EnvelopeTransform);
    update_global(|current| current.envelope_transform = transform);
}

/// Set or clear the process-wide serializer configuration.
pub fn set_serializer_config(serializer: Option<SerializerConfig>) {
    update_global(|current| current.serializer = serializer);
}
