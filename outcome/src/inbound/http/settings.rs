//! Response formatting settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::options::{self, ResponseOptions, SerializerConfig};

/// Startup configuration for response projection.
///
/// Values come from `OUTCOME_*` environment variables, configuration files
/// and command-line flags, in OrthoConfig's usual precedence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "OUTCOME")]
pub struct ResponseSettings {
    /// Wrap bodies in the envelope unless a call chooses otherwise.
    #[ortho_config(default = false)]
    pub envelope: bool,
    /// Pretty-print JSON bodies.
    #[ortho_config(default = false)]
    pub pretty: bool,
}

impl ResponseSettings {
    /// Translate into projection options.
    #[must_use]
    pub fn to_options(&self) -> ResponseOptions {
        ResponseOptions::new()
            .with_envelope_default(Some(self.envelope))
            .with_serializer_config(Some(SerializerConfig {
                pretty: self.pretty,
            }))
    }

    /// Install these settings as the process-wide options.
    ///
    /// Any registered envelope transform is kept.
    pub fn apply_globally(&self) {
        options::set_envelope_default(Some(self.envelope));
        options::set_serializer_config(Some(SerializerConfig {
            pretty: self.pretty,
        }));
    }
}
