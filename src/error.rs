//! Error types and handling for `GeoLink`

use thiserror::Error;

/// Main error type for the `GeoLink` library
#[derive(Error, Debug)]
pub enum GeoLinkError {
    /// The input string does not start with the `geo:` scheme prefix.
    /// Carries the offending input for diagnostic display.
    #[error("Not a \"geo:\" URI: {uri}")]
    Format { uri: String },
}

impl GeoLinkError {
    /// Create a new scheme-mismatch error
    pub fn format<S: Into<String>>(uri: S) -> Self {
        Self::Format { uri: uri.into() }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GeoLinkError::Format { uri } => {
                format!("The shared link is not a geo: URI and cannot be converted: {uri}")
            }
        }
    }
}
