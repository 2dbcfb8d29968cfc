//! Location model for parsed `geo:` URIs
//!
//! A `Location` is a plain data carrier: it is produced by the parser and
//! consumed by the provider formatters, and holds no behavior of its own
//! beyond convenience constructors.

use serde::{Deserialize, Serialize};

/// A geographic location extracted from a `geo:` URI
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees. Always present, but may be `NaN` when the
    /// source URI carried a malformed numeral (permissive parsing).
    pub latitude: f64,
    /// Longitude in decimal degrees, same rules as latitude
    pub longitude: f64,
    /// Requested zoom level; `None` means "use the provider's default zoom"
    pub zoom: Option<f64>,
    /// Free-text search query (`q` parameter), already percent-decoded with
    /// `+` treated as a space. When present it takes precedence over the
    /// coordinate pair for providers that support search-by-text.
    pub query: Option<String>,
}

impl Location {
    /// Create a location from a bare coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom: None,
            query: None,
        }
    }

    /// Create a location with an explicit zoom level
    #[must_use]
    pub fn with_zoom(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom: Some(zoom),
            query: None,
        }
    }

    /// Create a location with a search query
    #[must_use]
    pub fn with_query(latitude: f64, longitude: f64, query: String) -> Self {
        Self {
            latitude,
            longitude,
            zoom: None,
            query: Some(query),
        }
    }
}
