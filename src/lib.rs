//! `GeoLink` - `geo:` URI parsing and map web service link generation
//!
//! This library converts RFC 5870-style `geo:` URIs, as emitted by Android
//! share sheets and similar sources, into destination URLs for third-party
//! map web services. It is deliberately narrow: only the `geo:` scheme, only
//! the `z` (zoom) and `q` (search query) parameters, no network access and no
//! geocoding.
//!
//! Parsing is permissive by design: the only hard failure is a missing
//! `geo:` scheme prefix. Malformed coordinate or zoom numerals propagate as
//! `NaN` rather than errors, matching how historically tolerated inputs were
//! handled before this rewrite.

pub mod error;
pub mod geo_uri;
pub mod models;
pub mod providers;

// Re-export core types for public API
pub use error::GeoLinkError;
pub use geo_uri::parse;
pub use models::Location;
pub use providers::{DEFAULT_PROVIDER, MapProvider, PREFERENCE_KEY, to_maps_url};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GeoLinkError>;
