//! Map provider URL generation
//!
//! Each provider formatter independently builds a deep link following its
//! destination service's own URL scheme. Coordinates always render with
//! exactly 5 decimal places; the zoom precision is provider-specific (OSM,
//! Google and Bing round to integer levels, Apple and Qwant keep two decimal
//! places).
//!
//! Known issue: when latitude and longitude are both exactly zero and no
//! search query is present, the formatters still emit the explicit `0,0`
//! coordinate. Several map services interpret that as "center on my current
//! location" rather than the Gulf of Guinea. This behavior is inherited from
//! the original handler and intentionally not special-cased.

use crate::models::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key the external options UI persists the provider choice under.
/// An absent key implies [`DEFAULT_PROVIDER`].
pub const PREFERENCE_KEY: &str = "maps";

/// Provider used when a stored preference is absent, unknown, or names a
/// provider retired in an earlier generation. Historically this was Qwant
/// Maps; the current generation defaults to OpenStreetMap.
pub const DEFAULT_PROVIDER: MapProvider = MapProvider::Osm;

/// Zoom level used when the `geo:` URI carried no `z` parameter, rendered in
/// each provider's own precision convention
const DEFAULT_ZOOM: f64 = 12.0;

/// The closed set of supported map web services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    /// OpenStreetMap
    Osm,
    /// Google Maps
    Gmaps,
    /// Bing Maps
    Bing,
    /// Apple Maps
    Apple,
    /// Qwant Maps (deprecated upstream, retained for stored preferences)
    Qwant,
}

impl MapProvider {
    pub const ALL: [MapProvider; 5] = [
        MapProvider::Osm,
        MapProvider::Gmaps,
        MapProvider::Bing,
        MapProvider::Apple,
        MapProvider::Qwant,
    ];

    /// Resolve a stored preference value onto a provider.
    ///
    /// Total over any input: unknown or absent values fall back to
    /// [`DEFAULT_PROVIDER`] rather than failing, so a preference written by an
    /// older generation of the system always maps onto something usable.
    #[must_use]
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("osm") => MapProvider::Osm,
            Some("gmaps") => MapProvider::Gmaps,
            Some("bing") => MapProvider::Bing,
            Some("apple") => MapProvider::Apple,
            Some("qwant") => MapProvider::Qwant,
            _ => DEFAULT_PROVIDER,
        }
    }

    /// The preference token this provider is stored as
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MapProvider::Osm => "osm",
            MapProvider::Gmaps => "gmaps",
            MapProvider::Bing => "bing",
            MapProvider::Apple => "apple",
            MapProvider::Qwant => "qwant",
        }
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the destination URL for a location on the given provider.
///
/// Total function: it never fails, for any combination of coordinates, zoom
/// and query. Formatting does not mutate the location and is idempotent.
#[must_use]
pub fn to_maps_url(location: &Location, provider: MapProvider) -> String {
    match provider {
        MapProvider::Osm => to_open_street_map_url(location),
        MapProvider::Gmaps => to_google_maps_url(location),
        MapProvider::Bing => to_bing_maps_url(location),
        MapProvider::Apple => to_apple_maps_url(location),
        MapProvider::Qwant => to_qwant_maps_url(location),
    }
}

fn to_open_street_map_url(location: &Location) -> String {
    if let Some(query) = &location.query {
        return format!(
            "https://www.openstreetmap.org/search?query={}",
            urlencoding::encode(query)
        );
    }
    format!(
        "https://www.openstreetmap.org/#map={}/{}/{}",
        integer_zoom(location),
        coordinate(location.latitude),
        coordinate(location.longitude)
    )
}

fn to_google_maps_url(location: &Location) -> String {
    if let Some(query) = &location.query {
        // Google expects full-URI encoding here: reserved characters like
        // "," and "&" pass through, unlike the component encoding the other
        // providers get.
        return format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            encode_uri(query)
        );
    }
    format!(
        "https://www.google.com/maps/@?api=1&map_action=map&center={},{}&zoom={}",
        coordinate(location.latitude),
        coordinate(location.longitude),
        integer_zoom(location)
    )
}

fn to_bing_maps_url(location: &Location) -> String {
    if let Some(query) = &location.query {
        return format!("https://www.bing.com/maps?q={}", urlencoding::encode(query));
    }
    format!(
        "https://www.bing.com/maps?cp={}~{}&lvl={}",
        coordinate(location.latitude),
        coordinate(location.longitude),
        integer_zoom(location)
    )
}

fn to_apple_maps_url(location: &Location) -> String {
    if let Some(query) = &location.query {
        return format!("https://maps.apple.com/?q={}", urlencoding::encode(query));
    }
    format!(
        "https://maps.apple.com/?ll={},{}&z={}",
        coordinate(location.latitude),
        coordinate(location.longitude),
        two_decimal_zoom(location)
    )
}

fn to_qwant_maps_url(location: &Location) -> String {
    if let Some(query) = &location.query {
        return format!(
            "https://www.qwant.com/maps/?q={}",
            urlencoding::encode(query)
        );
    }
    format!(
        "https://www.qwant.com/maps/#map={}/{}/{}",
        two_decimal_zoom(location),
        coordinate(location.latitude),
        coordinate(location.longitude)
    )
}

/// Coordinates render with exactly 5 decimal places on every provider,
/// trailing zeros included
fn coordinate(value: f64) -> String {
    format!("{value:.5}")
}

/// Zoom for providers that round to whole zoom levels
fn integer_zoom(location: &Location) -> String {
    format!("{}", location.zoom.unwrap_or(DEFAULT_ZOOM).round())
}

/// Zoom for providers that keep two decimal places
fn two_decimal_zoom(location: &Location) -> String {
    format!("{:.2}", location.zoom.unwrap_or(DEFAULT_ZOOM))
}

/// JS `encodeURI`-style encoding: percent-encode everything except
/// alphanumerics and the characters a full URI may contain verbatim
fn encode_uri(raw: &str) -> String {
    const URI_VERBATIM: &[u8] = b";,/?:@&=+$-_.!~*'()#";
    let mut encoded = String::with_capacity(raw.len());
    for &byte in raw.as_bytes() {
        if byte.is_ascii_alphanumeric() || URI_VERBATIM.contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
