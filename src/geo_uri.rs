//! `geo:` URI parsing
//!
//! Parses RFC 5870-style geographic location identifiers, as emitted by
//! Android share sheets and similar sources, into [`Location`] values.
//! Parsing is a pure function of the input string: no global state, safe to
//! call repeatedly and concurrently.

use crate::error::GeoLinkError;
use crate::models::Location;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// Scheme prefix every accepted URI must start with
pub const GEO_URI_PREFIX: &str = "geo:";

const LAT_LNG_SEPARATOR: char = ',';
/// Supports both Android/deprecated `?` and `&` separators and the
/// RFC-finalized `;` separator, in any mix
const PARAMETER_SEPARATORS: [char; 3] = ['?', '&', ';'];
const PARAMETER_VALUE_SEPARATOR: char = '=';

/// Parse a URI of the form `geo:<lat>,<lng>[<sep>key=value...]`.
///
/// Fails only when the scheme prefix is missing. Malformed coordinate or zoom
/// numerals do NOT fail: they come back as `NaN`, matching the historically
/// tolerated inputs this library exists to handle. See the crate docs for the
/// full permissiveness rules.
pub fn parse(uri: &str) -> Result<Location, GeoLinkError> {
    let Some(remainder) = uri.strip_prefix(GEO_URI_PREFIX) else {
        return Err(GeoLinkError::format(uri));
    };

    // Example remainder: "17.65,-30.43?z=4.3&q=local+business"
    // The first segment is the coordinate pair, everything after is parameters.
    let mut segments = remainder.split(PARAMETER_SEPARATORS);
    let raw_lat_lng = segments.next().unwrap_or("");

    let mut coordinates = raw_lat_lng.split(LAT_LNG_SEPARATOR);
    let latitude = parse_coordinate(coordinates.next());
    let longitude = parse_coordinate(coordinates.next());

    // Collect parameters into a map; a repeated key keeps its last value
    let mut parameters: HashMap<String, String> = HashMap::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = match segment.split_once(PARAMETER_VALUE_SEPARATOR) {
            Some((key, value)) => (key, value),
            None => (segment, ""),
        };
        parameters.insert(percent_decode(raw_key), decode_parameter_value(raw_value));
    }

    let zoom = parameters
        .get("z")
        .map(|z| z.parse::<f64>().unwrap_or(f64::NAN));
    let query = parameters.get("q").cloned();

    let location = Location {
        latitude,
        longitude,
        zoom,
        query,
    };
    debug!("Parsed {uri:?} into {location:?}");
    Ok(location)
}

/// A missing or malformed coordinate becomes `NaN`, never an error
fn parse_coordinate(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Decode a raw parameter value: literal `+` means an encoded space
/// (`application/x-www-form-urlencoded` convention), so it is rewritten to
/// `%20` before percent-decoding
fn decode_parameter_value(raw: &str) -> String {
    percent_decode(&raw.replace('+', "%20"))
}

/// Percent-decode, keeping the input as-is when it is not valid UTF-8 once
/// decoded (permissive, like the rest of the parser)
fn percent_decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_coordinates_only() {
        let location = parse("geo:17.65,-30.43").unwrap();
        assert_eq!(location.latitude, 17.65);
        assert_eq!(location.longitude, -30.43);
        assert_eq!(location.zoom, None);
        assert_eq!(location.query, None);
    }

    #[test]
    fn test_parse_full_uri() {
        let location = parse("geo:17.65,-30.43?z=4.3&q=local+business").unwrap();
        assert_eq!(location.latitude, 17.65);
        assert_eq!(location.longitude, -30.43);
        assert_eq!(location.zoom, Some(4.3));
        assert_eq!(location.query.as_deref(), Some("local business"));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(matches!(
            parse("not-a-geo-uri"),
            Err(GeoLinkError::Format { .. })
        ));
        assert!(matches!(
            parse("https://example.com"),
            Err(GeoLinkError::Format { .. })
        ));
    }

    // Every mix of the three parameter separators must extract the same
    // parameter set.
    #[rstest]
    #[case("geo:1.5,2.5?z=4&q=cafe")]
    #[case("geo:1.5,2.5&z=4&q=cafe")]
    #[case("geo:1.5,2.5;z=4;q=cafe")]
    #[case("geo:1.5,2.5?z=4;q=cafe")]
    #[case("geo:1.5,2.5;z=4?q=cafe")]
    #[case("geo:1.5,2.5&z=4?q=cafe")]
    fn test_parse_separator_mixes(#[case] uri: &str) {
        let location = parse(uri).unwrap();
        assert_eq!(location.latitude, 1.5);
        assert_eq!(location.longitude, 2.5);
        assert_eq!(location.zoom, Some(4.0));
        assert_eq!(location.query.as_deref(), Some("cafe"));
    }

    #[test]
    fn test_parse_percent_decodes_query() {
        let location = parse("geo:1,2?q=caf%C3%A9%20%26%20bar").unwrap();
        assert_eq!(location.query.as_deref(), Some("café & bar"));
    }

    #[test]
    fn test_parse_plus_means_space_in_values() {
        let location = parse("geo:1,2?q=local+business").unwrap();
        assert_eq!(location.query.as_deref(), Some("local business"));
    }

    #[test]
    fn test_parse_duplicate_key_last_wins() {
        let location = parse("geo:1,2?z=3&z=9").unwrap();
        assert_eq!(location.zoom, Some(9.0));
    }

    #[test]
    fn test_parse_ignores_unknown_parameters() {
        let location = parse("geo:1,2?u=35&crs=wgs84&z=7").unwrap();
        assert_eq!(location.zoom, Some(7.0));
        assert_eq!(location.query, None);
    }

    #[test]
    fn test_parse_value_split_on_first_equals() {
        let location = parse("geo:1,2?q=a=b").unwrap();
        assert_eq!(location.query.as_deref(), Some("a=b"));
    }

    #[test]
    fn test_parse_malformed_coordinates_become_nan() {
        let location = parse("geo:abc,def").unwrap();
        assert!(location.latitude.is_nan());
        assert!(location.longitude.is_nan());
    }

    #[test]
    fn test_parse_missing_longitude_becomes_nan() {
        let location = parse("geo:17.65").unwrap();
        assert_eq!(location.latitude, 17.65);
        assert!(location.longitude.is_nan());
    }

    #[test]
    fn test_parse_malformed_zoom_is_present_but_nan() {
        let location = parse("geo:1,2?z=high").unwrap();
        assert!(location.zoom.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_parse_bare_parameter_has_empty_value() {
        // "q" with no "=" behaves like "q=" (empty query, still present)
        let location = parse("geo:1,2?q").unwrap();
        assert_eq!(location.query.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_negative_and_integer_coordinates() {
        let location = parse("geo:-90,180").unwrap();
        assert_eq!(location.latitude, -90.0);
        assert_eq!(location.longitude, 180.0);
    }
}
