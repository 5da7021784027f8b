/// Defensive lookups into upstream JSON responses
use serde_json::Value;
use std::fmt;

pub const NEO_FEED_PATH: &[&str] = &["near_earth_objects"];
pub const APOD_HD_URL_PATH: &[&str] = &["hdurl"];
pub const APOD_URL_PATH: &[&str] = &["url"];
pub const APOD_MEDIA_TYPE_PATH: &[&str] = &["media_type"];
pub const ROVER_PHOTOS_PATH: &[&str] = &["photos"];

/// Walk `path` through nested objects and arrays.
///
/// Returns `None` (Missing) when any segment is absent or the value at that
/// point has the wrong shape. Array segments are decimal indices.
pub fn extract<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Like [`extract`] but requires a string at the end of the path
pub fn extract_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    extract(value, path).and_then(Value::as_str)
}

/// Like [`extract`] but requires a number at the end of the path
pub fn extract_f64(value: &Value, path: &[&str]) -> Option<f64> {
    extract(value, path).and_then(Value::as_f64)
}

/// Why an expected key was missing from a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCause {
    /// Key rejected, missing or expired
    Credential,
    /// The query itself was refused (bad date, range too wide)
    RejectedQuery,
    UnexpectedSchema,
}

impl fmt::Display for UpstreamCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamCause::Credential => write!(f, "credential rejected"),
            UpstreamCause::RejectedQuery => write!(f, "query rejected"),
            UpstreamCause::UnexpectedSchema => write!(f, "unexpected response schema"),
        }
    }
}

/// Classify an error-shaped response.
///
/// Both api.data.gov gateway errors (`{"error": {"code": "API_KEY_INVALID"}}`)
/// and service errors (`{"code": 400, "msg": ...}`) are recognised.
pub fn classify(status: u16, body: &Value) -> UpstreamCause {
    let gateway_code = extract_str(body, &["error", "code"]).unwrap_or_default();
    if matches!(status, 401 | 403) || gateway_code.starts_with("API_KEY") {
        return UpstreamCause::Credential;
    }

    let has_service_error = ["code", "msg", "error_message", "error"]
        .iter()
        .any(|key| extract(body, &[*key]).is_some());
    if (400..500).contains(&status) || has_service_error {
        return UpstreamCause::RejectedQuery;
    }

    UpstreamCause::UnexpectedSchema
}

/// Pick the first human-readable error message the upstream supplied
pub fn upstream_message(body: &Value) -> Option<&str> {
    const CANDIDATES: &[&[&str]] = &[
        &["error", "message"],
        &["msg"],
        &["error_message"],
        &["error"],
    ];
    CANDIDATES
        .iter()
        .find_map(|path| extract_str(body, path))
        .filter(|s| !s.is_empty())
}
