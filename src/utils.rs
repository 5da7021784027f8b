/// Utility functions
use reqwest::Url;

/// Round to two decimal places, ties to even.
///
/// Rounding works on the exact binary value, so 2.675 (stored as 2.67499...)
/// rounds down while 0.125 (exact) goes to the even neighbour 0.12.
pub fn round_hundredths(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}

/// File extension of the last path segment of a URL, dot included.
///
/// Query strings and fragments are ignored. A segment that only starts with
/// a dot (`.hidden`) has no extension. Returns an empty string when none.
pub fn file_extension(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let segment = path.rsplit('/').next().unwrap_or_default();
    let leading_dots = segment.len() - segment.trim_start_matches('.').len();

    match segment[leading_dots..].rfind('.') {
        Some(idx) => segment[leading_dots + idx..].to_string(),
        None => String::new(),
    }
}
