//! Lexical URL features.
//!
//! Everything here is computed from the URL string alone: no parsing library
//! normalization, no network access. Malformed input degrades to an empty
//! network location instead of failing.

use crate::config::{SPECIAL_CHARACTERS, UNKNOWN_TLD};

use super::names;
use super::record::{FeatureRecord, FeatureValue};

/// Structural and textual features of a URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFeatures {
    /// Characters in the whole URL.
    pub url_length: usize,
    /// Characters in the network location.
    pub domain_length: usize,
    /// Network location is only digits and dots.
    pub is_domain_ip: bool,
    /// Text after the last dot of the network location, or `unknown`.
    pub tld: String,
    /// Dot-separated labels minus two. Negative for single-label hosts.
    pub no_of_sub_domain: i64,
    /// URL starts with `https`.
    pub is_https: bool,
    /// ASCII digits anywhere in the URL.
    pub no_of_digits: usize,
    /// Characters from [`SPECIAL_CHARACTERS`].
    pub no_of_special_chars: usize,
    /// Literal `-` count.
    pub no_of_hyphens: usize,
}

impl UrlFeatures {
    /// Flattens into named record entries.
    pub fn into_record(self) -> FeatureRecord {
        FeatureRecord::from([
            (names::URL_LENGTH, FeatureValue::from(self.url_length)),
            (names::DOMAIN_LENGTH, FeatureValue::from(self.domain_length)),
            (names::IS_DOMAIN_IP, FeatureValue::from(self.is_domain_ip)),
            (names::TLD, FeatureValue::from(self.tld)),
            (names::NO_OF_SUB_DOMAIN, FeatureValue::from(self.no_of_sub_domain)),
            (names::IS_HTTPS, FeatureValue::Int(i64::from(self.is_https))),
            (names::NO_OF_DIGITS, FeatureValue::from(self.no_of_digits)),
            (
                names::NO_OF_SPECIAL_CHARS,
                FeatureValue::from(self.no_of_special_chars),
            ),
            (names::NO_OF_HYPHENS, FeatureValue::from(self.no_of_hyphens)),
        ])
    }
}

/// Extracts lexical features from a URL string. Never fails.
///
/// # Examples
///
/// ```
/// use phishing_detector::features::extract_url_features;
///
/// let features = extract_url_features("https://www.example.com/login");
/// assert_eq!(features.tld, "com");
/// assert_eq!(features.no_of_sub_domain, 1);
/// assert!(features.is_https);
/// ```
pub fn extract_url_features(url: &str) -> UrlFeatures {
    let netloc = network_location(url);
    log::debug!("Network location for {url:?}: {netloc:?}");

    let tld = match netloc.rfind('.') {
        Some(idx) => netloc[idx + 1..].to_string(),
        None => UNKNOWN_TLD.to_string(),
    };

    // Digits-and-dots hosts count as IPs; that is how the model was trained.
    let stripped: String = netloc.chars().filter(|c| *c != '.').collect();
    let is_domain_ip = !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit());

    let labels = netloc.split('.').count() as i64;

    UrlFeatures {
        url_length: url.chars().count(),
        domain_length: netloc.chars().count(),
        is_domain_ip,
        tld,
        no_of_sub_domain: labels - 2,
        is_https: url.starts_with("https"),
        no_of_digits: url.chars().filter(|c| c.is_ascii_digit()).count(),
        no_of_special_chars: url
            .chars()
            .filter(|c| SPECIAL_CHARACTERS.contains(*c))
            .count(),
        no_of_hyphens: url.matches('-').count(),
    }
}

/// Returns the raw network-location segment (`userinfo@host:port`) of a URL.
///
/// Follows generic URL decomposition: leading control characters and spaces
/// are dropped, tab and newline characters are removed anywhere, then an
/// optional `scheme:` prefix, then an authority only when the remainder
/// starts with `//`, ending at the first `/`, `?` or `#`. The authority is
/// otherwise returned exactly as written.
pub fn network_location(url: &str) -> String {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    authority(&cleaned).to_string()
}

fn authority(url: &str) -> &str {
    let rest = match url.find(':') {
        Some(idx) if is_scheme(&url[..idx]) => &url[idx + 1..],
        _ => url,
    };

    match rest.strip_prefix("//") {
        Some(authority) => {
            let end = authority.find(['/', '?', '#']).unwrap_or(authority.len());
            &authority[..end]
        }
        None => "",
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        _ => false,
    }
}
