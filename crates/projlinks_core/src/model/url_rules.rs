//! URL acceptance rules and title derivation.

use url::Url;

/// Returns whether `candidate` is an absolute `http`/`https` URL.
///
/// Relative paths, other schemes, and unparseable strings are rejected.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Derives a display title from the URL hostname.
///
/// A leading `www.` is stripped and the first character is upper-cased, so
/// `https://www.example.com/page` becomes `Example.com`. Input that does not
/// parse, or has no hostname, is returned unchanged.
pub fn extract_title_from_url(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };
    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return raw.to_string(),
    };
    let host = host.strip_prefix("www.").unwrap_or(host);

    let mut chars = host.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => raw.to_string(),
    }
}
