//! Target normalization

use url::Url;

/// Reduce a user-supplied URL or bare domain to its host component.
///
/// Inputs that parse as a URL with a host yield that host (lower-cased, no
/// port or path). Anything else, including bare domains and empty input, is
/// returned trimmed but otherwise untouched.
pub fn host_component(input: &str) -> String {
    let trimmed = input.trim();

    match Url::parse(trimmed) {
        Ok(url) => match url.host_str() {
            Some(host) if !host.is_empty() => host.trim_matches(|c| c == '[' || c == ']').to_string(),
            _ => trimmed.to_string(),
        },
        Err(_) => trimmed.to_string(),
    }
}
