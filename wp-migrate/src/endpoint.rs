//! WordPress URL normalization and Basic auth.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Suffixes users commonly paste along with their site URL.
const API_SUFFIXES: [&str; 4] = [
    "/wp-json/wp/v2/posts",
    "/wp-json/wp/v2/media",
    "/wp-json",
    "/index.php",
];

/// Reduces a pasted WordPress URL to the bare site base: strips known API
/// paths, query parameters and trailing slashes.
pub fn clean_wp_url(url: &str) -> String {
    let mut url = url.trim().to_string();

    for suffix in API_SUFFIXES {
        if let Some(pos) = url.find(suffix) {
            url.truncate(pos);
        }
    }

    if let Some(pos) = url.find('?') {
        url.truncate(pos);
    }

    while url.ends_with('/') {
        url.pop();
    }

    url
}

/// Builds an API URL in the `rest_route` form, which works on sites where
/// the pretty `/wp-json/` route is broken or redirected.
pub fn api_endpoint(base_url: &str, route: &str) -> String {
    format!("{}/index.php?rest_route={}", clean_wp_url(base_url), route)
}

/// `Authorization` header value for a username + application password.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let token = STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_trailing_slashes() {
        assert_eq!(clean_wp_url("https://site.example.com//"), "https://site.example.com");
    }

    #[test]
    fn test_clean_strips_api_paths() {
        assert_eq!(
            clean_wp_url("https://site.example.com/wp-json/wp/v2/posts"),
            "https://site.example.com"
        );
        assert_eq!(
            clean_wp_url("https://site.example.com/index.php?rest_route=/wp/v2/posts"),
            "https://site.example.com"
        );
    }

    #[test]
    fn test_clean_strips_query_parameters() {
        assert_eq!(
            clean_wp_url("https://site.example.com/?page_id=2"),
            "https://site.example.com"
        );
    }

    #[test]
    fn test_api_endpoint_uses_rest_route() {
        assert_eq!(
            api_endpoint("https://site.example.com/", "/wp/v2/media"),
            "https://site.example.com/index.php?rest_route=/wp/v2/media"
        );
    }

    #[test]
    fn test_basic_auth_header() {
        assert_eq!(basic_auth_header("user", "pass"), "Basic dXNlcjpwYXNz");
    }
}
