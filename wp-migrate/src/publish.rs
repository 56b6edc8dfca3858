//! Post creation through the WordPress REST API.

use crate::endpoint::{api_endpoint, basic_auth_header};
use crate::error::MigrateError;
use serde::{Deserialize, Serialize};

const PUBLISH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct NewPost<'a> {
    title: &'a str,
    content: &'a str,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
}

/// Post as returned by WordPress after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishedPost {
    #[serde(default)]
    pub id: i64,
    pub link: String,
}

/// Creates and publishes a post.
///
/// Redirects are refused instead of followed: a redirecting posts endpoint
/// silently turns the authenticated POST into a GET on most hosts, so it is
/// reported as an error with the target location.
pub async fn publish_post(
    title: &str,
    content: &str,
    wp_url: &str,
    username: &str,
    password: &str,
    post_date: Option<&str>,
) -> Result<PublishedPost, MigrateError> {
    let api_url = api_endpoint(wp_url, "/wp/v2/posts");
    log::info!("Publishing post '{}' to {}", title, api_url);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(PUBLISH_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .user_agent("blogport/0.1.0")
        .build()
        .map_err(|e| MigrateError::Publish(format!("Client build failed: {}", e)))?;

    let payload = NewPost {
        title,
        content,
        status: "publish",
        date: post_date,
    };

    let response = client
        .post(&api_url)
        .header(reqwest::header::AUTHORIZATION, basic_auth_header(username, password))
        .json(&payload)
        .send()
        .await
        .map_err(|e| MigrateError::Publish(e.to_string()))?;

    if response.status().is_redirection() {
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");
        log::warn!("Redirect detected to: {}", location);
        return Err(MigrateError::Publish(format!(
            "Server tried to redirect to {}. This usually breaks the API.",
            location
        )));
    }

    response
        .error_for_status()
        .map_err(|e| MigrateError::Publish(e.to_string()))?
        .json::<PublishedPost>()
        .await
        .map_err(|e| MigrateError::Publish(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_serialization() {
        let payload = NewPost {
            title: "Title",
            content: "<p>Body</p>",
            status: "publish",
            date: Some("2025-04-01T12:00:00"),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["status"], "publish");
        assert_eq!(value["date"], "2025-04-01T12:00:00");
    }

    #[test]
    fn test_new_post_omits_missing_date() {
        let payload = NewPost {
            title: "Title",
            content: "Body",
            status: "publish",
            date: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("date").is_none());
    }

    #[test]
    fn test_published_post_parses_without_id() {
        let post: PublishedPost =
            serde_json::from_str(r#"{"link": "https://wp/2025/04/title/"}"#).unwrap();
        assert_eq!(post.id, 0);
        assert_eq!(post.link, "https://wp/2025/04/title/");
    }
}
