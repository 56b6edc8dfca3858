use serde::{Deserialize, Serialize};

/// Payload sent to the publish endpoint.
///
/// Field values are forwarded exactly as entered in the form; the server
/// does its own checking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishRequest {
    pub source_url: String,
    pub wp_url: String,
    pub username: String,
    pub password: String,
}

/// Payload returned by the publish endpoint.
///
/// `link` is present when `success` is true, `message` when it is false.
/// Both stay optional so a sloppy server response still parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// State of the status region below the form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    /// Nothing to show (initial state, and reset at the start of each attempt)
    Hidden,
    /// Post is live; `link` points at the published post
    Published { link: String },
    /// Attempt failed; the string is the full text to display
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_exact_keys() {
        let request = PublishRequest {
            source_url: "https://blog.example.com/2025/04/post.html".to_string(),
            wp_url: "https://wp.example.com".to_string(),
            username: "editor".to_string(),
            password: "app pass word".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(
            object["source_url"],
            "https://blog.example.com/2025/04/post.html"
        );
        assert_eq!(object["wp_url"], "https://wp.example.com");
        assert_eq!(object["username"], "editor");
        assert_eq!(object["password"], "app pass word");
    }

    #[test]
    fn test_response_with_link() {
        let response: PublishResponse =
            serde_json::from_str(r#"{"success": true, "link": "https://example.com/post/1"}"#)
                .unwrap();
        assert!(response.success);
        assert_eq!(response.link.as_deref(), Some("https://example.com/post/1"));
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_response_with_message_only() {
        let response: PublishResponse =
            serde_json::from_str(r#"{"success": false, "message": "invalid credentials"}"#)
                .unwrap();
        assert!(!response.success);
        assert_eq!(response.link, None);
        assert_eq!(response.message.as_deref(), Some("invalid credentials"));
    }

    #[test]
    fn test_bare_response_still_parses() {
        let response: PublishResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.link, None);
    }
}
