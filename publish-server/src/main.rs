use axum::{http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

mod config;

use config::load_settings;

/// Body of a publish request. Fields default to empty strings so a partial
/// body reaches the validation below instead of a framework rejection.
#[derive(Debug, Deserialize)]
struct PublishBody {
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    wp_url: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PublishReply {
    success: bool,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl PublishReply {
    fn published(link: String) -> Self {
        Self {
            success: true,
            message: "Passage is published".to_string(),
            link: Some(link),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            link: None,
        }
    }
}

async fn publish(Json(body): Json<PublishBody>) -> (StatusCode, Json<PublishReply>) {
    let required = [
        &body.source_url,
        &body.wp_url,
        &body.username,
        &body.password,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(PublishReply::failure("Missing required fields.")),
        );
    }

    match wp_migrate::migrate_post(&body.source_url, &body.wp_url, &body.username, &body.password)
        .await
    {
        Ok(post) => (StatusCode::OK, Json(PublishReply::published(post.link))),
        Err(e) => {
            log::error!("Publish failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PublishReply::failure(e.user_message())),
            )
        }
    }
}

fn build_router() -> Router {
    Router::new().route("/publish", post(publish))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = load_settings();
    let app = build_router();

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    log::info!("Publish server listening on {}", settings.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    async fn reply_for(body: &str) -> (StatusCode, PublishReply) {
        let app = build_router();
        let request = Request::post("/publish")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let reply = serde_json::from_slice(&bytes).expect("reply json");
        (status, reply)
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected_with_400() {
        let (status, reply) = reply_for("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!reply.success);
        assert_eq!(reply.message, "Missing required fields.");
        assert_eq!(reply.link, None);
    }

    #[tokio::test]
    async fn test_blank_field_counts_as_missing() {
        let body = r#"{
            "source_url": "https://b.blogspot.com/2025/04/p.html",
            "wp_url": "https://wp.example.com",
            "username": "  ",
            "password": "secret"
        }"#;
        let (status, reply) = reply_for(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.message, "Missing required fields.");
    }

    #[tokio::test]
    async fn test_get_on_publish_is_not_allowed() {
        let app = build_router();
        let request = Request::get("/publish").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_reply_serialization_matches_wire_contract() {
        let reply = PublishReply::published("https://wp/2025/04/title/".to_string());
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Passage is published");
        assert_eq!(value["link"], "https://wp/2025/04/title/");

        let reply = PublishReply::failure("nope");
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("link").is_none());
    }
}
