use crate::controller::PublishTransport;
use crate::models::{PublishRequest, PublishResponse};

/// Error type for submission transport failures.
///
/// `Display` renders the bare failure description; the controller prepends
/// the user-facing `Network or Server Error: ` prefix when rendering it
/// into the status region.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishError {
    /// Request could not be sent or no response arrived
    Transport(String),
    /// Response arrived but its body was not valid JSON
    InvalidResponse(String),
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishError::Transport(msg) => write!(f, "{}", msg),
            PublishError::InvalidResponse(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PublishError {}

/// HTTP transport posting the form payload to a publish endpoint.
pub struct PublishService {
    endpoint: String,
}

impl PublishService {
    /// Create a transport for a fixed endpoint, e.g. `http://127.0.0.1:5000/publish`.
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PublishTransport for PublishService {
    /// Sends the payload as JSON and parses the reply.
    ///
    /// Non-2xx statuses are not transport failures: the server reports
    /// rejected submissions as regular `{success: false}` bodies with an
    /// error status, and those must surface as application-level failures.
    async fn submit(&self, request: &PublishRequest) -> Result<PublishResponse, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(600))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("blogport/0.1.0")
            .build()
            .map_err(|e| PublishError::Transport(format!("Client build failed: {}", e)))?;

        log::info!("Submitting publish request to {}", self.endpoint);

        let response = client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        response
            .json::<PublishResponse>()
            .await
            .map_err(|e| PublishError::InvalidResponse(e.to_string()))
    }
}
