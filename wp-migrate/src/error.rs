use std::fmt;

/// Error type for the migration pipeline, one variant per stage.
#[derive(Debug)]
pub enum MigrateError {
    /// Blogspot page could not be fetched or parsed
    Scrape(String),
    /// A media item could not be transferred
    Media(String),
    /// WordPress rejected the post creation
    Publish(String),
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MigrateError::Scrape(msg) => write!(f, "Scraping error: {}", msg),
            MigrateError::Media(msg) => write!(f, "Media error: {}", msg),
            MigrateError::Publish(msg) => write!(f, "Publishing failed: {}", msg),
        }
    }
}

impl std::error::Error for MigrateError {}

impl MigrateError {
    /// Per-stage message in the shape the publish service reports to clients.
    pub fn user_message(&self) -> String {
        match self {
            MigrateError::Scrape(_) => format!("Failed to scrape Blogspot: {}", self),
            MigrateError::Media(_) => format!("Failed to process media: {}", self),
            MigrateError::Publish(_) => format!("Failed to publish to WordPress: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_carries_stage_prefix() {
        let error = MigrateError::Scrape("timed out".to_string());
        assert_eq!(
            error.user_message(),
            "Failed to scrape Blogspot: Scraping error: timed out"
        );
    }
}
