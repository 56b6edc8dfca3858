//! # WP Migrate
//!
//! Moves a single Blogspot post into a WordPress site.
//!
//! This crate provides the three pipeline stages and their orchestration:
//! - Scraping a Blogspot post page for title, content and post date
//! - Transferring embedded media to the WordPress media library and
//!   rewriting the content to point at the new locations
//! - Publishing the post through the WordPress REST API
//!
//! ## Separation of Concerns
//!
//! This crate only talks to the two remote sites. It does **not**:
//! - Serve HTTP (handled by publish-server)
//! - Render UI (handled by publish-form / the app)
//! - Store credentials (passed in per call)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! let post = wp_migrate::migrate_post(
//!     "https://yourblog.blogspot.com/2025/04/post.html",
//!     "https://yoursite.example.com",
//!     "editor",
//!     "app password",
//! )
//! .await?;
//! println!("published at {}", post.link);
//! ```

pub mod endpoint;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod publish;
pub mod scrape;

pub use error::MigrateError;
pub use pipeline::migrate_post;
pub use publish::PublishedPost;
pub use scrape::ScrapedPost;
