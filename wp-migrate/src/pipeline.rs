//! Orchestration of the three migration stages.

use crate::error::MigrateError;
use crate::media::transfer_media;
use crate::publish::{publish_post, PublishedPost};
use crate::scrape::scrape_blogspot;

/// Moves one Blogspot post to the given WordPress site: scrape, transfer
/// the embedded media, publish. The returned post carries the live link.
pub async fn migrate_post(
    source_url: &str,
    wp_url: &str,
    username: &str,
    password: &str,
) -> Result<PublishedPost, MigrateError> {
    log::info!("Starting publish process for {}", source_url);

    log::info!("Step 1: Scraping Blogspot...");
    let scraped = scrape_blogspot(source_url).await?;
    log::info!("Scraping successful.");

    log::info!("Step 2: Processing media...");
    let content = transfer_media(
        &scraped.content,
        wp_url,
        username,
        password,
        &scraped.post_date,
    )
    .await?;
    log::info!("Media processing successful.");

    log::info!("Step 3: Publishing to WordPress...");
    let post = publish_post(
        &scraped.title,
        &content,
        wp_url,
        username,
        password,
        Some(&scraped.post_date),
    )
    .await?;
    log::info!("Published successfully: {}", post.link);

    Ok(post)
}
