//! Media transfer: downloads images and videos referenced by the scraped
//! content, uploads them to the WordPress media library and rewrites the
//! content to point at the new locations.

use crate::endpoint::{api_endpoint, basic_auth_header};
use crate::error::MigrateError;
use regex::{NoExpand, Regex};
use serde::Deserialize;

const DOWNLOAD_TIMEOUT_SECS: u64 = 120;
const UPLOAD_TIMEOUT_SECS: u64 = 300;

/// Media library entry returned by WordPress after an upload.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    #[serde(default)]
    pub id: i64,
    pub source_url: String,
}

fn img_tag_re() -> Regex {
    Regex::new(r"(?is)<img\b[^>]*>").expect("img tag regex must compile")
}

fn video_tag_re() -> Regex {
    Regex::new(r"(?is)<(?:video|source)\b[^>]*>").expect("video tag regex must compile")
}

fn anchor_tag_re() -> Regex {
    Regex::new(r"(?is)<a\b[^>]*>").expect("anchor tag regex must compile")
}

fn src_attr_re() -> Regex {
    Regex::new(r#"(?is)\bsrc\s*=\s*["']([^"']+)["']"#).expect("src attr regex must compile")
}

fn href_attr_re() -> Regex {
    Regex::new(r#"(?is)\bhref\s*=\s*["']([^"']+)["']"#).expect("href attr regex must compile")
}

/// Uploads all media referenced by `content` and returns the content with
/// the references rewritten. A single failed upload keeps the original URL
/// and is not fatal.
pub async fn transfer_media(
    content: &str,
    wp_url: &str,
    username: &str,
    password: &str,
    post_date: &str,
) -> Result<String, MigrateError> {
    let sources = collect_media_sources(content);
    log::info!("Found {} media sources to process.", sources.len());

    let mut mapping: Vec<(String, String)> = Vec::new();
    for source in &sources {
        match upload_media(source, wp_url, username, password, Some(post_date)).await {
            Ok(item) => {
                log::info!("Replacing media URL: {} -> {}", source, item.source_url);
                mapping.push((source.clone(), item.source_url));
            }
            Err(e) => {
                log::warn!("Could not upload {}, keeping original: {}", source, e);
            }
        }
    }

    Ok(rewrite_content(content, &mapping))
}

/// Downloads one media item and uploads it to the WordPress media library,
/// preserving the origin content type and, when given, the post date.
pub async fn upload_media(
    media_url: &str,
    wp_url: &str,
    username: &str,
    password: &str,
    date: Option<&str>,
) -> Result<MediaItem, MigrateError> {
    log::info!("Downloading media: {}", media_url);

    let download_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .user_agent("blogport/0.1.0")
        .build()
        .map_err(|e| MigrateError::Media(format!("Client build failed: {}", e)))?;

    let response = download_client
        .get(media_url)
        .send()
        .await
        .map_err(|e| MigrateError::Media(e.to_string()))?
        .error_for_status()
        .map_err(|e| MigrateError::Media(e.to_string()))?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let filename = filename_from_url(media_url);

    let bytes = response
        .bytes()
        .await
        .map_err(|e| MigrateError::Media(e.to_string()))?;

    let mut api_url = api_endpoint(wp_url, "/wp/v2/media");
    if let Some(date) = date {
        api_url.push_str(&format!("&date={}", date));
    }
    log::info!("Uploading to {}", api_url);

    let upload_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(UPLOAD_TIMEOUT_SECS))
        .user_agent("blogport/0.1.0")
        .build()
        .map_err(|e| MigrateError::Media(format!("Client build failed: {}", e)))?;

    let mut request = upload_client
        .post(&api_url)
        .header(reqwest::header::AUTHORIZATION, basic_auth_header(username, password))
        .header(
            reqwest::header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", filename),
        );
    if let Some(content_type) = content_type {
        request = request.header(reqwest::header::CONTENT_TYPE, content_type);
    }

    let upload = request
        .body(bytes.to_vec())
        .send()
        .await
        .map_err(|e| MigrateError::Media(e.to_string()))?;

    log::info!("Upload response status: {}", upload.status());

    let item = upload
        .error_for_status()
        .map_err(|e| MigrateError::Media(e.to_string()))?
        .json::<MediaItem>()
        .await
        .map_err(|e| MigrateError::Media(e.to_string()))?;

    log::info!("Upload successful! ID: {}, URL: {}", item.id, item.source_url);
    Ok(item)
}

/// Absolute image/video/source URLs referenced by the content, deduplicated
/// in document order. Relative URLs are left alone (Blogspot serves media
/// from absolute googleusercontent URLs).
pub(crate) fn collect_media_sources(content: &str) -> Vec<String> {
    let src_re = src_attr_re();
    let mut sources = Vec::new();

    for tag_re in [img_tag_re(), video_tag_re()] {
        for tag in tag_re.find_iter(content) {
            if let Some(caps) = src_re.captures(tag.as_str()) {
                let src = caps[1].to_string();
                if src.starts_with("http") && !sources.contains(&src) {
                    sources.push(src);
                }
            }
        }
    }

    sources
}

/// Rewrites media references according to `mapping` (old URL -> uploaded
/// URL): swaps `src` on img/video/source tags, drops the now-stale
/// `srcset`/`width`/`height` attributes from rewritten images, and retargets
/// Blogspot-hosted anchors that wrap an uploaded item.
pub(crate) fn rewrite_content(content: &str, mapping: &[(String, String)]) -> String {
    if mapping.is_empty() {
        return content.to_string();
    }

    let src_re = src_attr_re();
    let stale_attr_re = Regex::new(r#"(?is)\s(?:srcset|width|height)\s*=\s*["'][^"']*["']"#)
        .expect("stale attr regex must compile");

    let rewritten = img_tag_re().replace_all(content, |caps: &regex::Captures| {
        let tag = &caps[0];
        match mapped_src(&src_re, tag, mapping) {
            Some(new_src) => {
                let cleaned = stale_attr_re.replace_all(tag, "");
                src_re
                    .replace(&cleaned, NoExpand(&format!(r#"src="{}""#, new_src)))
                    .into_owned()
            }
            None => tag.to_string(),
        }
    });

    let rewritten = video_tag_re().replace_all(&rewritten, |caps: &regex::Captures| {
        let tag = &caps[0];
        match mapped_src(&src_re, tag, mapping) {
            Some(new_src) => src_re
                .replace(tag, NoExpand(&format!(r#"src="{}""#, new_src)))
                .into_owned(),
            None => tag.to_string(),
        }
    });

    // Blogspot wraps images in anchors pointing at a different size of the
    // same file, so hrefs are matched by filename stem rather than exactly.
    let href_re = href_attr_re();
    let mut replaced_anchors = 0usize;
    let rewritten = anchor_tag_re().replace_all(&rewritten, |caps: &regex::Captures| {
        let tag = &caps[0];
        let Some(href_caps) = href_re.captures(tag) else {
            return tag.to_string();
        };
        let href = &href_caps[1];
        if !href.contains("blogger.googleusercontent.com") && !href.contains("blogspot.com") {
            return tag.to_string();
        }
        for (old_url, new_url) in mapping {
            let old_stem = file_stem(old_url);
            let href_stem = file_stem(href);
            if !old_stem.is_empty() && href_stem.contains(old_stem) {
                replaced_anchors += 1;
                return href_re
                    .replace(tag, NoExpand(&format!(r#"href="{}""#, new_url)))
                    .into_owned();
            }
        }
        tag.to_string()
    });

    log::info!("Replaced {} anchor tag hrefs.", replaced_anchors);
    rewritten.into_owned()
}

fn mapped_src<'m>(src_re: &Regex, tag: &str, mapping: &'m [(String, String)]) -> Option<&'m str> {
    let caps = src_re.captures(tag)?;
    let src = &caps[1];
    mapping
        .iter()
        .find(|(old, _)| old == src)
        .map(|(_, new)| new.as_str())
}

/// Filename part of a URL path, falling back to a generic name.
pub(crate) fn filename_from_url(url: &str) -> String {
    let path = url
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(url);
    let name = path.rsplit('/').next().unwrap_or("");
    if name.is_empty() || name.contains(':') {
        "media_item.jpg".to_string()
    } else {
        name.to_string()
    }
}

/// Last path segment without extension, the unit Blogspot keeps stable
/// across differently sized variants of the same upload.
fn file_stem(url: &str) -> &str {
    let path = url.split(|c| c == '?' || c == '#').next().unwrap_or(url);
    let name = path.rsplit('/').next().unwrap_or("");
    name.split('.').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_media_sources_dedupes() {
        let content = r#"
            <img src="https://host/a.jpg" width="640">
            <img src="https://host/a.jpg">
            <video src="https://host/clip.mp4"></video>
            <img src="/relative.png">
        "#;
        assert_eq!(
            collect_media_sources(content),
            vec![
                "https://host/a.jpg".to_string(),
                "https://host/clip.mp4".to_string()
            ]
        );
    }

    #[test]
    fn test_rewrite_img_swaps_src_and_drops_stale_attrs() {
        let content =
            r#"<img src="https://host/a.jpg" srcset="https://host/a-small.jpg" width="640" height="480">"#;
        let mapping = vec![(
            "https://host/a.jpg".to_string(),
            "https://wp/uploads/a.jpg".to_string(),
        )];
        let rewritten = rewrite_content(content, &mapping);
        assert!(rewritten.contains(r#"src="https://wp/uploads/a.jpg""#));
        assert!(!rewritten.contains("srcset"));
        assert!(!rewritten.contains("width"));
        assert!(!rewritten.contains("height"));
    }

    #[test]
    fn test_rewrite_keeps_unmapped_tags() {
        let content = r#"<img src="https://host/b.jpg" width="10">"#;
        let mapping = vec![(
            "https://host/a.jpg".to_string(),
            "https://wp/uploads/a.jpg".to_string(),
        )];
        assert_eq!(rewrite_content(content, &mapping), content);
    }

    #[test]
    fn test_rewrite_anchor_matched_by_stem() {
        let content = r#"<a href="https://blogger.googleusercontent.com/img/s1600/photo.jpg"><img src="https://blogger.googleusercontent.com/img/s320/photo.jpg"></a>"#;
        let mapping = vec![(
            "https://blogger.googleusercontent.com/img/s320/photo.jpg".to_string(),
            "https://wp/uploads/photo.jpg".to_string(),
        )];
        let rewritten = rewrite_content(content, &mapping);
        assert!(rewritten.contains(r#"href="https://wp/uploads/photo.jpg""#));
        assert!(rewritten.contains(r#"src="https://wp/uploads/photo.jpg""#));
    }

    #[test]
    fn test_rewrite_leaves_foreign_anchors() {
        let content = r#"<a href="https://example.com/photo.jpg">x</a>"#;
        let mapping = vec![(
            "https://blogger.googleusercontent.com/img/photo.jpg".to_string(),
            "https://wp/uploads/photo.jpg".to_string(),
        )];
        assert_eq!(rewrite_content(content, &mapping), content);
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://host/path/photo.jpg?x=1"),
            "photo.jpg"
        );
        assert_eq!(filename_from_url("https://host/"), "media_item.jpg");
    }
}
