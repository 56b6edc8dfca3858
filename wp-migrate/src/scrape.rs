//! Blogspot post scraping.
//!
//! There is no full HTML parser here; the post body lives in a
//! class-marked container in every common Blogspot theme, so the opening
//! tag is located with a regex and the matching close tag by depth
//! counting.

use crate::error::MigrateError;
use regex::Regex;

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Post date used when the URL carries no `/YYYY/MM/` segment.
const DEFAULT_POST_DATE: &str = "2000-01-01T00:00:00";

/// Title classes in common Blogspot themes, in preference order.
const TITLE_CLASSES: [&str; 2] = ["post-title", "entry-title"];
/// Content classes in common Blogspot themes, in preference order.
const CONTENT_CLASSES: [&str; 2] = ["post-body", "entry-content"];

/// A scraped Blogspot post.
#[derive(Debug, Clone)]
pub struct ScrapedPost {
    pub title: String,
    /// Inner HTML of the post body, untouched
    pub content: String,
    /// ISO timestamp, `YYYY-MM-01T12:00:00` when derived from the URL
    pub post_date: String,
}

/// Fetches a Blogspot post page and extracts title, content and date.
pub async fn scrape_blogspot(url: &str) -> Result<ScrapedPost, MigrateError> {
    log::info!("Fetching {}", url);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent("blogport/0.1.0")
        .build()
        .map_err(|e| MigrateError::Scrape(format!("Client build failed: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MigrateError::Scrape(e.to_string()))?
        .error_for_status()
        .map_err(|e| MigrateError::Scrape(e.to_string()))?;

    let html = response
        .text()
        .await
        .map_err(|e| MigrateError::Scrape(e.to_string()))?;

    let title = extract_text(&html, &TITLE_CLASSES);
    let content = extract_block(&html, &CONTENT_CLASSES);

    let (title, content) = match (title, content) {
        (Some(title), Some(content)) => (title, content),
        _ => {
            return Err(MigrateError::Scrape(
                "Could not find title or content in the Blogspot page.".to_string(),
            ))
        }
    };

    log::info!("Found title: {}", title);

    let post_date = post_date_from_url(url);
    Ok(ScrapedPost {
        title,
        content,
        post_date,
    })
}

/// Derives a post date from the `/YYYY/MM/` segment Blogspot puts in post
/// URLs; noon on the first of the month keeps the archive order sane.
pub fn post_date_from_url(url: &str) -> String {
    let re = Regex::new(r"/(\d{4})/(\d{2})/").expect("date regex must compile");
    match re.captures(url) {
        Some(caps) => {
            let date = format!("{}-{}-01T12:00:00", &caps[1], &caps[2]);
            log::info!("Extracted date from URL: {}", date);
            date
        }
        None => DEFAULT_POST_DATE.to_string(),
    }
}

/// Inner HTML of the first element carrying one of the given classes.
fn extract_block(html: &str, classes: &[&str]) -> Option<String> {
    for class in classes {
        if let Some((open_end, tag)) = find_class_tag(html, class) {
            if let Some(inner) = element_inner(html, open_end, &tag) {
                return Some(inner.trim().to_string());
            }
        }
    }
    None
}

/// Text content of the first element carrying one of the given classes.
fn extract_text(html: &str, classes: &[&str]) -> Option<String> {
    extract_block(html, classes).map(|block| strip_tags(&block))
}

/// Finds the opening tag of the first element whose class attribute
/// contains `class` as a whole token. Returns the offset just past the
/// opening tag and the lowercased tag name.
fn find_class_tag(html: &str, class: &str) -> Option<(usize, String)> {
    let pattern = format!(
        r#"(?is)<([a-z][a-z0-9]*)\b[^>]*\bclass\s*=\s*["'](?:[^"']*\s)?{}(?:\s[^"']*)?["'][^>]*>"#,
        regex::escape(class)
    );
    let re = Regex::new(&pattern).expect("class tag regex must compile");
    let caps = re.captures(html)?;
    let whole = caps.get(0)?;
    let tag = caps.get(1)?.as_str().to_ascii_lowercase();
    Some((whole.end(), tag))
}

/// Scans past an opening tag for the matching close tag, counting nested
/// elements of the same name.
fn element_inner<'h>(html: &'h str, open_end: usize, tag: &str) -> Option<&'h str> {
    let token = Regex::new(&format!(
        r"(?i)<{0}\b|</{0}\s*>",
        regex::escape(tag)
    ))
    .expect("element token regex must compile");

    let mut depth = 1usize;
    for m in token.find_iter(&html[open_end..]) {
        if m.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return Some(&html[open_end..open_end + m.start()]);
            }
        } else {
            depth += 1;
        }
    }
    None
}

/// Drops tags, decodes the handful of entities Blogspot titles actually
/// contain and collapses whitespace.
fn strip_tags(html: &str) -> String {
    let tag_re = Regex::new(r"<[^>]+>").expect("tag regex must compile");
    let text = tag_re.replace_all(html, " ");
    let text = decode_entities(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <h3 class="post-title entry-title">A &amp; B <span>in April</span></h3>
        <div class="post-body entry-content">
            <p>Hello</p>
            <div class="sep"><img src="https://blogger.googleusercontent.com/a/x.jpg"></div>
        </div>
        <div class="post-footer">footer</div>
        </body></html>
    "#;

    #[test]
    fn test_extract_title_text() {
        let title = extract_text(PAGE, &TITLE_CLASSES).unwrap();
        assert_eq!(title, "A & B in April");
    }

    #[test]
    fn test_extract_content_keeps_nested_markup() {
        let content = extract_block(PAGE, &CONTENT_CLASSES).unwrap();
        assert!(content.contains("<p>Hello</p>"));
        assert!(content.contains("blogger.googleusercontent.com"));
        assert!(!content.contains("post-footer"));
    }

    #[test]
    fn test_class_must_match_whole_token() {
        let html = r#"<div class="post-body-wrapper"><div class="post-body">x</div></div>"#;
        let (open_end, tag) = find_class_tag(html, "post-body").unwrap();
        assert_eq!(tag, "div");
        assert_eq!(element_inner(html, open_end, &tag), Some("x"));
    }

    #[test]
    fn test_post_date_from_url() {
        assert_eq!(
            post_date_from_url("https://b.blogspot.com/2025/04/my-post.html"),
            "2025-04-01T12:00:00"
        );
    }

    #[test]
    fn test_post_date_fallback() {
        assert_eq!(
            post_date_from_url("https://b.blogspot.com/p/about.html"),
            "2000-01-01T00:00:00"
        );
    }
}
