//! Reads posts out of hand-written Markdown files.
//!
//! A post file is a loose bullet list under a single `# Title` heading:
//!
//! ```markdown
//! # Post title
//! - Description:
//!     - One line of description
//! - Topic: Maps
//! - Date: Jan 2, 2024
//! - Image for the post: https://example.com/cover.png
//! - External links:
//!     - https://example.com/download
//! ```
//!
//! Only the line right after `- Description:` is read as the description, and
//! the external link block ends at the first blank or non-indented line.

use crate::config::CategoryMode;
use crate::derive::{derive_category, derive_slug, Category};
use crate::errors::IOError;
use crate::types::Post;
use crate::utils::get_files_in_dir;
use std::path::Path;
use tokio::fs::{read_dir, read_to_string};
use tracing::{debug, warn};

const TITLE: &str = "# ";
const DESCRIPTION: &str = "- Description:";
const TOPIC: &str = "- Topic:";
const DATE: &str = "- Date:";
const IMAGE: &str = "- Image for the post:";
const EXTERNAL_LINKS: &str = "- External links:";
const ITEM: &str = "- ";
const LINK_INDENT: &str = "    ";

/// Files in a Markdown directory with this name are never read as posts.
pub const TEMPLATE_FILE: &str = "template.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingSection,
    AwaitingDescription,
    InLinks,
}

pub fn parse_post(md_str: &str, category_mode: CategoryMode) -> Post {
    let mut post = Post::default();
    let mut state = ScanState::SeekingSection;
    for line in md_str.lines() {
        state = match state {
            ScanState::SeekingSection => scan_section(&mut post, line),
            ScanState::AwaitingDescription => {
                if let Some(rest) = line.trim().strip_prefix(ITEM) {
                    post.description = rest.trim().to_owned();
                }
                // the lookahead line is still an ordinary line
                scan_section(&mut post, line)
            }
            ScanState::InLinks => {
                if line.trim().is_empty() || !line.starts_with(LINK_INDENT) {
                    scan_section(&mut post, line)
                } else {
                    if let Some(link) = line.trim().strip_prefix(ITEM).map(str::trim) {
                        if link.starts_with("http") {
                            post.external_links
                                .get_or_insert_with(Vec::new)
                                .push(link.to_owned());
                        }
                    }
                    ScanState::InLinks
                }
            }
        };
    }

    post.slug = derive_slug(&post.title);
    post.category = match category_mode {
        CategoryMode::Fixed => Category::default().to_string(),
        CategoryMode::Topic => derive_category(&post.topic),
    };
    post
}

fn scan_section(post: &mut Post, line: &str) -> ScanState {
    let line = line.trim();
    if let Some(title) = line.strip_prefix(TITLE) {
        post.title = title.trim().to_owned();
    } else if line.starts_with(DESCRIPTION) {
        return ScanState::AwaitingDescription;
    } else if let Some(topic) = line.strip_prefix(TOPIC) {
        post.topic = topic.trim().to_owned();
    } else if let Some(date) = line.strip_prefix(DATE) {
        post.date = date.trim().to_owned();
    } else if let Some(image_url) = line.strip_prefix(IMAGE) {
        post.image_url = image_url.trim().to_owned();
    } else if line.starts_with(EXTERNAL_LINKS) {
        return ScanState::InLinks;
    }
    ScanState::SeekingSection
}

pub async fn read_post(path: &Path, category_mode: CategoryMode) -> Result<Post, IOError> {
    let md_str = read_to_string(path).await.map_err(|source| IOError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_post(&md_str, category_mode))
}

pub fn is_post_file(name: &str) -> bool {
    name.ends_with(".md") && name != TEMPLATE_FILE
}

/// Reads every post file in `dir`, in file name order. Listing `dir` is fatal;
/// a single unreadable file is logged and left out.
pub async fn read_posts_dir(dir: &Path, category_mode: CategoryMode) -> Result<Vec<Post>, IOError> {
    let r_dir = read_dir(dir).await.map_err(|source| IOError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut entries = get_files_in_dir(r_dir).await.map_err(|source| IOError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    entries.sort_by_key(|(.., path)| path.to_owned());

    let mut posts = Vec::new();
    for (name, metadata, path) in entries {
        if !(metadata.is_file() && is_post_file(&name)) {
            debug!(file = %path.display(), "skipping non-post entry");
            continue;
        }

        match read_post(&path, category_mode).await {
            Ok(post) => posts.push(post),
            Err(e) => warn!(file = %path.display(), error = %e, "skipping unreadable post"),
        }
    }
    Ok(posts)
}
