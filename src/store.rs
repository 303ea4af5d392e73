use crate::errors::{IOError, ParseError};
use crate::types::Post;
use crate::utils::create_file;
use color_eyre::eyre::Result;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::read_to_string;

/// Loads the post collection from a JSON array.
pub async fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let json_str = read_to_string(path).await.map_err(|source| IOError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_posts(path, &json_str)?)
}

/// Like [`load_posts`], but a store that does not exist yet is an empty
/// collection.
pub async fn load_posts_or_empty(path: &Path) -> Result<Vec<Post>> {
    match read_to_string(path).await {
        Ok(json_str) => Ok(parse_posts(path, &json_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(IOError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

pub fn parse_posts(path: &Path, json_str: &str) -> Result<Vec<Post>, ParseError> {
    serde_json::from_str(json_str).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the collection as a two-space indented JSON array.
pub async fn save_posts(posts: &[Post], path: &Path) -> Result<()> {
    let json_str = serde_json::to_string_pretty(posts)?;
    create_file(path, json_str).await?;
    Ok(())
}

/// Puts `post` in front of the collection so it becomes the featured post on
/// the next build when dates tie.
pub fn prepend_post(posts: Vec<Post>, post: Post) -> Vec<Post> {
    let mut all = Vec::with_capacity(posts.len() + 1);
    all.push(post);
    all.extend(posts);
    all
}
