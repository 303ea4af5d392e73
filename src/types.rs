use serde::{Deserialize, Serialize};

/// One blog entry. `slug` and `category` are cached derivations of `title` and
/// `topic`; they are stored alongside the authored fields in the JSON store.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image_url: String,
    /// `None` is kept apart from an empty list so a stored `null` is
    /// written back as `null`.
    #[serde(default)]
    pub external_links: Option<Vec<String>>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
}

impl Post {
    pub fn links(&self) -> &[String] {
        self.external_links.as_deref().unwrap_or_default()
    }
}

/// The per-run arrangement of posts used by the index pages. Never persisted.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteData {
    pub featured_post: Post,
    pub recent_posts: Vec<Post>,
    pub all_posts: Vec<Post>,
}

#[derive(Serialize)]
pub struct PostArgs<'a> {
    pub site_title: &'a str,
    pub root: &'a str,
    pub post: &'a Post,
}

#[derive(Serialize)]
pub struct IndexArgs<'a> {
    pub site_title: &'a str,
    pub root: &'a str,
    pub featured_post: &'a Post,
    pub recent_posts: &'a [Post],
}

#[derive(Serialize)]
pub struct PostsArgs<'a> {
    pub site_title: &'a str,
    pub root: &'a str,
    pub posts: &'a [Post],
}
