use crate::dates::parse_date;
use crate::types::{Post, WebsiteData};
use std::cmp::Reverse;
use tracing::warn;

/// Number of posts shown under the featured post on the index page.
pub const RECENT_POSTS: usize = 3;

/// Sorts newest first. The sort is stable, and posts whose date does not
/// parse keep their relative order after every dated post.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by_cached_key(|post| {
        let date = parse_date(&post.date);
        if let Err(e) = &date {
            warn!(title = %post.title, "{e}");
        }
        Reverse(date.ok())
    });
}

pub fn build(mut posts: Vec<Post>) -> WebsiteData {
    sort_posts(&mut posts);
    partition(posts)
}

/// Splits already sorted posts into featured, recent and all.
pub fn partition(posts: Vec<Post>) -> WebsiteData {
    let Some(featured_post) = posts.first().cloned() else {
        return WebsiteData::default();
    };
    let end = posts.len().min(RECENT_POSTS + 1);
    let recent_posts = posts[1..end].to_vec();
    WebsiteData {
        featured_post,
        recent_posts,
        all_posts: posts,
    }
}
