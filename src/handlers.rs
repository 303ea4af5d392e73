use crate::assets::{THEME_JS, THEME_JS_PATH};
use crate::config::Config;
use crate::console::ConsoleHandle;
use crate::markdown::read_posts_dir;
use crate::prompt::{collect_post, Prompter};
use crate::render::{post_path, Renderer, INDEX_PATH, POSTS_INDEX_PATH};
use crate::store::{load_posts, load_posts_or_empty, prepend_post, save_posts};
use crate::types::{Post, WebsiteData};
use crate::utils::create_file;
use crate::view;
use chrono::prelude::*;
use color_eyre::eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a build reads its posts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Markdown(PathBuf),
    Json(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub featured_title: String,
    pub recent_posts: usize,
    pub total_posts: usize,
    pub skipped_posts: usize,
}

pub async fn load_source(source: &Source, config: &Config) -> Result<Vec<Post>> {
    match source {
        Source::Markdown(dir) => Ok(read_posts_dir(dir, config.category_mode)
            .await
            .wrap_err("Error loading posts from markdown")?),
        Source::Json(path) => load_posts(path)
            .await
            .wrap_err("Error loading posts from JSON"),
    }
}

async fn write_post(renderer: &Renderer<'_>, post: &Post, output_dir: &Path) -> Result<()> {
    let out = renderer.render_post(post)?;
    let path = output_dir.join(post_path(post));
    create_file(&path, out).await?;
    debug!(file = %path.display(), "wrote post");
    Ok(())
}

/// Writes one page per post. A post that fails is logged and skipped; the
/// number of skipped posts is returned.
pub async fn write_posts(renderer: &Renderer<'_>, posts: &[Post], output_dir: &Path) -> usize {
    let mut skipped = 0;
    for post in posts {
        if let Err(e) = write_post(renderer, post, output_dir).await {
            warn!(title = %post.title, "Error generating HTML: {e:#}");
            skipped += 1;
        }
    }
    skipped
}

pub async fn write_indexes(
    renderer: &Renderer<'_>,
    data: &WebsiteData,
    output_dir: &Path,
) -> Result<()> {
    let out = renderer.render_index(data)?;
    create_file(&output_dir.join(INDEX_PATH), out)
        .await
        .wrap_err("Error generating index.html")?;

    let out = renderer.render_posts_index(data)?;
    create_file(&output_dir.join(POSTS_INDEX_PATH), out)
        .await
        .wrap_err("Error generating posts/index.html")?;
    Ok(())
}

pub async fn run_build(
    console: &mut ConsoleHandle,
    config: &Config,
    source: &Source,
) -> Result<BuildSummary> {
    let start = Utc::now();
    let posts = load_source(source, config).await?;
    let data = view::build(posts);

    let renderer = match &config.templates_dir {
        Some(dir) => Renderer::with_overrides(&config.site_title, dir).await?,
        None => Renderer::new(&config.site_title)?,
    };

    let output_dir = config.output_dir.as_path();
    let skipped_posts = write_posts(&renderer, &data.all_posts, output_dir).await;
    write_indexes(&renderer, &data, output_dir).await?;
    create_file(&output_dir.join(THEME_JS_PATH), THEME_JS.trim_start()).await?;

    let summary = BuildSummary {
        featured_title: data.featured_post.title.clone(),
        recent_posts: data.recent_posts.len(),
        total_posts: data.all_posts.len(),
        skipped_posts,
    };
    console.log("Website generated successfully!")?;
    console.log(&format!("- Featured post: {}", summary.featured_title))?;
    console.log(&format!("- Recent posts: {}", summary.recent_posts))?;
    console.log(&format!("- Total posts: {}", summary.total_posts))?;
    if skipped_posts > 0 {
        console.log(&format!("- Skipped posts: {skipped_posts}"))?;
    }
    console.log_elapsed((Utc::now() - start).num_milliseconds())?;

    Ok(summary)
}

/// Asks for a new post and puts it at the front of the JSON store.
pub async fn run_add<P: Prompter>(
    console: &mut ConsoleHandle,
    prompter: &mut P,
    posts_file: &Path,
) -> Result<Post> {
    console.log("Add New Post")?;
    console.log("============")?;

    let posts = load_posts_or_empty(posts_file)
        .await
        .wrap_err("Error loading posts")?;
    console.log(&format!("Found {} existing posts", posts.len()))?;

    let post = collect_post(prompter)?;
    let posts = prepend_post(posts, post.clone());
    save_posts(&posts, posts_file)
        .await
        .wrap_err("Error saving posts")?;

    console.log("Post added successfully!")?;
    console.log(&format!("Title: {}", post.title))?;
    console.log(&format!("Date: {}", post.date))?;
    console.log(&format!("Category: {}", post.category))?;
    console.log(&format!("Slug: {}", post.slug))?;
    console.log(&format!("Total posts: {}", posts.len()))?;
    console.log("To generate the website, run:")?;
    console.log(&format!(
        "    postforge build --json {}",
        posts_file.display()
    ))?;

    Ok(post)
}
