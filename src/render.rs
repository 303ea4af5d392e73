use crate::errors::{IOError, RenderError, TemplateError};
use crate::templates::TemplateName;
use crate::types::{IndexArgs, Post, PostArgs, PostsArgs, WebsiteData};
use color_eyre::eyre::Result;
use handlebars::Handlebars;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tokio::fs::read_to_string;

/// Where a post page lands relative to the site root.
pub fn post_path(post: &Post) -> PathBuf {
    Path::new(&post.category).join(format!("{}.html", post.slug))
}

pub const INDEX_PATH: &str = "index.html";
pub const POSTS_INDEX_PATH: &str = "posts/index.html";

pub struct Renderer<'a> {
    h: Handlebars<'a>,
    site_title: String,
}

impl<'a> Renderer<'a> {
    /// Registers the built-in templates.
    pub fn new(site_title: &str) -> Result<Renderer<'a>, TemplateError> {
        let mut renderer = Renderer {
            h: Handlebars::new(),
            site_title: site_title.to_owned(),
        };
        for name in TemplateName::iter() {
            renderer.register(name, name.template_str())?;
        }
        Ok(renderer)
    }

    /// Registers the built-in templates, replacing each one that has a
    /// `<name>.hbs` counterpart in `templates_dir`.
    pub async fn with_overrides(site_title: &str, templates_dir: &Path) -> Result<Renderer<'a>> {
        let mut renderer = Renderer::new(site_title)?;
        for name in TemplateName::iter() {
            let path = templates_dir.join(format!("{name}.hbs"));
            match read_to_string(&path).await {
                Ok(template) => renderer.register(name, &template)?,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Err(IOError::Read { path, source }.into()),
            }
        }
        Ok(renderer)
    }

    fn register(&mut self, name: TemplateName, template: &str) -> Result<(), TemplateError> {
        self.h
            .register_template_string(&name.to_string(), template.trim_start())
            .map_err(|source| TemplateError {
                template_name: name.to_string(),
                source,
            })
    }

    fn render<T: Serialize>(
        &self,
        name: TemplateName,
        target: &str,
        args: &T,
    ) -> Result<String, RenderError> {
        self.h
            .render(&name.to_string(), args)
            .map_err(|source| RenderError {
                target: target.to_owned(),
                template_name: name.to_string(),
                source,
            })
    }

    pub fn render_post(&self, post: &Post) -> Result<String, RenderError> {
        self.render(
            TemplateName::Post,
            &post.title,
            &PostArgs {
                site_title: &self.site_title,
                root: "../",
                post,
            },
        )
    }

    pub fn render_index(&self, data: &WebsiteData) -> Result<String, RenderError> {
        self.render(
            TemplateName::Index,
            INDEX_PATH,
            &IndexArgs {
                site_title: &self.site_title,
                root: "",
                featured_post: &data.featured_post,
                recent_posts: &data.recent_posts,
            },
        )
    }

    pub fn render_posts_index(&self, data: &WebsiteData) -> Result<String, RenderError> {
        self.render(
            TemplateName::Posts,
            POSTS_INDEX_PATH,
            &PostsArgs {
                site_title: &self.site_title,
                root: "../",
                posts: &data.all_posts,
            },
        )
    }
}
