use crate::errors::{IOError, ParseError};
use color_eyre::eyre::Result;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

pub const DEFAULT_CONFIG_FILE: &str = "postforge.toml";

/// How Markdown posts get their category.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMode {
    /// Every Markdown post is filed under `maps`.
    #[default]
    Fixed,
    /// Category follows the post's topic.
    Topic,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub site_title: String,
    pub output_dir: PathBuf,
    pub markdown_dir: PathBuf,
    pub posts_file: PathBuf,
    pub category_mode: CategoryMode,
    pub templates_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_title: "My Blog".to_owned(),
            output_dir: PathBuf::from("."),
            markdown_dir: PathBuf::from("content"),
            posts_file: PathBuf::from("posts.json"),
            category_mode: CategoryMode::default(),
            templates_dir: None,
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, toml_str: &str) -> Result<Config, ParseError> {
        toml::from_str(toml_str).map_err(|source| ParseError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if given, else `postforge.toml` in the working directory
    /// when present, else the defaults.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        match read_to_string(path).await {
            Ok(toml_str) => Ok(Config::from_toml(path, &toml_str)?),
            Err(e) if e.kind() == ErrorKind::NotFound && !required => Ok(Config::default()),
            Err(source) => Err(IOError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}
