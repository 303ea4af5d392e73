use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IOError {
    #[error("Failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unable to parse date: {0}")]
pub struct DateParseError(pub String);

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse posts from {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: &'static str,
}

#[derive(Error, Debug)]
#[error("Failed to render {target:?} into {template_name:?} template")]
pub struct RenderError {
    pub target: String,
    pub template_name: String,
    #[source]
    pub source: handlebars::RenderError,
}

#[derive(Error, Debug)]
#[error("Failed to register {template_name:?} template")]
pub struct TemplateError {
    pub template_name: String,
    #[source]
    pub source: handlebars::TemplateError,
}
