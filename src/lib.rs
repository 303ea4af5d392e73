pub mod assets;
pub mod config;
pub mod console;
pub mod dates;
pub mod derive;
pub mod errors;
pub mod handlers;
pub mod markdown;
pub mod prompt;
pub mod render;
pub mod store;
pub mod templates;
pub mod types;
pub mod utils;
pub mod view;
