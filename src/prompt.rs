use crate::dates::today;
use crate::derive::{derive_category, derive_slug};
use crate::errors::ValidationError;
use crate::types::Post;
use color_eyre::eyre::Result;
use inquire::Text;

/// Line that ends the external links prompt.
pub const LINKS_TERMINATOR: &str = "END";

pub const DEFAULT_TOPIC: &str = "Maps";

/// A source of answers for the new post questions.
pub trait Prompter {
    /// Asks one question and returns the trimmed answer, or `default` when
    /// the answer is blank.
    fn ask(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Shows a line of guidance between questions.
    fn note(&mut self, _message: &str) {}
}

pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut text = Text::new(message);
        if let Some(default) = default {
            text = text.with_default(default);
        }
        let answer = text.prompt()?.trim().to_owned();
        Ok(match default {
            Some(default) if answer.is_empty() => default.to_owned(),
            _ => answer,
        })
    }

    fn note(&mut self, message: &str) {
        println!("{message}");
    }
}

fn ask_required<P: Prompter>(
    prompter: &mut P,
    message: &str,
    field: &'static str,
) -> Result<String> {
    let answer = prompter.ask(message, None)?;
    if answer.is_empty() {
        return Err(ValidationError { field }.into());
    }
    Ok(answer)
}

/// Reads links one per line until [`LINKS_TERMINATOR`]. Blank lines are
/// ignored. No links at all is `None`, stored as `null`.
pub fn ask_links<P: Prompter>(prompter: &mut P) -> Result<Option<Vec<String>>> {
    prompter.note(&format!(
        "Enter each external link on a new line. Type '{LINKS_TERMINATOR}' when finished:"
    ));
    let mut links = Vec::new();
    loop {
        let line = prompter.ask(">", None)?;
        if line == LINKS_TERMINATOR {
            return Ok(Some(links).filter(|links| !links.is_empty()));
        }
        if !line.is_empty() {
            links.push(line);
        }
    }
}

/// Walks through every field of a new post. Blank title, description or
/// image URL aborts with a [`ValidationError`].
pub fn collect_post<P: Prompter>(prompter: &mut P) -> Result<Post> {
    let title = ask_required(prompter, "Post title", "title")?;
    let description = ask_required(prompter, "Description", "description")?;
    let topic = prompter.ask("Topic (Maps/Games/Posts)", Some(DEFAULT_TOPIC))?;
    let date = prompter.ask("Date", Some(&today()))?;
    let image_url = ask_required(prompter, "Image URL", "image URL")?;
    let external_links = ask_links(prompter)?;

    Ok(Post {
        slug: derive_slug(&title),
        category: derive_category(&topic),
        title,
        description,
        topic,
        date,
        image_url,
        external_links,
        content: String::new(),
    })
}
