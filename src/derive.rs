use strum_macros::Display;

/// The site sections a post can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Maps,
    Games,
    Posts,
}

impl Category {
    /// Maps a free-text topic onto a category. Unknown topics fall back to
    /// [`Category::Maps`].
    pub fn from_topic(topic: &str) -> Category {
        match topic.to_lowercase().as_str() {
            "maps" | "map" => Category::Maps,
            "games" | "game" => Category::Games,
            "posts" | "post" => Category::Posts,
            _ => Category::default(),
        }
    }
}

pub fn derive_category(topic: &str) -> String {
    Category::from_topic(topic).to_string()
}

/// Lowercases `title`, turns spaces into hyphens and drops `(`, `)`, `'` and
/// `.`. Everything else is kept as is.
pub fn derive_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '(' | ')' | '\'' | '.' => None,
            c => Some(c),
        })
        .collect()
}
