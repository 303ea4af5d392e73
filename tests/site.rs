use color_eyre::eyre::{eyre, Result};
use postforge::config::{CategoryMode, Config};
use postforge::console::ConsoleHandle;
use postforge::errors::{ParseError, ValidationError};
use postforge::handlers::{run_add, run_build, Source};
use postforge::markdown::read_posts_dir;
use postforge::prompt::{collect_post, Prompter};
use postforge::store::{load_posts, load_posts_or_empty, prepend_post, save_posts};
use postforge::types::Post;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const POSTS_JSON: &str = r#"[
  {
    "title": "Castle Siege",
    "description": "A fortress map.",
    "topic": "Maps",
    "date": "Jan 2, 2024",
    "image_url": "https://img.example/castle.png",
    "external_links": [
      "https://workshop.example/castle"
    ],
    "slug": "castle-siege",
    "category": "maps",
    "content": ""
  },
  {
    "title": "Tiny Racer",
    "description": "A small racing game.",
    "topic": "Games",
    "date": "5 Mar, 2024",
    "image_url": "https://img.example/racer.png",
    "external_links": [],
    "slug": "tiny-racer",
    "category": "games",
    "content": ""
  }
]"#;

const NULL_LINKS_JSON: &str = r#"[
  {
    "title": "Arena",
    "description": "A small arena.",
    "topic": "Games",
    "date": "Apr 1, 2024",
    "image_url": "https://img.example/arena.png",
    "external_links": null,
    "slug": "arena",
    "category": "games",
    "content": ""
  }
]"#;

const CASTLE_MD: &str = "# Castle Siege\n- Description:\n    - A fortress map.\n- Topic: Maps\n- Date: Jan 2, 2024\n- Image for the post: https://img.example/castle.png\n- External links:\n    - https://workshop.example/castle\n";

const RACER_MD: &str = "# Tiny Racer\n- Description:\n    - A small racing game.\n- Topic: Games\n- Date: 5 Mar, 2024\n- Image for the post: https://img.example/racer.png\n";

/// Answers questions from a fixed script, falling back to the default on a
/// blank answer like the terminal prompt does.
struct ScriptedPrompter {
    answers: VecDeque<&'static str>,
}

impl ScriptedPrompter {
    fn new(answers: &[&'static str]) -> ScriptedPrompter {
        ScriptedPrompter {
            answers: answers.iter().copied().collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _message: &str, default: Option<&str>) -> Result<String> {
        let answer = self.answers.pop_front().unwrap_or("END").trim().to_owned();
        Ok(match default {
            Some(default) if answer.is_empty() => default.to_owned(),
            _ => answer,
        })
    }
}

fn write_markdown_dir(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("castle.md"), CASTLE_MD).unwrap();
    fs::write(dir.join("racer.md"), RACER_MD).unwrap();
    fs::write(dir.join("template.md"), "# Template\n- Date: Dec 31, 2099\n").unwrap();
    fs::write(dir.join("notes.txt"), "# Not a post\n").unwrap();
    fs::create_dir(dir.join("drafts.md")).unwrap();
    fs::write(dir.join("broken.md"), [0xff, 0xfe, 0xfd]).unwrap();
}

fn config_for(tmp: &TempDir) -> Config {
    Config {
        output_dir: tmp.path().join("site"),
        markdown_dir: tmp.path().join("content"),
        posts_file: tmp.path().join("posts.json"),
        ..Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json_store_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posts.json");
        fs::write(&path, POSTS_JSON).unwrap();

        let posts = load_posts(&path).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].links(), ["https://workshop.example/castle"]);
        assert_eq!(posts[1].external_links, Some(Vec::new()));

        let out = tmp.path().join("out.json");
        save_posts(&posts, &out).await.unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), POSTS_JSON);
    }

    #[tokio::test]
    async fn json_store_keeps_null_links() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posts.json");
        fs::write(&path, NULL_LINKS_JSON).unwrap();

        let posts = load_posts(&path).await.unwrap();
        assert_eq!(posts[0].external_links, None);
        assert!(posts[0].links().is_empty());

        let out = tmp.path().join("out.json");
        save_posts(&posts, &out).await.unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), NULL_LINKS_JSON);
    }

    #[tokio::test]
    async fn json_store_accepts_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posts.json");
        fs::write(
            &path,
            r#"[{"title": "T", "description": "D", "external_links": null}]"#,
        )
        .unwrap();

        let posts = load_posts(&path).await.unwrap();
        assert_eq!(posts[0].external_links, None);
        assert_eq!(posts[0].date, "");
    }

    #[tokio::test]
    async fn json_store_rejects_malformed_input() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posts.json");

        fs::write(&path, r#"[{"title": "No description"}]"#).unwrap();
        let err = load_posts(&path).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::Json { .. })
        ));

        fs::write(&path, "{not json").unwrap();
        assert!(load_posts(&path).await.is_err());
    }

    #[tokio::test]
    async fn missing_store_is_empty_only_for_add() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.json");
        assert!(load_posts_or_empty(&path).await.unwrap().is_empty());
        assert!(load_posts(&path).await.is_err());
    }

    #[test]
    fn prepend_post_puts_new_post_first() {
        let old = vec![Post {
            title: "Old".to_owned(),
            ..Post::default()
        }];
        let new = Post {
            title: "New".to_owned(),
            ..Post::default()
        };
        let posts = prepend_post(old, new);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[tokio::test]
    async fn read_posts_dir_skips_non_posts() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("content");
        write_markdown_dir(&dir);

        let posts = read_posts_dir(&dir, CategoryMode::Fixed).await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Castle Siege", "Tiny Racer"]);
        assert!(posts.iter().all(|p| p.category == "maps"));
    }

    #[tokio::test]
    async fn read_posts_dir_skips_unreadable_post() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("content");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a-broken.md"), [0xff, 0xfe, 0xfd]).unwrap();
        fs::write(dir.join("castle.md"), CASTLE_MD).unwrap();

        let posts = read_posts_dir(&dir, CategoryMode::Fixed).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Castle Siege");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn read_posts_dir_follows_symlinks() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("content");
        fs::create_dir(&dir).unwrap();
        let target = tmp.path().join("castle-source.md");
        fs::write(&target, CASTLE_MD).unwrap();
        std::os::unix::fs::symlink(&target, dir.join("castle.md")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone.md"), dir.join("dangling.md")).unwrap();

        let posts = read_posts_dir(&dir, CategoryMode::Fixed).await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Castle Siege"]);
    }

    #[tokio::test]
    async fn read_posts_dir_fails_on_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nope");
        assert!(read_posts_dir(&dir, CategoryMode::Fixed).await.is_err());
    }

    #[tokio::test]
    async fn build_from_markdown_works() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        write_markdown_dir(&config.markdown_dir);

        let mut console = ConsoleHandle::plain();
        let source = Source::Markdown(config.markdown_dir.clone());
        let summary = run_build(&mut console, &config, &source).await.unwrap();
        assert_eq!(summary.featured_title, "Tiny Racer");
        assert_eq!(summary.recent_posts, 1);
        assert_eq!(summary.total_posts, 2);
        assert_eq!(summary.skipped_posts, 0);

        let site = &config.output_dir;
        let castle = fs::read_to_string(site.join("maps/castle-siege.html")).unwrap();
        assert!(castle.contains("<h1>Castle Siege</h1>"));
        assert!(castle.contains("href=\"https://workshop.example/castle\""));
        let racer = fs::read_to_string(site.join("maps/tiny-racer.html")).unwrap();
        assert!(!racer.contains("cta-section"));

        let index = fs::read_to_string(site.join("index.html")).unwrap();
        assert!(index.contains("<h2>Tiny Racer</h2>"));
        assert!(site.join("posts/index.html").is_file());
        assert!(site.join("components/theme.js").is_file());
        assert!(!site.join("maps/template.html").exists());
        assert!(console
            .messages()
            .contains(&"- Featured post: Tiny Racer".to_owned()));
    }

    #[tokio::test]
    async fn build_from_json_files_posts_by_category() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::write(&config.posts_file, POSTS_JSON).unwrap();

        let mut console = ConsoleHandle::plain();
        let source = Source::Json(config.posts_file.clone());
        let summary = run_build(&mut console, &config, &source).await.unwrap();
        assert_eq!(summary.total_posts, 2);

        let site = &config.output_dir;
        assert!(site.join("maps/castle-siege.html").is_file());
        assert!(site.join("games/tiny-racer.html").is_file());
        let listing = fs::read_to_string(site.join("posts/index.html")).unwrap();
        let racer = listing.find("Tiny Racer").unwrap();
        let castle = listing.find("Castle Siege").unwrap();
        assert!(racer < castle);
    }

    #[tokio::test]
    async fn build_skips_post_that_cannot_be_written() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::write(&config.posts_file, POSTS_JSON).unwrap();
        fs::create_dir_all(&config.output_dir).unwrap();
        fs::write(config.output_dir.join("games"), "in the way").unwrap();

        let mut console = ConsoleHandle::plain();
        let source = Source::Json(config.posts_file.clone());
        let summary = run_build(&mut console, &config, &source).await.unwrap();
        assert_eq!(summary.skipped_posts, 1);
        assert!(config.output_dir.join("maps/castle-siege.html").is_file());
        assert!(config.output_dir.join("index.html").is_file());
    }

    #[tokio::test]
    async fn build_fails_on_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::write(&config.posts_file, "[{").unwrap();

        let mut console = ConsoleHandle::plain();
        let source = Source::Json(config.posts_file.clone());
        assert!(run_build(&mut console, &config, &source).await.is_err());
        assert!(!config.output_dir.join("index.html").exists());
    }

    #[tokio::test]
    async fn build_uses_template_overrides() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_for(&tmp);
        fs::write(&config.posts_file, POSTS_JSON).unwrap();
        let templates_dir = tmp.path().join("templates");
        fs::create_dir(&templates_dir).unwrap();
        fs::write(templates_dir.join("post.hbs"), "CUSTOM {{post.title}}").unwrap();
        config.templates_dir = Some(templates_dir);

        let mut console = ConsoleHandle::plain();
        let source = Source::Json(config.posts_file.clone());
        run_build(&mut console, &config, &source).await.unwrap();

        let castle = fs::read_to_string(config.output_dir.join("maps/castle-siege.html")).unwrap();
        assert_eq!(castle, "CUSTOM Castle Siege");
        let index = fs::read_to_string(config.output_dir.join("index.html")).unwrap();
        assert!(index.contains("Latest Post"));
    }

    #[test]
    fn collect_post_uses_defaults_and_links() {
        let mut prompter = ScriptedPrompter::new(&[
            "Winter Valley (Remake)",
            "A snowy valley.",
            "",
            "Feb 3, 2024",
            "https://img.example/valley.png",
            "https://workshop.example/valley",
            "",
            "https://github.example/valley",
            "END",
        ]);
        let post = collect_post(&mut prompter).unwrap();
        assert_eq!(post.title, "Winter Valley (Remake)");
        assert_eq!(post.slug, "winter-valley-remake");
        assert_eq!(post.topic, "Maps");
        assert_eq!(post.category, "maps");
        assert_eq!(post.date, "Feb 3, 2024");
        assert_eq!(
            post.links(),
            ["https://workshop.example/valley", "https://github.example/valley"]
        );
        assert_eq!(post.content, "");
    }

    #[test]
    fn collect_post_requires_fields() {
        let mut prompter = ScriptedPrompter::new(&[""]);
        let err = collect_post(&mut prompter).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError { field: "title" })
        );

        let mut prompter = ScriptedPrompter::new(&["Title", "Description", "Games", "", ""]);
        let err = collect_post(&mut prompter).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError { field: "image URL" })
        );
    }

    #[tokio::test]
    async fn add_prepends_to_store() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);
        fs::write(&config.posts_file, POSTS_JSON).unwrap();

        let mut console = ConsoleHandle::plain();
        let mut prompter = ScriptedPrompter::new(&[
            "Arena",
            "A small arena.",
            "game",
            "Apr 1, 2024",
            "https://img.example/arena.png",
            "END",
        ]);
        let post = run_add(&mut console, &mut prompter, &config.posts_file)
            .await
            .unwrap();
        assert_eq!(post.category, "games");

        let posts = load_posts(&config.posts_file).await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Arena", "Castle Siege", "Tiny Racer"]);
    }

    #[tokio::test]
    async fn add_creates_missing_store_and_leaves_it_on_error() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp);

        let mut console = ConsoleHandle::plain();
        let mut prompter = ScriptedPrompter::new(&["", ""]);
        assert!(run_add(&mut console, &mut prompter, &config.posts_file)
            .await
            .is_err());
        assert!(!config.posts_file.exists());

        let mut prompter = ScriptedPrompter::new(&[
            "First",
            "The first post.",
            "",
            "",
            "https://img.example/first.png",
            "END",
        ]);
        run_add(&mut console, &mut prompter, &config.posts_file)
            .await
            .unwrap();
        let posts = load_posts(&config.posts_file).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].external_links, None);
        assert!(fs::read_to_string(&config.posts_file)
            .unwrap()
            .contains("\"external_links\": null"));
    }

    #[tokio::test]
    async fn config_load_requires_named_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");
        assert!(Config::load(Some(&path)).await.is_err());

        fs::write(&path, "output_dir = \"public\"\n").unwrap();
        let config = Config::load(Some(&path)).await.unwrap();
        assert_eq!(config.output_dir, Path::new("public"));
    }

    #[test]
    fn log_report_uses_given_headline() {
        let mut console = ConsoleHandle::plain();
        console
            .log_report("Adding post failed", eyre!("title is required"))
            .unwrap();
        console
            .log_report("Build failed", eyre!("no posts"))
            .unwrap();
        assert_eq!(console.failures(), ["Adding post failed", "Build failed"]);
    }
}
