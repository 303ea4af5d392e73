use clap::Parser;
use color_eyre::eyre::Result;
use postforge::config::Config;
use postforge::console::ConsoleHandle;
use postforge::handlers::{run_add, run_build, Source};
use postforge::prompt::InquirePrompter;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(clap::Parser)]
#[clap(version, about)]
struct Args {
    /// config file, defaults to ./postforge.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate the site from markdown posts, or from a JSON store with --json
    Build {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        markdown_dir: Option<PathBuf>,
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Interactively add a post to the front of the JSON store
    Add {
        #[arg(long)]
        posts_file: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("postforge=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = match Config::load(args.config.as_deref()).await {
        Ok(config) => config,
        Err(report) => {
            ConsoleHandle::plain().log_report("Loading config failed", report)?;
            std::process::exit(1);
        }
    };

    let (mut console, headline, result) = match args.command {
        Command::Build {
            json,
            markdown_dir,
            output_dir,
        } => {
            if let Some(dir) = markdown_dir {
                config.markdown_dir = dir;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            let source = match json {
                Some(path) => Source::Json(path),
                None => Source::Markdown(config.markdown_dir.clone()),
            };
            let mut console = ConsoleHandle::new();
            let result = run_build(&mut console, &config, &source).await.map(|_| ());
            (console, "Build failed", result)
        }
        Command::Add { posts_file } => {
            if let Some(path) = posts_file {
                config.posts_file = path;
            }
            let mut console = ConsoleHandle::plain();
            let result = run_add(&mut console, &mut InquirePrompter, &config.posts_file)
                .await
                .map(|_| ());
            (console, "Adding post failed", result)
        }
    };

    if let Err(report) = result {
        console.log_report(headline, report)?;
        std::process::exit(1);
    }
    Ok(())
}
