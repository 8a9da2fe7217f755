use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use version_scrape::config::{LOG_ENV_VAR, ScrapeConfig, config_path};
use version_scrape::release::feed::{ReleaseSummary, analyse_entry, analyse_feed, load_feed};
use version_scrape::release::{Release, extract};

#[derive(Parser)]
#[command(name = "version-scrape")]
#[command(version, about = "Extract release versions from free-form text")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a release from each given string
    Extract {
        #[arg(required = true)]
        text: Vec<String>,
        /// Program name to strip from the start of each string
        #[arg(long)]
        name: Option<String>,
    },
    /// Analyse a JSON release listing stored in a local file
    Feed {
        file: PathBuf,
        /// Program name to strip from titles and tags
        #[arg(long)]
        name: Option<String>,
        /// Only print the latest stable and pre-release
        #[arg(long)]
        latest: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(config_path);
    let config = ScrapeConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    match cli.command {
        Command::Extract { text, name } => {
            let name = name.or(config.program_name);
            for input in &text {
                match extract(input, name.as_deref()) {
                    Ok(release) => println!("{}\t{}", release.channel(), release.text()),
                    Err(e) => println!("---\t{} ({})", input, e),
                }
            }
        }
        Command::Feed { file, name, latest } => {
            let name = name.or(config.program_name);
            let entries = load_feed(&file)
                .with_context(|| format!("Failed to load feed from {}", file.display()))?;

            if latest {
                let summary = ReleaseSummary::from_releases(analyse_feed(&entries, name.as_deref()));
                print_latest("stable", summary.latest_stable());
                if config.include_prereleases {
                    print_latest("prerelease", summary.latest_prerelease());
                }
                return Ok(());
            }

            for entry in &entries {
                let release = analyse_entry(entry, name.as_deref()).ok();
                if !config.include_prereleases && release.as_ref().is_some_and(|r| !r.is_stable()) {
                    continue;
                }
                println!(
                    "{:10} | {:10} | {:15} | {}",
                    release.as_ref().map_or("---", Release::text),
                    release.as_ref().map_or("---", |r| r.channel().as_str()),
                    entry.tag_name,
                    entry.name.as_deref().unwrap_or_default(),
                );
            }
        }
    }

    Ok(())
}

fn print_latest(label: &str, release: Option<&Release>) {
    match release {
        Some(release) => match release.date() {
            Some(date) => println!("{label}: {} ({})", release, date.format("%Y-%m-%d")),
            None => println!("{label}: {release}"),
        },
        None => println!("{label}: ---"),
    }
}
