use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::browser::SystemBrowser;
use crate::config::{AppConfig, ConfigOverrides};
use crate::controller::Controller;
use crate::github::GithubClient;
use crate::history::HistoryStore;
use crate::logging::init_logging;
use crate::models::{HistoryRow, RepositoryRecord};
use crate::tui::{format_timestamp, run_interactive};
use crate::utils::{format_path_with_tilde, sanitize_line, truncate_chars};

#[derive(Parser)]
#[command(name = "github-topics")]
#[command(version = "0.1.0")]
#[command(about = "Search GitHub repositories by topic and keep a history of the ones you open", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct GlobalOptions {
    /// History database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Base url of the GitHub REST API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log file (the terminal is reserved for the interface)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Start with the light theme
    #[arg(long, global = true)]
    pub light: bool,

    /// Hide icons on result cards
    #[arg(long, global = true)]
    pub no_icons: bool,
}

impl From<GlobalOptions> for ConfigOverrides {
    fn from(opts: GlobalOptions) -> Self {
        Self {
            database_path: opts.db,
            api_base_url: opts.api_url,
            log_path: opts.log_file,
            light_theme: opts.light,
            hide_icons: opts.no_icons,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser (default)
    Tui {
        /// Topics to start with
        topics: Vec<String>,
    },
    /// Fetch one page of repositories tagged with every topic
    Search {
        #[arg(required = true)]
        topics: Vec<String>,

        /// Result page, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit the local history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
    /// Show statistics about the history
    Stats,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List saved repositories, oldest first
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Forget a repository by url
    Remove { url: String },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.global.into())?;
    init_logging(&config.log_path)?;
    info!(db = %config.database_path.display(), api = %config.api_base_url, "starting");

    match cli.command {
        None => run_tui(&config, Vec::new()),
        Some(Commands::Tui { topics }) => run_tui(&config, topics),
        Some(Commands::Search { topics, page, json }) => run_search(&config, &topics, page, json),
        Some(Commands::History { action: HistoryCommand::List { json } }) => {
            list_history(&config, json)
        }
        Some(Commands::History { action: HistoryCommand::Remove { url } }) => {
            remove_history(&config, &url)
        }
        Some(Commands::Stats) => show_stats(&config),
    }
}

fn open_store(config: &AppConfig) -> Result<HistoryStore> {
    HistoryStore::open(&config.database_path).with_context(|| {
        format!("Failed to open history at {}", format_path_with_tilde(&config.database_path))
    })
}

fn build_controller(config: &AppConfig) -> Result<Controller> {
    let client = Arc::new(GithubClient::with_base_url(config.api_base_url.as_str()));
    let controller = Controller::new(client, open_store(config)?, Box::new(SystemBrowser))?;
    Ok(controller)
}

fn run_tui(config: &AppConfig, topics: Vec<String>) -> Result<()> {
    let mut controller = build_controller(config)?;
    for topic in &topics {
        controller.add_topic(topic);
    }
    run_interactive(controller, config.view)
}

fn run_search(config: &AppConfig, topics: &[String], page: u32, json: bool) -> Result<()> {
    let mut controller = build_controller(config)?;
    for topic in topics {
        controller.add_topic(topic);
    }

    controller.search(page)?;
    if controller.nothing_to_search() {
        bail!("Please enter topics to search");
    }

    let results = controller.results();
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("Page {} for {}: {} repositories", page, topics.join(", "), results.len());
    for record in results {
        print_record(record, controller.is_in_history(&record.url));
    }
    Ok(())
}

fn print_record(record: &RepositoryRecord, saved: bool) {
    let marker = if saved { "★" } else { " " };
    println!();
    println!(
        "{} {}  ({} stars, {}, updated {})",
        marker,
        sanitize_line(&record.full_name),
        record.star_count,
        record.primary_language.as_deref().map(sanitize_line).unwrap_or_else(|| "-".into()),
        format_timestamp(&record.updated_at),
    );
    println!("  {}", truncate_chars(&sanitize_line(&record.description), 120));
    if !record.topic_tags.is_empty() {
        let tags: Vec<String> = record.topic_tags.iter().map(|t| sanitize_line(t)).collect();
        println!("  topics: {}", tags.join(", "));
    }
    println!("  {}", sanitize_line(&record.url));
}

fn list_history(config: &AppConfig, json: bool) -> Result<()> {
    let rows = open_store(config)?.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("History is empty");
        return Ok(());
    }
    for HistoryRow { id, record } in &rows {
        println!(
            "{:>4}  {}  {}",
            id,
            sanitize_line(&record.full_name),
            sanitize_line(&record.url)
        );
    }
    Ok(())
}

fn remove_history(config: &AppConfig, url: &str) -> Result<()> {
    if open_store(config)?.remove(url)? {
        println!("Removed {}", sanitize_line(url));
    } else {
        println!("Not in history: {}", sanitize_line(url));
    }
    Ok(())
}

fn show_stats(config: &AppConfig) -> Result<()> {
    let rows = open_store(config)?.list_all()?;

    let mut languages: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &rows {
        let language = row.record.primary_language.as_deref().unwrap_or("unknown");
        *languages.entry(language).or_default() += 1;
    }

    println!("GitHub Topics History Statistics");
    println!("================================");
    println!("Saved repositories: {}", rows.len());
    println!("History database: {}", format_path_with_tilde(&config.database_path));

    if let Some(top) = rows.iter().max_by_key(|r| r.record.star_count) {
        println!(
            "Most starred: {} ({} stars)",
            sanitize_line(&top.record.full_name),
            top.record.star_count
        );
    }
    if let Some(newest) = rows.iter().max_by_key(|r| r.record.updated_at) {
        println!(
            "Most recently updated: {} ({})",
            sanitize_line(&newest.record.full_name),
            newest.record.updated_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    if !languages.is_empty() {
        println!("Languages:");
        let mut by_count: Vec<_> = languages.into_iter().collect();
        by_count.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        for (language, count) in by_count {
            println!("  {}: {}", sanitize_line(language), count);
        }
    }

    Ok(())
}
