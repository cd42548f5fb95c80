use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use adzdiag::catalog::{self, CategoryFilter};
use adzdiag::cli::Cli;
use adzdiag::cli::commands::Commands;
use adzdiag::config::Config;
use adzdiag::docs::{self, SectionBody};
use adzdiag::error::AdzError;
use adzdiag::filter::{self, FilterState};
use adzdiag::launch::{self, SystemLauncher};
use adzdiag::selection::Selection;
use adzdiag::tui::{self, App, TuiRunner};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("adzdiag")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("adzdiag.log");

    // Setup env_logger with file output so the TUI screen stays clean
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => {
            // Default: launch the catalog TUI
            run_tui(config).await
        }
        Some(Commands::List { category, query, json }) => {
            handle_list_command(category.as_deref(), query.as_deref(), *json)
        }
        Some(Commands::Show { id }) => handle_show_command(id, config),
        Some(Commands::Docs { id }) => handle_docs_command(id),
        Some(Commands::Open { id }) => handle_open_command(id, config),
        Some(Commands::Categories) => handle_categories_command(),
    }
}

async fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");

    let terminal = tui::init_terminal()?;
    let app = App::new(config.platform.base_url.clone(), Arc::new(SystemLauncher::new()));
    let mut runner = TuiRunner::new(terminal, app, config.tui.tick_rate_ms);

    let result = runner.run().await;
    tui::restore_terminal()?;
    result
}

fn handle_list_command(category: Option<&str>, query: Option<&str>, json: bool) -> Result<()> {
    let category = match category {
        Some(name) => name.parse::<CategoryFilter>()?,
        None => CategoryFilter::All,
    };
    let state = FilterState::new(query.unwrap_or_default(), category);
    let tools = filter::apply_catalog(&state);
    info!("Listing {} tools - category: {}, query: {:?}", tools.len(), category, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    for tool in &tools {
        println!(
            "{} {}  {}",
            format!("[{}]", tool.category).green(),
            tool.name.bold(),
            tool.summary.dimmed()
        );
    }
    println!("{}", format!("{} of {} tools", tools.len(), catalog::all().len()).dimmed());
    Ok(())
}

fn handle_show_command(id: &str, config: &Config) -> Result<()> {
    let tool = catalog::by_id(id).ok_or_else(|| AdzError::ToolNotFound(id.to_string()))?;

    println!("{}", tool.name.bold());
    println!("{}", format!("Category: {}", tool.category).green());
    println!();
    println!("{}", tool.summary);
    println!("{}", tool.detail.dimmed());
    println!();
    println!(
        "{} {}",
        "Platform page:".dimmed(),
        launch::tool_url(&config.platform.base_url, tool.id)
    );
    Ok(())
}

fn handle_docs_command(id: &str) -> Result<()> {
    let tool = catalog::by_id(id).ok_or_else(|| AdzError::ToolNotFound(id.to_string()))?;

    println!("{}", format!("[{}]", tool.category).green());
    println!("{}", tool.name.bold());
    println!("{}", tool.detail);

    for section in docs::sections(tool) {
        println!();
        println!("{}", section.heading.green().bold());
        match section.body {
            SectionBody::Paragraph(text) => println!("{}", text),
            SectionBody::Bullets(bullets) => {
                for bullet in bullets {
                    println!("  • {}", bullet);
                }
            }
            SectionBody::Steps(steps) => {
                for (i, step) in steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, step.title.bold());
                    println!("     {}", step.body);
                }
            }
        }
    }
    Ok(())
}

fn handle_open_command(id: &str, config: &Config) -> Result<()> {
    // Validate the slug before dispatching; the open itself is fire-and-forget
    let tool = catalog::by_id(id).ok_or_else(|| AdzError::ToolNotFound(id.to_string()))?;

    // Drive the same state machine the TUI uses: summary -> external -> idle
    let mut selection = Selection::Summary(tool);
    let launcher = SystemLauncher::new();
    selection.open_external(&launcher, &config.platform.base_url);

    println!(
        "{} {}",
        "Opening:".green(),
        launch::tool_url(&config.platform.base_url, id)
    );
    Ok(())
}

fn handle_categories_command() -> Result<()> {
    for chip in CategoryFilter::CHIPS {
        match chip {
            CategoryFilter::All => println!("{} {}", chip.label().bold(), "(wildcard)".dimmed()),
            CategoryFilter::Only(category) => {
                let count = catalog::all().iter().filter(|t| t.category == category).count();
                println!("{} {}", chip.label().bold(), format!("({} tools)", count).dimmed());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
