//! gallery-tui - Terminal storefront for the Gallery marketplace
//!
//! Loads the artwork catalog once at startup and shows it as a grid of cards.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use gallery_tui::{
    app::{event::EventHandler, Action, AppState, UiConfig},
    services::CatalogService,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui, StorefrontPage,
};
use libgallery::{
    config::resolve_data_path,
    logging::{config_from_env, LogFormat, LogTarget},
    Config, StaticCatalog,
};

#[derive(Parser, Debug)]
#[command(name = "gallery-tui")]
#[command(version)]
#[command(about = "Browse the Gallery digital-art storefront in your terminal")]
#[command(long_about = "\
gallery-tui - Browse the Gallery digital-art storefront in your terminal

KEYS:
    ←/→ Tab       Move between artworks
    ↑/↓           Move between rows
    Enter         Show artwork details
    Esc           Close details / help
    F1            Toggle help
    q, Ctrl+C     Quit

CONFIGURATION:
    Configuration file: ~/.config/gallery/config.toml (or $GALLERY_CONFIG)

    [storefront]
    bootstrap_delay_ms = 500
    description_max_chars = 40

    [locale]
    currency_symbol = \"¥\"
    thousands_separator = \",\"

LOGGING:
    Logs go to ~/.local/share/gallery/gallery-tui.log unless --log-file is given.
")]
struct Cli {
    /// Configuration file (overrides GALLERY_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Simulated catalog latency in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH", env = "GALLERY_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log format: text, json, pretty
    #[arg(long, default_value = "text", env = "GALLERY_LOG_FORMAT")]
    log_format: LogFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let delay = Duration::from_millis(
        cli.delay_ms
            .unwrap_or(config.storefront.bootstrap_delay_ms),
    );

    let services = CatalogService::new(Arc::new(StaticCatalog::new()))?;
    tracing::info!(source = services.source_name(), "gallery-tui starting");

    let state = AppState::with_config(UiConfig::from_config(&config));
    let mut page = StorefrontPage::new(state, services, delay);

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &mut page);

    page.teardown();
    restore_terminal(terminal)?;

    tracing::info!("gallery-tui stopped");
    result.map_err(Into::into)
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => resolve_data_path()?.join("gallery-tui.log"),
    };

    // Level from the environment, everything else from the command line
    let mut logging = config_from_env().with_target(LogTarget::File(path));
    logging.format = cli.log_format;
    logging.verbose = cli.verbose;

    logging.init().context("Failed to initialize logging")
}

fn run_app(terminal: &mut Tui, page: &mut StorefrontPage) -> gallery_tui::Result<()> {
    let event_handler = EventHandler::new(page.state().config.tick_rate_ms);

    let size = terminal.size()?;
    page.dispatch(Action::Resize(size.width, size.height));

    page.activate();

    loop {
        page.pump();

        terminal.draw(|frame| ui::render(frame, page.state()))?;

        let event = event_handler.next()?;
        page.dispatch(event.into());

        if page.state().should_quit {
            break;
        }
    }

    Ok(())
}
