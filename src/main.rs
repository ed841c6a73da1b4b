// User Desk
// TUI application for managing users held by an external user service

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use user_desk::config_validation::{load_and_validate_config, validate_config};
use user_desk::logging::init_logging;
use user_desk::ui::run_app;
use user_desk::{App, Dispatcher, HttpUserGateway, InMemoryGateway, Route, UserGateway};

#[derive(Parser, Debug)]
#[command(name = "user-desk", about = "Manage users of a user service from the terminal")]
struct Cli {
    /// Config file (defaults to ./user-desk.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// User service base URL, overrides the config file
    #[arg(long, env = "USER_DESK_BASE_URL")]
    base_url: Option<String>,

    /// Use an in-memory user store instead of the user service
    #[arg(long)]
    demo: bool,

    /// Log file, overrides the config file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Route to open at startup
    #[arg(long, default_value = "/")]
    start: String,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration from YAML file
    let cwd = std::env::current_dir()?;
    let mut config = load_and_validate_config(cli.config.as_deref(), &cwd)?;
    if let Some(base_url) = cli.base_url {
        config.gateway.base_url = base_url;
        validate_config(&config)?;
    }

    let log_file = cli.log_file.unwrap_or_else(|| config.logging.file.clone());
    init_logging(&log_file, &config.logging.level)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let gateway: Arc<dyn UserGateway> = if cli.demo {
        info!("using in-memory user store");
        Arc::new(InMemoryGateway::demo())
    } else {
        info!(base_url = %config.gateway.base_url, "using user service");
        Arc::new(HttpUserGateway::new(&config.gateway.base_url, config.gateway.timeout())?)
    };
    let (dispatcher, mut outcomes) = Dispatcher::new(gateway, runtime.handle().clone());

    let mouse_enabled = config.ui.mouse_enabled;
    let mut app = App::new(config, Route::parse(&cli.start));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &dispatcher, &mut outcomes);

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("shutting down");
    result
}
