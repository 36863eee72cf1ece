use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use mimer::clock::{
    ClockAction, ClockMiddleware, ClockReducer, ClockState, QuoteCatalog, TimeOfDay,
};
use mimer::config::{ClockConfig, Config};
use mimer::logging::init_tracing;
use mimer::{MiddlewareExt, Store};

/// Print a literature quote for the time of day.
#[derive(Debug, Parser)]
#[command(name = "mimer", version)]
struct Cli {
    /// Config file (default: ~/.config/mimer/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON quote catalog, overrides `clock.catalog`.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Time to look up as HH:MM (default: now).
    #[arg(long)]
    at: Option<TimeOfDay>,

    /// Show the quote with this id, if it exists.
    #[arg(long)]
    restore: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(catalog) = cli.catalog.clone() {
        config.clock.catalog = Some(catalog);
    }

    init_tracing(&config.logging);

    let catalog = load_catalog(&config.clock);
    let store = Store::new(
        ClockState::default(),
        ClockReducer,
        vec![ClockMiddleware::new(Arc::new(catalog)).shared()],
    );

    store.send(initial_action(&cli)).await;

    println!("{}", store.read(|state| state.quote.to_string()));
    Ok(())
}

fn initial_action(cli: &Cli) -> ClockAction {
    let at = cli.at.unwrap_or_else(TimeOfDay::now);
    match &cli.restore {
        Some(id) => ClockAction::Restore { id: id.clone(), at },
        None => ClockAction::Refresh { at },
    }
}

fn load_catalog(config: &ClockConfig) -> QuoteCatalog {
    let Some(path) = &config.catalog else {
        tracing::info!("No quote catalog configured");
        return QuoteCatalog::default();
    };

    QuoteCatalog::load_from(path).unwrap_or_else(|err| {
        tracing::warn!("{}", err);
        QuoteCatalog::default()
    })
}
