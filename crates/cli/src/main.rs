use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use landlord_types::Route;
use landlord_util::nav_state::NavStateStore;
use landlord_util::session_state::{InMemorySessionStore, JsonSessionStore, SessionStore};
use tracing::warn;

#[derive(Debug, Parser)]
#[command(name = "landlord", about = "Property-management admin console for the terminal", version)]
struct Cli {
    /// Page to open; its navigation link starts out marked active
    /// (e.g. "leases", "payments").
    #[arg(long, value_name = "SLUG")]
    page: Option<String>,

    /// Path to a JSON metrics feed for the dashboard charts.
    #[arg(long, value_name = "FILE")]
    metrics: Option<PathBuf>,

    /// Enable verbose diagnostics.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let active_page = cli.page.as_deref().and_then(|slug| {
        let route = Route::from_slug(slug);
        if route.is_none() {
            warn!(page = slug, "Unknown page slug; opening the dashboard instead");
        }
        route
    });

    // Stores degrade to in-memory fallbacks when the config/cache
    // directories are unusable; the console itself never fails over this.
    let nav_store = NavStateStore::with_defaults().unwrap_or_else(|error| {
        warn!(error = %error, "Nav state store unavailable; sidebar state will not persist");
        NavStateStore::ephemeral()
    });
    let session: Box<dyn SessionStore> = match JsonSessionStore::with_defaults() {
        Ok(store) => Box::new(store),
        Err(error) => {
            warn!(error = %error, "Session store unavailable; session state will not persist");
            Box::new(InMemorySessionStore::new())
        }
    };

    landlord_tui::run(landlord_tui::ConsoleOptions {
        active_page,
        metrics_path: cli.metrics,
        nav_store,
        session,
        debug_enabled: cli.debug,
    })
    .await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
