//! Entry point for the todolist application.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todolist_db::Database;
use todolist_tui::config::{resolve_db_path, resolve_log_path};
use todolist_tui::{App, TuiResult};

/// todolist - a terminal to-do list
#[derive(Parser)]
#[command(name = "todolist")]
#[command(version)]
#[command(about = "A terminal to-do list", long_about = None)]
struct Args {
    /// Path to the database file (can also be set via TODOLIST_DB_PATH env var)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Path to the log file (defaults to todolist.log next to the database)
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Initialize file logging, filtered by RUST_LOG
///
/// The terminal belongs to the UI, so events go to a file instead of stderr.
/// Examples:
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=todolist_db=trace` - trace the store only
fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run_with_args(args).await {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Resolve configuration, open the store, and run the screen.
async fn run_with_args(args: Args) -> TuiResult<()> {
    let db_path = resolve_db_path(args.db)?;
    let log_path = resolve_log_path(args.log, &db_path);

    if let Err(e) = init_logging(&log_path) {
        eprintln!("warning: logging disabled ({}): {}", log_path.display(), e);
    }

    let db = Database::connect(&db_path).await?;
    info!("Using database at {}", db.path().display());

    let mut app = App::mount(db).await?;
    app.run().await
}
