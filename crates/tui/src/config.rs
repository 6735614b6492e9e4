//! Startup configuration.
//!
//! Resolves where the database and the log file live.

use std::path::{Path, PathBuf};

use todolist_db::{Database, DbResult};

/// Environment variable name for the database path
pub const DB_PATH_ENV: &str = "TODOLIST_DB_PATH";

/// Log file name, placed next to the database file
pub const LOG_FILE: &str = "todolist.log";

/// Get the database path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --db argument
/// 2. TODOLIST_DB_PATH environment variable (if non-empty)
/// 3. Default path (platform data dir)
pub fn resolve_db_path(cli_db: Option<PathBuf>) -> DbResult<PathBuf> {
    if let Some(path) = cli_db {
        return Ok(path);
    }

    if let Ok(env_path) = std::env::var(DB_PATH_ENV)
        && !env_path.is_empty()
    {
        return Ok(PathBuf::from(env_path));
    }

    Database::default_path()
}

/// Get the log file path: the --log argument, else beside the database.
pub fn resolve_log_path(cli_log: Option<PathBuf>, db_path: &Path) -> PathBuf {
    if let Some(path) = cli_log {
        return path;
    }
    match db_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(LOG_FILE),
        _ => PathBuf::from(LOG_FILE),
    }
}
