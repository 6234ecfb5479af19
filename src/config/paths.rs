//! Path management for the expense ledger
//!
//! Only the settings file lives on disk; expenses are never persisted.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory passed on the command line
//! 2. `EXPENSE_LEDGER_DIR` environment variable (if set)
//! 3. The platform config directory (e.g. `~/.config/expense-ledger`)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

/// Environment variable that overrides the config directory
pub const DIR_ENV_VAR: &str = "EXPENSE_LEDGER_DIR";

/// Locates the files used by the expense ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the config directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> LedgerResult<Self> {
        if let Some(custom) = std::env::var_os(DIR_ENV_VAR) {
            return Ok(Self::with_base_dir(PathBuf::from(custom)));
        }

        let dirs = ProjectDirs::from("", "", "expense-ledger").ok_or_else(|| {
            LedgerError::Config("Could not determine a configuration directory".into())
        })?;

        Ok(Self::with_base_dir(dirs.config_dir().to_path_buf()))
    }

    /// Use an explicit directory when given, otherwise resolve as in `new`
    pub fn resolve(explicit: Option<PathBuf>) -> LedgerResult<Self> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> LedgerResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            LedgerError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
