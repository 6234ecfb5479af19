//! `config` command
//!
//! Shows where settings are read from and, on request, writes a default
//! settings file.

use std::io::Write;

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Print resolved paths and settings, optionally writing the settings file
pub fn handle_config_command<W: Write>(
    paths: &LedgerPaths,
    settings: &Settings,
    init: bool,
    out: &mut W,
) -> LedgerResult<()> {
    if init {
        if paths.is_initialized() {
            writeln!(
                out,
                "Settings file already exists: {}",
                paths.settings_file().display()
            )?;
        } else {
            settings.save(paths)?;
            writeln!(out, "Wrote settings to: {}", paths.settings_file().display())?;
        }
    }

    writeln!(out, "Expense Ledger Configuration")?;
    writeln!(out, "============================")?;
    writeln!(out, "Config directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol: {}", settings.currency_symbol)?;
    writeln!(out, "  Log level:       {}", settings.log_level)?;

    Ok(())
}
