//! Command-line front end
//!
//! The interactive menu session and the `config` command handler. Both sit
//! on top of the library and hold no state of their own.

pub mod config;
pub mod prompt;
pub mod session;

pub use config::handle_config_command;
pub use prompt::Prompter;
pub use session::{MenuChoice, Session};
