//! Command handler modules.
//!
//! Each command lives in its own file and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams are
//! passed in so tests can capture them.

pub mod cfg;
pub mod code;
pub mod deal;
pub mod hands;
pub mod play;
pub mod rankings;

pub use cfg::handle_cfg_command;
pub use code::{handle_code_load_command, handle_code_validate_command};
pub use deal::handle_deal_command;
pub use hands::handle_hands_command;
pub use play::{PlayOptions, handle_play_command};
pub use rankings::handle_rankings_command;

use crate::config::{self, Config};
use crate::error::CliError;

/// Resolved configuration; flags still override it per command.
pub(crate) fn load_config() -> Result<Config, CliError> {
    config::load_with_sources()
        .map(|resolved| resolved.config)
        .map_err(|e| CliError::Config(e.to_string()))
}
