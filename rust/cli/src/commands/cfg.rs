//! Configuration command handler.
//!
//! Prints every configuration value with its source (`default`, `file` or
//! `env`) as pretty JSON:
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "rankings_file": {
//!     "value": "cloudpoker_rankings.json",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "catalog": {
            "value": config.catalog,
            "source": sources.catalog,
        },
        "rankings_file": {
            "value": config.rankings_file,
            "source": sources.rankings_file,
        },
        "log_file": {
            "value": config.log_file,
            "source": sources.log_file,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
