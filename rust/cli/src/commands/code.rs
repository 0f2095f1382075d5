//! `code validate` and `code load` handlers.
//!
//! A loaded code cannot be checked against the game that produced it, so it
//! enters the rankings with its pseudo-score and a loaded marker.

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use cloudpoker_engine::code::{GameCode, validate};
use cloudpoker_engine::ranking::{Insert, RankingEntry};

use super::load_config;
use crate::error::CliError;
use crate::io_utils::{load_rankings, save_rankings};
use crate::ui;

/// Prints `valid` or `invalid`; an invalid code is also an error exit.
pub fn handle_code_validate_command(code: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let code = code.trim();
    if validate(code) {
        writeln!(out, "{}: valid", code)?;
        Ok(())
    } else {
        writeln!(out, "{}: invalid", code)?;
        Err(CliError::InvalidInput(format!(
            "'{}' is not of the form WORD-WORD-DDDD",
            code
        )))
    }
}

pub fn handle_code_load_command(
    code: &str,
    rankings: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let code = GameCode::parse(code)?;
    let cfg = load_config()?;
    let path = rankings.unwrap_or(cfg.rankings_file);
    let path = Path::new(&path);

    let mut table = load_rankings(path);
    let entry = RankingEntry::from_loaded_code(&code, Utc::now());
    let score = entry.total_score;
    match table.insert(entry) {
        Insert::Duplicate => {
            ui::display_warning(err, &format!("{} is already in the rankings", code))?;
        }
        Insert::Added(pos) => {
            save_rankings(path, &table).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            tracing::info!(code = %code, score, "loaded external game code");
            writeln!(out, "Loaded {} with score {} (unverified)", code, score)?;
            writeln!(out, "Ranked #{} of {}", pos + 1, table.len())?;
        }
    }
    Ok(())
}
