//! Rankings command handler.

use std::io::Write;
use std::path::Path;

use super::load_config;
use crate::error::CliError;
use crate::formatters::format_ranking_line;
use crate::io_utils::load_rankings;

pub fn handle_rankings_command(
    rankings: Option<String>,
    top: usize,
    detail: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let path = rankings.unwrap_or(cfg.rankings_file);
    let table = load_rankings(Path::new(&path));

    if table.is_empty() {
        writeln!(out, "No rankings yet.")?;
        return Ok(());
    }

    writeln!(out, "Rankings ({} entries)", table.len())?;
    for (i, entry) in table.top(top).iter().enumerate() {
        writeln!(out, "{}", format_ranking_line(i + 1, entry))?;
        if detail {
            writeln!(out, "      {}", entry.timestamp)?;
            for (round, summary) in entry.rounds.iter().enumerate() {
                writeln!(
                    out,
                    "      R{} {} +{} {}",
                    round + 1,
                    summary.hand,
                    summary.score,
                    summary.details
                )?;
            }
        }
    }
    if let Some(best) = table.high_score() {
        writeln!(out, "High score: {}", best)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cloudpoker_engine::code::GameCode;
    use cloudpoker_engine::ranking::{RankingEntry, Rankings};

    #[test]
    fn test_empty_rankings_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.json").to_string_lossy().into_owned();
        let mut out = Vec::new();
        handle_rankings_command(Some(path), 10, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No rankings yet.\n");
    }

    #[test]
    fn test_top_limits_and_detail_lists_rounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.json");
        let mut table = Rankings::new();
        for code in ["CLOUD-LAMBDA-1234", "STACK-QUEUE-0042", "EDGE-CACHE-9000"] {
            let code = GameCode::parse(code).unwrap();
            table.insert(RankingEntry::from_loaded_code(&code, Utc::now()));
        }
        crate::io_utils::save_rankings(&path, &table).unwrap();

        let mut out = Vec::new();
        let p = path.to_string_lossy().into_owned();
        handle_rankings_command(Some(p), 2, true, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Rankings (3 entries)\n"));
        assert!(output.contains(" 1. "));
        assert!(output.contains(" 2. "));
        assert!(!output.contains(" 3. "));
        assert!(output.contains("[L]"));
        assert!(output.contains("R5 Unknown"));
        assert!(output.contains(&format!("High score: {}", table.high_score().unwrap())));
    }
}
