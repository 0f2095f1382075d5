//! # Play Command
//!
//! Drives one five-round session from line-based input.
//!
//! Each round shows the hand and prompts for an action until the player
//! stands. Input is `d <positions>` to exchange cards, `s` to stand, `deck`
//! to see what is left, and `q` to abort. Once both draws are used the hand
//! stands on its own. After the last round the game code is printed and,
//! unless `--no-save` is given, the result goes into the rankings file.

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::Utc;
use cloudpoker_engine::errors::GameError;
use cloudpoker_engine::logger::{RoundLog, RoundLogger, format_session_id};
use cloudpoker_engine::ranking::{Insert, RankingEntry};
use cloudpoker_engine::session::{Advance, ExchangeOutcome, Phase, Session};

use super::load_config;
use crate::error::CliError;
use crate::formatters::{format_distribution, format_hand, format_result};
use crate::io_utils::{load_catalog, load_rankings, read_stdin_line, save_rankings};
use crate::ui;
use crate::validation::{ParseResult, parse_play_input};

/// Flags of the `play` command. Unset values fall back to configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub catalog: Option<String>,
    pub rankings: Option<String>,
    pub log: Option<String>,
    pub auto: bool,
    pub no_save: bool,
}

pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let catalog_path = opts.catalog.or(cfg.catalog);
    let rankings_path = opts.rankings.unwrap_or(cfg.rankings_file);
    let log_path = opts.log.or(cfg.log_file);

    let catalog = load_catalog(catalog_path.as_deref()).map_err(CliError::InvalidInput)?;
    let mut logger = log_path.map(RoundLogger::create).transpose()?;
    let session_id = match logger.as_mut() {
        Some(l) => l.next_session_id(),
        None => format_session_id(&Utc::now().format("%Y%m%d").to_string(), 1),
    };

    writeln!(
        out,
        "play: seed={} deck={} cards session={}",
        seed,
        catalog.len(),
        session_id
    )?;

    let mut session = Session::new(catalog, seed);
    session.start_round()?;

    loop {
        writeln!(
            out,
            "\nRound {}/{}",
            session.current_round(),
            session.max_rounds()
        )?;
        writeln!(out, "{}", format_hand(session.hand(), &[]))?;

        if !play_round(&mut session, opts.auto, out, err, stdin)? {
            writeln!(out, "Session aborted.")?;
            return Ok(());
        }

        let Some(result) = session.last_result().cloned() else {
            return Err(CliError::Engine("round ended without a result".into()));
        };
        writeln!(out, "Result: {}", format_result(&result))?;
        writeln!(out, "Total: {}", session.total_score())?;

        let mut record = RoundLog::new(
            &session_id,
            Some(seed),
            session.current_round(),
            session.hand(),
            &result,
            session.total_score(),
        );

        match session.advance_round()? {
            Advance::NextRound(_) => {
                if let Some(l) = logger.as_mut() {
                    l.write(&record)?;
                }
            }
            Advance::Complete(code) => {
                record.code = Some(code.to_string());
                if let Some(l) = logger.as_mut() {
                    l.write(&record)?;
                }
                writeln!(out, "\nSession complete")?;
                writeln!(out, "Total score: {}", session.total_score())?;
                writeln!(out, "Game code: {}", code)?;
                if !opts.no_save {
                    record_ranking(&session, Path::new(&rankings_path), out, err)?;
                }
                return Ok(());
            }
        }
    }
}

/// Runs prompts until the round is scored. `false` when the player quits.
fn play_round(
    session: &mut Session,
    auto: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    while session.phase() != Phase::RoundComplete {
        if auto {
            session.stand()?;
            break;
        }
        if session.phase() == Phase::Standing {
            writeln!(out, "No draws left, standing.")?;
            session.stand()?;
            break;
        }

        ui::prompt(
            out,
            &format!(
                "Draws left {}. Action (d <positions>/s/deck/q): ",
                session.draws_remaining()
            ),
        )?;
        let Some(line) = read_stdin_line(stdin) else {
            return Err(CliError::Interrupted(
                "input closed before the session finished".into(),
            ));
        };

        match parse_play_input(&line) {
            ParseResult::Draw(positions) => match session.exchange(&positions) {
                Ok(ExchangeOutcome::Exchanged { .. }) => {
                    writeln!(out, "{}", format_hand(session.hand(), &positions))?;
                }
                Ok(ExchangeOutcome::Unchanged) => {}
                Err(e @ (GameError::InvalidTransition { .. } | GameError::InvalidCardIndex { .. })) => {
                    ui::write_error(err, &e.to_string())?;
                }
                Err(e) => return Err(e.into()),
            },
            ParseResult::Stand => {
                session.stand()?;
            }
            ParseResult::Deck => {
                writeln!(out, "{}", format_distribution(&session.deck().distribution()))?;
            }
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(true)
}

fn record_ranking(
    session: &Session,
    path: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut rankings = load_rankings(path);
    let previous_best = rankings.high_score();
    let entry = RankingEntry::from_session(session, Utc::now())?;
    if let Insert::Added(pos) = rankings.insert(entry) {
        if let Err(e) = save_rankings(path, &rankings) {
            ui::display_warning(err, &format!("Could not save rankings: {}", e))?;
            return Ok(());
        }
        writeln!(out, "Ranked #{} of {}", pos + 1, rankings.len())?;
        if previous_best.is_some_and(|best| session.total_score() > best) {
            writeln!(out, "New high score!")?;
        }
    }
    Ok(())
}
