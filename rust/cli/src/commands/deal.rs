//! Deal command handler.
//!
//! Deals one five-card hand from a freshly shuffled deck and shows how it
//! classifies, along with every other rule the hand would also satisfy.

use std::io::Write;

use cloudpoker_engine::deck::Deck;
use cloudpoker_engine::hand::{HandKind, classify, matching_kinds};
use cloudpoker_engine::session::HAND_SIZE;

use super::load_config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_result};
use crate::io_utils::load_catalog;

pub fn handle_deal_command(
    seed: Option<u64>,
    catalog: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let catalog = load_catalog(catalog.or(cfg.catalog).as_deref()).map_err(CliError::InvalidInput)?;

    let mut deck = Deck::new_with_seed(catalog, seed);
    let hand = deck.deal(HAND_SIZE)?;
    let result = classify(&hand)?;
    let also: Vec<String> = matching_kinds(&hand)?
        .into_iter()
        .skip(1)
        .filter(|k| *k != HandKind::HighCard)
        .map(|k| k.to_string())
        .collect();

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "{}", format_hand(&hand, &[]))?;
    writeln!(out, "Result: {}", format_result(&result))?;
    if !also.is_empty() {
        writeln!(out, "Also matches: {}", also.join(", "))?;
    }
    Ok(())
}
