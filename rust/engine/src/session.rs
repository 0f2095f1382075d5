//! Round and session state machine.
//!
//! A session is five rounds. Each round deals five cards, allows up to two
//! exchanges, and ends with a stand that scores the hand. After the fifth
//! round the session completes and produces its game code exactly once.
//!
//! ```text
//! Dealt --start_round--> AwaitingAction --exchange (last draw)--> Standing
//!                            |  ^    |                               |
//!                            |  +----+ exchange                      |
//!                            +--------------stand--------------------+--> RoundComplete
//! RoundComplete --advance_round--> AwaitingAction | SessionComplete
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::catalog::Catalog;
use crate::code::{self, GameCode};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{classify, HandDetail, HandKind, HandResult};

pub const HAND_SIZE: usize = 5;
pub const MAX_ROUNDS: u8 = 5;
pub const DRAWS_PER_ROUND: u8 = 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Deck ready, opening hand not dealt yet
    Dealt,
    /// Hand dealt; the player may exchange or stand
    AwaitingAction,
    /// Draws used up; only a stand is accepted
    Standing,
    /// Hand scored; waiting for the next round
    RoundComplete,
    /// All rounds played; the game code is fixed
    SessionComplete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Dealt => "dealt",
            Phase::AwaitingAction => "awaiting action",
            Phase::Standing => "standing",
            Phase::RoundComplete => "round complete",
            Phase::SessionComplete => "session complete",
        })
    }
}

/// Outcome of one round. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub kind: HandKind,
    pub score: u32,
    pub detail: HandDetail,
}

impl From<HandResult> for RoundRecord {
    fn from(r: HandResult) -> Self {
        Self {
            kind: r.kind,
            score: r.score,
            detail: r.detail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Empty selection, nothing happened
    Unchanged,
    Exchanged { replaced: usize, draws_remaining: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    NextRound(u8),
    Complete(GameCode),
}

#[derive(Debug)]
pub struct Session {
    deck: Deck,
    hand: Vec<Card>,
    /// Hands from earlier rounds since the deck was last replaced
    spent: Vec<Card>,
    selected: [bool; HAND_SIZE],
    phase: Phase,
    current_round: u8,
    draws_remaining: u8,
    rounds: Vec<RoundRecord>,
    last_result: Option<HandResult>,
    game_code: Option<GameCode>,
}

impl Session {
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            deck: Deck::new_with_seed(catalog, seed),
            hand: Vec::with_capacity(HAND_SIZE),
            spent: Vec::new(),
            selected: [false; HAND_SIZE],
            phase: Phase::Dealt,
            current_round: 1,
            draws_remaining: DRAWS_PER_ROUND,
            rounds: Vec::with_capacity(MAX_ROUNDS as usize),
            last_result: None,
            game_code: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn current_round(&self) -> u8 {
        self.current_round
    }
    pub fn max_rounds(&self) -> u8 {
        MAX_ROUNDS
    }
    pub fn draws_remaining(&self) -> u8 {
        self.draws_remaining
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }
    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }
    pub fn game_code(&self) -> Option<&GameCode> {
        self.game_code.as_ref()
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Always the sum of the recorded round scores.
    pub fn total_score(&self) -> u32 {
        self.rounds.iter().map(|r| r.score).sum()
    }

    /// Cards currently outside the deck.
    pub fn cards_in_play(&self) -> usize {
        self.hand.len() + self.spent.len()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&i| self.selected[i]).collect()
    }

    /// Deals the opening hand of the session.
    pub fn start_round(&mut self) -> Result<&[Card], GameError> {
        if self.phase != Phase::Dealt {
            return Err(self.invalid("start a round"));
        }
        self.deal_round()?;
        Ok(&self.hand)
    }

    fn deal_round(&mut self) -> Result<(), GameError> {
        self.spent.append(&mut self.hand);
        if self.deck.remaining() < HAND_SIZE {
            self.deck.replenish();
            self.spent.clear();
        }
        self.hand = self.deck.deal(HAND_SIZE)?;
        self.selected = [false; HAND_SIZE];
        self.draws_remaining = DRAWS_PER_ROUND;
        self.phase = Phase::AwaitingAction;
        tracing::debug!(
            round = self.current_round,
            deck_remaining = self.deck.remaining(),
            "dealt hand"
        );
        Ok(())
    }

    /// Flips the selection mark on one card; returns the new mark.
    pub fn toggle_selection(&mut self, index: usize) -> Result<bool, GameError> {
        if self.phase != Phase::AwaitingAction {
            return Err(self.invalid("select cards"));
        }
        let slot = self
            .selected
            .get_mut(index)
            .ok_or(GameError::InvalidCardIndex { index })?;
        *slot = !*slot;
        Ok(*slot)
    }

    pub fn exchange_selected(&mut self) -> Result<ExchangeOutcome, GameError> {
        let indices = self.selected_indices();
        self.exchange(&indices)
    }

    /// Swaps the cards at `indices` (0-based, duplicates ignored) for fresh
    /// ones from a reshuffled deck. Using the last draw moves the round to
    /// [`Phase::Standing`].
    pub fn exchange(&mut self, indices: &[usize]) -> Result<ExchangeOutcome, GameError> {
        if self.phase != Phase::AwaitingAction || self.draws_remaining == 0 {
            return Err(self.invalid("exchange"));
        }
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();
        if let Some(&index) = indices.iter().find(|&&i| i >= self.hand.len()) {
            return Err(GameError::InvalidCardIndex { index });
        }
        if indices.is_empty() {
            return Ok(ExchangeOutcome::Unchanged);
        }

        let returned: Vec<Card> = indices.iter().map(|&i| self.hand[i].clone()).collect();
        self.deck.return_cards(returned);
        self.deck.shuffle();
        let fresh = self.deck.deal(indices.len())?;
        for (&i, card) in indices.iter().zip(fresh) {
            self.hand[i] = card;
        }

        self.draws_remaining -= 1;
        self.selected = [false; HAND_SIZE];
        if self.draws_remaining == 0 {
            self.phase = Phase::Standing;
        }
        tracing::debug!(
            round = self.current_round,
            replaced = indices.len(),
            draws_remaining = self.draws_remaining,
            "exchanged cards"
        );
        Ok(ExchangeOutcome::Exchanged {
            replaced: indices.len(),
            draws_remaining: self.draws_remaining,
        })
    }

    /// Scores the current hand and records the round.
    pub fn stand(&mut self) -> Result<HandResult, GameError> {
        if !matches!(self.phase, Phase::AwaitingAction | Phase::Standing) {
            return Err(self.invalid("stand"));
        }
        let result = classify(&self.hand)?;
        self.rounds.push(RoundRecord::from(result.clone()));
        self.last_result = Some(result.clone());
        self.phase = Phase::RoundComplete;
        tracing::info!(
            round = self.current_round,
            kind = %result.kind,
            score = result.score,
            total = self.total_score(),
            "round scored"
        );
        Ok(result)
    }

    pub fn advance_round(&mut self) -> Result<Advance, GameError> {
        self.advance_round_at(Utc::now())
    }

    /// Moves past a completed round. After the last round this completes the
    /// session and returns its game code; once complete, every further call
    /// returns the same code.
    pub fn advance_round_at(&mut self, now: DateTime<Utc>) -> Result<Advance, GameError> {
        match self.phase {
            Phase::SessionComplete => {}
            Phase::RoundComplete if self.current_round >= MAX_ROUNDS => {
                self.phase = Phase::SessionComplete;
            }
            Phase::RoundComplete => {
                self.current_round += 1;
                self.deal_round()?;
                return Ok(Advance::NextRound(self.current_round));
            }
            _ => return Err(self.invalid("advance the round")),
        }
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Micros, true);
        let code = self
            .game_code
            .get_or_insert_with(|| {
                let code = code::encode(&self.rounds, &timestamp);
                tracing::info!(code = %code, "session complete");
                code
            })
            .clone();
        Ok(Advance::Complete(code))
    }

    /// Starts over with a fresh deck, discarding every round.
    pub fn new_game(&mut self) {
        self.deck.replenish();
        self.hand.clear();
        self.spent.clear();
        self.selected = [false; HAND_SIZE];
        self.phase = Phase::Dealt;
        self.current_round = 1;
        self.draws_remaining = DRAWS_PER_ROUND;
        self.rounds.clear();
        self.last_result = None;
        self.game_code = None;
    }

    fn invalid(&self, action: &'static str) -> GameError {
        GameError::InvalidTransition {
            action,
            phase: self.phase,
        }
    }
}
