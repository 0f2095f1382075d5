use thiserror::Error;

use crate::session::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Hand must contain exactly 5 cards, got {actual}")]
    InvalidHandSize { actual: usize },
    #[error("Insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Cannot {action} while {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },
    #[error("Card index {index} is outside the hand")]
    InvalidCardIndex { index: usize },
    #[error("Malformed game code: {0}")]
    MalformedGameCode(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}
