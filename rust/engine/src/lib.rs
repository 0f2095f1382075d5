//! # cloudpoker-engine: Themed Five-Card Draw Core
//!
//! A deterministic engine for a solo five-card draw game played with a
//! 527-card cloud-services deck: seven suits of differing rarity, thirteen
//! ranks, and a service category on every card. A session is five rounds of
//! deal, up to two exchanges, and stand; the scored rounds reduce to a
//! shareable game code.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suit, Rank, Category and Card identities
//! - [`catalog`] - Built-in and file-based card catalogs
//! - [`deck`] - Seeded ChaCha20 deck with exchange and replacement
//! - [`hand`] - Ordered rule table that classifies and scores five cards
//! - [`session`] - Round and session state machine
//! - [`code`] - `WORD-WORD-DDDD` game code encoding and validation
//! - [`ranking`] - High-score entries for played and loaded games
//! - [`logger`] - JSONL round history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudpoker_engine::cards::{Card, CardId, Category, Rank, Suit};
//! use cloudpoker_engine::hand::{classify, HandKind};
//!
//! let ranks = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
//! let hand: Vec<Card> = ranks
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &r)| Card::new(CardId(i as u16), r, Suit::Green, Category::Compute, "svc"))
//!     .collect();
//!
//! let result = classify(&hand).unwrap();
//! assert_eq!(result.kind, HandKind::CloudMaster);
//! assert_eq!(result.score, 45_000);
//! ```
//!
//! ## Deterministic Sessions
//!
//! The same catalog and seed always deal the same cards:
//!
//! ```rust
//! use cloudpoker_engine::catalog::Catalog;
//! use cloudpoker_engine::session::Session;
//!
//! let mut a = Session::new(Catalog::standard(), 42);
//! let mut b = Session::new(Catalog::standard(), 42);
//! assert_eq!(a.start_round().unwrap(), b.start_round().unwrap());
//! ```
//!
//! ## Game Codes
//!
//! ```rust
//! use cloudpoker_engine::code::{validate, GameCode};
//!
//! assert!(validate("CLOUD-LAMBDA-0042"));
//! let code: GameCode = "CLOUD-LAMBDA-0042".parse().unwrap();
//! assert!((1000..6000).contains(&code.pseudo_score()));
//! ```

pub mod cards;
pub mod catalog;
pub mod code;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod ranking;
pub mod session;
