//! High-score table entries.
//!
//! Entries come from two places: a finished [`Session`], or a game code typed
//! in from elsewhere. The second kind cannot be verified, so its score is the
//! code's pseudo-score and the entry is marked `loaded`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::code::GameCode;
use crate::errors::GameError;
use crate::session::{Phase, Session, MAX_ROUNDS};

/// Per-round line of a ranking entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub hand: String,
    pub score: u32,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub code: String,
    pub total_score: u32,
    pub rounds: Vec<RoundSummary>,
    /// RFC3339 time the entry was created
    pub timestamp: String,
    /// Entered from a code rather than played here
    #[serde(default)]
    pub loaded: bool,
}

impl RankingEntry {
    /// Entry for a completed session. Fails if the session is still running.
    pub fn from_session(session: &Session, now: DateTime<Utc>) -> Result<Self, GameError> {
        let code = match (session.phase(), session.game_code()) {
            (Phase::SessionComplete, Some(code)) => code,
            (phase, _) => {
                return Err(GameError::InvalidTransition {
                    action: "record a ranking",
                    phase,
                })
            }
        };
        Ok(Self {
            code: code.to_string(),
            total_score: session.total_score(),
            rounds: session
                .rounds()
                .iter()
                .map(|r| RoundSummary {
                    hand: r.kind.to_string(),
                    score: r.score,
                    details: r.detail.to_string(),
                })
                .collect(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            loaded: false,
        })
    }

    /// Placeholder entry for an externally supplied code.
    ///
    /// The five rounds are `Unknown`, each with a fifth of the pseudo-score.
    pub fn from_loaded_code(code: &GameCode, now: DateTime<Utc>) -> Self {
        let total = code.pseudo_score();
        let per_round = total / u32::from(MAX_ROUNDS);
        Self {
            code: code.to_string(),
            total_score: total,
            rounds: (0..MAX_ROUNDS)
                .map(|_| RoundSummary {
                    hand: "Unknown".to_string(),
                    score: per_round,
                    details: String::new(),
                })
                .collect(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            loaded: true,
        }
    }
}

/// Result of adding an entry to [`Rankings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// Added at this 0-based position
    Added(usize),
    /// A loaded entry with the same code already exists
    Duplicate,
}

/// Entries kept sorted by total score, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rankings {
    entries: Vec<RankingEntry>,
}

impl Rankings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(mut entries: Vec<RankingEntry>) -> Self {
        entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        Self { entries }
    }

    /// Inserts after any existing entries with an equal score. A loaded
    /// entry is refused when any entry, played or loaded, has its code.
    pub fn insert(&mut self, entry: RankingEntry) -> Insert {
        if entry.loaded && self.entries.iter().any(|e| e.code == entry.code) {
            return Insert::Duplicate;
        }
        let pos = self
            .entries
            .partition_point(|e| e.total_score >= entry.total_score);
        self.entries.insert(pos, entry);
        Insert::Added(pos)
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[RankingEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn high_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.total_score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, total: u32, loaded: bool) -> RankingEntry {
        RankingEntry {
            code: code.into(),
            total_score: total,
            rounds: vec![],
            timestamp: "2025-01-01T00:00:00Z".into(),
            loaded,
        }
    }

    #[test]
    fn keeps_descending_order_and_stable_ties() {
        let mut r = Rankings::new();
        assert_eq!(r.insert(entry("A-A-0001", 500, false)), Insert::Added(0));
        assert_eq!(r.insert(entry("A-A-0002", 900, false)), Insert::Added(0));
        assert_eq!(r.insert(entry("A-A-0003", 500, false)), Insert::Added(2));
        let codes: Vec<&str> = r.entries().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["A-A-0002", "A-A-0001", "A-A-0003"]);
        assert_eq!(r.high_score(), Some(900));
        assert_eq!(r.top(2).len(), 2);
        assert_eq!(r.top(10).len(), 3);
    }

    #[test]
    fn refuses_the_same_loaded_code_twice() {
        let mut r = Rankings::new();
        assert!(matches!(r.insert(entry("X-Y-1111", 10, true)), Insert::Added(_)));
        assert_eq!(r.insert(entry("X-Y-1111", 10, true)), Insert::Duplicate);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn refuses_loading_a_code_already_played() {
        let mut r = Rankings::new();
        assert!(matches!(r.insert(entry("CLOUD-LAMBDA-1234", 3000, false)), Insert::Added(_)));
        let code = GameCode::parse("CLOUD-LAMBDA-1234").unwrap();
        let loaded = RankingEntry::from_loaded_code(&code, Utc::now());
        assert_eq!(r.insert(loaded), Insert::Duplicate);
        assert_eq!(r.len(), 1);
        assert!(!r.entries()[0].loaded);
    }

    #[test]
    fn loaded_entry_splits_pseudo_score_over_five_rounds() {
        let code = GameCode::parse("CLOUD-LAMBDA-1234").unwrap();
        let e = RankingEntry::from_loaded_code(&code, Utc::now());
        assert!(e.loaded);
        assert_eq!(e.total_score, 2084);
        assert_eq!(e.rounds.len(), 5);
        assert!(e.rounds.iter().all(|r| r.hand == "Unknown" && r.score == 416));
    }

    #[test]
    fn from_entries_sorts() {
        let r = Rankings::from_entries(vec![entry("a", 1, false), entry("b", 3, false)]);
        assert_eq!(r.entries()[0].code, "b");
    }
}
