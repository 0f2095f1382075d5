//! Shareable game codes of the form `WORD-WORD-DDDD`.
//!
//! A code is a label, not a proof: it is derived from a digest of the round
//! results plus a timestamp and cannot be turned back into those results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::GameError;
use crate::session::RoundRecord;

/// Word table the two leading code parts are drawn from.
pub const CODE_WORDS: [&str; 8] = [
    "CLOUD", "SCALE", "SECURE", "DEPLOY", "LAMBDA", "BUCKET", "QUEUE", "STACK",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameCode(String);

impl GameCode {
    /// Accepts any structurally valid code, including ones produced elsewhere.
    pub fn parse(s: &str) -> Result<Self, GameError> {
        let s = s.trim();
        if validate(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(GameError::MalformedGameCode(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn pseudo_score(&self) -> u32 {
        pseudo_score(&self.0)
    }
}

impl FromStr for GameCode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameCode::parse(s)
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest input: `"{kind}:{score}"` per round joined by `-`, then `-{timestamp}`.
fn digest_input(rounds: &[RoundRecord], timestamp: &str) -> String {
    let scores: Vec<String> = rounds
        .iter()
        .map(|r| format!("{}:{}", r.kind, r.score))
        .collect();
    format!("{}-{}", scores.join("-"), timestamp)
}

pub fn encode(rounds: &[RoundRecord], timestamp: &str) -> GameCode {
    let digest = Sha256::digest(digest_input(rounds, timestamp).as_bytes());
    let word1 = CODE_WORDS[digest[0] as usize % CODE_WORDS.len()];
    let word2 = CODE_WORDS[digest[1] as usize % CODE_WORDS.len()];
    let number = u16::from_be_bytes([digest[2], digest[3]]) % 10_000;
    GameCode(format!("{}-{}-{:04}", word1, word2, number))
}

/// Structural check: three `-`separated parts, the last exactly four ASCII digits.
pub fn validate(code: &str) -> bool {
    let parts: Vec<&str> = code.split('-').collect();
    match parts.as_slice() {
        [_, _, digits] => digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// Stand-in score for a code entered from another session.
///
/// This is `(sum of character codes) mod 5000 + 1000` and has no relation to
/// the score of the game that produced the code. Rankings flag such entries
/// as loaded.
pub fn pseudo_score(code: &str) -> u32 {
    let sum: u64 = code.chars().map(|c| u64::from(u32::from(c))).sum();
    (sum % 5000) as u32 + 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{HandDetail, HandKind};
    use crate::cards::Rank;

    fn record(kind: HandKind, score: u32) -> RoundRecord {
        RoundRecord {
            kind,
            score,
            detail: HandDetail::HighCard { rank: Rank::King },
        }
    }

    #[test]
    fn digest_input_joins_rounds_and_timestamp() {
        let rounds = vec![record(HandKind::OnePair, 50), record(HandKind::CloudTrio, 800)];
        assert_eq!(
            digest_input(&rounds, "2025-01-01T00:00:00Z"),
            "One Pair:50-Cloud Trio:800-2025-01-01T00:00:00Z"
        );
    }

    #[test]
    fn encode_is_deterministic_for_fixed_timestamp() {
        let rounds = vec![record(HandKind::Flush, 600); 5];
        let a = encode(&rounds, "2025-06-01T12:00:00Z");
        let b = encode(&rounds, "2025-06-01T12:00:00Z");
        assert_eq!(a, b);
        assert!(validate(a.as_str()), "{}", a);
        let parts: Vec<&str> = a.as_str().split('-').collect();
        assert!(CODE_WORDS.contains(&parts[0]));
        assert!(CODE_WORDS.contains(&parts[1]));
    }

    #[test]
    fn encode_depends_on_timestamp() {
        let rounds = vec![record(HandKind::Flush, 600); 5];
        let codes: std::collections::HashSet<GameCode> = (0..20)
            .map(|i| encode(&rounds, &format!("2025-06-01T12:00:{:02}Z", i)))
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn validate_checks_structure_only() {
        assert!(validate("CLOUD-LAMBDA-1234"));
        assert!(validate("anything-else-0000"));
        assert!(!validate("CLOUD-1234"));
        assert!(!validate("CLOUD-LAMBDA-123"));
        assert!(!validate("CLOUD-LAMBDA-12345"));
        assert!(!validate("CLOUD-LAMBDA-12a4"));
        assert!(!validate("A-B-C-1234"));
        assert!(!validate(""));
    }

    #[test]
    fn pseudo_score_is_char_sum_mod_5000_plus_1000() {
        let code = "CLOUD-LAMBDA-1234";
        let sum: u32 = code.bytes().map(u32::from).sum();
        assert_eq!(pseudo_score(code), sum % 5000 + 1000);
        assert_eq!(pseudo_score(code), 2084);
        assert!((1000..6000).contains(&pseudo_score("STACK-QUEUE-9999")));
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert_eq!(
            GameCode::parse("CLOUD-1234"),
            Err(GameError::MalformedGameCode("CLOUD-1234".into()))
        );
        let code: GameCode = " SCALE-STACK-0042 ".parse().unwrap();
        assert_eq!(code.as_str(), "SCALE-STACK-0042");
    }
}
