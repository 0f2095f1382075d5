//! Card, hand and result formatters for terminal display.
//!
//! Suits print as colored circles where the terminal can render them and as
//! three-letter abbreviations otherwise. Detection follows the usual
//! environment hints on Windows and assumes Unicode elsewhere.
//!
//! ```rust
//! use cloudpoker_engine::cards::{Card, CardId, Category, Rank, Suit};
//! use cloudpoker_cli::formatters::format_card;
//!
//! let card = Card::new(CardId(0), Rank::Ace, Suit::Blue, Category::Storage, "S3");
//! let text = format_card(&card);
//! assert!(text.starts_with("A"));
//! assert!(text.contains("S3"));
//! ```

use cloudpoker_engine::cards::{Card, Suit};
use cloudpoker_engine::deck::DeckDistribution;
use cloudpoker_engine::hand::{HandKind, HandResult};
use cloudpoker_engine::ranking::RankingEntry;

use crate::ui;

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Green => "🟢",
            Suit::Yellow => "🟡",
            Suit::Orange => "🟠",
            Suit::Red => "🔴",
            Suit::Purple => "🟣",
            Suit::Blue => "🔵",
            Suit::Gray => "⚪",
        }
    } else {
        match suit {
            Suit::Green => "Grn",
            Suit::Yellow => "Yel",
            Suit::Orange => "Org",
            Suit::Red => "Red",
            Suit::Purple => "Pur",
            Suit::Blue => "Blu",
            Suit::Gray => "Gry",
        }
    }
}

/// `"{rank}{suit} {label} ({category})"`, e.g. `A🔵 S3 (Storage)`.
pub fn format_card(card: &Card) -> String {
    format!(
        "{}{} {} ({})",
        card.rank,
        format_suit(card.suit),
        card.label,
        card.category.short_name()
    )
}

/// One numbered line per card, numbering from 1 to match draw input.
pub fn format_hand(cards: &[Card], selected: &[usize]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let mark = if selected.contains(&i) { '*' } else { ' ' };
            format!("{}{}) {}", mark, i + 1, format_card(c))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_result(result: &HandResult) -> String {
    format!("{} [{}] +{}", result.kind, result.detail, result.score)
}

pub fn format_distribution(dist: &DeckDistribution) -> String {
    let suits: Vec<String> = dist
        .suits
        .iter()
        .map(|(s, n)| format!("{} {}", s, n))
        .collect();
    let ranks: Vec<String> = dist
        .ranks
        .iter()
        .map(|(r, n)| format!("{}:{}", r, n))
        .collect();
    format!(
        "Deck: {} cards\n  Suits: {}\n  Ranks: {}",
        dist.total,
        suits.join(", "),
        ranks.join(" ")
    )
}

/// Reference table line for one hand kind.
pub fn format_hand_kind(kind: HandKind) -> String {
    let tag = if kind.is_special() { '*' } else { ' ' };
    format!(
        "{}{:<18} {:<24} {}",
        tag,
        kind.name(),
        kind.scoring(),
        kind.requirement()
    )
}

/// `"{pos}. {code}  {score}"` with a loaded marker where applicable.
pub fn format_ranking_line(position: usize, entry: &RankingEntry) -> String {
    let line = format!("{:>2}. {}  {}", position, entry.code, entry.total_score);
    if entry.loaded {
        ui::tag_loaded(&line)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudpoker_engine::cards::{CardId, Category, Rank};
    use cloudpoker_engine::hand::HandDetail;

    fn card(i: u16) -> Card {
        Card::new(CardId(i), Rank::Queen, Suit::Gray, Category::DeveloperTools, "CodeBuild")
    }

    #[test]
    fn hand_lines_are_numbered_from_one_and_mark_selection() {
        let cards = vec![card(0), card(1), card(2)];
        let text = format_hand(&cards, &[1]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 1) Q"));
        assert!(lines[1].starts_with("*2) Q"));
        assert!(lines[2].contains("CodeBuild (DevTools)"));
    }

    #[test]
    fn result_shows_kind_detail_and_score() {
        let r = HandResult {
            kind: HandKind::FullHouse,
            score: 1200,
            detail: HandDetail::FullHouse {
                three: Rank::Seven,
                pair: Rank::Two,
            },
        };
        assert_eq!(format_result(&r), "Full House [7 over 2] +1200");
    }

    #[test]
    fn loaded_entries_are_tagged() {
        let mut e = RankingEntry {
            code: "CLOUD-STACK-0001".into(),
            total_score: 1500,
            rounds: vec![],
            timestamp: String::new(),
            loaded: true,
        };
        assert_eq!(format_ranking_line(1, &e), " 1. CLOUD-STACK-0001  1500 [L]");
        e.loaded = false;
        assert!(!format_ranking_line(1, &e).ends_with("[L]"));
    }

    #[test]
    fn special_kinds_are_starred_in_reference() {
        assert!(format_hand_kind(HandKind::CloudTrio).starts_with('*'));
        assert!(format_hand_kind(HandKind::OnePair).starts_with(' '));
    }
}
