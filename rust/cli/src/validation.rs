//! Input parsing for the interactive `play` prompt.

use cloudpoker_engine::session::HAND_SIZE;

/// Outcome of parsing one prompt line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Exchange the cards at these 0-based positions
    Draw(Vec<usize>),
    Stand,
    /// Show what is left in the deck
    Deck,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a prompt line (case-insensitive).
///
/// - `d 1 3 5`, `draw 1,3,5` or `d 135` exchange cards by 1-based position
/// - `s` / `stand`
/// - `deck`
/// - `q` / `quit`
///
/// ```rust
/// # use cloudpoker_cli::validation::{parse_play_input, ParseResult};
/// assert_eq!(parse_play_input("d 1 3"), ParseResult::Draw(vec![0, 2]));
/// assert_eq!(parse_play_input("STAND"), ParseResult::Stand);
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let mut parts = input.splitn(2, char::is_whitespace);
    let Some(head) = parts.next().filter(|h| !h.is_empty()) else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    let rest = parts.next().unwrap_or("").trim();

    match head {
        "q" | "quit" => ParseResult::Quit,
        "s" | "stand" => ParseResult::Stand,
        "deck" => ParseResult::Deck,
        "d" | "draw" => match parse_positions(rest) {
            Ok(positions) => ParseResult::Draw(positions),
            Err(msg) => ParseResult::Invalid(msg),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Use d <positions>, s, deck or q",
            other
        )),
    }
}

/// 1-based positions to sorted, distinct 0-based indices.
fn parse_positions(s: &str) -> Result<Vec<usize>, String> {
    if s.is_empty() {
        return Err("Draw requires card positions (e.g., 'd 1 3')".to_string());
    }
    let tokens: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    // "d 135" is shorthand for three single-digit positions
    let digits: Vec<String> = if tokens.len() == 1 && tokens[0].len() > 1 {
        tokens[0].chars().map(String::from).collect()
    } else {
        tokens.iter().map(|t| t.to_string()).collect()
    };

    let mut positions = Vec::with_capacity(digits.len());
    for d in &digits {
        match d.parse::<usize>() {
            Ok(n) if (1..=HAND_SIZE).contains(&n) => positions.push(n - 1),
            _ => {
                return Err(format!(
                    "Invalid position '{}': use numbers 1-{}",
                    d, HAND_SIZE
                ));
            }
        }
    }
    positions.sort_unstable();
    positions.dedup();
    Ok(positions)
}
