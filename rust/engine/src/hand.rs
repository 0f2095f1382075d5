//! Five-card hand classification.
//!
//! Classification walks a fixed, ordered rule table. Category and suit based
//! special hands come first, standard poker hands after them, and the first
//! rule that matches decides the result. High card is the fallthrough.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Category, Rank, Suit};
use crate::errors::GameError;
use crate::session::HAND_SIZE;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    #[serde(rename = "High Card")]
    HighCard,
    #[serde(rename = "One Pair")]
    OnePair,
    #[serde(rename = "Two Pair")]
    TwoPair,
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    Straight,
    Flush,
    #[serde(rename = "Full House")]
    FullHouse,
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    #[serde(rename = "DevOps Suite")]
    DevOpsSuite,
    #[serde(rename = "Data Pipeline")]
    DataPipeline,
    #[serde(rename = "Cloud Trio")]
    CloudTrio,
    #[serde(rename = "IoT Ecosystem")]
    IotEcosystem,
    #[serde(rename = "Serverless Combo")]
    ServerlessCombo,
    #[serde(rename = "Security Suite")]
    SecuritySuite,
    #[serde(rename = "Multi-Cloud")]
    MultiCloud,
    #[serde(rename = "Cloud Architect")]
    CloudArchitect,
    #[serde(rename = "Legendary Flush")]
    LegendaryFlush,
    #[serde(rename = "Cloud Master")]
    CloudMaster,
}

impl HandKind {
    /// Every kind, strongest first.
    pub const ALL: [HandKind; 19] = [
        HandKind::CloudMaster,
        HandKind::LegendaryFlush,
        HandKind::CloudArchitect,
        HandKind::MultiCloud,
        HandKind::SecuritySuite,
        HandKind::ServerlessCombo,
        HandKind::IotEcosystem,
        HandKind::CloudTrio,
        HandKind::DataPipeline,
        HandKind::DevOpsSuite,
        HandKind::StraightFlush,
        HandKind::FourOfAKind,
        HandKind::FullHouse,
        HandKind::Flush,
        HandKind::Straight,
        HandKind::ThreeOfAKind,
        HandKind::TwoPair,
        HandKind::OnePair,
        HandKind::HighCard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::OnePair => "One Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::DevOpsSuite => "DevOps Suite",
            HandKind::DataPipeline => "Data Pipeline",
            HandKind::CloudTrio => "Cloud Trio",
            HandKind::IotEcosystem => "IoT Ecosystem",
            HandKind::ServerlessCombo => "Serverless Combo",
            HandKind::SecuritySuite => "Security Suite",
            HandKind::MultiCloud => "Multi-Cloud",
            HandKind::CloudArchitect => "Cloud Architect",
            HandKind::LegendaryFlush => "Legendary Flush",
            HandKind::CloudMaster => "Cloud Master",
        }
    }

    /// Position in the total order used by [`strength`].
    ///
    /// Standard hands take 1..=9. Special hands take 11..=20, the higher
    /// priority rules ranking higher; 10 is left free between the two bands.
    pub fn rank(self) -> u32 {
        match self {
            HandKind::HighCard => 1,
            HandKind::OnePair => 2,
            HandKind::TwoPair => 3,
            HandKind::ThreeOfAKind => 4,
            HandKind::Straight => 5,
            HandKind::Flush => 6,
            HandKind::FullHouse => 7,
            HandKind::FourOfAKind => 8,
            HandKind::StraightFlush => 9,
            HandKind::DevOpsSuite => 11,
            HandKind::DataPipeline => 12,
            HandKind::CloudTrio => 13,
            HandKind::IotEcosystem => 14,
            HandKind::ServerlessCombo => 15,
            HandKind::SecuritySuite => 16,
            HandKind::MultiCloud => 17,
            HandKind::CloudArchitect => 18,
            HandKind::LegendaryFlush => 19,
            HandKind::CloudMaster => 20,
        }
    }

    pub fn is_special(self) -> bool {
        self.rank() > 10
    }

    /// How the kind is scored, for reference tables.
    pub fn scoring(self) -> &'static str {
        match self {
            HandKind::CloudMaster => "15000 x suit multiplier",
            HandKind::LegendaryFlush => "10000",
            HandKind::CloudArchitect => "3000",
            HandKind::MultiCloud => "2200",
            HandKind::SecuritySuite => "1500",
            HandKind::ServerlessCombo => "1300",
            HandKind::IotEcosystem => "1000",
            HandKind::CloudTrio => "800",
            HandKind::DataPipeline => "600",
            HandKind::DevOpsSuite => "500",
            HandKind::StraightFlush => "5000 + flush bonus",
            HandKind::FourOfAKind => "2500",
            HandKind::FullHouse => "1200",
            HandKind::Flush => "flush bonus (500-2000)",
            HandKind::Straight => "400",
            HandKind::ThreeOfAKind => "200",
            HandKind::TwoPair => "100",
            HandKind::OnePair => "50",
            HandKind::HighCard => "10",
        }
    }

    /// What the hand needs, for reference tables.
    pub fn requirement(self) -> &'static str {
        match self {
            HandKind::CloudMaster => "A, K, Q, J, 10 of one suit",
            HandKind::LegendaryFlush => "Straight flush in Green",
            HandKind::CloudArchitect => "Compute, Storage, Database, Security and Analytics",
            HandKind::MultiCloud => "Five different suits",
            HandKind::SecuritySuite => "3 Security, or 2 Security + 1 Management",
            HandKind::ServerlessCombo => "Compute + Integration + Database",
            HandKind::IotEcosystem => "IoT + Analytics or AI/ML",
            HandKind::CloudTrio => "Compute + Storage + Database",
            HandKind::DataPipeline => "2 Analytics + Storage",
            HandKind::DevOpsSuite => "2 DevTools + Management",
            HandKind::StraightFlush => "Five in sequence, one suit",
            HandKind::FourOfAKind => "Four cards of one rank",
            HandKind::FullHouse => "Three of one rank, two of another",
            HandKind::Flush => "Five cards of one suit",
            HandKind::Straight => "Five in sequence (A-2-3-4-5 counts)",
            HandKind::ThreeOfAKind => "Three cards of one rank",
            HandKind::TwoPair => "Two different pairs",
            HandKind::OnePair => "Two cards of one rank",
            HandKind::HighCard => "Anything else",
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific facts about a classified hand. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandDetail {
    SuitMultiplier { suit: Suit, multiplier: f64 },
    Suit { suit: Suit },
    FlushBonus { suit: Suit, bonus: u32 },
    Suits { suits: Vec<Suit> },
    Categories { categories: Vec<Category> },
    Focus { category: Category },
    Rank { rank: Rank },
    FullHouse { three: Rank, pair: Rank },
    TwoPair { high: Rank, low: Rank },
    HighCard { rank: Rank },
}

impl fmt::Display for HandDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
            items
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(sep)
        }
        match self {
            HandDetail::SuitMultiplier { suit, multiplier } => {
                write!(f, "{} x{:.1}", suit, multiplier)
            }
            HandDetail::Suit { suit } => write!(f, "{}", suit),
            HandDetail::FlushBonus { suit, bonus } => write!(f, "{} +{}", suit, bonus),
            HandDetail::Suits { suits } => f.write_str(&join(suits, ", ")),
            HandDetail::Categories { categories } => {
                let names: Vec<&str> = categories.iter().map(|c| c.short_name()).collect();
                f.write_str(&names.join(" + "))
            }
            HandDetail::Focus { category } => write!(f, "{} focus", category.short_name()),
            HandDetail::Rank { rank } => write!(f, "{}", rank),
            HandDetail::FullHouse { three, pair } => write!(f, "{} over {}", three, pair),
            HandDetail::TwoPair { high, low } => write!(f, "{} and {}", high, low),
            HandDetail::HighCard { rank } => write!(f, "{} high", rank),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub kind: HandKind,
    pub score: u32,
    pub detail: HandDetail,
}

impl HandResult {
    pub fn strength(&self) -> u32 {
        strength(self.kind, self.score)
    }
}

/// Flush bonus per suit.
pub fn flush_bonus(suit: Suit) -> u32 {
    match suit {
        Suit::Green => 2000,
        Suit::Yellow => 1800,
        Suit::Orange => 1600,
        Suit::Red => 1000,
        Suit::Purple => 800,
        Suit::Blue => 600,
        Suit::Gray => 500,
    }
}

/// Top-tier multiplier per suit, in tenths so scoring stays integral.
pub fn suit_multiplier_tenths(suit: Suit) -> u32 {
    match suit {
        Suit::Green => 30,
        Suit::Yellow => 25,
        Suit::Orange => 20,
        Suit::Red => 15,
        Suit::Purple => 13,
        Suit::Blue => 12,
        Suit::Gray => 10,
    }
}

pub fn suit_multiplier(suit: Suit) -> f64 {
    f64::from(suit_multiplier_tenths(suit)) / 10.0
}

pub fn strength(kind: HandKind, score: u32) -> u32 {
    kind.rank() * 1000 + score
}

pub fn compare_results(a: &HandResult, b: &HandResult) -> Ordering {
    a.strength().cmp(&b.strength())
}

const ROYAL_RANKS: [Rank; 5] = [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];

const ARCHITECT_CATEGORIES: [Category; 5] = [
    Category::Compute,
    Category::Storage,
    Category::Database,
    Category::Security,
    Category::Analytics,
];

/// Counts gathered once per hand and shared by every rule.
struct HandProfile {
    ranks: Vec<Rank>,
    rank_counts: [u8; Rank::COUNT],
    suit_counts: [u8; Suit::COUNT],
    category_counts: [u8; Category::COUNT],
    uniform_suit: Option<Suit>,
    straight: bool,
}

impl HandProfile {
    fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; Rank::COUNT];
        let mut suit_counts = [0u8; Suit::COUNT];
        let mut category_counts = [0u8; Category::COUNT];
        for c in cards {
            rank_counts[c.rank.ordinal() as usize] += 1;
            suit_counts[c.suit.index()] += 1;
            category_counts[c.category.index()] += 1;
        }
        let uniform_suit = match cards.first() {
            Some(first) if cards.iter().all(|c| c.suit == first.suit) => Some(first.suit),
            _ => None,
        };
        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
        let straight = is_straight(&ranks);
        Self {
            ranks,
            rank_counts,
            suit_counts,
            category_counts,
            uniform_suit,
            straight,
        }
    }

    fn count(&self, category: Category) -> u8 {
        self.category_counts[category.index()]
    }

    fn has(&self, category: Category) -> bool {
        self.count(category) >= 1
    }

    fn distinct_categories(&self) -> usize {
        self.category_counts.iter().filter(|&&n| n > 0).count()
    }

    fn distinct_suits(&self) -> Vec<Suit> {
        crate::cards::all_suits()
            .into_iter()
            .filter(|s| self.suit_counts[s.index()] > 0)
            .collect()
    }

    /// Ranks appearing exactly `n` times, highest ordinal first.
    fn ranks_with_count(&self, n: u8) -> Vec<Rank> {
        (0..Rank::COUNT as u8)
            .rev()
            .filter(|&o| self.rank_counts[o as usize] == n)
            .filter_map(Rank::from_ordinal)
            .collect()
    }

    fn high_card(&self) -> Rank {
        self.ranks.iter().copied().max().unwrap_or(Rank::Ace)
    }

    fn is_royal_set(&self) -> bool {
        ROYAL_RANKS
            .iter()
            .all(|r| self.rank_counts[r.ordinal() as usize] == 1)
    }
}

/// True when the rank ordinals, sorted, are five consecutive integers.
///
/// The ace is ordinal 0, so A-2-3-4-5 is a straight and 10-J-Q-K-A is not.
pub fn is_straight(ranks: &[Rank]) -> bool {
    if ranks.len() != HAND_SIZE {
        return false;
    }
    let mut ords: Vec<u8> = ranks.iter().map(|r| r.ordinal()).collect();
    ords.sort_unstable();
    ords.windows(2).all(|w| w[1] == w[0] + 1)
}

type Evaluate = fn(&HandProfile) -> Option<(u32, HandDetail)>;

struct Rule {
    kind: HandKind,
    evaluate: Evaluate,
}

/// Classification priority. The first match wins; high card is the
/// fallthrough when nothing here matches.
static RULES: [Rule; 18] = [
    Rule {
        kind: HandKind::CloudMaster,
        evaluate: cloud_master,
    },
    Rule {
        kind: HandKind::LegendaryFlush,
        evaluate: legendary_flush,
    },
    Rule {
        kind: HandKind::CloudArchitect,
        evaluate: cloud_architect,
    },
    Rule {
        kind: HandKind::MultiCloud,
        evaluate: multi_cloud,
    },
    Rule {
        kind: HandKind::SecuritySuite,
        evaluate: security_suite,
    },
    Rule {
        kind: HandKind::ServerlessCombo,
        evaluate: serverless_combo,
    },
    Rule {
        kind: HandKind::IotEcosystem,
        evaluate: iot_ecosystem,
    },
    Rule {
        kind: HandKind::CloudTrio,
        evaluate: cloud_trio,
    },
    Rule {
        kind: HandKind::DataPipeline,
        evaluate: data_pipeline,
    },
    Rule {
        kind: HandKind::DevOpsSuite,
        evaluate: devops_suite,
    },
    Rule {
        kind: HandKind::StraightFlush,
        evaluate: straight_flush,
    },
    Rule {
        kind: HandKind::FourOfAKind,
        evaluate: four_of_a_kind,
    },
    Rule {
        kind: HandKind::FullHouse,
        evaluate: full_house,
    },
    Rule {
        kind: HandKind::Flush,
        evaluate: flush,
    },
    Rule {
        kind: HandKind::Straight,
        evaluate: straight,
    },
    Rule {
        kind: HandKind::ThreeOfAKind,
        evaluate: three_of_a_kind,
    },
    Rule {
        kind: HandKind::TwoPair,
        evaluate: two_pair,
    },
    Rule {
        kind: HandKind::OnePair,
        evaluate: one_pair,
    },
];

/// Kinds in the order they are tried.
pub fn rule_order() -> Vec<HandKind> {
    RULES
        .iter()
        .map(|r| r.kind)
        .chain(std::iter::once(HandKind::HighCard))
        .collect()
}

/// Classifies exactly five cards.
pub fn classify(cards: &[Card]) -> Result<HandResult, GameError> {
    if cards.len() != HAND_SIZE {
        return Err(GameError::InvalidHandSize {
            actual: cards.len(),
        });
    }
    let profile = HandProfile::new(cards);
    let result = RULES
        .iter()
        .find_map(|rule| {
            (rule.evaluate)(&profile).map(|(score, detail)| HandResult {
                kind: rule.kind,
                score,
                detail,
            })
        })
        .unwrap_or_else(|| HandResult {
            kind: HandKind::HighCard,
            score: 10,
            detail: HandDetail::HighCard {
                rank: profile.high_card(),
            },
        });
    Ok(result)
}

/// Every rule that would match, in priority order, without short-circuiting.
pub fn matching_kinds(cards: &[Card]) -> Result<Vec<HandKind>, GameError> {
    if cards.len() != HAND_SIZE {
        return Err(GameError::InvalidHandSize {
            actual: cards.len(),
        });
    }
    let profile = HandProfile::new(cards);
    Ok(RULES
        .iter()
        .filter(|rule| (rule.evaluate)(&profile).is_some())
        .map(|rule| rule.kind)
        .chain(std::iter::once(HandKind::HighCard))
        .collect())
}

fn cloud_master(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let suit = p.uniform_suit?;
    if !p.is_royal_set() {
        return None;
    }
    let score = 15_000 * suit_multiplier_tenths(suit) / 10;
    Some((
        score,
        HandDetail::SuitMultiplier {
            suit,
            multiplier: suit_multiplier(suit),
        },
    ))
}

fn legendary_flush(p: &HandProfile) -> Option<(u32, HandDetail)> {
    (p.uniform_suit == Some(Suit::RAREST) && p.straight).then_some((
        10_000,
        HandDetail::Suit {
            suit: Suit::RAREST,
        },
    ))
}

fn cloud_architect(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let covered = ARCHITECT_CATEGORIES.iter().all(|&c| p.has(c));
    (p.distinct_categories() >= 5 && covered).then(|| {
        (
            3000,
            HandDetail::Categories {
                categories: ARCHITECT_CATEGORIES.to_vec(),
            },
        )
    })
}

fn multi_cloud(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let suits = p.distinct_suits();
    (suits.len() == 5).then_some((2200, HandDetail::Suits { suits }))
}

fn security_suite(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let security = p.count(Category::Security);
    let governance = p.count(Category::ManagementGovernance);
    (security >= 3 || (security >= 2 && governance >= 1)).then_some((
        1500,
        HandDetail::Focus {
            category: Category::Security,
        },
    ))
}

fn serverless_combo(p: &HandProfile) -> Option<(u32, HandDetail)> {
    combo(
        p,
        &[Category::Compute, Category::AppIntegration, Category::Database],
        1300,
    )
}

fn iot_ecosystem(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let paired = p.has(Category::Analytics) || p.has(Category::ArtificialIntelligence);
    (p.has(Category::InternetOfThings) && paired).then_some((
        1000,
        HandDetail::Focus {
            category: Category::InternetOfThings,
        },
    ))
}

fn cloud_trio(p: &HandProfile) -> Option<(u32, HandDetail)> {
    combo(
        p,
        &[Category::Compute, Category::Storage, Category::Database],
        800,
    )
}

fn data_pipeline(p: &HandProfile) -> Option<(u32, HandDetail)> {
    (p.count(Category::Analytics) >= 2 && p.has(Category::Storage)).then(|| {
        (
            600,
            HandDetail::Categories {
                categories: vec![Category::Analytics, Category::Storage],
            },
        )
    })
}

fn devops_suite(p: &HandProfile) -> Option<(u32, HandDetail)> {
    (p.count(Category::DeveloperTools) >= 2 && p.has(Category::ManagementGovernance)).then(|| {
        (
            500,
            HandDetail::Categories {
                categories: vec![Category::DeveloperTools, Category::ManagementGovernance],
            },
        )
    })
}

fn combo(p: &HandProfile, needed: &[Category], score: u32) -> Option<(u32, HandDetail)> {
    needed.iter().all(|&c| p.has(c)).then(|| {
        (
            score,
            HandDetail::Categories {
                categories: needed.to_vec(),
            },
        )
    })
}

fn straight_flush(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let suit = p.uniform_suit?;
    if !p.straight {
        return None;
    }
    let bonus = flush_bonus(suit);
    Some((5000 + bonus, HandDetail::FlushBonus { suit, bonus }))
}

fn four_of_a_kind(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let rank = p.ranks_with_count(4).first().copied()?;
    Some((2500, HandDetail::Rank { rank }))
}

fn full_house(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let three = p.ranks_with_count(3).first().copied()?;
    let pair = p.ranks_with_count(2).first().copied()?;
    Some((1200, HandDetail::FullHouse { three, pair }))
}

fn flush(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let suit = p.uniform_suit?;
    Some((flush_bonus(suit), HandDetail::Suit { suit }))
}

fn straight(p: &HandProfile) -> Option<(u32, HandDetail)> {
    p.straight.then(|| {
        (
            400,
            HandDetail::HighCard {
                rank: p.high_card(),
            },
        )
    })
}

fn three_of_a_kind(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let rank = p.ranks_with_count(3).first().copied()?;
    Some((200, HandDetail::Rank { rank }))
}

fn two_pair(p: &HandProfile) -> Option<(u32, HandDetail)> {
    match p.ranks_with_count(2).as_slice() {
        [high, low] => Some((
            100,
            HandDetail::TwoPair {
                high: *high,
                low: *low,
            },
        )),
        _ => None,
    }
}

fn one_pair(p: &HandProfile) -> Option<(u32, HandDetail)> {
    let rank = p.ranks_with_count(2).first().copied()?;
    Some((50, HandDetail::Rank { rank }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn hand(spec: &[(Rank, Suit, Category)]) -> Vec<Card> {
        spec.iter()
            .enumerate()
            .map(|(i, &(r, s, c))| Card::new(CardId(i as u16), r, s, c, "svc"))
            .collect()
    }

    #[test]
    fn priority_table_lists_special_hands_first() {
        let order = rule_order();
        assert_eq!(order.len(), 19);
        assert_eq!(order[0], HandKind::CloudMaster);
        assert_eq!(order[9], HandKind::DevOpsSuite);
        assert_eq!(order[10], HandKind::StraightFlush);
        assert_eq!(order[18], HandKind::HighCard);
        assert!(order[..10].iter().all(|k| k.is_special()));
        assert!(order[10..].iter().all(|k| !k.is_special()));
    }

    #[test]
    fn reference_table_is_strongest_first() {
        for w in HandKind::ALL.windows(2) {
            assert!(w[0].rank() > w[1].rank(), "{} vs {}", w[0], w[1]);
        }
    }

    #[test]
    fn straight_rule_is_ace_low_only() {
        use Rank::*;
        assert!(is_straight(&[Ace, Two, Three, Four, Five]));
        assert!(is_straight(&[Nine, King, Jack, Ten, Queen]));
        assert!(!is_straight(&[Ten, Jack, Queen, King, Ace]));
        assert!(!is_straight(&[Two, Two, Three, Four, Five]));
        assert!(!is_straight(&[Two, Three, Four, Five]));
    }

    #[test]
    fn multiplier_table_scales_top_tier() {
        assert_eq!(15_000 * suit_multiplier_tenths(Suit::Purple) / 10, 19_500);
        assert_eq!(15_000 * suit_multiplier_tenths(Suit::Blue) / 10, 18_000);
        assert_eq!(suit_multiplier(Suit::Yellow), 2.5);
    }

    #[test]
    fn high_card_reports_highest_ordinal() {
        use Category::Unknown as U;
        let cards = hand(&[
            (Rank::Ace, Suit::Gray, U),
            (Rank::Three, Suit::Blue, U),
            (Rank::Eight, Suit::Gray, U),
            (Rank::King, Suit::Blue, U),
            (Rank::Six, Suit::Gray, U),
        ]);
        let r = classify(&cards).unwrap();
        assert_eq!(r.kind, HandKind::HighCard);
        assert_eq!(r.score, 10);
        assert_eq!(r.detail, HandDetail::HighCard { rank: Rank::King });
    }

    #[test]
    fn detail_display_is_human_readable() {
        let d = HandDetail::SuitMultiplier {
            suit: Suit::Green,
            multiplier: 3.0,
        };
        assert_eq!(d.to_string(), "Green x3.0");
        let d = HandDetail::Categories {
            categories: vec![Category::Compute, Category::AppIntegration],
        };
        assert_eq!(d.to_string(), "Compute + Integration");
    }

    #[test]
    fn strength_orders_kinds_before_scores() {
        assert_eq!(strength(HandKind::DevOpsSuite, 500), 11_500);
        assert_eq!(strength(HandKind::StraightFlush, 5500), 14_500);
        assert!(strength(HandKind::OnePair, 50) > strength(HandKind::HighCard, 10));
        assert_eq!(strength(HandKind::CloudMaster, 45_000), 65_000);
    }
}
