use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One of the seven color suits of the deck.
/// Declared from the rarest suit to the most common one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Rarest suit (24 cards in the standard catalog)
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Blue,
    /// Most common suit (175 cards in the standard catalog)
    Gray,
}

impl Suit {
    pub const COUNT: usize = 7;

    /// The single rarest suit, which unlocks the Legendary Flush.
    pub const RAREST: Suit = Suit::Green;

    pub fn name(self) -> &'static str {
        match self {
            Suit::Green => "Green",
            Suit::Yellow => "Yellow",
            Suit::Orange => "Orange",
            Suit::Red => "Red",
            Suit::Purple => "Purple",
            Suit::Blue => "Blue",
            Suit::Gray => "Gray",
        }
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        all_suits()
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank in table order `A, 2..10, J, Q, K`.
///
/// The discriminant is the ordinal used for straight detection, so the ace
/// always sits *below* the two.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 0,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    pub const COUNT: usize = 13;

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        let symbol = symbol.trim();
        all_ranks()
            .into_iter()
            .find(|r| r.symbol().eq_ignore_ascii_case(symbol))
    }

    pub fn from_ordinal(v: u8) -> Option<Rank> {
        all_ranks().get(v as usize).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Thematic service category, orthogonal to suit and rank.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum Category {
    Compute,
    Storage,
    Database,
    #[serde(rename = "Networking-Content-Delivery")]
    Networking,
    #[serde(rename = "Security-Identity-Compliance")]
    Security,
    Analytics,
    #[serde(rename = "Artificial-Intelligence")]
    ArtificialIntelligence,
    #[serde(rename = "App-Integration")]
    AppIntegration,
    #[serde(rename = "Business-Applications")]
    BusinessApplications,
    #[serde(rename = "Management-Governance")]
    ManagementGovernance,
    #[serde(rename = "Developer-Tools")]
    DeveloperTools,
    #[serde(rename = "Migration-Modernization")]
    Migration,
    #[serde(rename = "Internet-of-Things")]
    InternetOfThings,
    #[serde(rename = "Media-Services")]
    MediaServices,
    Containers,
    #[serde(rename = "Cloud-Financial-Management")]
    FinancialManagement,
    #[serde(rename = "Customer-Enablement")]
    CustomerEnablement,
    #[serde(rename = "End-User-Computing")]
    EndUserComputing,
    #[serde(rename = "Front-End-Web-Mobile")]
    FrontEnd,
    Games,
    #[serde(rename = "General-Icons")]
    General,
    Blockchain,
    #[serde(rename = "Quantum-Technologies")]
    Quantum,
    Robotics,
    Satellite,
    /// Cards whose catalog row carries no recognizable category
    #[default]
    Unknown,
}

impl Category {
    pub const COUNT: usize = 26;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Compute,
        Category::Storage,
        Category::Database,
        Category::Networking,
        Category::Security,
        Category::Analytics,
        Category::ArtificialIntelligence,
        Category::AppIntegration,
        Category::BusinessApplications,
        Category::ManagementGovernance,
        Category::DeveloperTools,
        Category::Migration,
        Category::InternetOfThings,
        Category::MediaServices,
        Category::Containers,
        Category::FinancialManagement,
        Category::CustomerEnablement,
        Category::EndUserComputing,
        Category::FrontEnd,
        Category::Games,
        Category::General,
        Category::Blockchain,
        Category::Quantum,
        Category::Robotics,
        Category::Satellite,
        Category::Unknown,
    ];

    /// Full tag as written in catalog files.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Compute => "Compute",
            Category::Storage => "Storage",
            Category::Database => "Database",
            Category::Networking => "Networking-Content-Delivery",
            Category::Security => "Security-Identity-Compliance",
            Category::Analytics => "Analytics",
            Category::ArtificialIntelligence => "Artificial-Intelligence",
            Category::AppIntegration => "App-Integration",
            Category::BusinessApplications => "Business-Applications",
            Category::ManagementGovernance => "Management-Governance",
            Category::DeveloperTools => "Developer-Tools",
            Category::Migration => "Migration-Modernization",
            Category::InternetOfThings => "Internet-of-Things",
            Category::MediaServices => "Media-Services",
            Category::Containers => "Containers",
            Category::FinancialManagement => "Cloud-Financial-Management",
            Category::CustomerEnablement => "Customer-Enablement",
            Category::EndUserComputing => "End-User-Computing",
            Category::FrontEnd => "Front-End-Web-Mobile",
            Category::Games => "Games",
            Category::General => "General-Icons",
            Category::Blockchain => "Blockchain",
            Category::Quantum => "Quantum-Technologies",
            Category::Robotics => "Robotics",
            Category::Satellite => "Satellite",
            Category::Unknown => "Unknown",
        }
    }

    /// Short label for card faces.
    pub fn short_name(self) -> &'static str {
        match self {
            Category::Networking => "Network",
            Category::Security => "Security",
            Category::ArtificialIntelligence => "AI/ML",
            Category::AppIntegration => "Integration",
            Category::BusinessApplications => "Business",
            Category::ManagementGovernance => "Management",
            Category::DeveloperTools => "DevTools",
            Category::Migration => "Migration",
            Category::InternetOfThings => "IoT",
            Category::MediaServices => "Media",
            Category::Containers => "Container",
            Category::FinancialManagement => "Cost",
            Category::CustomerEnablement => "Support",
            Category::EndUserComputing => "EndUser",
            Category::FrontEnd => "Frontend",
            Category::General => "General",
            Category::Quantum => "Quantum",
            other => other.tag(),
        }
    }

    /// Parses a catalog tag; anything unrecognized maps to [`Category::Unknown`].
    pub fn from_tag(tag: &str) -> Category {
        let tag = tag.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(tag))
            .unwrap_or(Category::Unknown)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Position of a card in the catalog it was created from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub u16);

/// A single deck member.
///
/// Equality and hashing go through [`CardId`] only: two cards with the same
/// rank, suit and category are still distinct cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub category: Category,
    /// Service name printed on the card face
    pub label: String,
}

impl Card {
    pub fn new(id: CardId, rank: Rank, suit: Suit, category: Category, label: impl Into<String>) -> Self {
        Self {
            id,
            rank,
            suit,
            category,
            label: label.into(),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} ({})", self.rank, self.suit, self.label)
    }
}

pub fn all_suits() -> [Suit; 7] {
    [
        Suit::Green,
        Suit::Yellow,
        Suit::Orange,
        Suit::Red,
        Suit::Purple,
        Suit::Blue,
        Suit::Gray,
    ]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}
