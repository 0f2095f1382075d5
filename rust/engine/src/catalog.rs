//! Card catalogs that seed a [`Deck`](crate::deck::Deck).
//!
//! A catalog is an ordered list of card identities. It either comes from an
//! external file (a JSON array of [`CardSpec`] rows) or from
//! [`Catalog::standard`], the built-in themed deck.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, all_suits, Card, CardId, Category, Rank, Suit};
use crate::errors::GameError;
use crate::session::HAND_SIZE;

/// One catalog row as it appears in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub rank: String,
    pub suit: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "service_name")]
    pub label: String,
}

/// Number of cards each suit contributes to the standard catalog.
pub fn suit_card_count(suit: Suit) -> usize {
    match suit {
        Suit::Green => 24,
        Suit::Yellow => 27,
        Suit::Orange => 30,
        Suit::Red => 75,
        Suit::Purple => 82,
        Suit::Blue => 114,
        Suit::Gray => 175,
    }
}

fn suit_categories(suit: Suit) -> &'static [Category] {
    use Category::*;
    match suit {
        Suit::Green => &[Compute, Containers, EndUserComputing],
        Suit::Yellow => &[Security, FinancialManagement],
        Suit::Orange => &[Analytics, InternetOfThings, MediaServices],
        Suit::Red => &[
            Security,
            ManagementGovernance,
            Networking,
            Migration,
            CustomerEnablement,
        ],
        Suit::Purple => &[
            ArtificialIntelligence,
            AppIntegration,
            DeveloperTools,
            Quantum,
            Games,
        ],
        Suit::Blue => &[
            Storage,
            Database,
            Networking,
            FrontEnd,
            BusinessApplications,
            Blockchain,
        ],
        Suit::Gray => &[
            ManagementGovernance,
            DeveloperTools,
            General,
            Compute,
            Storage,
            Database,
            Analytics,
            Robotics,
            Satellite,
        ],
    }
}

/// Immutable, shareable list of the cards a deck is built from.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Arc<[Card]>,
}

impl Catalog {
    /// Builds a catalog from parsed rows, assigning identities in row order.
    pub fn from_specs(specs: &[CardSpec]) -> Result<Self, GameError> {
        if specs.len() < HAND_SIZE {
            return Err(GameError::InvalidCatalog(format!(
                "catalog has {} cards, need at least {}",
                specs.len(),
                HAND_SIZE
            )));
        }
        if specs.len() > u16::MAX as usize {
            return Err(GameError::InvalidCatalog(format!(
                "catalog has {} cards, at most {} supported",
                specs.len(),
                u16::MAX
            )));
        }
        let mut cards = Vec::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            let rank = Rank::from_symbol(&spec.rank).ok_or_else(|| {
                GameError::InvalidCatalog(format!("row {}: unknown rank '{}'", i + 1, spec.rank))
            })?;
            let suit = Suit::from_name(&spec.suit).ok_or_else(|| {
                GameError::InvalidCatalog(format!("row {}: unknown suit '{}'", i + 1, spec.suit))
            })?;
            let category = spec
                .category
                .as_deref()
                .map(Category::from_tag)
                .unwrap_or_default();
            cards.push(Card::new(
                CardId(i as u16),
                rank,
                suit,
                category,
                spec.label.clone(),
            ));
        }
        Ok(Self {
            cards: cards.into(),
        })
    }

    /// Parses a JSON array of [`CardSpec`] rows.
    pub fn from_json(s: &str) -> Result<Self, GameError> {
        let specs: Vec<CardSpec> =
            serde_json::from_str(s).map_err(|e| GameError::InvalidCatalog(e.to_string()))?;
        Self::from_specs(&specs)
    }

    /// The built-in 527-card themed deck.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(527);
        let ranks = all_ranks();
        for suit in all_suits() {
            let categories = suit_categories(suit);
            for n in 0..suit_card_count(suit) {
                let category = categories[n % categories.len()];
                let id = CardId(cards.len() as u16);
                let label = format!("{} {}", category.short_name(), n / categories.len() + 1);
                cards.push(Card::new(id, ranks[n % ranks.len()], suit, category, label));
            }
        }
        Self {
            cards: cards.into(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn spec(rank: &str, suit: &str, category: Option<&str>) -> CardSpec {
        CardSpec {
            rank: rank.into(),
            suit: suit.into(),
            category: category.map(str::to_string),
            label: "svc".into(),
        }
    }

    #[test]
    fn standard_catalog_follows_suit_rarity() {
        let cat = Catalog::standard();
        assert_eq!(cat.len(), 527);
        for suit in all_suits() {
            let n = cat.cards().iter().filter(|c| c.suit == suit).count();
            assert_eq!(n, suit_card_count(suit), "suit {}", suit);
        }
        let ids: HashSet<CardId> = cat.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 527);
    }

    #[test]
    fn missing_category_becomes_unknown() {
        let rows = vec![
            spec("A", "Blue", None),
            spec("2", "Blue", Some("Storage")),
            spec("3", "Blue", Some("Something-Else")),
            spec("4", "Blue", Some("Database")),
            spec("5", "Blue", Some("Compute")),
        ];
        let cat = Catalog::from_specs(&rows).unwrap();
        assert_eq!(cat.cards()[0].category, Category::Unknown);
        assert_eq!(cat.cards()[1].category, Category::Storage);
        assert_eq!(cat.cards()[2].category, Category::Unknown);
    }

    #[test]
    fn rejects_bad_rows_and_tiny_catalogs() {
        let rows = vec![spec("A", "Blue", None); 4];
        assert!(matches!(
            Catalog::from_specs(&rows),
            Err(GameError::InvalidCatalog(_))
        ));

        let mut rows = vec![spec("A", "Blue", None); 5];
        rows[3] = spec("1", "Blue", None);
        let err = Catalog::from_specs(&rows).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidCatalog("row 4: unknown rank '1'".into())
        );
    }

    #[test]
    fn parses_json_rows_with_service_name_alias() {
        let json = r#"[
            {"rank": "A", "suit": "Green", "category": "Compute", "service_name": "Lambda"},
            {"rank": "K", "suit": "Green", "category": "Compute", "label": "EC2"},
            {"rank": "Q", "suit": "Green"},
            {"rank": "J", "suit": "Green"},
            {"rank": "10", "suit": "Green"}
        ]"#;
        let cat = Catalog::from_json(json).unwrap();
        assert_eq!(cat.cards()[0].label, "Lambda");
        assert_eq!(cat.cards()[1].label, "EC2");
        assert_eq!(cat.cards()[4].rank, Rank::Ten);
    }
}
