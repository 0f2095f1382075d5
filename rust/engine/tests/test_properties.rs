use std::collections::HashSet;

use proptest::prelude::*;

use cloudpoker_engine::cards::{all_suits, Card, CardId, Category, Rank};
use cloudpoker_engine::catalog::Catalog;
use cloudpoker_engine::code::{pseudo_score, validate, CODE_WORDS};
use cloudpoker_engine::deck::Deck;
use cloudpoker_engine::hand::{classify, matching_kinds, suit_multiplier_tenths, HandKind};
use cloudpoker_engine::session::{Advance, Session};

proptest! {
    #[test]
    fn classification_takes_first_matching_rule(seed in any::<u64>(), skip in 0usize..500) {
        let mut deck = Deck::new_with_seed(Catalog::standard(), seed);
        deck.deal(skip).unwrap();
        let hand = deck.deal(5).unwrap();
        let result = classify(&hand).unwrap();
        let matches = matching_kinds(&hand).unwrap();
        prop_assert_eq!(matches[0], result.kind);
        prop_assert_eq!(*matches.last().unwrap(), HandKind::HighCard);
        prop_assert!(result.score >= 10);
    }

    #[test]
    fn classification_ignores_card_order(seed in any::<u64>()) {
        let mut deck = Deck::new_with_seed(Catalog::standard(), seed);
        let mut hand = deck.deal(5).unwrap();
        let a = classify(&hand).unwrap();
        hand.reverse();
        hand.swap(0, 2);
        let b = classify(&hand).unwrap();
        prop_assert_eq!(a.kind, b.kind);
        prop_assert_eq!(a.score, b.score);
    }

    #[test]
    fn random_play_conserves_cards(seed in any::<u64>(), picks in proptest::collection::vec(0usize..5, 0..4)) {
        let catalog = Catalog::standard();
        let size = catalog.len();
        let mut s = Session::new(catalog, seed);
        s.start_round().unwrap();
        loop {
            s.exchange(&picks).unwrap();
            let ids: HashSet<CardId> = s.hand().iter().map(|c| c.id).collect();
            prop_assert_eq!(ids.len(), 5);
            prop_assert_eq!(s.deck().remaining() + s.cards_in_play(), size);
            s.stand().unwrap();
            if let Advance::Complete(code) = s.advance_round().unwrap() {
                prop_assert!(validate(code.as_str()));
                break;
            }
        }
        let sum: u32 = s.rounds().iter().map(|r| r.score).sum();
        prop_assert_eq!(s.total_score(), sum);
    }

    #[test]
    fn generated_shape_always_validates(w1 in 0usize..8, w2 in 0usize..8, n in 0u32..10_000) {
        let code = format!("{}-{}-{:04}", CODE_WORDS[w1], CODE_WORDS[w2], n);
        prop_assert!(validate(&code));
        prop_assert!((1000..6000).contains(&pseudo_score(&code)));
    }

    #[test]
    fn short_or_long_suffix_never_validates(n in 0u32..1000, m in 10_000u32..1_000_000) {
        let short = format!("CLOUD-STACK-{}", n);
        let long = format!("CLOUD-STACK-{}", m);
        prop_assert!(!validate(&short));
        prop_assert!(!validate(&long));
    }

    #[test]
    fn royal_of_any_suit_scales_with_multiplier(
        suit in 0usize..7,
        cats in proptest::collection::vec(0usize..Category::COUNT, 5),
    ) {
        let suit = all_suits()[suit];
        let ranks = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
        let hand: Vec<Card> = ranks
            .iter()
            .zip(&cats)
            .enumerate()
            .map(|(i, (&r, &c))| Card::new(CardId(i as u16), r, suit, Category::ALL[c], "x"))
            .collect();
        let result = classify(&hand).unwrap();
        prop_assert_eq!(result.kind, HandKind::CloudMaster);
        prop_assert_eq!(result.score, 15_000 * suit_multiplier_tenths(suit) / 10);
    }
}
