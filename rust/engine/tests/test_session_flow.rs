use chrono::{TimeZone, Utc};

use cloudpoker_engine::catalog::Catalog;
use cloudpoker_engine::code::validate;
use cloudpoker_engine::errors::GameError;
use cloudpoker_engine::ranking::RankingEntry;
use cloudpoker_engine::session::{
    Advance, ExchangeOutcome, Phase, Session, DRAWS_PER_ROUND, MAX_ROUNDS,
};

fn play_to_end(session: &mut Session) -> Advance {
    let ts = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    session.start_round().unwrap();
    loop {
        session.stand().unwrap();
        match session.advance_round_at(ts).unwrap() {
            Advance::NextRound(_) => continue,
            done => return done,
        }
    }
}

#[test]
fn five_rounds_then_complete() {
    let mut s = Session::new(Catalog::standard(), 11);
    s.start_round().unwrap();
    for round in 1..=MAX_ROUNDS {
        assert_eq!(s.current_round(), round);
        assert_eq!(s.rounds().len(), usize::from(round) - 1);
        s.stand().unwrap();
        let next = s.advance_round().unwrap();
        if round < MAX_ROUNDS {
            assert_eq!(next, Advance::NextRound(round + 1));
            assert_eq!(s.phase(), Phase::AwaitingAction);
            assert_eq!(s.draws_remaining(), DRAWS_PER_ROUND);
        } else {
            assert!(matches!(next, Advance::Complete(_)));
        }
    }
    assert_eq!(s.phase(), Phase::SessionComplete);
    assert_eq!(s.rounds().len(), usize::from(MAX_ROUNDS));
}

#[test]
fn total_score_is_sum_of_rounds() {
    let mut s = Session::new(Catalog::standard(), 99);
    play_to_end(&mut s);
    let sum: u32 = s.rounds().iter().map(|r| r.score).sum();
    assert_eq!(s.total_score(), sum);
    assert!(s.total_score() >= 50, "five rounds score at least 10 each");
}

#[test]
fn exchange_uses_up_draws_then_stands_only() {
    let mut s = Session::new(Catalog::standard(), 5);
    s.start_round().unwrap();
    let before = s.hand().to_vec();

    let out = s.exchange(&[0, 4]).unwrap();
    assert_eq!(
        out,
        ExchangeOutcome::Exchanged {
            replaced: 2,
            draws_remaining: 1
        }
    );
    assert_eq!(s.hand()[1..4], before[1..4]);
    assert_eq!(s.hand().len(), 5);

    s.exchange(&[1]).unwrap();
    assert_eq!(s.phase(), Phase::Standing);
    assert_eq!(s.draws_remaining(), 0);

    let hand = s.hand().to_vec();
    assert_eq!(
        s.exchange(&[2]),
        Err(GameError::InvalidTransition {
            action: "exchange",
            phase: Phase::Standing
        })
    );
    assert_eq!(s.hand(), hand.as_slice());
    assert!(s.stand().is_ok());
}

#[test]
fn empty_exchange_keeps_the_draw() {
    let mut s = Session::new(Catalog::standard(), 5);
    s.start_round().unwrap();
    assert_eq!(s.exchange(&[]).unwrap(), ExchangeOutcome::Unchanged);
    assert_eq!(s.draws_remaining(), DRAWS_PER_ROUND);
    assert_eq!(s.phase(), Phase::AwaitingAction);
}

#[test]
fn cards_are_conserved_across_rounds_and_deck_replacement() {
    let catalog = Catalog::standard();
    let size = catalog.len();
    let mut s = Session::new(catalog, 2024);
    for _ in 0..40 {
        s.new_game();
        s.start_round().unwrap();
        loop {
            s.exchange(&[0, 1, 2]).unwrap();
            assert_eq!(s.deck().remaining() + s.cards_in_play(), size);
            s.stand().unwrap();
            if let Advance::Complete(_) = s.advance_round().unwrap() {
                break;
            }
            assert_eq!(s.deck().remaining() + s.cards_in_play(), size);
        }
    }
}

#[test]
fn tiny_catalog_replenishes_between_rounds() {
    let json = r#"[
        {"rank": "A", "suit": "Gray"}, {"rank": "2", "suit": "Gray"},
        {"rank": "3", "suit": "Gray"}, {"rank": "4", "suit": "Gray"},
        {"rank": "5", "suit": "Gray"}, {"rank": "6", "suit": "Gray"},
        {"rank": "7", "suit": "Gray"}
    ]"#;
    let mut s = Session::new(Catalog::from_json(json).unwrap(), 1);
    s.start_round().unwrap();
    loop {
        s.exchange(&[0, 1, 2]).unwrap();
        assert_eq!(s.deck().remaining() + s.cards_in_play(), 7);
        s.stand().unwrap();
        if let Advance::Complete(_) = s.advance_round().unwrap() {
            break;
        }
        assert_eq!(s.deck().remaining() + s.cards_in_play(), 7);
    }
    assert_eq!(s.rounds().len(), 5);
}

#[test]
fn game_code_is_generated_once() {
    let mut s = Session::new(Catalog::standard(), 8);
    let first = match play_to_end(&mut s) {
        Advance::Complete(code) => code,
        other => panic!("unexpected {:?}", other),
    };
    assert!(validate(first.as_str()));
    let later = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(s.advance_round_at(later).unwrap(), Advance::Complete(first.clone()));
    assert_eq!(s.game_code(), Some(&first));
    assert!(matches!(
        s.stand(),
        Err(GameError::InvalidTransition { .. })
    ));
}

#[test]
fn same_seed_and_choices_give_same_rounds() {
    let mut a = Session::new(Catalog::standard(), 31337);
    let mut b = Session::new(Catalog::standard(), 31337);
    play_to_end(&mut a);
    play_to_end(&mut b);
    assert_eq!(a.rounds(), b.rounds());
    assert_eq!(a.game_code(), b.game_code());
}

#[test]
fn ranking_entry_requires_finished_session() {
    let mut s = Session::new(Catalog::standard(), 4);
    s.start_round().unwrap();
    assert!(RankingEntry::from_session(&s, Utc::now()).is_err());
    s.stand().unwrap();
    loop {
        match s.advance_round().unwrap() {
            Advance::NextRound(_) => {
                s.stand().unwrap();
            }
            Advance::Complete(_) => break,
        }
    }
    let entry = RankingEntry::from_session(&s, Utc::now()).unwrap();
    assert_eq!(entry.total_score, s.total_score());
    assert_eq!(entry.rounds.len(), 5);
    assert!(!entry.loaded);
    assert_eq!(Some(entry.code.as_str()), s.game_code().map(|c| c.as_str()));
}
