use draw_poker::cards::{parse_cards, Card, Rank::*, Suit::*};
use draw_poker::evaluator::{classify, evaluate, Category, HandScore};
use draw_poker::hand::Hand;
use draw_poker::showdown::{decide, Outcome};

fn score(s: &str) -> HandScore {
    classify(&parse_cards(s).expect("valid cards")).expect("valid hand")
}

#[test]
fn royal_flush_beats_king_high_straight_flush() {
    let royal = score("10h Jh Qh Kh Ah");
    let sf = score("9s 10s Js Qs Ks");
    assert_eq!(royal.category(), Category::RoyalFlush);
    assert_eq!(sf.category(), Category::StraightFlush);
    assert_eq!(sf.key(), vec![13]);
    assert_eq!(decide(&royal, &sf), Outcome::PlayerAWins);
}

#[test]
fn quad_fours_beat_kings_full() {
    let quads = evaluate(
        &Hand::try_new([
            Card::new(Four, Spades),
            Card::new(Four, Hearts),
            Card::new(Four, Diamonds),
            Card::new(Four, Clubs),
            Card::new(Two, Spades),
        ])
        .unwrap(),
    );
    let boat = score("Ks Kh Kd Qs Qh");
    assert_eq!(quads.key(), vec![4, 2]);
    assert_eq!(boat.key(), vec![13, 12]);
    assert_eq!(decide(&quads, &boat), Outcome::PlayerAWins);
}

#[test]
fn lower_pair_decides_two_pair() {
    let a = score("Kh Ks 10d 10c 2s");
    let b = score("Kd Kc Jd Jc Ad");
    assert_eq!(a.key(), vec![13, 10, 2]);
    assert_eq!(b.key(), vec![13, 11, 14]);
    assert_eq!(decide(&a, &b), Outcome::PlayerBWins);
}

#[test]
fn two_pair_kicker_decides_after_equal_pairs() {
    let a = score("Kh Ks 10d 10c As");
    let b = score("Kd Kc 10h 10s 9c");
    assert_eq!(decide(&a, &b), Outcome::PlayerAWins);
}

#[test]
fn royal_flushes_in_different_suits_draw() {
    let hearts = score("10h Jh Qh Kh Ah");
    let diamonds = score("10d Jd Qd Kd Ad");
    assert_eq!(decide(&hearts, &diamonds), Outcome::Draw);
}

#[test]
fn high_card_top_kicker_decides() {
    let a = score("2h 5d 9s Jc As");
    let b = score("2d 5c 9h Js Kh");
    assert_eq!(a.key(), vec![14, 11, 9, 5, 2]);
    assert_eq!(b.key(), vec![13, 11, 9, 5, 2]);
    assert_eq!(decide(&a, &b), Outcome::PlayerAWins);
}

#[test]
fn trips_compare_trip_rank_before_kickers() {
    let a = score("9h 9d 9s 3c 2d");
    let b = score("8h 8d 8s Ac Kd");
    assert_eq!(decide(&a, &b), Outcome::PlayerAWins);
}

#[test]
fn flush_compares_every_card() {
    let a = score("Ah Jh 9h 5h 3h");
    let b = score("As Js 9s 5s 2s");
    assert_eq!(decide(&a, &b), Outcome::PlayerAWins);
}

#[test]
fn straights_compare_top_card() {
    let a = score("5s 6h 7d 8c 9s");
    let b = score("6d 7c 8h 9d 10c");
    assert_eq!(decide(&a, &b), Outcome::PlayerBWins);
    let c = score("5h 6d 7s 8d 9c");
    assert_eq!(decide(&a, &c), Outcome::Draw);
}
