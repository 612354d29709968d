use big_two::cards::parse_cards;
use big_two::classifier::classify;
use big_two::comparator::{beats, compare};
use big_two::hand::{Hand, Shape};
use std::cmp::Ordering;

fn hand(s: &str) -> Hand {
    classify(0, &parse_cards(s).unwrap()).unwrap()
}

#[test]
fn full_houses_compare_by_the_triple_not_the_pair() {
    // pair of twos outranks pair of threes, but the eights decide
    let eights = hand("8d 8c 8h 3s 3d");
    let sevens = hand("7d 7c 7h 2s 2d");
    assert_eq!(eights.shape(), Shape::FullHouse);
    assert!(beats(&eights, &sevens));
    assert!(!beats(&sevens, &eights));
}

#[test]
fn full_house_of_twos_beats_full_house_of_sevens() {
    let twos = hand("2d 2c 2h Ad Ac");
    let sevens = hand("7d 7c 7s Kd Kc");
    assert!(beats(&twos, &sevens));
}

#[test]
fn five_card_hierarchy_ignores_card_ranks() {
    // Each shape uses cards far stronger than the next shape up.
    let ladder = [
        hand("Jd Qc Kh As 2s"),
        hand("3c 5c 7c 9c Jc"),
        hand("4d 4c 4h 3s 3d"),
        hand("5d 5c 5h 5s 3h"),
        hand("6d 7d 8d 9d Td"),
    ];
    let shapes: Vec<Shape> = ladder.iter().map(|h| h.shape()).collect();
    assert_eq!(
        shapes,
        [Shape::Straight, Shape::Flush, Shape::FullHouse, Shape::Quad, Shape::StraightFlush]
    );
    for (i, low) in ladder.iter().enumerate() {
        for high in &ladder[i + 1..] {
            assert!(beats(high, low), "{high} should beat {low}");
            assert!(!beats(low, high), "{low} should not beat {high}");
        }
    }
}

#[test]
fn same_shape_five_card_hands_use_the_top_card() {
    assert!(beats(&hand("4d 5c 6h 7s 8s"), &hand("4s 5s 6d 7d 8h")));
    assert!(beats(&hand("4h 5h 6h 7h 8h"), &hand("4c 5c 6c 7c 8c")));
    assert!(beats(&hand("Kd Kc Kh Ks 3d"), &hand("Qd Qc Qh Qs 2s")));
}

#[test]
fn quad_kicker_never_matters() {
    let low_kicker = hand("9d 9c 9h 9s 3d");
    let high_kicker = hand("8d 8c 8h 8s 2s");
    assert!(beats(&low_kicker, &high_kicker));
}

#[test]
fn mixed_cardinality_is_incomparable() {
    assert_eq!(compare(&hand("2s"), &hand("3d 3c")), None);
    assert_eq!(compare(&hand("3d 3c 3h"), &hand("4d 4c 4h 4s 5d")), None);
    assert_eq!(compare(&hand("3d"), &hand("3d")), Some(Ordering::Equal));
}
