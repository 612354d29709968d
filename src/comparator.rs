//! The "beats" relation between hands.

use crate::hand::Hand;
use core::cmp::Ordering;

/// Order two hands of equal cardinality.
///
/// Returns `None` when the card counts differ; such hands are never
/// comparable. Singles, pairs and triples compare by top card. Five-card
/// hands compare by shape first (Straight < Flush < FullHouse < Quad <
/// StraightFlush), then by representative card.
pub fn compare(a: &Hand, b: &Hand) -> Option<Ordering> {
    if a.len() != b.len() {
        return None;
    }
    match (a.shape().five_card_rank(), b.shape().five_card_rank()) {
        (Some(ra), Some(rb)) => {
            Some(ra.cmp(&rb).then_with(|| a.representative().cmp(&b.representative())))
        }
        (None, None) => Some(a.top_card().cmp(&b.top_card())),
        // equal length always means the same family
        _ => None,
    }
}

/// Whether `a` beats `b`. Hands of different cardinality never beat each other.
///
/// ```
/// use big_two::cards::parse_cards;
/// use big_two::classifier::classify;
/// use big_two::comparator::beats;
///
/// let straight = classify(0, &parse_cards("Jd Qc Kh Ad 2s").unwrap()).unwrap();
/// let flush = classify(1, &parse_cards("3c 5c 7c 9c Jc").unwrap()).unwrap();
/// assert!(beats(&flush, &straight));
/// assert!(!beats(&straight, &flush));
/// ```
pub fn beats(a: &Hand, b: &Hand) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::classifier::classify;

    fn hand(s: &str) -> Hand {
        classify(0, &parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn singles_break_rank_ties_on_suit() {
        assert!(beats(&hand("3s"), &hand("3h")));
        assert!(beats(&hand("2d"), &hand("As")));
        assert!(!beats(&hand("3h"), &hand("3h")));
    }

    #[test]
    fn pairs_compare_by_top_card() {
        assert!(beats(&hand("9d 9s"), &hand("9c 9h")));
        assert!(!beats(&hand("9d 9h"), &hand("9c 9s")));
    }

    #[test]
    fn different_cardinality_never_beats() {
        assert_eq!(compare(&hand("2s"), &hand("3d 3c")), None);
        assert!(!beats(&hand("2s 2h"), &hand("3d")));
        assert!(!beats(&hand("3d"), &hand("2s 2h")));
    }

    #[test]
    fn quad_compares_by_the_four() {
        let low = hand("5d 5c 5h 5s 2s");
        let high = hand("6d 6c 6h 6s 3d");
        assert!(beats(&high, &low));
    }

    #[test]
    fn flush_ties_fall_to_card_order() {
        let spade_king = hand("3s 5s 7s 9s Ks");
        let heart_king = hand("4h 6h 8h Th Kh");
        assert!(beats(&spade_king, &heart_king));
        let diamond_two = hand("3d 5d 7d 9d 2d");
        assert!(beats(&diamond_two, &spade_king));
    }
}
