//! Hand classification: maps a card selection to its one valid [`Shape`].

pub(crate) mod analysis;
pub(crate) mod detector;
pub(crate) mod rank_groups;

use crate::cards::Card;
use crate::hand::{Hand, Seat, Shape};
use analysis::FiveCardAnalysis;
use rank_groups::RankGroups;

/// Classify `cards` played by `player` into a valid [`Hand`].
///
/// Returns `None` when the cards form no recognized shape. Selections of any
/// size other than 1, 2, 3 or 5, or containing the same card twice, never
/// classify. Five-card shapes are tried strongest first, so a straight flush
/// is never reported as a flush or a straight.
///
/// ```
/// use big_two::cards::parse_cards;
/// use big_two::classifier::classify;
/// use big_two::hand::Shape;
///
/// let hand = classify(2, &parse_cards("9h 8h 7h 6h 5h").unwrap()).unwrap();
/// assert_eq!(hand.shape(), Shape::StraightFlush);
/// assert_eq!(hand.player(), 2);
///
/// assert!(classify(2, &parse_cards("9h 9d 9s 9c").unwrap()).is_none());
/// ```
pub fn classify(player: Seat, cards: &[Card]) -> Option<Hand> {
    let mut sorted = cards.to_vec();
    sorted.sort();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }
    let shape = shape_of_sorted(&sorted)?;
    Some(Hand::from_sorted(player, shape, sorted))
}

/// Shape of an ascending, duplicate-free selection.
fn shape_of_sorted(sorted: &[Card]) -> Option<Shape> {
    match sorted.len() {
        1 => Some(Shape::Single),
        2 if RankGroups::from_cards(sorted).is_uniform() => Some(Shape::Pair),
        3 if RankGroups::from_cards(sorted).is_uniform() => Some(Shape::Triple),
        5 => {
            let five: &[Card; 5] = sorted.try_into().ok()?;
            detector::detect_five(&FiveCardAnalysis::new(five))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn shape(s: &str) -> Option<Shape> {
        classify(0, &parse_cards(s).unwrap()).map(|h| h.shape())
    }

    #[test]
    fn small_shapes() {
        assert_eq!(shape("Kd"), Some(Shape::Single));
        assert_eq!(shape("Kd Ks"), Some(Shape::Pair));
        assert_eq!(shape("Kd Qs"), None);
        assert_eq!(shape("4d 4s 4h"), Some(Shape::Triple));
        assert_eq!(shape("4d 4s 5h"), None);
    }

    #[test]
    fn unsupported_sizes_never_classify() {
        assert_eq!(shape(""), None);
        assert_eq!(shape("4d 4s 4h 4c"), None);
        assert_eq!(shape("3d 4d 5d 6d 7d 8d"), None);
    }

    #[test]
    fn duplicates_never_classify() {
        assert_eq!(shape("Kd Kd"), None);
        assert_eq!(shape("3d 3d 3d 3d 4c"), None);
    }

    #[test]
    fn five_card_priority() {
        assert_eq!(shape("3s 4s 5s 6s 7s"), Some(Shape::StraightFlush));
        assert_eq!(shape("9d 9c 9h 9s 3c"), Some(Shape::Quad));
        assert_eq!(shape("9d 9c 9h 3s 3c"), Some(Shape::FullHouse));
        assert_eq!(shape("3c 8c Tc Kc 2c"), Some(Shape::Flush));
        assert_eq!(shape("3c 4d 5h 6s 7c"), Some(Shape::Straight));
        assert_eq!(shape("3c 4d 5h 6s 8c"), None);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = classify(1, &parse_cards("7c 3c 5h 4d 6s").unwrap()).unwrap();
        let b = classify(1, &parse_cards("3c 4d 5h 6s 7c").unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cards()[0].to_string(), "3c");
    }
}
