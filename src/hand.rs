use crate::cards::{join_cards, Card};
use std::fmt;

/// Seat index of a player at the table, `0..4`.
pub type Seat = usize;

/// The eight recognized hand shapes.
///
/// Variant order is declaration order only; cross-shape strength exists for
/// five-card shapes alone and is exposed through [`Shape::five_card_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Shape {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    Quad,
    StraightFlush,
}

impl Shape {
    pub const ALL: [Shape; 8] = [
        Shape::Single,
        Shape::Pair,
        Shape::Triple,
        Shape::Straight,
        Shape::Flush,
        Shape::FullHouse,
        Shape::Quad,
        Shape::StraightFlush,
    ];

    /// Number of cards a hand of this shape holds.
    pub const fn card_count(self) -> usize {
        match self {
            Shape::Single => 1,
            Shape::Pair => 2,
            Shape::Triple => 3,
            Shape::Straight
            | Shape::Flush
            | Shape::FullHouse
            | Shape::Quad
            | Shape::StraightFlush => 5,
        }
    }

    /// Strength among five-card shapes:
    /// Straight < Flush < FullHouse < Quad < StraightFlush.
    pub const fn five_card_rank(self) -> Option<u8> {
        match self {
            Shape::Straight => Some(0),
            Shape::Flush => Some(1),
            Shape::FullHouse => Some(2),
            Shape::Quad => Some(3),
            Shape::StraightFlush => Some(4),
            Shape::Single | Shape::Pair | Shape::Triple => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shape::Single => "Single",
            Shape::Pair => "Pair",
            Shape::Triple => "Triple",
            Shape::Straight => "Straight",
            Shape::Flush => "Flush",
            Shape::FullHouse => "FullHouse",
            Shape::Quad => "Quad",
            Shape::StraightFlush => "StraightFlush",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, valid hand placed (or about to be placed) by a player.
///
/// Only the classifier builds hands, so every `Hand` satisfies its shape's
/// structural predicate and keeps its cards sorted ascending.
///
/// ```
/// use big_two::cards::parse_cards;
/// use big_two::classifier::classify;
/// use big_two::hand::Shape;
///
/// let hand = classify(0, &parse_cards("7d 7s 7h Kc Kd").unwrap()).unwrap();
/// assert_eq!(hand.shape(), Shape::FullHouse);
/// assert_eq!(hand.representative().to_string(), "7s");
/// assert_eq!(hand.to_string(), "{FullHouse} 7d 7h 7s Kd Kc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    player: Seat,
    shape: Shape,
    cards: Vec<Card>,
}

impl Hand {
    /// `cards` must already be sorted and match `shape`.
    pub(crate) fn from_sorted(player: Seat, shape: Shape, cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), shape.card_count());
        debug_assert!(cards.windows(2).all(|w| w[0] < w[1]));
        Self { player, shape, cards }
    }

    pub fn player(&self) -> Seat {
        self.player
    }

    pub fn shape(&self) -> Shape {
        self.shape
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

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Highest card of the hand under the card order.
    pub fn top_card(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }

    /// Card that decides comparisons between hands of the same shape.
    ///
    /// The top card, except for full houses and quads where it is the highest
    /// card of the triple or the four-of-a-kind.
    pub fn representative(&self) -> Card {
        let c = &self.cards;
        match self.shape {
            Shape::FullHouse if c[2].rank() == c[4].rank() => c[4],
            Shape::FullHouse => c[2],
            Shape::Quad if c[3].rank() == c[4].rank() => c[4],
            Shape::Quad => c[3],
            _ => self.top_card(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} {}", self.shape, join_cards(&self.cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn sorted(s: &str) -> Vec<Card> {
        let mut cards = parse_cards(s).unwrap();
        cards.sort();
        cards
    }

    #[test]
    fn card_counts_match_shape_families() {
        assert_eq!(Shape::Single.card_count(), 1);
        assert_eq!(Shape::Pair.card_count(), 2);
        assert_eq!(Shape::Triple.card_count(), 3);
        for s in Shape::ALL.iter().skip(3) {
            assert_eq!(s.card_count(), 5);
            assert!(s.five_card_rank().is_some());
        }
        assert_eq!(Shape::Triple.five_card_rank(), None);
    }

    #[test]
    fn full_house_representative_follows_the_triple() {
        let low_triple = Hand::from_sorted(0, Shape::FullHouse, sorted("4d 4c 4s 9h 9s"));
        assert_eq!(low_triple.representative().to_string(), "4s");
        let high_triple = Hand::from_sorted(0, Shape::FullHouse, sorted("4d 4c 9d 9h 9s"));
        assert_eq!(high_triple.representative().to_string(), "9s");
    }

    #[test]
    fn quad_representative_follows_the_four() {
        let low_quad = Hand::from_sorted(1, Shape::Quad, sorted("5d 5c 5h 5s 2d"));
        assert_eq!(low_quad.representative().to_string(), "5s");
        let high_quad = Hand::from_sorted(1, Shape::Quad, sorted("3c Qd Qc Qh Qs"));
        assert_eq!(high_quad.representative().to_string(), "Qs");
        assert_eq!(high_quad.player(), 1);
    }

    #[test]
    fn display_shows_shape_and_cards() {
        let h = Hand::from_sorted(2, Shape::Pair, sorted("2s 2d"));
        assert_eq!(h.to_string(), "{Pair} 2d 2s");
        assert_eq!(h.top_card().to_string(), "2s");
    }
}
