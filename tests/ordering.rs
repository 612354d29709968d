use big_two::cards::{parse_cards, Card, Rank, Suit};
use big_two::deck::{Deck, DeckError, DECK_SIZE};
use std::cmp::Ordering;
use std::collections::HashSet;

fn all_cards() -> Vec<Card> {
    Deck::standard().iter().copied().collect()
}

#[test]
fn every_pair_of_cards_is_strictly_ordered() {
    let cards = all_cards();
    for a in &cards {
        for b in &cards {
            let ord = a.cmp(b);
            assert_eq!(ord == Ordering::Equal, a == b, "{a} vs {b}");
            assert_eq!(ord.reverse(), b.cmp(a));
        }
    }
}

#[test]
fn sorted_deck_runs_from_three_of_diamonds_to_two_of_spades() {
    let mut cards = all_cards();
    cards.sort();
    assert_eq!(cards[0], Card::OPENING);
    assert_eq!(cards[1], Card::new(Rank::Three, Suit::Clubs));
    assert_eq!(cards[47], Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(cards[48], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(cards[51], Card::new(Rank::Two, Suit::Spades));
}

#[test]
fn game_rank_is_shifted_natural_rank() {
    for i in 0..13u8 {
        let rank = Rank::from_index(i).unwrap();
        assert_eq!(rank.game_rank(), (i + 11) % 13);
    }
}

#[test]
fn sorting_parsed_cards_uses_game_order() {
    let mut cards = parse_cards("2c Ah 3s Kd 3d").unwrap();
    cards.sort();
    let shown: Vec<String> = cards.iter().map(Card::to_string).collect();
    assert_eq!(shown, ["3d", "3s", "Kd", "Ah", "2c"]);
}

#[test]
fn dealing_a_shuffled_deck_covers_every_card_once() {
    let mut deck = Deck::shuffled_seeded(2024);
    let mut seen = HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(seen.insert(card), "drew {card} twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn external_card_sequences_are_validated() {
    let mut cards = all_cards();
    cards.reverse();
    let mut deck = Deck::from_cards(cards.clone()).unwrap();
    assert_eq!(deck.draw(), Some(Card::new(Rank::Two, Suit::Spades)));

    cards.pop();
    assert_eq!(Deck::from_cards(cards), Err(DeckError::WrongCount(51)));
}
