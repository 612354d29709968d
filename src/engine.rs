// Narrow engine boundary for collaborators. Transport and presentation layers
// drive a match through this trait without touching its internals. It is
// implemented for the core `Match` type and for the locked `SharedMatch`.

use crate::cards::Card;
use crate::deck::Deck;
use crate::game::{DealError, MatchView, Move, MoveError, MoveOutcome, Phase};
use crate::hand::{Hand, Seat};

pub trait BigTwoEngine {
    // Round lifecycle
    fn deal(&mut self, deck: Deck) -> Result<Seat, DealError>;

    // Moves
    fn submit_move(&mut self, seat: Seat, mv: Move) -> Result<MoveOutcome, MoveError>;

    // Queries
    fn hand(&self, seat: Seat) -> Vec<Card>;
    fn table(&self) -> Vec<Hand>;
    fn current_turn(&self) -> Option<Seat>;
    fn leader(&self) -> Option<Seat>;
    fn phase(&self) -> Phase;
    fn winner(&self) -> Option<Seat>;
    fn view(&self) -> MatchView;

    fn is_ended(&self) -> bool {
        self.winner().is_some()
    }
}

impl BigTwoEngine for crate::game::Match {
    fn deal(&mut self, deck: Deck) -> Result<Seat, DealError> {
        self.deal(deck)
    }

    fn submit_move(&mut self, seat: Seat, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.submit(seat, mv)
    }

    fn hand(&self, seat: Seat) -> Vec<Card> {
        self.hand_of(seat).to_vec()
    }
    fn table(&self) -> Vec<Hand> {
        self.table().to_vec()
    }
    fn current_turn(&self) -> Option<Seat> {
        self.current_turn()
    }
    fn leader(&self) -> Option<Seat> {
        self.leader()
    }
    fn phase(&self) -> Phase {
        self.phase()
    }
    fn winner(&self) -> Option<Seat> {
        self.winner()
    }
    fn view(&self) -> MatchView {
        self.view()
    }
}
