//! Single-writer boundary around a [`Match`].
//!
//! Moves from independent per-player sources are serialized through one
//! mutex. The lock covers validate-and-mutate only; callers get owned data
//! back and never hold the guard across I/O.

use crate::cards::Card;
use crate::deck::Deck;
use crate::engine::BigTwoEngine;
use crate::game::{DealError, Match, MatchView, Move, MoveError, MoveOutcome, Phase};
use crate::hand::{Hand, Seat};
use crate::options::MatchOptions;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable handle to one match shared by several move sources.
#[derive(Debug, Clone)]
pub struct SharedMatch {
    inner: Arc<Mutex<Match>>,
}

impl SharedMatch {
    pub fn new(options: MatchOptions) -> Self {
        Self::from_match(Match::new(options))
    }

    pub fn from_match(m: Match) -> Self {
        Self { inner: Arc::new(Mutex::new(m)) }
    }

    // Poison is ignored: a move mutates state only after it fully validates.
    fn lock(&self) -> MutexGuard<'_, Match> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn deal(&self, deck: Deck) -> Result<Seat, DealError> {
        self.lock().deal(deck)
    }

    pub fn submit(&self, seat: Seat, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.lock().submit(seat, mv)
    }

    pub fn view(&self) -> MatchView {
        self.lock().view()
    }

    /// Run a read-only closure against the match under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Match) -> R) -> R {
        f(&self.lock())
    }
}

impl BigTwoEngine for SharedMatch {
    fn deal(&mut self, deck: Deck) -> Result<Seat, DealError> {
        SharedMatch::deal(self, deck)
    }

    fn submit_move(&mut self, seat: Seat, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.submit(seat, mv)
    }

    fn hand(&self, seat: Seat) -> Vec<Card> {
        self.lock().hand_of(seat).to_vec()
    }
    fn table(&self) -> Vec<Hand> {
        self.lock().table().to_vec()
    }
    fn current_turn(&self) -> Option<Seat> {
        self.lock().current_turn()
    }
    fn leader(&self) -> Option<Seat> {
        self.lock().leader()
    }
    fn phase(&self) -> Phase {
        self.lock().phase()
    }
    fn winner(&self) -> Option<Seat> {
        self.lock().winner()
    }
    fn view(&self) -> MatchView {
        SharedMatch::view(self)
    }
}
