use crate::cards::{join_cards, Card};
use crate::classifier::classify;
use crate::comparator::beats;
use crate::deck::{Deck, DeckError, DECK_SIZE};
use crate::hand::{Hand, Seat};
use crate::options::MatchOptions;
use std::collections::HashSet;
use std::fmt;

/// Seats at the table.
pub const PLAYERS: usize = 4;
/// Cards dealt to each seat.
pub const CARDS_PER_PLAYER: usize = DECK_SIZE / PLAYERS;

/// Where a match stands in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// No cards have been dealt yet.
    AwaitingDeal,
    /// Table is empty; the holder of the opening card must play it.
    AwaitingOpeningMove,
    /// A non-leader is to act: beat the table or pass.
    AwaitingResponse,
    /// Everyone else passed; the leader leads any hand.
    AwaitingLeaderMove,
    /// `winner` emptied their hand.
    Ended { winner: Seat },
}

/// A move proposed by a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// Indices into the seat's current (sorted) hand.
    Play(Vec<usize>),
    Pass,
}

impl Move {
    /// An empty selection is a pass.
    pub fn from_indices(indices: &[usize]) -> Self {
        if indices.is_empty() {
            Move::Pass
        } else {
            Move::Play(indices.to_vec())
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("no cards selected")]
    Empty,
    #[error("card index {index} out of range for a hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("card index {0} selected twice")]
    DuplicateIndex(usize),
    #[error("cannot play {0} cards at once")]
    UnsupportedCount(usize),
}

/// Why a move was rejected. Rejections never change match state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("no cards have been dealt")]
    NotDealt,
    #[error("match has ended")]
    MatchEnded,
    #[error("not your turn: seat {expected} is to act, got seat {got}")]
    NotYourTurn { expected: Seat, got: Seat },
    #[error("invalid card selection: {0}")]
    InvalidCardSelection(#[from] SelectionError),
    #[error("selected cards do not form a valid hand")]
    UnclassifiableHand,
    #[error("the first hand of a round must include {}", Card::OPENING)]
    MissingOpeningCard,
    #[error("passing is not allowed now")]
    PassNotAllowed,
    #[error("must play {expected} cards to answer the table, got {got}")]
    WrongCardCount { expected: usize, got: usize },
    #[error("hand does not beat the table")]
    DoesNotBeat,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("cannot deal: {0}")]
    Deck(#[from] DeckError),
    #[error("deck does not contain the opening card")]
    NoOpeningCard,
}

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Played(Hand),
    Passed,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MoveOutcome {
    pub seat: Seat,
    pub action: Action,
    /// Seat whose hand stands on the table after this move.
    pub leader: Option<Seat>,
    /// Seat to act next; `None` once the match has ended.
    pub next_turn: Option<Seat>,
    pub winner: Option<Seat>,
}

impl MoveOutcome {
    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }
}

/// One entry of the move log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MoveRecord {
    pub seat: Seat,
    pub name: String,
    pub action: Action,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Action::Played(hand) => write!(f, "{}: {}", self.name, hand),
            Action::Passed => write!(f, "{}: {{Pass}}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) cards: Vec<Card>,
}

impl Player {
    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards still in hand, sorted ascending
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

/// Read-only snapshot of a match for presentation and transport layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MatchView {
    pub phase: Phase,
    pub names: Vec<String>,
    pub hands: Vec<Vec<Card>>,
    pub table: Vec<Hand>,
    pub current_turn: Option<Seat>,
    pub leader: Option<Seat>,
    pub winner: Option<Seat>,
}

impl MatchView {
    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }
}

/// A four-player Big Two match.
///
/// The match is only mutated through [`Match::deal`] and [`Match::submit`];
/// a rejected move leaves every field untouched.
///
/// ```
/// use big_two::deck::Deck;
/// use big_two::game::{Match, Move, Phase};
/// use big_two::options::MatchOptions;
///
/// let mut m = Match::new(MatchOptions::default());
/// let opener = m.deal(Deck::shuffled_seeded(1)).unwrap();
/// assert_eq!(m.phase(), Phase::AwaitingOpeningMove);
///
/// // The opening card is always the lowest card, so index 0.
/// let outcome = m.submit(opener, Move::Play(vec![0])).unwrap();
/// assert_eq!(outcome.leader, Some(opener));
/// assert_eq!(outcome.next_turn, Some((opener + 1) % 4));
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Match {
    pub(crate) players: Vec<Player>,
    pub(crate) table: Vec<Hand>,
    pub(crate) current: Seat,
    pub(crate) leader: Option<Seat>,
    pub(crate) phase: Phase,
    /// Winner of the most recently finished round.
    pub(crate) last_winner: Option<Seat>,
    history: Vec<MoveRecord>,
}

impl Match {
    pub fn new(options: MatchOptions) -> Self {
        let players =
            options.names.into_iter().map(|name| Player { name, cards: Vec::new() }).collect();
        Self {
            players,
            table: Vec::new(),
            current: 0,
            leader: None,
            phase: Phase::AwaitingDeal,
            last_winner: None,
            history: Vec::new(),
        }
    }

    /// Create a match and deal its first round from `deck`.
    pub fn start(options: MatchOptions, deck: Deck) -> Result<Self, DealError> {
        let mut m = Self::new(options);
        m.deal(deck)?;
        Ok(m)
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Cards held by `seat`; empty for unknown seats.
    pub fn hand_of(&self, seat: Seat) -> &[Card] {
        self.players.get(seat).map(|p| p.cards.as_slice()).unwrap_or(&[])
    }

    /// Hands placed this round, oldest first
    pub fn table(&self) -> &[Hand] {
        &self.table
    }

    /// The hand currently standing on the table
    pub fn last_hand(&self) -> Option<&Hand> {
        self.table.last()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat to act, or `None` before the deal and after the match ends.
    pub fn current_turn(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingDeal | Phase::Ended { .. } => None,
            _ => Some(self.current),
        }
    }

    pub fn leader(&self) -> Option<Seat> {
        self.leader
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended { .. })
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.phase {
            Phase::Ended { winner } => Some(winner),
            _ => None,
        }
    }

    /// Winner of the latest finished round, kept across re-deals.
    pub fn last_winner(&self) -> Option<Seat> {
        self.last_winner
    }

    pub fn view(&self) -> MatchView {
        MatchView {
            phase: self.phase,
            names: self.players.iter().map(|p| p.name.clone()).collect(),
            hands: self.players.iter().map(|p| p.cards.clone()).collect(),
            table: self.table.clone(),
            current_turn: self.current_turn(),
            leader: self.leader,
            winner: self.winner(),
        }
    }

    pub fn history_recent(&self, n: usize) -> Vec<MoveRecord> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<MoveRecord> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Deal a fresh round from a full 52-card deck, 13 cards per seat.
    ///
    /// Any round in progress is discarded. Returns the seat holding the
    /// opening card, which is the first to act.
    pub fn deal(&mut self, mut deck: Deck) -> Result<Seat, DealError> {
        if deck.len() != DECK_SIZE {
            return Err(DeckError::WrongCount(deck.len()).into());
        }
        let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(CARDS_PER_PLAYER); PLAYERS];
        for _ in 0..CARDS_PER_PLAYER {
            for hand in hands.iter_mut() {
                let card = deck.draw().ok_or(DeckError::WrongCount(DECK_SIZE))?;
                hand.push(card);
            }
        }
        let opener = hands
            .iter()
            .position(|h| h.contains(&Card::OPENING))
            .ok_or(DealError::NoOpeningCard)?;

        for (player, mut cards) in self.players.iter_mut().zip(hands) {
            cards.sort();
            player.cards = cards;
        }
        self.table.clear();
        self.history.clear();
        self.leader = None;
        self.current = opener;
        self.phase = Phase::AwaitingOpeningMove;
        log::info!("dealt new round; {} opens with {}", self.players[opener].name, Card::OPENING);
        Ok(opener)
    }

    /// Validate and apply a move by `seat`.
    pub fn submit(&mut self, seat: Seat, mv: Move) -> Result<MoveOutcome, MoveError> {
        let result = self.try_submit(seat, mv);
        if let Err(e) = &result {
            log::debug!("rejected move by seat {seat}: {e}");
        }
        result
    }

    /// Shorthand for [`Move::Play`].
    pub fn play(&mut self, seat: Seat, indices: &[usize]) -> Result<MoveOutcome, MoveError> {
        self.submit(seat, Move::Play(indices.to_vec()))
    }

    /// Shorthand for [`Move::Pass`].
    pub fn pass(&mut self, seat: Seat) -> Result<MoveOutcome, MoveError> {
        self.submit(seat, Move::Pass)
    }

    fn try_submit(&mut self, seat: Seat, mv: Move) -> Result<MoveOutcome, MoveError> {
        match self.phase {
            Phase::AwaitingDeal => return Err(MoveError::NotDealt),
            Phase::Ended { .. } => return Err(MoveError::MatchEnded),
            _ => {}
        }
        if seat != self.current {
            return Err(MoveError::NotYourTurn { expected: self.current, got: seat });
        }
        match mv {
            Move::Play(indices) if !indices.is_empty() => {
                let cards = self.select(seat, &indices)?;
                let hand = self.check_play(seat, &cards)?;
                Ok(self.apply_play(seat, &indices, hand))
            }
            _ => self.apply_pass(seat),
        }
    }

    /// Resolve indices into cards of `seat`'s hand.
    fn select(&self, seat: Seat, indices: &[usize]) -> Result<Vec<Card>, SelectionError> {
        let hand = self.hand_of(seat);
        if indices.is_empty() {
            return Err(SelectionError::Empty);
        }
        let mut seen = HashSet::with_capacity(indices.len());
        for &index in indices {
            if index >= hand.len() {
                return Err(SelectionError::IndexOutOfRange { index, len: hand.len() });
            }
            if !seen.insert(index) {
                return Err(SelectionError::DuplicateIndex(index));
            }
        }
        if !matches!(indices.len(), 1 | 2 | 3 | 5) {
            return Err(SelectionError::UnsupportedCount(indices.len()));
        }
        Ok(indices.iter().map(|&i| hand[i]).collect())
    }

    fn check_play(&self, seat: Seat, cards: &[Card]) -> Result<Hand, MoveError> {
        match self.phase {
            Phase::AwaitingOpeningMove => {
                if !cards.contains(&Card::OPENING) {
                    return Err(MoveError::MissingOpeningCard);
                }
                classify(seat, cards).ok_or(MoveError::UnclassifiableHand)
            }
            Phase::AwaitingResponse => {
                let Some(last) = self.table.last() else {
                    debug_assert!(false, "responding to an empty table");
                    return classify(seat, cards).ok_or(MoveError::UnclassifiableHand);
                };
                if cards.len() != last.len() {
                    return Err(MoveError::WrongCardCount { expected: last.len(), got: cards.len() });
                }
                let hand = classify(seat, cards).ok_or(MoveError::UnclassifiableHand)?;
                if !beats(&hand, last) {
                    return Err(MoveError::DoesNotBeat);
                }
                Ok(hand)
            }
            _ => classify(seat, cards).ok_or(MoveError::UnclassifiableHand),
        }
    }

    fn apply_play(&mut self, seat: Seat, indices: &[usize], hand: Hand) -> MoveOutcome {
        let mut order = indices.to_vec();
        order.sort_unstable_by(|a, b| b.cmp(a));
        let player = &mut self.players[seat];
        for i in order {
            player.cards.remove(i);
        }
        let emptied = player.cards.is_empty();

        log::debug!("{}: {}", player.name, hand);
        self.record(seat, Action::Played(hand.clone()));
        self.table.push(hand.clone());
        self.leader = Some(seat);

        if emptied {
            self.phase = Phase::Ended { winner: seat };
            self.last_winner = Some(seat);
            log::info!("{} wins the round", self.players[seat].name);
        } else {
            self.advance_turn();
        }
        self.outcome(seat, Action::Played(hand))
    }

    fn apply_pass(&mut self, seat: Seat) -> Result<MoveOutcome, MoveError> {
        if !matches!(self.phase, Phase::AwaitingResponse) {
            return Err(MoveError::PassNotAllowed);
        }
        log::debug!("{}: pass", self.players[seat].name);
        self.record(seat, Action::Passed);
        self.advance_turn();
        Ok(self.outcome(seat, Action::Passed))
    }

    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % PLAYERS;
        // A seat with no cards ends the match before the turn can reach it.
        debug_assert!(!self.players[self.current].cards.is_empty());
        self.phase = if self.leader == Some(self.current) {
            Phase::AwaitingLeaderMove
        } else {
            Phase::AwaitingResponse
        };
    }

    fn outcome(&self, seat: Seat, action: Action) -> MoveOutcome {
        MoveOutcome {
            seat,
            action,
            leader: self.leader,
            next_turn: self.current_turn(),
            winner: self.winner(),
        }
    }

    fn record(&mut self, seat: Seat, action: Action) {
        let name = self.players[seat].name.clone();
        self.history.push(MoveRecord { seat, name, action });
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (seat, p) in self.players.iter().enumerate() {
            let marker = if self.current_turn() == Some(seat) { '>' } else { ' ' };
            writeln!(f, "{marker} {}: {}", p.name, join_cards(&p.cards))?;
        }
        match self.last_hand() {
            Some(hand) => write!(f, "table: {hand}"),
            None => write!(f, "table: empty"),
        }
    }
}
