//! Match configuration.

use crate::game::PLAYERS;
use crate::hand::Seat;

/// Configuration for a [`Match`](crate::game::Match).
///
/// ```
/// use big_two::options::MatchOptions;
///
/// let options = MatchOptions::default().with_name(2, "Carol");
/// assert_eq!(options.names[0], "P1");
/// assert_eq!(options.names[2], "Carol");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Display names by seat, used in the move log.
    pub names: [String; PLAYERS],
}

impl MatchOptions {
    /// Replaces all four seat names.
    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: [S; PLAYERS]) -> Self {
        self.names = names.map(Into::into);
        self
    }

    /// Renames one seat. Out-of-range seats are ignored.
    #[must_use]
    pub fn with_name(mut self, seat: Seat, name: impl Into<String>) -> Self {
        if let Some(slot) = self.names.get_mut(seat) {
            *slot = name.into();
        }
        self
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { names: core::array::from_fn(|i| format!("P{}", i + 1)) }
    }
}
