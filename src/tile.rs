use std::str::FromStr;

use crate::error::BoardError;

/// Classification of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Filled by a placed piece.
    Interior,
    /// Diagonal to a filled cell and not orthogonal to any: the only cell a
    /// new piece may touch.
    Corner,
    /// Orthogonal to a filled cell; no new piece may cover it.
    Side,
    Empty,
}

impl TileState {
    pub const ALL: [TileState; 4] = [
        TileState::Interior,
        TileState::Corner,
        TileState::Side,
        TileState::Empty,
    ];

    pub fn to_char(&self) -> char {
        match self {
            TileState::Interior => 'i',
            TileState::Corner => 'c',
            TileState::Side => 's',
            TileState::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Option<TileState> {
        match c {
            'i' => Some(TileState::Interior),
            'c' => Some(TileState::Corner),
            's' => Some(TileState::Side),
            '.' => Some(TileState::Empty),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TileState::Interior => "interior",
            TileState::Corner => "corner",
            TileState::Side => "side",
            TileState::Empty => "empty",
        }
    }
}

impl TryFrom<char> for TileState {
    type Error = BoardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        TileState::from_char(c).ok_or_else(|| BoardError::InvalidState(c.to_string()))
    }
}

/// Accepts the lowercase state names as well as the single-letter board
/// alphabet.
impl FromStr for TileState {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(state) = TileState::from_char(c) {
                return Ok(state);
            }
        }
        TileState::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| BoardError::InvalidState(s.to_string()))
    }
}

impl std::fmt::Display for TileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
