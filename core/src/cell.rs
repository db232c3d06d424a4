use serde::{Deserialize, Serialize};

use crate::RevealOutcome;

/// State of a single position on the minefield.
///
/// Only two kinds of transition exist: deployment turns `UnknownFree` into `UnknownMine`, and revealing turns an
/// unknown state into the matching known one. Nothing ever goes back to unknown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    UnknownFree,
    UnknownMine,
    KnownFree,
    KnownMine,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::UnknownMine | Self::KnownMine)
    }

    pub const fn is_known(self) -> bool {
        matches!(self, Self::KnownFree | Self::KnownMine)
    }

    /// Reveal in place, returning what was found. Already known cells are left untouched.
    pub fn reveal(&mut self) -> RevealOutcome {
        use Cell::*;

        match *self {
            UnknownMine | KnownMine => {
                *self = KnownMine;
                RevealOutcome::Mine
            }
            UnknownFree | KnownFree => {
                *self = KnownFree;
                RevealOutcome::Free
            }
        }
    }

    /// Character used in the text dump, `neighbours` is only looked at for revealed free cells.
    pub fn glyph(self, neighbours: u8) -> char {
        use Cell::*;

        match self {
            UnknownFree | UnknownMine => '?',
            KnownMine => '*',
            KnownFree if neighbours == 0 => '.',
            KnownFree => char::from(b'0' + neighbours.min(9)),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::UnknownFree
    }
}
