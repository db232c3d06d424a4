use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::*;

impl Minefield {
    /// Text dump of the field, one line per row with cells separated by a space. Rows carry no trailing space after
    /// their last cell, unlike a plain `"%c "` per cell dump.
    ///
    /// Unknown cells show as `?` whether mined or not, revealed mines as `*`, and revealed free cells as their
    /// neighbour count (`.` for zero).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells().outer_iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_char(' ')?;
                }
                let neighbours = match cell {
                    Cell::KnownFree => self.adjacent_mine_count((x as Coord, y as Coord)),
                    _ => 0,
                };
                f.write_char(cell.glyph(neighbours))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
