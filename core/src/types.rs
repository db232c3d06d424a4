/// Single coordinate axis used for field width, height, and positions.
pub type Coord = u32;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u64;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Storage is row-major, so `(x, y)` maps to `[y, x]`.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1 as usize, self.0 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    // cannot overflow: both factors fit in 32 bits
    (a as CellCount) * (b as CellCount)
}

/// Coordinates of the 3x3 block around `center` clipped to `bounds`, without the center itself, row by row.
pub fn neighbors_within(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (x, y) = center;
    let (width, height) = bounds;
    let columns = x.saturating_sub(1)..x.saturating_add(2).min(width);

    (y.saturating_sub(1)..y.saturating_add(2).min(height))
        .flat_map(move |row| columns.clone().map(move |column| (column, row)))
        .filter(move |&coords| coords != center)
}
