use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells, created once and then mutated in place by deployment and reveals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<Cell>,
}

impl Minefield {
    /// Allocates a `width` x `height` field with every cell `UnknownFree`.
    ///
    /// Zero-sized fields are allowed. Sizes that do not fit in memory are reported as
    /// [`FieldError::AllocationFailure`] rather than aborting.
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        let len = usize::try_from(mult(width, height)).map_err(|_| FieldError::AllocationFailure)?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| FieldError::AllocationFailure)?;
        buffer.resize(len, Cell::default());

        let cells = Array2::from_shape_vec((height as usize, width as usize), buffer)
            .map_err(|_| FieldError::AllocationFailure)?;

        log::debug!("Allocated {}x{} minefield", width, height);
        Ok(Self { cells })
    }

    /// Builds a field with mines exactly at `mine_coords`, duplicates are ignored.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut field = Self::new(size.0, size.1)?;
        for &coords in mine_coords {
            let coords = field.validate_coords(coords)?;
            field.cells[coords.to_nd_index()] = Cell::UnknownMine;
        }
        Ok(field)
    }

    /// Validates `config`, allocates the field and deploys its mines using `rng`.
    pub fn from_config<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut field = Self::new(config.size.0, config.size.1)?;
        field.deploy_mines(config.mines, rng)?;
        Ok(field)
    }

    pub fn width(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.width(), self.height())
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    /// Number of cells holding a mine, revealed or not.
    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine()).count() as CellCount
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_known()).count() as CellCount
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(FieldError::OutOfBounds { coords, size })
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// All cells with their coordinates, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((x as Coord, y as Coord), cell))
    }

    /// In-bounds neighbours of `coords`: 3 for a corner, 5 along an edge, 8 inside.
    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors_within(coords, self.size())
    }

    /// Reveals the cell at `coords` and reports whether it held a mine.
    ///
    /// Revealing an already known cell returns the same outcome again without changing anything.
    pub fn check_place(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let outcome = self.cells[coords.to_nd_index()].reveal();
        log::trace!("Revealed {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Number of mines, revealed or not, among the up to 8 cells around `coords`.
    pub fn count_neighbours(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.adjacent_mine_count(coords))
    }

    pub(crate) fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_mine())
            .count() as u8
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }
}
