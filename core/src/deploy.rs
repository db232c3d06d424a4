use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

impl Minefield {
    /// Turns `mines` distinct `UnknownFree` cells into `UnknownMine`, picked uniformly with `rng`.
    ///
    /// Cells that are already mined or revealed are never picked. Asking for more mines than there are free cells
    /// fails with [`FieldError::InvalidMineCount`] and leaves the field untouched.
    pub fn deploy_mines<R: Rng + ?Sized>(&mut self, mines: CellCount, rng: &mut R) -> Result<()> {
        let total_cells = self.total_cells();
        if mines > total_cells {
            log::warn!(
                "Minefield cannot fit mines, requested {} but only has {} cells",
                mines,
                total_cells
            );
            return Err(FieldError::InvalidMineCount {
                requested: mines,
                available: total_cells,
            });
        }

        let free_cells = self
            .cells()
            .iter()
            .filter(|&&cell| cell == Cell::UnknownFree)
            .count() as CellCount;
        if mines > free_cells {
            log::warn!(
                "Not enough free cells left, requested {} but only {} remain",
                mines,
                free_cells
            );
            return Err(FieldError::InvalidMineCount {
                requested: mines,
                available: free_cells,
            });
        }

        // selection sampling: each free cell is taken with probability mines_left / free_left
        let mut mines_left = mines;
        let mut free_left = free_cells;
        for cell in self.cells_mut().iter_mut() {
            if mines_left == 0 {
                break;
            }
            if *cell != Cell::UnknownFree {
                continue;
            }
            if rng.random_range(0..free_left) < mines_left {
                *cell = Cell::UnknownMine;
                mines_left -= 1;
            }
            free_left -= 1;
        }

        log::debug!(
            "Deployed {} mines on {}x{} minefield",
            mines,
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// Same as [`Minefield::deploy_mines`] with a [`SmallRng`] seeded from `seed`, equal seeds give equal layouts.
    pub fn deploy_mines_seeded(&mut self, mines: CellCount, seed: u64) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.deploy_mines(mines, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn mined_coords(field: &Minefield) -> Vec<Coord2> {
        field
            .iter_cells()
            .filter(|&(_, cell)| cell == Cell::UnknownMine)
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn deploys_exact_count() {
        for mines in [0, 1, 7, 24, 25] {
            let mut field = Minefield::new(5, 5).unwrap();
            field.deploy_mines_seeded(mines, 0xDEAD_BEEF).unwrap();

            assert_eq!(mined_coords(&field).len() as CellCount, mines);
            assert_eq!(field.mine_count(), mines);
            assert_eq!(field.revealed_count(), 0);
        }
    }

    #[test]
    fn rejects_too_many_mines_without_mutation() {
        let mut field = Minefield::new(3, 2).unwrap();
        field.check_place((0, 0)).unwrap();
        let before = field.clone();

        assert_eq!(
            field.deploy_mines_seeded(7, 1),
            Err(FieldError::InvalidMineCount {
                requested: 7,
                available: 6
            })
        );
        assert_eq!(field, before);

        // fits the field, but one cell is already revealed
        assert_eq!(
            field.deploy_mines_seeded(6, 1),
            Err(FieldError::InvalidMineCount {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(field, before);
    }

    #[test]
    fn skips_revealed_and_mined_cells() {
        let mut field = Minefield::with_mines((4, 4), &[(0, 0)]).unwrap();
        field.check_place((3, 3)).unwrap();
        field.check_place((1, 1)).unwrap();

        field.deploy_mines_seeded(13, 42).unwrap();

        assert_eq!(field.mine_count(), 14);
        assert_eq!(field.cell_at((0, 0)), Ok(Cell::UnknownMine));
        assert_eq!(field.cell_at((3, 3)), Ok(Cell::KnownFree));
        assert_eq!(field.cell_at((1, 1)), Ok(Cell::KnownFree));
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Minefield::new(16, 16).unwrap();
        let mut b = Minefield::new(16, 16).unwrap();
        a.deploy_mines_seeded(40, 1234).unwrap();
        b.deploy_mines_seeded(40, 1234).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_different_layouts() {
        let mut a = Minefield::new(16, 16).unwrap();
        let mut b = Minefield::new(16, 16).unwrap();
        a.deploy_mines_seeded(40, 1).unwrap();
        b.deploy_mines_seeded(40, 2).unwrap();

        assert_eq!(a.mine_count(), b.mine_count());
        assert_ne!(mined_coords(&a), mined_coords(&b));
    }

    #[test]
    fn every_cell_gets_mined_across_seeds() {
        const ROUNDS: u64 = 400;
        let mut hits = [0u32; 16];

        for seed in 0..ROUNDS {
            let mut field = Minefield::new(4, 4).unwrap();
            field.deploy_mines_seeded(4, seed).unwrap();
            for (x, y) in mined_coords(&field) {
                hits[(y * 4 + x) as usize] += 1;
            }
        }

        // 400 rounds * 4 mines / 16 cells = 100 expected hits per cell
        for (index, &count) in hits.iter().enumerate() {
            assert!(
                (50..=150).contains(&count),
                "cell {} mined {} times",
                index,
                count
            );
        }
    }

    #[test]
    fn last_free_cells_are_always_taken() {
        let mut field = Minefield::with_mines((3, 1), &[(0, 0)]).unwrap();
        field.deploy_mines_seeded(2, 11).unwrap();
        assert_eq!(field.mine_count(), 3);
    }

    #[test]
    fn zero_sized_field_accepts_zero_mines_only() {
        let mut field = Minefield::new(0, 0).unwrap();
        assert_eq!(field.deploy_mines_seeded(0, 3), Ok(()));
        assert!(matches!(
            field.deploy_mines_seeded(1, 3),
            Err(FieldError::InvalidMineCount { .. })
        ));
    }

    #[test]
    fn from_config_deploys_preset() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = FieldConfig::expert();
        let field = Minefield::from_config(&config, &mut rng).unwrap();

        assert_eq!(field.size(), (30, 16));
        assert_eq!(field.mine_count(), 99);

        let overfull = FieldConfig::new((2, 2), 5);
        assert!(matches!(
            Minefield::from_config(&overfull, &mut rng),
            Err(FieldError::InvalidMineCount { .. })
        ));
    }
}
