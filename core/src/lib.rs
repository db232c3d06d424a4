#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use field::*;
pub use types::*;

mod cell;
mod deploy;
mod error;
mod field;
mod render;
mod types;

/// Dimensions and mine count of a field to be built by [`Minefield::from_config`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl FieldConfig {
    pub const fn new(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn beginner() -> Self {
        Self::new((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new((30, 16), 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn validate(&self) -> Result<()> {
        let available = self.total_cells();
        if self.mines > available {
            return Err(FieldError::InvalidMineCount {
                requested: self.mines,
                available,
            });
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

/// Outcome of revealing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Free,
    Mine,
}

impl RevealOutcome {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            FieldConfig::beginner(),
            FieldConfig::intermediate(),
            FieldConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
        assert_eq!(FieldConfig::expert().total_cells(), 480);
    }

    #[test]
    fn config_rejects_overfull_field() {
        let config = FieldConfig::new((2, 3), 7);
        assert_eq!(
            config.validate(),
            Err(FieldError::InvalidMineCount {
                requested: 7,
                available: 6
            })
        );
        assert_eq!(FieldConfig::new((2, 3), 6).validate(), Ok(()));
    }

    #[test]
    fn minefield_can_be_shared_behind_a_lock() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Minefield>();
    }

    #[test]
    fn config_from_json() {
        let config: FieldConfig = serde_json::from_str(r#"{"size":[16,16],"mines":40}"#).unwrap();
        assert_eq!(config, FieldConfig::intermediate());
    }
}
