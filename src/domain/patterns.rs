use super::{LifeError, LifeGrid};

/// A named seed shape that can be stamped onto a cleared grid.
/// Minimum dimensions include the margin around the shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blueprint {
    pub name: &'static str,
    pub min_width: usize,
    pub min_height: usize,
    pub cells: &'static [(usize, usize)], // Offsets of alive cells
}

impl Blueprint {
    /// Clear the grid, then place the shape centered on it.
    ///
    /// When the grid is smaller than the blueprint's minimum size the grid is
    /// left cleared and `InsufficientSpace` is returned.
    pub fn stamp_on(&self, grid: &mut LifeGrid) -> Result<(), LifeError> {
        grid.clear();

        let (width, height) = grid.dimensions();
        if width < self.min_width || height < self.min_height {
            let err = LifeError::InsufficientSpace {
                pattern: self.name,
                min_width: self.min_width,
                min_height: self.min_height,
                width,
                height,
            };
            log::warn!("{err}");
            return Err(err);
        }

        let start_x = (width - self.min_width) / 2;
        let start_y = (height - self.min_height) / 2;
        for &(dx, dy) in self.cells {
            grid.set_alive(start_x + dx, start_y + dy, true);
        }
        log::info!("stamped {} at ({start_x}, {start_y})", self.name);
        Ok(())
    }
}

/// Built-in blueprints
pub mod presets {
    use super::Blueprint;

    /// Lightweight spaceship, 5x4 footprint
    pub const FISH: Blueprint = Blueprint {
        name: "fish",
        min_width: 7,
        min_height: 6,
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    };

    /// 16x6 footprint
    pub const EEL: Blueprint = Blueprint {
        name: "eel",
        min_width: 17,
        min_height: 7,
        cells: &[
            (7, 0), (8, 0), (10, 0),
            (4, 1), (5, 1), (7, 1), (9, 1), (10, 1), (12, 1), (13, 1), (14, 1),
            (1, 2), (2, 2), (3, 2), (4, 2), (7, 2), (8, 2), (15, 2),
            (0, 3), (5, 3), (9, 3), (13, 3), (14, 3),
            (1, 4), (2, 4),
        ],
    };

    pub const GLIDER: Blueprint = Blueprint {
        name: "glider",
        min_width: 4,
        min_height: 4,
        cells: &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    };

    pub const BLINKER: Blueprint = Blueprint {
        name: "blinker",
        min_width: 4,
        min_height: 4,
        cells: &[(0, 1), (1, 1), (2, 1)],
    };

    /// Still life
    pub const BLOCK: Blueprint = Blueprint {
        name: "block",
        min_width: 3,
        min_height: 3,
        cells: &[
            (0, 0), (1, 0),
            (0, 1), (1, 1),
        ],
    };

    /// Get all available blueprints
    pub fn all_blueprints() -> &'static [Blueprint] {
        &[FISH, EEL, GLIDER, BLINKER, BLOCK]
    }

    /// Look up a blueprint by name, case-insensitive
    pub fn by_name(name: &str) -> Option<&'static Blueprint> {
        all_blueprints()
            .iter()
            .find(|blueprint| blueprint.name.eq_ignore_ascii_case(name))
    }
}
