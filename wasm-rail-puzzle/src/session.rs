/// Interactive game session
///
/// **Learning Point**: The grid itself accepts any placement. The session is
/// the interaction boundary: it owns the one live grid, keeps the player's tile
/// selection, and refuses to move or remove cities.

use rand::Rng;
use serde::Serialize;
use tracing::debug;
use crate::error::{PuzzleError, Result};
use crate::generator::{generate_level, GeneratorConfig};
use crate::grid::Grid;
use crate::tiles::definition_of;
use crate::types::{Rotation, TileTypeId};
use crate::validation::{validate, ValidationReport};

/// Result of clicking a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "typeId", rename_all = "camelCase")]
pub enum ClickOutcome {
    Placed(TileTypeId),
    Removed,
    CityLocked,
    NoSelection,
    GameOver,
    OutOfBounds,
}

impl ClickOutcome {
    /// Numeric code handed to the host
    pub fn code(self) -> i32 {
        match self {
            ClickOutcome::Placed(_) => 0,
            ClickOutcome::Removed => 1,
            ClickOutcome::CityLocked => 2,
            ClickOutcome::NoSelection => 3,
            ClickOutcome::GameOver => 4,
            ClickOutcome::OutOfBounds => 5,
        }
    }
}

/// Result of an explicit solution check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "count", rename_all = "camelCase")]
pub enum CheckOutcome {
    Won,
    /// Number of conflicting borders (each counted once)
    Conflicts(usize),
    Disconnected,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    grid: Grid,
    selected: Option<TileTypeId>,
    rotation: Rotation,
    won: bool,
}

impl Session {
    /// Start a game on a freshly generated level
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Self {
        Session::from_grid(generate_level(rng, config))
    }

    /// Start a game on a prepared grid
    pub fn from_grid(grid: Grid) -> Self {
        Session {
            grid,
            selected: None,
            rotation: Rotation::default(),
            won: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selected(&self) -> Option<TileTypeId> {
        self.selected
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Toggle the palette selection. Picking a new type resets the rotation.
    pub fn select(&mut self, type_id: TileTypeId) -> Result<()> {
        if definition_of(type_id).is_city {
            return Err(PuzzleError::NotPlaceable(type_id));
        }
        if self.won {
            return Ok(());
        }
        if self.selected == Some(type_id) {
            self.selected = None;
        } else {
            self.selected = Some(type_id);
            self.rotation = Rotation::default();
        }
        Ok(())
    }

    /// Turn the selected tile a quarter clockwise
    pub fn rotate_selection(&mut self) -> Rotation {
        if self.selected.is_some() && !self.won {
            self.rotation = self.rotation.next();
        }
        self.rotation
    }

    pub fn click(&mut self, x: i32, y: i32) -> ClickOutcome {
        if self.won {
            return ClickOutcome::GameOver;
        }
        if !self.grid.in_bounds(x, y) {
            return ClickOutcome::OutOfBounds;
        }
        if let Some(existing) = self.grid.get(x, y) {
            if definition_of(existing.type_id).is_city {
                return ClickOutcome::CityLocked;
            }
            self.grid.remove(x, y);
            return ClickOutcome::Removed;
        }
        match self.selected {
            Some(type_id) => {
                self.grid.place(x, y, type_id, self.rotation);
                ClickOutcome::Placed(type_id)
            }
            None => ClickOutcome::NoSelection,
        }
    }

    /// Place a tile without interaction checks
    pub fn place(&mut self, x: i32, y: i32, type_id: TileTypeId, rotation: Rotation) {
        self.grid.place(x, y, type_id, rotation);
    }

    /// Clear a cell without interaction checks
    pub fn remove(&mut self, x: i32, y: i32) {
        self.grid.remove(x, y);
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.grid)
    }

    /// Check the solution, ending the game when it is valid
    pub fn check(&mut self) -> CheckOutcome {
        let report = self.validate();
        let outcome = if report.overall_valid {
            self.won = true;
            CheckOutcome::Won
        } else if !report.conflicts.is_empty() {
            CheckOutcome::Conflicts(report.conflict_count())
        } else {
            CheckOutcome::Disconnected
        };
        debug!(?outcome, "checked solution");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rot(steps: i32) -> Rotation {
        Rotation::from_steps(steps)
    }

    /// Two city stubs in column 1 facing each other across three empty cells
    fn two_city_session() -> Session {
        let mut grid = Grid::new();
        grid.place(1, 0, TileTypeId::City1, rot(0));
        grid.place(1, 4, TileTypeId::City1, rot(2));
        Session::from_grid(grid)
    }

    #[test]
    fn selecting_twice_clears_selection() {
        let mut session = Session::default();
        session.select(TileTypeId::Curve).unwrap();
        assert_eq!(session.selected(), Some(TileTypeId::Curve));
        session.select(TileTypeId::Curve).unwrap();
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn new_selection_resets_rotation() {
        let mut session = Session::default();
        session.select(TileTypeId::Curve).unwrap();
        session.rotate_selection();
        assert_eq!(session.rotation(), rot(1));
        session.select(TileTypeId::Switch).unwrap();
        assert_eq!(session.rotation(), rot(0));
    }

    #[test]
    fn cities_cannot_be_selected() {
        let mut session = Session::default();
        assert!(matches!(
            session.select(TileTypeId::City2),
            Err(PuzzleError::NotPlaceable(TileTypeId::City2))
        ));
    }

    #[test]
    fn rotation_needs_a_selection() {
        let mut session = Session::default();
        assert_eq!(session.rotate_selection(), rot(0));
        session.select(TileTypeId::Straight).unwrap();
        for expected in [1, 2, 3, 0] {
            assert_eq!(session.rotate_selection(), rot(expected));
        }
    }

    #[test]
    fn clicks_place_remove_and_protect_cities() {
        let mut session = two_city_session();
        assert_eq!(session.click(1, 1), ClickOutcome::NoSelection);

        session.select(TileTypeId::Straight).unwrap();
        assert_eq!(session.click(1, 1), ClickOutcome::Placed(TileTypeId::Straight));
        assert!(session.grid().get(1, 1).is_some());

        assert_eq!(session.click(1, 1), ClickOutcome::Removed);
        assert!(session.grid().get(1, 1).is_none());

        assert_eq!(session.click(1, 0), ClickOutcome::CityLocked);
        assert!(session.grid().is_city(1, 0));

        assert_eq!(session.click(-1, 2), ClickOutcome::OutOfBounds);
    }

    #[test]
    fn check_reports_disconnection_then_conflicts_then_win() {
        let mut session = two_city_session();
        assert_eq!(session.check(), CheckOutcome::Disconnected);

        session.select(TileTypeId::Straight).unwrap();
        session.click(1, 1);
        session.click(1, 2);
        // Wrongly turned straight: walls on top and bottom.
        session.rotate_selection();
        session.click(1, 3);
        assert_eq!(session.check(), CheckOutcome::Conflicts(2));
        assert!(!session.is_won());

        session.click(1, 3);
        session.rotate_selection();
        session.click(1, 3);
        assert_eq!(session.check(), CheckOutcome::Won);
        assert!(session.is_won());
    }

    #[test]
    fn won_game_ignores_input() {
        let mut session = two_city_session();
        for y in 1..4 {
            session.place(1, y, TileTypeId::Straight, rot(0));
        }
        assert_eq!(session.check(), CheckOutcome::Won);
        assert_eq!(session.click(1, 2), ClickOutcome::GameOver);
        session.select(TileTypeId::Curve).unwrap();
        assert_eq!(session.selected(), None);
        assert_eq!(session.rotate_selection(), rot(0));
    }

    #[test]
    fn outcomes_serialize_for_the_host() {
        let json = serde_json::to_string(&CheckOutcome::Conflicts(3)).unwrap();
        assert_eq!(json, r#"{"outcome":"conflicts","count":3}"#);
        let json = serde_json::to_string(&CheckOutcome::Won).unwrap();
        assert_eq!(json, r#"{"outcome":"won"}"#);
        assert_eq!(ClickOutcome::Placed(TileTypeId::Curve).code(), 0);
        assert_eq!(ClickOutcome::OutOfBounds.code(), 5);
    }
}
