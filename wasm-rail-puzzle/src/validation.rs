/// Full solution check: no edge conflicts and all cities connected

use serde::Serialize;
use crate::conflicts::{all_conflicts, EdgeConflict};
use crate::connectivity::check_connectivity;
use crate::grid::Grid;
use crate::types::CellCoord;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub overall_valid: bool,
    /// Each conflicting border appears once per owning cell
    pub conflicts: Vec<EdgeConflict>,
    pub all_cities_connected: bool,
    pub reachable_cities: Vec<CellCoord>,
}

impl ValidationReport {
    /// Number of conflicting borders as shown to the player
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len() / 2
    }
}

/// Recompute conflicts and connectivity from the current grid
pub fn validate(grid: &Grid) -> ValidationReport {
    let conflicts = all_conflicts(grid);
    let connectivity = check_connectivity(grid);
    ValidationReport {
        overall_valid: conflicts.is_empty() && connectivity.connected,
        conflicts,
        all_cities_connected: connectivity.connected,
        reachable_cities: connectivity.reachable_cities,
    }
}
