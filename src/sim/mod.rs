//! Deterministic plate kinematics
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Whole runs produced eagerly, consumers iterate at their own pace
//! - No rendering or platform dependencies

pub mod kinematics;
pub mod plate;
pub mod state;

pub use kinematics::{apply_convergence_effect, contact_distance, generate_positions, simulate};
pub use plate::{BoundaryType, Direction, Plate, PlateIndex};
pub use state::{Simulation, SimulationFrame};
