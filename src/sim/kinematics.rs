//! Plate position integration
//!
//! Positions advance by forward Euler on a constant velocity. Convergent
//! boundaries add an oscillating jitter once the plates are in contact, and
//! the jittered position is what the next step integrates from.

use super::plate::{BoundaryType, Plate, PlateIndex};
use super::state::{Simulation, SimulationFrame};
use crate::consts::{JITTER_AMPLITUDE, JITTER_FREQUENCY};
use crate::error::SimError;

/// Check run parameters before any frame is produced
fn validate_run(plate1: &Plate, plate2: &Plate, frame_count: usize, dt: f64) -> Result<(), SimError> {
    if frame_count < 1 {
        return Err(SimError::invalid("frame_count", "must be at least 1, got 0"));
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::invalid(
            "dt",
            format!("must be positive and finite, got {}", dt),
        ));
    }
    plate1.validate(PlateIndex::First)?;
    plate2.validate(PlateIndex::Second)?;
    Ok(())
}

/// Contact threshold for a pair of plates (mean extent)
#[inline]
pub fn contact_distance(plate1: &Plate, plate2: &Plate) -> f64 {
    (plate1.length + plate2.length) / 2.0
}

/// Integrate both plates independently for `frame_count` frames.
///
/// Frame 0 holds the initial positions exactly. No boundary effect is
/// applied here; see [`simulate`] for that.
pub fn generate_positions(
    plate1: &Plate,
    plate2: &Plate,
    frame_count: usize,
    dt: f64,
) -> Result<Vec<SimulationFrame>, SimError> {
    validate_run(plate1, plate2, frame_count, dt)?;

    let step1 = plate1.velocity() * dt;
    let step2 = plate2.velocity() * dt;

    let mut p1 = plate1.initial_position;
    let mut p2 = plate2.initial_position;
    let mut frames = Vec::with_capacity(frame_count);
    frames.push(SimulationFrame::new(0, p1, p2));

    for t in 1..frame_count {
        p1 += step1;
        p2 += step2;
        frames.push(SimulationFrame::new(t, p1, p2));
    }

    Ok(frames)
}

/// Collision jitter for a single frame.
///
/// Within `plate_length` of each other the plates are pushed by
/// `0.1 * sin(frame_index * 10)` in opposite directions; otherwise the
/// positions come back unchanged.
pub fn apply_convergence_effect(
    frame_index: usize,
    position1: f64,
    position2: f64,
    plate_length: f64,
) -> (f64, f64) {
    if (position2 - position1).abs() < plate_length {
        let offset = JITTER_AMPLITUDE * (frame_index as f64 * JITTER_FREQUENCY).sin();
        (position1 + offset, position2 - offset)
    } else {
        (position1, position2)
    }
}

/// Run a full simulation for the given boundary type.
///
/// Divergent and transform boundaries produce exactly the frames of
/// [`generate_positions`]. Convergent boundaries interleave integration and
/// jitter, so an adjusted frame feeds every later frame.
pub fn simulate(
    plate1: &Plate,
    plate2: &Plate,
    boundary: BoundaryType,
    frame_count: usize,
    dt: f64,
) -> Result<Simulation, SimError> {
    validate_run(plate1, plate2, frame_count, dt)?;

    let step1 = plate1.velocity() * dt;
    let step2 = plate2.velocity() * dt;
    let contact = contact_distance(plate1, plate2);

    let mut p1 = plate1.initial_position;
    let mut p2 = plate2.initial_position;
    let mut contact_frame = None;
    let mut frames = Vec::with_capacity(frame_count);

    for t in 0..frame_count {
        if t > 0 {
            p1 += step1;
            p2 += step2;
        }

        if contact_frame.is_none() && (p2 - p1).abs() < contact {
            log::debug!(
                "{} plates in contact at frame {} (separation {:.3})",
                boundary.as_str(),
                t,
                (p2 - p1).abs()
            );
            contact_frame = Some(t);
        }

        if boundary.has_collision() {
            (p1, p2) = apply_convergence_effect(t, p1, p2, contact);
        }

        frames.push(SimulationFrame::new(t, p1, p2));
    }

    log::debug!(
        "Simulated {} frames ({} boundary, dt={})",
        frames.len(),
        boundary.as_str(),
        dt
    );

    Ok(Simulation::new(boundary, dt, frames, contact_frame))
}
