//! Simulation output types
//!
//! A run is produced eagerly and handed to the consumer as a finite,
//! restartable sequence of frames.

use serde::{Deserialize, Serialize};

use super::plate::BoundaryType;

/// Both plate positions at one time step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationFrame {
    pub time_index: usize,
    pub position1: f64,
    pub position2: f64,
}

impl SimulationFrame {
    pub fn new(time_index: usize, position1: f64, position2: f64) -> Self {
        Self {
            time_index,
            position1,
            position2,
        }
    }

    /// Absolute separation between the plates
    #[inline]
    pub fn separation(&self) -> f64 {
        (self.position2 - self.position1).abs()
    }
}

/// A completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub boundary: BoundaryType,
    pub dt: f64,
    frames: Vec<SimulationFrame>,
    /// First frame at which the plates were within contact distance
    contact_frame: Option<usize>,
}

impl Simulation {
    pub(crate) fn new(
        boundary: BoundaryType,
        dt: f64,
        frames: Vec<SimulationFrame>,
        contact_frame: Option<usize>,
    ) -> Self {
        Self {
            boundary,
            dt,
            frames,
            contact_frame,
        }
    }

    pub fn frames(&self) -> &[SimulationFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, time_index: usize) -> Option<&SimulationFrame> {
        self.frames.get(time_index)
    }

    pub fn first(&self) -> Option<&SimulationFrame> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&SimulationFrame> {
        self.frames.last()
    }

    pub fn contact_frame(&self) -> Option<usize> {
        self.contact_frame
    }

    /// Elapsed simulated time at the last frame
    pub fn duration(&self) -> f64 {
        self.frames.len().saturating_sub(1) as f64 * self.dt
    }

    /// Iterate frames from the start; may be called any number of times
    pub fn iter(&self) -> std::slice::Iter<'_, SimulationFrame> {
        self.frames.iter()
    }

    /// Plate 1 positions in time order
    pub fn positions1(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.position1).collect()
    }

    /// Plate 2 positions in time order
    pub fn positions2(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.position2).collect()
    }

    pub fn into_frames(self) -> Vec<SimulationFrame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a Simulation {
    type Item = &'a SimulationFrame;
    type IntoIter = std::slice::Iter<'a, SimulationFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Simulation {
        let frames = vec![
            SimulationFrame::new(0, 0.0, 4.0),
            SimulationFrame::new(1, 1.0, 3.0),
            SimulationFrame::new(2, 2.0, 2.5),
        ];
        Simulation::new(BoundaryType::Divergent, 0.5, frames, None)
    }

    #[test]
    fn test_separation() {
        assert_eq!(SimulationFrame::new(0, 3.0, 1.0).separation(), 2.0);
        assert_eq!(SimulationFrame::new(0, -1.0, 1.0).separation(), 2.0);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let sim = sample();
        let first: Vec<_> = sim.iter().copied().collect();
        let second: Vec<_> = (&sim).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_accessors() {
        let sim = sample();
        assert_eq!(sim.len(), 3);
        assert!(!sim.is_empty());
        assert_eq!(sim.positions1(), vec![0.0, 1.0, 2.0]);
        assert_eq!(sim.positions2(), vec![4.0, 3.0, 2.5]);
        assert_eq!(sim.last().map(|f| f.time_index), Some(2));
        assert!((sim.duration() - 1.0).abs() < 1e-12);
        assert_eq!(sim.contact_frame(), None);
    }
}
