//! Tectonic Demos - plate boundary kinematics and earth-science scene data
//!
//! Core modules:
//! - `sim`: Deterministic plate kinematics (position integration, collision jitter)
//! - `scene`: Closed-form data for the boundary, earth-layer and weather-front demos
//! - `settings`: Serializable simulation parameters
//! - `error`: Error types

pub mod error;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::{SettingsError, SimSettings};

/// Simulation constants
pub mod consts {
    /// Default number of frames produced per run
    pub const DEFAULT_FRAME_COUNT: usize = 100;
    /// Default integration step
    pub const DEFAULT_DT: f64 = 0.1;
    /// Default plate extent (contact threshold)
    pub const DEFAULT_PLATE_LENGTH: f64 = 2.0;
    /// Slider bound for plate speed in the demo UI
    pub const MAX_UI_SPEED: f64 = 10.0;

    /// Convergence jitter amplitude (position units)
    pub const JITTER_AMPLITUDE: f64 = 0.1;
    /// Convergence jitter angular multiplier (radians per frame)
    pub const JITTER_FREQUENCY: f64 = 10.0;
}

/// Evenly spaced samples over `[start, end]`, both ends included.
///
/// A count of one yields `[start]`, zero yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-10.0, 10.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -10.0);
        assert_eq!(xs[99], 10.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }
}
