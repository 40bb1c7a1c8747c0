//! Scene data for the demo charts
//!
//! Closed-form curves and shapes handed to an external renderer. Nothing here
//! draws; every builder returns plain geometry.

pub mod boundary;
pub mod fronts;
pub mod layers;

pub use boundary::{BoundaryProfile, boundary_profile, transform_arrows};
pub use fronts::{AirMass, FrontKind, FrontTrace, LineStyle, front_traces};
pub use layers::{EarthLayer, LayerKind, cross_section, layer_at};

use glam::DVec2;
use serde::Serialize;

/// A labelled polyline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub label: &'static str,
    pub points: Vec<DVec2>,
}

impl Curve {
    /// Sample `f` at each x
    pub fn sample(label: &'static str, xs: &[f64], f: impl Fn(f64) -> f64) -> Self {
        Self {
            label,
            points: xs.iter().map(|&x| DVec2::new(x, f(x))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_sample() {
        let curve = Curve::sample("square", &[0.0, 1.0, 2.0], |x| x * x);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.points[2], DVec2::new(2.0, 4.0));
        assert!(Curve::sample("none", &[], |x| x).is_empty());
    }
}
