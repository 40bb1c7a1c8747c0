//! Boundary profile charts
//!
//! - Divergent: two plates bending apart, `tanh(x)` and `-tanh(x)`
//! - Convergent: a filled collision ridge, `5 - |x|`
//! - Transform: two opposing unit arrows at a chosen heading

use glam::DVec2;
use serde::Serialize;

use super::Curve;
use crate::linspace;
use crate::sim::BoundaryType;

/// Samples per profile curve
pub const PROFILE_SAMPLES: usize = 100;
/// Divergent profile x-range
pub const DIVERGENT_EXTENT: f64 = 10.0;
/// Convergent profile x-range
pub const CONVERGENT_EXTENT: f64 = 5.0;
/// Ridge height at the collision point
pub const RIDGE_PEAK: f64 = 5.0;
/// Transform arrow heading when none is chosen (degrees)
pub const DEFAULT_TRANSFORM_ANGLE: f64 = 45.0;

/// Chart data for one boundary type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum BoundaryProfile {
    Divergent { plate_a: Curve, plate_b: Curve },
    /// Region between `ridge` and `baseline` is filled
    Convergent { ridge: Curve, baseline: f64 },
    /// Arrows start at the origin
    Transform {
        angle_deg: f64,
        forward: DVec2,
        backward: DVec2,
    },
}

impl BoundaryProfile {
    pub fn boundary(&self) -> BoundaryType {
        match self {
            BoundaryProfile::Divergent { .. } => BoundaryType::Divergent,
            BoundaryProfile::Convergent { .. } => BoundaryType::Convergent,
            BoundaryProfile::Transform { .. } => BoundaryType::Transform,
        }
    }
}

/// Opposing unit vectors at `angle_deg`
pub fn transform_arrows(angle_deg: f64) -> (DVec2, DVec2) {
    let forward = DVec2::from_angle(angle_deg.to_radians());
    (forward, -forward)
}

/// Build the profile chart for `boundary`.
///
/// `angle_deg` is only used by transform boundaries.
pub fn boundary_profile(boundary: BoundaryType, angle_deg: f64) -> BoundaryProfile {
    match boundary {
        BoundaryType::Divergent => {
            let xs = linspace(-DIVERGENT_EXTENT, DIVERGENT_EXTENT, PROFILE_SAMPLES);
            BoundaryProfile::Divergent {
                plate_a: Curve::sample("Plate A", &xs, f64::tanh),
                plate_b: Curve::sample("Plate B", &xs, |x| -x.tanh()),
            }
        }
        BoundaryType::Convergent => {
            let xs = linspace(-CONVERGENT_EXTENT, CONVERGENT_EXTENT, PROFILE_SAMPLES);
            BoundaryProfile::Convergent {
                ridge: Curve::sample("Collision ridge", &xs, |x| RIDGE_PEAK - x.abs()),
                baseline: 0.0,
            }
        }
        BoundaryType::Transform => {
            let (forward, backward) = transform_arrows(angle_deg);
            BoundaryProfile::Transform {
                angle_deg,
                forward,
                backward,
            }
        }
    }
}
