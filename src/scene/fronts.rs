//! Weather front curves
//!
//! Warm air follows `sin(x)`, cold air `cos(x)`, over distance 0..10. Warm
//! and cold fronts offset one air mass to show which one is overriding.

use serde::Serialize;

use super::Curve;
use crate::linspace;

/// Samples per air-mass curve
pub const FRONT_SAMPLES: usize = 100;
/// Horizontal distance covered by the chart
pub const FRONT_DISTANCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum FrontKind {
    #[default]
    Warm,
    Cold,
    Stationary,
    Occluded,
}

impl FrontKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrontKind::Warm => "Warm front",
            FrontKind::Cold => "Cold front",
            FrontKind::Stationary => "Stationary front",
            FrontKind::Occluded => "Occluded front",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "warm" => Some(FrontKind::Warm),
            "cold" => Some(FrontKind::Cold),
            "stationary" => Some(FrontKind::Stationary),
            "occluded" => Some(FrontKind::Occluded),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AirMass {
    Warm,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// One air-mass curve (x = distance, y = altitude)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontTrace {
    pub air: AirMass,
    pub style: LineStyle,
    pub curve: Curve,
}

fn trace(air: AirMass, style: LineStyle, xs: &[f64], shift: f64) -> FrontTrace {
    let curve = match air {
        AirMass::Warm => Curve::sample("Warm air", xs, |x| x.sin() + shift),
        AirMass::Cold => Curve::sample("Cold air", xs, |x| x.cos() + shift),
    };
    FrontTrace { air, style, curve }
}

/// Curves for `kind`, in the order they are drawn
pub fn front_traces(kind: FrontKind) -> Vec<FrontTrace> {
    let xs = linspace(0.0, FRONT_DISTANCE, FRONT_SAMPLES);
    match kind {
        FrontKind::Warm => vec![
            trace(AirMass::Warm, LineStyle::Solid, &xs, 0.0),
            trace(AirMass::Cold, LineStyle::Solid, &xs, -1.0),
        ],
        FrontKind::Cold => vec![
            trace(AirMass::Cold, LineStyle::Solid, &xs, 0.0),
            trace(AirMass::Warm, LineStyle::Solid, &xs, 1.0),
        ],
        FrontKind::Stationary | FrontKind::Occluded => vec![
            trace(AirMass::Warm, LineStyle::Dotted, &xs, 0.0),
            trace(AirMass::Cold, LineStyle::Dotted, &xs, 0.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn air(traces: &[FrontTrace], air: AirMass) -> &FrontTrace {
        traces.iter().find(|t| t.air == air).unwrap()
    }

    #[test]
    fn test_warm_front_lowers_cold_air() {
        let traces = front_traces(FrontKind::Warm);
        assert_eq!(traces[0].air, AirMass::Warm);
        let cold = air(&traces, AirMass::Cold);
        assert_eq!(cold.curve.len(), FRONT_SAMPLES);
        assert_eq!(cold.curve.points[0].y, 0.0);
        assert!(cold.curve.points.iter().all(|p| (p.y - (p.x.cos() - 1.0)).abs() < 1e-12));
    }

    #[test]
    fn test_cold_front_raises_warm_air() {
        let traces = front_traces(FrontKind::Cold);
        assert_eq!(traces[0].air, AirMass::Cold);
        let warm = air(&traces, AirMass::Warm);
        assert_eq!(warm.curve.points[0].y, 1.0);
        assert!(traces.iter().all(|t| t.style == LineStyle::Solid));
    }

    #[test]
    fn test_stationary_and_occluded_are_dotted() {
        for kind in [FrontKind::Stationary, FrontKind::Occluded] {
            let traces = front_traces(kind);
            assert_eq!(traces.len(), 2);
            assert!(traces.iter().all(|t| t.style == LineStyle::Dotted));
            let warm = air(&traces, AirMass::Warm);
            assert_eq!(warm.curve.points[99].x, 10.0);
            assert!((warm.curve.points[99].y - 10.0_f64.sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_front_labels() {
        assert_eq!(FrontKind::from_str("Occluded"), Some(FrontKind::Occluded));
        assert_eq!(FrontKind::from_str("dry"), None);
        assert_eq!(FrontKind::Cold.as_str(), "Cold front");
    }
}
