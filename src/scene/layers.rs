//! Earth interior cross-section
//!
//! Four concentric discs in arbitrary units, centered at the origin.

use glam::DVec2;
use serde::Serialize;

/// Interior layers, innermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerKind {
    InnerCore,
    OuterCore,
    Mantle,
    Crust,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::InnerCore => "Inner core",
            LayerKind::OuterCore => "Outer core",
            LayerKind::Mantle => "Mantle",
            LayerKind::Crust => "Crust",
        }
    }

    /// Outer radius of the layer
    pub fn radius(&self) -> f64 {
        match self {
            LayerKind::InnerCore => 1.0,
            LayerKind::OuterCore => 2.0,
            LayerKind::Mantle => 3.5,
            LayerKind::Crust => 4.0,
        }
    }
}

const LAYERS: [LayerKind; 4] = [
    LayerKind::InnerCore,
    LayerKind::OuterCore,
    LayerKind::Mantle,
    LayerKind::Crust,
];

/// One disc of the cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EarthLayer {
    pub kind: LayerKind,
    pub name: &'static str,
    pub inner_radius: f64,
    pub radius: f64,
}

impl EarthLayer {
    fn new(kind: LayerKind, inner_radius: f64) -> Self {
        Self {
            kind,
            name: kind.as_str(),
            inner_radius,
            radius: kind.radius(),
        }
    }

    pub fn thickness(&self) -> f64 {
        self.radius - self.inner_radius
    }

    /// Points around the layer's outer edge
    pub fn outline(&self, num_points: usize) -> Vec<DVec2> {
        (0..num_points)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / num_points as f64;
                DVec2::from_angle(theta) * self.radius
            })
            .collect()
    }
}

/// Layers in draw order: outermost first, so inner discs paint over outer ones
pub fn cross_section() -> Vec<EarthLayer> {
    let mut inner = 0.0;
    let mut layers: Vec<EarthLayer> = LAYERS
        .iter()
        .map(|&kind| {
            let layer = EarthLayer::new(kind, inner);
            inner = kind.radius();
            layer
        })
        .collect();
    layers.reverse();
    layers
}

/// Layer containing a point at distance `r` from the center
pub fn layer_at(r: f64) -> Option<LayerKind> {
    if !(0.0..=LayerKind::Crust.radius()).contains(&r) {
        return None;
    }
    LAYERS.iter().copied().find(|kind| r <= kind.radius())
}
