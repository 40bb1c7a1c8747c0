//! Plate descriptors and boundary classification

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Direction of travel along the 1-D axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    Leftward,
    #[default]
    Rightward,
}

impl Direction {
    /// Velocity sign: Rightward = +1, Leftward = -1
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Leftward => -1.0,
            Direction::Rightward => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Leftward => "Leftward",
            Direction::Rightward => "Rightward",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "leftward" => Some(Direction::Leftward),
            "right" | "rightward" => Some(Direction::Rightward),
            _ => None,
        }
    }
}

/// How two plates move relative to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryType {
    /// Plates moving apart
    #[default]
    Divergent,
    /// Plates colliding
    Convergent,
    /// Plates sliding past each other
    Transform,
}

impl BoundaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryType::Divergent => "Divergent",
            BoundaryType::Convergent => "Convergent",
            BoundaryType::Transform => "Transform",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "divergent" => Some(BoundaryType::Divergent),
            "convergent" => Some(BoundaryType::Convergent),
            "transform" => Some(BoundaryType::Transform),
            _ => None,
        }
    }

    /// Whether the collision jitter applies at this boundary
    pub fn has_collision(&self) -> bool {
        matches!(self, BoundaryType::Convergent)
    }
}

/// A single plate on the 1-D simulation axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    /// Non-negative speed (arbitrary unit, e.g. cm/year)
    pub speed: f64,
    pub direction: Direction,
    /// Position at frame 0
    pub initial_position: f64,
    /// Spatial extent, only used for the contact threshold
    pub length: f64,
}

impl Plate {
    pub fn new(speed: f64, direction: Direction, initial_position: f64, length: f64) -> Self {
        Self {
            speed,
            direction,
            initial_position,
            length,
        }
    }

    /// Signed velocity (speed * direction sign)
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.speed * self.direction.sign()
    }

    /// Check the plate's fields, naming the first bad one.
    ///
    /// `which` selects the parameter names reported (plate 1 or plate 2).
    pub fn validate(&self, which: PlateIndex) -> Result<(), SimError> {
        let (speed, position, length) = which.parameter_names();
        if !self.speed.is_finite() {
            return Err(SimError::invalid(
                speed,
                format!("must be finite, got {}", self.speed),
            ));
        }
        if self.speed < 0.0 {
            return Err(SimError::invalid(
                speed,
                format!("must be non-negative, got {}", self.speed),
            ));
        }
        if !self.initial_position.is_finite() {
            return Err(SimError::invalid(
                position,
                format!("must be finite, got {}", self.initial_position),
            ));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(SimError::invalid(
                length,
                format!("must be positive and finite, got {}", self.length),
            ));
        }
        Ok(())
    }
}

/// Which of the two simulated plates a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateIndex {
    First,
    Second,
}

impl PlateIndex {
    fn parameter_names(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            PlateIndex::First => ("speed1", "initial_position1", "length1"),
            PlateIndex::Second => ("speed2", "initial_position2", "length2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_sign() {
        let right = Plate::new(5.0, Direction::Rightward, 0.0, 2.0);
        let left = Plate::new(5.0, Direction::Leftward, 0.0, 2.0);
        assert_eq!(right.velocity(), 5.0);
        assert_eq!(left.velocity(), -5.0);
        assert_eq!(Plate::new(0.0, Direction::Leftward, 0.0, 2.0).velocity(), 0.0);
    }

    #[test]
    fn test_labels_parse() {
        assert_eq!(Direction::from_str("Left"), Some(Direction::Leftward));
        assert_eq!(Direction::from_str("rightward"), Some(Direction::Rightward));
        assert_eq!(Direction::from_str("up"), None);
        assert_eq!(BoundaryType::from_str("CONVERGENT"), Some(BoundaryType::Convergent));
        assert_eq!(BoundaryType::from_str("subduction"), None);
        for b in [BoundaryType::Divergent, BoundaryType::Convergent, BoundaryType::Transform] {
            assert_eq!(BoundaryType::from_str(b.as_str()), Some(b));
        }
    }

    #[test]
    fn test_only_convergent_collides() {
        assert!(BoundaryType::Convergent.has_collision());
        assert!(!BoundaryType::Divergent.has_collision());
        assert!(!BoundaryType::Transform.has_collision());
    }

    #[test]
    fn test_validate_rejects_bad_speed() {
        let neg = Plate::new(-1.0, Direction::Rightward, 0.0, 2.0);
        let err = neg.validate(PlateIndex::Second).unwrap_err();
        assert_eq!(err.parameter(), "speed2");

        let nan = Plate::new(f64::NAN, Direction::Rightward, 0.0, 2.0);
        assert_eq!(nan.validate(PlateIndex::First).unwrap_err().parameter(), "speed1");

        let inf = Plate::new(f64::INFINITY, Direction::Rightward, 0.0, 2.0);
        assert!(inf.validate(PlateIndex::First).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_length_and_position() {
        let zero_len = Plate::new(1.0, Direction::Rightward, 0.0, 0.0);
        assert_eq!(zero_len.validate(PlateIndex::First).unwrap_err().parameter(), "length1");

        let bad_pos = Plate::new(1.0, Direction::Rightward, f64::NAN, 2.0);
        assert_eq!(
            bad_pos.validate(PlateIndex::First).unwrap_err().parameter(),
            "initial_position1"
        );

        assert!(Plate::new(10.0, Direction::Leftward, -3.0, 1.0)
            .validate(PlateIndex::First)
            .is_ok());
    }
}
