//! Simulation settings
//!
//! Stand-in for the demo's widget state. Loaded from and saved to JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::error::SimError;
use crate::sim::{self, BoundaryType, Direction, Plate, Simulation};

/// Errors from loading, saving or applying settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SimError),
}

/// Parameters for one plate-boundary run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    // === Plate 1 ===
    pub speed1: f64,
    pub direction1: Direction,
    pub initial_position1: f64,

    // === Plate 2 ===
    pub speed2: f64,
    pub direction2: Direction,
    pub initial_position2: f64,

    /// Shared plate extent (contact threshold)
    pub plate_length: f64,
    pub boundary: BoundaryType,

    // === Resolution ===
    pub frame_count: usize,
    pub dt: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            speed1: 5.0,
            direction1: Direction::Rightward,
            initial_position1: 0.0,

            speed2: 5.0,
            direction2: Direction::Leftward,
            initial_position2: 10.0,

            plate_length: DEFAULT_PLATE_LENGTH,
            boundary: BoundaryType::Convergent,

            frame_count: DEFAULT_FRAME_COUNT,
            dt: DEFAULT_DT,
        }
    }
}

impl SimSettings {
    pub fn plate1(&self) -> Plate {
        Plate::new(
            self.speed1,
            self.direction1,
            self.initial_position1,
            self.plate_length,
        )
    }

    pub fn plate2(&self) -> Plate {
        Plate::new(
            self.speed2,
            self.direction2,
            self.initial_position2,
            self.plate_length,
        )
    }

    /// Whether both speeds sit inside the demo slider range
    pub fn within_ui_bounds(&self) -> bool {
        let in_range = |s: f64| (0.0..=MAX_UI_SPEED).contains(&s);
        in_range(self.speed1) && in_range(self.speed2)
    }

    /// Run the engine with these settings
    pub fn simulate(&self) -> Result<Simulation, SimError> {
        if !self.within_ui_bounds() {
            log::warn!(
                "Speeds ({}, {}) outside slider range 0..={}",
                self.speed1,
                self.speed2,
                MAX_UI_SPEED
            );
        }
        sim::simulate(
            &self.plate1(),
            &self.plate2(),
            self.boundary,
            self.frame_count,
            self.dt,
        )
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_head_on_collision() {
        let settings = SimSettings::default();
        assert!(settings.within_ui_bounds());
        assert_eq!(settings.plate1().velocity(), 5.0);
        assert_eq!(settings.plate2().velocity(), -5.0);

        let sim = settings.simulate().unwrap();
        assert_eq!(sim.len(), DEFAULT_FRAME_COUNT);
        assert_eq!(sim.boundary, BoundaryType::Convergent);
        assert!(sim.contact_frame().is_some());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            SimSettings::from_json(r#"{ "speed1": 2.5, "boundary": "Transform" }"#).unwrap();
        assert_eq!(settings.speed1, 2.5);
        assert_eq!(settings.boundary, BoundaryType::Transform);
        assert_eq!(settings.speed2, 5.0);
        assert_eq!(settings.frame_count, DEFAULT_FRAME_COUNT);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = SimSettings {
            direction1: Direction::Leftward,
            frame_count: 7,
            ..Default::default()
        };
        let back = SimSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = SimSettings::from_json(r#"{ "boundary": "Sideways" }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_invalid_parameters_surface() {
        let settings = SimSettings {
            dt: 0.0,
            ..Default::default()
        };
        let err = settings.simulate().unwrap_err();
        assert_eq!(err.parameter(), "dt");

        let wrapped: SettingsError = err.into();
        assert!(wrapped.to_string().contains("dt"));
    }

    #[test]
    fn test_speed_above_slider_still_runs() {
        let settings = SimSettings {
            speed1: 25.0,
            ..Default::default()
        };
        assert!(!settings.within_ui_bounds());
        assert!(settings.simulate().is_ok());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "tectonic_demos_settings_{}.json",
            std::process::id()
        ));
        let settings = SimSettings {
            speed2: 1.25,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = SimSettings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);

        let missing = SimSettings::load(Path::new("/nonexistent/tectonic.json")).unwrap_err();
        assert!(matches!(missing, SettingsError::Io(_)));
    }
}
