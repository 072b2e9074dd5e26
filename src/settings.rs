//! Generator settings and difficulty presets
//!
//! Stored as JSON. Missing fields fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_RADIUS, MAX_PRESET_WIGGLINESS};
use crate::error::Result;
use crate::generation::generator::check_params;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Chaotic,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Chaotic => "Chaotic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "med" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "chaotic" | "max" => Some(Difficulty::Chaotic),
            _ => None,
        }
    }

    /// Wiggliness for this preset. Easy keeps the straightest route.
    pub fn wiggliness(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 4.0,
            Difficulty::Chaotic => MAX_PRESET_WIGGLINESS,
        }
    }
}

/// Generator parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Grid radius (side is `2 * radius + 1`)
    pub radius: u32,
    /// Bias toward disturbing the current path
    pub wiggliness: f32,
    /// Fixed seed for reproducible courses; random when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            wiggliness: Difficulty::default().wiggliness(),
            seed: None,
        }
    }
}

impl GeneratorSettings {
    /// Default settings with a preset's wiggliness
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            wiggliness: difficulty.wiggliness(),
            ..Self::default()
        }
    }

    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.wiggliness = difficulty.wiggliness();
    }

    pub fn validate(&self) -> Result<()> {
        check_params(self.radius, self.wiggliness)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
