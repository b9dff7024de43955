//! Harness configuration, loadable from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// One kind of collectible, drawn uniformly from [`SimConfig::items`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub name: String,
    pub value: i32,
    pub weight: i32,
    pub stress: i32,
}

impl ItemTemplate {
    pub fn new(name: impl Into<String>, value: i32, weight: i32, stress: i32) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
            stress,
        }
    }
}

/// Every knob of a headless round. Missing keys fall back to [`SimConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Field width, centred on the origin.
    pub map_width: f32,
    /// Field height, centred on the origin.
    pub map_height: f32,
    /// Quad subdivision levels; the field holds `4^depth` items.
    pub subdivision_depth: u32,
    /// Inset from each cell edge when placing an item.
    pub padding: f32,
    /// Seconds per decade before stress scaling.
    pub time_limit: f32,
    pub age_step: u32,
    /// Reaching this age ends the round.
    pub final_age: u32,
    pub max_weight: i32,
    /// Stress strictly above this ends the round.
    pub stress_limit: i32,
    pub pickup_radius: f32,
    pub base_speed: f32,
    pub min_speed: f32,
    /// Movement integration step.
    pub fixed_dt: f32,
    pub seed: u64,
    pub items: Vec<ItemTemplate>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            map_width: 20.0,
            map_height: 15.0,
            subdivision_depth: 3,
            padding: 0.5,
            time_limit: 60.0,
            age_step: 10,
            final_age: 60,
            max_weight: 50,
            stress_limit: 100,
            pickup_radius: 0.6,
            base_speed: 5.0,
            min_speed: 1.0,
            fixed_dt: 0.02,
            seed: 0,
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate::new("friendship", 8, 2, 0),
        ItemTemplate::new("study", 15, 6, 8),
        ItemTemplate::new("travel", 12, 4, -5),
        ItemTemplate::new("career", 25, 10, 15),
        ItemTemplate::new("all-nighter", 5, 1, 12),
        ItemTemplate::new("hobby", 6, 2, -8),
        ItemTemplate::new("side project", 18, 8, 10),
        ItemTemplate::new("family", 10, 5, -3),
    ]
}

impl SimConfig {
    /// Load from a YAML file and validate.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SimError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|source| SimError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("map_width", self.map_width),
            ("map_height", self.map_height),
            ("time_limit", self.time_limit),
            ("pickup_radius", self.pickup_radius),
            ("base_speed", self.base_speed),
            ("min_speed", self.min_speed),
            ("fixed_dt", self.fixed_dt),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "padding must be non-negative, got {}",
                self.padding
            )));
        }
        if self.max_weight <= 0 {
            return Err(SimError::InvalidConfig(format!(
                "max_weight must be positive, got {}",
                self.max_weight
            )));
        }
        if self.age_step == 0 {
            return Err(SimError::InvalidConfig("age_step must be non-zero".into()));
        }
        if self.subdivision_depth > 8 {
            return Err(SimError::InvalidConfig(format!(
                "subdivision_depth {} would spawn more than 4^8 items",
                self.subdivision_depth
            )));
        }
        if self.items.is_empty() {
            return Err(SimError::InvalidConfig("item table is empty".into()));
        }
        Ok(())
    }

    pub fn half_extents(&self) -> (f32, f32) {
        (self.map_width / 2.0, self.map_height / 2.0)
    }

    /// Number of decades a full round lasts.
    pub fn decades(&self) -> u32 {
        self.final_age.div_ceil(self.age_step)
    }
}
