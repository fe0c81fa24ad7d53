use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::utils::error::ConfigError;

/// Movement and body tuning for the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub sneak_speed: f32,
    /// Degrees of rotation per unit of mouse movement.
    pub mouse_sensitivity: f32,
    pub body_width: f32,
    pub body_height: f32,
    pub sneak_height: f32,
    pub eye_height: f32,
    pub sneak_eye_height: f32,
    pub spawn_point: Vec3,
    pub void_threshold: f32,
    pub reach: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            gravity: 32.0,
            jump_impulse: 9.0,
            walk_speed: 4.317,
            sprint_speed: 7.0,
            sneak_speed: 1.31,
            mouse_sensitivity: 0.2,
            body_width: 0.6,
            body_height: 2.0,
            sneak_height: 1.0,
            eye_height: 1.62,
            sneak_eye_height: 1.27,
            spawn_point: Vec3::new(8.0, 12.0, 8.0),
            void_threshold: -20.0,
            reach: 5.0,
        }
    }
}

impl GameplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("sneak_speed", self.sneak_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("body_width", self.body_width),
            ("body_height", self.body_height),
            ("sneak_height", self.sneak_height),
            ("eye_height", self.eye_height),
            ("sneak_eye_height", self.sneak_eye_height),
            ("reach", self.reach),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                warn!("rejected gameplay.{} = {}", name, value);
                return Err(ConfigError::Invalid(format!(
                    "gameplay.{name} must be a positive number, got {value}"
                )));
            }
        }

        if !self.spawn_point.is_finite() || !self.void_threshold.is_finite() {
            return Err(ConfigError::Invalid(
                "gameplay.spawn_point and gameplay.void_threshold must be finite".into(),
            ));
        }

        if self.spawn_point.y <= self.void_threshold {
            return Err(ConfigError::Invalid(format!(
                "spawn height {} is below the void threshold {}",
                self.spawn_point.y, self.void_threshold
            )));
        }

        Ok(())
    }
}
