use serde::{Deserialize, Serialize};

use super::input::DEFAULT_SWIPE_MIN_DISTANCE;
use super::types::{DEFAULT_TARGET_VALUE, MAX_TILE_VALUE};
use crate::config::Validate;

const MAX_TARGET_VALUE: u32 = MAX_TILE_VALUE;
const MAX_ANIMATION_MS: u64 = 2000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct Puzzle2048Settings {
    pub target_value: u32,
    pub animation_ms: u64,
    pub swipe_min_distance: f32,
}

impl Validate for Puzzle2048Settings {
    fn validate(&self) -> Result<(), String> {
        if self.target_value < 8 {
            return Err(format!(
                "Target value must be at least 8, got {}",
                self.target_value
            ));
        }
        if self.target_value > MAX_TARGET_VALUE {
            return Err(format!(
                "Target value must be at most {}, got {}",
                MAX_TARGET_VALUE, self.target_value
            ));
        }
        if !self.target_value.is_power_of_two() {
            return Err(format!(
                "Target value must be a power of 2, got {}",
                self.target_value
            ));
        }
        if self.animation_ms > MAX_ANIMATION_MS {
            return Err(format!(
                "Animation duration must be at most {} ms, got {}",
                MAX_ANIMATION_MS, self.animation_ms
            ));
        }
        if self.swipe_min_distance.is_nan() || self.swipe_min_distance <= 0.0 {
            return Err(format!(
                "Swipe distance must be positive, got {}",
                self.swipe_min_distance
            ));
        }
        Ok(())
    }
}

impl Default for Puzzle2048Settings {
    fn default() -> Self {
        Self {
            target_value: DEFAULT_TARGET_VALUE,
            animation_ms: 250,
            swipe_min_distance: DEFAULT_SWIPE_MIN_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Puzzle2048Settings::default().validate().is_ok());
    }

    #[test]
    fn test_target_must_be_power_of_two() {
        let settings = Puzzle2048Settings {
            target_value: 1000,
            ..Puzzle2048Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_target_bounds() {
        let small = Puzzle2048Settings {
            target_value: 4,
            ..Puzzle2048Settings::default()
        };
        let huge = Puzzle2048Settings {
            target_value: 262144,
            ..Puzzle2048Settings::default()
        };
        assert!(small.validate().is_err());
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_animation_and_swipe_limits() {
        let slow = Puzzle2048Settings {
            animation_ms: 5000,
            ..Puzzle2048Settings::default()
        };
        let no_swipe = Puzzle2048Settings {
            swipe_min_distance: 0.0,
            ..Puzzle2048Settings::default()
        };
        let instant = Puzzle2048Settings {
            animation_ms: 0,
            ..Puzzle2048Settings::default()
        };
        assert!(slow.validate().is_err());
        assert!(no_swipe.validate().is_err());
        assert!(instant.validate().is_ok());
    }
}
