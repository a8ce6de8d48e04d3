use serde::{Deserialize, Serialize};
use swipedeck::DeckOptions;
use swipedeck_adapter::{GestureOptions, SpringConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid session config: `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tuning knobs for a review session, loadable from JSON. Every field is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub visible_count: usize,
    pub prefetch_threshold: usize,
    pub dead_zone: f32,
    pub fly_out_ratio: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub spring_mass: f32,
    /// Display width used for fly-out distances; `None` when rendering headless.
    pub viewport_width: Option<f32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let gesture = GestureOptions::new();
        let deck = DeckOptions::new();
        Self {
            visible_count: deck.visible_count,
            prefetch_threshold: deck.prefetch_threshold,
            dead_zone: gesture.dead_zone,
            fly_out_ratio: gesture.fly_out_ratio,
            spring_stiffness: gesture.fly_out_spring.stiffness,
            spring_damping: gesture.fly_out_spring.damping,
            spring_mass: gesture.fly_out_spring.mass,
            viewport_width: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_count == 0 {
            return Err(ConfigError::Invalid {
                field: "visible_count",
                reason: "must be at least 1",
            });
        }
        if !(self.dead_zone >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "dead_zone",
                reason: "must be a non-negative number",
            });
        }
        if !(self.fly_out_ratio > 0.0) {
            return Err(ConfigError::Invalid {
                field: "fly_out_ratio",
                reason: "must be positive",
            });
        }
        for (field, value) in [
            ("spring_stiffness", self.spring_stiffness),
            ("spring_mass", self.spring_mass),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }
        if !(self.spring_damping >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "spring_damping",
                reason: "must be a non-negative number",
            });
        }
        Ok(())
    }

    pub fn deck_options(&self) -> DeckOptions {
        DeckOptions::new()
            .with_visible_count(self.visible_count)
            .with_prefetch_threshold(self.prefetch_threshold)
    }

    pub fn gesture_options(&self) -> GestureOptions {
        let spring: SpringConfig = SpringConfig::FLY_OUT
            .with_stiffness(self.spring_stiffness)
            .with_damping(self.spring_damping)
            .with_mass(self.spring_mass);
        GestureOptions::new()
            .with_dead_zone(self.dead_zone)
            .with_fly_out_ratio(self.fly_out_ratio)
            .with_fly_out_spring(spring)
    }
}
