//! Player configuration.

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Configuration for a tween player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Multiplier applied to every frame delta.
    pub speed: f32,
    /// Upper bound on a single raw frame delta (frame hitches), in seconds.
    pub max_frame_dt: Option<f32>,
    /// Start playing on the first update without an explicit `Play`.
    pub autostart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: 1.0,
            max_frame_dt: None,
            autostart: true,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TweenError> {
        let cfg: Config = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), TweenError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(TweenError::InvalidConfig {
                reason: format!("speed must be finite and >= 0, got {}", self.speed),
            });
        }
        if let Some(max) = self.max_frame_dt {
            if max.is_nan() || max <= 0.0 {
                return Err(TweenError::InvalidConfig {
                    reason: format!("max_frame_dt must be > 0, got {max}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = Config::from_json_str(r#"{ "speed": 2.0 }"#).unwrap();
        assert_eq!(cfg.speed, 2.0);
        assert_eq!(cfg.max_frame_dt, None);
        assert!(cfg.autostart);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_json_str(r#"{ "speed": -1.0 }"#),
            Err(TweenError::InvalidConfig { .. })
        ));
        assert!(matches!(
            Config::from_json_str(r#"{ "max_frame_dt": 0.0 }"#),
            Err(TweenError::InvalidConfig { .. })
        ));
        assert!(matches!(
            Config::from_json_str("not json"),
            Err(TweenError::ConfigParse(_))
        ));
    }
}
