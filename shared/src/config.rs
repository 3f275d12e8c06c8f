use serde::{Deserialize, Serialize};

// ===== CONFIG TYPES =====

/// Which event field wins when an event carries both `clientX` and `pageX`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePreference {
    /// Use `clientX`; derive it from `pageX - page scroll` only when missing.
    #[default]
    ViewportFirst,
    /// Use `pageX - page scroll`; fall back to `clientX` only when `pageX` is missing.
    PageFirst,
}

/// DOM event families the frontend listens to on the scroll target.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputEvents {
    Mouse,
    Pointer,
    #[default]
    Both,
}

impl InputEvents {
    pub fn listens_to_mouse(self) -> bool {
        matches!(self, InputEvents::Mouse | InputEvents::Both)
    }

    pub fn listens_to_pointer(self) -> bool {
        matches!(self, InputEvents::Pointer | InputEvents::Both)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DragScrollConfig {
    /// Scroll pixels per pointer pixel.
    pub sensitivity: f64,
    pub coordinate_preference: CoordinatePreference,
    /// CSS class toggled on the target while a drag session is active.
    pub active_class: String,
    pub input_events: InputEvents,
    pub debug_logging: bool,
}

impl DragScrollConfig {
    pub const DEFAULT_SENSITIVITY: f64 = 1.0;
    pub const DEFAULT_ACTIVE_CLASS: &'static str = "active";

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: DragScrollConfig = toml::from_str(raw)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        if self.active_class.trim().is_empty() {
            return Err(ConfigError::EmptyActiveClass);
        }
        Ok(self)
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_coordinate_preference(mut self, preference: CoordinatePreference) -> Self {
        self.coordinate_preference = preference;
        self
    }
}

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self {
            sensitivity: Self::DEFAULT_SENSITIVITY,
            coordinate_preference: CoordinatePreference::default(),
            active_class: Self::DEFAULT_ACTIVE_CLASS.to_string(),
            input_events: InputEvents::default(),
            debug_logging: false,
        }
    }
}

// ===== ERRORS =====

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse drag scroll config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("sensitivity must be a finite number greater than zero, got {0}")]
    InvalidSensitivity(f64),
    #[error("active_class must not be empty")]
    EmptyActiveClass,
}
