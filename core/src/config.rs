use crate::gesture::SWIPE_THRESHOLD_PX;

pub const ORB_COUNT_DEFAULT: usize = 6;
pub const ORB_COUNT_MAX: usize = 32;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const FLIP_DURATION_MS_DEFAULT: u32 = 1200;
pub const FLIP_DURATION_MS_MAX: u32 = 10_000;
pub const SWIPE_THRESHOLD_MAX_PX: f32 = 1000.0;

pub const CONFIG_KEYS: &[&str] = &[
    "swipe",
    "orbs",
    "breakpoint",
    "flip-ms",
    "reduced-motion",
    "background",
];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown viewer option '{0}'")]
    UnknownKey(String),
    #[error("viewer option '{key}' has unparsable value '{value}'")]
    Unparsable { key: &'static str, value: String },
    #[error("viewer option '{key}' value '{value}' is out of range ({range})")]
    OutOfRange {
        key: &'static str,
        value: String,
        range: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub swipe_threshold_px: f32,
    pub orb_count: usize,
    pub mobile_breakpoint_px: f64,
    pub flip_duration_ms: u32,
    pub reduced_motion: bool,
    pub background: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            orb_count: ORB_COUNT_DEFAULT,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            flip_duration_ms: FLIP_DURATION_MS_DEFAULT,
            reduced_motion: false,
            background: true,
        }
    }
}

impl ViewerConfig {
    /// Applies one `key=value` option. On error the previous value stays.
    pub fn apply(&mut self, key: &str, raw: &str) -> Result<(), ConfigError> {
        let value = raw.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "swipe" => {
                let parsed: f32 = parse_value("swipe", value)?;
                if !(parsed > 0.0 && parsed <= SWIPE_THRESHOLD_MAX_PX) {
                    return Err(out_of_range("swipe", value, "0 < px <= 1000"));
                }
                self.swipe_threshold_px = parsed;
            }
            "orbs" => {
                let parsed: usize = parse_value("orbs", value)?;
                if parsed > ORB_COUNT_MAX {
                    return Err(out_of_range("orbs", value, "0..=32"));
                }
                self.orb_count = parsed;
            }
            "breakpoint" => {
                let parsed: f64 = parse_value("breakpoint", value)?;
                if !(parsed.is_finite() && parsed >= 0.0) {
                    return Err(out_of_range("breakpoint", value, "px >= 0"));
                }
                self.mobile_breakpoint_px = parsed;
            }
            "flip-ms" => {
                let parsed: u32 = parse_value("flip-ms", value)?;
                if parsed > FLIP_DURATION_MS_MAX {
                    return Err(out_of_range("flip-ms", value, "0..=10000"));
                }
                self.flip_duration_ms = parsed;
            }
            "reduced-motion" => {
                self.reduced_motion = parse_flag("reduced-motion", value)?;
            }
            "background" => {
                self.background = parse_flag("background", value)?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn is_mobile_width(&self, viewport_width: f64) -> bool {
        viewport_width < self.mobile_breakpoint_px
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Unparsable {
        key,
        value: value.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Unparsable {
            key,
            value: value.to_string(),
        }),
    }
}

fn out_of_range(key: &'static str, value: &str, range: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        key,
        value: value.to_string(),
        range,
    }
}
