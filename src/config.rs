/// Default snap multiplier. Suits 10-bit ADC readings.
pub const DEFAULT_SNAP_MULTIPLIER: f32 = 0.01;
/// Sleep on inactivity unless turned off.
pub const DEFAULT_SLEEP_ENABLED: bool = true;
/// Inactivity period after which the filter goes to sleep.
pub const DEFAULT_SLEEP_DELAY_MS: u64 = 500;
/// Deviation needed to keep an awake filter awake.
pub const DEFAULT_AWAKE_ACTIVITY_THRESHOLD: f32 = 4.0;
/// Deviation needed to wake a sleeping filter. Larger than the awake threshold.
pub const DEFAULT_SLEEP_ACTIVITY_THRESHOLD: f32 = 20.0;
/// Multiplier applied to the snap factor while sleep is enabled.
///
/// 1.0 leaves the snap factor untouched.
pub const DEFAULT_SLEEP_SNAP_BOOST: f32 = 1.0;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidSnapMultiplier,
    InvalidActivityThreshold,
    InvertedActivityThresholds,
    InvalidSnapBoost,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSnapMultiplier => write!(f, "snap_multiplier must be in range [0.0, 1.0]"),
            ConfigError::InvalidActivityThreshold => write!(f, "activity thresholds must be >= 0.0"),
            ConfigError::InvertedActivityThresholds => {
                write!(f, "sleep_activity_threshold must not be less than awake_activity_threshold")
            }
            ConfigError::InvalidSnapBoost => write!(f, "sleep_snap_boost must be >= 0.0"),
        }
    }
}

/// Filter configuration.
///
/// Thresholds are in sample units and compared against the absolute deviation
/// of a new sample from the current smoothed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Scales the deviation before it enters the snap curve.
    /// Lower = more smoothing, higher = more responsive.
    pub snap_multiplier: f32,
    pub sleep_enabled: bool,
    pub sleep_delay_ms: u64,
    pub awake_activity_threshold: f32,
    pub sleep_activity_threshold: f32,
    pub sleep_snap_boost: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snap_multiplier: DEFAULT_SNAP_MULTIPLIER,
            sleep_enabled: DEFAULT_SLEEP_ENABLED,
            sleep_delay_ms: DEFAULT_SLEEP_DELAY_MS,
            awake_activity_threshold: DEFAULT_AWAKE_ACTIVITY_THRESHOLD,
            sleep_activity_threshold: DEFAULT_SLEEP_ACTIVITY_THRESHOLD,
            sleep_snap_boost: DEFAULT_SLEEP_SNAP_BOOST,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.snap_multiplier) {
            return Err(ConfigError::InvalidSnapMultiplier);
        }

        if !(self.awake_activity_threshold >= 0.0 && self.sleep_activity_threshold >= 0.0) {
            return Err(ConfigError::InvalidActivityThreshold);
        }

        // A sleeping filter waking more easily than an awake one stays awake would flap
        if self.sleep_activity_threshold < self.awake_activity_threshold {
            return Err(ConfigError::InvertedActivityThresholds);
        }

        if !(self.sleep_snap_boost >= 0.0) {
            return Err(ConfigError::InvalidSnapBoost);
        }

        Ok(())
    }

    /// Copy of this config with every field clamped into its valid range.
    ///
    /// Never rejects anything: the snap multiplier is clamped to 0.0..=1.0,
    /// thresholds and boost to >= 0.0, and NaN becomes 0.0.
    pub fn sanitized(&self) -> Self {
        Self {
            snap_multiplier: clamp_unit(self.snap_multiplier),
            sleep_enabled: self.sleep_enabled,
            sleep_delay_ms: self.sleep_delay_ms,
            awake_activity_threshold: clamp_non_negative(self.awake_activity_threshold),
            sleep_activity_threshold: clamp_non_negative(self.sleep_activity_threshold),
            sleep_snap_boost: clamp_non_negative(self.sleep_snap_boost),
        }
    }
}

pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

pub(crate) fn clamp_non_negative(value: f32) -> f32 {
    // f32::max returns the non-NaN operand
    value.max(0.0)
}
