use num_traits::AsPrimitive;

use crate::config::{Config, ConfigError, clamp_non_negative, clamp_unit};
use crate::curves::snap_curve;
use crate::sleep::SleepState;
use crate::state::State;

/// Adaptive smoothing filter for a single channel of noisy samples.
///
/// Small deviations from the smoothed value are filtered heavily while large,
/// fast changes pass through almost immediately. With sleep enabled the
/// output freezes after a period without activity.
///
/// `T` is the sample type. The output is the smoothed value truncated toward
/// zero and converted back to `T`.
#[derive(Debug, Clone)]
pub struct ResponsiveFilter<T = i32> {
    config: Config,
    state: State<T>,
}

impl<T> ResponsiveFilter<T>
where
    T: Copy + PartialEq + Default + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    /// Create a filter with default thresholds and sleep delay.
    ///
    /// `snap_multiplier` is clamped to 0.0..=1.0.
    pub fn new(sleep_enabled: bool, snap_multiplier: f32) -> Self {
        Self::with_config(Config {
            sleep_enabled,
            snap_multiplier,
            ..Config::default()
        })
    }

    /// Create a filter from a config, clamping out-of-range fields.
    pub fn with_config(config: Config) -> Self {
        Self {
            config: config.sanitized(),
            state: State::default(),
        }
    }

    /// Create a filter from a config, rejecting out-of-range fields.
    pub fn try_with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: State::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the snap multiplier, clamped to 0.0..=1.0.
    ///
    /// Only affects future updates, the smoothed value is left alone.
    pub fn set_snap_multiplier(&mut self, snap_multiplier: f32) {
        self.config.snap_multiplier = clamp_unit(snap_multiplier);
    }

    pub fn snap_multiplier(&self) -> f32 {
        self.config.snap_multiplier
    }

    /// Enable sleep. The inactivity timer starts at the next update.
    pub fn enable_sleep(&mut self) {
        self.config.sleep_enabled = true;
        self.state.sleep.reset();
    }

    pub fn disable_sleep(&mut self) {
        self.config.sleep_enabled = false;
        self.state.sleep.reset();
    }

    pub fn set_sleep_delay_ms(&mut self, sleep_delay_ms: u64) {
        self.config.sleep_delay_ms = sleep_delay_ms;
    }

    /// Clamped to >= 0.0
    pub fn set_awake_activity_threshold(&mut self, threshold: f32) {
        self.config.awake_activity_threshold = clamp_non_negative(threshold);
    }

    /// Clamped to >= 0.0
    pub fn set_sleep_activity_threshold(&mut self, threshold: f32) {
        self.config.sleep_activity_threshold = clamp_non_negative(threshold);
    }

    /// Clamped to >= 0.0
    pub fn set_sleep_snap_boost(&mut self, boost: f32) {
        self.config.sleep_snap_boost = clamp_non_negative(boost);
    }

    /// Feed one sample taken at `now_ms` and return the filtered value.
    ///
    /// `now_ms` should be non-decreasing. Timestamps going backwards are
    /// treated as no time elapsed. NaN and infinite samples leave the
    /// smoothed value untouched and never count as activity.
    pub fn advance(&mut self, sample: T, now_ms: u64) -> T {
        self.state.raw_value = sample;
        self.state.prev_responsive_value = self.state.responsive_value;

        let input: f32 = sample.as_();
        let finite = input.is_finite();

        // Whole sample units, a deviation of 4.9 does not exceed a threshold of 4.
        // Non-finite samples carry no reading: time still passes, the estimate holds.
        let deviation = if finite {
            libm::truncf(self.state.ema.deviation(input))
        } else {
            0.0
        };

        if self.config.sleep_enabled {
            let sleep = self.state.sleep.update(deviation, now_ms, &self.config);

            // Hold the output while asleep
            if sleep == SleepState::Asleep {
                return self.publish();
            }
        }

        if !finite {
            return self.publish();
        }

        let mut snap = snap_curve(deviation * self.config.snap_multiplier);

        if self.config.sleep_enabled {
            // Keep the EMA weight within 0.0..=1.0 for boosts above one
            snap = (snap * self.config.sleep_snap_boost).min(1.0);
        }

        self.state.ema.apply(input, snap);
        self.publish()
    }

    fn publish(&mut self) -> T {
        self.state.responsive_value = libm::truncf(self.state.ema.value()).as_();
        self.state.changed = self.state.responsive_value != self.state.prev_responsive_value;
        self.state.responsive_value
    }

    /// Last sample passed to `advance`
    pub fn raw_value(&self) -> T {
        self.state.raw_value
    }

    /// Filtered output of the last `advance`
    pub fn responsive_value(&self) -> T {
        self.state.responsive_value
    }

    /// Smoothed value before truncation
    pub fn smooth_value(&self) -> f32 {
        self.state.ema.value()
    }

    /// Whether the last `advance` changed the filtered output
    pub fn has_changed(&self) -> bool {
        self.state.changed
    }

    /// Always false while sleep is disabled
    pub fn is_sleeping(&self) -> bool {
        self.config.sleep_enabled && self.state.sleep.is_sleeping()
    }

    pub fn sleep_state(&self) -> SleepState {
        if self.is_sleeping() {
            SleepState::Asleep
        } else {
            SleepState::Awake
        }
    }

    /// Time of the last sample that counted as activity
    pub fn last_activity_ms(&self) -> u64 {
        self.state.sleep.last_activity_ms()
    }

    /// Return to the freshly constructed state, keeping the configuration
    pub fn reset(&mut self) {
        self.state = State::default();
    }
}

impl<T> Default for ResponsiveFilter<T>
where
    T: Copy + PartialEq + Default + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}
