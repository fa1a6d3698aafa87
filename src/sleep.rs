use crate::config::Config;

/// Sleep state of the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SleepState {
    #[default]
    Awake,
    Asleep,
}

/// Tracks activity and decides when the filter goes to sleep.
///
/// A sample counts as activity when its deviation from the smoothed value
/// exceeds the threshold of the current state. The sleeping threshold is
/// normally the larger one, so a sleeping filter needs a bigger jolt to wake
/// than an awake one needs to stay awake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SleepTracker {
    /// None until the first update seeds it
    last_activity_ms: Option<u64>,
    state: SleepState,
}

impl SleepTracker {
    pub const fn new() -> Self {
        Self {
            last_activity_ms: None,
            state: SleepState::Awake,
        }
    }

    /// Threshold the next deviation has to exceed to count as activity
    pub fn activity_threshold(&self, config: &Config) -> f32 {
        match self.state {
            SleepState::Awake => config.awake_activity_threshold,
            SleepState::Asleep => config.sleep_activity_threshold,
        }
    }

    /// Record a new deviation observed at `now_ms` and recompute the state.
    ///
    /// The first update seeds the activity time with `now_ms`, so a filter
    /// first used long after time zero does not start out asleep. Timestamps
    /// going backwards count as no time elapsed.
    pub fn update(&mut self, deviation: f32, now_ms: u64, config: &Config) -> SleepState {
        let last_activity = if deviation > self.activity_threshold(config) {
            now_ms
        } else {
            *self.last_activity_ms.get_or_insert(now_ms)
        };
        self.last_activity_ms = Some(last_activity);

        // Same as last_activity + delay < now, without the overflow
        self.state = if now_ms.saturating_sub(last_activity) > config.sleep_delay_ms {
            SleepState::Asleep
        } else {
            SleepState::Awake
        };

        self.state
    }

    pub fn state(&self) -> SleepState {
        self.state
    }

    pub fn is_sleeping(&self) -> bool {
        self.state == SleepState::Asleep
    }

    /// Time of the last recorded activity, 0 before the first update
    pub fn last_activity_ms(&self) -> u64 {
        self.last_activity_ms.unwrap_or(0)
    }

    /// Wake up and restart the inactivity timer at the next update
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            sleep_delay_ms: 100,
            awake_activity_threshold: 2.0,
            sleep_activity_threshold: 10.0,
            ..Config::default()
        }
    }

    #[test]
    fn starts_awake() {
        let tracker = SleepTracker::new();
        assert_eq!(tracker.state(), SleepState::Awake);
        assert_eq!(tracker.last_activity_ms(), 0);
    }

    #[test]
    fn first_update_seeds_activity_time() {
        let mut tracker = SleepTracker::new();
        assert_eq!(tracker.update(0.0, 50_000, &config()), SleepState::Awake);
        assert_eq!(tracker.last_activity_ms(), 50_000);
    }

    #[test]
    fn sleeps_only_after_delay_has_passed() {
        let config = config();
        let mut tracker = SleepTracker::new();
        tracker.update(0.0, 0, &config);

        // Exactly sleep_delay_ms elapsed is still awake
        assert_eq!(tracker.update(1.0, 100, &config), SleepState::Awake);
        assert_eq!(tracker.update(1.0, 101, &config), SleepState::Asleep);
    }

    #[test]
    fn threshold_depends_on_state() {
        let config = config();
        let mut tracker = SleepTracker::new();
        assert_eq!(tracker.activity_threshold(&config), 2.0);

        tracker.update(0.0, 0, &config);
        tracker.update(0.0, 200, &config);
        assert_eq!(tracker.activity_threshold(&config), 10.0);
    }

    #[test]
    fn reset_wakes_up() {
        let config = config();
        let mut tracker = SleepTracker::new();
        tracker.update(0.0, 0, &config);
        tracker.update(0.0, 200, &config);
        assert!(tracker.is_sleeping());

        tracker.reset();
        assert!(!tracker.is_sleeping());
        assert_eq!(tracker.update(0.0, 10_000, &config), SleepState::Awake);
    }
}
