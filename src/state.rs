use crate::ema::AdaptiveEma;
use crate::sleep::SleepTracker;

#[derive(Debug, Clone, Copy)]
pub struct State<T> {
    /// Last sample passed to the filter
    pub raw_value: T,

    /// Smoothed value at full precision
    pub ema: AdaptiveEma,

    pub responsive_value: T,
    pub prev_responsive_value: T,
    pub changed: bool,

    /// Sleep/wake processing state
    pub sleep: SleepTracker,
}

impl<T> Default for State<T>
where
    T: Default,
{
    fn default() -> Self {
        Self {
            raw_value: T::default(),
            ema: AdaptiveEma::default(),
            responsive_value: T::default(),
            prev_responsive_value: T::default(),
            changed: false,
            sleep: SleepTracker::default(),
        }
    }
}
