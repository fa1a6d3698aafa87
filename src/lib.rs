#![no_std]

mod config;
mod state;
mod responsive;
pub mod curves;
pub mod ema;
pub mod sleep;

pub use config::{
    Config, ConfigError, DEFAULT_AWAKE_ACTIVITY_THRESHOLD, DEFAULT_SLEEP_ACTIVITY_THRESHOLD,
    DEFAULT_SLEEP_DELAY_MS, DEFAULT_SLEEP_ENABLED, DEFAULT_SLEEP_SNAP_BOOST, DEFAULT_SNAP_MULTIPLIER,
};
pub use responsive::ResponsiveFilter;
pub use curves::snap_curve;
pub use ema::AdaptiveEma;
pub use sleep::{SleepState, SleepTracker};
