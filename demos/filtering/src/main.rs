//! Demonstrates adaptive smoothing with responsive-read
//!
//! Feeds a simulated 10-bit ADC signal (noise, then a fast move, then rest)
//! through filters with different settings and prints the results.

use responsive_read::{Config, ResponsiveFilter};

/// Deterministic +-3 noise pattern
const NOISE: [i32; 8] = [0, 2, -1, 3, -3, 1, -2, 2];

fn sample_at(step: usize) -> i32 {
    let base = match step {
        0..=19 => 500,
        20..=24 => 500 + (step as i32 - 19) * 80,
        _ => 900,
    };
    base + NOISE[step % NOISE.len()]
}

fn run(label: &str, mut filter: ResponsiveFilter) {
    println!("{}", label);
    println!("   t(ms)  raw → output  smooth    changed sleeping");

    for step in 0..60 {
        let now_ms = step as u64 * 20;
        let raw = sample_at(step);
        let output = filter.advance(raw, now_ms);

        println!(
            "   {:5}  {:4} → {:4}    {:8.2}  {:7} {:8}",
            now_ms,
            raw,
            output,
            filter.smooth_value(),
            filter.has_changed(),
            filter.is_sleeping()
        );
    }
    println!();
}

fn main() {
    println!("=== responsive-read Filtering Examples ===\n");

    // Example 1: Default snap multiplier, no sleep
    run("1. snap_multiplier=0.01, sleep disabled", ResponsiveFilter::new(false, 0.01));

    // Example 2: Heavier smoothing
    run("2. snap_multiplier=0.001, sleep disabled", ResponsiveFilter::new(false, 0.001));

    // Example 3: Sleep with default timing
    run("3. snap_multiplier=0.01, sleep enabled (500 ms)", ResponsiveFilter::new(true, 0.01));

    // Example 4: Sleep with custom timing
    let config = Config {
        snap_multiplier: 0.01,
        sleep_enabled: true,
        sleep_delay_ms: 200,
        awake_activity_threshold: 2.0,
        sleep_activity_threshold: 10.0,
        ..Config::default()
    };
    let filter = ResponsiveFilter::try_with_config(config).expect("Valid config");
    run("4. Custom sleep timing (200 ms, thresholds 2/10)", filter);
}
