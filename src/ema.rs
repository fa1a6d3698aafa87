/// Exponential moving average with a per-update weight.
///
/// Unlike a fixed-alpha EMA the blend weight is supplied on every call, so the
/// caller can decide how far each sample pulls the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveEma {
    value: f32,
}

impl AdaptiveEma {
    /// Create new EMA starting at 0.0
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Apply EMA: value += (input - value) * weight
    ///
    /// A weight of 0.0 leaves the estimate untouched, 1.0 jumps straight to the input.
    pub fn apply(&mut self, input: f32, weight: f32) -> f32 {
        debug_assert!(
            (0.0..=1.0).contains(&weight),
            "EMA weight must be in range [0.0, 1.0], got {}",
            weight
        );

        let next = self.value + (input - self.value) * weight;

        // input - value can overflow for inputs near f32::MAX of opposite sign
        self.value = if next.is_finite() {
            next
        } else {
            weight * input + (1.0 - weight) * self.value
        };
        self.value
    }

    /// Current estimate
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Absolute distance between `input` and the current estimate
    pub fn deviation(&self, input: f32) -> f32 {
        if input > self.value {
            input - self.value
        } else {
            self.value - input
        }
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

impl Default for AdaptiveEma {
    fn default() -> Self {
        Self::new()
    }
}
