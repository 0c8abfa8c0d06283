/// Tracks curtain openness as a percentage. 0 is fully up, 100 fully down;
/// the curtain is assumed to start fully down.
pub struct Tracker {
    current: i64,
}

impl Tracker {
    pub fn new() -> Self {
        Self { current: 100 }
    }

    /// Clamps the requested percentage to [0, 100], stores it, and returns
    /// the signed delta from the previous position.
    pub fn set_target(&mut self, percent: i64) -> i64 {
        let percent = percent.clamp(0, 100);
        let delta = percent - self.current;
        self.current = percent;
        delta
    }

    pub fn set_up(&mut self) {
        self.current = 0;
    }

    pub fn set_down(&mut self) {
        self.current = 100;
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    /// Adjusts the position by a raw step count, without clamping. Only the
    /// raw-step debug path goes through here, so the stored percentage can
    /// leave [0, 100].
    pub fn apply_steps(&mut self, steps: i64, full_revolution_steps: i64) {
        let delta = steps.saturating_mul(100) / full_revolution_steps;
        self.current = self.current.saturating_add(delta);
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
