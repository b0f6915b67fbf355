/// Eases the simulation speed towards a slow-motion rate while the pointer is
/// over a body, and back to the base rate otherwise.
#[derive(Debug, Clone)]
pub struct SpeedControl {
    current: f32,
    base: f32,
    slow: f32,
    smoothing: f32,
}

impl SpeedControl {
    pub fn new(base: f32, slow: f32, smoothing: f32) -> Self {
        SpeedControl {
            current: base,
            base,
            slow,
            smoothing,
        }
    }

    pub fn update(&mut self, hovering: bool) {
        let target = if hovering { self.slow } else { self.base };
        self.current += (target - self.current) * self.smoothing;
    }

    /// Distance the system drifts per frame.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Multiplier applied to orbital speeds; 1 at the base rate.
    pub fn time_scale(&self) -> f32 {
        self.current / self.base
    }
}
