use nalgebra::Vector3;

const FINISH_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicOut,
}

impl Easing {
    /// Maps linear progress `u` in [0, 1] onto eased progress in [0, 1].
    pub fn apply(self, u: f32) -> f32 {
        let u = nalgebra::clamp(u, 0.0, 1.0);
        match self {
            Easing::Linear => u,
            Easing::CubicOut => {
                let v = u - 1.0;
                v * v * v + 1.0
            }
        }
    }
}

/// Animates a vector from `start` to `end` over `duration` seconds.
#[derive(Debug, Clone)]
pub struct Tween {
    start: Vector3<f32>,
    end: Vector3<f32>,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(start: Vector3<f32>, end: Vector3<f32>, duration: f32, easing: Easing) -> Self {
        Tween {
            start,
            end,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    pub fn advance(&mut self, dt: f32) -> Vector3<f32> {
        self.elapsed = f32::min(self.elapsed + dt, self.duration);
        // Summed frame times rarely land exactly on the duration
        if self.duration - self.elapsed < FINISH_TOLERANCE {
            self.elapsed = self.duration;
        }
        self.value()
    }

    pub fn value(&self) -> Vector3<f32> {
        // Non-positive durations jump straight to the end
        if self.is_finished() {
            return self.end;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.start + (self.end - self.start) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
