use std::f32::consts::PI;

use nalgebra::{Point3, Vector3};

use crate::math::easing::{Easing, Tween};
use crate::math::geometry::lerp_point;

const PITCH_LIMIT: f32 = 0.01;
const ZOOM_LIMITS: (f32, f32) = (1.0, 2000.0);

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
}

impl CameraRig {
    pub fn new(eye: Point3<f32>, target: Point3<f32>) -> Self {
        CameraRig { eye, target }
    }

    pub fn translate(&mut self, delta: &Vector3<f32>) {
        self.eye += *delta;
        self.target += *delta;
    }

    /// Swings the eye around the target. `dyaw` turns about the vertical axis,
    /// `dpitch` tilts towards the poles, which are never quite reached.
    pub fn orbit(&mut self, dyaw: f32, dpitch: f32) {
        let offset = self.eye - self.target;
        let radius = offset.norm();
        if radius == 0.0 {
            return;
        }

        let yaw = offset.x.atan2(offset.z) + dyaw;
        // polar angle measured from +y
        let pitch = nalgebra::clamp(
            (offset.y / radius).acos() + dpitch,
            PITCH_LIMIT,
            PI - PITCH_LIMIT,
        );
        self.eye = self.target
            + radius
                * Vector3::new(
                    pitch.sin() * yaw.sin(),
                    pitch.cos(),
                    pitch.sin() * yaw.cos(),
                );
    }

    /// Scales the eye's distance from the target.
    pub fn zoom(&mut self, factor: f32) {
        let offset = self.eye - self.target;
        let radius = nalgebra::clamp(offset.norm() * factor, ZOOM_LIMITS.0, ZOOM_LIMITS.1);
        if let Some(dir) = offset.try_normalize(f32::EPSILON) {
            self.eye = self.target + dir * radius;
        }
    }

    /// Blends towards a viewpoint offset from `body`, scaled by its radius.
    /// Each call closes `blend` of the remaining gap, so the camera settles in
    /// smoothly instead of cutting.
    pub fn chase(&mut self, body: &Point3<f32>, radius: f32, distance: f32, blend: f32) {
        self.target = lerp_point(&self.target, body, blend);
        let d = radius * distance;
        let desired = body + chase_offset(d);
        self.eye = lerp_point(&self.eye, &desired, blend);
    }
}

pub fn chase_offset(d: f32) -> Vector3<f32> {
    Vector3::new(d, d * 0.5, d)
}

/// A pair of tweens moving the rig to a new framing. Both are expressed
/// relative to the system origin, which keeps drifting while they run.
#[derive(Debug, Clone)]
pub struct RigAnimation {
    eye: Tween,
    target: Tween,
}

impl RigAnimation {
    pub fn new(
        from: &CameraRig,
        origin: &Point3<f32>,
        eye: Vector3<f32>,
        target: Vector3<f32>,
        duration: f32,
        easing: Easing,
    ) -> Self {
        RigAnimation {
            eye: Tween::new(from.eye - origin, eye, duration, easing),
            target: Tween::new(from.target - origin, target, duration, easing),
        }
    }

    pub fn advance(&mut self, dt: f32, origin: &Point3<f32>) -> CameraRig {
        let eye = self.eye.advance(dt);
        let target = self.target.advance(dt);
        CameraRig::new(origin + eye, origin + target)
    }

    pub fn is_finished(&self) -> bool {
        self.eye.is_finished() && self.target.is_finished()
    }
}
