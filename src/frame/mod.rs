use log::debug;
use nalgebra::{Point3, Vector3};

use crate::config::Config;
use crate::interaction::{ClickOutcome, FocusState};
use crate::math::easing::Easing;
use crate::model::{BodyID, Scene};

mod rig;
mod speed;

pub use rig::{chase_offset, CameraRig, RigAnimation};
pub use speed::SpeedControl;

/// Everything the per-frame update reads and writes besides the scene itself:
/// speed, hover and focus, and any camera animation in flight.
pub struct FrameContext {
    speed: SpeedControl,
    focus: FocusState,
    animation: Option<RigAnimation>,
    // -- camera knobs --
    chase_blend: f32,
    chase_distance: f32,
    default_eye: Vector3<f32>,
    star_eye: Vector3<f32>,
    reset_duration: f32,
    fly_to_star_duration: f32,
}

impl FrameContext {
    pub fn new(config: &Config) -> Self {
        FrameContext {
            speed: SpeedControl::new(config.base_speed, config.slow_speed, config.speed_smoothing),
            focus: FocusState::new(),
            animation: None,
            chase_blend: config.chase_blend,
            chase_distance: config.chase_distance,
            default_eye: config.default_eye,
            star_eye: config.star_eye,
            reset_duration: config.reset_duration,
            fly_to_star_duration: config.fly_to_star_duration,
        }
    }

    /// The framing the camera starts in and returns to on reset.
    pub fn default_rig(&self, origin: &Point3<f32>) -> CameraRig {
        CameraRig::new(origin + self.default_eye, *origin)
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn speed(&self) -> &SpeedControl {
        &self.speed
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn hover(&mut self, hit: Option<BodyID>) -> bool {
        self.focus.hover(hit)
    }

    pub fn click(&mut self, scene: &Scene, rig: &CameraRig) -> ClickOutcome {
        let outcome = self.focus.click(&scene.orrery);
        match outcome {
            ClickOutcome::Focus(id) => {
                debug!("Following {}", scene.orrery.get_body(id).info.name);
                self.animation = None;
            }
            ClickOutcome::FlyToStar(_) => {
                debug!("Flying to the star");
                self.animate_to(
                    scene,
                    rig,
                    self.star_eye,
                    self.fly_to_star_duration,
                    Easing::Linear,
                );
            }
            ClickOutcome::Cleared => {}
        }
        outcome
    }

    pub fn close_panel(&mut self) {
        self.focus.close_panel();
    }

    /// Lets go of any focus and eases the camera back to the default framing.
    pub fn reset_view(&mut self, scene: &Scene, rig: &CameraRig) {
        debug!("Resetting view");
        self.focus.clear();
        self.animate_to(
            scene,
            rig,
            self.default_eye,
            self.reset_duration,
            Easing::CubicOut,
        );
    }

    fn animate_to(
        &mut self,
        scene: &Scene,
        rig: &CameraRig,
        eye: Vector3<f32>,
        duration: f32,
        easing: Easing,
    ) {
        let origin = scene.orrery.origin();
        self.animation = Some(RigAnimation::new(
            rig,
            &origin,
            eye,
            Vector3::zeros(),
            duration,
            easing,
        ));
    }

    /// Runs one frame, or while paused only keeps the starfield around the
    /// camera, which can still be dragged and zoomed.
    pub fn step(&mut self, scene: &mut Scene, rig: &mut CameraRig, dt: f32, paused: bool) {
        if paused {
            scene.starfield.wrap_around(&rig.eye);
        } else {
            self.tick(scene, rig, dt);
        }
    }

    /// Runs one frame of the update pass. `dt` is the wall-clock frame time in
    /// seconds and only drives camera animations; everything else moves by a
    /// fixed amount per frame.
    pub fn tick(&mut self, scene: &mut Scene, rig: &mut CameraRig, dt: f32) {
        self.speed.update(self.focus.is_hovering());
        let drift = self.speed.current();
        scene.orrery.drift(drift);
        let origin = scene.orrery.origin();

        if let Some(animation) = self.animation.as_mut() {
            *rig = animation.advance(dt, &origin);
            if animation.is_finished() {
                self.animation = None;
            }
        } else if let Some(id) = self.focus.focused() {
            let body = scene.orrery.get_body(id);
            rig.chase(
                &scene.orrery.world_position(id),
                body.info.radius,
                self.chase_distance,
                self.chase_blend,
            );
        } else {
            rig.translate(&(Vector3::z() * drift));
        }

        scene.starfield.wrap_around(&rig.eye);
        scene.advance(self.speed.time_scale());
    }
}
