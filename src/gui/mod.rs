use std::time::Instant;

use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

use self::controller::Controller;
use self::view::View;
use crate::config::Config;
use crate::frame::FrameContext;
use crate::model::Scene;

mod camera;
mod controller;
mod overlay;
mod renderers;
mod textures;
mod view;

// Longest frame time fed to the camera animations, in seconds
const MAX_FRAME_TIME: f32 = 0.1;

pub struct Simulation {
    view: View,
    controller: Controller,
    ctx: FrameContext,
    scene: Scene,
    last_frame: Instant,
}

impl Simulation {
    pub fn new(scene: Scene, config: &Config, window: &mut Window) -> Self {
        let ctx = FrameContext::new(config);
        let rig = ctx.default_rig(&scene.orrery.origin());
        Self {
            view: View::new(&scene, rig, &config.asset_dir, window),
            controller: Controller::new(),
            ctx,
            scene,
            last_frame: Instant::now(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Process events
        for event in events.iter() {
            self.controller
                .process_event(event, &self.view, &mut self.ctx, &self.scene);
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        let now = Instant::now();
        let dt = f32::min((now - self.last_frame).as_secs_f32(), MAX_FRAME_TIME);
        self.last_frame = now;

        self.process_user_input(window.events());
        let rig = self.view.camera_mut().rig_mut();
        self.ctx
            .step(&mut self.scene, rig, dt, self.controller.is_paused());
        self.view
            .prerender_scene(window, &self.scene, &self.ctx, &self.controller);
        self.controller.increment_frame_counter();
    }
}
