use std::time::{Duration, Instant};

use kiss3d::camera::Camera;
use kiss3d::event::{Action, Event, Key, MouseButton, WindowEvent};
use log::debug;
use nalgebra::Point2;

use super::overlay::panel_contains;
use super::view::View;
use crate::frame::FrameContext;
use crate::interaction::pick;
use crate::math::ray::{ndc_from_cursor, Ray};
use crate::model::Scene;

// Key config, all in one place
const KEY_START: Key = Key::Return;
const KEY_HELP: Key = Key::H;
const KEY_CLOSE_PANEL: Key = Key::Escape;
const KEY_RESET_VIEW: Key = Key::R;
const KEY_TOGGLE_PAUSE: Key = Key::Space;

// A press and release further apart than this, in pixels, is a drag
const CLICK_SLOP: f32 = 5.0;

pub struct Controller {
    paused: bool,
    show_welcome: bool,
    cursor: Point2<f32>,
    press_pos: Option<Point2<f32>>,
    fps_counter: FpsCounter,
}

/// Frames per second, averaged over a fixed window.
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    window: Duration,
    fps: f64,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        FpsCounter {
            window_start: Instant::now(),
            frames: 0,
            window,
            fps: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.fps
    }

    pub fn increment(&mut self) {
        self.frames += 1;

        let elapsed = self.window_start.elapsed();
        if elapsed > self.window {
            self.fps = f64::from(self.frames) / elapsed.as_secs_f64();
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

/// Returns true if the cursor barely moved between press and release.
pub fn is_click(press: &Point2<f32>, release: &Point2<f32>) -> bool {
    (release - press).norm() <= CLICK_SLOP
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            paused: false,
            show_welcome: true,
            cursor: Point2::origin(),
            press_pos: None,
            fps_counter: FpsCounter::new(Duration::from_secs(1)),
        }
    }

    pub fn process_event(
        &mut self,
        event: Event,
        view: &View,
        ctx: &mut FrameContext,
        scene: &Scene,
    ) {
        match event.value {
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = Point2::new(x as f32, y as f32);
                self.update_hover(view, ctx, scene);
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                self.press_pos = Some(self.cursor);
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
                let was_click = match self.press_pos.take() {
                    Some(press) => is_click(&press, &self.cursor),
                    None => false,
                };
                if !was_click {
                    return;
                }
                if self.show_welcome {
                    self.hide_welcome();
                    return;
                }
                // Clicks on the open panel must not clear the focus
                let width = view.camera().width() as f32;
                if ctx.focus().selected().is_some() && panel_contains(&self.cursor, width) {
                    return;
                }
                ctx.click(scene, view.camera().rig());
            }
            WindowEvent::Key(KEY_START, Action::Press, _) => {
                self.hide_welcome();
            }
            WindowEvent::Key(KEY_HELP, Action::Press, _) => {
                self.show_welcome = true;
                ctx.hover(None);
            }
            WindowEvent::Key(KEY_CLOSE_PANEL, Action::Press, _) => {
                ctx.close_panel();
            }
            WindowEvent::Key(KEY_RESET_VIEW, Action::Press, _) => {
                ctx.reset_view(scene, view.camera().rig());
            }
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => {
                self.paused = !self.paused;
                debug!("Paused: {}", self.paused);
            }
            _ => {}
        }
    }

    fn hide_welcome(&mut self) {
        self.show_welcome = false;
    }

    fn update_hover(&mut self, view: &View, ctx: &mut FrameContext, scene: &Scene) {
        // The welcome screen covers the scene
        if self.show_welcome {
            ctx.hover(None);
            return;
        }

        let camera = view.camera();
        let ndc = ndc_from_cursor(
            self.cursor.x,
            self.cursor.y,
            camera.width() as f32,
            camera.height() as f32,
        );
        let ray = Ray::from_ndc(&camera.inverse_transformation(), &ndc);
        let hit = pick(&ray, scene.orrery.hit_volumes());
        if ctx.hover(hit) {
            if let Some(id) = hit {
                debug!("Hovering {}", scene.orrery.get_body(id).info.name);
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn show_welcome(&self) -> bool {
        self.show_welcome
    }

    pub fn cursor(&self) -> Point2<f32> {
        self.cursor
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}
