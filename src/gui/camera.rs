use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use log::debug;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector2, Vector3};

use crate::frame::CameraRig;

// This camera is a close cousin of ArcBall: drag to swing around the target,
// scroll to zoom. Unlike ArcBall it exposes its eye and target as a plain
// `CameraRig`, which the frame update moves every frame (drifting along with
// the system, chasing a focused planet, or playing a fly-to animation).
pub struct FollowCamera {
    rig: CameraRig,
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    znear: f32,
    zfar: f32,
    // -- other --
    last_cursor_pos: Vector2<f32>,
    // -- knobs to fiddle with --
    yaw_step: f32,
    pitch_step: f32,
    scroll_ratio: f32,
}

impl FollowCamera {
    pub fn new(rig: CameraRig, width: u32, height: u32) -> Self {
        FollowCamera {
            rig,
            width,
            height,
            fovy: PI / 3.0,
            znear: 0.1,
            zfar: 5000.0,
            last_cursor_pos: Vector2::zeros(),
            yaw_step: 0.005,
            pitch_step: 0.005,
            scroll_ratio: 1.1,
        }
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(
            self.width as f32 / self.height as f32,
            self.fovy,
            self.znear,
            self.zfar,
        )
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Camera for FollowCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);

                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Drag right == camera swings left
                    let dpos = curr_pos - self.last_cursor_pos;
                    self.rig
                        .orbit(-dpos.x * self.yaw_step, -dpos.y * self.pitch_step);
                }

                self.last_cursor_pos = curr_pos;
            }
            WindowEvent::Scroll(_, off, _) => {
                // scroll up == zoom in
                if off < 0.0 {
                    self.rig.zoom(self.scroll_ratio);
                } else if off > 0.0 {
                    self.rig.zoom(self.scroll_ratio.recip())
                }
            }
            WindowEvent::FramebufferSize(w, h) => {
                debug!("Resized to {}x{}", w, h);
                // Minimized windows report zero; keep the last usable aspect
                if w > 0 && h > 0 {
                    self.width = w;
                    self.height = h;
                }
            }
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        self.rig.eye
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.rig.eye, &self.rig.target, &Vector3::y())
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        // only fails on NaN input
        self.transformation()
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
