use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, PointRenderer, Renderer};
use nalgebra::Point3;

use crate::model::{Starfield, Trail};

mod utils;

// Trails are white lines at 15% brightness, fading out towards their tail
const TRAIL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const TRAIL_PEAK: f32 = 0.15;
const STAR_COLOR: [f32; 3] = [0.8, 0.8, 0.8];
const STAR_SIZE: f32 = 1.5;

pub struct CompoundRenderer {
    line_renderer: LineRenderer,
    point_renderer: PointRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        let mut point_renderer = PointRenderer::new();
        point_renderer.set_point_size(STAR_SIZE);
        CompoundRenderer {
            line_renderer: LineRenderer::new(),
            point_renderer,
        }
    }

    pub fn draw_trail(&mut self, trail: &Trail) {
        utils::draw_fading_path(
            &mut self.line_renderer,
            trail.iter(),
            trail.len(),
            &Point3::from(TRAIL_COLOR),
            TRAIL_PEAK,
        );
    }

    pub fn draw_starfield(&mut self, starfield: &Starfield) {
        for star in starfield.points() {
            self.point_renderer.draw_point(*star, Point3::from(STAR_COLOR));
        }
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.point_renderer.render(pass, camera);
        self.line_renderer.render(pass, camera);
    }
}
