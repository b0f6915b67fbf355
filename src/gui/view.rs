use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use log::info;
use nalgebra::{Point2, Point3, Translation3, UnitQuaternion, Vector2, Vector3};

use super::camera::FollowCamera;
use super::controller::Controller;
use super::overlay;
use super::renderers::CompoundRenderer;
use super::textures::TextureLoader;
use crate::frame::{CameraRig, FrameContext};
use crate::math::ray::cursor_from_world;
use crate::model::orrery::{CLOUD_SCALE, MOON_DISTANCE, MOON_SCALE};
use crate::model::{Body, BodyID, Scene};

// Text coordinates span twice the window size, the same as the pixel grid
// the text renderer rasterizes into
const TEXT_SPACE: f32 = 2.0;
const TITLE_SIZE: f32 = 60.0;
const BODY_TEXT_SIZE: f32 = 40.0;
const TOOLTIP_OFFSET: f32 = 15.0;
// Labels float this far above the top of a planet
const LABEL_GAP: f32 = 2.0;

const TEXT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const DIM_TEXT_COLOR: [f32; 3] = [0.6, 0.7, 0.8];
const ACCENT_COLOR: [f32; 3] = [0.4, 0.8, 1.0];
const MOON_COLOR: (f32, f32, f32) = (0.7, 0.7, 0.7);
const CLOUD_COLOR: (f32, f32, f32) = (0.9, 0.9, 0.95);

// Scene graph for one body:
//   pivot (orbit rotation) -> anchor (offset along x, spin)
//     -> mesh (scaled to the radius)
//     -> moon pivot (moon rotation) -> moon mesh
//     -> clouds
// The meshes are leaves because a sphere's scale carries over to its children.
struct BodyObject {
    pivot: SceneNode,
    anchor: SceneNode,
    moon_pivot: Option<SceneNode>,
    clouds: Option<SceneNode>,
}

pub struct View {
    system: SceneNode,
    body_objects: HashMap<BodyID, BodyObject>,
    camera: FollowCamera,
    renderer: CompoundRenderer,
    font: Rc<Font>,
}

impl View {
    pub fn new(
        scene: &Scene,
        rig: CameraRig,
        asset_dir: &Path,
        window: &mut Window,
    ) -> Self {
        let mut system = window.add_group();
        let textures = TextureLoader::new(asset_dir);

        let mut body_objects = HashMap::new();
        for body in scene.orrery.bodies() {
            let object = Self::create_body_object(&mut system, body, &textures);
            body_objects.insert(body.id, object);
        }
        info!("Created {} bodies", body_objects.len());

        let camera = FollowCamera::new(rig, window.width(), window.height());

        let mut view = Self {
            system,
            body_objects,
            camera,
            renderer: CompoundRenderer::new(),
            font: Font::default(),
        };
        view.update_scene_objects(scene);
        view
    }

    fn create_body_object(
        system: &mut SceneNode,
        body: &Body,
        textures: &TextureLoader,
    ) -> BodyObject {
        let info = &body.info;
        let mut pivot = system.add_group();
        let mut anchor = pivot.add_group();
        anchor.set_local_translation(Translation3::new(info.distance, 0.0, 0.0));

        // Make the sphere that represents the body
        let mut mesh = anchor.add_sphere(info.radius);
        let color = &info.color;
        mesh.set_color(color.x, color.y, color.z);
        textures.apply(&mut mesh, info.texture.as_deref());

        let moon_pivot = info.features.moon.as_deref().map(|texture| {
            let mut moon_pivot = anchor.add_group();
            let mut moon = moon_pivot.add_sphere(info.radius * MOON_SCALE);
            moon.set_local_translation(Translation3::new(MOON_DISTANCE, 0.0, 0.0));
            moon.set_color(MOON_COLOR.0, MOON_COLOR.1, MOON_COLOR.2);
            textures.apply(&mut moon, Some(texture));
            moon_pivot
        });

        // No blending here, so the cloud layer is a wireframe shell
        let clouds = info.features.clouds.as_deref().map(|texture| {
            let mut clouds = anchor.add_sphere(info.radius * CLOUD_SCALE);
            clouds.set_color(CLOUD_COLOR.0, CLOUD_COLOR.1, CLOUD_COLOR.2);
            textures.apply(&mut clouds, Some(texture));
            clouds.set_surface_rendering_activation(false);
            clouds.set_lines_width(1.0);
            clouds
        });

        BodyObject {
            pivot,
            anchor,
            moon_pivot,
            clouds,
        }
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FollowCamera {
        &mut self.camera
    }

    pub fn update_scene_objects(&mut self, scene: &Scene) {
        fn y_rotation(angle: f32) -> UnitQuaternion<f32> {
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle)
        }

        let orrery = &scene.orrery;
        self.system
            .set_local_translation(Translation3::from(orrery.origin().coords));

        for (id, object) in self.body_objects.iter_mut() {
            let motion = orrery.get_motion(*id);
            object.pivot.set_local_rotation(y_rotation(motion.orbit));
            object.anchor.set_local_rotation(y_rotation(motion.spin));
            if let (Some(node), Some(angle)) = (object.moon_pivot.as_mut(), motion.moon) {
                node.set_local_rotation(y_rotation(angle));
            }
            if let (Some(node), Some(angle)) = (object.clouds.as_mut(), motion.clouds) {
                node.set_local_rotation(y_rotation(angle));
            }
        }
    }

    // the big boy
    pub fn prerender_scene(
        &mut self,
        window: &mut Window,
        scene: &Scene,
        ctx: &FrameContext,
        controller: &Controller,
    ) {
        self.update_scene_objects(scene);

        // Queue up the line and point geometry
        self.renderer.draw_starfield(&scene.starfield);
        for (_, trail) in scene.trails.iter() {
            self.renderer.draw_trail(trail);
        }

        // Draw text
        let window_size = Point2::new(window.width() as f32, window.height() as f32) * TEXT_SPACE;
        if controller.show_welcome() {
            self.draw_welcome(window, &window_size);
            return;
        }

        if let Some(id) = ctx.focus().hovered() {
            let body = scene.orrery.get_body(id);
            self.draw_label(window, scene, body);
            self.draw_tooltip(window, body, controller.cursor());
        }
        if let Some(id) = ctx.focus().selected() {
            self.draw_panel(window, scene.orrery.get_body(id), &window_size);
        }
        let status = overlay::status_text(
            ctx.speed().time_scale(),
            controller.fps(),
            controller.is_paused(),
        );
        window.draw_text(
            &status,
            &Point2::origin(),
            BODY_TEXT_SIZE,
            &self.font,
            &Point3::from(DIM_TEXT_COLOR),
        );
    }

    fn draw_label(&self, window: &mut Window, scene: &Scene, body: &Body) {
        // The star is big enough to not need a label
        if body.is_star() {
            return;
        }
        let top = scene.orrery.world_position(body.id)
            + Vector3::y() * (body.info.radius + LABEL_GAP);
        let screen = cursor_from_world(
            &self.camera.transformation(),
            &top,
            self.camera.width() as f32,
            self.camera.height() as f32,
        );
        if let Some(screen) = screen {
            window.draw_text(
                &body.info.name,
                &(screen * TEXT_SPACE),
                BODY_TEXT_SIZE,
                &self.font,
                &Point3::from(ACCENT_COLOR),
            );
        }
    }

    fn draw_tooltip(&self, window: &mut Window, body: &Body, cursor: Point2<f32>) {
        let pos = (cursor + Vector2::repeat(TOOLTIP_OFFSET)) * TEXT_SPACE;
        window.draw_text(
            &overlay::tooltip_text(body),
            &pos,
            BODY_TEXT_SIZE,
            &self.font,
            &Point3::from(TEXT_COLOR),
        );
    }

    fn draw_panel(&self, window: &mut Window, body: &Body, window_size: &Point2<f32>) {
        window.draw_text(
            &overlay::panel_text(body),
            &Point2::new(window_size.x - overlay::PANEL_WIDTH * TEXT_SPACE, TITLE_SIZE),
            BODY_TEXT_SIZE,
            &self.font,
            &Point3::from(TEXT_COLOR),
        );
    }

    fn draw_welcome(&self, window: &mut Window, window_size: &Point2<f32>) {
        let left = window_size.x * 0.2;
        let top = window_size.y * 0.3;
        window.draw_text(
            overlay::WELCOME_TITLE,
            &Point2::new(left, top),
            TITLE_SIZE * 2.0,
            &self.font,
            &Point3::from(ACCENT_COLOR),
        );
        window.draw_text(
            overlay::welcome_text(),
            &Point2::new(left, top + TITLE_SIZE * 3.0),
            BODY_TEXT_SIZE,
            &self.font,
            &Point3::from(TEXT_COLOR),
        );
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.renderer), None)
    }
}
