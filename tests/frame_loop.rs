use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use solar_orrery::config::Config;
use solar_orrery::frame::{chase_offset, CameraRig, FrameContext};
use solar_orrery::interaction::{pick, ClickOutcome};
use solar_orrery::math::ray::Ray;
use solar_orrery::model::catalog::default_catalog;
use solar_orrery::model::{BodyID, Scene};

const DT: f32 = 1.0 / 60.0;

fn setup() -> (FrameContext, Scene, CameraRig) {
    let config = Config {
        star_count: 500,
        trail_length: 50,
        ..Config::default()
    };
    let ctx = FrameContext::new(&config);
    let scene = Scene::new(default_catalog(), &config);
    let rig = ctx.default_rig(&scene.orrery.origin());
    (ctx, scene, rig)
}

/// Casts a ray from the camera straight at a body.
fn ray_at(rig: &CameraRig, target: &Point3<f32>) -> Ray {
    Ray::new(rig.eye, target - rig.eye)
}

#[test]
fn test_orbit_angles_only_increase() {
    let (mut ctx, mut scene, mut rig) = setup();
    let planets: Vec<BodyID> = scene.orrery.planets().map(|b| b.id).collect();

    for frame in 0..200 {
        // Hover part of the time so the time scale changes
        ctx.hover(if frame % 50 < 25 { Some(BodyID(2)) } else { None });
        let before: Vec<f32> = planets
            .iter()
            .map(|id| scene.orrery.get_motion(*id).orbit)
            .collect();
        ctx.tick(&mut scene, &mut rig, DT);
        for (id, prev) in planets.iter().zip(before) {
            assert!(scene.orrery.get_motion(*id).orbit > prev);
        }
    }
}

#[test]
fn test_trails_are_bounded_fifo() {
    let (mut ctx, mut scene, mut rig) = setup();
    let earth = BodyID(3);
    let mut history = vec![];

    for _ in 0..120 {
        ctx.tick(&mut scene, &mut rig, DT);
        history.push(scene.orrery.world_position(earth));
        for (_, trail) in scene.trails.iter() {
            assert!(trail.len() <= 50);
        }
    }

    let trail = scene.trails.get(earth).unwrap();
    assert_eq!(trail.len(), 50);
    let kept: Vec<Point3<f32>> = trail.iter().cloned().collect();
    assert_eq!(kept.as_slice(), &history[70..]);
    // The star leaves no trail
    assert!(scene.trails.get(BodyID(0)).is_none());
}

#[test]
fn test_focus_only_follows_hover() {
    let (mut ctx, mut scene, mut rig) = setup();

    for frame in 0..120 {
        let hovered = match frame % 40 {
            0..=9 => {
                let target = scene.orrery.world_position(BodyID(4));
                pick(&ray_at(&rig, &target), scene.orrery.hit_volumes())
            }
            10..=19 => Some(BodyID(7)),
            _ => None,
        };
        ctx.hover(hovered);

        if frame % 7 == 0 {
            let outcome = ctx.click(&scene, &rig);
            match outcome {
                ClickOutcome::Focus(id) => {
                    assert_eq!(Some(id), hovered);
                    assert_eq!(ctx.focus().focused(), hovered);
                }
                ClickOutcome::FlyToStar(_) => assert_eq!(ctx.focus().focused(), None),
                ClickOutcome::Cleared => {
                    assert_eq!(hovered, None);
                    assert_eq!(ctx.focus().focused(), None);
                }
            }
        }
        ctx.tick(&mut scene, &mut rig, DT);
    }
}

#[test]
fn test_chase_closes_in_on_moving_body() {
    let (mut ctx, mut scene, mut rig) = setup();
    let jupiter = BodyID(5);
    ctx.hover(Some(jupiter));
    assert_eq!(ctx.click(&scene, &rig), ClickOutcome::Focus(jupiter));
    ctx.hover(None);

    let radius = scene.orrery.get_body(jupiter).info.radius;
    let gap = |scene: &Scene, rig: &CameraRig| {
        let desired = scene.orrery.world_position(jupiter) + chase_offset(radius * 5.0);
        (rig.eye - desired).norm()
    };

    let mut prev = gap(&scene, &rig);
    for _ in 0..20 {
        ctx.tick(&mut scene, &mut rig, DT);
        let current = gap(&scene, &rig);
        assert!(current < prev);
        prev = current;
    }
}

#[test]
fn test_starfield_stays_around_camera() {
    let (mut ctx, mut scene, mut rig) = setup();
    let half = scene.starfield.range() / 2.0;

    for frame in 0..300 {
        if frame == 100 {
            // A sudden jump far outside the field
            rig.translate(&Vector3::new(5000.0, -3000.0, 7000.0));
        }
        ctx.tick(&mut scene, &mut rig, DT);
        for star in scene.starfield.points() {
            for axis in 0..3 {
                assert!(star[axis] >= rig.eye[axis] - half);
                assert!(star[axis] <= rig.eye[axis] + half);
            }
        }
    }
}

#[test]
fn test_reset_returns_to_default_framing() {
    let (mut ctx, mut scene, mut rig) = setup();
    ctx.hover(Some(BodyID(6)));
    ctx.click(&scene, &rig);
    ctx.hover(None);
    for _ in 0..90 {
        ctx.tick(&mut scene, &mut rig, DT);
    }
    assert!(ctx.focus().focused().is_some());

    ctx.reset_view(&scene, &rig);
    assert_eq!(ctx.focus().focused(), None);
    assert_eq!(ctx.focus().selected(), None);

    // 12 frames of 0.125 s make up the 1.5 s animation
    for _ in 0..12 {
        ctx.tick(&mut scene, &mut rig, 0.125);
    }
    assert!(!ctx.is_animating());
    let origin = scene.orrery.origin();
    assert_relative_eq!(rig.eye, origin + Vector3::new(0.0, 50.0, 120.0), epsilon = 1e-3);
    assert_relative_eq!(rig.target, origin, epsilon = 1e-3);
}

#[test]
fn test_paused_camera_keeps_stars_around_it() {
    let (mut ctx, mut scene, mut rig) = setup();
    ctx.step(&mut scene, &mut rig, DT, false);
    let origin = scene.orrery.origin();
    let angles: Vec<f32> = scene
        .orrery
        .planets()
        .map(|b| scene.orrery.get_motion(b.id).orbit)
        .collect();
    let half = scene.starfield.range() / 2.0;

    for _ in 0..30 {
        // Drag and zoom with no tick in between
        rig.orbit(0.3, 0.1);
        rig.zoom(1.2);
        ctx.step(&mut scene, &mut rig, DT, true);
        for star in scene.starfield.points() {
            for axis in 0..3 {
                assert!(star[axis] >= rig.eye[axis] - half);
                assert!(star[axis] <= rig.eye[axis] + half);
            }
        }
    }

    assert_relative_eq!(scene.orrery.origin(), origin);
    for (body, angle) in scene.orrery.planets().zip(angles) {
        assert_relative_eq!(scene.orrery.get_motion(body.id).orbit, angle);
    }
}
