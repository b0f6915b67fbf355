use nalgebra::Point3;

use crate::math::geometry::pivot_offset;

mod body;

pub use body::{Body, BodyFeatures, BodyID, BodyInfo, BodyKind, BodyStats};

// Per-frame rotation increments, in radians. These are not scaled by the
// time scale; only orbital motion slows down.
const SPIN_STEP: f32 = 0.01;
const MOON_STEP: f32 = 0.02;
const CLOUD_STEP: f32 = 0.012;

/// Distance from a planet's center to its moon, in scene units
pub const MOON_DISTANCE: f32 = 3.0;
pub const MOON_SCALE: f32 = 0.27;
pub const CLOUD_SCALE: f32 = 1.03;

const STAR_HIT_SCALE: f32 = 1.5;
const PLANET_HIT_SCALE: f32 = 3.5;

/// The angles that change from frame to frame. `orbit` is the rotation of the
/// body's pivot around the star, `spin` the rotation of the body itself, and
/// the optional angles belong to its child layers.
#[derive(Debug, Clone, Default)]
pub struct Motion {
    pub orbit: f32,
    pub spin: f32,
    pub moon: Option<f32>,
    pub clouds: Option<f32>,
}

#[derive(Debug, Clone)]
struct BodyState {
    body: Body,
    motion: Motion,
}

/// An invisible sphere used for picking, larger than the body it stands for.
#[derive(Debug, Clone, Copy)]
pub struct HitVolume {
    pub id: BodyID,
    pub center: Point3<f32>,
    pub radius: f32,
}

// Invariants:
//   - bodies[i].body.id == BodyID(i)
//   - bodies[0] is the star
#[derive(Debug, Clone)]
pub struct Orrery {
    bodies: Vec<BodyState>,
    origin: Point3<f32>,
}

impl Motion {
    fn advance(&mut self, body: &Body, time_scale: f32) {
        if body.is_star() {
            return;
        }
        self.orbit += body.info.orbit_speed * time_scale;
        self.spin += SPIN_STEP;
        if let Some(angle) = self.moon.as_mut() {
            *angle += MOON_STEP;
        }
        if let Some(angle) = self.clouds.as_mut() {
            *angle += CLOUD_STEP;
        }
    }
}

impl Orrery {
    /// Builds the system from a catalog whose first entry is the star. The
    /// catalog loader checks this; here it is only asserted.
    pub fn new(catalog: Vec<BodyInfo>) -> Self {
        assert!(
            catalog.first().map(|info| info.kind) == Some(BodyKind::Star),
            "First catalog entry must be the star"
        );

        let bodies = catalog
            .into_iter()
            .enumerate()
            .map(|(i, info)| {
                let motion = Motion {
                    moon: info.features.moon.as_ref().map(|_| 0.0),
                    clouds: info.features.clouds.as_ref().map(|_| 0.0),
                    ..Motion::default()
                };
                BodyState {
                    body: Body {
                        id: BodyID(i),
                        info,
                    },
                    motion,
                }
            })
            .collect();

        Orrery {
            bodies,
            origin: Point3::origin(),
        }
    }

    pub fn star(&self) -> &Body {
        &self.bodies[0].body
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().map(|state| &state.body)
    }

    pub fn planets(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies().filter(|body| !body.is_star())
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0].body
    }

    pub fn get_motion(&self, id: BodyID) -> &Motion {
        &self.bodies[id.0].motion
    }

    /// Where the star sits. The whole system drifts along +z.
    pub fn origin(&self) -> Point3<f32> {
        self.origin
    }

    pub fn drift(&mut self, dz: f32) {
        self.origin.z += dz;
    }

    pub fn advance(&mut self, time_scale: f32) {
        for state in self.bodies.iter_mut() {
            state.motion.advance(&state.body, time_scale);
        }
    }

    pub fn world_position(&self, id: BodyID) -> Point3<f32> {
        let state = &self.bodies[id.0];
        self.origin + pivot_offset(state.body.info.distance, state.motion.orbit)
    }

    pub fn hit_volumes(&self) -> impl Iterator<Item = HitVolume> + '_ {
        self.bodies().map(move |body| {
            let scale = if body.is_star() {
                STAR_HIT_SCALE
            } else {
                PLANET_HIT_SCALE
            };
            HitVolume {
                id: body.id,
                center: self.world_position(body.id),
                radius: body.info.radius * scale,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::default_catalog;

    const EARTH: BodyID = BodyID(3);

    #[test]
    fn test_star_stays_at_origin() {
        let mut orrery = Orrery::new(default_catalog());
        for _ in 0..100 {
            orrery.advance(1.0);
        }
        let star = orrery.star().id;
        approx::assert_relative_eq!(orrery.world_position(star), Point3::origin());
        assert_eq!(orrery.get_motion(star).orbit, 0.0);
    }

    #[test]
    fn test_orbit_radius_preserved() {
        let mut orrery = Orrery::new(default_catalog());
        orrery.drift(7.5);
        for _ in 0..250 {
            orrery.advance(1.0);
            for body in orrery.planets() {
                let offset = orrery.world_position(body.id) - orrery.origin();
                approx::assert_relative_eq!(offset.norm(), body.info.distance, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_time_scale_only_affects_orbit() {
        let mut slow = Orrery::new(default_catalog());
        let mut fast = Orrery::new(default_catalog());
        slow.advance(0.25);
        fast.advance(1.0);

        let (slow, fast) = (slow.get_motion(EARTH), fast.get_motion(EARTH));
        approx::assert_relative_eq!(slow.orbit * 4.0, fast.orbit);
        assert_eq!(slow.spin, fast.spin);
        assert_eq!(slow.moon, fast.moon);
        assert_eq!(slow.clouds, Some(CLOUD_STEP));
    }

    #[test]
    fn test_only_layered_bodies_carry_layer_angles() {
        let mut orrery = Orrery::new(default_catalog());
        for _ in 0..37 {
            orrery.advance(1.0);
        }
        let earth = orrery.get_motion(EARTH);
        approx::assert_relative_eq!(earth.moon.unwrap(), 37.0 * MOON_STEP, epsilon = 1e-4);
        approx::assert_relative_eq!(earth.clouds.unwrap(), 37.0 * CLOUD_STEP, epsilon = 1e-4);

        let mercury = orrery.get_motion(BodyID(1));
        assert!(mercury.moon.is_none());
        assert!(mercury.clouds.is_none());
    }

    #[test]
    fn test_hit_volumes() {
        let orrery = Orrery::new(default_catalog());
        let volumes: Vec<_> = orrery.hit_volumes().collect();
        assert_eq!(volumes.len(), 9);

        let star = orrery.star();
        approx::assert_relative_eq!(volumes[0].radius, star.info.radius * 1.5);
        let earth = orrery.get_body(EARTH);
        approx::assert_relative_eq!(volumes[EARTH.0].radius, earth.info.radius * 3.5);
        approx::assert_relative_eq!(volumes[EARTH.0].center, Point3::new(24.0, 0.0, 0.0));
    }
}
