use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

pub mod catalog;
pub mod orrery;
pub mod starfield;
pub mod trail;

pub use orrery::{Body, BodyID, BodyInfo, HitVolume, Orrery};
pub use starfield::Starfield;
pub use trail::{Trail, TrailSet};

/// Everything that gets drawn: the bodies, their trails, and the stars.
#[derive(Debug, Clone)]
pub struct Scene {
    pub orrery: Orrery,
    pub trails: TrailSet,
    pub starfield: Starfield,
}

impl Scene {
    pub fn new(catalog: Vec<BodyInfo>, config: &Config) -> Self {
        let orrery = Orrery::new(catalog);
        let trails = TrailSet::new(&orrery, config.trail_length);
        let mut rng = StdRng::seed_from_u64(config.star_seed);
        let starfield = Starfield::new(config.star_count, config.star_range, &mut rng);

        Scene {
            orrery,
            trails,
            starfield,
        }
    }

    /// Moves every body forward one frame and records where it ended up.
    pub fn advance(&mut self, time_scale: f32) {
        self.orrery.advance(time_scale);
        self.trails.record(&self.orrery);
    }
}
