use std::collections::{HashMap, VecDeque};

use nalgebra::Point3;

use super::orrery::{BodyID, Orrery};

/// The most recent world positions of a body, oldest first. Once full, every
/// push evicts the oldest point.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Point3<f32>>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Trail capacity must be positive");
        Trail {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: Point3<f32>) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3<f32>> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One trail per planet. The star never moves relative to the system, so it
/// gets none.
#[derive(Debug, Clone)]
pub struct TrailSet {
    trails: HashMap<BodyID, Trail>,
}

impl TrailSet {
    pub fn new(orrery: &Orrery, capacity: usize) -> Self {
        let trails = orrery
            .planets()
            .map(|body| (body.id, Trail::new(capacity)))
            .collect();
        TrailSet { trails }
    }

    /// Appends every planet's current world position to its trail.
    pub fn record(&mut self, orrery: &Orrery) {
        for (id, trail) in self.trails.iter_mut() {
            trail.push(orrery.world_position(*id));
        }
    }

    pub fn get(&self, id: BodyID) -> Option<&Trail> {
        self.trails.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyID, &Trail)> + '_ {
        self.trails.iter().map(|(id, trail)| (*id, trail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::default_catalog;

    fn pt(i: usize) -> Point3<f32> {
        Point3::new(i as f32, 0.0, 0.0)
    }

    #[test]
    fn test_fills_up_to_capacity() {
        let mut trail = Trail::new(4);
        assert!(trail.is_empty());
        for i in 0..4 {
            trail.push(pt(i));
            assert_eq!(trail.len(), i + 1);
        }
        assert_eq!(trail.iter().next(), Some(&pt(0)));
        assert_eq!(trail.iter().last(), Some(&pt(3)));
    }

    #[test]
    fn test_drops_oldest_first() {
        let mut trail = Trail::new(3);
        for i in 0..10 {
            trail.push(pt(i));
            assert!(trail.len() <= 3);
        }
        let remaining: Vec<_> = trail.iter().cloned().collect();
        assert_eq!(remaining, vec![pt(7), pt(8), pt(9)]);
    }

    #[test]
    fn test_trail_set_skips_star() {
        let mut orrery = Orrery::new(default_catalog());
        let mut trails = TrailSet::new(&orrery, 5);
        assert!(trails.get(orrery.star().id).is_none());
        assert_eq!(trails.iter().count(), 8);

        for _ in 0..7 {
            orrery.advance(1.0);
            trails.record(&orrery);
        }
        for body in orrery.planets() {
            let trail = trails.get(body.id).unwrap();
            assert_eq!(trail.len(), 5);
            assert_eq!(trail.iter().last(), Some(&orrery.world_position(body.id)));
        }
    }
}
