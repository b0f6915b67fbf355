use nalgebra::Point3;
use rand::Rng;

/// Background stars scattered through a cube of side `range`. As the camera
/// moves, stars that fall out of the cube around it are wrapped to the
/// opposite face, so the field looks endless.
#[derive(Debug, Clone)]
pub struct Starfield {
    points: Vec<Point3<f32>>,
    range: f32,
}

impl Starfield {
    pub fn new<R: Rng>(count: usize, range: f32, rng: &mut R) -> Self {
        assert!(range > 0.0, "Starfield range must be positive");
        let mut coord = || (rng.gen::<f32>() - 0.5) * range;
        let points = (0..count)
            .map(|_| Point3::new(coord(), coord(), coord()))
            .collect();
        Starfield { points, range }
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn wrap_around(&mut self, center: &Point3<f32>) {
        let range = self.range;
        for point in self.points.iter_mut() {
            for axis in 0..3 {
                point[axis] = wrap_coord(point[axis], center[axis], range);
            }
        }
    }
}

/// Moves `value` by whole multiples of `range` until it lies within
/// `[center - range/2, center + range/2]`. Values already inside are untouched.
fn wrap_coord(value: f32, center: f32, range: f32) -> f32 {
    let lo = center - range / 2.0;
    let hi = center + range / 2.0;
    if value >= lo && value <= hi {
        return value;
    }
    // Rounding can land a hair outside the bounds; clamp that away
    let wrapped = lo + (value - lo).rem_euclid(range);
    nalgebra::clamp(wrapped, lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_bounds(field: &Starfield, center: &Point3<f32>) -> bool {
        let half = field.range() / 2.0;
        field.points().iter().all(|p| {
            (0..3).all(|axis| p[axis] >= center[axis] - half && p[axis] <= center[axis] + half)
        })
    }

    #[test]
    fn test_initial_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = Starfield::new(500, 2000.0, &mut rng);
        assert_eq!(field.points().len(), 500);
        assert!(in_bounds(&field, &Point3::origin()));
    }

    #[test]
    fn test_wrap_coord() {
        assert_eq!(wrap_coord(10.0, 0.0, 100.0), 10.0);
        assert_eq!(wrap_coord(50.0, 0.0, 100.0), 50.0);
        approx::assert_relative_eq!(wrap_coord(-60.0, 0.0, 100.0), 40.0);
        approx::assert_relative_eq!(wrap_coord(60.0, 0.0, 100.0), -40.0);
        // Several ranges away still lands inside
        approx::assert_relative_eq!(wrap_coord(-1030.0, 0.0, 100.0), -30.0, epsilon = 1e-3);
        approx::assert_relative_eq!(wrap_coord(0.0, 500.0, 100.0), 500.0, epsilon = 1e-3);
    }

    #[test]
    fn test_follows_moving_camera() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = Starfield::new(1000, 200.0, &mut rng);
        let mut camera = Point3::new(0.0, 5.0, 0.0);
        for frame in 0..500 {
            camera.z += 0.8;
            camera.x = (frame as f32 * 0.05).sin() * 30.0;
            field.wrap_around(&camera);
            assert!(in_bounds(&field, &camera), "out of bounds at frame {}", frame);
        }
    }
}
