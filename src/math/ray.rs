use nalgebra::{Matrix4, Point2, Point3, Unit, Vector3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub dir: Unit<Vector3<f32>>,
}

/// Converts a cursor position in window pixels (origin at the top-left) into
/// normalized device coordinates.
pub fn ndc_from_cursor(x: f32, y: f32, width: f32, height: f32) -> Point2<f32> {
    Point2::new(2.0 * x / width - 1.0, 1.0 - 2.0 * y / height)
}

/// Projects a world point to window pixels (origin at the top-left). Points
/// behind the eye have no screen position.
pub fn cursor_from_world(
    view_projection: &Matrix4<f32>,
    point: &Point3<f32>,
    width: f32,
    height: f32,
) -> Option<Point2<f32>> {
    let clip = view_projection * point.to_homogeneous();
    if clip.w <= 0.0 {
        return None;
    }
    let (x, y) = (clip.x / clip.w, clip.y / clip.w);
    Some(Point2::new((x + 1.0) * 0.5 * width, (1.0 - y) * 0.5 * height))
}

impl Ray {
    pub fn new(origin: Point3<f32>, dir: Vector3<f32>) -> Self {
        Ray {
            origin,
            dir: Unit::new_normalize(dir),
        }
    }

    /// Builds the ray through `ndc` by unprojecting it onto the near and far
    /// clipping planes.
    pub fn from_ndc(inverse_view_projection: &Matrix4<f32>, ndc: &Point2<f32>) -> Self {
        let near = inverse_view_projection.transform_point(&Point3::new(ndc.x, ndc.y, -1.0));
        let far = inverse_view_projection.transform_point(&Point3::new(ndc.x, ndc.y, 1.0));
        Ray::new(near, far - near)
    }

    /// Distance along the ray to the first point where it meets the sphere, or
    /// `None` if it misses. A ray starting inside the sphere hits its far side.
    pub fn intersect_sphere(&self, center: &Point3<f32>, radius: f32) -> Option<f32> {
        // Solve |o + t d - c|^2 = r^2 with |d| = 1
        let oc = self.origin - center;
        let b = self.dir.dot(&oc);
        let c = oc.norm_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let (t0, t1) = (-b - root, -b + root);
        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }
}
