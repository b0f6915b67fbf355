use nalgebra::{Point3, Rotation3, Vector3};

/// Linear interpolation from `a` towards `b`. `t = 0` gives `a`, `t = 1` gives `b`.
pub fn lerp_point(a: &Point3<f32>, b: &Point3<f32>, t: f32) -> Point3<f32> {
    a + (b - a) * t
}

/// Position of a child that sits `offset` along the x-axis of a pivot rotated by
/// `angle` around +y.
pub fn pivot_offset(offset: f32, angle: f32) -> Vector3<f32> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle) * Vector3::new(offset, 0.0, 0.0)
}
