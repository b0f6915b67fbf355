pub mod easing;
pub mod geometry;
pub mod ray;
