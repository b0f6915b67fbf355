use kiss3d::renderer::LineRenderer;

use nalgebra::Point3;

/// Brightness of the `i`th of `n` segments, ramping from nothing at the oldest
/// end to `peak` at the newest.
pub fn fade(i: usize, n: usize, peak: f32) -> f32 {
    if n == 0 {
        return 0.0;
    }
    peak * (i + 1) as f32 / n as f32
}

/// Draws consecutive points as a polyline whose color fades out towards the
/// start of the path.
pub fn draw_fading_path<'a, I>(
    line_renderer: &mut LineRenderer,
    points: I,
    num_points: usize,
    color: &Point3<f32>,
    peak: f32,
) where
    I: Iterator<Item = &'a Point3<f32>>,
{
    let num_segments = num_points.saturating_sub(1);
    let mut prev_pt: Option<&Point3<f32>> = None;
    for (i, pt) in points.enumerate() {
        if let Some(prev_pt) = prev_pt {
            let brightness = fade(i - 1, num_segments, peak);
            line_renderer.draw_line(*prev_pt, *pt, color * brightness);
        }
        prev_pt = Some(pt);
    }
}
