use nalgebra::Point2;

use crate::model::Body;

// Detail panel area in the top right corner, in window pixels
pub const PANEL_WIDTH: f32 = 450.0;
pub const PANEL_HEIGHT: f32 = 320.0;

pub const WELCOME_TITLE: &str = "SOLAR SYSTEM";

pub fn welcome_text() -> &'static str {
    "Explore an animated model of the Solar System.\n\
     \n\
     Hover over a body to slow time down and see what it is.\n\
     Click a planet to follow it, or click the Sun to fly to it.\n\
     Drag to look around and scroll to zoom.\n\
     \n\
     Enter: start    H: this help    Esc: close panel\n\
     R: reset view   Space: pause"
}

/// Shown next to the cursor while it is over a body.
pub fn tooltip_text(body: &Body) -> String {
    format!("{}\n{}", body.info.name, body.teaser())
}

/// Full description and stats of the selected body.
pub fn panel_text(body: &Body) -> String {
    let mut text = format!("{}\n{}\n", body.info.name, body.info.description);
    for (label, value) in body.info.stats.rows().iter() {
        text.push_str(&format!("\n{}: {}", label, value));
    }
    text
}

/// Returns true if the cursor is over the detail panel.
pub fn panel_contains(cursor: &Point2<f32>, window_width: f32) -> bool {
    cursor.x >= window_width - PANEL_WIDTH && cursor.y <= PANEL_HEIGHT
}

pub fn status_text(time_scale: f32, fps: f64, paused: bool) -> String {
    format!(
        "Speed: {:.0}%{}\nFPS: {:.0}",
        time_scale * 100.0,
        if paused { " (paused)" } else { "" },
        fps,
    )
}
