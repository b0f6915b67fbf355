use nalgebra::Point3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Planet,
}

/// The fact sheet shown in the detail panel. These are display strings, not
/// inputs to any calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyStats {
    pub distance: String,
    pub orbit: String,
    pub tilt: String,
    pub diameter: String,
    pub mass: String,
    pub rotation: String,
    pub gravity: String,
    pub temperature: String,
    pub moons: String,
    pub composition: String,
}

impl BodyStats {
    /// (label, value) pairs in panel order
    pub fn rows(&self) -> [(&'static str, &str); 10] {
        [
            ("Distance", self.distance.as_str()),
            ("Orbit", self.orbit.as_str()),
            ("Tilt", self.tilt.as_str()),
            ("Diameter", self.diameter.as_str()),
            ("Mass", self.mass.as_str()),
            ("Rotation", self.rotation.as_str()),
            ("Gravity", self.gravity.as_str()),
            ("Temperature", self.temperature.as_str()),
            ("Moons", self.moons.as_str()),
            ("Composition", self.composition.as_str()),
        ]
    }
}

/// Optional child layers; each holds the texture file for that layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyFeatures {
    #[serde(default)]
    pub moon: Option<String>,
    #[serde(default)]
    pub clouds: Option<String>,
}

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub kind: BodyKind,
    pub texture: Option<String>,
    pub color: Point3<f32>,
    pub radius: f32,
    pub distance: f32,
    pub orbit_speed: f32,
    pub description: String,
    pub stats: BodyStats,
    pub features: BodyFeatures,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
}

impl Body {
    pub fn is_star(&self) -> bool {
        self.info.kind == BodyKind::Star
    }

    /// Short blurb used by the hover tooltip.
    pub fn teaser(&self) -> String {
        const TEASER_CHARS: usize = 50;
        let head: String = self.info.description.chars().take(TEASER_CHARS).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with_description(description: &str) -> Body {
        Body {
            id: BodyID(1),
            info: BodyInfo {
                name: String::from("Test"),
                kind: BodyKind::Planet,
                texture: None,
                color: Point3::new(1.0, 1.0, 1.0),
                radius: 1.0,
                distance: 10.0,
                orbit_speed: 0.01,
                description: description.to_owned(),
                stats: BodyStats::default(),
                features: BodyFeatures::default(),
            },
        }
    }

    #[test]
    fn test_teaser() {
        assert_eq!(body_with_description("Short.").teaser(), "Short....");

        let long = "x".repeat(80);
        let teaser = body_with_description(&long).teaser();
        assert_eq!(teaser.len(), 53);
        assert!(teaser.ends_with("..."));

        // Multi-byte characters are counted as characters, not bytes
        let teaser = body_with_description(&"°".repeat(60)).teaser();
        assert_eq!(teaser.chars().count(), 53);
    }
}
