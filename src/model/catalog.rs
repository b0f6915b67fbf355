use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::orrery::{BodyFeatures, BodyInfo, BodyKind, BodyStats};

pub const SUN_SIZE: f32 = 5.0;

/// One body as written in a catalog file. Mirrors `BodyInfo`, but with plain
/// types so the file format does not depend on nalgebra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: BodyKind,
    #[serde(default)]
    pub texture: Option<String>,
    pub color: [f32; 3],
    pub radius: f32,
    #[serde(default)]
    pub distance: f32,
    // Only the star may leave this out
    #[serde(default)]
    pub orbit_speed: f32,
    pub description: String,
    #[serde(default)]
    pub stats: BodyStats,
    #[serde(default)]
    pub features: BodyFeatures,
}

impl From<CatalogEntry> for BodyInfo {
    fn from(entry: CatalogEntry) -> Self {
        let [r, g, b] = entry.color;
        BodyInfo {
            name: entry.name,
            kind: entry.kind,
            texture: entry.texture,
            color: Point3::new(r, g, b),
            radius: entry.radius,
            distance: entry.distance,
            orbit_speed: entry.orbit_speed,
            description: entry.description,
            stats: entry.stats,
            features: entry.features,
        }
    }
}

/// Reads a JSON array of `CatalogEntry` values.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<BodyInfo>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read catalog {}", path.display()))?;
    parse_catalog(&text).with_context(|| format!("Invalid catalog {}", path.display()))
}

pub fn parse_catalog(text: &str) -> anyhow::Result<Vec<BodyInfo>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(text)?;
    ensure!(!entries.is_empty(), "catalog has no bodies");

    for (i, entry) in entries.iter().enumerate() {
        let is_star = entry.kind == BodyKind::Star;
        match (i, is_star) {
            (0, false) => bail!("first body must be the star, found {}", entry.name),
            (i, true) if i > 0 => bail!("only one star is supported, found {}", entry.name),
            _ => {}
        }
        ensure!(
            entry.radius > 0.0,
            "{} has non-positive radius {}",
            entry.name,
            entry.radius
        );
        ensure!(
            is_star || entry.distance > 0.0,
            "{} must orbit at a positive distance",
            entry.name
        );
        ensure!(
            is_star || entry.orbit_speed > 0.0,
            "{} must have a positive orbit speed, got {}",
            entry.name,
            entry.orbit_speed
        );
    }

    Ok(entries.into_iter().map(BodyInfo::from).collect())
}

macro_rules! stats {
    ($($field:ident: $value:expr),* $(,)?) => {
        BodyStats {
            $($field: String::from($value),)*
        }
    };
}

#[allow(clippy::too_many_arguments)]
fn planet(
    name: &str,
    texture: &str,
    color: [f32; 3],
    radius: f32,
    distance: f32,
    orbit_speed: f32,
    description: &str,
    stats: BodyStats,
) -> BodyInfo {
    CatalogEntry {
        name: name.to_owned(),
        kind: BodyKind::Planet,
        texture: Some(texture.to_owned()),
        color,
        radius,
        distance,
        orbit_speed,
        description: description.to_owned(),
        stats,
        features: BodyFeatures::default(),
    }
    .into()
}

/// The sun and the eight planets, at display scale.
pub fn default_catalog() -> Vec<BodyInfo> {
    let sun = CatalogEntry {
        name: String::from("The Sun"),
        kind: BodyKind::Star,
        texture: Some(String::from("sun.jpg")),
        color: [1.0, 1.0, 0.93],
        radius: SUN_SIZE,
        distance: 0.0,
        orbit_speed: 0.0,
        description: String::from("The star at the center of our Solar System."),
        stats: stats! {
            distance: "0 km", orbit: "230M Years", tilt: "7.25°",
            diameter: "1,392,700 km", mass: "1.989 × 10^30 kg", rotation: "27 Earth Days",
            gravity: "274 m/s²", temperature: "5,500°C", moons: "0",
            composition: "H (73%), He (25%)",
        },
        features: BodyFeatures::default(),
    };

    let mut earth = planet(
        "Earth",
        "earth.jpg",
        [0.2, 0.4, 0.9],
        1.3,
        24.0,
        0.015,
        "The only world known to harbor life.",
        stats! {
            distance: "149.6 M km", orbit: "365 Days", tilt: "23.5°", diameter: "12,742 km",
            mass: "5.97 × 10^24 kg", rotation: "24 Hours", gravity: "9.8 m/s²",
            temperature: "15°C", moons: "1", composition: "N2, O2",
        },
    );
    earth.features = BodyFeatures {
        moon: Some(String::from("earth_moon.jpg")),
        clouds: Some(String::from("earth_clouds.jpg")),
    };

    vec![
        sun.into(),
        planet(
            "Mercury",
            "mercury.jpg",
            [0.6, 0.6, 0.6],
            0.8,
            10.0,
            0.04,
            "The smallest planet in the Solar System.",
            stats! {
                distance: "57.9 M km", orbit: "88 Days", tilt: "0.03°", diameter: "4,879 km",
                mass: "3.28 × 10^23 kg", rotation: "59 Days", gravity: "3.7 m/s²",
                temperature: "167°C", moons: "0", composition: "Iron, Silicate",
            },
        ),
        planet(
            "Venus",
            "venus.jpg",
            [0.9, 0.75, 0.5],
            1.2,
            16.0,
            0.02,
            "Runaway greenhouse effect.",
            stats! {
                distance: "108.2 M km", orbit: "225 Days", tilt: "177.3°", diameter: "12,104 km",
                mass: "4.87 × 10^24 kg", rotation: "243 Days", gravity: "8.87 m/s²",
                temperature: "464°C", moons: "0", composition: "CO2, N2",
            },
        ),
        earth,
        planet(
            "Mars",
            "mars.jpg",
            [0.8, 0.35, 0.2],
            1.0,
            32.0,
            0.012,
            "The Red Planet.",
            stats! {
                distance: "227.9 M km", orbit: "687 Days", tilt: "25.2°", diameter: "6,779 km",
                mass: "6.39 × 10^23 kg", rotation: "24.6 Hrs", gravity: "3.71 m/s²",
                temperature: "-65°C", moons: "2", composition: "CO2, Ar",
            },
        ),
        planet(
            "Jupiter",
            "jupiter.jpg",
            [0.8, 0.65, 0.5],
            3.5,
            50.0,
            0.004,
            "Massive Gas Giant.",
            stats! {
                distance: "778.5 M km", orbit: "12 Years", tilt: "3.1°", diameter: "139,820 km",
                mass: "1.90 × 10^27 kg", rotation: "9.9 Hrs", gravity: "24.79 m/s²",
                temperature: "-110°C", moons: "95", composition: "H, He",
            },
        ),
        planet(
            "Saturn",
            "saturn.jpg",
            [0.9, 0.8, 0.55],
            3.0,
            70.0,
            0.003,
            "The Jewel of the System.",
            stats! {
                distance: "1.4 B km", orbit: "29 Years", tilt: "26.7°", diameter: "116,460 km",
                mass: "5.68 × 10^26 kg", rotation: "10.7 Hrs", gravity: "10.44 m/s²",
                temperature: "-140°C", moons: "146", composition: "H, He",
            },
        ),
        planet(
            "Uranus",
            "uranus.jpg",
            [0.6, 0.85, 0.9],
            1.8,
            90.0,
            0.002,
            "The Ice Giant.",
            stats! {
                distance: "2.8 B km", orbit: "84 Years", tilt: "97.8°", diameter: "50,724 km",
                mass: "8.68 × 10^25 kg", rotation: "17.2 Hrs", gravity: "8.69 m/s²",
                temperature: "-195°C", moons: "27", composition: "Ices, H, He",
            },
        ),
        planet(
            "Neptune",
            "neptune.jpg",
            [0.3, 0.45, 0.95],
            1.7,
            110.0,
            0.001,
            "Supersonic winds.",
            stats! {
                distance: "4.5 B km", orbit: "165 Years", tilt: "28.3°", diameter: "49,244 km",
                mass: "1.02 × 10^26 kg", rotation: "16.1 Hrs", gravity: "11.15 m/s²",
                temperature: "-200°C", moons: "14", composition: "Ices, H, He",
            },
        ),
    ]
}
