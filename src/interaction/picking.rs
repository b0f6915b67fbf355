use crate::math::ray::Ray;
use crate::model::{BodyID, HitVolume};

/// Returns the body whose hit-volume the ray meets first.
pub fn pick<I>(ray: &Ray, volumes: I) -> Option<BodyID>
where
    I: IntoIterator<Item = HitVolume>,
{
    volumes
        .into_iter()
        .filter_map(|volume| {
            ray.intersect_sphere(&volume.center, volume.radius)
                .map(|t| (t, volume.id))
        })
        .min_by(|(t1, _), (t2, _)| t1.total_cmp(t2))
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::default_catalog;
    use crate::model::Orrery;
    use nalgebra::{Point3, Vector3};

    fn volume(id: usize, x: f32, radius: f32) -> HitVolume {
        HitVolume {
            id: BodyID(id),
            center: Point3::new(x, 0.0, 0.0),
            radius,
        }
    }

    #[test]
    fn test_nearest_wins() {
        let ray = Ray::new(Point3::new(-100.0, 0.0, 0.0), Vector3::x());
        let volumes = vec![volume(1, 20.0, 2.0), volume(2, -10.0, 2.0), volume(3, 5.0, 2.0)];
        assert_eq!(pick(&ray, volumes), Some(BodyID(2)));

        let ray = Ray::new(Point3::new(100.0, 0.0, 0.0), -Vector3::x());
        let volumes = vec![volume(1, 20.0, 2.0), volume(2, -10.0, 2.0), volume(3, 5.0, 2.0)];
        assert_eq!(pick(&ray, volumes), Some(BodyID(1)));
    }

    #[test]
    fn test_miss() {
        let ray = Ray::new(Point3::new(0.0, 10.0, 0.0), Vector3::x());
        assert_eq!(pick(&ray, vec![volume(1, 20.0, 2.0)]), None);
        assert_eq!(pick(&ray, vec![]), None);
    }

    #[test]
    fn test_hit_volume_is_larger_than_body() {
        let orrery = Orrery::new(default_catalog());
        let earth = orrery.get_body(BodyID(3));
        let center = orrery.world_position(earth.id);

        // Looking straight down, beside Earth rather than at it. Planets start
        // lined up along +x, so step off along z.
        let miss_body = earth.info.radius * 2.0;
        let ray = Ray::new(center + Vector3::new(0.0, 50.0, miss_body), -Vector3::y());
        assert_eq!(pick(&ray, orrery.hit_volumes()), Some(earth.id));

        let miss_volume = earth.info.radius * 4.0;
        let ray = Ray::new(center + Vector3::new(0.0, 50.0, miss_volume), -Vector3::y());
        assert_eq!(pick(&ray, orrery.hit_volumes()), None);
    }
}
