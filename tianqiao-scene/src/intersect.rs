use bevy::math::DVec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }
}

/// Distance along `ray` to the nearest intersection with the sphere at
/// `center` with `radius`, or `None` if the ray misses or the sphere lies
/// behind the origin. `ray.direction` does not need to be normalized; the
/// returned `t` is in units of its length.
pub fn ray_sphere(ray: &Ray, center: DVec3, radius: f64) -> Option<f64> {
    let offset = ray.origin - center;
    let a = ray.direction.length_squared();
    let b = 2.0 * offset.dot(ray.direction);
    let c = offset.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / (2.0 * a);
    if near >= 0.0 {
        return Some(near);
    }
    let far = (-b + root) / (2.0 * a);
    (far >= 0.0).then_some(far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{equals_epsilon, EPSILON12};

    #[test]
    fn ray_outside_pointing_in() {
        let ray = Ray::new(DVec3::new(20000.0, 0.0, 0.0), DVec3::NEG_X);
        let t = ray_sphere(&ray, DVec3::ZERO, 5000.0).unwrap();
        assert!(equals_epsilon(t, 15000.0, None, Some(EPSILON12)));
    }

    #[test]
    fn ray_inside_pointing_out() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);
        let t = ray_sphere(&ray, DVec3::ZERO, 5000.0).unwrap();
        assert!(equals_epsilon(t, 5000.0, None, Some(EPSILON12)));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let ray = Ray::new(DVec3::new(20000.0, 0.0, 0.0), DVec3::X);
        assert!(ray_sphere(&ray, DVec3::ZERO, 5000.0).is_none());
    }

    #[test]
    fn offset_sphere() {
        let center = DVec3::new(0.0, 100.0, 0.0);
        let ray = Ray::new(DVec3::new(-50.0, 100.0, 0.0), DVec3::X);
        let t = ray_sphere(&ray, center, 10.0).unwrap();
        assert!(equals_epsilon(t, 40.0, None, Some(EPSILON12)));
    }
}
