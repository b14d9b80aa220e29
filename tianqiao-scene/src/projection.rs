use bevy::math::DVec3;

use crate::coord::GeoCoordinate;

/// Radius of the display globe. Node positions and the globe mesh share it.
pub const GLOBE_RADIUS: f64 = 5000.0;

pub trait Projection {
    fn project(&self, coord: &GeoCoordinate) -> DVec3;
    fn unproject(&self, position: &DVec3) -> GeoCoordinate;
}

/// Maps geographic coordinates onto a sphere of fixed radius.
///
/// The mapping goes through colatitude `phi` (angle from the north pole) and
/// a longitude offset `theta`:
///
/// ```text
/// phi   = (90 - latitude)  in radians
/// theta = (180 - longitude) in radians
/// x = R sin(phi) cos(theta)
/// y = R cos(phi)
/// z = R sin(phi) sin(theta)
/// ```
///
/// Both poles collapse to `(0, ±R, 0)` regardless of longitude. That is the
/// usual degeneracy of spherical coordinates, not an error.
pub struct SphericalProjection {
    radius: f64,
    one_over_radius: f64,
}

impl Default for SphericalProjection {
    fn default() -> Self {
        Self::new(GLOBE_RADIUS)
    }
}

impl SphericalProjection {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            one_over_radius: 1.0 / radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Projection for SphericalProjection {
    fn project(&self, coord: &GeoCoordinate) -> DVec3 {
        let phi = (90.0 - coord.latitude).to_radians();
        let theta = (180.0 - coord.longitude).to_radians();
        DVec3::new(
            self.radius * phi.sin() * theta.cos(),
            self.radius * phi.cos(),
            self.radius * phi.sin() * theta.sin(),
        )
    }

    fn unproject(&self, position: &DVec3) -> GeoCoordinate {
        let phi = (position.y * self.one_over_radius).clamp(-1.0, 1.0).acos();
        let theta = position.z.atan2(position.x);
        let mut longitude = 180.0 - theta.to_degrees();
        if longitude > 180.0 {
            longitude -= 360.0;
        }
        GeoCoordinate::new(90.0 - phi.to_degrees(), longitude)
    }
}
