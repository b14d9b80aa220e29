use bevy::math::DVec3;

/// Number of positions sampled along one arc.
pub const ARC_SAMPLES: usize = 400;

/// Outward offset applied to the control point of an arc, proportional to the
/// planar span between the endpoints.
///
/// This is a visual heuristic, not a great-circle computation: it keeps short
/// hops hugging the globe while long hauls swing wide. Swap this function out
/// for a geodesic lift without touching the sampling below.
pub fn bulge_offset(source: DVec3, target: DVec3) -> f64 {
    let dx = (source.x - target.x).abs();
    let dy = (source.y - target.y).abs();
    dx + dy / 1.3
}

/// Samples a quadratic Bézier arc between two points on the globe surface.
///
/// The control point is the componentwise midpoint pushed along +z by
/// [`bulge_offset`], which lifts the curve off the sphere so edges read as
/// arcs instead of chords. Sampling is deterministic; the first and last
/// sample are exactly `source` and `target`. NaN input propagates into the
/// samples unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ArcPathBuilder {
    pub samples: usize,
}

impl Default for ArcPathBuilder {
    fn default() -> Self {
        Self {
            samples: ARC_SAMPLES,
        }
    }
}

impl ArcPathBuilder {
    pub fn build(&self, source: DVec3, target: DVec3) -> Vec<DVec3> {
        let mut control = (source + target) / 2.0;
        control.z += bulge_offset(source, target);

        let samples = self.samples.max(2);
        (0..samples)
            .map(|i| {
                let t = i as f64 / (samples - 1) as f64;
                quadratic_point(source, control, target, t)
            })
            .collect()
    }
}

fn quadratic_point(start: DVec3, control: DVec3, end: DVec3, t: f64) -> DVec3 {
    let u = 1.0 - t;
    start * (u * u) + control * (2.0 * u * t) + end * (t * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoCoordinate;
    use crate::math::{equals_epsilon, EPSILON10};
    use crate::projection::{Projection, SphericalProjection};

    fn endpoints() -> (DVec3, DVec3) {
        let projection = SphericalProjection::default();
        (
            projection.project(&GeoCoordinate::new(39.90, 116.40)),
            projection.project(&GeoCoordinate::new(40.71, -74.01)),
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let (source, target) = endpoints();
        let points = ArcPathBuilder::default().build(source, target);
        assert_eq!(points[0], source);
        assert_eq!(points[points.len() - 1], target);
    }

    #[test]
    fn sample_count_matches_configuration() {
        let (source, target) = endpoints();
        assert_eq!(
            ArcPathBuilder::default().build(source, target).len(),
            ARC_SAMPLES
        );
        let coarse = ArcPathBuilder { samples: 16 };
        assert_eq!(coarse.build(source, target).len(), 16);
    }

    #[test]
    fn midpoint_bulges_along_positive_z() {
        let (source, target) = endpoints();
        let points = ArcPathBuilder::default().build(source, target);
        let mid = points[points.len() / 2];
        let chord_mid = (source + target) / 2.0;
        assert!(mid.z > chord_mid.z);
    }

    #[test]
    fn bulge_offset_matches_the_heuristic() {
        let source = DVec3::new(100.0, 200.0, 0.0);
        let target = DVec3::new(-40.0, -60.0, 0.0);
        assert!(equals_epsilon(
            bulge_offset(source, target),
            140.0 + 260.0 / 1.3,
            None,
            Some(EPSILON10)
        ));
        // symmetric in its arguments
        assert_eq!(
            bulge_offset(source, target),
            bulge_offset(target, source)
        );
    }

    #[test]
    fn deterministic() {
        let (source, target) = endpoints();
        let builder = ArcPathBuilder::default();
        assert_eq!(builder.build(source, target), builder.build(source, target));
    }
}
