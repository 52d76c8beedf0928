//! Random point samplers.
//!
//! Every sampler takes the random source as a parameter so tests can pass a
//! seeded `StdRng`; the site itself draws from OS entropy and gets a new
//! cloud on every mount.

use std::f32::consts::TAU;

use folio_common::RendererError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, PointCloud};

pub const DEFAULT_POINT_COUNT: usize = 2000;
pub const DEFAULT_INNER_RADIUS: f32 = 5.0;
pub const DEFAULT_OUTER_RADIUS: f32 = 15.0;

/// Build the random source for a mount: seeded when `seed` is set,
/// otherwise from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Samples points in a hollow spherical shell between two radii.
///
/// Directions are uniform over the sphere's solid angle: the polar angle is
/// `acos(2u - 1)` rather than uniform, which would bunch points at the poles.
/// Radius is uniform in `[inner, outer)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellSampler {
    inner: f32,
    outer: f32,
}

impl ShellSampler {
    /// Requires `0 <= inner < outer`, both finite.
    pub fn new(inner: f32, outer: f32) -> Result<Self, RendererError> {
        if !inner.is_finite() || !outer.is_finite() || inner < 0.0 || inner >= outer {
            return Err(RendererError::InvalidShell { inner, outer });
        }
        Ok(Self { inner, outer })
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer
    }

    /// Draw one point.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let radius = rng.gen_range(self.inner..self.outer);
        let theta = rng.gen_range(0.0..TAU);
        let u: f32 = rng.gen();
        let phi = (2.0 * u - 1.0).clamp(-1.0, 1.0).acos();

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();

        Point::new(
            radius * sin_phi * cos_theta,
            radius * sin_phi * sin_theta,
            radius * cos_phi,
        )
    }

    /// Draw `count` points. `count == 0` yields an empty cloud.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> PointCloud {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.sample(rng));
        }
        PointCloud::from_points(points)
    }
}

impl Default for ShellSampler {
    fn default() -> Self {
        Self {
            inner: DEFAULT_INNER_RADIUS,
            outer: DEFAULT_OUTER_RADIUS,
        }
    }
}

/// Generate a shell cloud from the thread-local RNG.
///
/// Not reproducible: two calls return two different clouds.
pub fn generate_sphere(count: usize, inner: f32, outer: f32) -> Result<PointCloud, RendererError> {
    let sampler = ShellSampler::new(inner, outer)?;
    Ok(sampler.generate(count, &mut rand::thread_rng()))
}

/// Samples points uniformly inside an origin-centred box.
///
/// `extent` is the full width, height and depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSampler {
    extent: [f32; 3],
}

impl BoxSampler {
    /// Requires every extent to be finite and non-negative.
    pub fn new(extent: [f32; 3]) -> Result<Self, RendererError> {
        if extent.iter().any(|e| !e.is_finite() || *e < 0.0) {
            return Err(RendererError::InvalidBox(extent));
        }
        Ok(Self { extent })
    }

    pub fn extent(&self) -> [f32; 3] {
        self.extent
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let [ex, ey, ez] = self.extent;
        Point::new(
            (rng.gen::<f32>() - 0.5) * ex,
            (rng.gen::<f32>() - 0.5) * ey,
            (rng.gen::<f32>() - 0.5) * ez,
        )
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> PointCloud {
        PointCloud::from_points((0..count).map(|_| self.sample(rng)).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    #[test]
    fn returns_exactly_n_points() {
        let sampler = ShellSampler::default();
        let mut rng = StdRng::seed_from_u64(1);
        for n in [0usize, 1, 2, 17, 2000] {
            assert_eq!(sampler.generate(n, &mut rng).len(), n);
        }
    }

    #[test]
    fn zero_points_is_empty() {
        let cloud = generate_sphere(0, 5.0, 15.0).unwrap();
        assert!(cloud.is_empty());
    }

    #[test]
    fn all_points_inside_shell() {
        let cloud = generate_sphere(2000, 5.0, 15.0).unwrap();
        assert_eq!(cloud.len(), 2000);
        for (i, p) in cloud.points().iter().enumerate() {
            let r = p.length();
            assert!(
                (5.0 - TOLERANCE..=15.0 + TOLERANCE).contains(&r),
                "point {i} at radius {r}"
            );
        }
    }

    #[test]
    fn two_calls_yield_different_clouds() {
        let a = generate_sphere(2000, 5.0, 15.0).unwrap();
        let b = generate_sphere(2000, 5.0, 15.0).unwrap();
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_reproduces_cloud() {
        let sampler = ShellSampler::default();
        let a = sampler.generate(100, &mut rng_from_seed(Some(42)));
        let b = sampler.generate(100, &mut rng_from_seed(Some(42)));
        let c = sampler.generate(100, &mut rng_from_seed(Some(43)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn equal_area_bands_are_uniform() {
        // Bands of equal width in cos(phi) cover equal solid angle.
        const SAMPLES: usize = 10_000;
        const BANDS: usize = 10;
        let sampler = ShellSampler::default();
        let cloud = sampler.generate(SAMPLES, &mut StdRng::seed_from_u64(2024));

        let mut counts = [0usize; BANDS];
        for p in cloud.points() {
            let cos_phi = (p.z / p.length()).clamp(-1.0, 1.0);
            let band = (((cos_phi + 1.0) / 2.0) * BANDS as f32) as usize;
            counts[band.min(BANDS - 1)] += 1;
        }

        let expected = SAMPLES / BANDS;
        for (band, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 150,
                "band {band} has {count} points, expected about {expected}"
            );
        }
    }

    #[test]
    fn equal_angle_bands_favour_equator() {
        // Equal-width bands in phi are not equal-area: the equatorial band
        // should hold several times more points than a polar one.
        let sampler = ShellSampler::default();
        let cloud = sampler.generate(10_000, &mut StdRng::seed_from_u64(7));

        let deg = |p: &Point| (p.z / p.length()).clamp(-1.0, 1.0).acos().to_degrees();
        let polar = cloud.points().iter().filter(|p| deg(p) < 20.0).count();
        let equator = cloud
            .points()
            .iter()
            .filter(|p| (80.0..100.0).contains(&deg(p)))
            .count();

        assert!(polar > 0);
        assert!(equator > polar * 3, "equator {equator}, polar {polar}");
    }

    #[test]
    fn radius_spans_the_shell() {
        let sampler = ShellSampler::new(5.0, 15.0).unwrap();
        let cloud = sampler.generate(5000, &mut StdRng::seed_from_u64(3));
        let min = cloud.points().iter().map(Point::length).fold(f32::MAX, f32::min);
        let max = cloud.max_radius();
        assert!(min < 5.5);
        assert!(max > 14.5);
    }

    #[test]
    fn rejects_inverted_or_degenerate_shell() {
        assert!(ShellSampler::new(15.0, 5.0).is_err());
        assert!(ShellSampler::new(5.0, 5.0).is_err());
        assert!(ShellSampler::new(-1.0, 5.0).is_err());
        assert!(ShellSampler::new(f32::NAN, 5.0).is_err());
        assert!(ShellSampler::new(0.0, f32::INFINITY).is_err());
        assert!(matches!(
            generate_sphere(10, 15.0, 5.0),
            Err(RendererError::InvalidShell { .. })
        ));
    }

    #[test]
    fn solid_ball_is_allowed() {
        let sampler = ShellSampler::new(0.0, 1.0).unwrap();
        let cloud = sampler.generate(200, &mut StdRng::seed_from_u64(9));
        assert!(cloud.max_radius() <= 1.0 + TOLERANCE);
    }

    #[test]
    fn box_points_stay_inside_extent() {
        let sampler = BoxSampler::new([4.0, 4.0, 2.0]).unwrap();
        let cloud = sampler.generate(500, &mut StdRng::seed_from_u64(11));
        assert_eq!(cloud.len(), 500);
        for p in cloud.points() {
            assert!(p.x.abs() <= 2.0);
            assert!(p.y.abs() <= 2.0);
            assert!(p.z.abs() <= 1.0);
        }
    }

    #[test]
    fn box_rejects_negative_extent() {
        assert!(BoxSampler::new([1.0, -1.0, 1.0]).is_err());
        assert!(BoxSampler::new([1.0, 1.0, f32::NAN]).is_err());
        assert!(BoxSampler::new([0.0, 0.0, 0.0]).is_ok());
    }
}
