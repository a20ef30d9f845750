use crate::cluster::ClusterSpec;
use crate::domain::BoundingDomain;
use crate::error::GenError;
use ndarray_rand::rand_distr::StandardNormal;
use rand::Rng;

/// Rejection sampler producing one cluster's quota of integer points.
///
/// Candidates are drawn per dimension as `round(center + N(0,1) * radius/4)`
/// and accepted only when they fall inside the domain and inside the
/// cluster's acceptance ellipsoid. Every accepted point therefore satisfies
/// both containment invariants by construction.
pub struct EllipsoidClusterSampler<'a> {
    domain: &'a BoundingDomain,
    spec: &'a ClusterSpec,
    index: usize,
    std_devs: Vec<f64>,
    max_attempts: usize,
}

impl<'a> EllipsoidClusterSampler<'a> {
    /// Create a sampler for cluster `index`
    pub fn new(
        domain: &'a BoundingDomain,
        spec: &'a ClusterSpec,
        index: usize,
        max_attempts: usize,
    ) -> Self {
        let std_devs = spec.std_devs();
        Self {
            domain,
            spec,
            index,
            std_devs,
            max_attempts,
        }
    }

    /// Draw one candidate. Returns `None` when a coordinate leaves the domain;
    /// remaining dimensions are not drawn in that case, matching the
    /// sequential reference stream.
    fn draw_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<i64>> {
        let dim = self.domain.dimensionality();
        let mut coords = Vec::with_capacity(dim);

        for k in 0..dim {
            let gauss: f64 = rng.sample(StandardNormal);
            let c = (self.spec.center[k] as f64 + gauss * self.std_devs[k]).round() as i64;
            if c < self.domain.inf()[k] || c > self.domain.sup()[k] {
                return None;
            }
            coords.push(c);
        }

        Some(coords)
    }

    /// Sample a single accepted point.
    ///
    /// # Errors
    ///
    /// Returns `GenError::GenerationStalled` when `max_attempts` candidates
    /// in a row fail the domain or ellipsoid test (degenerate radius/center/
    /// domain combination).
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<i64>, GenError> {
        for _ in 0..self.max_attempts {
            let Some(coords) = self.draw_candidate(rng) else {
                continue;
            };

            // The comparison is ordered this way on purpose: a NaN distance
            // (zero radius, candidate at center) is not rejected.
            let d = crate::distance::elliptical_relative_distance(
                &self.spec.center,
                &self.spec.radius,
                &coords,
            );
            if d > 1.0 {
                continue;
            }

            return Ok(coords);
        }

        Err(GenError::GenerationStalled {
            cluster: self.index,
            attempts: self.max_attempts,
        })
    }

    /// Sample the cluster's full `target_count` quota, in acceptance order
    pub fn sample_all<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Vec<i64>>, GenError> {
        let mut points = Vec::with_capacity(self.spec.target_count);
        while points.len() < self.spec.target_count {
            points.push(self.sample_point(rng)?);
        }
        Ok(points)
    }
}
