use crate::error::GenError;
use rand::Rng;

/// Axis-aligned integer hyper-rectangle bounding all generated points.
///
/// Bounds are inclusive on both ends. Immutable for the lifetime of a
/// generation run.
#[derive(Debug, Clone)]
pub struct BoundingDomain {
    inf: Vec<i64>,
    sup: Vec<i64>,
}

impl BoundingDomain {
    /// Create a domain from inclusive per-dimension bounds.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidDomain` if the bound vectors have different
    /// lengths, are empty, or `inf[k] > sup[k]` for some dimension.
    pub fn new(inf: Vec<i64>, sup: Vec<i64>) -> Result<Self, GenError> {
        if inf.len() != sup.len() {
            return Err(GenError::InvalidDomain(format!(
                "Bound vectors have different lengths: {} vs {}",
                inf.len(),
                sup.len()
            )));
        }
        if inf.is_empty() {
            return Err(GenError::InvalidDomain(
                "Domain must have at least one dimension".to_string(),
            ));
        }
        for (k, (&lo, &hi)) in inf.iter().zip(sup.iter()).enumerate() {
            if lo > hi {
                return Err(GenError::InvalidDomain(format!(
                    "inf[{}] = {} exceeds sup[{}] = {}",
                    k, lo, k, hi
                )));
            }
        }
        Ok(Self { inf, sup })
    }

    /// Create a hypercube domain `[0, width - 1]^dim`
    pub fn hypercube(dim: usize, width: i64) -> Result<Self, GenError> {
        Self::new(vec![0; dim], vec![width - 1; dim])
    }

    /// Number of dimensions
    pub fn dimensionality(&self) -> usize {
        self.inf.len()
    }

    /// Inclusive lower bounds
    pub fn inf(&self) -> &[i64] {
        &self.inf
    }

    /// Inclusive upper bounds
    pub fn sup(&self) -> &[i64] {
        &self.sup
    }

    /// Per-dimension inclusive bound check
    pub fn contains(&self, point: &[i64]) -> bool {
        point.len() == self.inf.len()
            && point
                .iter()
                .zip(self.inf.iter().zip(self.sup.iter()))
                .all(|(&c, (&lo, &hi))| c >= lo && c <= hi)
    }

    /// Draw a uniform point in the domain, independently per dimension
    pub fn random_interior_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        self.inf
            .iter()
            .zip(self.sup.iter())
            .map(|(&lo, &hi)| rng.gen_range(lo..=hi))
            .collect()
    }

    /// Number of integer cells in the domain, as a float to avoid overflow
    /// for high dimensionality
    pub fn volume(&self) -> f64 {
        self.inf
            .iter()
            .zip(self.sup.iter())
            .map(|(&lo, &hi)| (hi - lo + 1) as f64)
            .product()
    }
}
