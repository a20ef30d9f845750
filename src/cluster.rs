use crate::domain::BoundingDomain;
use crate::error::GenError;

/// Definition of one Gaussian cluster: ellipsoid geometry plus point quota.
///
/// `radius` holds the semi-axis lengths of the acceptance ellipsoid; the
/// per-dimension standard deviation used for sampling is `radius[k] / 4`,
/// which places the great majority of each dimension's Gaussian mass inside
/// the ellipsoid.
#[derive(Debug, Clone)]
pub struct ClusterSpec {
    /// Center coordinates, one per dimension
    pub center: Vec<i64>,

    /// Ellipsoid semi-axis lengths, one per dimension
    pub radius: Vec<i64>,

    /// Number of points to generate for this cluster
    pub target_count: usize,
}

impl ClusterSpec {
    /// Create a cluster specification
    pub fn new(center: Vec<i64>, radius: Vec<i64>, target_count: usize) -> Self {
        Self {
            center,
            radius,
            target_count,
        }
    }

    /// Check center/radius lengths against the domain's dimensionality.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidDomain` naming the cluster index when either
    /// vector disagrees with the domain.
    pub fn validate(&self, index: usize, domain: &BoundingDomain) -> Result<(), GenError> {
        let dim = domain.dimensionality();
        if self.center.len() != dim {
            return Err(GenError::InvalidDomain(format!(
                "Cluster {}: center has {} coordinates, domain has {} dimensions",
                index,
                self.center.len(),
                dim
            )));
        }
        if self.radius.len() != dim {
            return Err(GenError::InvalidDomain(format!(
                "Cluster {}: radius has {} coordinates, domain has {} dimensions",
                index,
                self.radius.len(),
                dim
            )));
        }
        Ok(())
    }

    /// Per-dimension standard deviation derived from the radius
    pub fn std_devs(&self) -> Vec<f64> {
        self.radius.iter().map(|&r| r as f64 / 4.0).collect()
    }
}
