use crate::cluster::ClusterSpec;
use crate::distance::nearest_cluster;
use crate::domain::BoundingDomain;
use rand::Rng;

/// A uniformly drawn noise point with its emitted label and the cluster it is
/// attributed to for statistics.
///
/// For outliers the two deliberately diverge: the label is `-1` but the point
/// still counts toward its nearest cluster's accumulator, so outliers pull on
/// cluster variance. `attribution` is `None` only when there are no clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoisePoint {
    /// Integer coordinates, one per dimension
    pub coords: Vec<i64>,

    /// Emitted label: nearest cluster index when contained, `-1` otherwise
    pub label: i64,

    /// Cluster accumulator this point is attributed to
    pub attribution: Option<usize>,
}

impl NoisePoint {
    /// Whether the point lies outside every cluster's ellipsoid
    pub fn is_outlier(&self) -> bool {
        self.label < 0
    }
}

/// Draws uniform domain points and classifies them against the cluster set
pub struct NoiseInjector<'a> {
    domain: &'a BoundingDomain,
    clusters: &'a [ClusterSpec],
}

impl<'a> NoiseInjector<'a> {
    pub fn new(domain: &'a BoundingDomain, clusters: &'a [ClusterSpec]) -> Self {
        Self { domain, clusters }
    }

    /// Draw and classify one noise point
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> NoisePoint {
        let coords = self.domain.random_interior_point(rng);

        match nearest_cluster(self.clusters, &coords) {
            Some((i, d)) if d <= 1.0 => NoisePoint {
                coords,
                label: i as i64,
                attribution: Some(i),
            },
            Some((i, _)) => NoisePoint {
                coords,
                label: -1,
                attribution: Some(i),
            },
            None => NoisePoint {
                coords,
                label: -1,
                attribution: None,
            },
        }
    }

    /// Draw `count` noise points in generation order
    pub fn draw_all<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<NoisePoint> {
        (0..count).map(|_| self.draw(rng)).collect()
    }
}
