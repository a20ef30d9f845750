use crate::distance::squared_euclidean_distance;
use ndarray::Array1;

/// Running per-cluster sums, updated incrementally as attributed points arrive
#[derive(Debug, Clone)]
pub struct ClusterAccumulator {
    count: usize,
    sum: Array1<f64>,
    sum_sq: Array1<f64>,
}

impl ClusterAccumulator {
    pub fn new(dim: usize) -> Self {
        Self {
            count: 0,
            sum: Array1::zeros(dim),
            sum_sq: Array1::zeros(dim),
        }
    }

    /// Fold one point into the running sums
    pub fn record(&mut self, coords: &[i64]) {
        for (k, &c) in coords.iter().enumerate() {
            let c = c as f64;
            self.sum[k] += c;
            self.sum_sq[k] += c * c;
        }
        self.count += 1;
    }

    /// Fold another accumulator in; used to merge per-thread partials
    pub fn merge(&mut self, other: &ClusterAccumulator) {
        self.count += other.count;
        self.sum += &other.sum;
        self.sum_sq += &other.sum_sq;
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Totals across all attributed points, cluster and noise phases alike
#[derive(Debug, Clone)]
struct GlobalAccumulator {
    count: usize,
    sum: Array1<f64>,
}

/// Accumulates generated points and computes the Variance Ratio Criterion.
///
/// Every attributed point is fed exactly once via [`record`](Self::record);
/// the ratio of between-cluster to within-cluster variance comes out of
/// [`variance_ratio`](Self::variance_ratio) once generation is complete.
#[derive(Debug, Clone)]
pub struct ClusterabilityEvaluator {
    clusters: Vec<ClusterAccumulator>,
    global: GlobalAccumulator,
}

impl ClusterabilityEvaluator {
    pub fn new(n_clusters: usize, dim: usize) -> Self {
        Self {
            clusters: (0..n_clusters).map(|_| ClusterAccumulator::new(dim)).collect(),
            global: GlobalAccumulator {
                count: 0,
                sum: Array1::zeros(dim),
            },
        }
    }

    /// Record one generated point.
    ///
    /// `attribution` is the cluster the point counts toward for statistics;
    /// `None` (the zero-cluster noise case) records nothing, global totals
    /// included, so the count invariant
    /// `sum(cluster counts) == total count` always holds.
    pub fn record(&mut self, attribution: Option<usize>, coords: &[i64]) {
        let Some(i) = attribution else {
            return;
        };
        self.clusters[i].record(coords);
        for (k, &c) in coords.iter().enumerate() {
            self.global.sum[k] += c as f64;
        }
        self.global.count += 1;
    }

    /// Merge a per-thread partial accumulator into cluster `index`
    pub fn merge_cluster(&mut self, index: usize, partial: &ClusterAccumulator) {
        self.global.count += partial.count;
        self.global.sum += &partial.sum;
        self.clusters[index].merge(partial);
    }

    /// Total number of attributed points
    pub fn total_count(&self) -> usize {
        self.global.count
    }

    /// Number of points attributed to cluster `index`
    pub fn cluster_count(&self, index: usize) -> usize {
        self.clusters[index].count
    }

    /// Compute the Variance Ratio Criterion (between-cluster variance over
    /// within-cluster variance).
    ///
    /// Returns `None` when the statistic is undefined: no points at all, or a
    /// within-cluster variance of zero (single spreadless cluster, or zero
    /// clusters). Never returns an infinity or NaN.
    pub fn variance_ratio(&self) -> Option<f64> {
        if self.global.count == 0 {
            return None;
        }

        let n_tot = self.global.count as f64;
        let mean_tot = self.global.sum.mapv(|s| s / n_tot);

        let mut wc = 0.0;
        let mut bc = 0.0;

        for acc in &self.clusters {
            // Empty clusters contribute nothing
            if acc.count == 0 {
                continue;
            }
            let n_i = acc.count as f64;
            let p_i = n_i / n_tot;

            // Within-cluster spread from the raw sums, before normalizing
            let mut wc_i = 0.0;
            for k in 0..acc.sum.len() {
                wc_i += acc.sum_sq[k] - acc.sum[k] * acc.sum[k] / n_i;
            }

            let mean_i = acc.sum.mapv(|s| s / n_i);
            let bc_i = p_i
                * squared_euclidean_distance(
                    mean_tot.as_slice().unwrap(),
                    mean_i.as_slice().unwrap(),
                );

            wc += wc_i / n_tot;
            bc += bc_i;
        }

        if wc == 0.0 {
            return None;
        }
        Some(bc / wc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_record_updates_counts() {
        let mut eval = ClusterabilityEvaluator::new(2, 2);
        eval.record(Some(0), &[1, 2]);
        eval.record(Some(0), &[3, 4]);
        eval.record(Some(1), &[5, 6]);
        eval.record(None, &[7, 8]);

        assert_eq!(eval.total_count(), 3);
        assert_eq!(eval.cluster_count(0), 2);
        assert_eq!(eval.cluster_count(1), 1);
    }

    #[test]
    fn test_count_invariant() {
        let mut eval = ClusterabilityEvaluator::new(3, 1);
        for i in 0..60 {
            eval.record(Some(i % 3), &[i as i64]);
        }
        let sum: usize = (0..3).map(|i| eval.cluster_count(i)).sum();
        assert_eq!(sum, eval.total_count());
    }

    #[test]
    fn test_variance_ratio_no_points() {
        let eval = ClusterabilityEvaluator::new(2, 2);
        assert!(eval.variance_ratio().is_none());
    }

    #[test]
    fn test_variance_ratio_zero_within_spread_omitted() {
        // One cluster, every point identical: wc == 0, ratio undefined
        let mut eval = ClusterabilityEvaluator::new(1, 2);
        for _ in 0..10 {
            eval.record(Some(0), &[5, 5]);
        }
        assert!(eval.variance_ratio().is_none());
    }

    #[test]
    fn test_variance_ratio_hand_computed() {
        // Cluster 0: (0,0), (2,0); cluster 1: (10,0), (12,0)
        // Means: (1,0) and (11,0); global mean (6,0)
        // wc = (q - s^2/n)/nTot summed = ((4 - 4/2) + (244 - 484/2))/4 = 1
        // bc = 0.5*25 + 0.5*25 = 25
        let mut eval = ClusterabilityEvaluator::new(2, 2);
        eval.record(Some(0), &[0, 0]);
        eval.record(Some(0), &[2, 0]);
        eval.record(Some(1), &[10, 0]);
        eval.record(Some(1), &[12, 0]);

        let vrc = eval.variance_ratio().unwrap();
        assert_relative_eq!(vrc, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_ratio_skips_empty_cluster() {
        let mut eval = ClusterabilityEvaluator::new(3, 1);
        eval.record(Some(0), &[0]);
        eval.record(Some(0), &[2]);
        eval.record(Some(2), &[10]);
        eval.record(Some(2), &[12]);

        // Cluster 1 is empty; the ratio must still be finite and defined
        let vrc = eval.variance_ratio().unwrap();
        assert!(vrc.is_finite());
        assert!(vrc > 0.0);
    }

    #[test]
    fn test_variance_ratio_non_negative() {
        let mut eval = ClusterabilityEvaluator::new(2, 2);
        for i in 0..20i64 {
            eval.record(Some((i % 2) as usize), &[i, -i]);
        }
        let vrc = eval.variance_ratio().unwrap();
        assert!(vrc >= 0.0);
    }

    #[test]
    fn test_merge_matches_sequential_record() {
        let points_a = [[1i64, 2], [3, 1], [2, 2]];
        let points_b = [[10i64, 9], [11, 12]];

        let mut sequential = ClusterabilityEvaluator::new(2, 2);
        for p in &points_a {
            sequential.record(Some(0), p);
        }
        for p in &points_b {
            sequential.record(Some(1), p);
        }

        let mut partial_a = ClusterAccumulator::new(2);
        for p in &points_a {
            partial_a.record(p);
        }
        let mut partial_b = ClusterAccumulator::new(2);
        for p in &points_b {
            partial_b.record(p);
        }
        let mut merged = ClusterabilityEvaluator::new(2, 2);
        merged.merge_cluster(0, &partial_a);
        merged.merge_cluster(1, &partial_b);

        assert_eq!(merged.total_count(), sequential.total_count());
        assert_relative_eq!(
            merged.variance_ratio().unwrap(),
            sequential.variance_ratio().unwrap(),
            epsilon = 1e-12
        );
    }
}
