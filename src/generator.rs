use crate::cluster::ClusterSpec;
use crate::config::GeneratorConfig;
use crate::domain::BoundingDomain;
use crate::error::GenError;
use crate::noise::NoiseInjector;
use crate::sampler::EllipsoidClusterSampler;
use crate::stats::{ClusterAccumulator, ClusterabilityEvaluator};
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::fmt;

/// Per-cluster entry of the summary report
#[derive(Debug, Clone)]
pub struct ClusterSummary {
    /// Requested point count
    pub requested: usize,
    /// Center coordinates
    pub center: Vec<i64>,
    /// Ellipsoid semi-axis lengths
    pub radius: Vec<i64>,
}

/// Summary of a generation run: cluster definitions in index order plus the
/// variance-ratio statistic when it is defined
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub clusters: Vec<ClusterSummary>,
    pub variance_ratio: Option<f64>,
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.clusters.iter().enumerate() {
            writeln!(f, "Cluster {}", i + 1)?;
            writeln!(f, "Points: {}", c.requested)?;
            write!(f, "Center: {}", c.center[0])?;
            for v in &c.center[1..] {
                write!(f, "\t{}", v)?;
            }
            writeln!(f)?;
            write!(f, "Radius: {}", c.radius[0])?;
            for v in &c.radius[1..] {
                write!(f, "\t{}", v)?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        if let Some(vrc) = self.variance_ratio {
            writeln!(f, "VarianceRatioClusterability: {}", vrc)?;
        }
        Ok(())
    }
}

/// A complete generated dataset: one row per point, one label per row,
/// cluster points first (in cluster-index order) followed by noise points,
/// all in generation order.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Point coordinates, shape (n_points, dimensionality)
    pub points: Array2<i64>,

    /// Emitted labels: cluster index for contained points, -1 for outliers
    pub labels: Array1<i64>,

    /// Per-cluster definitions and the clusterability statistic
    pub summary: SummaryReport,
}

impl Dataset {
    /// Number of generated points
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Split a total point budget into a per-cluster quota and a noise count.
///
/// `(1 - noise_ratio)` of the total is divided evenly over the clusters with
/// round-half-up; whatever the cluster quotas do not cover becomes noise.
/// With zero clusters everything is noise. Round-half-up can push the summed
/// quotas past the total, in which case the noise count clamps to zero.
pub fn partition_counts(
    total_points: usize,
    noise_ratio: f64,
    n_clusters: usize,
) -> (usize, usize) {
    let per_cluster = if n_clusters == 0 {
        0
    } else {
        (0.5 + total_points as f64 * (1.0 - noise_ratio) / n_clusters as f64) as usize
    };
    let noise = total_points.saturating_sub(per_cluster * n_clusters);
    (per_cluster, noise)
}

/// Orchestrates a full generation run: cluster sampling, noise injection,
/// statistics accumulation.
///
/// # Example
///
/// ```
/// use gaussgen_rs::{BoundingDomain, ClusterSpec, DatasetGenerator, GeneratorConfig};
///
/// let domain = BoundingDomain::hypercube(2, 2000).unwrap();
/// let clusters = vec![
///     ClusterSpec::new(vec![500, 500], vec![200, 200], 1000),
///     ClusterSpec::new(vec![1500, 1500], vec![200, 200], 1000),
/// ];
/// let generator =
///     DatasetGenerator::new(domain, clusters, GeneratorConfig::new(42)).unwrap();
/// let dataset = generator.generate(100).unwrap();
///
/// assert_eq!(dataset.len(), 2100);
/// ```
pub struct DatasetGenerator {
    domain: BoundingDomain,
    clusters: Vec<ClusterSpec>,
    config: GeneratorConfig,
}

impl DatasetGenerator {
    /// Create a generator, validating every cluster against the domain.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidDomain` when a cluster's center or radius
    /// disagrees with the domain's dimensionality.
    pub fn new(
        domain: BoundingDomain,
        clusters: Vec<ClusterSpec>,
        config: GeneratorConfig,
    ) -> Result<Self, GenError> {
        for (i, spec) in clusters.iter().enumerate() {
            spec.validate(i, &domain)?;
        }
        Ok(Self {
            domain,
            clusters,
            config,
        })
    }

    /// Run the full generation: every cluster's quota, then `noise_count`
    /// noise points, with every point fed to the clusterability evaluator.
    ///
    /// # Errors
    ///
    /// Returns `GenError::GenerationStalled` when a cluster's rejection
    /// sampling exceeds the configured attempt bound.
    pub fn generate(&self, noise_count: usize) -> Result<Dataset, GenError> {
        let dim = self.domain.dimensionality();
        let total: usize =
            self.clusters.iter().map(|c| c.target_count).sum::<usize>() + noise_count;

        let mut flat: Vec<i64> = Vec::with_capacity(total * dim);
        let mut labels: Vec<i64> = Vec::with_capacity(total);
        let mut evaluator = ClusterabilityEvaluator::new(self.clusters.len(), dim);

        // Cluster phase. The sequential path threads one shared rng through
        // every cluster and the noise phase; the parallel path gives each
        // cluster its own sub-stream and merges partial accumulators in
        // cluster-index order.
        let mut noise_rng = if self.config.parallel {
            let partials: Vec<(Vec<Vec<i64>>, ClusterAccumulator)> = self
                .clusters
                .par_iter()
                .enumerate()
                .map(|(i, spec)| {
                    let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
                    rng.set_stream(i as u64 + 1);
                    let sampler = EllipsoidClusterSampler::new(
                        &self.domain,
                        spec,
                        i,
                        self.config.max_attempts_per_point,
                    );
                    let points = sampler.sample_all(&mut rng)?;
                    let mut acc = ClusterAccumulator::new(dim);
                    for p in &points {
                        acc.record(p);
                    }
                    Ok((points, acc))
                })
                .collect::<Result<_, GenError>>()?;

            for (i, (points, acc)) in partials.iter().enumerate() {
                for p in points {
                    flat.extend_from_slice(p);
                    labels.push(i as i64);
                }
                evaluator.merge_cluster(i, acc);
            }

            let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
            rng.set_stream(0);
            rng
        } else {
            let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
            for (i, spec) in self.clusters.iter().enumerate() {
                if self.config.verbose {
                    eprintln!(
                        "Creating region {}/{} ({} points)...",
                        i + 1,
                        self.clusters.len(),
                        spec.target_count
                    );
                }
                let sampler = EllipsoidClusterSampler::new(
                    &self.domain,
                    spec,
                    i,
                    self.config.max_attempts_per_point,
                );
                let points = sampler.sample_all(&mut rng)?;
                for p in &points {
                    evaluator.record(Some(i), p);
                    flat.extend_from_slice(p);
                    labels.push(i as i64);
                }
            }
            rng
        };

        // Noise phase
        if noise_count > 0 {
            if self.config.verbose {
                eprintln!("Adding noise...");
            }
            let injector = NoiseInjector::new(&self.domain, &self.clusters);
            let mut n_outliers = 0usize;

            for _ in 0..noise_count {
                let p = injector.draw(&mut noise_rng);
                if p.is_outlier() {
                    n_outliers += 1;
                }
                evaluator.record(p.attribution, &p.coords);
                flat.extend_from_slice(&p.coords);
                labels.push(p.label);
            }

            if self.config.verbose {
                eprintln!(
                    "{} outliers added while adding {} noise points (the rest was absorbed by clusters)",
                    n_outliers, noise_count
                );
            }
        }

        let summary = SummaryReport {
            clusters: self
                .clusters
                .iter()
                .map(|c| ClusterSummary {
                    requested: c.target_count,
                    center: c.center.clone(),
                    radius: c.radius.clone(),
                })
                .collect(),
            variance_ratio: evaluator.variance_ratio(),
        };

        Ok(Dataset {
            points: Array2::from_shape_vec((total, dim), flat).unwrap(),
            labels: Array1::from_vec(labels),
            summary,
        })
    }

    /// Get the domain
    pub fn domain(&self) -> &BoundingDomain {
        &self.domain
    }

    /// Get the cluster definitions
    pub fn clusters(&self) -> &[ClusterSpec] {
        &self.clusters
    }

    /// Get the configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
