//! # gaussgen-rs
//!
//! Synthetic multidimensional point datasets with Gaussian-shaped clusters,
//! uniform noise, and a clusterability statistic, for benchmarking
//! clustering algorithms.
//!
//! ## Features
//!
//! - **Ellipsoidal rejection sampling**: cluster points are drawn from
//!   per-dimension Gaussians and accepted only inside the cluster's
//!   axis-aligned ellipsoid and the integer bounding domain
//! - **Noise injection**: uniform domain points labeled by containment, with
//!   outliers still attributed to their nearest cluster for statistics
//! - **Variance Ratio Criterion**: between/within-cluster variance computed
//!   incrementally from running sums, omitted when undefined
//! - **Reproducible**: a single seeded ChaCha8 stream; optional rayon-based
//!   per-cluster parallelism with derived sub-streams
//! - **Bounded rejection loops**: degenerate geometry fails with an explicit
//!   error instead of hanging
//!
//! ## Example
//!
//! ```rust
//! use gaussgen_rs::{BoundingDomain, ClusterSpec, DatasetGenerator, GeneratorConfig};
//!
//! // One cluster in the middle of a 2000 x 2000 integer domain
//! let domain = BoundingDomain::hypercube(2, 2000).unwrap();
//! let clusters = vec![ClusterSpec::new(vec![1000, 1000], vec![400, 400], 1000)];
//!
//! let generator =
//!     DatasetGenerator::new(domain, clusters, GeneratorConfig::new(42)).unwrap();
//! let dataset = generator.generate(100).unwrap();
//!
//! assert_eq!(dataset.len(), 1100);
//! println!("{}", dataset.summary);
//! ```
//!
//! ## Splitting a point budget
//!
//! ```rust
//! use gaussgen_rs::partition_counts;
//!
//! // 10% noise over 4 clusters
//! let (per_cluster, noise) = partition_counts(100_000, 0.1, 4);
//! assert_eq!(per_cluster * 4 + noise, 100_000);
//! ```

mod cluster;
mod config;
mod distance;
mod domain;
mod error;
mod generator;
mod noise;
mod render;
mod sampler;
mod shuffle;
mod stats;

pub use cluster::ClusterSpec;
pub use config::GeneratorConfig;
pub use distance::{elliptical_relative_distance, nearest_cluster, squared_euclidean_distance};
pub use domain::BoundingDomain;
pub use error::GenError;
pub use generator::{partition_counts, ClusterSummary, Dataset, DatasetGenerator, SummaryReport};
pub use noise::{NoiseInjector, NoisePoint};
pub use render::{render_raster, LabelColorMap, Palette, Raster, Rgb};
pub use sampler::EllipsoidClusterSampler;
pub use shuffle::shuffle_dataset;
pub use stats::{ClusterAccumulator, ClusterabilityEvaluator};
