use crate::cluster::ClusterSpec;

/// Elliptical relative distance of a point from a cluster center.
///
/// `sum_k ((center[k] - point[k]) / radius[k])^2`; a value `<= 1` means the
/// point lies inside the axis-aligned ellipsoid with the given semi-axes.
#[inline]
pub fn elliptical_relative_distance(center: &[i64], radius: &[i64], point: &[i64]) -> f64 {
    center
        .iter()
        .zip(radius.iter())
        .zip(point.iter())
        .map(|((&c, &r), &p)| {
            let t = (c - p) as f64 / r as f64;
            t * t
        })
        .sum()
}

/// Squared Euclidean distance between two float vectors
#[inline]
pub fn squared_euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Find the cluster whose ellipsoid is relatively nearest to `point`.
///
/// Returns `(index, distance)` of the minimizing cluster, ties broken by the
/// lowest index. `None` when there are no clusters.
pub fn nearest_cluster(clusters: &[ClusterSpec], point: &[i64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (i, spec) in clusters.iter().enumerate() {
        let d = elliptical_relative_distance(&spec.center, &spec.radius, point);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }

    best
}
