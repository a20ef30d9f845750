use crate::error::GenError;
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

/// Jointly permute a data/label pair, preserving row correspondence.
///
/// # Errors
///
/// Returns `GenError::StreamLengthMismatch` when the two streams have
/// different lengths. The mismatch is a fatal configuration error for the
/// caller, but it is reported rather than aborting the process.
pub fn shuffle_dataset<R: Rng + ?Sized>(
    points: &Array2<i64>,
    labels: &Array1<i64>,
    rng: &mut R,
) -> Result<(Array2<i64>, Array1<i64>), GenError> {
    if points.nrows() != labels.len() {
        return Err(GenError::StreamLengthMismatch {
            data_rows: points.nrows(),
            label_rows: labels.len(),
        });
    }

    let mut indices: Vec<usize> = (0..points.nrows()).collect();
    indices.shuffle(rng);

    let shuffled_points = points.select(Axis(0), &indices);
    let shuffled_labels = indices.iter().map(|&i| labels[i]).collect();

    Ok((shuffled_points, shuffled_labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn row_label_pairs(points: &Array2<i64>, labels: &Array1<i64>) -> Vec<(Vec<i64>, i64)> {
        let mut pairs: Vec<(Vec<i64>, i64)> = points
            .rows()
            .into_iter()
            .zip(labels.iter())
            .map(|(row, &l)| (row.to_vec(), l))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let points = array![[1, 2], [3, 4], [5, 6], [7, 8], [9, 10]];
        let labels = array![0, 0, 1, 1, -1];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let (sp, sl) = shuffle_dataset(&points, &labels, &mut rng).unwrap();

        assert_eq!(sp.nrows(), 5);
        assert_eq!(sl.len(), 5);
        assert_eq!(
            row_label_pairs(&points, &labels),
            row_label_pairs(&sp, &sl)
        );
    }

    #[test]
    fn test_shuffle_preserves_row_correspondence() {
        // Encode the label in the row so displaced rows expose a broken pairing
        let points = array![[0, 0], [1, 1], [2, 2], [3, 3]];
        let labels = array![0, 1, 2, 3];
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let (sp, sl) = shuffle_dataset(&points, &labels, &mut rng).unwrap();
        for (row, &l) in sp.rows().into_iter().zip(sl.iter()) {
            assert_eq!(row[0], l);
            assert_eq!(row[1], l);
        }
    }

    #[test]
    fn test_shuffle_length_mismatch() {
        let points = array![[1, 2], [3, 4]];
        let labels = array![0, 1, 2];
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = shuffle_dataset(&points, &labels, &mut rng);
        assert!(matches!(
            result,
            Err(GenError::StreamLengthMismatch {
                data_rows: 2,
                label_rows: 3
            })
        ));
    }

    #[test]
    fn test_shuffle_empty() {
        let points = Array2::<i64>::zeros((0, 3));
        let labels = Array1::<i64>::zeros(0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let (sp, sl) = shuffle_dataset(&points, &labels, &mut rng).unwrap();
        assert_eq!(sp.nrows(), 0);
        assert_eq!(sl.len(), 0);
    }

    #[test]
    fn test_shuffle_deterministic_for_seed() {
        let points = array![[1, 0], [2, 0], [3, 0], [4, 0], [5, 0], [6, 0]];
        let labels = array![0, 1, 0, 1, 0, 1];

        let mut rng1 = ChaCha8Rng::seed_from_u64(77);
        let mut rng2 = ChaCha8Rng::seed_from_u64(77);

        let (a_p, a_l) = shuffle_dataset(&points, &labels, &mut rng1).unwrap();
        let (b_p, b_l) = shuffle_dataset(&points, &labels, &mut rng2).unwrap();
        assert_eq!(a_p, b_p);
        assert_eq!(a_l, b_l);
    }
}
