use thiserror::Error;

/// Error types for the gaussgen library
#[derive(Error, Debug)]
pub enum GenError {
    /// Domain bounds or cluster geometry are inconsistent with the declared dimensionality
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// Rejection sampling exceeded the attempt bound without producing an acceptable point
    #[error(
        "Generation stalled on cluster {cluster}: no acceptable point after {attempts} attempts"
    )]
    GenerationStalled { cluster: usize, attempts: usize },

    /// Data and label streams have different lengths
    #[error("Stream length mismatch: {data_rows} data rows vs {label_rows} label rows")]
    StreamLengthMismatch { data_rows: usize, label_rows: usize },
}
