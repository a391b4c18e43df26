use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Failed to get file size: {0}")]
    SizeUnavailable(#[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailure(#[source] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Segment at offset {offset} extends past end of data (end: {segment_end}, len: {len})")]
    TruncatedSegment {
        offset: usize,
        segment_end: usize,
        len: usize,
    },

    #[error("Failed to write output: {0}")]
    WriteFailure(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
