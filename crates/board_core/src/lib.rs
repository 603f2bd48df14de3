pub mod codec;
pub mod piece;
pub mod square;

pub use codec::*;
pub use piece::*;
pub use square::*;

use thiserror::Error;

/// Errors raised while handling board encodings.
///
/// Only coordinate violations are hard errors; everything else the codec
/// meets in the wild (unknown characters, unknown cell values) is logged
/// and skipped at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A (file, rank) pair outside 1-8. Indicates a caller bug; aborts the
    /// offending operation only.
    #[error("invalid coordinate: file {file}, rank {rank} (both must be 1-8)")]
    InvalidCoordinate { file: u8, rank: u8 },

    /// A square id that is not a file letter a-h followed by a rank digit 1-8.
    #[error("malformed square id {0:?}")]
    MalformedSquareId(String),

    /// A scan-order index outside 0-63.
    #[error("square index {0} out of range (0-63)")]
    SquareIndexOutOfRange(usize),

    /// A numeric position that is not exactly 64 cells long.
    #[error("numeric position has {0} cells, expected 64")]
    WrongCellCount(usize),
}
