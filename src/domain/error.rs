/// Errors raised by universe construction and cell access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniverseError {
    #[error(
        "invalid universe dimensions {height}x{width}: both must be non-negative and fit in memory"
    )]
    InvalidDimension { height: i64, width: i64 },

    #[error("cell ({row}, {col}) is outside of the {height}x{width} universe")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}
