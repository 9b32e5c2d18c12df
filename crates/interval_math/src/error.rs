use thiserror::Error;

/// Errors raised while constructing an [`Interval`](crate::Interval).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError<T> {
    #[error(
        "invalid order of interval boundaries: start ({start:?}) should not be greater than end ({end:?})"
    )]
    InvalidOrder { start: T, end: T },
}
