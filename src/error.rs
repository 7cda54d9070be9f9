//! Error types for the `custom-collections` crate

/// Errors returned by positional operations on [`ArrayList`](crate::ArrayList).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A positional operation addressed a slot outside the valid range.
    ///
    /// For `get` and `remove` the valid range is `0..len`; for `insert`
    /// it is `0..=len`. The list is left unmodified.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}
