//! Input-validation errors. Every variant here corresponds to the
//! `InputInvalid` category: the core fails fast and performs no partial
//! work. Everything else the engine can encounter (unplaceable parts,
//! solver fallback) is recovered internally and never surfaces as an `Err`.

/// An error returned by [`crate::optimize`] before any optimization work is
/// performed.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OptimizeError {
    /// No parts were supplied.
    #[error("no parts were supplied")]
    EmptyParts,

    /// No stock types were supplied.
    #[error("no stock types were supplied")]
    EmptyStocks,

    /// A part's length was zero or negative.
    #[error("part `{id}` has non-positive length {length}")]
    NonPositivePartLength {
        /// Offending part id.
        id: String,
        /// Offending length.
        length: f64,
    },

    /// A part's quantity was zero.
    #[error("part `{id}` has zero quantity")]
    ZeroPartQuantity {
        /// Offending part id.
        id: String,
    },

    /// A stock type's length was zero or negative.
    #[error("stock `{id}` has non-positive length {length}")]
    NonPositiveStockLength {
        /// Offending stock id.
        id: String,
        /// Offending length.
        length: f64,
    },

    /// `kerf` was negative.
    #[error("kerf must be >= 0, got {0}")]
    NegativeKerf(f64),

    /// `max_split_parts` was zero.
    #[error("max_split_parts must be >= 1, got {0}")]
    ZeroMaxSplitParts(u32),

    /// `joint_allowance` was negative.
    #[error("joint_allowance must be >= 0, got {0}")]
    NegativeJointAllowance(f64),
}
