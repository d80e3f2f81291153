//! Error types for cursor pivot placement.

use thiserror::Error;

use crate::basis::Axis;

/// Result type for pivot placement operations.
pub type PivotResult<T> = Result<T, PivotError>;

/// Errors that can occur during pivot placement.
#[derive(Debug, Error)]
pub enum PivotError {
    /// A basis axis vector has (near-)zero length and cannot be normalized.
    #[error("degenerate basis axis {axis}: vector has (near-)zero length")]
    DegenerateAxis {
        /// The axis whose vector could not be normalized.
        axis: Axis,
    },

    /// The selection contains no faces to derive a frame from.
    #[error("no elements selected")]
    EmptySelection,

    /// The host could not fit an orientation frame to the selection.
    #[error("could not create orientation from selection: {reason}")]
    FrameUnavailable {
        /// Host-supplied reason for the failure.
        reason: String,
    },
}
