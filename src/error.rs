//! Precondition-violation errors shared by all kernels
//!
//! Every failure mode is detectable before any array element is touched, so
//! kernels validate up front and return early. There is nothing recoverable
//! here: each variant indicates a caller bug.

use thiserror::Error;

use crate::index_box::IndexBox;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// `lo[d] > hi[d]` for some dimension.
    #[error("malformed box: lo {lo:?} exceeds hi {hi:?}")]
    MalformedBox { lo: [i32; 3], hi: [i32; 3] },

    /// An active box reaches outside the array's allocated storage.
    #[error("active box {active} not contained in allocated box {allocated}")]
    NotContained {
        active: IndexBox,
        allocated: IndexBox,
    },

    /// A component run `start..start+count` exceeds the array's components.
    #[error("component run of {count} starting at {start} out of bounds for {ncomp} components")]
    ComponentOutOfRange {
        start: usize,
        count: usize,
        ncomp: usize,
    },

    /// A differential kernel was given a zero or negative cell width.
    #[error("non-positive grid spacing {delta:?}")]
    NonPositiveSpacing { delta: [f64; 3] },

    /// Source and destination boxes of a copy describe different shapes.
    #[error("source box {src} and destination box {dst} are not congruent")]
    ShapeMismatch { src: IndexBox, dst: IndexBox },

    /// The output component of a stencil kernel lies inside the component
    /// run it reads, which would corrupt the inputs mid-sweep.
    #[error("output component {out} overlaps the {input_count} input components at {input_start}")]
    ComponentOverlap {
        out: usize,
        input_start: usize,
        input_count: usize,
    },
}
