//! Stateless per-patch kernels
//!
//! Each kernel is a pure, single-pass transformation over one grid patch:
//! it validates its preconditions, sweeps the active box once, and retains
//! nothing. Concurrency across patches is the caller's business; within a
//! patch there is none.

pub mod copy;
pub mod divergence;
pub mod vorticity;

pub use copy::copy;
pub use divergence::divergence;
pub use vorticity::vorticity;

use crate::error::FieldError;
use crate::field::{require_spacing, FieldArray};
use crate::index_box::IndexBox;

/// First derivative of component `comp` along dimension `dir` at `(i,j,k)`.
///
/// Uses the second-order centered stencil `(f[+1] - f[-1]) / (2h)` when both
/// neighbors lie inside the allocated box, and falls back to the first-order
/// one-sided stencil `(f[+1] - f[0]) / h` (or its backward mirror) at
/// allocated-box edges. A box one cell thick along `dir` has no neighbors at
/// all and yields zero.
#[inline]
pub(crate) fn deriv(
    fab: &FieldArray,
    comp: usize,
    i: i32,
    j: i32,
    k: i32,
    dir: usize,
    h: f64,
) -> f64 {
    let mut lo = [i, j, k];
    let mut hi = [i, j, k];
    lo[dir] -= 1;
    hi[dir] += 1;

    let alloc = fab.alloc_box();
    let has_lo = alloc.contains_cell(lo[0], lo[1], lo[2]);
    let has_hi = alloc.contains_cell(hi[0], hi[1], hi[2]);

    match (has_lo, has_hi) {
        (true, true) => {
            (fab.get(comp, hi[0], hi[1], hi[2]) - fab.get(comp, lo[0], lo[1], lo[2])) * (0.5 / h)
        }
        (false, true) => (fab.get(comp, hi[0], hi[1], hi[2]) - fab.get(comp, i, j, k)) / h,
        (true, false) => (fab.get(comp, i, j, k) - fab.get(comp, lo[0], lo[1], lo[2])) / h,
        (false, false) => 0.0,
    }
}

/// Shared precondition checks for the two differential kernels.
///
/// Fails fast, before any array access: active-box containment, the
/// 3-component velocity run, the output component, positive spacing, and
/// that the output does not alias the velocity run (the sweep still reads
/// velocity neighbors after writing earlier cells).
pub(crate) fn validate_stencil(
    fab: &FieldArray,
    active: &IndexBox,
    vel: usize,
    out: usize,
    delta: [f64; 3],
) -> Result<(), FieldError> {
    fab.require_contains(active)?;
    fab.require_comps(vel, 3)?;
    fab.require_comps(out, 1)?;
    require_spacing(delta)?;
    if out >= vel && out < vel + 3 {
        return Err(FieldError::ComponentOverlap {
            out,
            input_start: vel,
            input_count: 3,
        });
    }
    Ok(())
}
