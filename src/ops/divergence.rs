//! Velocity divergence kernel
//!
//! Same stencil and boundary policy as the vorticity kernel; computes the
//! scalar `∂u/∂x + ∂v/∂y + ∂w/∂z`.

use crate::error::FieldError;
use crate::field::FieldArray;
use crate::index_box::IndexBox;
use crate::ops::{deriv, validate_stencil};

/// Compute velocity divergence into component `divu` over `active`.
///
/// Reads the 3 contiguous velocity components starting at `vel`. Only
/// component `divu` within `active` is modified.
///
/// # Arguments
/// * `fab` - Patch holding both the velocity components and the output
/// * `active` - Cells to compute; must lie inside the allocated box
/// * `vel` - First velocity component (u, v, w occupy `vel..vel+3`)
/// * `divu` - Output component; must not overlap the velocity run
/// * `delta` - Cell widths per dimension, strictly positive
pub fn divergence(
    fab: &mut FieldArray,
    active: &IndexBox,
    vel: usize,
    divu: usize,
    delta: [f64; 3],
) -> Result<(), FieldError> {
    validate_stencil(fab, active, vel, divu, delta)?;

    let (u, v, w) = (vel, vel + 1, vel + 2);
    let [dx, dy, dz] = delta;
    let lo = active.lo();
    let hi = active.hi();

    for k in lo[2]..=hi[2] {
        for j in lo[1]..=hi[1] {
            for i in lo[0]..=hi[0] {
                let div = deriv(fab, u, i, j, k, 0, dx)
                    + deriv(fab, v, i, j, k, 1, dy)
                    + deriv(fab, w, i, j, k, 2, dz);
                fab.set(divu, i, j, k, div);
            }
        }
    }

    Ok(())
}
