//! Structured sub-box component copy
//!
//! Index-aligned transfer of a contiguous run of components between two
//! independently allocated arrays. The active boxes must be congruent (same
//! shape); cells correspond by offset from each box's lower corner. This is
//! a structured copy, not a resampling.

use crate::error::FieldError;
use crate::field::FieldArray;
use crate::index_box::IndexBox;

/// Copy `ncomp` components from `src` into `dst`.
///
/// Every cell/component pair of `dst_box × dstcomp..dstcomp+ncomp` receives
/// the corresponding value from `src_box × srccomp..srccomp+ncomp`. All
/// validation happens before the first write, so a failed call leaves `dst`
/// untouched.
///
/// # Arguments
/// * `src`, `src_box`, `srccomp` - Source array, active box, first component
/// * `dst`, `dst_box`, `dstcomp` - Destination array, active box, first component
/// * `ncomp` - Number of contiguous components to transfer
pub fn copy(
    src: &FieldArray,
    src_box: &IndexBox,
    srccomp: usize,
    dst: &mut FieldArray,
    dst_box: &IndexBox,
    dstcomp: usize,
    ncomp: usize,
) -> Result<(), FieldError> {
    src.require_contains(src_box)?;
    dst.require_contains(dst_box)?;
    src.require_comps(srccomp, ncomp)?;
    dst.require_comps(dstcomp, ncomp)?;
    if src_box.shape() != dst_box.shape() {
        return Err(FieldError::ShapeMismatch {
            src: *src_box,
            dst: *dst_box,
        });
    }

    let slo = src_box.lo();
    let dlo = dst_box.lo();
    let [nx, ny, nz] = src_box.shape();

    for n in 0..ncomp {
        for k in 0..nz as i32 {
            for j in 0..ny as i32 {
                for i in 0..nx as i32 {
                    let v = src.get(srccomp + n, slo[0] + i, slo[1] + j, slo[2] + k);
                    dst.set(dstcomp + n, dlo[0] + i, dlo[1] + j, dlo[2] + k, v);
                }
            }
        }
    }

    Ok(())
}
