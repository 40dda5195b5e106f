//! Shared helpers for augment-core integration tests

use augment_core::{FieldArray, IndexBox};

/// Build a patch with a 3-component velocity block starting at `vel`,
/// filled from a function of the cell coordinate. Components outside the
/// velocity block are zero.
pub fn velocity_patch<F>(alloc: IndexBox, ncomp: usize, vel: usize, f: F) -> FieldArray
where
    F: Fn(i32, i32, i32) -> [f64; 3],
{
    FieldArray::from_fn(alloc, ncomp, |comp, i, j, k| {
        if comp >= vel && comp < vel + 3 {
            f(i, j, k)[comp - vel]
        } else {
            0.0
        }
    })
}

/// Visit every cell of a box in storage order.
pub fn for_each_cell<F>(b: &IndexBox, mut f: F)
where
    F: FnMut(i32, i32, i32),
{
    let lo = b.lo();
    let hi = b.hi();
    for k in lo[2]..=hi[2] {
        for j in lo[1]..=hi[1] {
            for i in lo[0]..=hi[0] {
                f(i, j, k);
            }
        }
    }
}
