//! Vorticity magnitude kernel
//!
//! Computes `|∇×u|` from the three velocity components of a patch using
//! centered finite differences, with a one-sided fallback at allocated-box
//! edges (see [`deriv`](super::deriv) for the exact boundary policy). With
//! the customary one-ghost-cell padding around the active box, every active
//! cell gets the centered stencil.

use crate::error::FieldError;
use crate::field::FieldArray;
use crate::index_box::IndexBox;
use crate::ops::{deriv, validate_stencil};

/// Compute vorticity magnitude into component `vort` over `active`.
///
/// Reads the 3 contiguous velocity components starting at `vel` and writes
/// `sqrt(wx² + wy² + wz²)` per cell, where `w = ∇×u`. Only component `vort`
/// within `active` is modified.
///
/// # Arguments
/// * `fab` - Patch holding both the velocity components and the output
/// * `active` - Cells to compute; must lie inside the allocated box
/// * `vel` - First velocity component (u, v, w occupy `vel..vel+3`)
/// * `vort` - Output component; must not overlap the velocity run
/// * `delta` - Cell widths per dimension, strictly positive
pub fn vorticity(
    fab: &mut FieldArray,
    active: &IndexBox,
    vel: usize,
    vort: usize,
    delta: [f64; 3],
) -> Result<(), FieldError> {
    validate_stencil(fab, active, vel, vort, delta)?;

    let (u, v, w) = (vel, vel + 1, vel + 2);
    let [dx, dy, dz] = delta;
    let lo = active.lo();
    let hi = active.hi();

    for k in lo[2]..=hi[2] {
        for j in lo[1]..=hi[1] {
            for i in lo[0]..=hi[0] {
                let wx = deriv(fab, w, i, j, k, 1, dy) - deriv(fab, v, i, j, k, 2, dz);
                let wy = deriv(fab, u, i, j, k, 2, dz) - deriv(fab, w, i, j, k, 0, dx);
                let wz = deriv(fab, v, i, j, k, 0, dx) - deriv(fab, u, i, j, k, 1, dy);
                fab.set(vort, i, j, k, (wx * wx + wy * wy + wz * wz).sqrt());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_velocity_has_zero_vorticity() {
        let active = IndexBox::new([0, 0, 0], [3, 3, 3]).unwrap();
        let alloc = active.grow(1);
        let mut fab = FieldArray::from_fn(alloc, 4, |comp, _, _, _| match comp {
            0 => 1.0,
            1 => 2.0,
            2 => 3.0,
            _ => 0.0,
        });

        vorticity(&mut fab, &active, 0, 3, [1.0, 1.0, 1.0]).unwrap();

        let lo = active.lo();
        let hi = active.hi();
        for k in lo[2]..=hi[2] {
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    assert!(
                        fab.get(3, i, j, k).abs() < 1e-12,
                        "vorticity at ({},{},{}) = {}, expected 0",
                        i,
                        j,
                        k,
                        fab.get(3, i, j, k)
                    );
                }
            }
        }
    }

    #[test]
    fn test_solid_body_rotation() {
        // u = -y, v = x, w = 0 rotates about z with |curl| = 2 everywhere
        let active = IndexBox::new([0, 0, 0], [3, 3, 3]).unwrap();
        let alloc = active.grow(1);
        let mut fab = FieldArray::from_fn(alloc, 4, |comp, i, j, _| match comp {
            0 => -(j as f64),
            1 => i as f64,
            _ => 0.0,
        });

        vorticity(&mut fab, &active, 0, 3, [1.0, 1.0, 1.0]).unwrap();

        let lo = active.lo();
        let hi = active.hi();
        for k in lo[2]..=hi[2] {
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    assert!(
                        (fab.get(3, i, j, k) - 2.0).abs() < 1e-12,
                        "|curl| at ({},{},{}) = {}, expected 2",
                        i,
                        j,
                        k,
                        fab.get(3, i, j, k)
                    );
                }
            }
        }
    }

    #[test]
    fn test_shear_flow_with_spacing() {
        // u = y, so wz = -du/dy = -1/dy scaling check: with dy = 0.5 the
        // physical shear is 2 and |curl| = 2
        let active = IndexBox::new([0, 0, 0], [2, 2, 2]).unwrap();
        let alloc = active.grow(1);
        let mut fab = FieldArray::from_fn(alloc, 4, |comp, _, j, _| {
            if comp == 0 {
                j as f64
            } else {
                0.0
            }
        });

        vorticity(&mut fab, &active, 0, 3, [1.0, 0.5, 1.0]).unwrap();

        assert!(
            (fab.get(3, 1, 1, 1) - 2.0).abs() < 1e-12,
            "|curl| = {}, expected 2",
            fab.get(3, 1, 1, 1)
        );
    }

    #[test]
    fn test_writes_only_output_component() {
        let active = IndexBox::new([0, 0, 0], [2, 2, 2]).unwrap();
        let alloc = active.grow(1);
        let mut fab = FieldArray::from_fn(alloc, 5, |comp, i, j, k| {
            (comp as f64) + 0.1 * (i + j + k) as f64
        });
        let before = fab.clone();

        vorticity(&mut fab, &active, 0, 3, [1.0, 1.0, 1.0]).unwrap();

        assert_eq!(fab.comp_slice(0), before.comp_slice(0));
        assert_eq!(fab.comp_slice(1), before.comp_slice(1));
        assert_eq!(fab.comp_slice(2), before.comp_slice(2));
        assert_eq!(fab.comp_slice(4), before.comp_slice(4));
        // Ghost cells of the output component are untouched too
        let g = alloc.lo();
        assert_eq!(fab.get(3, g[0], g[1], g[2]), before.get(3, g[0], g[1], g[2]));
    }

    #[test]
    fn test_precondition_failures() {
        let alloc = IndexBox::new([0, 0, 0], [3, 3, 3]).unwrap();
        let mut fab = FieldArray::new(alloc, 4);
        let too_big = IndexBox::new([0, 0, 0], [4, 3, 3]).unwrap();

        assert!(matches!(
            vorticity(&mut fab, &too_big, 0, 3, [1.0; 3]),
            Err(FieldError::NotContained { .. })
        ));
        assert!(matches!(
            vorticity(&mut fab, &alloc, 2, 3, [1.0; 3]),
            Err(FieldError::ComponentOutOfRange { .. })
        ));
        assert!(matches!(
            vorticity(&mut fab, &alloc, 0, 3, [1.0, -1.0, 1.0]),
            Err(FieldError::NonPositiveSpacing { .. })
        ));
    }
}
