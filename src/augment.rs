//! Per-patch plotfile augmentation
//!
//! The augmentation driver walks a plotfile's grid patches, carries the raw
//! components over to the output, and appends requested derived fields. The
//! plotfile reading/writing itself belongs to the surrounding framework;
//! this module is the in-memory composition applied to one patch at a time,
//! built from the copy and stencil kernels.

use log::debug;

use crate::error::FieldError;
use crate::field::FieldArray;
use crate::index_box::IndexBox;
use crate::ops::{copy, divergence, vorticity};

/// A derived field appended to a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedField {
    /// Vorticity magnitude `|∇×u|`.
    Vorticity,
    /// Velocity divergence `∇·u`.
    Divergence,
}

impl DerivedField {
    /// Plotfile variable name for this derived field.
    pub fn name(&self) -> &'static str {
        match self {
            DerivedField::Vorticity => "mag_vort",
            DerivedField::Divergence => "divu",
        }
    }
}

/// Augment one grid patch with derived fields.
///
/// Produces a new array over the same allocated box holding all of `src`'s
/// components followed by one appended component per entry in `derived`,
/// computed over `active` from the velocity block starting at `vel`.
///
/// Raw components are carried over the full allocated box so the appended
/// stencils see the same ghost values the source had; derived components
/// are only defined on `active` (their ghost cells stay zero).
///
/// # Arguments
/// * `src` - Patch holding the raw plotfile components
/// * `active` - Valid region of the patch (without ghost cells)
/// * `vel` - First velocity component in `src`
/// * `derived` - Fields to append, in output order
/// * `delta` - Cell widths of the patch's refinement level
pub fn augment_patch(
    src: &FieldArray,
    active: &IndexBox,
    vel: usize,
    derived: &[DerivedField],
    delta: [f64; 3],
) -> Result<FieldArray, FieldError> {
    src.require_comps(vel, 3)?;

    let nraw = src.ncomp();
    let alloc = *src.alloc_box();
    let mut out = FieldArray::new(alloc, nraw + derived.len());

    debug!(
        "augmenting patch {}: {} raw components, appending {:?}",
        active,
        nraw,
        derived.iter().map(|d| d.name()).collect::<Vec<_>>()
    );

    copy(src, &alloc, 0, &mut out, &alloc, 0, nraw)?;

    for (n, field) in derived.iter().enumerate() {
        let dst = nraw + n;
        match field {
            DerivedField::Vorticity => vorticity(&mut out, active, vel, dst, delta)?,
            DerivedField::Divergence => divergence(&mut out, active, vel, dst, delta)?,
        }
    }

    Ok(out)
}
