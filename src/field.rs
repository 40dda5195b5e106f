//! Dense multi-component field arrays over structured grids
//!
//! A [`FieldArray`] owns a flat buffer spanning an allocated [`IndexBox`]
//! (which may include ghost padding) for `ncomp` components. Cells are
//! stored in Fortran (column-major) order with the component as the slowest
//! axis, matching the plotfile convention:
//! `idx = (i - lo.x) + nx*(j - lo.y) + nx*ny*(k - lo.z) + comp*nx*ny*nz`.
//!
//! All kernel entry points validate active-box containment and component
//! ranges through the `require_*` helpers before touching data, so the raw
//! index arithmetic below never reads or writes out of bounds for inputs
//! that pass validation.

use crate::error::FieldError;
use crate::index_box::IndexBox;

/// Dense multi-component array addressed by `(comp, i, j, k)`.
#[derive(Debug, Clone)]
pub struct FieldArray {
    alloc: IndexBox,
    ncomp: usize,
    data: Vec<f64>,
}

impl FieldArray {
    /// Allocate a zero-filled array over `alloc` with `ncomp` components.
    pub fn new(alloc: IndexBox, ncomp: usize) -> Self {
        Self {
            alloc,
            ncomp,
            data: vec![0.0; alloc.num_cells() * ncomp],
        }
    }

    /// Allocate and fill from a function of `(comp, i, j, k)`.
    pub fn from_fn<F>(alloc: IndexBox, ncomp: usize, mut f: F) -> Self
    where
        F: FnMut(usize, i32, i32, i32) -> f64,
    {
        let mut fab = Self::new(alloc, ncomp);
        let lo = alloc.lo();
        let hi = alloc.hi();
        for comp in 0..ncomp {
            for k in lo[2]..=hi[2] {
                for j in lo[1]..=hi[1] {
                    for i in lo[0]..=hi[0] {
                        let idx = fab.index(comp, i, j, k);
                        fab.data[idx] = f(comp, i, j, k);
                    }
                }
            }
        }
        fab
    }

    /// The allocated box backing this array's storage.
    #[inline]
    pub fn alloc_box(&self) -> &IndexBox {
        &self.alloc
    }

    /// Number of components.
    #[inline]
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Cells per component (the allocated box's cell count).
    #[inline]
    pub fn cells_per_comp(&self) -> usize {
        self.alloc.num_cells()
    }

    /// Flat index of `(comp, i, j, k)`.
    #[inline]
    pub fn index(&self, comp: usize, i: i32, j: i32, k: i32) -> usize {
        debug_assert!(comp < self.ncomp, "component {} out of range", comp);
        debug_assert!(
            self.alloc.contains_cell(i, j, k),
            "cell ({},{},{}) outside allocated box {}",
            i,
            j,
            k,
            self.alloc
        );
        let lo = self.alloc.lo();
        let [nx, ny, nz] = self.alloc.shape();
        let ic = (i - lo[0]) as usize;
        let jc = (j - lo[1]) as usize;
        let kc = (k - lo[2]) as usize;
        ic + nx * (jc + ny * kc) + comp * nx * ny * nz
    }

    /// Read one value.
    #[inline]
    pub fn get(&self, comp: usize, i: i32, j: i32, k: i32) -> f64 {
        self.data[self.index(comp, i, j, k)]
    }

    /// Write one value.
    #[inline]
    pub fn set(&mut self, comp: usize, i: i32, j: i32, k: i32, value: f64) {
        let idx = self.index(comp, i, j, k);
        self.data[idx] = value;
    }

    /// Flat view of one component over the whole allocated box.
    pub fn comp_slice(&self, comp: usize) -> &[f64] {
        let n = self.cells_per_comp();
        &self.data[comp * n..(comp + 1) * n]
    }

    /// Mutable flat view of one component.
    pub fn comp_slice_mut(&mut self, comp: usize) -> &mut [f64] {
        let n = self.cells_per_comp();
        &mut self.data[comp * n..(comp + 1) * n]
    }

    /// Check that `active` lies inside the allocated box.
    pub fn require_contains(&self, active: &IndexBox) -> Result<(), FieldError> {
        if !self.alloc.contains(active) {
            return Err(FieldError::NotContained {
                active: *active,
                allocated: self.alloc,
            });
        }
        Ok(())
    }

    /// Check that components `start..start+count` are all valid.
    pub fn require_comps(&self, start: usize, count: usize) -> Result<(), FieldError> {
        if start + count > self.ncomp {
            return Err(FieldError::ComponentOutOfRange {
                start,
                count,
                ncomp: self.ncomp,
            });
        }
        Ok(())
    }
}

/// Check that every cell width is strictly positive.
pub(crate) fn require_spacing(delta: [f64; 3]) -> Result<(), FieldError> {
    if delta.iter().any(|&d| d <= 0.0) {
        return Err(FieldError::NonPositiveSpacing { delta });
    }
    Ok(())
}
