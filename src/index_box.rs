//! Integer index boxes for structured grids
//!
//! An [`IndexBox`] is an inclusive, axis-aligned range of 3D cell indices.
//! Boxes describe both the region a kernel operates on (the active box) and
//! the storage extent of a [`FieldArray`](crate::field::FieldArray) (the
//! allocated box, which may carry ghost padding around the active region).

use std::fmt;

use crate::error::FieldError;

/// Inclusive axis-aligned 3D cell range `lo..=hi`.
///
/// Invariant: `lo[d] <= hi[d]` for every dimension, enforced at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexBox {
    lo: [i32; 3],
    hi: [i32; 3],
}

impl IndexBox {
    /// Create a box from inclusive corner cells.
    ///
    /// Fails with [`FieldError::MalformedBox`] if `lo[d] > hi[d]` for any
    /// dimension.
    pub fn new(lo: [i32; 3], hi: [i32; 3]) -> Result<Self, FieldError> {
        if (0..3).any(|d| lo[d] > hi[d]) {
            return Err(FieldError::MalformedBox { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower corner cell.
    #[inline]
    pub fn lo(&self) -> [i32; 3] {
        self.lo
    }

    /// Upper corner cell (inclusive).
    #[inline]
    pub fn hi(&self) -> [i32; 3] {
        self.hi
    }

    /// Number of cells along each dimension.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        [
            (self.hi[0] - self.lo[0] + 1) as usize,
            (self.hi[1] - self.lo[1] + 1) as usize,
            (self.hi[2] - self.lo[2] + 1) as usize,
        ]
    }

    /// Total cell count.
    pub fn num_cells(&self) -> usize {
        let [nx, ny, nz] = self.shape();
        nx * ny * nz
    }

    /// Whether the cell `(i, j, k)` lies inside this box.
    #[inline]
    pub fn contains_cell(&self, i: i32, j: i32, k: i32) -> bool {
        i >= self.lo[0]
            && i <= self.hi[0]
            && j >= self.lo[1]
            && j <= self.hi[1]
            && k >= self.lo[2]
            && k <= self.hi[2]
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains(&self, other: &IndexBox) -> bool {
        (0..3).all(|d| self.lo[d] <= other.lo[d] && other.hi[d] <= self.hi[d])
    }

    /// Grow the box symmetrically by `n` cells in every direction.
    ///
    /// This is how ghost padding is expressed: an allocated box is typically
    /// the active box grown by the stencil width.
    pub fn grow(&self, n: i32) -> Self {
        Self {
            lo: [self.lo[0] - n, self.lo[1] - n, self.lo[2] - n],
            hi: [self.hi[0] + n, self.hi[1] + n, self.hi[2] + n],
        }
    }

    /// Translate the box by an integer offset.
    pub fn shifted(&self, offset: [i32; 3]) -> Self {
        Self {
            lo: [
                self.lo[0] + offset[0],
                self.lo[1] + offset[1],
                self.lo[2] + offset[2],
            ],
            hi: [
                self.hi[0] + offset[0],
                self.hi[1] + offset[1],
                self.hi[2] + offset[2],
            ],
        }
    }
}

impl fmt::Display for IndexBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({},{},{})..({},{},{})]",
            self.lo[0], self.lo[1], self.lo[2], self.hi[0], self.hi[1], self.hi[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(IndexBox::new([0, 0, 0], [3, 3, 3]).is_ok());
        let err = IndexBox::new([0, 4, 0], [3, 3, 3]).unwrap_err();
        assert!(matches!(err, FieldError::MalformedBox { .. }));
    }

    #[test]
    fn test_shape_and_cell_count() {
        let b = IndexBox::new([-1, 0, 2], [2, 0, 4]).unwrap();
        assert_eq!(b.shape(), [4, 1, 3]);
        assert_eq!(b.num_cells(), 12);
    }

    #[test]
    fn test_containment() {
        let outer = IndexBox::new([-1, -1, -1], [4, 4, 4]).unwrap();
        let inner = IndexBox::new([0, 0, 0], [3, 3, 3]).unwrap();
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));

        assert!(outer.contains_cell(-1, 4, 0));
        assert!(!outer.contains_cell(-2, 0, 0));
    }

    #[test]
    fn test_grow_is_ghost_padding() {
        let active = IndexBox::new([0, 0, 0], [7, 7, 7]).unwrap();
        let alloc = active.grow(1);
        assert_eq!(alloc.lo(), [-1, -1, -1]);
        assert_eq!(alloc.hi(), [8, 8, 8]);
        assert!(alloc.contains(&active));
    }

    #[test]
    fn test_shifted_preserves_shape() {
        let b = IndexBox::new([0, 0, 0], [3, 2, 1]).unwrap();
        let s = b.shifted([5, -2, 7]);
        assert_eq!(s.lo(), [5, -2, 7]);
        assert_eq!(s.shape(), b.shape());
    }
}
