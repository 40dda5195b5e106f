//! augment-core: derived-field kernels for plotfile augmentation
//!
//! This crate provides the numeric core of a plotfile-augmentation utility
//! for block-structured AMR data: stateless finite-difference kernels over
//! dense structured-grid patches, and the per-patch composition that
//! appends derived fields to a patch's raw components.
//!
//! # Modules
//! - `index_box`: inclusive integer cell ranges (active and allocated boxes)
//! - `field`: bounds-checked multi-component field arrays
//! - `ops`: vorticity, divergence, and structured-copy kernels
//! - `augment`: per-patch derived-field composition
//! - `error`: the precondition-violation taxonomy
//!
//! Plotfile I/O, refinement bookkeeping, and domain decomposition live in
//! the surrounding framework; patches arrive here as plain arrays plus
//! index boxes and leave the same way.

pub mod augment;
pub mod error;
pub mod field;
pub mod index_box;
pub mod ops;

pub use augment::{augment_patch, DerivedField};
pub use error::FieldError;
pub use field::FieldArray;
pub use index_box::IndexBox;
pub use ops::{copy, divergence, vorticity};
