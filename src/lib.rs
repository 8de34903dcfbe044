//! Conformance of N-dimensional affine coordinate maps to the axis
//! conventions of the NIfTI-1 file format.
//!
//! A [`CoordinateMap`] relates named voxel axes (`i`, `j`, `k`, `l`, ...)
//! to named world axes (`x`, `y`, `z`, `t`, ...) through a homogeneous
//! affine matrix. A NIfTI-1 header can only describe such a map when the
//! axes follow a fixed order and the affine is diagonal where it matters.
//! [`coordmap_for_io`] finds the permutation of input axes that aligns them
//! with the canonical output order, derives the `pixdim` and `dim_info`
//! fields, and reports everything that had to be adjusted.
//!
//! # Example
//!
//! ```
//! use nifti_coords::{coordmap_for_io, Axis, CoordinateMap, CoordinateSystem, DimInfo};
//! # use nifti_coords::Result;
//!
//! # fn run() -> Result<()> {
//! let input = CoordinateSystem::new("input", vec![
//!     Axis::voxel("i", 64), Axis::voxel("j", 64), Axis::voxel("k", 30), Axis::voxel("l", 100),
//! ])?;
//! let output = CoordinateSystem::new("output", vec![
//!     Axis::regular("x", 3.), Axis::regular("y", 3.), Axis::regular("z", 4.), Axis::regular("t", 2.5),
//! ])?;
//! let cmap = CoordinateMap::from_start_step(input, output)?;
//!
//! let conformed = coordmap_for_io(&cmap)?;
//! assert_eq!(conformed.order, vec![0, 1, 2, 3]);
//! assert_eq!(conformed.pixdim, vec![3., 3., 4., 2.5]);
//! assert_eq!(conformed.diminfo, DimInfo::new(Some(0), Some(1), Some(2)));
//! assert_eq!(conformed.time_axis, Some(3));
//! assert!(conformed.diagnostics.is_empty());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! [`CoordinateMap`]: ./coordmap/struct.CoordinateMap.html
//! [`coordmap_for_io`]: ./conform/fn.coordmap_for_io.html
#![deny(missing_debug_implementations)]
#![warn(missing_docs, unused_extern_crates, trivial_casts, unused_results)]

#[macro_use]
extern crate approx;
#[macro_use]
extern crate log;
#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate quick_error;

pub mod affine;
pub mod axis;
pub mod conform;
pub mod coordmap;
pub mod diagnostics;
pub mod diminfo;
pub mod error;
pub mod matcher;
pub mod typedef;
mod util;
#[cfg(feature = "ndarray_volumes")]
pub mod volume;

pub use crate::axis::{Axis, CoordinateSystem};
pub use crate::conform::{
    coerce_coordmap, coordmap_for_io, coordmap_for_io_with, validate_coordmap, ConformOptions,
    ConformedCoordMap,
};
pub use crate::coordmap::CoordinateMap;
pub use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use crate::diminfo::{
    derive_roles, freq_axis, ijk_from_diminfo, phase_axis, slice_axis, time_axis, DimInfo,
};
pub use crate::error::{NiftiError, Result};
pub use crate::matcher::{match_axes, AxisMatch};
pub use crate::typedef::{AxisRole, VoxelAxis, WorldAxis};
