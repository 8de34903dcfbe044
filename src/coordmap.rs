//! This module defines the `CoordinateMap` struct, an affine
//! transform between an input (voxel) and an output (world)
//! coordinate system.

use crate::axis::CoordinateSystem;
use crate::error::{NiftiError, Result};
use nalgebra::{DMatrix, DVector};
use std::collections::BTreeMap;

/// An affine mapping from the input coordinate system to the output
/// coordinate system, in homogeneous form.
///
/// The affine has shape `(n_out + 1) x (n_in + 1)` and its last row is
/// `[0, ..., 0, 1]`.
///
/// # Example
///
/// ```
/// use nifti_coords::{Axis, CoordinateMap, CoordinateSystem};
/// # use nifti_coords::Result;
///
/// # fn run() -> Result<()> {
/// let input = CoordinateSystem::new("input", vec![Axis::voxel("i", 4), Axis::voxel("j", 5)])?;
/// let output = CoordinateSystem::new("output", vec![
///     Axis::regular("x", 2.),
///     Axis::regular("y", 3.).with_start(1.),
/// ])?;
/// let cmap = CoordinateMap::from_start_step(input, output)?;
/// assert_eq!(cmap.apply(&[1., 1.])?, vec![2., 4.]);
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMap {
    input: CoordinateSystem,
    output: CoordinateSystem,
    affine: DMatrix<f64>,
    pairings: BTreeMap<String, String>,
}

impl CoordinateMap {
    /// Create a new coordinate map from its coordinate systems and
    /// homogeneous affine matrix.
    ///
    /// # Errors
    ///
    /// - `NiftiError::AffineShape` if the affine does not have shape
    ///   `(n_out + 1) x (n_in + 1)`.
    /// - `NiftiError::NonFiniteAffine` if some entry is infinite or NaN.
    /// - `NiftiError::NotHomogeneous` if its last row is not `[0, ..., 0, 1]`.
    pub fn new(
        input: CoordinateSystem,
        output: CoordinateSystem,
        affine: DMatrix<f64>,
    ) -> Result<Self> {
        let expected = (output.ndim() + 1, input.ndim() + 1);
        if affine.shape() != expected {
            return Err(NiftiError::AffineShape(expected, affine.shape()));
        }
        if let Some(k) = affine.iter().position(|v| !v.is_finite()) {
            // column-major storage
            let rows = affine.nrows();
            return Err(NiftiError::NonFiniteAffine(k % rows, k / rows));
        }
        let last = expected.0 - 1;
        let homogeneous = affine.row(last).iter().enumerate().all(|(j, v)| {
            let target = if j == expected.1 - 1 { 1. } else { 0. };
            abs_diff_eq!(*v, target)
        });
        if !homogeneous {
            return Err(NiftiError::NotHomogeneous);
        }

        Ok(CoordinateMap {
            input,
            output,
            affine,
            pairings: BTreeMap::new(),
        })
    }

    /// Create a coordinate map using the starts and steps of the output
    /// axes as a diagonal affine.
    ///
    /// # Errors
    ///
    /// - `NiftiError::DimensionMismatch` if both systems do not have the
    ///   same number of axes.
    pub fn from_start_step(input: CoordinateSystem, output: CoordinateSystem) -> Result<Self> {
        if input.ndim() != output.ndim() {
            return Err(NiftiError::DimensionMismatch(input.ndim(), output.ndim()));
        }
        let affine = output.start_step_affine();
        CoordinateMap::new(input, output, affine)
    }

    /// Declare that the input axis `input_name` corresponds to the output
    /// axis `output_name`, overriding the correspondence implied by the
    /// canonical names.
    ///
    /// # Errors
    ///
    /// - `NiftiError::UnknownAxis` if either name is not in its system.
    pub fn with_pairing(mut self, input_name: &str, output_name: &str) -> Result<Self> {
        if self.input.index_of(input_name).is_none() {
            return Err(NiftiError::UnknownAxis(input_name.to_string()));
        }
        if self.output.index_of(output_name).is_none() {
            return Err(NiftiError::UnknownAxis(output_name.to_string()));
        }
        let _ = self
            .pairings
            .insert(input_name.to_string(), output_name.to_string());
        Ok(self)
    }

    /// Build a coordinate map from already consistent parts.
    pub(crate) fn from_parts(
        input: CoordinateSystem,
        output: CoordinateSystem,
        affine: DMatrix<f64>,
        pairings: BTreeMap<String, String>,
    ) -> Self {
        debug_assert_eq!(affine.shape(), (output.ndim() + 1, input.ndim() + 1));
        CoordinateMap {
            input,
            output,
            affine,
            pairings,
        }
    }

    /// The input (voxel) coordinate system.
    pub fn input(&self) -> &CoordinateSystem {
        &self.input
    }

    /// The output (world) coordinate system.
    pub fn output(&self) -> &CoordinateSystem {
        &self.output
    }

    /// The homogeneous affine matrix.
    pub fn affine(&self) -> &DMatrix<f64> {
        &self.affine
    }

    /// The declared input-to-output axis pairings.
    pub fn pairings(&self) -> &BTreeMap<String, String> {
        &self.pairings
    }

    /// The number of input and output axes.
    pub fn ndim(&self) -> (usize, usize) {
        (self.input.ndim(), self.output.ndim())
    }

    /// The shape of the voxel array described by the input axes, if all
    /// of them have a length.
    pub fn shape(&self) -> Option<Vec<usize>> {
        self.input.shape()
    }

    /// Map an input coordinate to the output coordinate system.
    ///
    /// # Errors
    ///
    /// - `NiftiError::InputLength` if `coords` does not have one value per
    ///   input axis.
    pub fn apply(&self, coords: &[f64]) -> Result<Vec<f64>> {
        let n_in = self.input.ndim();
        if coords.len() != n_in {
            return Err(NiftiError::InputLength(n_in, coords.len()));
        }
        let x = DVector::from_iterator(
            n_in + 1,
            coords.iter().cloned().chain(::std::iter::once(1.)),
        );
        let y = &self.affine * x;
        Ok(y.iter().take(self.output.ndim()).cloned().collect())
    }
}
