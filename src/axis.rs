//! This module defines the `Axis` and `CoordinateSystem` types,
//! which name and order the dimensions on either side of a
//! coordinate map.

use crate::error::{NiftiError, Result};
use crate::typedef::WorldAxis;
use crate::util::{find_duplicate, permute};
use nalgebra::DMatrix;

/// A named axis of a coordinate system.
///
/// Voxel axes usually have a length (the number of samples along the
/// axis), whereas world axes usually do not.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// The name of the axis, such as `"i"` or `"x"`
    pub name: String,
    /// Number of samples along this axis, if known
    pub length: Option<usize>,
    /// Coordinate at index 0
    pub start: f64,
    /// Distance between two consecutive samples
    pub step: f64,
}

impl Axis {
    /// Create a voxel axis of the given length, with unit step.
    ///
    /// # Example
    ///
    /// ```
    /// # use nifti_coords::Axis;
    /// let axis = Axis::voxel("i", 64);
    /// assert_eq!(axis.length, Some(64));
    /// assert_eq!(axis.step, 1.);
    /// ```
    pub fn voxel<N: Into<String>>(name: N, length: usize) -> Self {
        Axis {
            name: name.into(),
            length: Some(length),
            start: 0.,
            step: 1.,
        }
    }

    /// Create a world axis with the given step, starting at 0.
    pub fn regular<N: Into<String>>(name: N, step: f64) -> Self {
        Axis {
            name: name.into(),
            length: None,
            start: 0.,
            step,
        }
    }

    /// Builder-style setter for the axis start.
    pub fn with_start(self, start: f64) -> Self {
        Axis { start, ..self }
    }
}

/// An ordered sequence of uniquely named axes.
///
/// The order of the axes defines their position in an affine matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    name: String,
    axes: Vec<Axis>,
}

impl CoordinateSystem {
    /// Create a new coordinate system.
    ///
    /// # Errors
    ///
    /// - `NiftiError::DuplicateAxisName` if two axes have the same name.
    pub fn new<N: Into<String>>(name: N, axes: Vec<Axis>) -> Result<Self> {
        if let Some(dup) = find_duplicate(axes.iter().map(|a| a.name.as_str())) {
            return Err(NiftiError::DuplicateAxisName(dup.to_string()));
        }
        Ok(CoordinateSystem {
            name: name.into(),
            axes,
        })
    }

    /// The name of the coordinate system.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The axes, in order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// The number of axes.
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// The axis names, in order.
    pub fn axis_names(&self) -> Vec<&str> {
        self.axes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Position of the axis with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|a| a.name == name)
    }

    /// Resolve every axis name as a canonical world axis. `Err` holds
    /// the names which are not part of the world alphabet.
    pub fn world_axes(&self) -> ::std::result::Result<Vec<WorldAxis>, Vec<String>> {
        let mut unknown = Vec::new();
        let resolved: Vec<_> = self
            .axes
            .iter()
            .filter_map(|a| {
                let w = WorldAxis::from_name(&a.name);
                if w.is_none() {
                    unknown.push(a.name.clone());
                }
                w
            })
            .collect();
        if unknown.is_empty() {
            Ok(resolved)
        } else {
            Err(unknown)
        }
    }

    /// The lengths of all axes, if every axis has one.
    pub fn shape(&self) -> Option<Vec<usize>> {
        self.axes.iter().map(|a| a.length).collect()
    }

    /// The homogeneous affine of this system's starts and steps: a diagonal
    /// of steps with the starts in the translation column.
    ///
    /// # Example
    ///
    /// ```
    /// # use nifti_coords::{Axis, CoordinateSystem};
    /// let cs = CoordinateSystem::new("output", vec![
    ///     Axis::regular("x", 2.),
    ///     Axis::regular("y", 3.).with_start(-10.),
    /// ])?;
    /// let affine = cs.start_step_affine();
    /// assert_eq!(affine[(0, 0)], 2.);
    /// assert_eq!(affine[(1, 1)], 3.);
    /// assert_eq!(affine[(1, 2)], -10.);
    /// assert_eq!(affine[(2, 2)], 1.);
    /// # Ok::<(), nifti_coords::NiftiError>(())
    /// ```
    pub fn start_step_affine(&self) -> DMatrix<f64> {
        let n = self.ndim();
        let mut affine = DMatrix::identity(n + 1, n + 1);
        for (i, axis) in self.axes.iter().enumerate() {
            affine[(i, i)] = axis.step;
            affine[(i, n)] = axis.start;
        }
        affine
    }

    /// Create a new system with the axes rearranged so that position `k`
    /// holds the axis at `order[k]`, under a new name.
    pub(crate) fn reordered<N: Into<String>>(&self, name: N, order: &[usize]) -> Self {
        CoordinateSystem {
            name: name.into(),
            axes: permute(&self.axes, order),
        }
    }
}
