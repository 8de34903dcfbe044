//! Conformance of coordinate maps to the NIfTI-1 axis conventions.
//!
//! This is the main entry point of the crate. Given a [`CoordinateMap`],
//! [`coordmap_for_io`] produces a new coordinate map whose input and
//! output axes follow the canonical order, together with the permutation
//! of input axes that was applied, the per-axis sampling intervals
//! (`pixdim`) and the acquisition roles (`dim_info`).
//!
//! Reordering axes, negative steps and discarded off-diagonal terms are
//! all reported as [`Diagnostic`]s alongside a valid result. Only a
//! failure to match the axis names is an error.
//!
//! [`CoordinateMap`]: ../coordmap/struct.CoordinateMap.html
//! [`coordmap_for_io`]: ./fn.coordmap_for_io.html
//! [`Diagnostic`]: ../diagnostics/enum.Diagnostic.html

use crate::affine::{self, DEFAULT_RELATIVE_EPSILON};
use crate::axis::CoordinateSystem;
use crate::coordmap::CoordinateMap;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::diminfo::{derive_roles, DimInfo};
use crate::error::{NiftiError, Result};
use crate::matcher::match_axes;

/// Suffix appended to the name of a coordinate system whose axes were
/// reordered.
pub const REORDERED_SUFFIX: &str = "-reordered";

/// Options for conforming a coordinate map.
///
/// # Example
///
/// ```
/// # use nifti_coords::ConformOptions;
/// let options = ConformOptions::new()
///     .relative_epsilon(1e-6)
///     .suffix("-nifti");
/// assert_eq!(options.suffix, "-nifti");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConformOptions {
    /// Entries of the affine's linear part whose magnitude is below this
    /// fraction of its Frobenius norm are treated as zero.
    pub relative_epsilon: f64,
    /// Suffix for the names of reordered coordinate systems.
    pub suffix: String,
}

impl Default for ConformOptions {
    fn default() -> Self {
        ConformOptions {
            relative_epsilon: DEFAULT_RELATIVE_EPSILON,
            suffix: REORDERED_SUFFIX.to_string(),
        }
    }
}

impl ConformOptions {
    /// Create the default options.
    pub fn new() -> Self {
        ConformOptions::default()
    }

    /// Set the relative tolerance used to classify off-diagonal terms.
    pub fn relative_epsilon(mut self, relative_epsilon: f64) -> Self {
        self.relative_epsilon = relative_epsilon;
        self
    }

    /// Set the suffix for the names of reordered coordinate systems.
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// A coordinate map conformed to the NIfTI-1 axis conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct ConformedCoordMap {
    /// The new coordinate map
    pub coordmap: CoordinateMap,
    /// New input axis `k` is the original input axis `order[k]`
    pub order: Vec<usize>,
    /// New output axis `k` is the original output axis `output_order[k]`
    pub output_order: Vec<usize>,
    /// Sampling interval of each axis
    pub pixdim: Vec<f64>,
    /// Frequency, phase and slice axes
    pub diminfo: DimInfo,
    /// Time axis
    pub time_axis: Option<usize>,
    /// Whether off-diagonal terms were discarded
    pub lossy: bool,
    /// Everything worth a warning
    pub diagnostics: Diagnostics,
}

impl ConformedCoordMap {
    /// Reject the result if anything had to be adjusted.
    ///
    /// # Errors
    ///
    /// - `NiftiError::NotConformant` with the diagnostics, if any.
    pub fn strict(self) -> Result<Self> {
        if self.diagnostics.is_empty() {
            Ok(self)
        } else {
            Err(NiftiError::NotConformant(self.diagnostics))
        }
    }
}

/// Conform a coordinate map for writing to a NIfTI-1 file, using the
/// default options.
///
/// # Errors
///
/// - `NiftiError::AxisMismatch` or `NiftiError::DimensionMismatch` if the
///   input axes cannot be matched to the output axes.
///
/// # Example
///
/// ```
/// use nifti_coords::{coordmap_for_io, Axis, CoordinateMap, CoordinateSystem};
/// # use nifti_coords::Result;
///
/// # fn run() -> Result<()> {
/// let input = CoordinateSystem::new("input", vec![
///     Axis::voxel("i", 2), Axis::voxel("l", 5), Axis::voxel("j", 3), Axis::voxel("k", 4),
/// ])?;
/// let output = CoordinateSystem::new("output", vec![
///     Axis::regular("x", 1.), Axis::regular("y", 2.), Axis::regular("z", 3.), Axis::regular("t", 4.),
/// ])?;
/// let cmap = CoordinateMap::from_start_step(input, output)?;
///
/// let conformed = coordmap_for_io(&cmap)?;
/// assert_eq!(conformed.order, vec![0, 2, 3, 1]);
/// assert_eq!(conformed.coordmap.input().name(), "input-reordered");
/// assert_eq!(conformed.coordmap.shape(), Some(vec![2, 3, 4, 5]));
/// assert!(!conformed.diagnostics.is_empty());
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
pub fn coordmap_for_io(cmap: &CoordinateMap) -> Result<ConformedCoordMap> {
    coordmap_for_io_with(cmap, &ConformOptions::default())
}

/// Conform a coordinate map for writing to a NIfTI-1 file.
///
/// See [`coordmap_for_io`](./fn.coordmap_for_io.html).
pub fn coordmap_for_io_with(
    cmap: &CoordinateMap,
    options: &ConformOptions,
) -> Result<ConformedCoordMap> {
    let m = match_axes(cmap)?;
    let output_reordered = m.output_reordered();

    let affine = if output_reordered {
        affine::permute_output(cmap.affine(), &m.output_order)
    } else {
        cmap.affine().clone()
    };
    let class = affine::classify(&affine, &m.order, m.spatial, options.relative_epsilon);

    let input = reorder_system(cmap.input(), &m.order, m.renamed, &options.suffix);
    let output = reorder_system(cmap.output(), &m.output_order, output_reordered, &options.suffix);

    let pixdim = affine::pixdim(&class.adjusted, class.spatial);
    let (diminfo, time_axis) = derive_roles(&output.axis_names());

    let mut diagnostics = Diagnostics::new();
    if m.renamed {
        diagnostics.push(Diagnostic::InputReordered {
            from: names(cmap.input()),
            to: names(&input),
        });
    }
    if !class.negative_steps.is_empty() {
        diagnostics.push(Diagnostic::NegativePixdim {
            names: class
                .negative_steps
                .iter()
                .map(|&k| input.axes()[k].name.clone())
                .collect(),
            positions: class.negative_steps.clone(),
        });
    }
    if class.lossy {
        diagnostics.push(Diagnostic::InformationLoss {
            axes: class
                .coupled
                .iter()
                .map(|&(r, c)| (input.axes()[c].name.clone(), output.axes()[r].name.clone()))
                .collect(),
            entries: class.coupled.clone(),
        });
    }
    if output_reordered {
        diagnostics.push(Diagnostic::OutputReordered {
            from: names(cmap.output()),
            to: names(&output),
        });
    }
    for d in &diagnostics {
        warn!("{}", d);
    }

    Ok(ConformedCoordMap {
        coordmap: CoordinateMap::from_parts(input, output, class.adjusted, cmap.pairings().clone()),
        order: m.order,
        output_order: m.output_order,
        pixdim,
        diminfo,
        time_axis,
        lossy: class.lossy,
        diagnostics,
    })
}

/// Coerce a coordinate map into one that follows the NIfTI-1 axis
/// conventions, accepting reordered and lossy outcomes.
///
/// The result carries the same permutation, `pixdim`, `dim_info` and
/// diagnostics as [`coordmap_for_io`](./fn.coordmap_for_io.html). Use
/// [`validate_coordmap`](./fn.validate_coordmap.html) to refuse any
/// adjustment instead.
///
/// # Errors
///
/// Fails under the same conditions as `coordmap_for_io`.
pub fn coerce_coordmap(cmap: &CoordinateMap) -> Result<ConformedCoordMap> {
    coordmap_for_io(cmap)
}

/// Check that a coordinate map can be written without any adjustment.
///
/// # Errors
///
/// - `NiftiError::NotConformant` if reordering or discarding information
///   would be necessary, or if some step is negative.
/// - Any error of [`coordmap_for_io`](./fn.coordmap_for_io.html).
pub fn validate_coordmap(cmap: &CoordinateMap) -> Result<()> {
    let _ = coordmap_for_io(cmap)?.strict()?;
    Ok(())
}

fn reorder_system(
    system: &CoordinateSystem,
    order: &[usize],
    reordered: bool,
    suffix: &str,
) -> CoordinateSystem {
    if reordered {
        system.reordered(format!("{}{}", system.name(), suffix), order)
    } else {
        system.clone()
    }
}

fn names(system: &CoordinateSystem) -> Vec<String> {
    system.axes().iter().map(|a| a.name.clone()).collect()
}
