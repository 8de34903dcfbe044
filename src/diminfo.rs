//! Acquisition roles of voxel axes.
//!
//! The NIfTI-1 `dim_info` field records which of the first three voxel
//! axes were the frequency encoding, phase encoding and slice directions.
//! Each index occupies two bits, stored as `index + 1` so that 0 means
//! "undefined":
//!
//! ```text
//! bits 0-1: frequency
//! bits 2-3: phase
//! bits 4-5: slice
//! ```
//!
//! By convention the voxel axis matched to `x` is the frequency axis, `y`
//! the phase axis and `z` the slice axis. The axis matched to `t` is the
//! time axis, which is reported alongside but is not part of `dim_info`.

use crate::coordmap::CoordinateMap;
use crate::error::{NiftiError, Result};
use crate::matcher::match_axes;
use crate::typedef::{AxisRole, VoxelAxis, WorldAxis};

/// Frequency, phase and slice axis indices. `None` marks an undefined role.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimInfo {
    /// Frequency encoding axis
    pub freq: Option<usize>,
    /// Phase encoding axis
    pub phase: Option<usize>,
    /// Slice axis
    pub slice: Option<usize>,
}

impl DimInfo {
    /// Create a new record from the three axis indices.
    pub fn new(freq: Option<usize>, phase: Option<usize>, slice: Option<usize>) -> Self {
        DimInfo { freq, phase, slice }
    }

    /// A record where no role is defined.
    pub fn undefined() -> Self {
        DimInfo::default()
    }

    /// The axis index of the given role. Always `None` for `AxisRole::Time`.
    pub fn get(&self, role: AxisRole) -> Option<usize> {
        match role {
            AxisRole::Frequency => self.freq,
            AxisRole::Phase => self.phase,
            AxisRole::Slice => self.slice,
            AxisRole::Time => None,
        }
    }

    /// Pack this record into a `dim_info` byte.
    ///
    /// # Errors
    ///
    /// - `NiftiError::DimInfoOutOfRange` if a defined index is greater
    ///   than 2.
    ///
    /// # Example
    ///
    /// ```
    /// # use nifti_coords::DimInfo;
    /// let info = DimInfo::new(Some(0), Some(1), Some(2));
    /// assert_eq!(info.to_byte()?, 0b11_10_01);
    /// assert_eq!(DimInfo::undefined().to_byte()?, 0);
    /// # Ok::<(), nifti_coords::NiftiError>(())
    /// ```
    pub fn to_byte(&self) -> Result<u8> {
        let pack = |index: Option<usize>, shift: u8| -> Result<u8> {
            match index {
                None => Ok(0),
                Some(i) if i <= 2 => Ok(((i + 1) as u8) << shift),
                Some(i) => Err(NiftiError::DimInfoOutOfRange(i)),
            }
        };
        Ok(pack(self.freq, 0)? | pack(self.phase, 2)? | pack(self.slice, 4)?)
    }

    /// Unpack a `dim_info` byte. The two most significant bits are ignored.
    pub fn from_byte(dim_info: u8) -> Self {
        let unpack = |shift: u8| match (dim_info >> shift) & 0b11 {
            0 => None,
            v => Some(usize::from(v) - 1),
        };
        DimInfo {
            freq: unpack(0),
            phase: unpack(2),
            slice: unpack(4),
        }
    }
}

/// Derive the acquisition roles from the output axis names of a conformed
/// map. After conforming, the output axes are in canonical order and the
/// reordered input axis `k` is matched to output axis `k`, so a position
/// among the output names is also the position of the voxel axis.
///
/// Returns the `dim_info` record and the time axis, if any.
///
/// # Example
///
/// ```
/// # use nifti_coords::{derive_roles, DimInfo};
/// let (info, time) = derive_roles(&["x", "y", "t"]);
/// assert_eq!(info, DimInfo::new(Some(0), Some(1), None));
/// assert_eq!(time, Some(2));
/// ```
pub fn derive_roles(output_names: &[&str]) -> (DimInfo, Option<usize>) {
    let position = |role: AxisRole| {
        let name = role.world().name();
        output_names.iter().position(|n| *n == name)
    };
    (
        DimInfo {
            freq: position(AxisRole::Frequency),
            phase: position(AxisRole::Phase),
            slice: position(AxisRole::Slice),
        },
        position(AxisRole::Time),
    )
}

/// Find the input axis, in the map's current input order, that plays the
/// given role.
///
/// # Errors
///
/// Fails with the same conditions as [`match_axes`].
///
/// [`match_axes`]: ../matcher/fn.match_axes.html
pub fn role_axis(cmap: &CoordinateMap, role: AxisRole) -> Result<Option<usize>> {
    let m = match_axes(cmap)?;
    let output_axes = cmap.output().axes();
    let target = role.world();
    Ok(m.output_order
        .iter()
        .position(|&i| WorldAxis::from_name(&output_axes[i].name) == Some(target))
        .map(|k| m.order[k]))
}

/// The input axis playing the frequency encoding role.
pub fn freq_axis(cmap: &CoordinateMap) -> Result<Option<usize>> {
    role_axis(cmap, AxisRole::Frequency)
}

/// The input axis playing the phase encoding role.
pub fn phase_axis(cmap: &CoordinateMap) -> Result<Option<usize>> {
    role_axis(cmap, AxisRole::Phase)
}

/// The input axis playing the slice role.
pub fn slice_axis(cmap: &CoordinateMap) -> Result<Option<usize>> {
    role_axis(cmap, AxisRole::Slice)
}

/// The input axis playing the time role.
pub fn time_axis(cmap: &CoordinateMap) -> Result<Option<usize>> {
    role_axis(cmap, AxisRole::Time)
}

/// Names of the first three voxel axes implied by a `dim_info` byte.
///
/// The frequency axis is named `i`, the phase axis `j` and the slice axis
/// `k`. Axes without a role take the remaining names in order.
///
/// # Errors
///
/// - `NiftiError::InvalidDimInfo` if two roles share the same axis.
///
/// # Example
///
/// ```
/// # use nifti_coords::{ijk_from_diminfo, DimInfo};
/// assert_eq!(ijk_from_diminfo(0)?, ["i", "j", "k"]);
/// let freq_last = DimInfo::new(Some(2), None, None).to_byte()?;
/// assert_eq!(ijk_from_diminfo(freq_last)?, ["j", "k", "i"]);
/// # Ok::<(), nifti_coords::NiftiError>(())
/// ```
pub fn ijk_from_diminfo(dim_info: u8) -> Result<[&'static str; 3]> {
    let info = DimInfo::from_byte(dim_info);
    let mut names: [Option<&'static str>; 3] = [None; 3];
    let roles = [AxisRole::Frequency, AxisRole::Phase, AxisRole::Slice];
    for role in &roles {
        if let Some(i) = info.get(*role) {
            if names[i].is_some() {
                return Err(NiftiError::InvalidDimInfo(dim_info));
            }
            names[i] = Some(role.world().voxel().name());
        }
    }

    let spatial = [VoxelAxis::I, VoxelAxis::J, VoxelAxis::K];
    let mut remaining = spatial
        .iter()
        .map(|v| v.name())
        .filter(|n| !names.contains(&Some(*n)));
    let mut out = [""; 3];
    for (slot, name) in out.iter_mut().zip(names.iter()) {
        *slot = match name {
            Some(n) => *n,
            None => remaining.next().ok_or(NiftiError::InvalidDimInfo(dim_info))?,
        };
    }
    Ok(out)
}
