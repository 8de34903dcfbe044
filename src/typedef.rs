//! This module contains the canonical axis names accepted by the NIfTI-1
//! format, along with the acquisition roles that some of these axes play.
//!
//! NIfTI-1 supports at most 7 dimensions. World (output) axes are named
//! `x`, `y`, `z`, `t`, `u`, `v`, `w`, and voxel (input) axes are named
//! `i`, `j`, `k`, `l`, `m`, `n`, `o`, in this order. A voxel axis
//! corresponds to the world axis at the same position in its alphabet.

use num_traits::FromPrimitive;

/// Maximum number of axes of a NIfTI-1 volume.
pub const MAX_AXES: usize = 7;

/// A canonical world (output) axis name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive)]
pub enum WorldAxis {
    /// First spatial axis.
    X = 0,
    /// Second spatial axis.
    Y = 1,
    /// Third spatial axis.
    Z = 2,
    /// Temporal axis.
    T = 3,
    /// First extended axis.
    U = 4,
    /// Second extended axis.
    V = 5,
    /// Third extended axis.
    W = 6,
}

/// A canonical voxel (input) axis name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive)]
pub enum VoxelAxis {
    /// Voxel axis matching `x`.
    I = 0,
    /// Voxel axis matching `y`.
    J = 1,
    /// Voxel axis matching `z`.
    K = 2,
    /// Voxel axis matching `t`.
    L = 3,
    /// Voxel axis matching `u`.
    M = 4,
    /// Voxel axis matching `v`.
    N = 5,
    /// Voxel axis matching `w`.
    O = 6,
}

const WORLD_NAMES: [&str; MAX_AXES] = ["x", "y", "z", "t", "u", "v", "w"];
const VOXEL_NAMES: [&str; MAX_AXES] = ["i", "j", "k", "l", "m", "n", "o"];

impl WorldAxis {
    /// Resolve a world axis from its name token.
    ///
    /// # Example
    ///
    /// ```
    /// # use nifti_coords::WorldAxis;
    /// assert_eq!(WorldAxis::from_name("t"), Some(WorldAxis::T));
    /// assert_eq!(WorldAxis::from_name("i"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        WORLD_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(Self::from_index)
    }

    /// Retrieve the world axis at the given position of the canonical order.
    pub fn from_index(index: usize) -> Option<Self> {
        FromPrimitive::from_usize(index)
    }

    /// Position of this axis in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The name token of this axis.
    pub fn name(self) -> &'static str {
        WORLD_NAMES[self.index()]
    }

    /// The voxel axis which corresponds to this world axis.
    pub fn voxel(self) -> VoxelAxis {
        match self {
            WorldAxis::X => VoxelAxis::I,
            WorldAxis::Y => VoxelAxis::J,
            WorldAxis::Z => VoxelAxis::K,
            WorldAxis::T => VoxelAxis::L,
            WorldAxis::U => VoxelAxis::M,
            WorldAxis::V => VoxelAxis::N,
            WorldAxis::W => VoxelAxis::O,
        }
    }

    /// The acquisition role implied by this axis, if any.
    pub fn role(self) -> Option<AxisRole> {
        match self {
            WorldAxis::X => Some(AxisRole::Frequency),
            WorldAxis::Y => Some(AxisRole::Phase),
            WorldAxis::Z => Some(AxisRole::Slice),
            WorldAxis::T => Some(AxisRole::Time),
            _ => None,
        }
    }

    /// Whether this is one of the three spatial axes.
    pub fn is_spatial(self) -> bool {
        self.index() < 3
    }
}

impl VoxelAxis {
    /// Resolve a voxel axis from its name token.
    pub fn from_name(name: &str) -> Option<Self> {
        VOXEL_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(Self::from_index)
    }

    /// Retrieve the voxel axis at the given position of the canonical order.
    pub fn from_index(index: usize) -> Option<Self> {
        FromPrimitive::from_usize(index)
    }

    /// Position of this axis in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The name token of this axis.
    pub fn name(self) -> &'static str {
        VOXEL_NAMES[self.index()]
    }

    /// The world axis which corresponds to this voxel axis.
    pub fn world(self) -> WorldAxis {
        match self {
            VoxelAxis::I => WorldAxis::X,
            VoxelAxis::J => WorldAxis::Y,
            VoxelAxis::K => WorldAxis::Z,
            VoxelAxis::L => WorldAxis::T,
            VoxelAxis::M => WorldAxis::U,
            VoxelAxis::N => WorldAxis::V,
            VoxelAxis::O => WorldAxis::W,
        }
    }
}

/// The role played by a voxel axis during acquisition, as described by the
/// `dim_info` field (frequency, phase, slice) and the time dimension.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum AxisRole {
    /// Frequency encoding direction.
    Frequency,
    /// Phase encoding direction.
    Phase,
    /// Slice direction.
    Slice,
    /// Time.
    Time,
}

impl AxisRole {
    /// The world axis that carries this role.
    pub fn world(self) -> WorldAxis {
        match self {
            AxisRole::Frequency => WorldAxis::X,
            AxisRole::Phase => WorldAxis::Y,
            AxisRole::Slice => WorldAxis::Z,
            AxisRole::Time => WorldAxis::T,
        }
    }
}
