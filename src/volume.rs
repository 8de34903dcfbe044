//! Integration with `ndarray`, for rearranging voxel data so that it
//! follows a conformed coordinate map.
//!
//! After [`coordmap_for_io`] reorders the input axes of a coordinate map,
//! the voxel array described by the original map must be transposed in
//! the same way before it is written. No data is moved: only the shape
//! and strides of the array change.
//!
//! [`coordmap_for_io`]: ../conform/fn.coordmap_for_io.html
use crate::error::{NiftiError, Result};
use crate::util::is_permutation;
use ndarray::{ArrayBase, Dimension, IxDyn, RawData};

/// Transpose a voxel array so that its axis `k` is the original axis
/// `order[k]`.
///
/// # Errors
///
/// - `NiftiError::InvalidOrder` if `order` is not a permutation of the
///   array's axes.
///
/// # Example
///
/// ```
/// # use nifti_coords::volume::reorder_volume;
/// use ndarray::Array;
/// let volume = Array::<f32, _>::zeros((2, 5, 3, 4));
/// let reordered = reorder_volume(volume, &[0, 2, 3, 1])?;
/// assert_eq!(reordered.shape(), &[2, 3, 4, 5]);
/// # Ok::<(), nifti_coords::NiftiError>(())
/// ```
pub fn reorder_volume<S, D>(array: ArrayBase<S, D>, order: &[usize]) -> Result<ArrayBase<S, IxDyn>>
where
    S: RawData,
    D: Dimension,
{
    if !is_permutation(order, array.ndim()) {
        return Err(NiftiError::InvalidOrder(order.to_vec()));
    }
    Ok(array.into_dyn().permuted_axes(IxDyn(order)))
}
