//! Types for error handling go here.
use crate::diagnostics::Diagnostics;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum NiftiError {
        /// The input axes do not cover the axes required by the output
        /// coordinate system, so no axis correspondence could be made.
        AxisMismatch(missing: Vec<String>, unmatched: Vec<String>) {
            display("Could not match axes: missing input axes {:?}, unmatched axes {:?}", missing, unmatched)
        }
        /// The input and output coordinate systems have a different
        /// number of axes.
        DimensionMismatch(input: usize, output: usize) {
            display("Input has {} axes but output has {} axes", input, output)
        }
        /// Two axes in the same coordinate system share a name.
        DuplicateAxisName(name: String) {
            display("Duplicate axis name `{}` in coordinate system", name)
        }
        /// An axis name was not found in its coordinate system.
        UnknownAxis(name: String) {
            display("Unknown axis `{}`", name)
        }
        /// The affine matrix does not have the shape implied by the
        /// coordinate systems, `(n_out + 1) x (n_in + 1)`.
        AffineShape(expected: (usize, usize), got: (usize, usize)) {
            display("Expected affine of shape {:?}, got {:?}", expected, got)
        }
        /// The affine matrix holds an infinite or NaN entry.
        NonFiniteAffine(row: usize, col: usize) {
            display("Affine entry ({}, {}) is not a finite number", row, col)
        }
        /// The last row of the affine matrix is not `[0, ..., 0, 1]`.
        NotHomogeneous {
            display("Affine matrix is not in homogeneous form")
        }
        /// A coordinate vector of the wrong length was given to the
        /// coordinate map.
        InputLength(expected: usize, got: usize) {
            display("Expected a coordinate of length {}, got {}", expected, got)
        }
        /// The given axis order is not a permutation of the axes.
        InvalidOrder(order: Vec<usize>) {
            display("Invalid axis order {:?}", order)
        }
        /// A `dim_info` axis index can only be 0, 1 or 2.
        DimInfoOutOfRange(index: usize) {
            display("Axis index {} cannot be packed into dim_info", index)
        }
        /// Two roles of a `dim_info` byte point to the same axis.
        InvalidDimInfo(dim_info: u8) {
            display("Invalid dim_info value {:#04x}", dim_info)
        }
        /// The coordinate map can only be written after reordering
        /// or discarding information.
        NotConformant(diagnostics: Diagnostics) {
            display("Coordinate map is not NIfTI conformant: {}", diagnostics)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, NiftiError>;
