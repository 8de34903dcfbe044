//! Analysis of homogeneous affine matrices under axis permutations.
//!
//! NIfTI-1 can only describe a voxel-to-world affine whose non-spatial
//! part is diagonal, with one sampling interval (`pixdim`) per axis. The
//! spatial block may be any 3x3 matrix, since `sform` keeps it whole. This
//! module permutes the columns (input axes) and rows (output axes) of an
//! affine, and checks how far the result is from that form.

use nalgebra::DMatrix;

/// A homogeneous affine matrix of dynamic size.
pub type Affine = DMatrix<f64>;

/// Default relative tolerance: an entry of the linear part of an affine
/// is considered zero when its magnitude is below this value times the
/// Frobenius norm of the linear part.
pub const DEFAULT_RELATIVE_EPSILON: f64 = 256.0 * ::std::f64::EPSILON;

/// Build the homogeneous permutation matrix `P` of the given order, where
/// `P[i, order[i]] = 1` and `P[n, n] = 1`.
///
/// `P * v` rearranges the first `n` entries of `v` so that position `i`
/// holds `v[order[i]]`.
///
/// # Example
///
/// ```
/// # use nifti_coords::affine::permutation_matrix;
/// let p = permutation_matrix(&[1, 0]);
/// assert_eq!(p[(0, 1)], 1.);
/// assert_eq!(p[(1, 0)], 1.);
/// assert_eq!(p[(2, 2)], 1.);
/// assert_eq!(p[(0, 0)], 0.);
/// ```
pub fn permutation_matrix(order: &[usize]) -> Affine {
    let n = order.len();
    let mut p = DMatrix::zeros(n + 1, n + 1);
    for (i, &o) in order.iter().enumerate() {
        p[(i, o)] = 1.;
    }
    p[(n, n)] = 1.;
    p
}

/// Express the affine in terms of reordered input axes, where the new
/// input axis `k` is the old input axis `order[k]`.
///
/// This is `affine * Pᵀ`: column `k` of the result is column `order[k]`
/// of `affine`, so that `result * (P * x) == affine * x`.
pub fn permute_input(affine: &Affine, order: &[usize]) -> Affine {
    debug_assert_eq!(affine.ncols(), order.len() + 1);
    affine * permutation_matrix(order).transpose()
}

/// Express the affine in terms of reordered output axes, where the new
/// output axis `k` is the old output axis `order[k]`.
///
/// This is `P * affine`.
pub fn permute_output(affine: &Affine, order: &[usize]) -> Affine {
    debug_assert_eq!(affine.nrows(), order.len() + 1);
    permutation_matrix(order) * affine
}

/// Absolute tolerance for the entries of the linear part of `affine`.
pub fn tolerance(affine: &Affine, relative_epsilon: f64) -> f64 {
    let (rows, cols) = affine.shape();
    if rows < 2 || cols < 2 {
        return 0.;
    }
    let linear = affine.view((0, 0), (rows - 1, cols - 1));
    linear.norm() * relative_epsilon
}

/// Outcome of classifying an affine under an input axis order.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineClass {
    /// The affine expressed in terms of the reordered input axes
    pub adjusted: Affine,
    /// Number of leading spatial axes, whose block is kept as a whole
    pub spatial: usize,
    /// Whether off-diagonal coupling had to be discarded
    pub lossy: bool,
    /// Positions whose step is negative
    pub negative_steps: Vec<usize>,
    /// `(row, column)` of every off-diagonal entry above the tolerance
    /// outside of the spatial block
    pub coupled: Vec<(usize, usize)>,
}

/// Reorder the input axes of `affine` and inspect the result.
///
/// The first `spatial` rows and columns form the spatial block, which a
/// NIfTI-1 header stores whole (as a rotation and scaling in `sform`), so
/// entries inside it are never coupling. Everywhere else only the diagonal
/// may be nonzero. The translation column and the homogeneous row are never
/// considered coupling.
///
/// A spatial axis has a negative step when the largest entry of its column
/// within the spatial block is negative. Any other axis has a negative step
/// when its diagonal entry is negative.
pub fn classify(
    affine: &Affine,
    order: &[usize],
    spatial: usize,
    relative_epsilon: f64,
) -> AffineClass {
    let adjusted = permute_input(affine, order);
    let tol = tolerance(&adjusted, relative_epsilon);
    let rows = adjusted.nrows() - 1;
    let cols = adjusted.ncols() - 1;
    let spatial = spatial.min(rows).min(cols);

    let mut coupled = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let in_block = r < spatial && c < spatial;
            if r != c && !in_block && adjusted[(r, c)].abs() > tol {
                coupled.push((r, c));
            }
        }
    }
    let negative_steps = (0..rows.min(cols))
        .filter(|&k| step_sign_entry(&adjusted, k, spatial) < -tol)
        .collect();

    AffineClass {
        lossy: !coupled.is_empty(),
        adjusted,
        spatial,
        negative_steps,
        coupled,
    }
}

fn step_sign_entry(adjusted: &Affine, k: usize, spatial: usize) -> f64 {
    if k < spatial {
        (0..spatial)
            .map(|r| adjusted[(r, k)])
            .fold(0., |best: f64, v| if v.abs() > best.abs() { v } else { best })
    } else {
        adjusted[(k, k)]
    }
}

/// Per-axis sampling intervals.
///
/// For the first `spatial` axes this is the length of the axis' column
/// within the spatial block, so that permuted or rotated spatial axes keep
/// their step. For the remaining axes it is the absolute value of the
/// diagonal entry; off-diagonal entries are ignored.
pub fn pixdim(adjusted: &Affine, spatial: usize) -> Vec<f64> {
    let n = adjusted.nrows().min(adjusted.ncols()).saturating_sub(1);
    let spatial = spatial.min(n);
    (0..n)
        .map(|k| {
            if k < spatial {
                adjusted.view((0, k), (spatial, 1)).norm()
            } else {
                adjusted[(k, k)].abs()
            }
        })
        .collect()
}
