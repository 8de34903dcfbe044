//! Matching of input (voxel) axes against the canonical order of the
//! output (world) axes.
//!
//! The output axes are first sorted in canonical order (`x`, `y`, `z`,
//! `t`, `u`, `v`, `w`). Each output axis is then matched to an input
//! axis, either through a pairing declared on the coordinate map or
//! through the fixed correspondence of names (`x` with `i`, `y` with `j`,
//! and so on). Input axes with names outside of the voxel alphabet may
//! stand for any output axis which no other input axis claims; these are
//! resolved by a bounded search which prefers the assignment most
//! aligned with the affine.

use crate::coordmap::CoordinateMap;
use crate::error::{NiftiError, Result};
use crate::typedef::{VoxelAxis, WorldAxis};
use crate::util::{is_identity, is_permutation};

/// The outcome of matching the axes of a coordinate map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMatch {
    /// New output axis `k` is the declared output axis `output_order[k]`
    pub output_order: Vec<usize>,
    /// New input axis `k` is the declared input axis `order[k]`
    pub order: Vec<usize>,
    /// Whether the input axes had to be reordered
    pub renamed: bool,
    /// Number of spatial axes, which come first in canonical order
    pub spatial: usize,
}

impl AxisMatch {
    /// Whether the output axes had to be reordered.
    pub fn output_reordered(&self) -> bool {
        !is_identity(&self.output_order)
    }
}

/// What an input axis may be matched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// A single output axis, by pairing or by name
    Definite(WorldAxis),
    /// Any output axis not claimed by another input axis
    Any,
}

fn resolve_target(cmap: &CoordinateMap, name: &str) -> Target {
    if let Some(w) = cmap
        .pairings()
        .get(name)
        .and_then(|out| WorldAxis::from_name(out))
    {
        return Target::Definite(w);
    }
    match VoxelAxis::from_name(name) {
        Some(v) => Target::Definite(v.world()),
        None => Target::Any,
    }
}

/// The order in which the output axes must be placed to follow the
/// canonical world axis order.
///
/// # Errors
///
/// - `NiftiError::AxisMismatch` if an output axis is not a canonical
///   world axis.
pub fn canonical_output_order(cmap: &CoordinateMap) -> Result<Vec<usize>> {
    let worlds = cmap
        .output()
        .world_axes()
        .map_err(|unknown| NiftiError::AxisMismatch(Vec::new(), unknown))?;
    let mut order: Vec<usize> = (0..worlds.len()).collect();
    order.sort_by_key(|&i| worlds[i]);
    Ok(order)
}

/// Find the permutation of input axes which aligns them with the
/// canonical output order.
///
/// # Errors
///
/// - `NiftiError::DimensionMismatch` if the number of input and output
///   axes differ.
/// - `NiftiError::AxisMismatch` if some output axis cannot be matched to
///   exactly one input axis. The error names the input axes that were
///   expected but missing, and the input axes left unmatched.
pub fn match_axes(cmap: &CoordinateMap) -> Result<AxisMatch> {
    let (n_in, n_out) = cmap.ndim();
    if n_in != n_out {
        return Err(NiftiError::DimensionMismatch(n_in, n_out));
    }

    let output_order = canonical_output_order(cmap)?;
    let output_axes = cmap.output().axes();
    let worlds: Vec<WorldAxis> = output_order
        .iter()
        .filter_map(|&i| WorldAxis::from_name(&output_axes[i].name))
        .collect();

    let input_names = cmap.input().axis_names();
    let targets: Vec<Target> = input_names
        .iter()
        .map(|name| resolve_target(cmap, name))
        .collect();

    let wildcards: Vec<usize> = (0..n_in).filter(|&i| targets[i] == Target::Any).collect();
    let candidates: Vec<Vec<usize>> = worlds
        .iter()
        .map(|w| {
            let claimed: Vec<usize> = (0..n_in)
                .filter(|&i| targets[i] == Target::Definite(*w))
                .collect();
            if claimed.is_empty() {
                wildcards.clone()
            } else {
                claimed
            }
        })
        .collect();

    let direct: Option<Vec<usize>> = if candidates.iter().all(|c| c.len() == 1) {
        Some(candidates.iter().map(|c| c[0]).collect())
    } else {
        None
    };
    let order = match direct {
        Some(order) if is_permutation(&order, n_in) => Some(order),
        _ => {
            debug!(
                "ambiguous axis names {:?}, searching candidates {:?}",
                input_names, candidates
            );
            let affine = cmap.affine();
            search(&candidates, |k, col| affine[(output_order[k], col)].abs())
        }
    };

    let order = match order {
        Some(order) => order,
        None => return Err(mismatch(&input_names, &targets, &worlds)),
    };

    debug!(
        "matched input axes {:?} to output axes {:?} with order {:?}",
        input_names,
        worlds.iter().map(|w| w.name()).collect::<Vec<_>>(),
        order
    );

    Ok(AxisMatch {
        renamed: !is_identity(&order),
        spatial: worlds.iter().filter(|w| w.is_spatial()).count(),
        output_order,
        order,
    })
}

/// Bounded backtracking over candidate input axes for each output
/// position, keeping the bijection with the highest total score.
fn search<F>(candidates: &[Vec<usize>], score: F) -> Option<Vec<usize>>
where
    F: Fn(usize, usize) -> f64,
{
    struct State<'a, F> {
        candidates: &'a [Vec<usize>],
        score: F,
        used: Vec<bool>,
        current: Vec<usize>,
        best: Option<(f64, Vec<usize>)>,
    }

    fn visit<F: Fn(usize, usize) -> f64>(state: &mut State<F>, k: usize, total: f64) {
        if k == state.candidates.len() {
            let better = match &state.best {
                Some((best, _)) => total > *best,
                None => true,
            };
            if better {
                state.best = Some((total, state.current.clone()));
            }
            return;
        }
        let candidates = state.candidates;
        for &c in &candidates[k] {
            if state.used[c] {
                continue;
            }
            state.used[c] = true;
            state.current.push(c);
            let s = (state.score)(k, c);
            visit(state, k + 1, total + s);
            let _ = state.current.pop();
            state.used[c] = false;
        }
    }

    let n = candidates.len();
    let mut state = State {
        candidates,
        score,
        used: vec![false; n],
        current: Vec::with_capacity(n),
        best: None,
    };
    visit(&mut state, 0, 0.);
    state.best.map(|(_, order)| order)
}

/// Report the output axes that no input axis claims by name or pairing,
/// and the input axes that could not be placed.
fn mismatch(input_names: &[&str], targets: &[Target], worlds: &[WorldAxis]) -> NiftiError {
    let missing: Vec<String> = worlds
        .iter()
        .filter(|w| !targets.contains(&Target::Definite(**w)))
        .map(|w| w.voxel().name().to_string())
        .collect();

    let mut claimed = vec![false; worlds.len()];
    let mut unmatched = Vec::new();
    for (name, target) in input_names.iter().zip(targets) {
        let slot = match target {
            Target::Definite(w) => worlds.iter().position(|x| x == w),
            Target::Any => None,
        };
        match slot {
            Some(s) if !claimed[s] => claimed[s] = true,
            _ => unmatched.push(name.to_string()),
        }
    }
    NiftiError::AxisMismatch(missing, unmatched)
}
