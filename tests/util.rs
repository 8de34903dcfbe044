#![allow(dead_code)]

use nalgebra::DMatrix;
use nifti_coords::{Axis, CoordinateMap, CoordinateSystem, VoxelAxis, WorldAxis};

/// Voxel axes named after the canonical alphabet, where the axis at
/// canonical position `p` has length `p + 1`.
pub fn voxel_system(names: &[&str]) -> CoordinateSystem {
    let axes = names
        .iter()
        .map(|n| {
            let length = VoxelAxis::from_name(n).map(|v| v.index() + 1).unwrap_or(1);
            Axis::voxel(*n, length)
        })
        .collect();
    CoordinateSystem::new("input", axes).unwrap()
}

/// World axes named after the canonical alphabet, where the axis at
/// canonical position `p` has step `sign * (p + 1)`.
pub fn world_system(names: &[&str], sign: f64) -> CoordinateSystem {
    let axes = names
        .iter()
        .map(|n| {
            let step = WorldAxis::from_name(n).map(|w| w.index() + 1).unwrap() as f64;
            Axis::regular(*n, sign * step)
        })
        .collect();
    CoordinateSystem::new("output", axes).unwrap()
}

/// A map whose affine is the diagonal of the output steps, regardless of
/// the input axis names.
pub fn start_step_map(input: &[&str], output: &[&str]) -> CoordinateMap {
    signed_start_step_map(input, output, 1.)
}

/// Same as `start_step_map`, with every output step multiplied by `sign`.
pub fn signed_start_step_map(input: &[&str], output: &[&str], sign: f64) -> CoordinateMap {
    CoordinateMap::from_start_step(voxel_system(input), world_system(output, sign)).unwrap()
}

/// A map whose affine sends each input axis to the output axis of the
/// corresponding name, scaled by that output axis' step.
pub fn aligned_map(input: &[&str], output: &[&str], sign: f64) -> CoordinateMap {
    let input = voxel_system(input);
    let output = world_system(output, sign);
    let n = input.ndim();
    let mut affine = DMatrix::zeros(n + 1, n + 1);
    for (c, axis) in input.axes().iter().enumerate() {
        let world = VoxelAxis::from_name(&axis.name).unwrap().world();
        let r = output.index_of(world.name()).unwrap();
        affine[(r, c)] = output.axes()[r].step;
    }
    affine[(n, n)] = 1.;
    CoordinateMap::new(input, output, affine).unwrap()
}

/// Rearrange `x` so that position `k` holds `x[order[k]]`.
pub fn permute(x: &[f64], order: &[usize]) -> Vec<f64> {
    order.iter().map(|&o| x[o]).collect()
}

/// All permutations of `0..n`, in lexicographic order.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn go(current: &mut Vec<usize>, used: &mut Vec<bool>, out: &mut Vec<Vec<usize>>) {
        if current.len() == used.len() {
            out.push(current.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                current.push(i);
                go(current, used, out);
                let _ = current.pop();
                used[i] = false;
            }
        }
    }
    let mut out = Vec::new();
    go(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}

/// Sample points used to compare two coordinate maps.
pub fn sample_points(n: usize) -> Vec<Vec<f64>> {
    vec![
        (0..n).map(|i| i as f64).collect(),
        (0..n).map(|i| 0.5 - 1.25 * i as f64).collect(),
        (0..n).map(|i| ((i * 7) % 5) as f64 - 2.).collect(),
    ]
}
