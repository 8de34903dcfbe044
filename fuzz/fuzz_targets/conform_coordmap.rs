#![no_main]
use libfuzzer_sys::fuzz_target;
use nalgebra::DMatrix;
use nifti_coords::{coordmap_for_io, Axis, CoordinateMap, CoordinateSystem, DiagnosticKind};

const INPUT_NAMES: [&str; 9] = ["i", "j", "k", "l", "m", "n", "o", "a", "b"];
const OUTPUT_NAMES: [&str; 7] = ["x", "y", "z", "t", "u", "v", "w"];

fuzz_target!(|data: &[u8]| {
    let (&first, rest) = match data.split_first() {
        Some(split) => split,
        None => return,
    };
    let n = 1 + usize::from(first) % 7;
    if rest.len() < 2 * n + n * n {
        return;
    }
    let (names, values) = rest.split_at(2 * n);

    let input = names[..n]
        .iter()
        .map(|b| Axis::voxel(INPUT_NAMES[usize::from(*b) % INPUT_NAMES.len()], 2))
        .collect();
    let output = names[n..]
        .iter()
        .map(|b| Axis::regular(OUTPUT_NAMES[usize::from(*b) % n], 1.))
        .collect();
    let (input, output) = match (
        CoordinateSystem::new("input", input),
        CoordinateSystem::new("output", output),
    ) {
        (Ok(i), Ok(o)) => (i, o),
        _ => return,
    };

    let mut affine = DMatrix::zeros(n + 1, n + 1);
    for (k, v) in values[..n * n].iter().enumerate() {
        affine[(k / n, k % n)] = f64::from(*v as i8) / 4.;
    }
    affine[(n, n)] = 1.;
    let cmap = match CoordinateMap::new(input, output, affine) {
        Ok(cmap) => cmap,
        Err(_) => return,
    };

    if let Ok(conformed) = coordmap_for_io(&cmap) {
        let mut sorted = conformed.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        assert!(conformed.pixdim.iter().all(|p| p.is_finite() && *p >= 0.));
        assert_eq!(
            conformed.lossy,
            conformed.diagnostics.contains(DiagnosticKind::InformationLoss)
        );
        assert!(conformed.diminfo.to_byte().is_ok());
    }
});
