extern crate nifti_coords;
#[macro_use]
extern crate approx;
#[macro_use]
extern crate pretty_assertions;

use nifti_coords::affine::{permute_input, permute_output};
use nifti_coords::{
    coerce_coordmap, coordmap_for_io, validate_coordmap, Diagnostic, DiagnosticKind, DimInfo,
    NiftiError,
};

mod util;

use util::{
    aligned_map, permute, permutations, sample_points, signed_start_step_map, start_step_map,
};

#[test]
fn aligned_axes_need_no_change() {
    let cmap = start_step_map(&["i", "j", "k", "l"], &["x", "y", "z", "t"]);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.coordmap.input().name(), "input");
    assert_eq!(conformed.coordmap.output().name(), "output");
    assert_eq!(conformed.order, vec![0, 1, 2, 3]);
    assert_eq!(conformed.pixdim, vec![1., 2., 3., 4.]);
    assert_eq!(conformed.diminfo, DimInfo::new(Some(0), Some(1), Some(2)));
    assert_eq!(conformed.time_axis, Some(3));
    assert!(!conformed.lossy);
    assert!(conformed.diagnostics.is_empty());
    assert_eq!(conformed.coordmap.affine(), cmap.affine());
    validate_coordmap(&cmap).unwrap();
}

#[test]
fn three_dimensional_map_has_no_time_axis() {
    let cmap = start_step_map(&["i", "j", "k"], &["x", "y", "z"]);
    let conformed = coordmap_for_io(&cmap).unwrap();
    assert_eq!(conformed.order, vec![0, 1, 2]);
    assert_eq!(conformed.pixdim, vec![1., 2., 3.]);
    assert_eq!(conformed.time_axis, None);
    assert!(conformed.diagnostics.is_empty());
}

#[test]
fn rotated_spatial_axes_are_reordered_without_loss() {
    // input axes stored as (k, i, j, l), with an affine consistent with these names
    let cmap = aligned_map(&["k", "i", "j", "l"], &["x", "y", "z", "t"], 1.);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.order, vec![1, 2, 0, 3]);
    assert_eq!(conformed.coordmap.input().name(), "input-reordered");
    assert_eq!(conformed.coordmap.output().name(), "output");
    assert_eq!(
        conformed.coordmap.input().axis_names(),
        vec!["i", "j", "k", "l"]
    );
    assert_eq!(conformed.pixdim, vec![1., 2., 3., 4.]);
    assert!(!conformed.lossy);
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered]
    );
    assert_eq!(
        conformed.diagnostics.find(DiagnosticKind::InputReordered),
        Some(&Diagnostic::InputReordered {
            from: vec!["k".into(), "i".into(), "j".into(), "l".into()],
            to: vec!["i".into(), "j".into(), "k".into(), "l".into()],
        })
    );
    assert!(matches!(
        validate_coordmap(&cmap),
        Err(NiftiError::NotConformant(_))
    ));
}

#[test]
fn time_axis_out_of_place() {
    let cmap = start_step_map(&["i", "l", "j", "k"], &["x", "y", "z", "t"]);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.coordmap.input().name(), "input-reordered");
    assert_eq!(conformed.order, vec![0, 2, 3, 1]);
    assert_eq!(conformed.coordmap.shape(), Some(vec![1, 2, 3, 4]));
    // the declared affine couples `l` with `y` and `k` with `t`, which
    // cannot be kept
    assert!(conformed.lossy);
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered, DiagnosticKind::InformationLoss]
    );
    match conformed.diagnostics.find(DiagnosticKind::InformationLoss) {
        Some(Diagnostic::InformationLoss { entries, .. }) => {
            assert_eq!(entries, &vec![(1, 3), (3, 2)]);
        }
        other => panic!("unexpected diagnostic {:?}", other),
    }
    // `j` keeps its spatial step, `k` and `l` have none left
    assert_eq!(conformed.pixdim, vec![1., 3., 0., 0.]);
}

#[test]
fn missing_axis_name_is_fatal() {
    let cmap = start_step_map(&["i", "j", "k", "n"], &["x", "y", "z", "t"]);
    match coordmap_for_io(&cmap) {
        Err(NiftiError::AxisMismatch(missing, unmatched)) => {
            assert_eq!(missing, vec!["l".to_string()]);
            assert_eq!(unmatched, vec!["n".to_string()]);
        }
        other => panic!("expected an axis mismatch, got {:?}", other),
    }
    assert!(coerce_coordmap(&cmap).is_err());
}

#[test]
fn swapped_extended_axes_lose_information() {
    let cmap = start_step_map(&["i", "j", "k", "m", "l"], &["x", "y", "z", "t", "u"]);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.coordmap.input().name(), "input-reordered");
    assert_eq!(conformed.order, vec![0, 1, 2, 4, 3]);
    assert_eq!(conformed.coordmap.shape(), Some(vec![1, 2, 3, 4, 5]));
    assert!(conformed.lossy);
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered, DiagnosticKind::InformationLoss]
    );
    match conformed.diagnostics.find(DiagnosticKind::InformationLoss) {
        Some(Diagnostic::InformationLoss { entries, axes }) => {
            assert_eq!(entries, &vec![(3, 4), (4, 3)]);
            assert_eq!(
                axes,
                &vec![("m".to_string(), "t".to_string()), ("l".to_string(), "u".to_string())]
            );
        }
        other => panic!("unexpected diagnostic {:?}", other),
    }
    // only the diagonal contributes to pixdim
    assert_eq!(conformed.pixdim, vec![1., 2., 3., 0., 0.]);

    let expected = permute_input(cmap.affine(), &conformed.order);
    assert_relative_eq!(conformed.coordmap.affine(), &expected);

    for x in sample_points(5) {
        let xr = permute(&x, &conformed.order);
        assert_relative_eq!(
            conformed.coordmap.apply(&xr).unwrap().as_slice(),
            cmap.apply(&x).unwrap().as_slice()
        );
    }
}

#[test]
fn reversed_output_reorders_both_systems() {
    let cmap = start_step_map(&["i", "j", "k", "m", "l"], &["u", "t", "z", "y", "x"]);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.coordmap.input().name(), "input-reordered");
    assert_eq!(conformed.coordmap.output().name(), "output-reordered");
    assert_eq!(conformed.order, vec![0, 1, 2, 4, 3]);
    assert_eq!(conformed.output_order, vec![4, 3, 2, 1, 0]);
    assert_eq!(
        conformed.coordmap.output().axis_names(),
        vec!["x", "y", "z", "t", "u"]
    );
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![
            DiagnosticKind::InputReordered,
            DiagnosticKind::InformationLoss,
            DiagnosticKind::OutputReordered,
        ]
    );

    let rows = permute_output(cmap.affine(), &conformed.output_order);
    let expected = permute_input(&rows, &conformed.order);
    assert_relative_eq!(conformed.coordmap.affine(), &expected);

    for x in sample_points(5) {
        let xr = permute(&x, &conformed.order);
        let mut y = conformed.coordmap.apply(&xr).unwrap();
        y.reverse();
        assert_relative_eq!(y.as_slice(), cmap.apply(&x).unwrap().as_slice());
    }
}

#[test]
fn reversed_output_with_consistent_affine_is_lossless() {
    let cmap = aligned_map(&["i", "j", "k", "l"], &["t", "z", "y", "x"], 1.);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.coordmap.input().name(), "input");
    assert_eq!(conformed.coordmap.output().name(), "output-reordered");
    assert_eq!(conformed.order, vec![0, 1, 2, 3]);
    assert!(!conformed.lossy);
    assert_eq!(conformed.pixdim, vec![1., 2., 3., 4.]);
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::OutputReordered]
    );
}

#[test]
fn permuted_names_with_consistent_affine() {
    let cmap = aligned_map(&["j", "k", "i", "l"], &["x", "y", "z", "t"], 1.);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.order, vec![2, 0, 1, 3]);
    assert_eq!(
        conformed.coordmap.input().axis_names(),
        vec!["i", "j", "k", "l"]
    );
    assert_eq!(conformed.pixdim, vec![1., 2., 3., 4.]);
    assert_eq!(conformed.diminfo, DimInfo::new(Some(0), Some(1), Some(2)));
    assert_eq!(conformed.diminfo.to_byte().unwrap(), 0b11_10_01);
    assert_eq!(conformed.time_axis, Some(3));
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered]
    );
}

#[test]
fn negative_steps_are_reported() {
    let cmap = aligned_map(&["j", "k", "i", "l"], &["x", "y", "z", "t"], -1.);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.order, vec![2, 0, 1, 3]);
    assert_eq!(conformed.pixdim, vec![1., 2., 3., 4.]);
    assert!(!conformed.lossy);
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered, DiagnosticKind::NegativePixdim]
    );
    assert_eq!(
        conformed.diagnostics.find(DiagnosticKind::NegativePixdim),
        Some(&Diagnostic::NegativePixdim {
            positions: vec![0, 1, 2, 3],
            names: vec!["i".into(), "j".into(), "k".into(), "l".into()],
        })
    );
}

#[test]
fn every_consistent_permutation_is_lossless() {
    let names = ["i", "j", "k", "l"];
    for perm in permutations(4) {
        let input: Vec<&str> = perm.iter().map(|&p| names[p]).collect();
        let cmap = aligned_map(&input, &["x", "y", "z", "t"], 1.);
        let conformed = coordmap_for_io(&cmap).unwrap();

        assert!(!conformed.lossy, "{:?} should be lossless", input);
        assert_eq!(conformed.pixdim, vec![1., 2., 3., 4.]);
        assert_eq!(
            conformed.coordmap.input().axis_names(),
            vec!["i", "j", "k", "l"]
        );
        if perm == vec![0, 1, 2, 3] {
            assert!(conformed.diagnostics.is_empty());
        } else {
            assert_eq!(
                conformed.diagnostics.kinds(),
                vec![DiagnosticKind::InputReordered]
            );
        }

        let adjusted = permute_input(cmap.affine(), &conformed.order);
        assert_eq!(conformed.coordmap.affine(), &adjusted);
        for x in sample_points(4) {
            let xr = permute(&x, &conformed.order);
            assert_relative_eq!(
                conformed.coordmap.apply(&xr).unwrap().as_slice(),
                cmap.apply(&x).unwrap().as_slice()
            );
        }
    }
}

#[test]
fn coerce_accepts_lossy_maps() {
    let cmap = start_step_map(&["i", "j", "k", "m", "l"], &["u", "t", "z", "y", "x"]);
    let conformed = coerce_coordmap(&cmap).unwrap();
    assert_eq!(conformed.order, vec![0, 1, 2, 4, 3]);
    assert!(conformed.lossy);
    assert_eq!(conformed.time_axis, Some(3));
    assert_eq!(conformed.diminfo, DimInfo::new(Some(0), Some(1), Some(2)));
    assert!(conformed.diagnostics.contains(DiagnosticKind::InformationLoss));

    let newcmap = conformed.coordmap;
    assert_eq!(newcmap.input().axis_names(), vec!["i", "j", "k", "l", "m"]);
    assert_eq!(newcmap.output().axis_names(), vec!["x", "y", "z", "t", "u"]);

    // conforming the coerced map again changes nothing in the axis order
    let again = coordmap_for_io(&newcmap).unwrap();
    assert_eq!(again.order, vec![0, 1, 2, 3, 4]);
    assert_eq!(again.coordmap.input().name(), "input-reordered");
    assert!(!again.diagnostics.contains(DiagnosticKind::InputReordered));
    assert!(!again.diagnostics.contains(DiagnosticKind::OutputReordered));
}

#[test]
fn rotated_names_over_diagonal_affine() {
    // stored as (k, i, j, l), with each column keeping the step of its
    // declared position
    let cmap = start_step_map(&["k", "i", "j", "l"], &["x", "y", "z", "t"]);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.order, vec![1, 2, 0, 3]);
    assert!(!conformed.lossy);
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered]
    );
    // the same steps, now attached to the axes that carry them
    assert_eq!(conformed.pixdim, vec![2., 3., 1., 4.]);
    assert_eq!(conformed.diminfo, DimInfo::new(Some(0), Some(1), Some(2)));
    assert_eq!(conformed.time_axis, Some(3));

    for x in sample_points(4) {
        let xr = permute(&x, &conformed.order);
        assert_relative_eq!(
            conformed.coordmap.apply(&xr).unwrap().as_slice(),
            cmap.apply(&x).unwrap().as_slice()
        );
    }
}

#[test]
fn permuted_names_over_diagonal_affine() {
    let cmap = start_step_map(&["j", "k", "i", "l"], &["x", "y", "z", "t"]);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.order, vec![2, 0, 1, 3]);
    assert!(!conformed.lossy);
    assert!(!conformed.diagnostics.contains(DiagnosticKind::InformationLoss));
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered]
    );
    assert_eq!(conformed.pixdim, vec![3., 1., 2., 4.]);
}

#[test]
fn permuted_names_over_negative_diagonal_affine() {
    let cmap = signed_start_step_map(&["j", "k", "i", "l"], &["x", "y", "z", "t"], -1.);
    let conformed = coordmap_for_io(&cmap).unwrap();

    assert_eq!(conformed.order, vec![2, 0, 1, 3]);
    assert!(!conformed.lossy);
    assert_eq!(
        conformed.diagnostics.kinds(),
        vec![DiagnosticKind::InputReordered, DiagnosticKind::NegativePixdim]
    );
    assert_eq!(
        conformed.diagnostics.find(DiagnosticKind::NegativePixdim),
        Some(&Diagnostic::NegativePixdim {
            positions: vec![0, 1, 2, 3],
            names: vec!["i".into(), "j".into(), "k".into(), "l".into()],
        })
    );
    assert_eq!(conformed.pixdim, vec![3., 1., 2., 4.]);
}

#[test]
#[rustfmt::skip]
fn oblique_spatial_axes_are_kept() {
    use nalgebra::DMatrix;

    let base = start_step_map(&["i", "j", "k"], &["x", "y", "z"]);
    let affine = DMatrix::from_row_slice(4, 4, &[
        0.8, -0.6, 0., 10.,
        0.6,  0.8, 0., 20.,
        0.,   0.,  2., 30.,
        0.,   0.,  0., 1.,
    ]);
    let cmap = nifti_coords::CoordinateMap::new(
        base.input().clone(),
        base.output().clone(),
        affine,
    )
    .unwrap();
    let conformed = coordmap_for_io(&cmap).unwrap();
    assert!(!conformed.lossy);
    assert!(conformed.diagnostics.is_empty());
    assert_relative_eq!(
        conformed.pixdim.as_slice(),
        &[1., 1., 2.][..],
        epsilon = 1e-12
    );
    validate_coordmap(&cmap).unwrap();
}
