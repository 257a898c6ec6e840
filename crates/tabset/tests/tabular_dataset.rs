//! TabularDataset construction, conversion and access.

use approx::assert_relative_eq;
use ndarray::{array, Array1, Array2, Array3, ArrayD, ArrayViewD, IxDyn};
use proptest::prelude::*;
use rstest::rstest;

use tabset::data::{Container, DType, DatasetError, Role, Target, Targets};
use tabset::testing::assert_regression_targets;
use tabset::{Dataset, TabularDataset, TaskKind, Tensor};

fn values(view: &ArrayViewD<f32>) -> Vec<f32> {
    view.iter().copied().collect()
}

// =============================================================================
// Task kinds
// =============================================================================

#[rstest]
#[case("c", "c")]
#[case("classification", "c")]
#[case("r", "r")]
#[case("regression", "r")]
fn kind_spellings_normalize(#[case] spelling: &str, #[case] canonical: &str) {
    let ds = TabularDataset::with_kind(array![[1.0f64], [2.0]], array![1.0f64, 0.0], spelling)
        .unwrap();
    assert_eq!(ds.task().as_str(), canonical);
}

#[rstest]
#[case("z")]
#[case("")]
#[case("reg")]
#[case("Classification")]
fn invalid_kind_spellings(#[case] spelling: &str) {
    let err = TabularDataset::with_kind(array![[1.0f64]], array![0i64], spelling).unwrap_err();
    assert_eq!(err, DatasetError::InvalidTaskKind(spelling.to_string()));
}

#[test]
fn task_kind_serde_uses_short_form() {
    assert_eq!(serde_json::to_string(&TaskKind::Regression).unwrap(), "\"r\"");
    let kind: TaskKind = serde_json::from_str("\"classification\"").unwrap();
    assert_eq!(kind, TaskKind::Classification);
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn features_become_f32_with_shape_kept() {
    let x = array![[1i32, 2, 3], [4, 5, 6]];
    let ds = TabularDataset::classification(x, array![0i64, 1]).unwrap();
    assert_eq!(ds.features().shape(), &[2, 3]);
    assert_eq!(ds.n_features(), 3);
    assert_eq!(values(&ds.sample(1).0), vec![4.0, 5.0, 6.0]);
}

#[test]
fn regression_targets_round_trip() {
    let y = vec![0.25, -3.5, 151.0, 1e-3, 42.125];
    let x = Array2::<f64>::zeros((y.len(), 2));
    let ds = TabularDataset::new(x, Array1::from(y.clone()), TaskKind::Regression).unwrap();

    assert_regression_targets(&ds, &y, 1e-6);
    for (i, &expected) in y.iter().enumerate() {
        let Some((_, Target::Value(v))) = ds.get(i) else {
            panic!("expected a regression target at {i}");
        };
        assert_relative_eq!(v, expected as f32);
    }
}

#[rstest]
#[case::int64(Container::from(array![3i64, 0, 9, 9, 1]))]
#[case::uint8(Container::from(array![3u8, 0, 9, 9, 1]))]
#[case::float64(Container::from(array![3.0f64, 0.0, 9.0, 9.0, 1.0]))]
#[case::column(Container::from(array![[3i32], [0], [9], [9], [1]]))]
#[case::tensor(Container::from(Tensor::from_slice(&[3i64, 0, 9, 9, 1])))]
fn class_indices_are_preserved(#[case] targets: Container) {
    let ds = TabularDataset::classification(Array2::<f32>::zeros((5, 2)), targets).unwrap();
    let Targets::Classes(classes) = ds.targets() else {
        panic!("expected class indices");
    };
    assert_eq!(classes.to_vec(), vec![3, 0, 9, 9, 1]);
}

#[test]
fn tensor_and_array_inputs_agree() {
    let values = vec![0.5f64, 1.5, 2.5, 3.5, 4.5, 5.5];
    let from_array = TabularDataset::new(
        Array2::from_shape_vec((3, 2), values.clone()).unwrap(),
        array![1.0f64, 2.0, 3.0],
        TaskKind::Regression,
    )
    .unwrap();
    let from_tensor = TabularDataset::new(
        Tensor::from_vec(values, &[3, 2]).unwrap(),
        Tensor::from_slice(&[1.0f64, 2.0, 3.0]),
        TaskKind::Regression,
    )
    .unwrap();
    assert_eq!(from_array, from_tensor);
}

#[test]
fn views_are_copied_into_the_dataset() {
    let mut x = array![[1.0f32, 2.0], [3.0, 4.0]];
    let ds = TabularDataset::classification(x.view(), array![0i64, 1]).unwrap();
    x[[0, 0]] = 100.0;
    assert_eq!(values(&ds.sample(0).0), vec![1.0, 2.0]);
}

#[test]
fn tensor_dtype_is_reported() {
    let t = Tensor::from_vec(vec![1u8, 2, 3, 4], &[2, 2]).unwrap();
    assert_eq!(t.dtype(), DType::U8);
    assert_eq!(t.numel(), 4);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn mismatched_sample_counts_never_truncate() {
    let err = TabularDataset::classification(Array2::<f64>::zeros((10, 3)), Array1::<i64>::zeros(9))
        .unwrap_err();
    assert_eq!(
        err,
        DatasetError::SampleCountMismatch {
            features: 10,
            targets: 9
        }
    );
}

#[rstest]
#[case::features(
    Container::from(Array3::<f64>::zeros((4, 2, 2))),
    Container::from(Array1::<i64>::zeros(4)),
    Role::Features,
    3
)]
#[case::targets(
    Container::from(Array2::<f64>::zeros((4, 2))),
    Container::from(Array3::<i64>::zeros((4, 1, 1))),
    Role::Targets,
    3
)]
#[case::tensor(
    Container::from(Tensor::from_vec(vec![0.0f32; 16], &[2, 2, 2, 2]).unwrap()),
    Container::from(Array1::<i64>::zeros(2)),
    Role::Features,
    4
)]
fn high_rank_inputs_are_rejected(
    #[case] features: Container,
    #[case] targets: Container,
    #[case] role: Role,
    #[case] ndim: usize,
) {
    let err = TabularDataset::classification(features, targets).unwrap_err();
    assert_eq!(err, DatasetError::DimensionTooHigh { role, ndim });
    assert!(err.to_string().contains(&format!("ndim {ndim}")));
}

#[test]
fn scalar_features_are_rejected() {
    let err = TabularDataset::classification(
        ArrayD::<f64>::zeros(IxDyn(&[])),
        Array1::<i64>::zeros(1),
    )
    .unwrap_err();
    assert_eq!(err, DatasetError::MissingSampleAxis { role: Role::Features });
}

#[test]
fn list_targets_are_unsupported() {
    let err = TabularDataset::new(
        Array2::<f64>::zeros((2, 2)),
        vec![1.0, 2.0],
        TaskKind::Regression,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DatasetError::UnsupportedContainerType {
            role: Role::Targets,
            kind: "list"
        }
    );
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn iter_visits_samples_in_order() {
    let ds = TabularDataset::classification(
        array![[1.0f32, 0.0], [2.0, 0.0], [3.0, 0.0]],
        array![7i64, 8, 9],
    )
    .unwrap();
    let targets: Vec<Target> = ds.iter().map(|(_, t)| t).collect();
    assert_eq!(
        targets,
        vec![Target::Class(7), Target::Class(8), Target::Class(9)]
    );
    let firsts: Vec<f32> = ds.iter().map(|(x, _)| values(&x)[0]).collect();
    assert_eq!(firsts, vec![1.0, 2.0, 3.0]);
}

fn shapes() -> impl Strategy<Value = (usize, usize, Vec<f64>, Vec<f64>)> {
    (0usize..40, 1usize..6).prop_flat_map(|(n, d)| {
        (
            Just(n),
            Just(d),
            prop::collection::vec(-1e3f64..1e3, n * d),
            prop::collection::vec(-1e3f64..1e3, n),
        )
    })
}

proptest! {
    #[test]
    fn valid_inputs_are_fully_indexable((n, d, x, y) in shapes()) {
        let x = Array2::from_shape_vec((n, d), x).unwrap();
        let ds = TabularDataset::new(x.clone(), Array1::from(y.clone()), TaskKind::Regression).unwrap();

        prop_assert_eq!(ds.len(), n);
        for i in 0..n {
            let (row, target) = ds.get(i).unwrap();
            prop_assert_eq!(row.len(), d);
            prop_assert_eq!(values(&row)[0], x[[i, 0]] as f32);
            prop_assert_eq!(target, Target::Value(y[i] as f32));
        }
        prop_assert!(ds.get(n).is_none());
    }

    #[test]
    fn mismatches_always_error(n in 0usize..30, m in 0usize..30) {
        prop_assume!(n != m);
        let result = TabularDataset::classification(Array2::<f64>::zeros((n, 2)), Array1::<i64>::zeros(m));
        prop_assert_eq!(
            result.unwrap_err(),
            DatasetError::SampleCountMismatch { features: n, targets: m }
        );
    }
}
