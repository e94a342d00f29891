use coosum_core::{Cell, CooMatrix};
use coosum_kernels::{add, add_assign, add_parallel, add_parallel_with, AddOptions, QueueContext};

fn matrix(cells: &[(usize, usize, f64)]) -> CooMatrix<f64> {
    CooMatrix::from_cells(
        &cells
            .iter()
            .map(|&(r, c, v)| Cell::new(r, c, v))
            .collect::<Vec<_>>(),
    )
}

fn ctx() -> QueueContext {
    QueueContext::with_threads(4).unwrap()
}

#[test]
fn dense_3x3_addition_table() {
    let a = matrix(&[
        (0, 0, 1.1),
        (0, 1, 2.2),
        (0, 2, 3.3),
        (1, 0, 4.4),
        (1, 1, 5.5),
        (1, 2, 6.6),
        (2, 0, 7.7),
        (2, 1, 8.8),
        (2, 2, 9.9),
    ]);
    let b = matrix(&[
        (0, 0, 10.1),
        (0, 1, 20.2),
        (0, 2, 30.3),
        (1, 0, 40.4),
        (1, 1, 50.5),
        (1, 2, 60.6),
        (2, 0, 70.7),
        (2, 1, 80.8),
        (2, 2, 90.9),
    ]);
    let expected = matrix(&[
        (0, 0, 11.2),
        (0, 1, 22.4),
        (0, 2, 33.6),
        (1, 0, 44.8),
        (1, 1, 56.0),
        (1, 2, 67.2),
        (2, 0, 78.4),
        (2, 1, 89.6),
        (2, 2, 100.8),
    ]);

    assert!(add(&a, &b).approx_eq(&expected));
    assert!(add_parallel(&a, &b, &ctx()).approx_eq(&expected));
}

#[test]
fn host_and_parallel_paths_are_oracle_equal() {
    let a = matrix(&[(0, 0, 1.5), (0, 7, -2.0), (3, 3, 4.25), (100, 2, 0.5)]);
    let b = matrix(&[(0, 0, 2.5), (3, 3, -4.25), (50, 50, 9.0)]);
    let ctx = ctx();
    let host = add(&a, &b);
    let par = add_parallel(&a, &b, &ctx);
    assert!(host.approx_eq(&par));
}

#[test]
fn addition_is_commutative_under_the_oracle() {
    let a = matrix(&[(0, 1, 3.0), (2, 2, -1.0), (5, 0, 0.25)]);
    let b = matrix(&[(0, 1, 1.0), (4, 4, 2.0)]);
    let ctx = ctx();
    assert!(add(&a, &b).approx_eq(&add(&b, &a)));
    assert!(add_parallel(&a, &b, &ctx).approx_eq(&add_parallel(&b, &a, &ctx)));
    assert!(add(&a, &b).approx_eq(&add_parallel(&b, &a, &ctx)));
}

#[test]
fn self_addition_doubles_every_entry() {
    let a = matrix(&[(0, 0, 1.1), (0, 2, 3.3), (1, 0, 4.4), (1, 1, 5.5)]);
    let ctx = ctx();
    let host = add(&a, &a);
    let par = add_parallel(&a, &a, &ctx);
    for cell in a.to_cells() {
        assert_eq!(host.get(cell.row, cell.col), 2.0 * cell.value);
        assert_eq!(par.get(cell.row, cell.col), 2.0 * cell.value);
    }
    assert!(host.approx_eq(&par));
}

#[test]
fn host_path_prunes_cancelled_coordinates() {
    let mut a = matrix(&[(2, 2, 7.5), (0, 1, 1.0)]);
    let b = matrix(&[(2, 2, -7.5)]);
    add_assign(&mut a, &b);
    assert_eq!(a.get(2, 2), 0.0);
    assert_eq!(a.to_cells().len(), 1);
    assert_eq!(a.len(), 1);
}

#[test]
fn parallel_path_keeps_explicit_zero_by_default() {
    let a = matrix(&[(2, 2, 7.5)]);
    let b = matrix(&[(2, 2, -7.5)]);
    let ctx = ctx();
    let kept = add_parallel(&a, &b, &ctx);
    // get agrees with the host path; only the stored-entry count differs.
    assert_eq!(kept.get(2, 2), 0.0);
    assert_eq!(kept.len(), 1);
    assert!(kept.to_cells().is_empty());
    assert!(kept.approx_eq(&add(&a, &b)));

    let pruned = add_parallel_with(&a, &b, &ctx, AddOptions { prune_zeros: true });
    assert!(pruned.is_empty());
}

#[test]
fn empty_operands_are_identity() {
    let a = matrix(&[(1, 1, 2.0)]);
    let empty = CooMatrix::new();
    let ctx = ctx();
    assert!(add(&a, &empty).approx_eq(&a));
    assert!(add(&empty, &a).approx_eq(&a));
    assert!(add_parallel(&a, &empty, &ctx).approx_eq(&a));
    assert!(add_parallel(&empty, &a, &ctx).approx_eq(&a));
    assert!(add_parallel(&empty, &empty, &ctx).is_empty());
}

#[test]
fn integer_matrices_add_exactly() {
    let a = CooMatrix::from_cells(&[Cell::new(0, 0, 3i64), Cell::new(1, 2, -5)]);
    let b = CooMatrix::from_cells(&[Cell::new(0, 0, 4i64), Cell::new(1, 2, 5)]);
    let ctx = ctx();
    let host = add(&a, &b);
    assert_eq!(host.get(0, 0), 7);
    assert_eq!(host.get(1, 2), 0);
    assert_eq!(host.len(), 1);
    assert!(host.approx_eq(&add_parallel(&a, &b, &ctx)));
}

#[test]
fn build_failure_is_reported_with_a_diagnostic() {
    // A context can always be used after a successful build; a failed
    // build is the one error callers handle, falling back to the host
    // path.
    let a = matrix(&[(0, 0, 1.0)]);
    let b = matrix(&[(0, 0, 2.0)]);
    let sum = match QueueContext::with_threads(2) {
        Ok(ctx) => add_parallel(&a, &b, &ctx),
        Err(failure) => {
            assert!(!failure.log.is_empty());
            add(&a, &b)
        }
    };
    assert!(sum.approx_eq(&matrix(&[(0, 0, 3.0)])));
}
