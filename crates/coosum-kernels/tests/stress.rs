use coosum_core::CooMatrix;
use coosum_kernels::{add, add_parallel, QueueContext};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_matrix(rng: &mut StdRng, rows: usize, cols: usize, values: usize) -> CooMatrix<f64> {
    let mut mtx = CooMatrix::new();
    for _ in 0..values {
        mtx.set(
            rng.gen_range(0..rows),
            rng.gen_range(0..cols),
            rng.gen_range(-20.0..20.0),
        );
    }
    mtx
}

fn execute_stress(rows: usize, cols: usize, values: usize, repeats: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let ctx = QueueContext::new().unwrap();
    for _ in 0..repeats {
        let a = generate_matrix(&mut rng, rows, cols, values);
        let b = generate_matrix(&mut rng, rows, cols, values);
        let host = add(&a, &b);
        let par = add_parallel(&a, &b, &ctx);
        assert!(host.approx_eq(&par));
    }
}

#[test]
fn one_cell() {
    execute_stress(1, 1, 1, 1, 1);
}

#[test]
fn tiny_empty() {
    execute_stress(5, 5, 10, 1, 2);
}

#[test]
fn tiny_full() {
    execute_stress(5, 5, 5, 5, 3);
}

#[test]
fn small_empty() {
    execute_stress(100, 70, 20, 5, 4);
}

#[test]
fn small_full() {
    execute_stress(100, 70, 6000, 5, 5);
}

#[test]
fn large_empty() {
    execute_stress(500, 200, 2000, 3, 6);
}

#[test]
fn large_full() {
    execute_stress(500, 200, 10000, 3, 7);
}
