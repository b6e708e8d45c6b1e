use std::hint::black_box;
use std::time::Instant;

use framemath_kernel::reference::{SplitMix64, gauss_jordan_inverse};
use framemath_kernel::{
    Matrix4x4, TransformParams, Vector3, make_affine_matrix, make_perspective_fov_matrix,
    transform,
};

fn make_matrices(count: usize) -> Vec<Matrix4x4> {
    let mut rng = SplitMix64::new(0xbe_7c);
    (0..count).map(|_| rng.next_matrix(-10.0, 10.0)).collect()
}

fn bench_multiply(iterations: usize) {
    let matrices = make_matrices(64);
    let start = Instant::now();
    let mut acc = Matrix4x4::IDENTITY;
    for i in 0..iterations {
        acc = black_box(matrices[i % matrices.len()] * matrices[(i + 1) % matrices.len()]);
    }
    let elapsed = start.elapsed();
    black_box(acc);
    let per_iter = elapsed / iterations as u32;
    println!("  multiply ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_inverse(iterations: usize) {
    let matrices = make_matrices(64);
    let start = Instant::now();
    for i in 0..iterations {
        let _ = black_box(black_box(&matrices[i % matrices.len()]).inverse());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  adjugate inverse ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");

    let start = Instant::now();
    for i in 0..iterations {
        let _ = black_box(gauss_jordan_inverse(black_box(&matrices[i % matrices.len()])));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  gauss-jordan ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_frame(iterations: usize) {
    let mut object = TransformParams::default();
    let camera = TransformParams::at(Vector3::new(0.0, 0.0, -5.0));
    let projection = make_perspective_fov_matrix(0.45, 1280.0 / 720.0, 0.1, 100.0);

    let start = Instant::now();
    for _ in 0..iterations {
        // Simulate the per-frame spin
        object.rotate.y += 0.03;
        let world = object.to_matrix();
        let view = make_affine_matrix(camera.scale, camera.rotate, camera.translate).inverse();
        let wvp = world * (view * projection);
        let _ = black_box(transform(black_box(Vector3::X), &wvp));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  frame wvp + project ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Kernel Benchmarks ===\n");

    println!("Matrix multiply:");
    bench_multiply(1_000_000);

    println!("\nInverse:");
    bench_inverse(100_000);
    bench_inverse(1_000_000);

    println!("\nFrame composition:");
    bench_frame(100_000);
    bench_frame(1_000_000);

    println!("\n=== Done ===");
}
