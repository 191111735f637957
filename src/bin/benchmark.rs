//! Performance benchmark comparing the serial and parallel transitions

use std::time::Instant;

use life_console::{Algorithm, Universe};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut universe = Universe::new(size, size);
    universe.seed_life_with(30, &mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.advance(&mut universe);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    for algorithm in Algorithm::all() {
        let ms = benchmark(algorithm, 2000, iterations);
        println!(
            "{:<10} {:.2} ms/gen, {:.1}M cells/sec ({})",
            algorithm.name(),
            ms,
            (cells as f64) / (ms / 1000.0) / 1_000_000.0,
            algorithm.description()
        );
    }
}
