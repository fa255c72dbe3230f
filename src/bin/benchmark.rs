//! Step throughput of the serial and parallel strategies

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::domain::{Algorithm, LifeError, LifeGrid, StepEngine, default_rule};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> Result<f64, LifeError> {
    let engine = StepEngine::new(default_rule(), algorithm);
    let mut grid = LifeGrid::new(size, size)?;
    grid.randomize_with(&mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step(&mut grid);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), LifeError> {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000 * 2000;
    let parallel_ms = benchmark(Algorithm::Parallel, 2000, iterations)?;
    println!(
        "\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
    Ok(())
}
