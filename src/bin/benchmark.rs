//! Throughput benchmark: serial vs parallel sparse stepping

use std::time::Instant;

use life_viewer::domain::{Cell, ConwayRule, SparseGrid, engine, presets};
use rand::{SeedableRng, rngs::StdRng};

const SEED: u64 = 0x5EED;

fn random_soup(size: i64, density: f64) -> SparseGrid {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut grid = SparseGrid::new();
    let half = size / 2;
    grid.randomize_region(Cell::new(-half, -half), Cell::new(half - 1, half - 1), density, &mut rng);
    grid
}

/// Average milliseconds per generation
fn bench(grid: &SparseGrid, iterations: u32, step: fn(&SparseGrid, &ConwayRule) -> SparseGrid) -> f64 {
    let mut grid = grid.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid, &ConwayRule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn serial(grid: &SparseGrid, rule: &ConwayRule) -> SparseGrid {
    engine::step(grid, rule)
}

fn parallel(grid: &SparseGrid, rule: &ConwayRule) -> SparseGrid {
    engine::step_parallel(grid, rule)
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let iterations = 10;

    println!("{:>10} {:>10} {:>12} {:>12} {:>10}", "Soup", "Alive", "Serial", "Parallel", "Speedup");
    println!("{:-<58}", "");

    for size in sizes {
        let grid = random_soup(size, 0.3);
        let serial_ms = bench(&grid, iterations, serial);
        let parallel_ms = bench(&grid, iterations, parallel);

        println!(
            "{:>10} {:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            grid.count(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Acorn, 5000 generations ===\n");

    let mut grid = SparseGrid::new();
    presets::acorn().place_on(&mut grid, Cell::new(0, 0));

    let start = Instant::now();
    for _ in 0..5000 {
        grid = engine::step(&grid, &ConwayRule);
    }
    let elapsed = start.elapsed().as_secs_f64();

    let extent = grid
        .bounding_box()
        .map(|(min, max)| format!("{}x{}", max.x - min.x + 1, max.y - min.y + 1))
        .unwrap_or_else(|| "empty".to_string());
    println!("Final population: {}", grid.count());
    println!("Bounding box:     {}", extent);
    println!("Total:            {:.2} s ({:.3} ms/gen)", elapsed, elapsed * 1000.0 / 5000.0);
}
