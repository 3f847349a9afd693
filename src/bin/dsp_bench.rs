//! Benchmark binary for dsp-core.
//!
//! Usage:
//!     dsp_bench <data_file> <iterations>
//!
//! The data file is JSON of the form
//! `{"data": [..], "filters": [{"kind": "median", "width": 5}, ..]}`,
//! where `filters` is optional.
//!
//! Outputs JSON array of benchmark results to stdout.

use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs::File;
use std::hint::black_box;
use std::io::BufReader;
use std::process;
use std::time::Instant;

use dsp_core::prelude::{average, derivative, min_max, FilterConfig, FilterKind};

#[derive(Debug, Deserialize)]
struct BenchInput {
    data: Vec<f64>,
    #[serde(default = "default_filters")]
    filters: Vec<FilterConfig>,
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    samples: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_samples_per_sec: f64,
}

fn default_filters() -> Vec<FilterConfig> {
    vec![
        FilterConfig::average(5),
        FilterConfig::average(21),
        FilterConfig::median(5),
        FilterConfig::median(21),
    ]
}

fn load_input(path: &str) -> Result<BenchInput, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {}", path, e))?;
    let input: BenchInput = serde_json::from_reader(BufReader::new(file))?;
    for config in &input.filters {
        config.validate()?;
    }
    Ok(input)
}

fn benchmark<F>(name: &str, iterations: usize, samples: usize, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        f();
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        times.push(elapsed);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (samples as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    BenchmarkResult {
        name: name.to_string(),
        samples,
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_samples_per_sec: throughput,
    }
}

fn filter_name(config: &FilterConfig) -> String {
    match config.kind {
        FilterKind::Average => format!("AverageFilter({})", config.width),
        FilterKind::Median => format!("MedianFilter({})", config.width),
    }
}

fn run(data_file: &str, iterations: usize) -> Result<Vec<BenchmarkResult>, Box<dyn Error>> {
    eprintln!("Loading data from {}...", data_file);
    let input = load_input(data_file)?;
    let data = input.data;
    let samples = data.len();
    eprintln!("Loaded {} samples", samples);

    let mut results = Vec::new();

    for config in &input.filters {
        let name = filter_name(config);
        eprintln!("  Rust: {}...", name);
        results.push(benchmark(&name, iterations, samples, || {
            black_box(config.apply(black_box(&data)));
        }));
    }

    eprintln!("  Rust: Derivative...");
    results.push(benchmark("Derivative", iterations, samples, || {
        black_box(derivative(black_box(&data)));
    }));

    eprintln!("  Rust: MinMax...");
    results.push(benchmark("MinMax", iterations, samples, || {
        black_box(min_max(black_box(&data)));
    }));

    eprintln!("  Rust: Average...");
    results.push(benchmark("Average", iterations, samples, || {
        black_box(average(black_box(&data)));
    }));

    Ok(results)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <data_file> <iterations>", args[0]);
        process::exit(1);
    }

    let iterations: usize = match args[2].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Invalid iterations: {}", args[2]);
            process::exit(1);
        }
    };

    let results = match run(&args[1], iterations) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match serde_json::to_string(&results) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize results: {}", e);
            process::exit(1);
        }
    }
}
