use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pocket_tools::{generate_permutations, timed, LucasNumbers};
use std::time::Duration;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

struct PermutationResult {
    length: usize,
    permutations: usize,
    elapsed: Duration,
}

struct LucasResult {
    index: u64,
    digits: usize,
    cold: Duration,
    warm: Duration,
    hits: u64,
    misses: u64,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Times permutation generation and memoized Lucas numbers"
)]
struct BenchmarkCli {
    /// Largest word length to permute (every length from 1 up is measured)
    #[arg(long, default_value_t = 8)]
    max_length: usize,
    /// Comma-separated Lucas indices (e.g. 1000,20000)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u64))]
    lucas: Option<Vec<u64>>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = BenchmarkCli::parse();
    if cli.max_length == 0 || cli.max_length > ALPHABET.len() {
        return Err(format!("max-length must be between 1 and {}", ALPHABET.len()).into());
    }
    let lucas_indices = cli.lucas.unwrap_or_else(|| vec![1_000, 10_000, 50_000]);

    println!("=== Permutation & Lucas Benchmark ===\n");

    let permutation_results = bench_permutations(cli.max_length)?;
    print_permutation_table(&permutation_results);
    println!();

    let lucas_results = bench_lucas(&lucas_indices);
    print_lucas_table(&lucas_results);
    Ok(())
}

fn progress_bar(len: u64, label: &'static str) -> CliResult<ProgressBar> {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{prefix:>12} [{bar:30}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );
    bar.set_prefix(label);
    Ok(bar)
}

fn bench_permutations(max_length: usize) -> CliResult<Vec<PermutationResult>> {
    let bar = progress_bar(max_length as u64, "permutations")?;
    let mut results = Vec::with_capacity(max_length);
    for length in 1..=max_length {
        bar.set_message(format!("length {length}"));
        let (permutations, elapsed) = timed(|| generate_permutations(&ALPHABET[..length]));
        results.push(PermutationResult {
            length,
            permutations: permutations?.len(),
            elapsed,
        });
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(results)
}

fn bench_lucas(indices: &[u64]) -> Vec<LucasResult> {
    let bar = match progress_bar(indices.len() as u64, "lucas") {
        Ok(bar) => bar,
        Err(_) => ProgressBar::hidden(),
    };
    let mut results = Vec::with_capacity(indices.len());
    for &index in indices {
        bar.set_message(format!("L({index})"));
        let mut lucas = LucasNumbers::new();
        let (value, cold) = timed(|| lucas.get(index));
        let (_, warm) = timed(|| lucas.get(index));
        results.push(LucasResult {
            index,
            digits: value.to_string().len(),
            cold,
            warm,
            hits: lucas.cache_hits(),
            misses: lucas.cache_misses(),
        });
        bar.inc(1);
    }
    bar.finish_and_clear();
    results
}

fn print_permutation_table(results: &[PermutationResult]) {
    println!("{:>6} | {:>12} | {:>12}", "Length", "Permutations", "Time (ms)");
    println!("{}", "-".repeat(36));
    for result in results {
        println!(
            "{:>6} | {:>12} | {:>12.3}",
            result.length,
            result.permutations,
            duration_ms(result.elapsed)
        );
    }
}

fn print_lucas_table(results: &[LucasResult]) {
    println!(
        "{:>8} | {:>8} | {:>12} | {:>12} | {:>10} | {:>10}",
        "Index", "Digits", "Cold (ms)", "Cached (ms)", "Hits", "Misses"
    );
    println!("{}", "-".repeat(76));
    for result in results {
        println!(
            "{:>8} | {:>8} | {:>12.3} | {:>12.3} | {:>10} | {:>10}",
            result.index,
            result.digits,
            duration_ms(result.cold),
            duration_ms(result.warm),
            result.hits,
            result.misses
        );
    }
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}
