//! Benchmark driver for the sequential containers.
//!
//! Builds each container kind from scratch with `repeat_count` end
//! insertions, timing the whole build (construction through drop), and
//! prints one labeled line per container kind for each operation:
//!
//! ```text
//! push_back:
//! vector: 0.000412
//! list:   0.000731
//!
//! push_front:
//! vector: 0.031870
//! list:   0.000695
//! ```
//!
//! Run with:
//!   cargo run --release -p linear-bench -- 100000
//!   cargo run --release -p linear-bench -- 100000 --latency

use std::hint::black_box;
use std::time::Instant;

use clap::Parser;
use hdrhistogram::Histogram;
use linear_collections::{LinkedList, SequentialContainer, Vector};
use tracing::debug;

/// Times push_back and push_front over both container kinds.
#[derive(Parser, Debug)]
#[command(name = "linear-bench", version, about)]
struct Cli {
    /// Number of insertions per timed loop
    #[arg(default_value_t = 10_000)]
    repeat_count: u64,

    /// Starting capacity for both containers (defaults to each kind's own)
    #[arg(long)]
    capacity: Option<usize>,

    /// Also report per-insertion latency percentiles
    #[arg(long)]
    latency: bool,
}

/// Builds a container with `count` insertions and returns the elapsed
/// wall-clock seconds, construction and drop included.
fn timed<C>(make: impl Fn() -> C, count: u64, push: fn(&mut C, i64)) -> f64
where
    C: SequentialContainer<i64>,
{
    let start = Instant::now();
    let mut container = make();
    for i in 0..count as i64 {
        push(&mut container, black_box(i));
    }
    drop(container);
    start.elapsed().as_secs_f64()
}

/// Records per-insertion latencies into a histogram.
fn latencies<C>(make: impl Fn() -> C, count: u64, push: fn(&mut C, i64)) -> Histogram<u64>
where
    C: SequentialContainer<i64>,
{
    let mut histogram = Histogram::<u64>::new(3).expect("three significant figures is valid");
    let mut container = make();
    for i in 0..count as i64 {
        let start = Instant::now();
        push(&mut container, black_box(i));
        histogram.saturating_record(start.elapsed().as_nanos() as u64);
    }
    histogram
}

fn print_percentiles(name: &str, histogram: &Histogram<u64>) {
    println!(
        "{:17} | p50: {:6} ns | p90: {:6} ns | p99: {:6} ns | p999: {:7} ns",
        name,
        histogram.value_at_quantile(0.50),
        histogram.value_at_quantile(0.90),
        histogram.value_at_quantile(0.99),
        histogram.value_at_quantile(0.999),
    );
}

fn main() {
    // RUST_LOG controls diagnostics on stderr; timing lines own stdout.
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .expect("default filter is valid");

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    debug!(
        repeat_count = cli.repeat_count,
        capacity = ?cli.capacity,
        "starting timed loops"
    );

    let count = cli.repeat_count;
    let make_vector = || match cli.capacity {
        Some(capacity) => Vector::with_capacity(capacity),
        None => Vector::new(),
    };
    let make_list = || match cli.capacity {
        Some(capacity) => LinkedList::with_capacity(capacity),
        None => LinkedList::new(),
    };

    println!("push_back:");
    println!("vector: {:.6}", timed(&make_vector, count, Vector::push_back));
    println!("list:   {:.6}", timed(&make_list, count, LinkedList::push_back));

    println!();
    println!("push_front:");
    println!("vector: {:.6}", timed(&make_vector, count, Vector::push_front));
    println!("list:   {:.6}", timed(&make_list, count, LinkedList::push_front));

    if cli.latency {
        println!();
        println!("per-insertion latency ({count} samples):");
        print_percentiles(
            "vector push_back",
            &latencies(&make_vector, count, Vector::push_back),
        );
        print_percentiles(
            "list push_back",
            &latencies(&make_list, count, LinkedList::push_back),
        );
        print_percentiles(
            "vector push_front",
            &latencies(&make_vector, count, Vector::push_front),
        );
        print_percentiles(
            "list push_front",
            &latencies(&make_list, count, LinkedList::push_front),
        );
    }
}
