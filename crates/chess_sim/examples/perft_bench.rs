//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Positions are reached by playing coordinate moves from the initial
//! position, so no board notation is needed.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_sim -- [depth] [moves...]
//!
//! Examples:
//!   # Default: depth 3 over the built-in openings
//!   cargo flamegraph --example perft_bench -p chess_sim
//!
//!   # Custom depth and line
//!   cargo flamegraph --example perft_bench -p chess_sim -- 4 e2e4 c7c5 g1f3

use chess_sim::{GameError, GameState, perft};
use std::env;
use std::time::Instant;

/// Opening lines covering quiet and tactical positions
const TEST_LINES: &[(&str, &[&str])] = &[
    ("Start", &[]),
    ("e4", &["e2e4"]),
    ("Sicilian", &["e2e4", "c7c5", "g1f3"]),
    (
        "Italian",
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"],
    ),
    ("Queen's Gambit", &["d2d4", "d7d5", "c2c4", "e7e6", "b1c3"]),
];

fn main() -> Result<(), GameError> {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    // If moves provided, use single position mode
    if args.len() > 2 {
        let line: Vec<&str> = args[2..].iter().map(String::as_str).collect();
        run_single_position(&line, depth)
    } else {
        run_all_positions(depth)
    }
}

fn setup(line: &[&str]) -> Result<GameState, GameError> {
    let mut state = GameState::new();
    for text in line {
        state.play_notation(text)?;
    }
    Ok(state)
}

fn nps(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}

fn run_single_position(line: &[&str], depth: u8) -> Result<(), GameError> {
    let mut state = setup(line)?;

    println!("Line: {}", line.join(" "));
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(&mut state, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed.as_secs_f64()));
    Ok(())
}

fn run_all_positions(depth: u8) -> Result<(), GameError> {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, line) in TEST_LINES {
        let mut state = setup(line)?;

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let rate = nps(nodes, elapsed.as_secs_f64());
        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({rate:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = nps(total_nodes, total_time.as_secs_f64());
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
    Ok(())
}
