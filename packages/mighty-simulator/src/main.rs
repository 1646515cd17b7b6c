//! Mighty simulator CLI - plays seeded hands with random legal moves.
//!
//! Useful as a smoke test for the rule engine and for eyeballing play logs.

mod output;
mod seeds;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use mighty_engine::{Card, HandConfig, PlayerId, Trump};
use output::OutputWriter;
use simulator::{HandResult, Side, Simulator};
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "mighty-simulator")]
#[command(about = "Play Mighty hands with random legal moves")]
struct Args {
    /// Number of hands to simulate
    #[arg(long, default_value = "1")]
    hands: u32,

    /// Run seed (for deterministic runs); random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer seat (0-4)
    #[arg(long, default_value = "0")]
    dealer: PlayerId,

    /// Trump: S, D, H, C or NT
    #[arg(long, default_value = "S", value_parser = parse_trump)]
    trump: Trump,

    /// Declarer seat (0-4)
    #[arg(long, default_value = "0")]
    declarer: PlayerId,

    /// Friend card id, e.g. SK or JOKER
    #[arg(long, value_parser = parse_card)]
    friend_card: Option<Card>,

    /// Contract; defaults to the minimum (13, or 12 in NoTrump)
    #[arg(long)]
    bid_level: Option<u8>,

    /// JSON hand config file; replaces the individual hand flags
    #[arg(long, conflicts_with_all = ["dealer", "trump", "declarer", "friend_card", "bid_level"])]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    output_format: OutputFormat,

    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_trump(s: &str) -> Result<Trump, String> {
    s.parse().map_err(|e: mighty_engine::DomainError| e.to_string())
}

fn parse_card(s: &str) -> Result<Card, String> {
    s.parse().map_err(|e: mighty_engine::DomainError| e.to_string())
}

fn hand_config(args: &Args) -> Result<HandConfig, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => HandConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => {
            let mut config = HandConfig::new(args.dealer, args.trump, args.declarer);
            config.friend_card = args.friend_card;
            config.bid_level = args.bid_level;
            config.validate()?;
            config
        }
    };
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = hand_config(&args)?;
    let run_seed = args.seed.unwrap_or_else(rand::random);
    info!(run_seed, hands = args.hands, "starting simulation");

    let mut output_writer = OutputWriter::new(args.output.as_deref(), args.output_format.clone())?;
    let simulator = Simulator::new(run_seed);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for hand_no in 1..=args.hands {
        match simulator.simulate_hand(hand_no, &config) {
            Ok(result) => {
                if let Err(e) = output_writer.write_hand(&result) {
                    warn!("Failed to write result for hand {}: {}", hand_no, e);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Hand {} failed: {}", hand_no, e);
            }
        }
    }

    if let Some(path) = output_writer.output_path() {
        info!("Results written to: {}", path.display());
    }
    output_writer.finish()?;

    if args.hands > 1 {
        print_summary(&results, errors, start.elapsed(), args.hands);
    }

    Ok(())
}

fn print_summary(results: &[HandResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Hands completed: {}/{}", results.len(), total);
    if errors > 0 {
        eprintln!("Errors: {}", errors);
    }
    eprintln!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }

    let declarer_wins = results
        .iter()
        .filter(|r| r.winner_side == Side::Declarer)
        .count();
    let avg_tricks = results
        .iter()
        .map(|r| r.result.declarer_side_tricks as f64)
        .sum::<f64>()
        / results.len() as f64;
    eprintln!(
        "Declarer wins: {} ({:.1}%), defense wins: {}",
        declarer_wins,
        declarer_wins as f64 / results.len() as f64 * 100.0,
        results.len() - declarer_wins
    );
    eprintln!("Average declarer-side tricks: {:.2}", avg_tricks);
}
