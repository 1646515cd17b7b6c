//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable play log per hand
    Text,
    /// One JSON object per hand
    Jsonl,
}
