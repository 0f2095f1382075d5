//! Command-line surface, parsed with clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cloudpoker",
    version,
    about = "Cloud-themed five-card draw poker"
)]
pub struct CloudPokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one five-round session
    Play {
        /// Deck seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// JSON card catalog (built-in deck when omitted)
        #[arg(long)]
        catalog: Option<String>,
        /// Rankings file to record the result in
        #[arg(long)]
        rankings: Option<String>,
        /// Append each scored round to this JSONL file
        #[arg(long)]
        log: Option<String>,
        /// Stand on every dealt hand without prompting
        #[arg(long)]
        auto: bool,
        /// Do not record the result in the rankings
        #[arg(long)]
        no_save: bool,
    },
    /// Deal and classify a single hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Check or import game codes
    Code {
        #[command(subcommand)]
        action: CodeAction,
    },
    /// Show the high-score table
    Rankings {
        #[arg(long)]
        rankings: Option<String>,
        /// Number of entries to show
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
        top: u16,
        /// Include per-round results
        #[arg(long)]
        detail: bool,
    },
    /// List every hand with its score
    Hands,
    /// Show resolved configuration and where each value came from
    Cfg,
}

#[derive(Subcommand, Debug)]
pub enum CodeAction {
    /// Check that a code is well-formed
    Validate { code: String },
    /// Add a code from another game to the rankings (unverified)
    Load {
        code: String,
        #[arg(long)]
        rankings: Option<String>,
    },
}
