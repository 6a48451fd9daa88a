//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::application::GameMode;

/// Play 20 Questions against a decision tree that learns from its mistakes
#[derive(Parser, Debug)]
#[command(name = "guesstree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tree file, one node per line, nesting by indentation (default: cats.txt)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Game variant
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Config file layered over the global one
    #[arg(short, long, value_hint = ValueHint::FilePath, env = "GUESSTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the tree as an outline and exit
    #[arg(long, conflicts_with = "answers")]
    pub show: bool,

    /// Print the known answers and exit
    #[arg(long)]
    pub answers: bool,

    /// Debug verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}
