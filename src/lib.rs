//! 20 Questions over a binary decision tree read from an indented text file.
//!
//! Layers, innermost first: `domain` (tree, parser, traversal, trainer),
//! `application` (rounds, variants, sessions), `infrastructure` (file and
//! console I/O), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
