//! Infrastructure layer: I/O implementations
//!
//! This layer implements the I/O boundary traits the game runs against.

pub mod traits;

pub use traits::{Console, FileLineSource, LineSource, MemoryLineSource, TerminalConsole};
