//! Application services
//!
//! Services orchestrate domain logic against the I/O boundary traits.

pub mod loader;
pub mod player;
pub mod session;
pub mod strategy;

pub use loader::load_tree;
pub use player::{GamePlayer, RoundOutcome, RoundState};
pub use session::{GameSession, SessionSummary};
pub use strategy::{GameMode, IncorrectGuessHandler, LearnFromPlayer, ReportLoss};
