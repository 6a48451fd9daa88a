//! Domain layer: the decision tree and the operations on it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod parser;
pub mod trainer;
pub mod traversal;

pub use error::{Branch, DomainError, DomainResult};
pub use node::TreeNode;
pub use parser::{indent_depth, parse, ParseOptions, ParseReport, TreeParser, DEFAULT_TAB_WIDTH};
pub use trainer::train;
pub use traversal::{
    collect_answers_in_order, count_answers, depth, serialize_indented, serialize_pre_order,
    TreeNodeConvert,
};
