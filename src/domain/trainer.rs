//! Learning from a wrong guess by restructuring the failed leaf in place.

use tracing::{info, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::TreeNode;

/// Turn answer leaf `leaf` into `question` with two answer children.
///
/// The new answer goes on the yes-branch when `answer_is_yes`, the old
/// answer on the other one. The node itself is rewritten rather than
/// replaced, so whoever owns it (a parent branch or the session root) needs
/// no update.
#[instrument(level = "debug", skip_all, fields(leaf = %leaf.text, answer_is_yes = answer_is_yes))]
pub fn train(
    leaf: &mut TreeNode,
    new_answer: impl Into<String>,
    question: impl Into<String>,
    answer_is_yes: bool,
) -> DomainResult<()> {
    if !leaf.is_answer() {
        return Err(DomainError::NotAnAnswer {
            text: leaf.text.clone(),
        });
    }

    let learned = TreeNode::answer(new_answer);
    let question = question.into();
    let previous = TreeNode::answer(std::mem::replace(&mut leaf.text, question));

    let (yes, no) = if answer_is_yes {
        (learned, previous)
    } else {
        (previous, learned)
    };
    leaf.yes_branch = Some(Box::new(yes));
    leaf.no_branch = Some(Box::new(no));

    info!("learned {:?}", leaf.text);
    Ok(())
}
