//! Binary decision-tree node: a question with two branches or an answer leaf.

use std::fmt;

use crate::domain::error::{Branch, DomainError, DomainResult};

/// A node of the guessing tree.
///
/// A node is a *question* when both branches are present and an *answer*
/// when both are absent. The tree is a strict ownership hierarchy: every node
/// is owned by exactly one parent, or by the session when it is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Question or answer text
    pub text: String,
    /// Subtree followed on an affirmative reply
    pub yes_branch: Option<Box<TreeNode>>,
    /// Subtree followed on a negative reply
    pub no_branch: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create an answer leaf.
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            yes_branch: None,
            no_branch: None,
        }
    }

    /// Create a question with both branches set.
    pub fn question(text: impl Into<String>, yes: TreeNode, no: TreeNode) -> Self {
        Self {
            text: text.into(),
            yes_branch: Some(Box::new(yes)),
            no_branch: Some(Box::new(no)),
        }
    }

    pub fn is_answer(&self) -> bool {
        self.yes_branch.is_none() && self.no_branch.is_none()
    }

    pub fn is_question(&self) -> bool {
        self.yes_branch.is_some() && self.no_branch.is_some()
    }

    pub fn branch(&self, branch: Branch) -> Option<&TreeNode> {
        match branch {
            Branch::Yes => self.yes_branch.as_deref(),
            Branch::No => self.no_branch.as_deref(),
        }
    }

    pub fn branch_mut(&mut self, branch: Branch) -> Option<&mut TreeNode> {
        match branch {
            Branch::Yes => self.yes_branch.as_deref_mut(),
            Branch::No => self.no_branch.as_deref_mut(),
        }
    }

    /// Check the answer/question invariant for the whole subtree.
    ///
    /// Returns the first node (pre-order) that has exactly one branch.
    pub fn validate(&self) -> DomainResult<()> {
        match (&self.yes_branch, &self.no_branch) {
            (None, None) => Ok(()),
            (Some(yes), Some(no)) => {
                yes.validate()?;
                no.validate()
            }
            (Some(_), None) => Err(DomainError::InvalidTreeState {
                question: self.text.clone(),
                branch: Branch::No,
            }),
            (None, Some(_)) => Err(DomainError::InvalidTreeState {
                question: self.text.clone(),
                branch: Branch::Yes,
            }),
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_answer_when_checking_kind_then_is_answer_only() {
        let node = TreeNode::answer("Garfield");
        assert!(node.is_answer());
        assert!(!node.is_question());
        assert!(node.validate().is_ok());
    }

    #[test]
    fn given_question_when_selecting_branch_then_returns_matching_child() {
        let node = TreeNode::question(
            "Is it black?",
            TreeNode::answer("Sasha"),
            TreeNode::answer("Mercury"),
        );
        assert!(node.is_question());
        assert_eq!(node.branch(Branch::Yes).map(|n| n.text.as_str()), Some("Sasha"));
        assert_eq!(node.branch(Branch::No).map(|n| n.text.as_str()), Some("Mercury"));
    }

    #[test]
    fn given_node_with_one_branch_when_validating_then_reports_missing_branch() {
        let mut node = TreeNode::answer("Is it black?");
        node.yes_branch = Some(Box::new(TreeNode::answer("Sasha")));

        let nested = TreeNode::question("Is it a cat?", node, TreeNode::answer("Rex"));

        assert_eq!(
            nested.validate(),
            Err(DomainError::InvalidTreeState {
                question: "Is it black?".into(),
                branch: Branch::No,
            })
        );
    }
}
