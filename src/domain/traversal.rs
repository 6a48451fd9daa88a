//! Read-only walks over a guessing tree.

use termtree::Tree;
use tracing::instrument;

use crate::domain::error::Branch;
use crate::domain::node::TreeNode;

/// Every node's text, one per line: self, then yes-subtree, then no-subtree.
#[instrument(level = "trace", skip_all)]
pub fn serialize_pre_order(root: &TreeNode) -> String {
    let mut out = String::new();
    pre_order(root, &mut |node, _| {
        out.push_str(&node.text);
        out.push('\n');
    });
    out
}

/// Pre-order lines indented by `indent` spaces per level, readable by the parser.
pub fn serialize_indented(root: &TreeNode, indent: usize) -> String {
    let mut out = String::new();
    pre_order(root, &mut |node, depth| {
        out.push_str(&" ".repeat(depth * indent));
        out.push_str(&node.text);
        out.push('\n');
    });
    out
}

/// Answers in left-to-right leaf order (in-order walk emitting leaves only).
#[instrument(level = "trace", skip_all)]
pub fn collect_answers_in_order(root: &TreeNode) -> Vec<String> {
    fn walk(node: &TreeNode, answers: &mut Vec<String>) {
        if let Some(yes) = node.yes_branch.as_deref() {
            walk(yes, answers);
        }
        if node.is_answer() {
            answers.push(node.text.clone());
        }
        if let Some(no) = node.no_branch.as_deref() {
            walk(no, answers);
        }
    }

    let mut answers = Vec::new();
    walk(root, &mut answers);
    answers
}

/// Number of levels, a lone answer being 1.
pub fn depth(root: &TreeNode) -> usize {
    let yes = root.yes_branch.as_deref().map_or(0, depth);
    let no = root.no_branch.as_deref().map_or(0, depth);
    1 + yes.max(no)
}

pub fn count_answers(root: &TreeNode) -> usize {
    if root.is_answer() {
        return 1;
    }
    root.yes_branch.as_deref().map_or(0, count_answers)
        + root.no_branch.as_deref().map_or(0, count_answers)
}

fn pre_order<F: FnMut(&TreeNode, usize)>(root: &TreeNode, visit: &mut F) {
    fn walk<F: FnMut(&TreeNode, usize)>(node: &TreeNode, depth: usize, visit: &mut F) {
        visit(node, depth);
        if let Some(yes) = node.yes_branch.as_deref() {
            walk(yes, depth + 1, visit);
        }
        if let Some(no) = node.no_branch.as_deref() {
            walk(no, depth + 1, visit);
        }
    }
    walk(root, 0, visit);
}

/// Outline rendering for terminal display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeNode {
    fn to_tree_string(&self) -> Tree<String> {
        fn build(node: &TreeNode, label: String) -> Tree<String> {
            let leaves: Vec<Tree<String>> = [Branch::Yes, Branch::No]
                .into_iter()
                .filter_map(|b| node.branch(b).map(|child| build(child, format!("{}: {}", b, child.text))))
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        build(self, self.text.clone())
    }
}
