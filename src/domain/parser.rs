//! Indentation-driven recursive descent from text lines to a `TreeNode`.
//!
//! Lines are in pre-order: a question, then its full yes-subtree, then its
//! full no-subtree. A line is a child of the previous line when it is
//! indented strictly deeper.

use tracing::{debug, instrument, trace, warn};

use crate::domain::node::TreeNode;

/// Tab stop used when no width is configured.
pub const DEFAULT_TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// A tab advances the indentation column to the next multiple of this
    pub tab_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// What the parser had to tolerate while building a best-effort tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Non-empty lines left over once the root's subtree was complete
    pub unconsumed: usize,
    /// Questions that ran out of input before their no-subtree
    pub dangling: usize,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.unconsumed == 0 && self.dangling == 0
    }
}

/// Indentation column of a line: spaces count one, tabs jump to the next tab stop.
pub fn indent_depth(line: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    line.chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .fold(0, |col, c| match c {
            '\t' => (col / tab_width + 1) * tab_width,
            _ => col + 1,
        })
}

#[derive(Debug)]
struct Line<'a> {
    depth: usize,
    text: &'a str,
}

/// Position of the next unread line, threaded through the recursion.
#[derive(Debug, Default)]
struct Cursor {
    pos: usize,
}

#[derive(Debug, Default, Clone)]
pub struct TreeParser {
    options: ParseOptions,
}

impl TreeParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse lines into a tree; `None` when there is no non-empty line.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Option<TreeNode> {
        self.parse_with_report(lines).0
    }

    #[instrument(level = "debug", skip_all, fields(lines = lines.len()))]
    pub fn parse_with_report<S: AsRef<str>>(&self, lines: &[S]) -> (Option<TreeNode>, ParseReport) {
        let lines: Vec<Line<'_>> = lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|l| !l.trim().is_empty())
            .map(|l| Line {
                depth: indent_depth(l, self.options.tab_width),
                text: l.trim(),
            })
            .collect();

        let mut cursor = Cursor::default();
        let mut report = ParseReport::default();
        let root = self.parse_subtree(&lines, &mut cursor, &mut report);

        report.unconsumed = lines.len() - cursor.pos;
        if report.unconsumed > 0 {
            warn!(
                "ignoring {} line(s) after the tree, starting at {:?}",
                report.unconsumed, lines[cursor.pos].text
            );
        }
        debug!("parsed {} node(s), report: {:?}", cursor.pos, report);
        (root, report)
    }

    fn parse_subtree(
        &self,
        lines: &[Line<'_>],
        cursor: &mut Cursor,
        report: &mut ParseReport,
    ) -> Option<TreeNode> {
        let line = lines.get(cursor.pos)?;
        cursor.pos += 1;
        let mut node = TreeNode::answer(line.text);

        // Answer: end of input, or the next line is not nested under this one
        match lines.get(cursor.pos) {
            Some(next) if next.depth > line.depth => {}
            _ => {
                trace!("answer {:?} at depth {}", line.text, line.depth);
                return Some(node);
            }
        }

        trace!("question {:?} at depth {}", line.text, line.depth);
        node.yes_branch = self.parse_subtree(lines, cursor, report).map(Box::new);
        node.no_branch = self.parse_subtree(lines, cursor, report).map(Box::new);
        if node.no_branch.is_none() {
            warn!("question {:?} has no no-branch: input ended", line.text);
            report.dangling += 1;
        }
        Some(node)
    }
}

/// Parse with default options.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Option<TreeNode> {
    TreeParser::default().parse(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Garfield", 0)]
    #[case("  Garfield", 2)]
    #[case("\tGarfield", 4)]
    #[case("  \tGarfield", 4)]
    #[case("\t  Garfield", 6)]
    #[case("    \tGarfield", 8)]
    #[case("", 0)]
    fn given_line_when_counting_indent_then_expands_tabs_to_stops(
        #[case] line: &str,
        #[case] expected: usize,
    ) {
        assert_eq!(indent_depth(line, 4), expected);
    }

    #[test]
    fn given_zero_tab_width_when_counting_indent_then_treats_tab_as_one_column() {
        assert_eq!(indent_depth("\t\tx", 0), 2);
    }

    #[test]
    fn given_nested_lines_when_parsing_then_builds_yes_then_no() {
        let lines = ["Q", "  A", "  Is it B?", "    C", "    D"];
        let root = parse(&lines).expect("tree");

        assert_eq!(root.text, "Q");
        let yes = root.yes_branch.as_deref().expect("yes");
        let no = root.no_branch.as_deref().expect("no");
        assert_eq!(yes, &TreeNode::answer("A"));
        assert_eq!(no.text, "Is it B?");
        assert_eq!(no.yes_branch.as_deref(), Some(&TreeNode::answer("C")));
        assert_eq!(no.no_branch.as_deref(), Some(&TreeNode::answer("D")));
    }

    #[test]
    fn given_blank_lines_when_parsing_then_skips_them() {
        let lines = ["Q", "", "  A", "   ", "  B", ""];
        let (root, report) = TreeParser::default().parse_with_report(&lines);
        assert_eq!(
            root,
            Some(TreeNode::question("Q", TreeNode::answer("A"), TreeNode::answer("B")))
        );
        assert!(report.is_clean());
    }

    #[test]
    fn given_trailing_top_level_line_when_parsing_then_reports_unconsumed() {
        let lines = ["Q", "  A", "  B", "Stray"];
        let (root, report) = TreeParser::default().parse_with_report(&lines);
        assert!(root.is_some_and(|r| r.is_question()));
        assert_eq!(report.unconsumed, 1);
        assert_eq!(report.dangling, 0);
    }

    #[test]
    fn given_truncated_question_when_parsing_then_reports_dangling() {
        let lines = ["Q", "  A"];
        let (root, report) = TreeParser::default().parse_with_report(&lines);
        let root = root.expect("tree");
        assert!(root.no_branch.is_none());
        assert_eq!(report.dangling, 1);
        assert!(root.validate().is_err());
    }
}
