//! Loading a guessing tree from a line source.

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{count_answers, depth, ParseOptions, TreeNode, TreeParser};
use crate::infrastructure::LineSource;

/// Read and parse a tree.
///
/// `Ok(None)` means the source had no non-empty line. A tree that does not
/// satisfy the question/answer invariant (truncated input) is rejected with
/// `MalformedTree`; other indentation quirks are parsed permissively.
#[instrument(level = "debug", skip_all, fields(origin = %source.describe()))]
pub fn load_tree<S: LineSource + ?Sized>(
    source: &S,
    options: ParseOptions,
) -> ApplicationResult<Option<TreeNode>> {
    let lines = source
        .read_lines()
        .map_err(|e| ApplicationError::SourceUnavailable {
            origin: source.describe(),
            source: e,
        })?;
    debug!("read {} line(s)", lines.len());

    let (root, report) = TreeParser::new(options).parse_with_report(&lines);
    let Some(root) = root else {
        info!("{} holds no tree", source.describe());
        return Ok(None);
    };

    root.validate()
        .map_err(|e| ApplicationError::MalformedTree {
            origin: source.describe(),
            source: e,
        })?;
    info!(
        "loaded {} answer(s), depth {}, from {} ({} line(s) ignored)",
        count_answers(&root),
        depth(&root),
        source.describe(),
        report.unconsumed
    );
    Ok(Some(root))
}
