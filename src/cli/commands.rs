use std::path::Path;

use tracing::{debug, instrument};

use crate::application::{load_tree, GameSession};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{TreeNode, TreeNodeConvert};
use crate::infrastructure::{FileLineSource, TerminalConsole};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(cli)?;
    debug!("settings: {:?}", settings);

    output::info(&format!("Using file {}", settings.tree_file.display()));
    let root = _load(&settings)?;

    if cli.show {
        return _show(&root);
    }
    let session = GameSession::new(root, settings.mode);
    if cli.answers {
        return _answers(&session);
    }
    _play(session)
}

/// Config layers first, then command line arguments on top.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(file) = &cli.file {
        settings.tree_file = file.clone();
    }
    if let Some(mode) = cli.mode {
        settings.mode = mode;
    }
    Ok(settings)
}

#[instrument(skip_all, fields(file = %settings.tree_file.display()))]
fn _load(settings: &Settings) -> CliResult<TreeNode> {
    let path: &Path = &settings.tree_file;
    match load_tree(&FileLineSource::new(path), settings.parse_options()) {
        Ok(Some(root)) => Ok(root),
        Ok(None) => Err(CliError::EmptyTree(path.to_path_buf())),
        Err(e) if e.is_not_found() => Err(CliError::NotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

fn _show(root: &TreeNode) -> CliResult<()> {
    output::info(&root.to_tree_string());
    Ok(())
}

fn _answers(session: &GameSession) -> CliResult<()> {
    let mut console = TerminalConsole::stdio();
    session.print_answers(&mut console)?;
    Ok(())
}

#[instrument(skip_all)]
fn _play(mut session: GameSession) -> CliResult<()> {
    let mut console = TerminalConsole::stdio();
    session.print_answers(&mut console)?;

    let summary = session.run(&mut console)?;

    output::header(&format!(
        "{} round(s): {} won, {} lost, {} learned",
        summary.rounds, summary.wins, summary.losses, summary.learned
    ));
    if summary.learned > 0 {
        output::detail("learned answers are kept for this session only");
    }
    Ok(())
}
