//! I/O boundary traits for testability
//!
//! These traits abstract the two external collaborators of the game: where
//! tree lines come from, and the person answering questions.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::trace;

/// Ordered source of raw tree lines.
pub trait LineSource {
    /// Human-readable origin, used in messages.
    fn describe(&self) -> String;

    /// Read all lines, trailing whitespace stripped.
    fn read_lines(&self) -> io::Result<Vec<String>>;
}

/// Blocking request/response with the player.
pub trait Console {
    /// Ask until the reply normalizes to yes/y (true) or no/n (false).
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool>;

    /// Ask for a free-text line, returned trimmed.
    fn ask_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print a message.
    fn say(&mut self, message: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Tree lines from a text file.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(|l| l.trim_end().to_string()).collect())
    }
}

/// Tree lines held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLineSource {
    lines: Vec<String>,
}

impl MemoryLineSource {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().trim_end().to_string()).collect(),
        }
    }
}

impl LineSource for MemoryLineSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// Line-oriented console over any reader/writer pair.
///
/// `TerminalConsole::stdio()` talks to the terminal; tests drive it with a
/// `Cursor` and a `Vec<u8>`.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{}", msg.cyan())?;
        self.output.flush()
    }

    fn read_reply(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        trace!("reply: {:?}", buf.trim_end());
        Ok(buf.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        self.prompt(prompt)?;
        loop {
            match self.read_reply()?.to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => {
                    write!(self.output, "{} ", "Please answer yes or no.".yellow())?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn ask_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        self.read_reply()
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}
