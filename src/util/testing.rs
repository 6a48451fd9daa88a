use std::env;
use std::io::Cursor;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::TreeNode;
use crate::infrastructure::TerminalConsole;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let module_filter = filter_fn(|metadata| metadata.target().starts_with("guesstree"));

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Console fed from a fixed script, capturing everything it prints.
pub type ScriptedConsole = TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// One reply per entry, in the order the game asks.
pub fn scripted_console(replies: &[&str]) -> ScriptedConsole {
    let mut input = replies.join("\n");
    input.push('\n');
    TerminalConsole::new(Cursor::new(input.into_bytes()), Vec::new())
}

pub fn console_output(console: ScriptedConsole) -> String {
    String::from_utf8_lossy(&console.into_output()).into_owned()
}

/// The cats tree, indented with four spaces per level.
pub fn cats_lines() -> Vec<&'static str> {
    vec![
        "Is it one of Tayloe's cats?",
        "    Is the cat black?",
        "        Sasha",
        "        Is the cat white?",
        "            Lexicon",
        "            Mercury",
        "    Garfield",
    ]
}

/// `Q` with answer `A` on yes and question `Is it B?` (C / D) on no.
pub fn sample_tree() -> TreeNode {
    TreeNode::question(
        "Q",
        TreeNode::answer("A"),
        TreeNode::question("Is it B?", TreeNode::answer("C"), TreeNode::answer("D")),
    )
}

// test
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Console;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn given_script_when_asking_then_replies_in_order() {
        let mut console = scripted_console(&["y", "Felix"]);
        assert!(console.ask_yes_no("Cat?").unwrap());
        assert_eq!(console.ask_line("Name?").unwrap(), "Felix");
        assert!(console_output(console).contains("Name?"));
    }
}
