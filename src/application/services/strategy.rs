//! What happens after a wrong guess: the difference between game variants.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::services::player::RoundOutcome;
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{train, TreeNode};
use crate::infrastructure::Console;

/// Game variant, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Report the loss and move on
    Classic,
    /// Ask the player what they meant and extend the tree
    #[default]
    Learning,
}

impl GameMode {
    pub fn handler(self) -> Box<dyn IncorrectGuessHandler> {
        match self {
            GameMode::Classic => Box::new(ReportLoss),
            GameMode::Learning => Box::new(LearnFromPlayer),
        }
    }
}

/// Hook invoked when the player rejects the guess at `leaf`.
pub trait IncorrectGuessHandler {
    fn on_incorrect_guess(
        &mut self,
        leaf: &mut TreeNode,
        console: &mut dyn Console,
    ) -> ApplicationResult<RoundOutcome>;
}

/// Base variant: the round is simply lost.
#[derive(Debug, Default)]
pub struct ReportLoss;

impl IncorrectGuessHandler for ReportLoss {
    fn on_incorrect_guess(
        &mut self,
        leaf: &mut TreeNode,
        console: &mut dyn Console,
    ) -> ApplicationResult<RoundOutcome> {
        console
            .say("Oh no, I guessed wrong.")
            .with_context("report loss")?;
        Ok(RoundOutcome::Lost {
            guess: leaf.text.clone(),
        })
    }
}

/// Learning variant: asks for the right answer and a distinguishing question.
#[derive(Debug, Default)]
pub struct LearnFromPlayer;

impl LearnFromPlayer {
    fn ask_non_empty(console: &mut dyn Console, prompt: &str) -> ApplicationResult<String> {
        loop {
            let reply = console.ask_line(prompt).with_context("read training input")?;
            if !reply.is_empty() {
                return Ok(reply);
            }
        }
    }
}

impl IncorrectGuessHandler for LearnFromPlayer {
    #[instrument(level = "debug", skip_all, fields(guess = %leaf.text))]
    fn on_incorrect_guess(
        &mut self,
        leaf: &mut TreeNode,
        console: &mut dyn Console,
    ) -> ApplicationResult<RoundOutcome> {
        console.say("Oh no, Sorry.").with_context("report loss")?;

        let answer = Self::ask_non_empty(console, "What were you thinking of?")?;
        let question = Self::ask_non_empty(
            console,
            "Please enter a yes/no question that leads to that answer",
        )?;
        let answer_is_yes = console
            .ask_yes_no("Is the answer to your question yes?")
            .with_context("read training answer")?;
        debug!(%answer, %question, answer_is_yes, "training");

        let guess = leaf.text.clone();
        train(leaf, answer.clone(), question, answer_is_yes)?;
        Ok(RoundOutcome::Learned { guess, answer })
    }
}
