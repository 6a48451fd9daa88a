//! A game session: rounds repeated over one tree until the player stops.

use tracing::{info, instrument};

use crate::application::services::player::{GamePlayer, RoundOutcome};
use crate::application::services::strategy::GameMode;
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{collect_answers_in_order, TreeNode};
use crate::infrastructure::Console;

/// Tally of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub learned: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        match outcome {
            RoundOutcome::Won { .. } => self.wins += 1,
            RoundOutcome::Lost { .. } => self.losses += 1,
            RoundOutcome::Learned { .. } => {
                self.losses += 1;
                self.learned += 1;
            }
        }
    }
}

/// Owns the tree root for the duration of play.
#[derive(Debug)]
pub struct GameSession {
    root: TreeNode,
    player: GamePlayer,
}

impl GameSession {
    pub fn new(root: TreeNode, mode: GameMode) -> Self {
        Self::with_player(root, GamePlayer::for_mode(mode))
    }

    pub fn with_player(root: TreeNode, player: GamePlayer) -> Self {
        Self { root, player }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn into_root(self) -> TreeNode {
        self.root
    }

    /// What the game currently knows, in leaf order.
    pub fn answers(&self) -> Vec<String> {
        collect_answers_in_order(&self.root)
    }

    pub fn print_answers(&self, console: &mut dyn Console) -> ApplicationResult<()> {
        console
            .say("The possible answers are:")
            .with_context("print answers")?;
        for answer in self.answers() {
            console.say(&answer).with_context("print answers")?;
        }
        Ok(())
    }

    pub fn play_round(&mut self, console: &mut dyn Console) -> ApplicationResult<RoundOutcome> {
        self.player.play_round(&mut self.root, console)
    }

    /// Play rounds until the player declines another one.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, console: &mut dyn Console) -> ApplicationResult<SessionSummary> {
        console
            .say("Let's play 20 questions!")
            .with_context("greet")?;

        let mut summary = SessionSummary::default();
        loop {
            let outcome = self.play_round(console)?;
            summary.record(&outcome);

            let again = console
                .ask_yes_no("Play again? (yes/no)")
                .with_context("ask to play again")?;
            if !again {
                break;
            }
        }
        info!("session over: {:?}", summary);
        Ok(summary)
    }
}
