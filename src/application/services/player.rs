//! One round of play: walk from the root to a leaf and confirm the guess.

use tracing::{debug, instrument, trace};

use crate::application::services::strategy::{GameMode, IncorrectGuessHandler};
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Branch, DomainError, TreeNode};
use crate::infrastructure::Console;

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The guess was confirmed.
    Won { answer: String },
    /// The guess was rejected and nothing was learned.
    Lost { guess: String },
    /// The guess was rejected and the tree now knows `answer`.
    Learned { guess: String, answer: String },
}

/// Round state; the borrowed node is the current position in the tree.
#[derive(Debug)]
pub enum RoundState<'t> {
    Questioning(&'t mut TreeNode),
    Confirming(&'t mut TreeNode),
    Done(RoundOutcome),
}

/// Drives rounds; the incorrect-guess handler picks the game variant.
pub struct GamePlayer {
    on_incorrect_guess: Box<dyn IncorrectGuessHandler>,
}

impl GamePlayer {
    pub fn new(on_incorrect_guess: Box<dyn IncorrectGuessHandler>) -> Self {
        Self { on_incorrect_guess }
    }

    pub fn for_mode(mode: GameMode) -> Self {
        Self::new(mode.handler())
    }

    /// Play one round starting at `root`. Training, if any, mutates `root`'s subtree.
    #[instrument(level = "debug", skip_all, fields(root = %root.text))]
    pub fn play_round(
        &mut self,
        root: &mut TreeNode,
        console: &mut dyn Console,
    ) -> ApplicationResult<RoundOutcome> {
        let mut state = RoundState::Questioning(root);
        loop {
            state = match state {
                RoundState::Done(outcome) => {
                    debug!("round finished: {:?}", outcome);
                    return Ok(outcome);
                }
                state => self.step(state, console)?,
            };
        }
    }

    /// Advance the round by one transition.
    pub fn step<'t>(
        &mut self,
        state: RoundState<'t>,
        console: &mut dyn Console,
    ) -> ApplicationResult<RoundState<'t>> {
        match state {
            RoundState::Questioning(node) if node.is_answer() => Ok(RoundState::Confirming(node)),
            RoundState::Questioning(node) => {
                let reply = console
                    .ask_yes_no(&format!("{} (yes/no)", node.text))
                    .with_context("ask question")?;
                let branch = Branch::from_reply(reply);
                trace!("{:?} -> {}", node.text, branch);

                let question = node.text.clone();
                let next = node
                    .branch_mut(branch)
                    .ok_or(DomainError::InvalidTreeState { question, branch })?;
                Ok(RoundState::Questioning(next))
            }
            RoundState::Confirming(leaf) => {
                let correct = console
                    .ask_yes_no(&format!("Is it {}? (yes/no)", leaf.text))
                    .with_context("confirm guess")?;
                if correct {
                    console.say("Right!!").with_context("report win")?;
                    return Ok(RoundState::Done(RoundOutcome::Won {
                        answer: leaf.text.clone(),
                    }));
                }
                let outcome = self.on_incorrect_guess.on_incorrect_guess(leaf, console)?;
                Ok(RoundState::Done(outcome))
            }
            done @ RoundState::Done(_) => Ok(done),
        }
    }
}

impl std::fmt::Debug for GamePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GamePlayer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::util::testing::{console_output, sample_tree, scripted_console};

    #[test]
    fn given_yes_path_when_guess_confirmed_then_wins() {
        let mut tree = sample_tree();
        let mut console = scripted_console(&["y", "y"]);
        let outcome = GamePlayer::for_mode(GameMode::Classic)
            .play_round(&mut tree, &mut console)
            .unwrap();

        assert_eq!(outcome, RoundOutcome::Won { answer: "A".into() });
        assert_eq!(tree, sample_tree());
        let output = console_output(console);
        assert!(output.contains("Q (yes/no)"));
        assert!(output.contains("Is it A? (yes/no)"));
        assert!(output.contains("Right!!"));
    }

    #[test]
    fn given_classic_mode_when_guess_rejected_then_loses_without_changing_tree() {
        let mut tree = sample_tree();
        let mut console = scripted_console(&["n", "yes", "no"]);
        let outcome = GamePlayer::for_mode(GameMode::Classic)
            .play_round(&mut tree, &mut console)
            .unwrap();

        assert_eq!(outcome, RoundOutcome::Lost { guess: "C".into() });
        assert_eq!(tree, sample_tree());
    }

    #[test]
    fn given_states_when_stepping_then_walks_questioning_confirming_done() {
        let mut tree = sample_tree();
        let mut console = scripted_console(&["no", "no", "yes"]);
        let mut player = GamePlayer::for_mode(GameMode::Classic);

        let state = player.step(RoundState::Questioning(&mut tree), &mut console).unwrap();
        assert!(matches!(&state, RoundState::Questioning(n) if n.text == "Is it B?"));
        let state = player.step(state, &mut console).unwrap();
        assert!(matches!(&state, RoundState::Questioning(n) if n.text == "D"));
        let state = player.step(state, &mut console).unwrap();
        assert!(matches!(&state, RoundState::Confirming(n) if n.text == "D"));
        let state = player.step(state, &mut console).unwrap();
        assert!(matches!(state, RoundState::Done(RoundOutcome::Won { .. })));
    }

    #[test]
    fn given_question_missing_branch_when_played_into_then_fails_with_invalid_state() {
        let mut tree = TreeNode::answer("Q");
        tree.yes_branch = Some(Box::new(TreeNode::answer("A")));
        let mut console = scripted_console(&["no"]);

        let err = GamePlayer::for_mode(GameMode::Learning)
            .play_round(&mut tree, &mut console)
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidTreeState { branch: Branch::No, .. })
        ));
    }
}
