//! A game plus its cursor, driven by `Command`s.

use log::debug;
use serde::{Deserialize, Serialize};

use super::command::Command;
use super::klondike::Game;
use crate::core::{GameConfig, GameError};
use crate::selection::SelectionController;

/// Result of applying one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    /// This command won the game.
    Won,
    Quit,
}

/// The engine as an input layer sees it.
#[derive(Clone, Debug)]
pub struct Session {
    game: Game,
    selection: SelectionController,
}

impl Session {
    /// Deal a new game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_game(Game::new(config))
    }

    #[must_use]
    pub fn from_game(game: Game) -> Self {
        let mut selection = SelectionController::new();
        selection.normalize(game.board());
        Self { game, selection }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Direct engine access. The selection is reset on the next engine command.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Apply one command.
    ///
    /// Errors are rejections: the game is unchanged and the session stays
    /// usable.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GameError> {
        let moves_before = self.game.move_count();
        let result = match command {
            Command::MoveCursor(direction) => {
                self.selection.move_cursor(self.game.board(), direction);
                Ok(())
            }
            Command::Select => self.selection.select(&mut self.game),
            Command::Cancel => {
                self.selection.cancel();
                Ok(())
            }
            Command::Draw => self.game.draw().map(drop),
            Command::Undo => self.game.undo(),
            Command::Redo => self.game.redo(),
            Command::AutoComplete => {
                self.game.auto_complete();
                Ok(())
            }
            Command::AutoMove => self.game.auto_move_card(self.selection.cursor()).map(drop),
            Command::Quit => {
                debug!("Quit after {} moves", self.game.move_count());
                return Ok(Outcome::Quit);
            }
        };

        if command.acts_on_engine() {
            self.selection.reset(self.game.board());
        }

        result?;

        // Only a command that just moved cards can finish the game.
        let moved = self.game.move_count() != moves_before;
        let was_won = self.game.is_won();
        let won_now = command.can_complete_game()
            && moved
            && self.game.check_win_condition()
            && !was_won;

        Ok(if won_now { Outcome::Won } else { Outcome::Continue })
    }
}
