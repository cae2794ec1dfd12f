//! Klondike game controller.
//!
//! `Game` owns the live `GameState`, the undo/redo `History`, and the deal
//! RNG. Every mutating operation follows the same discipline:
//!
//! 1. validate against the current state (no side effects on failure);
//! 2. `History::save_state` with the pre-mutation state;
//! 3. mutate, then count the move.
//!
//! Operations return `Result`; a rejected move leaves the game untouched.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::{
    Cell, GameConfig, GameError, GameRng, GameState, MoveError, Position, Source,
    TABLEAU_COLUMNS,
};
use crate::history::History;
use crate::piles::{deal, Board, DECK_SIZE};
use crate::rules::{
    check_foundation_placement, check_tableau_move, foundation_move_allowed, tableau_move_allowed,
};
use crate::selection::PlaySurface;

/// What a `draw()` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// Turned this many cards from stock to waste.
    Drew(usize),
    /// Stock was empty; this many waste cards went back to the stock.
    Recycled(usize),
    /// Stock and waste were both empty. Nothing changed.
    Empty,
}

/// Where `auto_move_card` sent the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoMove {
    Foundation(Suit),
    Tableau(usize),
}

/// A Klondike game: state, history, and the operations on them.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    /// State at the start of the current deal, for `restart`.
    initial: GameState,
    state: GameState,
    history: History,
}

impl Game {
    /// Create a game and deal it.
    ///
    /// Uses `config.seed` if set, otherwise a random seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut game = Self {
            initial: GameState::default(),
            config,
            rng,
            state: GameState::default(),
            history: History::new(),
        };
        game.initialize();
        game
    }

    /// Create a game from an arbitrary position, without dealing.
    ///
    /// `restart` returns to this position.
    #[must_use]
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let state = GameState::new(board);
        Self {
            initial: state.clone(),
            config,
            rng,
            state,
            history: History::new(),
        }
    }

    /// Shuffle and deal the next deal from this game's RNG.
    ///
    /// Clears history.
    pub fn initialize(&mut self) {
        self.state = GameState::new(deal(&mut self.rng));
        self.initial = self.state.clone();
        self.history.clear();
        info!("Dealt new game (seed {})", self.rng.seed());
    }

    /// Return to the start of the current deal and clear history.
    pub fn restart(&mut self) {
        self.state = self.initial.clone();
        self.history.clear();
        info!("Restarted deal (seed {})", self.rng.seed());
    }

    /// Replace the deal with one from a fresh random seed.
    pub fn new_game(&mut self) {
        self.rng = GameRng::from_entropy();
        self.initialize();
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the deal RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.won
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    /// Cards on foundations.
    #[must_use]
    pub fn score(&self) -> usize {
        self.state.board.score()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// True once nothing is hidden and nothing is left to draw, so
    /// `auto_complete` is guaranteed to finish the game.
    #[must_use]
    pub fn can_auto_complete(&self) -> bool {
        let board = &self.state.board;
        board.stock.is_empty()
            && board.waste.is_empty()
            && board.score() < DECK_SIZE
            && board
                .tableau
                .iter()
                .all(|column| column.iter().all(Card::is_face_up))
    }

    // === Mutations ===

    fn save_state(&mut self) {
        self.history.save_state(&self.state);
    }

    /// Turn cards from the stock onto the waste, or recycle the waste when
    /// the stock is empty.
    pub fn draw(&mut self) -> Result<DrawOutcome, GameError> {
        let board = &self.state.board;
        if board.stock.is_empty() && board.waste.is_empty() {
            trace!("Draw with empty stock and waste");
            return Ok(DrawOutcome::Empty);
        }

        self.save_state();
        let board = &mut self.state.board;

        let outcome = if board.stock.is_empty() {
            let count = board.waste.len();
            board.stock = board
                .waste
                .iter()
                .rev()
                .map(|card| {
                    let mut card = *card;
                    card.flip_down();
                    card
                })
                .collect();
            board.waste.clear();
            DrawOutcome::Recycled(count)
        } else {
            let count = self.config.draw_mode.count().min(board.stock.len());
            for _ in 0..count {
                if let Some(mut card) = board.stock.pop_back() {
                    card.flip_up();
                    board.waste.push_back(card);
                }
            }
            DrawOutcome::Drew(count)
        };

        self.state.record_move();
        debug!("Draw: {:?}", outcome);
        Ok(outcome)
    }

    /// Move the run starting at `from` onto column `to`.
    pub fn move_tableau_to_tableau(&mut self, from: Cell, to: usize) -> Result<(), GameError> {
        if from.column >= TABLEAU_COLUMNS || to >= TABLEAU_COLUMNS {
            return Err(MoveError::InvalidPosition.into());
        }
        if from.column == to {
            return Err(MoveError::SameColumnMove.into());
        }

        let board = &self.state.board;
        let card = match board.card_at(from.column, from.row) {
            Some(card) => *card,
            None if board.column(from.column).is_empty() => {
                return Err(MoveError::EmptySource.into())
            }
            None => return Err(MoveError::InvalidPosition.into()),
        };
        if !card.is_face_up() {
            return Err(MoveError::FaceDownSource.into());
        }
        if let Err(reason) = check_tableau_move(&card, board.column_top(to)) {
            trace!("Rejected {} from {} to T{}: {}", card, from, to, reason);
            return Err(reason.into());
        }

        self.save_state();
        let board = &mut self.state.board;
        let run = board.take_run(from.column, from.row);
        let count = run.len();
        board.tableau[to].append(run);
        let revealed = board.reveal_top(from.column);
        self.state.record_move();

        debug!(
            "Moved {} card(s) from {} to T{} (revealed: {})",
            count, from, to, revealed
        );
        debug_assert!(self.state.board.tableau_is_well_formed());
        Ok(())
    }

    /// Move the top waste card onto column `to`.
    pub fn move_waste_to_tableau(&mut self, to: usize) -> Result<(), GameError> {
        if to >= TABLEAU_COLUMNS {
            return Err(MoveError::InvalidPosition.into());
        }

        let board = &self.state.board;
        let card = *board.waste_top().ok_or(MoveError::EmptySource)?;
        if let Err(reason) = check_tableau_move(&card, board.column_top(to)) {
            trace!("Rejected {} from waste to T{}: {}", card, to, reason);
            return Err(reason.into());
        }

        self.save_state();
        let board = &mut self.state.board;
        if let Some(card) = board.waste.pop_back() {
            board.tableau[to].push_back(card);
        }
        self.state.record_move();

        debug!("Moved {} from waste to T{}", card, to);
        Ok(())
    }

    /// Move the top card of `source` onto the foundation for its suit.
    ///
    /// Returns the foundation's suit.
    pub fn move_to_foundation(&mut self, source: Source) -> Result<Suit, GameError> {
        let board = &self.state.board;
        let card = match source {
            Source::Waste => *board.waste_top().ok_or(MoveError::EmptySource)?,
            Source::Tableau(column) if column >= TABLEAU_COLUMNS => {
                return Err(MoveError::InvalidPosition.into())
            }
            Source::Tableau(column) => *board.column_top(column).ok_or(MoveError::EmptySource)?,
        };
        if !card.is_face_up() {
            return Err(MoveError::FaceDownSource.into());
        }
        if let Err(reason) = check_foundation_placement(board, &card) {
            trace!("Rejected {} from {} to foundation: {}", card, source, reason);
            return Err(reason.into());
        }

        self.save_state();
        let board = &mut self.state.board;
        let taken = match source {
            Source::Waste => board.waste.pop_back(),
            Source::Tableau(column) => board.tableau[column].pop_back(),
        };
        if let Some(taken) = taken {
            board.foundations[taken.suit()].push_back(taken);
        }
        if let Source::Tableau(column) = source {
            board.reveal_top(column);
        }
        self.state.record_move();

        debug!("Moved {} from {} to foundation", card, source);
        Ok(card.suit())
    }

    /// Step back one action.
    pub fn undo(&mut self) -> Result<(), GameError> {
        self.history.undo(&mut self.state)?;
        debug!("Undo (depth {})", self.history.undo_depth());
        Ok(())
    }

    /// Re-apply one undone action.
    pub fn redo(&mut self) -> Result<(), GameError> {
        self.history.redo(&mut self.state)?;
        debug!("Redo (depth {})", self.history.redo_depth());
        Ok(())
    }

    /// First top card, scanning columns left to right and then the waste,
    /// that its foundation accepts.
    fn next_foundation_candidate(&self) -> Option<Source> {
        let board = &self.state.board;
        let eligible = |card: &Card| {
            card.is_face_up() && foundation_move_allowed(card, board.foundation(card.suit()).last())
        };

        (0..TABLEAU_COLUMNS)
            .find(|&column| board.column_top(column).is_some_and(eligible))
            .map(Source::Tableau)
            .or_else(|| board.waste_top().filter(|&card| eligible(card)).map(|_| Source::Waste))
    }

    /// Move every card that can go to a foundation, one at a time, until a
    /// full scan finds nothing. Each move is a separate undo step.
    ///
    /// Returns the number of cards moved.
    pub fn auto_complete(&mut self) -> usize {
        let mut moved = 0;
        while let Some(source) = self.next_foundation_candidate() {
            if self.move_to_foundation(source).is_err() {
                break;
            }
            moved += 1;
        }
        debug!("Auto-complete moved {} card(s)", moved);
        moved
    }

    /// Send the card at `position` somewhere useful: its foundation if it
    /// is a top card the foundation accepts, else the first tableau column
    /// (by index, skipping its own) that accepts it with its run.
    pub fn auto_move_card(&mut self, position: Position) -> Result<AutoMove, GameError> {
        let board = &self.state.board;
        let (card, source_column, is_top) = match position {
            Position::Waste => (*board.waste_top().ok_or(MoveError::EmptySource)?, None, true),
            Position::Tableau(cell) => {
                if cell.column >= TABLEAU_COLUMNS {
                    return Err(MoveError::InvalidPosition.into());
                }
                let column = board.column(cell.column);
                let card = match column.get(cell.row) {
                    Some(card) => *card,
                    None if column.is_empty() => return Err(MoveError::EmptySource.into()),
                    None => return Err(MoveError::InvalidPosition.into()),
                };
                if !card.is_face_up() {
                    return Err(MoveError::FaceDownSource.into());
                }
                (card, Some(cell.column), cell.row + 1 == column.len())
            }
            Position::Stock | Position::Foundation(_) => {
                return Err(MoveError::InvalidPosition.into())
            }
        };

        if is_top && check_foundation_placement(board, &card).is_ok() {
            let source = source_column.map_or(Source::Waste, Source::Tableau);
            let suit = self.move_to_foundation(source)?;
            return Ok(AutoMove::Foundation(suit));
        }

        let destination = (0..TABLEAU_COLUMNS)
            .filter(|&column| Some(column) != source_column)
            .find(|&column| tableau_move_allowed(&card, board.column_top(column)));

        match (destination, position) {
            (Some(to), Position::Tableau(cell)) => {
                self.move_tableau_to_tableau(cell, to)?;
                Ok(AutoMove::Tableau(to))
            }
            (Some(to), _) => {
                self.move_waste_to_tableau(to)?;
                Ok(AutoMove::Tableau(to))
            }
            (None, _) => {
                trace!("No valid move for {} at {}", card, position);
                Err(GameError::NoValidMove)
            }
        }
    }

    /// True iff every foundation holds 13 cards.
    ///
    /// On the first transition to won, saves a snapshot and sets the won
    /// flag.
    pub fn check_win_condition(&mut self) -> bool {
        let complete = self.state.board.all_foundations_complete();
        if complete && !self.state.won {
            self.save_state();
            self.state.won = true;
            info!("Game won in {} moves", self.state.move_count);
        }
        complete
    }
}

impl PlaySurface for Game {
    fn board(&self) -> &Board {
        Game::board(self)
    }

    fn draw(&mut self) -> Result<DrawOutcome, GameError> {
        Game::draw(self)
    }

    fn move_tableau_to_tableau(&mut self, from: Cell, to: usize) -> Result<(), GameError> {
        Game::move_tableau_to_tableau(self, from, to)
    }

    fn move_waste_to_tableau(&mut self, to: usize) -> Result<(), GameError> {
        Game::move_waste_to_tableau(self, to)
    }

    fn move_to_foundation(&mut self, source: Source) -> Result<Suit, GameError> {
        Game::move_to_foundation(self, source)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
