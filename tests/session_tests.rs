//! Session integration tests.
//!
//! A real `Game` driven only through `Command`s, the way an input layer
//! would drive it.

use im::vector;
use klondike_engine::{
    Board, Card, Cell, Command, Direction, Game, GameConfig, GameError, MoveError, Outcome,
    Position, Rank, SelectionState, Session, Suit,
};

fn up(rank: Rank, suit: Suit) -> Card {
    Card::face_up(rank, suit)
}

fn session_from(board: Board) -> Session {
    Session::from_game(Game::from_board(board, GameConfig::default().with_seed(0)))
}

fn apply_all(session: &mut Session, commands: &[Command]) {
    for &command in commands {
        session.apply(command).unwrap();
    }
}

/// T0: K♠ Q♥ (face-up run), T1: J♣ 10♦, waste: J♠.
fn small_board() -> Board {
    let mut board = Board::empty();
    board.tableau[0] = vector![
        Card::new(Rank::Two, Suit::Diamonds),
        up(Rank::King, Suit::Spades),
        up(Rank::Queen, Suit::Hearts),
    ];
    board.tableau[1] = vector![up(Rank::Jack, Suit::Clubs), up(Rank::Ten, Suit::Diamonds)];
    board.waste = vector![up(Rank::Jack, Suit::Spades)];
    board
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_cursor_starts_on_face_up_card() {
    let session = session_from(small_board());
    assert_eq!(session.selection().cursor(), Position::cell(0, 1));
}

#[test]
fn test_navigation_round_trip() {
    let mut session = session_from(small_board());

    apply_all(
        &mut session,
        &[
            Command::MoveCursor(Direction::Down),
            Command::MoveCursor(Direction::Up),
            Command::MoveCursor(Direction::Up),
        ],
    );
    assert_eq!(session.selection().cursor(), Position::Stock);

    apply_all(
        &mut session,
        &[
            Command::MoveCursor(Direction::Right),
            Command::MoveCursor(Direction::Down),
        ],
    );
    assert_eq!(session.selection().cursor(), Position::cell(1, 0));
}

#[test]
fn test_navigation_never_changes_game() {
    let mut session = Session::new(GameConfig::default().with_seed(3));
    let before = session.game().state().clone();

    for direction in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
        for _ in 0..9 {
            session.apply(Command::MoveCursor(direction)).unwrap();
        }
    }
    assert_eq!(session.game().state(), &before);
    assert!(!session.game().can_undo());
}

// =============================================================================
// Select / Move
// =============================================================================

#[test]
fn test_select_run_and_drop() {
    let mut session = session_from(small_board());

    // Pick up J♣ with 10♦ on it and drop it on Q♥.
    apply_all(
        &mut session,
        &[
            Command::MoveCursor(Direction::Right),
            Command::MoveCursor(Direction::Up),
            Command::Select,
        ],
    );
    assert_eq!(
        session.selection().state(),
        SelectionState::TableauCardSelected(Cell::new(1, 0))
    );

    apply_all(
        &mut session,
        &[Command::MoveCursor(Direction::Left), Command::Select],
    );

    let board = session.game().board();
    assert_eq!(board.column(0).len(), 5);
    assert!(board.column(1).is_empty());
    assert_eq!(session.selection().state(), SelectionState::Browsing);
    assert_eq!(session.game().move_count(), 1);
}

#[test]
fn test_illegal_drop_returns_to_browsing() {
    let mut session = session_from(small_board());

    // Q♥ onto 10♦.
    session.apply(Command::MoveCursor(Direction::Down)).unwrap();
    session.apply(Command::Select).unwrap();
    session.apply(Command::MoveCursor(Direction::Right)).unwrap();

    assert_eq!(
        session.apply(Command::Select),
        Err(GameError::InvalidMove(MoveError::WrongColor))
    );
    assert_eq!(session.selection().state(), SelectionState::Browsing);
    assert!(!session.game().can_undo());
}

#[test]
fn test_waste_select_and_drop() {
    let mut session = session_from(small_board());

    // Up to the stock, right to the waste.
    apply_all(
        &mut session,
        &[
            Command::MoveCursor(Direction::Up),
            Command::MoveCursor(Direction::Right),
            Command::Select,
        ],
    );
    assert_eq!(session.selection().state(), SelectionState::WasteCardSelected);
    assert_eq!(session.selection().cursor(), Position::cell(0, 2));

    // J♠ onto Q♥.
    session.apply(Command::Select).unwrap();
    assert!(session.game().board().waste.is_empty());
    assert_eq!(session.game().board().column(0).len(), 4);
}

#[test]
fn test_cancel_selection() {
    let mut session = session_from(small_board());
    session.apply(Command::Select).unwrap();
    assert!(session.selection().is_selecting());

    session.apply(Command::Cancel).unwrap();
    assert!(!session.selection().is_selecting());
    session.apply(Command::Select).unwrap();
    assert!(session.selection().is_selecting());
}

#[test]
fn test_select_on_stock_draws() {
    let mut session = Session::new(GameConfig::default().with_seed(8));
    apply_all(
        &mut session,
        &[Command::MoveCursor(Direction::Up), Command::Select],
    );
    assert_eq!(session.game().board().waste.len(), 1);
    assert_eq!(session.selection().cursor(), Position::Stock);
}

// =============================================================================
// Engine Commands
// =============================================================================

#[test]
fn test_undo_redo_commands() {
    let mut session = Session::new(GameConfig::default().with_seed(8));
    let dealt = session.game().state().clone();

    session.apply(Command::Draw).unwrap();
    let drawn = session.game().state().clone();

    session.apply(Command::Undo).unwrap();
    assert_eq!(session.game().state(), &dealt);
    session.apply(Command::Redo).unwrap();
    assert_eq!(session.game().state(), &drawn);
}

#[test]
fn test_undo_resets_cursor_onto_valid_card() {
    let mut session = session_from(small_board());

    // Move K♠ Q♥ to the empty T2, then undo with the cursor on T2.
    apply_all(
        &mut session,
        &[
            Command::Select,
            Command::MoveCursor(Direction::Right),
            Command::MoveCursor(Direction::Right),
            Command::Select,
        ],
    );
    assert_eq!(session.game().board().column(2).len(), 2);
    assert_eq!(session.selection().cursor(), Position::cell(2, 0));

    session.apply(Command::Undo).unwrap();
    assert_eq!(session.selection().cursor(), Position::cell(2, 0));
    assert!(session.game().board().column(2).is_empty());
}

#[test]
fn test_auto_move_command_uses_cursor() {
    let mut session = session_from(small_board());

    // Cursor onto 10♦; no legal destination.
    session.apply(Command::MoveCursor(Direction::Right)).unwrap();
    assert_eq!(session.selection().cursor(), Position::cell(1, 1));
    assert_eq!(session.apply(Command::AutoMove), Err(GameError::NoValidMove));

    // J♣ with 10♦ onto Q♥.
    session.apply(Command::MoveCursor(Direction::Up)).unwrap();
    assert_eq!(session.apply(Command::AutoMove), Ok(Outcome::Continue));
    assert_eq!(session.game().board().column(0).len(), 5);
}

#[test]
fn test_auto_complete_command_wins() {
    let mut board = Board::empty();
    for suit in Suit::ALL {
        board.tableau[suit.index()] = Rank::ALL.iter().rev().map(|&rank| up(rank, suit)).collect();
    }
    let mut session = session_from(board);

    assert_eq!(session.apply(Command::AutoComplete), Ok(Outcome::Won));
    assert_eq!(session.game().score(), 52);
    assert_eq!(session.apply(Command::Quit), Ok(Outcome::Quit));
}
