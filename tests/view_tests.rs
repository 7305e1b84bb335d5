//! GameView rendering tests (pure, no terminal required)

use tui_traymatch::core::GameState;
use tui_traymatch::input::Cursor;
use tui_traymatch::term::text::line_text;
use tui_traymatch::term::GameView;
use tui_traymatch::types::{Dir, GameAction, GameSettings, LevelMode};

fn render_text(state: &GameState, cursor: &Cursor) -> Vec<String> {
    GameView::new()
        .render(state, cursor)
        .iter()
        .map(line_text)
        .collect()
}

#[test]
fn test_render_shows_grid_and_tray() {
    let mut state = GameState::new(GameSettings::default(), LevelMode::Moves, 3);
    state.start();

    let lines = render_text(&state, &Cursor::new());
    // Two border rows plus six grid rows.
    assert_eq!(lines.iter().filter(|l| l.starts_with('+')).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.starts_with('|')).count(), 6);
    assert!(lines.iter().any(|l| l.starts_with("tray ")));
    assert!(lines.iter().any(|l| l.contains("mode moves")));
}

#[test]
fn test_render_marks_cursor() {
    let mut state = GameState::new(GameSettings::default(), LevelMode::Moves, 3);
    state.start();

    let mut cursor = Cursor::new();
    cursor.step(state.board(), Dir::Right);

    let lines = render_text(&state, &cursor);
    let row = lines.iter().find(|l| l.starts_with('|')).unwrap();
    assert!(row.contains('['), "cursor marker missing in {:?}", row);
}

#[test]
fn test_render_overlays() {
    let mut state = GameState::new(GameSettings::default(), LevelMode::Moves, 3);
    state.start();

    state.apply_action(GameAction::Pause);
    let lines = render_text(&state, &Cursor::new());
    assert!(lines.iter().any(|l| l == "PAUSED"));
    state.apply_action(GameAction::Pause);

    while !state.game_over() {
        assert!(state.make_best_move());
    }
    let lines = render_text(&state, &Cursor::new());
    assert!(lines.iter().any(|l| l == "YOU WIN"));
}
