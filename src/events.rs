//! Event handling functions for user input and player movement.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    types::{Direction, Screen, Tile},
    App,
};

/// Polls for input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the key handler. It uses a
/// timeout to avoid blocking the loop while no input is pending.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key.code);
        }
    }

    Ok(())
}

/// Dispatches a single key press against the current view state.
///
/// This function implements the modal input halt first: while a blocking notice is up, the next
/// key only dismisses it and is otherwise consumed. On the interactive screen the four directions
/// and their WASD aliases request moves, the quit keys close the view, and every other key is
/// ignored.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if matches!(app.screen, Screen::LoadFailed(_)) {
        // The failed-load notice is terminal: dismissing it closes the view.
        app.exit = true;
        return;
    }

    if app.finish_notice {
        // Dismissal is not an invalidation; no repaint is requested here.
        app.finish_notice = false;
        return;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Up | KeyCode::Char('w') => handle_move(app, Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => handle_move(app, Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => handle_move(app, Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => handle_move(app, Direction::Right),
        _ => {}
    }
}

/// Attempts to move the player one cell in the given direction.
///
/// This function computes the candidate cell and commits the move only when the candidate is an
/// existing non-wall cell. A candidate outside the grid, including an absent column of a ragged
/// row, counts as an implicit boundary wall and is rejected without any character access. Whether
/// the move committed or not, a repaint is requested unconditionally.
pub(crate) fn handle_move(app: &mut App, direction: Direction) {
    let (col_delta, row_delta) = direction.delta();

    let candidate = app
        .player_col
        .checked_add_signed(col_delta)
        .zip(app.player_row.checked_add_signed(row_delta));

    if let Some((col, row)) = candidate {
        if matches!(app.map.tile(col, row), Some(tile) if tile != Tile::Wall) {
            app.player_col = col;
            app.player_row = row;
        }
    }

    app.redraw = true;
}
