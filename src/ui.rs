//! User interface rendering functions for the play and failed-load screens.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::{
    map::{CELL_HEIGHT, CELL_WIDTH},
    types::{Screen, Tile},
    App,
};

/// Updates the view based on the persistent state.
///
/// This function renders either the interactive grid or the blocking failed-load notice based on
/// the current state stored in the [`App`] structure.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) {
    match app.screen.clone() {
        Screen::Playing => play_view(app, frame),
        Screen::LoadFailed(path) => load_failed(frame, &path),
    }
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let widget = Clear;
    frame.render_widget(widget, frame.area());
}

/// Renders the interactive play screen with the full map scan and win check.
///
/// This function scans the whole map in row-major order on every repaint and draws one filled
/// square per cell. The scan also carries the two pieces of game logic that live in the render
/// pass: the one-time spawn binding at the first player marker, and the win check that arms the
/// finish notice whenever the player currently stands on a finish cell.
#[expect(
    clippy::indexing_slicing,
    reason = "The layout collections are created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The layout collections are created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn play_view(app: &mut App, frame: &mut Frame) {
    clear(frame);

    let (grid_width, grid_height) = app.map.grid_size();

    // Overall layout: grid content on top, tooltip block at the bottom.
    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());
    let content_area = overall_layout[0];
    let tooltip_area = overall_layout[1];

    let vertical_space = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(grid_height),
        Constraint::Min(1),
    ])
    .split(content_area)[1];
    let grid_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(grid_width),
        Constraint::Min(1),
    ])
    .split(vertical_space)[1];

    let rows = app.map.rows.clone();
    for (row, line) in rows.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            let tile = Tile::from_char(symbol);
            match tile {
                Tile::Player => {
                    if !app.spawned {
                        app.player_col = col;
                        app.player_row = row;

                        app.spawned = true;
                    }
                    // The square is drawn at the current player coordinate, not at this
                    // scanned cell, so extra markers re-draw the same position.
                    fill_cell(
                        frame,
                        grid_area,
                        app.player_col,
                        app.player_row,
                        tile.color(),
                    );
                }
                Tile::Finish => {
                    if app.player_col == col && app.player_row == row {
                        app.finish_notice = true;
                    }
                    fill_cell(frame, grid_area, col, row, tile.color());
                }
                Tile::Void | Tile::Wall => fill_cell(frame, grid_area, col, row, tile.color()),
            }
        }
    }

    let tooltip_block = Block::bordered()
        .title(app.map.key.clone())
        .title_bottom("(wasd / arrows) move / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    if app.finish_notice {
        notice(
            frame,
            Color::Green,
            &["You reached the finish!".to_owned()],
        );
    }
}

/// Renders the blocking failed-load error notice.
///
/// This function draws the single error screen of the view, naming the map path that could not be
/// found. The next key press closes the view without ever entering the interactive loop.
pub(crate) fn load_failed(frame: &mut Frame, path: &str) {
    clear(frame);

    notice(
        frame,
        Color::Red,
        &[
            "ERROR loading map:".to_owned(),
            format!("\"{path}\" file NOT found!"),
        ],
    );
}

/// Fills one grid cell with a solid color square.
///
/// This function translates a grid coordinate into its fixed-size terminal rectangle inside the
/// play area and renders a styled block over it. A transparent fill is an explicit no-op, keeping
/// the per-cell dispatch symmetric across all tile kinds. The styled block is built and dropped
/// within this call, once per fill.
fn fill_cell(frame: &mut Frame, grid_area: Rect, col: usize, row: usize, fill: Option<Color>) {
    let Some(color) = fill else {
        return;
    };

    let cell = Rect {
        x: grid_area.x.saturating_add(
            u16::try_from(col)
                .unwrap_or(u16::MAX)
                .saturating_mul(CELL_WIDTH),
        ),
        y: grid_area.y.saturating_add(
            u16::try_from(row)
                .unwrap_or(u16::MAX)
                .saturating_mul(CELL_HEIGHT),
        ),
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
    }
    .intersection(grid_area);

    frame.render_widget(Block::new().style(Style::default().bg(color)), cell);
}

/// Renders a blocking modal notice centered on the frame.
///
/// This function draws the shared popup used by both the informational finish notice and the
/// failed-load error notice: a cleared, bordered box around the message lines with a dismissal
/// hint in the bottom border.
#[expect(
    clippy::indexing_slicing,
    reason = "The layout collections are created in-place with few, known elements; there is no risk of bad indexing."
)]
fn notice(frame: &mut Frame, accent: Color, message: &[String]) {
    let inner_width = message.iter().map(String::len).max().unwrap_or(0).max(24);
    let popup_width = u16::try_from(inner_width).unwrap_or(u16::MAX).saturating_add(4);
    let popup_height = u16::try_from(message.len()).unwrap_or(u16::MAX).saturating_add(2);

    let vertical_space = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(popup_height),
        Constraint::Min(1),
    ])
    .split(frame.area())[1];
    let popup_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(popup_width),
        Constraint::Min(1),
    ])
    .split(vertical_space)[1];

    let block = Block::bordered()
        .title("gridplay")
        .title_bottom("(any key) dismiss")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(accent))
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let inner_layout =
        Layout::vertical(vec![Constraint::Max(1); message.len()]).split(inner_space);
    for (idx, text) in message.iter().enumerate() {
        let line = Line::raw(text.clone()).centered();
        frame.render_widget(line, inner_layout[idx]);
    }
}
