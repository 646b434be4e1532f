//! Core application state and logic for the grid sandbox.

use std::{io, path::Path};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, map::Map, types::Screen, ui};

/// Application state container for the play view.
///
/// This structure holds the state of the view, which is to say the structure from which Ratatui
/// will render the game and Crossterm events will help writing to. One instance exists per run;
/// there is no process-wide state.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the view should close. It is set to `true` when the user quits
    /// or dismisses the failed-load notice, but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current state of the view. It is used to determine whether to render
    /// the interactive grid or the blocking failed-load notice.
    pub(crate) screen: Screen,
    /// Currently loaded map.
    ///
    /// This field holds the map the view renders and collides against. It is immutable after load;
    /// on a failed load it stays empty and is never scanned.
    pub(crate) map: Map,
    /// Player token column coordinate.
    ///
    /// This field holds the horizontal grid position of the player. It defaults to zero so a map
    /// without any player marker still has a movable token at the grid origin.
    pub(crate) player_col: usize,
    /// Player token row coordinate.
    ///
    /// This field holds the vertical grid position of the player, with the same zero default as
    /// the column coordinate.
    pub(crate) player_row: usize,
    /// One-time spawn flag.
    ///
    /// This field records whether the player coordinate has been bound to a player marker cell.
    /// The first marker encountered during the first render pass sets it; later markers never
    /// re-bind the position.
    pub(crate) spawned: bool,
    /// Finish notice visibility flag.
    ///
    /// This field is armed by the render pass whenever the player stands on a finish cell and
    /// cleared by the next key event. There is deliberately no reached-the-finish latch, so the
    /// notice re-fires on every repaint while the player remains on the cell.
    pub(crate) finish_notice: bool,
    /// Pending repaint flag.
    ///
    /// This field plays the role of the original design's invalidation request: it is set at
    /// startup and after every handled movement key, and cleared once the frame has been drawn.
    /// Dismissing a notice does not set it.
    pub(crate) redraw: bool,
}

impl App {
    /// Creates a new view for the map at the given path.
    ///
    /// This function performs the load phase of the view's lifecycle. A missing file becomes the
    /// [`Screen::LoadFailed`] state, which only shows a blocking error notice naming the path and
    /// then closes without ever entering the interactive loop.
    ///
    /// # Errors
    ///
    /// This function returns an error for I/O failures other than a missing file, the only
    /// condition the view reports itself.
    pub fn new(path: &Path) -> Result<Self> {
        let (screen, map) = match Map::load(path) {
            Ok(map) => (Screen::Playing, map),
            Err(err) if err.kind() == io::ErrorKind::NotFound => (
                Screen::LoadFailed(path.display().to_string()),
                Map {
                    key: String::new(),
                    rows: Vec::new(),
                },
            ),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            exit: false,
            screen,
            map,
            player_col: 0,
            player_row: 0,
            spawned: false,
            finish_notice: false,
            redraw: true,
        })
    }

    /// Runs the main loop of the view.
    ///
    /// This function alternates repaints and input handling until the exit flag is set, after
    /// which it returns to the call site and ratatui restores the state of the terminal. Frames
    /// are only drawn while a repaint is pending, which keeps the notice re-fire tied to input
    /// handling the way the original invalidation model ties it.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            if self.redraw {
                let _ = terminal.draw(|frame| ui::draw(self, frame))?;
                self.redraw = false;
            }
            events::handle_events(self)?;
        }

        Ok(())
    }
}
