//! Type definitions and enums for the map tiles, movement and view state.

use ratatui::style::Color;

/// Enumeration of the view states the play view moves through.
///
/// This enumeration holds information about the current state of the view. Loading either succeeds
/// and the view becomes interactive, or fails and the view only shows a blocking error notice
/// before closing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Interactive play screen.
    ///
    /// This variant represents the screen on which the loaded map is rendered and the player token
    /// reacts to movement keys.
    Playing,
    /// Failed-load error screen.
    ///
    /// This variant represents the terminal state reached when the map file could not be found. It
    /// carries the requested path so the error notice can name it.
    LoadFailed(String),
}

/// Closed enumeration over the significant map characters.
///
/// This enumeration models the four cell kinds a map position can decode to. Decoding happens on
/// every render pass straight from the underlying row text; tiles are never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tile {
    /// Empty, walkable cell with no special meaning.
    ///
    /// This variant represents both the explicit space character and any character outside the
    /// recognized set, which the map format treats as void.
    Void,
    /// Player spawn marker cell.
    ///
    /// This variant represents the cell symbol at which the player token binds its coordinate
    /// during the first render pass.
    Player,
    /// Impassable wall cell.
    ///
    /// This variant represents a cell that blocks movement; the collision check rejects any move
    /// whose candidate cell decodes to it.
    Wall,
    /// Goal cell.
    ///
    /// This variant represents the finish marker; the render pass arms the finish notice whenever
    /// the player token currently stands on one of these cells.
    Finish,
}

impl Tile {
    /// Decodes a single map character into its tile kind.
    ///
    /// This function is the one mapping point between the text map format and the closed tile
    /// enumeration. Unrecognized characters decode to [`Tile::Void`], matching the map format's
    /// silent-degradation rule.
    pub(crate) const fn from_char(symbol: char) -> Self {
        match symbol {
            '!' => Self::Player,
            '@' => Self::Wall,
            '=' => Self::Finish,
            _ => Self::Void,
        }
    }

    /// Returns the fill color for the tile, if it has one.
    ///
    /// This function maps each tile kind to the color its square is filled with on the play
    /// screen. Void cells return `None` and are left transparent, which makes the draw a no-op
    /// while keeping the per-cell dispatch symmetric.
    pub(crate) const fn color(self) -> Option<Color> {
        match self {
            Self::Void => None,
            Self::Player => Some(Color::Yellow),
            Self::Wall => Some(Color::White),
            Self::Finish => Some(Color::Green),
        }
    }
}

/// Movement directions bound to the arrow and WASD keys.
///
/// This enumeration holds the four directions a movement key can request. Each key event maps to
/// one variant, and the variant maps to a coordinate delta applied to the player position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// One cell up (row decreases).
    ///
    /// This variant is bound to the Up arrow and the 'w' key.
    Up,
    /// One cell down (row increases).
    ///
    /// This variant is bound to the Down arrow and the 's' key.
    Down,
    /// One cell left (column decreases).
    ///
    /// This variant is bound to the Left arrow and the 'a' key.
    Left,
    /// One cell right (column increases).
    ///
    /// This variant is bound to the Right arrow and the 'd' key.
    Right,
}

impl Direction {
    /// Returns the `(column, row)` delta for one step in this direction.
    ///
    /// This function expresses each direction as a signed grid delta. Callers apply it with
    /// checked arithmetic so a step off the grid's near edge surfaces as `None` instead of a
    /// wrapped coordinate.
    pub(crate) const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_from_char_recognized_symbols() {
        assert_eq!(Tile::from_char(' '), Tile::Void);
        assert_eq!(Tile::from_char('!'), Tile::Player);
        assert_eq!(Tile::from_char('@'), Tile::Wall);
        assert_eq!(Tile::from_char('='), Tile::Finish);
    }

    #[test]
    fn test_tile_from_char_unknown_symbols_decode_to_void() {
        assert_eq!(Tile::from_char('x'), Tile::Void);
        assert_eq!(Tile::from_char('#'), Tile::Void);
        assert_eq!(Tile::from_char('0'), Tile::Void);
        assert_eq!(Tile::from_char('\t'), Tile::Void);
    }

    #[test]
    fn test_tile_color_void_is_transparent() {
        assert_eq!(Tile::Void.color(), None);
    }

    #[test]
    fn test_tile_color_distinct_fill_colors() {
        assert_eq!(Tile::Player.color(), Some(Color::Yellow));
        assert_eq!(Tile::Wall.color(), Some(Color::White));
        assert_eq!(Tile::Finish.color(), Some(Color::Green));
        assert_ne!(Tile::Player.color(), Tile::Wall.color());
        assert_ne!(Tile::Wall.color(), Tile::Finish.color());
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_screen_variants() {
        let playing = Screen::Playing;
        let failed = Screen::LoadFailed("maps/missing.map".to_owned());

        assert_eq!(playing, Screen::Playing);
        assert_eq!(failed, Screen::LoadFailed("maps/missing.map".to_owned()));
        assert_ne!(playing, failed);
    }

    #[test]
    fn test_debug_implementations() {
        let tile = Tile::Wall;
        let direction = Direction::Left;
        let screen = Screen::Playing;

        assert_eq!(format!("{tile:?}"), "Wall");
        assert_eq!(format!("{direction:?}"), "Left");
        assert_eq!(format!("{screen:?}"), "Playing");
    }
}
