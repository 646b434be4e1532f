//! Map data and loading module.
//!
//! This module contains the `Map` struct and related functionality for handling grid map data,
//! including loading from a file path, bounded tile access and deterministic grid sizing.

use std::{ffi::OsStr, fs, io, path::Path};

use crate::types::Tile;

/// Width of one grid cell in terminal columns.
///
/// This constant fixes the horizontal footprint of every cell. Two terminal columns per cell keeps
/// the rendered squares visually square, since terminal cells are roughly twice as tall as they
/// are wide.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Height of one grid cell in terminal rows.
///
/// This constant fixes the vertical footprint of every cell. Together with [`CELL_WIDTH`] it makes
/// the rendered grid area a deterministic function of the map dimensions.
pub(crate) const CELL_HEIGHT: u16 = 1;

/// Grid map data container.
///
/// This structure holds the text map as an ordered sequence of rows together with a display name
/// derived from the file it was read from. The rows are immutable after load and may be ragged;
/// columns past the end of a shorter row simply have no character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Map {
    /// Display name of the map.
    ///
    /// This field holds the file stem of the map file, used as the title of the play screen.
    pub key: String,
    /// Map content as rows of text.
    ///
    /// This field holds the actual map as a vector of strings, each string representing one row in
    /// the grid in top-to-bottom order.
    pub rows: Vec<String>,
}

impl Map {
    /// Reads a map from a file path.
    ///
    /// This function reads the whole file as text and splits it into rows. No validation is
    /// performed beyond the read itself: ragged rows, unknown symbols and duplicate or absent
    /// markers are all accepted silently.
    ///
    /// # Errors
    ///
    /// This function returns the underlying I/O error when the file cannot be read; the caller
    /// inspects [`io::ErrorKind::NotFound`] to distinguish the one user-facing failure from the
    /// rest.
    pub(crate) fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;

        let key = path
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("map")
            .to_owned();

        Ok(Self {
            key,
            rows: contents.lines().map(str::to_owned).collect(),
        })
    }

    /// Returns the map width as the length of its longest row.
    ///
    /// This function scans all rows because the format tolerates ragged input; the widest row
    /// decides the rendered grid width.
    pub(crate) fn width(&self) -> usize {
        self.rows.iter().map(String::len).max().unwrap_or(0)
    }

    /// Returns the number of rows in the map.
    pub(crate) fn height(&self) -> usize {
        self.rows.len()
    }

    /// Decodes the tile at a grid coordinate, if the coordinate holds a character.
    ///
    /// This function is the bounds guard in front of every character access: coordinates past the
    /// last row, or past the end of a ragged row, return `None` rather than faulting. In-bounds
    /// coordinates decode through [`Tile::from_char`].
    pub(crate) fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.rows
            .get(row)
            .and_then(|line| line.chars().nth(col))
            .map(Tile::from_char)
    }

    /// Reports whether the cell at a grid coordinate is a wall.
    ///
    /// This function is the collision query used by the movement handler. Out-of-bounds
    /// coordinates never reach a character access thanks to [`Map::tile`]'s guard; the movement
    /// handler rejects those separately as implicit boundary walls.
    pub(crate) fn is_wall(&self, col: usize, row: usize) -> bool {
        self.tile(col, row) == Some(Tile::Wall)
    }

    /// Returns the rendered grid size in terminal cells.
    ///
    /// This function derives the play area dimensions deterministically from the map dimensions as
    /// (width × [`CELL_WIDTH`], height × [`CELL_HEIGHT`]), the fixed-cell-size rule that decided
    /// the window size in the original design.
    pub(crate) fn grid_size(&self) -> (u16, u16) {
        let width = u16::try_from(self.width())
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_WIDTH);
        let height = u16::try_from(self.height())
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_HEIGHT);

        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    /// Builds an in-memory map from string rows for tests.
    fn map_from_rows(rows: &[&str]) -> Map {
        Map {
            key: "test".to_owned(),
            rows: rows.iter().map(|row| (*row).to_owned()).collect(),
        }
    }

    #[test]
    fn test_load_reads_rows_and_key() {
        let path = env::temp_dir().join(format!("gridplay-load-{}.map", std::process::id()));
        fs::write(&path, "@@@\n@!=\n@@@\n").expect("failed to write temporary map file");

        let map = Map::load(&path).expect("failed to load temporary map file");
        fs::remove_file(&path).expect("failed to remove temporary map file");

        assert_eq!(map.key, format!("gridplay-load-{}", std::process::id()));
        assert_eq!(map.rows, vec!["@@@", "@!=", "@@@"]);
    }

    #[test]
    fn test_load_missing_path_is_not_found() {
        let path = env::temp_dir().join("gridplay-definitely-missing.map");

        let err = Map::load(&path).expect_err("loading a missing path should fail");

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_width_uses_longest_ragged_row() {
        let map = map_from_rows(&["@@", "@@@@@", "@"]);

        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 3);
    }

    #[test]
    fn test_empty_map_dimensions() {
        let map = map_from_rows(&[]);

        assert_eq!(map.width(), 0);
        assert_eq!(map.height(), 0);
        assert_eq!(map.grid_size(), (0, 0));
    }

    #[test]
    fn test_tile_decodes_in_bounds_characters() {
        let map = map_from_rows(&["@! ", "  ="]);

        assert_eq!(map.tile(0, 0), Some(Tile::Wall));
        assert_eq!(map.tile(1, 0), Some(Tile::Player));
        assert_eq!(map.tile(2, 0), Some(Tile::Void));
        assert_eq!(map.tile(2, 1), Some(Tile::Finish));
    }

    #[test]
    fn test_tile_out_of_bounds_is_none() {
        let map = map_from_rows(&["@@@", "@"]);

        assert_eq!(map.tile(3, 0), None);
        assert_eq!(map.tile(0, 2), None);
        // Ragged row: column exists in the map rectangle but holds no character.
        assert_eq!(map.tile(1, 1), None);
    }

    #[test]
    fn test_is_wall_true_iff_wall_character() {
        let map = map_from_rows(&["@! ", "  ="]);

        assert!(map.is_wall(0, 0));
        assert!(!map.is_wall(1, 0));
        assert!(!map.is_wall(2, 0));
        assert!(!map.is_wall(2, 1));
        assert!(!map.is_wall(9, 9));
    }

    #[test]
    fn test_grid_size_is_map_dimensions_times_cell_size() {
        let map = map_from_rows(&["   ", "   ", "   "]);

        assert_eq!(
            map.grid_size(),
            (3 * CELL_WIDTH, 3 * CELL_HEIGHT),
            "a 3x3 all-void map must produce a 3x3-cell play area"
        );
    }
}
