//! A fixed-size 2-D grid of cells stored in row-major order.
//!
//! Puzzle inputs are commonly a block of equal-width text lines. [`Grid::from_lines`] turns those
//! into a [`Grid<char>`], which can then be converted into a grid of a puzzle's own cell type with
//! [`Grid::map`] or [`Grid::try_map`].
//!
//! ```
//! # use aoc_framework::grid::{Grid, GridCellPos, GridError};
//! #
//! let grid = Grid::from_lines(["#.#", ".#.", "#.#"])?;
//! assert_eq!(grid.at(1, 1)?, &'#');
//! assert_eq!(grid.find_pos(|_, cell| *cell == '.'), Some(GridCellPos::new(0, 1)));
//!
//! let walls = grid.map(|cell| *cell == '#');
//! assert_eq!(walls.count(|is_wall| *is_wall), 5);
//! # Ok::<(), GridError>(())
//! ```
//!
//! Coordinates are signed so that positions around an edge cell can be formed freely; any access
//! outside of the grid fails with [`GridError::OutOfBounds`] instead of clamping or wrapping.

use std::fmt::Display;
use std::io::BufRead;

use thiserror::Error;

use crate::{DynamicResult, ParseData};

/// Offsets to the eight cells surrounding a position, in row-major order.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position in a [`Grid`].
///
/// Positions order by row, then column, matching the grid's scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCellPos {
    pub row: isize,
    pub col: isize,
}

impl GridCellPos {
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Get the position shifted by a number of rows and columns.
    #[must_use]
    pub const fn offset(self, d_row: isize, d_col: isize) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }
}

impl Display for GridCellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(r:{}, c:{})", self.row, self.col)
    }
}

/// Errors from constructing or accessing a [`Grid`].
#[derive(Error, Debug)]
pub enum GridError {
    #[error("{found} cells cannot fill a grid of width {width} and height {height}")]
    CellCountMismatch {
        width: usize,
        height: usize,
        found: usize,
    },

    #[error(
        "expected grid width to be {expected} across rows, but found row width {found} on line {}",
        .line_index.saturating_add(1)
    )]
    UnequalWidth {
        /// The line index, zero based.
        /// This will be formatted to a one-based number for display.
        line_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("position {pos} is outside of the grid (width {width}, height {height})")]
    OutOfBounds {
        pos: GridCellPos,
        width: usize,
        height: usize,
    },

    #[error("index {index} is outside of the grid's {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read grid lines")]
    Read(#[source] std::io::Error),
}

/// A rectangular grid of cells.
///
/// Cells are stored as one sequence in row-major order; the grid always holds exactly
/// `width * height` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid from its dimensions and row-major cells.
    ///
    /// # Errors
    ///
    /// A [`GridError::CellCountMismatch`] is returned if the number of cells is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if width.checked_mul(height) == Some(cells.len()) {
            Ok(Self {
                width,
                height,
                cells,
            })
        } else {
            Err(GridError::CellCountMismatch {
                width,
                height,
                found: cells.len(),
            })
        }
    }

    /// Create a grid with every cell set to a clone of `value`.
    ///
    /// # Errors
    ///
    /// A [`GridError::CellCountMismatch`] is returned if `width * height` overflows.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let len = width
            .checked_mul(height)
            .ok_or(GridError::CellCountMismatch {
                width,
                height,
                found: 0,
            })?;
        Self::new(width, height, vec![value; len])
    }

    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if a position lies within the grid.
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        self.checked_index(row, col).is_some()
    }

    fn checked_index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    fn out_of_bounds(&self, row: isize, col: isize) -> GridError {
        GridError::OutOfBounds {
            pos: GridCellPos::new(row, col),
            width: self.width,
            height: self.height,
        }
    }

    /// Convert a position into a linear index of [`Grid::cells`].
    ///
    /// # Errors
    ///
    /// A [`GridError::OutOfBounds`] is returned if the position is outside of the grid.
    pub fn coord_to_index(&self, row: isize, col: isize) -> Result<usize, GridError> {
        self.checked_index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Convert a linear index of [`Grid::cells`] into a position.
    ///
    /// # Errors
    ///
    /// A [`GridError::IndexOutOfRange`] is returned if the index is not below `width * height`,
    /// which includes every index when the grid has no columns.
    pub fn index_to_coord(&self, index: usize) -> Result<GridCellPos, GridError> {
        let out_of_range = GridError::IndexOutOfRange {
            index,
            len: self.cells.len(),
        };
        if index >= self.cells.len() {
            return Err(out_of_range);
        }

        match (
            isize::try_from(index / self.width),
            isize::try_from(index % self.width),
        ) {
            (Ok(row), Ok(col)) => Ok(GridCellPos::new(row, col)),
            _ => Err(out_of_range),
        }
    }

    /// Get a reference to the cell at a position.
    ///
    /// # Errors
    ///
    /// A [`GridError::OutOfBounds`] is returned if the position is outside of the grid.
    pub fn at(&self, row: isize, col: isize) -> Result<&T, GridError> {
        let index = self.coord_to_index(row, col)?;
        Ok(&self.cells[index])
    }

    /// Get a reference to the cell at a position, or `None` if outside of the grid.
    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Option<&T> {
        self.checked_index(row, col).map(|index| &self.cells[index])
    }

    /// Overwrite the cell at a position.
    ///
    /// # Errors
    ///
    /// A [`GridError::OutOfBounds`] is returned if the position is outside of the grid; the grid
    /// is left unchanged.
    pub fn set(&mut self, row: isize, col: isize, value: T) -> Result<(), GridError> {
        let index = self.coord_to_index(row, col)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Find the position of the first cell in row-major order matching the predicate.
    ///
    /// The predicate is given the cell's linear index along with the cell.
    pub fn find_pos<P>(&self, mut predicate: P) -> Option<GridCellPos>
    where
        P: FnMut(usize, &T) -> bool,
    {
        let index = self
            .cells
            .iter()
            .enumerate()
            .position(|(index, cell)| predicate(index, cell))?;
        self.index_to_coord(index).ok()
    }

    /// Count the cells matching the predicate.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }

    /// Create a new grid of the same dimensions with every cell transformed.
    #[must_use]
    pub fn map<U, F>(&self, transform: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(transform).collect(),
        }
    }

    /// Create a new grid of the same dimensions with every cell transformed by a fallible
    /// transform.
    ///
    /// # Errors
    ///
    /// The first error returned by `transform`, in row-major order.
    pub fn try_map<U, E, F>(&self, transform: F) -> Result<Grid<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        let cells = self.cells.iter().map(transform).collect::<Result<_, _>>()?;
        Ok(Grid {
            width: self.width,
            height: self.height,
            cells,
        })
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |row| {
            let start = row * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Iterate over every cell with its position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (GridCellPos, &T)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| Some((self.index_to_coord(index).ok()?, cell)))
    }

    /// Iterate over the up to eight cells surrounding a position that lie within the grid.
    pub fn neighbors(&self, row: isize, col: isize) -> impl Iterator<Item = (GridCellPos, &T)> {
        let center = GridCellPos::new(row, col);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(d_row, d_col)| {
            let pos = center.offset(d_row, d_col);
            self.get(pos.row, pos.col).map(|cell| (pos, cell))
        })
    }
}

impl Grid<char> {
    /// Create a character grid from lines of text.
    ///
    /// Trailing line ending characters are stripped from every line. The grid's width is the
    /// first line's character count and its height is the number of lines; no lines make an
    /// empty grid of width 0.
    ///
    /// # Errors
    ///
    /// A [`GridError::UnequalWidth`] is returned for the first line with a different width than
    /// the first line.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width_opt = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (line_index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches(['\r', '\n']);
            let line_width = line.chars().count();
            if let Some(expected_width) = width_opt {
                if line_width != expected_width {
                    return Err(GridError::UnequalWidth {
                        line_index,
                        expected: expected_width,
                        found: line_width,
                    });
                }
            } else {
                width_opt = Some(line_width);
            }

            cells.extend(line.chars());
            height += 1;
        }

        Ok(Self {
            width: width_opt.unwrap_or(0),
            height,
            cells,
        })
    }

    /// Read all lines from a reader into a character grid.
    ///
    /// # Errors
    ///
    /// A [`GridError::Read`] is returned if reading fails, otherwise any error from
    /// [`Grid::from_lines`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GridError> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(GridError::Read)?;
        Self::from_lines(lines)
    }
}

impl ParseData for Grid<char> {
    fn parse(input: &str) -> DynamicResult<Self> {
        Ok(Self::from_lines(input.lines())?)
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid: width={};height={}", self.width, self.height)?;
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_builds_row_major_cells() -> Result<(), GridError> {
        let grid = Grid::from_lines(["abc\n", "def\r\n"])?;
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells(), &['a', 'b', 'c', 'd', 'e', 'f']);
        Ok(())
    }

    #[test]
    fn from_lines_rejects_unequal_widths() {
        let result = Grid::from_lines(["...", "..", "..."]);
        assert!(matches!(
            result,
            Err(GridError::UnequalWidth {
                line_index: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn from_lines_without_lines_is_empty() -> Result<(), GridError> {
        let grid = Grid::from_lines(Vec::<String>::new())?;
        assert_eq!((grid.width(), grid.height()), (0, 0));
        assert!(grid.is_empty());
        Ok(())
    }

    #[test]
    fn from_lines_of_empty_lines_has_zero_width() -> Result<(), GridError> {
        let grid = Grid::from_lines(["", "\n", "\r\n"])?;
        assert_eq!((grid.width(), grid.height()), (0, 3));
        assert!(!grid.in_bounds(0, 0));
        assert!(matches!(grid.at(0, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(
            grid.index_to_coord(0),
            Err(GridError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert_eq!(grid.find_pos(|_, _| true), None);
        assert_eq!(grid.rows().count(), 3);
        Ok(())
    }

    #[test]
    fn from_reader_reads_all_lines() -> Result<(), GridError> {
        let grid = Grid::from_reader("..S\r\n...\n".as_bytes())?;
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.at(0, 2)?, &'S');
        Ok(())
    }

    #[test]
    fn from_reader_reports_invalid_utf8() {
        let result = Grid::from_reader(&b"ab\n\xff\xfe\n"[..]);
        assert!(matches!(result, Err(GridError::Read(_))));
    }

    #[test]
    fn parse_data_uses_input_lines() -> DynamicResult<()> {
        let grid = Grid::<char>::parse("#.\n.#\n")?;
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert!(Grid::<char>::parse("#.\n#\n").is_err());
        Ok(())
    }

    #[test]
    fn new_checks_cell_count() {
        assert!(Grid::new(2, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            Grid::new(2, 2, vec![0; 3]),
            Err(GridError::CellCountMismatch { found: 3, .. })
        ));
        assert!(Grid::<u8>::filled(usize::MAX, 2, 0).is_err());
    }

    #[test]
    fn at_and_set_check_bounds() -> Result<(), GridError> {
        let mut grid = Grid::filled(3, 2, 0u8)?;
        grid.set(1, 2, 7)?;
        assert_eq!(grid.at(1, 2)?, &7);
        assert_eq!(grid.cells()[5], 7);

        for (row, col) in [(-1, 0), (0, -1), (2, 0), (0, 3)] {
            assert!(!grid.in_bounds(row, col));
            assert!(grid.get(row, col).is_none());
            assert!(matches!(
                grid.at(row, col),
                Err(GridError::OutOfBounds { width: 3, height: 2, .. })
            ));
            assert!(grid.set(row, col, 1).is_err());
        }
        assert_eq!(grid.count(|cell| *cell != 0), 1);
        Ok(())
    }

    #[test]
    fn index_to_coord_inverts_coord_to_index() -> Result<(), GridError> {
        let grid = Grid::filled(4, 3, ())?;
        for index in 0..grid.len() {
            let pos = grid.index_to_coord(index)?;
            assert_eq!(grid.coord_to_index(pos.row, pos.col)?, index);
        }
        assert_eq!(grid.index_to_coord(5)?, GridCellPos::new(1, 1));
        assert!(grid.index_to_coord(12).is_err());
        Ok(())
    }

    #[test]
    fn find_pos_returns_first_match_in_row_major_order() -> Result<(), GridError> {
        let grid = Grid::from_lines(["..S", "..."])?;
        assert_eq!(
            grid.find_pos(|_, cell| *cell == 'S'),
            Some(GridCellPos::new(0, 2))
        );
        assert_eq!(
            grid.find_pos(|index, _| index >= 4),
            Some(GridCellPos::new(1, 1))
        );
        assert_eq!(grid.find_pos(|_, cell| *cell == '#'), None);
        Ok(())
    }

    #[test]
    fn example_cross_pattern() -> Result<(), GridError> {
        let grid = Grid::from_lines(["#.#", ".#.", "#.#"])?;
        assert_eq!(grid.at(1, 1)?, &'#');
        assert_eq!(grid.at(0, 0)?, &'#');
        assert_eq!(
            grid.find_pos(|_, cell| *cell == '.'),
            Some(GridCellPos::new(0, 1))
        );
        Ok(())
    }

    #[test]
    fn map_keeps_shape_and_source() -> Result<(), GridError> {
        let grid = Grid::from_lines(["ab", "cd", "ef"])?;
        let codes = grid.map(|cell| u32::from(*cell));
        assert_eq!((codes.width(), codes.height()), (2, 3));
        assert_eq!(codes.at(2, 1)?, &u32::from('f'));
        assert_eq!(grid.map(|cell| *cell), grid);
        Ok(())
    }

    #[test]
    fn try_map_stops_at_first_error() -> Result<(), GridError> {
        let grid = Grid::from_lines(["12", "x4"])?;
        let digits = grid.try_map(|cell| cell.to_digit(10).ok_or(*cell));
        assert_eq!(digits, Err('x'));
        Ok(())
    }

    #[test]
    fn neighbors_skip_outside_cells() -> Result<(), GridError> {
        let grid = Grid::from_lines(["abc", "def", "ghi"])?;
        let corner: Vec<_> = grid.neighbors(0, 0).map(|(_, cell)| *cell).collect();
        assert_eq!(corner, vec!['b', 'd', 'e']);
        let center: String = grid.neighbors(1, 1).map(|(_, cell)| *cell).collect();
        assert_eq!(center, "abcdfghi");
        Ok(())
    }

    #[test]
    fn positions_follow_row_major_order() -> Result<(), GridError> {
        let grid = Grid::from_lines(["ab", "cd"])?;
        let positions: Vec<_> = grid.positions().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            vec![
                GridCellPos::new(0, 0),
                GridCellPos::new(0, 1),
                GridCellPos::new(1, 0),
                GridCellPos::new(1, 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn display_prints_header_and_rows() -> Result<(), GridError> {
        let grid = Grid::from_lines(["#.", ".#"])?;
        assert_eq!(grid.to_string(), "Grid: width=2;height=2\n#.\n.#\n");
        assert_eq!(GridCellPos::new(3, -1).to_string(), "(r:3, c:-1)");
        Ok(())
    }
}
