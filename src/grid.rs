pub mod config;
pub mod generator;
pub mod paths;

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::alphabet::normalize;
use crate::error::GridError;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// True for the up to eight cells sharing an edge or corner with `self`.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular matrix of normalized, non-empty string tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    cols: usize,
}

impl Grid {
    /// Builds a grid, rejecting empty or ragged input instead of truncating it.
    pub fn new<S: AsRef<str>>(rows: Vec<Vec<S>>) -> Result<Grid, GridError> {
        let cols = rows.first().ok_or(GridError::Empty)?.len();
        let mut cells = Vec::with_capacity(rows.len());

        for (row, tokens) in rows.iter().enumerate() {
            if tokens.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if tokens.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: tokens.len(),
                });
            }
            let normalized = tokens
                .iter()
                .enumerate()
                .map(|(col, token)| {
                    let token = normalize(token.as_ref().trim());
                    if token.is_empty() {
                        Err(GridError::EmptyCell { row, col })
                    } else {
                        Ok(token)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            cells.push(normalized);
        }

        Ok(Grid { cells, cols })
    }

    /// One row per non-blank line. Cells are whitespace separated; a line
    /// without whitespace is split into single characters.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let rows: Vec<Vec<String>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if line.contains(char::is_whitespace) {
                    line.split_whitespace().map(String::from).collect()
                } else {
                    line.chars().map(String::from).collect()
                }
            })
            .collect();
        Grid::new(rows)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_position(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn get(&self, pos: Position) -> Option<&str> {
        self.cells.get(pos.row)?.get(pos.col).map(String::as_str)
    }

    /// Positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| Position::new(row, col)))
    }

    /// In-bounds 8-directional neighbors of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position::new(row, col);
            self.contains_position(next).then_some(next)
        })
    }

    pub(crate) fn index_of(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Concatenates the tokens along `path` after checking it is a simple,
    /// connected, in-bounds path.
    pub fn path_string(&self, path: &[Position]) -> Result<String, GridError> {
        if path.is_empty() {
            return Err(GridError::EmptyPath);
        }
        let mut seen = HashSet::with_capacity(path.len());
        let mut word = String::new();

        for (i, &pos) in path.iter().enumerate() {
            let token = self.get(pos).ok_or(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            })?;
            if i > 0 && !path[i - 1].is_adjacent(&pos) {
                return Err(GridError::NotAdjacent {
                    from: path[i - 1],
                    to: pos,
                });
            }
            if !seen.insert(pos) {
                return Err(GridError::RevisitedCell {
                    row: pos.row,
                    col: pos.col,
                });
            }
            word.push_str(token);
        }
        Ok(word)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Grid {
        Grid::new(vec![vec!["a", "b"], vec!["c", "d"]]).unwrap()
    }

    #[test]
    fn test_adjacent_positions() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(0, 1);
        let pos3 = Position::new(1, 1);
        let pos4 = Position::new(2, 2);

        assert!(pos1.is_adjacent(&pos2));
        assert!(pos2.is_adjacent(&pos3));
        assert!(pos1.is_adjacent(&pos3));
        assert!(!pos1.is_adjacent(&pos4));
        assert!(!pos1.is_adjacent(&pos1));
    }

    #[test]
    fn normalizes_tokens() {
        let grid = Grid::new(vec![vec!["A", " Qu "]]).unwrap();
        assert_eq!(grid.get(Position::new(0, 1)), Some("qu"));
        assert_eq!(grid.get(Position::new(1, 0)), None);
    }

    #[test]
    fn rejects_malformed_grids() {
        let empty: Vec<Vec<&str>> = vec![];
        assert_eq!(Grid::new(empty), Err(GridError::Empty));
        assert_eq!(Grid::new(vec![Vec::<&str>::new()]), Err(GridError::EmptyRow { row: 0 }));
        assert_eq!(
            Grid::new(vec![vec!["a", "b"], vec!["c"]]),
            Err(GridError::RaggedRow { row: 1, expected: 2, found: 1 })
        );
        assert_eq!(
            Grid::new(vec![vec!["a", "b"], vec!["c", "d", "e"]]),
            Err(GridError::RaggedRow { row: 1, expected: 2, found: 3 })
        );
        assert_eq!(
            Grid::new(vec![vec!["a", " "]]),
            Err(GridError::EmptyCell { row: 0, col: 1 })
        );
    }

    #[test]
    fn parses_both_layouts() {
        assert_eq!(Grid::parse("ab\ncd\n").unwrap(), abcd());
        assert_eq!(Grid::parse("\n A b \n\n c D\n").unwrap(), abcd());

        let multi = Grid::parse("qu a\nt e").unwrap();
        assert_eq!(multi.get(Position::new(0, 0)), Some("qu"));
        assert!(matches!(Grid::parse("ab\nc"), Err(GridError::RaggedRow { .. })));
        assert_eq!(Grid::parse("  \n"), Err(GridError::Empty));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = Grid::parse("abc\ndef\nghi").unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(Position::new(0, 1)).count(), 5);
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 8);
        assert!(grid
            .neighbors(Position::new(2, 2))
            .all(|n| n.is_adjacent(&Position::new(2, 2))));

        let single = Grid::parse("a").unwrap();
        assert_eq!(single.neighbors(Position::new(0, 0)).count(), 0);
    }

    #[test]
    fn positions_are_row_major() {
        let grid = abcd();
        let tokens: Vec<&str> = grid.positions().filter_map(|p| grid.get(p)).collect();
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn path_string_validates() {
        let grid = abcd();
        let p = Position::new;

        assert_eq!(grid.path_string(&[p(0, 0), p(0, 1), p(1, 1), p(1, 0)]).unwrap(), "abdc");
        assert_eq!(grid.path_string(&[p(0, 0), p(1, 1)]).unwrap(), "ad");
        assert_eq!(grid.path_string(&[]), Err(GridError::EmptyPath));
        assert_eq!(
            grid.path_string(&[p(0, 0), p(0, 1), p(0, 0)]),
            Err(GridError::RevisitedCell { row: 0, col: 0 })
        );
        assert_eq!(
            grid.path_string(&[p(0, 0), p(2, 0)]),
            Err(GridError::OutOfBounds { row: 2, col: 0 })
        );

        let wide = Grid::parse("abc").unwrap();
        assert_eq!(
            wide.path_string(&[p(0, 0), p(0, 2)]),
            Err(GridError::NotAdjacent { from: p(0, 0), to: p(0, 2) })
        );
    }

    #[test]
    fn displays_rows() {
        assert_eq!(abcd().to_string(), "a b\nc d\n");
    }
}
