/*
hexgrid.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexlevels.

Hexlevels is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexlevels is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexlevels. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Hexagonal board geometry and the painted board.
//!
//! The board is a column-offset hex grid.
//! Rows are numbered from 1 (top) to the number of rows, and columns from 0 to the number of
//! columns minus one.
//! Even columns are shifted half a cell down compared to odd columns:
//!
//! ```text
//!  col: 0   1   2   3
//!          ___     ___
//!      ___/1,1\___/1,3\
//!     /1,0\___/1,2\___/
//!     \___/2,1\___/2,3\
//!     /2,0\___/2,2\___/
//!     \___/   \___/
//! ```
//!
//! Therefore the cells touching (row, col) on the left and on the right are in the same row and
//! in the row below for even columns, and in the same row and in the row above for odd columns.

use super::colors::{Color, PALETTE};

/// Offsets (row, column) of the adjacent cells that do not depend on the column parity.
const COMMON_OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Additional offsets for cells in even columns.
const EVEN_OFFSETS: [(isize, isize); 2] = [(1, -1), (1, 1)];

/// Additional offsets for cells in odd columns.
const ODD_OFFSETS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];

/// Return the (row, column) offsets of the six cells adjacent to a cell in the given column.
pub fn neighbor_offsets(col: usize) -> [(isize, isize); 6] {
    let parity: &[(isize, isize); 2] = if col % 2 == 0 {
        &EVEN_OFFSETS
    } else {
        &ODD_OFFSETS
    };
    [
        COMMON_OFFSETS[0],
        COMMON_OFFSETS[1],
        COMMON_OFFSETS[2],
        COMMON_OFFSETS[3],
        parity[0],
        parity[1],
    ]
}

/// Return the coordinates of the cells adjacent to (row, col) that are inside the board.
///
/// Rows are valid between 1 and `num_rows` included, and columns between 0 and `num_cols`
/// excluded.
pub fn neighbors(row: usize, col: usize, num_rows: usize, num_cols: usize) -> Vec<(usize, usize)> {
    neighbor_offsets(col)
        .iter()
        .filter_map(|(dr, dc)| {
            let r: usize = row.checked_add_signed(*dr)?;
            let c: usize = col.checked_add_signed(*dc)?;
            if r >= 1 && r <= num_rows && c < num_cols {
                Some((r, c))
            } else {
                None
            }
        })
        .collect()
}

/// Fully painted board.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of columns in every row.
    num_cols: usize,

    /// Colors, row by row. Row number 1 is at index 0.
    rows: Vec<Vec<Color>>,
}

impl Grid {
    /// Create a [`Grid`] object from its rows.
    ///
    /// All the rows must have `num_cols` cells.
    pub(super) fn from_rows(num_cols: usize, rows: Vec<Vec<Color>>) -> Self {
        assert!(
            rows.iter().all(|r| r.len() == num_cols),
            "Bug: grid rows must all have {num_cols} cells"
        );
        Self { num_cols, rows }
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Return the cells of the given row (rows start from 1).
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        if row == 0 {
            None
        } else {
            self.rows.get(row - 1).map(|r| &r[..])
        }
    }

    /// Return the color of the given cell (rows start from 1).
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.row(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate over the rows, with their number.
    pub fn iter_rows(&self) -> impl Iterator<Item = (usize, &[Color])> {
        self.rows.iter().enumerate().map(|(i, r)| (i + 1, &r[..]))
    }

    /// Number of cells of each color, indexed as [`PALETTE`].
    pub fn color_histogram(&self) -> [usize; PALETTE.len()] {
        let mut histogram: [usize; PALETTE.len()] = [0; PALETTE.len()];
        for color in self.rows.iter().flatten() {
            histogram[color.index()] += 1;
        }
        histogram
    }

    /// Count the pairs of adjacent cells that have the same color.
    ///
    /// Return the number of same-color pairs and the total number of adjacent pairs.
    pub fn same_color_pairs(&self) -> (usize, usize) {
        let mut same: usize = 0;
        let mut total: usize = 0;
        for (row, cells) in self.iter_rows() {
            for (col, color) in cells.iter().enumerate() {
                // Each pair is seen from both cells, so only count it from the first one
                for (r, c) in neighbors(row, col, self.num_rows(), self.num_cols)
                    .into_iter()
                    .filter(|n| *n > (row, col))
                {
                    total += 1;
                    if self.get(r, c) == Some(*color) {
                        same += 1;
                    }
                }
            }
        }
        (same, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn offset_set(col: usize) -> HashSet<(isize, isize)> {
        neighbor_offsets(col).into_iter().collect()
    }

    #[test]
    fn even_column_offsets() {
        let expected: HashSet<(isize, isize)> =
            [(0, -1), (0, 1), (-1, 0), (1, 0), (1, -1), (1, 1)]
                .into_iter()
                .collect();
        assert_eq!(offset_set(0), expected);
        assert_eq!(offset_set(4), expected);
    }

    #[test]
    fn odd_column_offsets() {
        let expected: HashSet<(isize, isize)> =
            [(0, -1), (0, 1), (-1, 0), (1, 0), (-1, -1), (-1, 1)]
                .into_iter()
                .collect();
        assert_eq!(offset_set(1), expected);
        assert_eq!(offset_set(7), expected);
    }

    #[test]
    fn interior_cell_has_six_neighbors() {
        let n: Vec<(usize, usize)> = neighbors(5, 3, 10, 9);
        assert_eq!(n.len(), 6);
        let set: HashSet<(usize, usize)> = n.into_iter().collect();
        let expected: HashSet<(usize, usize)> = [(5, 2), (5, 4), (4, 3), (6, 3), (4, 2), (4, 4)]
            .into_iter()
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn corner_cells_are_clipped() {
        // Top-left, even column: (1,1), (2,0) and (2,1)
        let set: HashSet<(usize, usize)> = neighbors(1, 0, 10, 9).into_iter().collect();
        let expected: HashSet<(usize, usize)> = [(1, 1), (2, 0), (2, 1)].into_iter().collect();
        assert_eq!(set, expected);

        // Bottom-right, even column 8 of 9: (10,7) and (9,8)
        let set: HashSet<(usize, usize)> = neighbors(10, 8, 10, 9).into_iter().collect();
        let expected: HashSet<(usize, usize)> = [(10, 7), (9, 8)].into_iter().collect();
        assert_eq!(set, expected);

        // Top row, odd column: nothing above
        assert!(neighbors(1, 3, 10, 9).iter().all(|(r, _)| *r >= 1));
        assert_eq!(neighbors(1, 3, 10, 9).len(), 3);
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let (num_rows, num_cols) = (6, 7);
        for row in 1..=num_rows {
            for col in 0..num_cols {
                for (r, c) in neighbors(row, col, num_rows, num_cols) {
                    assert!(
                        neighbors(r, c, num_rows, num_cols).contains(&(row, col)),
                        "({row},{col}) -> ({r},{c}) is not reciprocal"
                    );
                }
            }
        }
    }

    #[test]
    fn grid_accessors_are_one_based() {
        let grid = Grid::from_rows(
            2,
            vec![vec![Color::Red, Color::Blue], vec![Color::Green, Color::Red]],
        );
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_cols(), 2);
        assert_eq!(grid.row(0), None);
        assert_eq!(grid.get(1, 1), Some(Color::Blue));
        assert_eq!(grid.get(2, 0), Some(Color::Green));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.iter_rows().map(|(n, _)| n).collect::<Vec<_>>(), vec![1, 2]);

        let histogram = grid.color_histogram();
        assert_eq!(histogram[Color::Red.index()], 2);
        assert_eq!(histogram[Color::Yellow.index()], 0);
    }

    #[test]
    fn same_color_pairs_counts_each_pair_once() {
        // (1,0)-(1,1), (1,0)-(2,0), (1,0)-(2,1), (1,1)-(2,1), (2,0)-(2,1)
        let grid = Grid::from_rows(
            2,
            vec![vec![Color::Red, Color::Red], vec![Color::Blue, Color::Red]],
        );
        assert_eq!(grid.same_color_pairs(), (3, 5));
    }
}
