/*
painter.rs

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

//! Fill a board with clustered colors.
//!
//! Cells are painted once, row by row from the top, and from left to right inside a row.
//! For each cell, a random number is drawn:
//!
//! * If it is below the level's cluster probability, the cell takes the most frequent color
//!   among its adjacent cells that are already painted.
//!   Ties are broken randomly, and a cell without painted neighbors gets a random color.
//! * Otherwise the cell gets a random color.
//!
//! Because only already painted cells are considered, a cell can influence the cells painted
//! after it but never the ones before it.

use log::{Level, debug, log_enabled};
use rand::Rng;

use super::colors::{self, Color, PALETTE};
use super::hexgrid::{self, Grid};
use super::level::LevelTunables;

/// Board being painted.
struct Canvas {
    num_rows: usize,
    num_cols: usize,

    /// Painted rows. The last row might be incomplete.
    rows: Vec<Vec<Color>>,
}

impl Canvas {
    /// Create an empty [`Canvas`] object.
    fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            rows: Vec::with_capacity(num_rows),
        }
    }

    /// Return the coordinates (row, col) of the next cell to paint.
    fn next_cell(&self) -> (usize, usize) {
        match self.rows.last() {
            Some(r) if r.len() < self.num_cols => (self.rows.len(), r.len()),
            _ => (self.rows.len() + 1, 0),
        }
    }

    /// Return the color of the given cell, or None if it is not painted yet.
    fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.rows.get(row.checked_sub(1)?)?.get(col).copied()
    }

    /// Return the colors of the painted cells adjacent to the given cell.
    fn painted_neighbors(&self, row: usize, col: usize) -> Vec<Color> {
        hexgrid::neighbors(row, col, self.num_rows, self.num_cols)
            .into_iter()
            .filter_map(|(r, c)| self.get(r, c))
            .collect()
    }

    /// Choose the color of the next cell, paint it, and return the color.
    fn paint_next<R: Rng + ?Sized>(&mut self, rng: &mut R, cluster_prob: f64) -> Color {
        let (row, col) = self.next_cell();
        assert!(
            row <= self.num_rows,
            "Bug: painting beyond the {} rows of the board",
            self.num_rows
        );

        let draw: f64 = rng.random();
        let clustered: Option<Color> = if draw < cluster_prob {
            pick_mode_color(rng, &self.painted_neighbors(row, col))
        } else {
            None
        };
        let color: Color = match clustered {
            Some(c) => c,
            None => colors::random_color(rng),
        };

        if col == 0 {
            self.rows.push(Vec::with_capacity(self.num_cols));
        }
        self.rows[row - 1].push(color);
        color
    }

    /// Convert the fully painted canvas into a [`Grid`] object.
    fn into_grid(self) -> Grid {
        Grid::from_rows(self.num_cols, self.rows)
    }
}

/// Return the most frequent colors in the list.
///
/// Several colors are returned when they are tied.
/// Colors are returned in palette order.
/// The returned list is empty when `neighbors` is empty.
pub fn mode_colors(neighbors: &[Color]) -> Vec<Color> {
    let mut counts: [usize; PALETTE.len()] = [0; PALETTE.len()];
    for color in neighbors {
        counts[color.index()] += 1;
    }

    let mut modes: Vec<Color> = Vec::with_capacity(PALETTE.len());
    let mut max_count: usize = 0;
    for (color, count) in PALETTE.into_iter().zip(counts) {
        if count == 0 {
            continue;
        }
        if count > max_count {
            modes.clear();
            modes.push(color);
            max_count = count;
        } else if count == max_count {
            modes.push(color);
        }
    }
    modes
}

/// Return the most frequent color in the list, or None if the list is empty.
///
/// When several colors are tied, one of them is selected randomly.
pub fn pick_mode_color<R: Rng + ?Sized>(rng: &mut R, neighbors: &[Color]) -> Option<Color> {
    let modes: Vec<Color> = mode_colors(neighbors);
    match modes.len() {
        0 => None,
        1 => Some(modes[0]),
        n => Some(modes[rng.random_range(0..n)]),
    }
}

/// Paint a board of the given size by using the cluster probability of the level.
pub fn paint<R: Rng + ?Sized>(
    rng: &mut R,
    tunables: &LevelTunables,
    num_rows: usize,
    num_cols: usize,
) -> Grid {
    let mut canvas = Canvas::new(num_rows, num_cols);

    for _ in 0..num_rows * num_cols {
        canvas.paint_next(rng, tunables.cluster_prob);
    }

    let grid: Grid = canvas.into_grid();
    if log_enabled!(Level::Debug) {
        for (n, row) in grid.iter_rows() {
            let s: String = row.iter().map(|c| format!("{:<7}", c.to_string())).collect();
            debug!("{n:>3}: {s}");
        }
    }
    grid
}
