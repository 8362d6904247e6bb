/*
summary.rs

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

//! Statistics about a generation run, printed with the `--summary` option.

use std::fmt;
use std::time::Instant;

use crate::generator::colors::PALETTE;
use crate::generator::level::Level;

/// Run statistics.
pub struct Summary {
    /// Number of generated levels, including the tutorial.
    levels: usize,

    boss_levels: usize,

    /// Number of painted cells over all the levels.
    cells: usize,

    /// Number of cells of each color, indexed as [`PALETTE`].
    histogram: [usize; PALETTE.len()],

    /// Adjacent cell pairs with the same color, and all the adjacent cell pairs.
    same_color_pairs: usize,
    pairs: usize,

    /// Time when the run started.
    start: Instant,

    /// Duration of the run in seconds, set by [`Summary::finish`].
    duration: f32,
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl Summary {
    /// Create a [`Summary`] object and start the timer.
    pub fn new() -> Self {
        Self {
            levels: 0,
            boss_levels: 0,
            cells: 0,
            histogram: [0; PALETTE.len()],
            same_color_pairs: 0,
            pairs: 0,
            start: Instant::now(),
            duration: 0.0,
        }
    }

    /// Account for a generated level.
    pub fn add_level(&mut self, level: &Level) {
        self.levels += 1;
        if level.tunables.boss_level {
            self.boss_levels += 1;
        }
        self.cells += level.grid.num_rows() * level.grid.num_cols();
        for (total, count) in self.histogram.iter_mut().zip(level.grid.color_histogram()) {
            *total += count;
        }
        let (same, pairs) = level.grid.same_color_pairs();
        self.same_color_pairs += same;
        self.pairs += pairs;
    }

    /// Stop the timer.
    pub fn finish(&mut self) {
        self.duration = self.start.elapsed().as_secs_f32();
    }

    /// Fraction of the adjacent cell pairs that share the same color.
    pub fn same_color_ratio(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            self.same_color_pairs as f64 / self.pairs as f64
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "            levels = {}", self.levels)?;
        writeln!(f, "       boss levels = {}", self.boss_levels)?;
        writeln!(f, "             cells = {}", self.cells)?;
        for (color, count) in PALETTE.iter().zip(self.histogram) {
            let percent: f64 = if self.cells == 0 {
                0.0
            } else {
                100.0 * count as f64 / self.cells as f64
            };
            writeln!(f, "{:>18} = {count} ({percent:.1}%)", color.to_string())?;
        }
        writeln!(f, "  same-color pairs = {:.3}", self.same_color_ratio())?;
        write!(f, "        total time = {}s", self.duration)
    }
}
