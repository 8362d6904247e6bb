/*
colors.rs

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

//! Tile colors.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Colors of the hex tiles.
///
/// The discriminant is the position of the color in [`PALETTE`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Blue,
    Gray,
    Green,
    Pink,
    Red,
    Yellow,
}

/// All the tile colors, in discriminant order.
pub const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Gray,
    Color::Green,
    Color::Pink,
    Color::Red,
    Color::Yellow,
];

impl Color {
    /// Position of the color in [`PALETTE`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Return a color drawn uniformly from the whole palette.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.random_range(0..PALETTE.len())]
}
