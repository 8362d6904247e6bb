/*
generator.rs

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

//! Generate the levels of a campaign.
//!
//! Each level is produced by a two-stage pipeline:
//!
//! * The difficulty scheduler, [`scheduler::compute_tunables`], derives the level's
//!   [`level::LevelTunables`] from the [`crate::campaign::CampaignConfig`] and the level index.
//!   Most parameters are linearly interpolated across the campaign, so that early levels are
//!   easy and late levels are hard.
//!   Every few levels a boss level gets its parameters pulled back toward their minimum.
//!
//! * The grid painter, [`painter::paint`], fills a hexagonal board cell by cell.
//!   With the level's cluster probability, a cell takes the majority color of its already
//!   painted neighbors (see [`hexgrid::neighbors`]); otherwise it gets a random color.
//!
//! [`level::generate_level`] chains the two stages and returns a [`level::Level`] object, which
//! the [`crate::saver::levels`] module writes to disk.
//! A tutorial level, built from the easiest values of every range, is produced by
//! [`level::generate_tutorial`].

pub mod colors;
pub mod hexgrid;
pub mod level;
pub mod painter;
pub mod scheduler;
