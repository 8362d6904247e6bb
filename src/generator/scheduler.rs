/*
scheduler.rs

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

//! Difficulty curve.
//!
//! Compute the tunables of a level from its index in the campaign.
//! No randomness is involved: the same configuration and index always give the same
//! [`LevelTunables`], and every level can be computed independently of the others.
//!
//! The campaign progress is mapped from `[0, level_count]` onto each parameter range:
//!
//! * Parameters that get harder by decreasing (cluster probability, niceness, bomb and super
//!   probabilities, push interval) use the remaining progress, `level_count - index`, so that
//!   the first level gets the maximum value.
//! * The target score uses the index directly, so that it increases along the campaign.

use log::debug;
use std::error::Error;
use std::fmt;

use super::level::LevelTunables;
use crate::campaign::{CampaignConfig, ParamRange};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ScheduleError {
    /// The source range of an interpolation is empty, which would divide by zero.
    DegenerateRange { from_min: f64, from_max: f64 },

    /// The campaign configuration cannot produce levels.
    InvalidCampaign(String),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScheduleError::DegenerateRange { from_min, from_max } => write!(
                f,
                "cannot interpolate from the empty range [{from_min}, {from_max}]"
            ),
            ScheduleError::InvalidCampaign(msg) => write!(f, "invalid campaign: {msg}"),
        }
    }
}

impl Error for ScheduleError {}

/// Map `from_input` from the `[from_min, from_max]` range onto the `[to_min, to_max]` range.
///
/// # Errors
///
/// The function returns [`ScheduleError::DegenerateRange`] when `from_min` and `from_max` are
/// equal.
pub fn linear_scale(
    from_min: f64,
    from_max: f64,
    to_min: f64,
    to_max: f64,
    from_input: f64,
) -> Result<f64, ScheduleError> {
    if from_max == from_min {
        return Err(ScheduleError::DegenerateRange { from_min, from_max });
    }
    Ok(to_min + (to_max - to_min) * (from_input - from_min) / (from_max - from_min))
}

/// Maximum number of rows of a board.
pub const MAX_ROWS: usize = 1000;

/// Round `num` up to the nearest multiple of `multiple`.
///
/// Return `None` when `multiple` is zero or when the result does not fit in a `u32`.
pub fn round_up_to_multiple(num: u32, multiple: u32) -> Option<u32> {
    num.checked_next_multiple_of(multiple)
}

/// Number of rows for a board that must allow reaching the given target score.
///
/// Return `None` when a row is worth no points or when the count overflows.
pub fn rows_for_target(config: &CampaignConfig, target: u32) -> Option<usize> {
    let points_per_row: usize = config.num_cols.checked_mul(config.points_per_cell as usize)?;
    if points_per_row == 0 {
        return None;
    }
    config
        .base_rows
        .checked_add((target as usize).div_ceil(points_per_row))
}

/// Round an interpolated target score and compute the height of the board that goes with it.
///
/// # Errors
///
/// The function returns [`ScheduleError::InvalidCampaign`] when the rounded target does not fit
/// in a `u32`, or when the board would need more than [`MAX_ROWS`] rows.
pub fn target_and_rows(
    config: &CampaignConfig,
    target_score: f64,
) -> Result<(u32, usize), ScheduleError> {
    let too_large =
        || ScheduleError::InvalidCampaign(format!("the target score {target_score} is too large"));

    if !(0.0..=u32::MAX as f64).contains(&target_score) {
        return Err(too_large());
    }
    let target: u32 =
        round_up_to_multiple(target_score as u32, config.target_multiple).ok_or_else(too_large)?;
    let num_rows: usize = rows_for_target(config, target)
        .filter(|n| *n <= MAX_ROWS)
        .ok_or_else(|| {
            ScheduleError::InvalidCampaign(format!(
                "the target score {target} needs more than {MAX_ROWS} rows"
            ))
        })?;
    Ok((target, num_rows))
}

/// Whether the level at the given index (starting at 0) is a boss level.
pub fn is_boss_level(config: &CampaignConfig, level_index: usize) -> bool {
    config.boss_period > 0 && (level_index + 1) % config.boss_period == 0
}

/// Pull `value` back toward the minimum of the range by the given fraction.
fn reduce_toward_min(value: f64, range: &ParamRange, reduction: f64) -> f64 {
    range.min + (value - range.min) * (1.0 - reduction)
}

/// Make the provided tunables a boss level.
///
/// The cluster probability, niceness, bomb and super probabilities move toward their minimum by
/// [`CampaignConfig::boss_reduction`].
/// The hex tile probability is recomputed afterward.
pub fn apply_boss_reduction(tunables: &mut LevelTunables, config: &CampaignConfig) {
    let reduction: f64 = config.boss_reduction;

    tunables.cluster_prob =
        reduce_toward_min(tunables.cluster_prob, &config.cluster_prob, reduction);
    tunables.niceness = reduce_toward_min(tunables.niceness, &config.niceness, reduction);
    tunables.bomb_prob = reduce_toward_min(tunables.bomb_prob, &config.bomb_prob, reduction);
    tunables.super_prob = reduce_toward_min(tunables.super_prob, &config.super_prob, reduction);
    tunables.hex_prob = 1.0 - tunables.bomb_prob - tunables.super_prob;
    tunables.boss_level = true;
}

/// Compute the tunables for the level at the given index (starting at 0).
///
/// # Errors
///
/// The function returns an error if the index is beyond the campaign, if the campaign has no
/// level (the interpolation range is then empty), or if the target score is too large.
pub fn compute_tunables(
    config: &CampaignConfig,
    level_index: usize,
) -> Result<LevelTunables, ScheduleError> {
    if level_index >= config.level_count && config.level_count > 0 {
        return Err(ScheduleError::InvalidCampaign(format!(
            "level index {level_index} is beyond the {} levels of the campaign",
            config.level_count
        )));
    }

    let num_levels: f64 = config.level_count as f64;
    let remaining: f64 = config.level_count.saturating_sub(level_index) as f64;
    let decreasing =
        |range: &ParamRange| linear_scale(0.0, num_levels, range.min, range.max, remaining);

    let cluster_prob: f64 = decreasing(&config.cluster_prob)?;
    let niceness: f64 = decreasing(&config.niceness)?;
    let bomb_prob: f64 = decreasing(&config.bomb_prob)?;
    let super_prob: f64 = decreasing(&config.super_prob)?;
    let push_interval: f64 = decreasing(&config.push_interval)?.ceil();

    let target_score: f64 = linear_scale(
        0.0,
        num_levels,
        config.target_score.min,
        config.target_score.max,
        level_index as f64,
    )?;
    let (target, num_rows) = target_and_rows(config, target_score)?;

    let mut tunables = LevelTunables {
        target,
        push_interval: push_interval as u32,
        hex_prob: 1.0 - bomb_prob - super_prob,
        bomb_prob,
        super_prob,
        niceness,
        cluster_prob,
        num_rows,
        boss_level: false,
    };

    if is_boss_level(config, level_index) {
        apply_boss_reduction(&mut tunables, config);
    }

    debug!("Level {}: {tunables:?}", level_index + 1);
    Ok(tunables)
}

/// Compute the tunables for the tutorial level.
///
/// The tutorial uses the easiest end of every range, and is never a boss level.
///
/// # Errors
///
/// The function returns an error if the minimum target score is too large.
pub fn tutorial_tunables(config: &CampaignConfig) -> Result<LevelTunables, ScheduleError> {
    let (target, num_rows) = target_and_rows(config, config.target_score.min)?;
    let bomb_prob: f64 = config.bomb_prob.max;
    let super_prob: f64 = config.super_prob.max;

    Ok(LevelTunables {
        target,
        push_interval: config.push_interval.max.ceil() as u32,
        hex_prob: 1.0 - bomb_prob - super_prob,
        bomb_prob,
        super_prob,
        niceness: config.niceness.max,
        cluster_prob: config.cluster_prob.max,
        num_rows,
        boss_level: false,
    })
}
