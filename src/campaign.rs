/*
campaign.rs

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

//! Campaign configuration.
//!
//! A [`CampaignConfig`] object describes the whole level campaign: how many levels to generate,
//! the width of the boards, and the range of each difficulty parameter.
//! The [`crate::generator::scheduler`] module interpolates every level's tunables from these
//! ranges.
//!
//! The configuration is set once at startup, either from the built-in defaults or from a JSON
//! file (see [`crate::saver::campaign`]), and is never modified afterward.

use serde::{Deserialize, Serialize};

use crate::generator::scheduler::{self, ScheduleError};

/// Maximum number of columns of a board.
pub const MAX_COLUMNS: usize = 100;

/// Range of values for a difficulty parameter.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    /// Create a [`ParamRange`] object.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether both bounds are between 0 and 1.
    fn is_probability(&self) -> bool {
        (0.0..=1.0).contains(&self.min) && (0.0..=1.0).contains(&self.max)
    }
}

/// Campaign parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CampaignConfig {
    /// Number of levels in the campaign, not counting the tutorial level.
    pub level_count: usize,

    /// Number of columns in every board.
    pub num_cols: usize,

    /// Probability that a cell takes the color of its neighbors.
    /// Decreases as the level number increases.
    pub cluster_prob: ParamRange,

    /// Leniency parameter for the game client. Decreases as the level number increases.
    pub niceness: ParamRange,

    /// Probability of a bomb tile. Decreases as the level number increases.
    pub bomb_prob: ParamRange,

    /// Probability of a super tile. Decreases as the level number increases.
    pub super_prob: ParamRange,

    /// Number of moves between two pushes of a new row.
    /// Decreases as the level number increases.
    pub push_interval: ParamRange,

    /// Score to reach to complete the level. Increases with the level number.
    pub target_score: ParamRange,

    /// Every `boss_period` level is a boss level.
    pub boss_period: usize,

    /// Fraction (between 0 and 1) by which the difficulty parameters of boss levels are pulled
    /// back toward their minimum.
    pub boss_reduction: f64,

    /// Target scores are rounded up to a multiple of this value.
    pub target_multiple: u32,

    /// Number of rows of every board, before adding the rows required by the target score.
    pub base_rows: usize,

    /// Points that a single cell is worth. Used to compute how many rows a target score needs.
    pub points_per_cell: u32,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            level_count: 250,
            num_cols: 9,
            cluster_prob: ParamRange::new(0.2, 0.7),
            niceness: ParamRange::new(0.2, 0.5),
            bomb_prob: ParamRange::new(0.2, 0.33),
            super_prob: ParamRange::new(0.01, 0.075),
            push_interval: ParamRange::new(5.0, 15.0),
            target_score: ParamRange::new(100.0, 1500.0),
            boss_period: 10,
            boss_reduction: 0.3,
            target_multiple: 50,
            base_rows: 8,
            points_per_cell: 10,
        }
    }
}

impl CampaignConfig {
    /// Verify that the configuration can be used to generate a campaign.
    ///
    /// # Errors
    ///
    /// The method returns [`ScheduleError::InvalidCampaign`] with a description of the first
    /// problem found.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let invalid = |msg: String| Err(ScheduleError::InvalidCampaign(msg));

        if self.level_count == 0 {
            return invalid("the level count must be greater than zero".to_string());
        }
        if self.num_cols == 0 {
            return invalid("the column count must be greater than zero".to_string());
        }
        if self.num_cols > MAX_COLUMNS {
            return invalid(format!(
                "the column count ({}) must not exceed {MAX_COLUMNS}",
                self.num_cols
            ));
        }
        if self.boss_period == 0 {
            return invalid("the boss period must be greater than zero".to_string());
        }
        if self.target_multiple == 0 {
            return invalid("the target multiple must be greater than zero".to_string());
        }
        if self.points_per_cell == 0 {
            return invalid("the points per cell must be greater than zero".to_string());
        }
        if !(0.0..=1.0).contains(&self.boss_reduction) {
            return invalid(format!(
                "the boss reduction ({}) must be between 0 and 1",
                self.boss_reduction
            ));
        }

        let ranges: [(&str, &ParamRange, bool); 6] = [
            ("clusterProb", &self.cluster_prob, true),
            ("niceness", &self.niceness, false),
            ("bombProb", &self.bomb_prob, true),
            ("superProb", &self.super_prob, true),
            ("pushInterval", &self.push_interval, false),
            ("targetScore", &self.target_score, false),
        ];
        for (name, range, probability) in ranges {
            if range.min.is_nan() || range.max.is_nan() || range.min > range.max {
                return invalid(format!(
                    "{name}: the minimum ({}) is greater than the maximum ({})",
                    range.min, range.max
                ));
            }
            if probability && !range.is_probability() {
                return invalid(format!("{name}: the values must be between 0 and 1"));
            }
            if range.min < 0.0 {
                return invalid(format!("{name}: the values must be positive"));
            }
        }

        // The hex tile probability is what remains, so it must not become negative
        if self.bomb_prob.max + self.super_prob.max > 1.0 {
            return invalid(format!(
                "the maximum bomb ({}) and super ({}) probabilities add up to more than 1",
                self.bomb_prob.max, self.super_prob.max
            ));
        }

        // The target score only grows, so the last level has the largest board
        scheduler::target_and_rows(self, self.target_score.max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_campaign_is_valid() {
        assert_eq!(CampaignConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_levels() {
        let config = CampaignConfig {
            level_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::InvalidCampaign(_))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let config = CampaignConfig {
            niceness: ParamRange::new(0.6, 0.1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_probability_above_one() {
        let config = CampaignConfig {
            cluster_prob: ParamRange::new(0.5, 1.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_hazards_summing_above_one() {
        let config = CampaignConfig {
            bomb_prob: ParamRange::new(0.5, 0.8),
            super_prob: ParamRange::new(0.1, 0.3),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_boss_reduction_out_of_range() {
        let config = CampaignConfig {
            boss_reduction: 1.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_target_score_beyond_u32() {
        let config = CampaignConfig {
            level_count: 2,
            target_score: ParamRange::new(100.0, 1.0e10),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::InvalidCampaign(_))
        ));
    }

    #[test]
    fn rejects_oversized_boards() {
        // 90 points per row: 100000 points need more than a thousand rows
        let config = CampaignConfig {
            target_score: ParamRange::new(100.0, 100_000.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CampaignConfig {
            num_cols: MAX_COLUMNS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CampaignConfig {
            target_score: ParamRange::new(100.0, 50_000.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: CampaignConfig =
            serde_json::from_str(r#"{ "levelCount": 12, "clusterProb": { "min": 0.1, "max": 0.9 } }"#)
                .expect("valid campaign JSON");
        assert_eq!(config.level_count, 12);
        assert_eq!(config.cluster_prob, ParamRange::new(0.1, 0.9));
        assert_eq!(config.num_cols, CampaignConfig::default().num_cols);
        assert_eq!(config.target_multiple, 50);
    }
}
