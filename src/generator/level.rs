/*
level.rs

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

//! Level record.
//!
//! A [`Level`] groups the tunables of a level and its painted board.
//! The game client reads a flat record, so the [`Serialize`] implementation writes the
//! tunables followed by one `rowN` entry per board row:
//!
//! ```json
//! {
//!     "target": 150,
//!     "pushInterval": 14,
//!     "hexProb": 0.6,
//!     "bombProb": 0.33,
//!     "superProb": 0.07,
//!     "niceness": 0.5,
//!     "numRows": 10,
//!     "bossLevel": false,
//!     "row1": ["blue", "gray", "green", ...],
//!     ...
//! }
//! ```

use rand::Rng;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::hexgrid::Grid;
use super::painter;
use super::scheduler::{self, ScheduleError};
use crate::campaign::CampaignConfig;

/// Tunables of a level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LevelTunables {
    /// Score to reach, rounded up to [`CampaignConfig::target_multiple`].
    pub target: u32,

    /// Number of moves between two pushes of a new row.
    pub push_interval: u32,

    /// Probability of an ordinary hex tile. Always `1 - bomb_prob - super_prob`.
    pub hex_prob: f64,

    pub bomb_prob: f64,
    pub super_prob: f64,

    /// Passed through to the game client.
    pub niceness: f64,

    /// Used by the painter only; not part of the level record.
    pub cluster_prob: f64,

    pub num_rows: usize,
    pub boss_level: bool,
}

/// Generated level.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub tunables: LevelTunables,
    pub grid: Grid,
}

/// Serialize a [`Level`] object as a flat record.
impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let t: &LevelTunables = &self.tunables;

        // `8` is the number of tunables in the record
        let mut state = serializer.serialize_map(Some(8 + self.grid.num_rows()))?;
        state.serialize_entry("target", &t.target)?;
        state.serialize_entry("pushInterval", &t.push_interval)?;
        state.serialize_entry("hexProb", &t.hex_prob)?;
        state.serialize_entry("bombProb", &t.bomb_prob)?;
        state.serialize_entry("superProb", &t.super_prob)?;
        state.serialize_entry("niceness", &t.niceness)?;
        state.serialize_entry("numRows", &t.num_rows)?;
        state.serialize_entry("bossLevel", &t.boss_level)?;
        for (n, row) in self.grid.iter_rows() {
            state.serialize_entry(&format!("row{n}"), row)?;
        }
        state.end()
    }
}

/// Generate the level at the given index (starting at 0).
///
/// # Errors
///
/// The function returns an error when the tunables cannot be computed from the campaign.
pub fn generate_level<R: Rng + ?Sized>(
    rng: &mut R,
    config: &CampaignConfig,
    level_index: usize,
) -> Result<Level, ScheduleError> {
    let tunables: LevelTunables = scheduler::compute_tunables(config, level_index)?;
    let grid: Grid = painter::paint(rng, &tunables, tunables.num_rows, config.num_cols);
    Ok(Level { tunables, grid })
}

/// Generate the tutorial level.
///
/// # Errors
///
/// The function returns an error when the tutorial target score is too large.
pub fn generate_tutorial<R: Rng + ?Sized>(
    rng: &mut R,
    config: &CampaignConfig,
) -> Result<Level, ScheduleError> {
    let tunables: LevelTunables = scheduler::tutorial_tunables(config)?;
    let grid: Grid = painter::paint(rng, &tunables, tunables.num_rows, config.num_cols);
    Ok(Level { tunables, grid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    use crate::campaign::ParamRange;

    #[test]
    fn level_record_is_flat() {
        let config = CampaignConfig {
            level_count: 10,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let level: Level = generate_level(&mut rng, &config, 3).expect("valid level");
        let json: Value = serde_json::to_value(&level).expect("serializable level");
        let map = json.as_object().expect("level is a JSON object");

        assert_eq!(map.len(), 8 + level.tunables.num_rows);
        assert_eq!(map["target"], level.tunables.target);
        assert_eq!(map["numRows"], level.tunables.num_rows);
        assert_eq!(map["bossLevel"], false);
        assert!(map.get("clusterProb").is_none());
        assert!(map.get("row0").is_none());

        for n in 1..=level.tunables.num_rows {
            let row = map[&format!("row{n}")]
                .as_array()
                .expect("row is a JSON array");
            assert_eq!(row.len(), config.num_cols);
            assert!(row.iter().all(Value::is_string));
        }
    }

    #[test]
    fn grid_height_follows_tunables() {
        let config = CampaignConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        for index in [0, 9, 120, 249] {
            let level: Level = generate_level(&mut rng, &config, index).expect("valid level");
            assert_eq!(level.grid.num_rows(), level.tunables.num_rows);
            assert_eq!(level.grid.num_cols(), config.num_cols);
        }
    }

    #[test]
    fn end_to_end_small_campaign() {
        let config = CampaignConfig {
            level_count: 10,
            num_cols: 9,
            cluster_prob: ParamRange::new(0.2, 0.7),
            target_score: ParamRange::new(100.0, 1500.0),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2025);
        let levels: Vec<Level> = (0..config.level_count)
            .map(|i| generate_level(&mut rng, &config, i).expect("valid level"))
            .collect();

        assert!((levels[0].tunables.cluster_prob - 0.7).abs() < 1e-9);
        assert_eq!(levels[0].tunables.target, 100);
        assert!(levels[9].tunables.cluster_prob < 0.3);
        assert!(levels[9].tunables.target >= 1300);
        assert!(levels[9].tunables.boss_level);
        assert!(levels.iter().all(|l| l.tunables.target % 50 == 0));
    }

    #[test]
    fn tutorial_level() {
        let config = CampaignConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let level: Level = generate_tutorial(&mut rng, &config).expect("valid tutorial");
        assert!(!level.tunables.boss_level);
        assert_eq!(level.grid.num_rows(), level.tunables.num_rows);
    }
}
