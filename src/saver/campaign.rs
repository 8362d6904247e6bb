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

//! Load and save the campaign configuration.
//!
//! The file is a serialization of the [`CampaignConfig`] object in JSON format by using
//! [`serde`].
//! Fields missing from the file take their default value.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::campaign::CampaignConfig;

/// Object to load and save a campaign configuration.
pub struct SaverCampaign {
    /// Path to the campaign file.
    campaign_file: PathBuf,
}

impl SaverCampaign {
    /// Create a [`SaverCampaign`] object for the given file.
    pub fn new(campaign_file: PathBuf) -> Self {
        debug!("Campaign file: {campaign_file:?}");
        Self { campaign_file }
    }

    /// Read the [`CampaignConfig`] object from the campaign file.
    ///
    /// The file must exist: the user explicitly asked for it.
    pub fn get_campaign(&self) -> Result<CampaignConfig, Box<dyn Error>> {
        let file: File = File::open(&self.campaign_file)?;
        let reader: BufReader<File> = BufReader::new(file);
        let campaign: CampaignConfig = serde_json::from_reader(reader)?;
        Ok(campaign)
    }

    /// Save the provided [`CampaignConfig`] object.
    pub fn save_campaign(&self, campaign: &CampaignConfig) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.campaign_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, campaign)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::campaign::ParamRange;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("hexlevels-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("scratch directory");
        dir
    }

    #[test]
    fn save_then_load() {
        let dir: PathBuf = scratch_dir("campaign");
        let saver = SaverCampaign::new(dir.join("campaign.json"));
        let campaign = CampaignConfig {
            level_count: 42,
            niceness: ParamRange::new(0.1, 0.4),
            ..Default::default()
        };

        saver.save_campaign(&campaign).expect("saved campaign");
        let loaded: CampaignConfig = saver.get_campaign().expect("loaded campaign");
        assert_eq!(loaded, campaign);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir: PathBuf = scratch_dir("campaign-missing");
        let saver = SaverCampaign::new(dir.join("nope.json"));
        assert!(saver.get_campaign().is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir: PathBuf = scratch_dir("campaign-malformed");
        let path: PathBuf = dir.join("campaign.json");
        fs::write(&path, "{ \"levelCount\": \"many\" }").expect("written file");
        assert!(SaverCampaign::new(path).get_campaign().is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
