/*
cli_options.rs

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

//! Process command-line options and run the generation.
//!
//! # Examples
//!
//! Generate the default campaign of 250 levels in the `levels` directory:
//!
//! ```
//! $ hexlevels
//! ```
//!
//! Generate a reproducible campaign of 30 levels, and print some statistics:
//!
//! ```
//! $ hexlevels -l 30 -s 1234 -o /tmp/levels --summary
//!             levels = 31
//!        boss levels = 3
//!              cells = 4770
//!               blue = 839 (17.6%)
//! ...
//! ```
//!
//! Save the default campaign configuration to edit it, and then use it:
//!
//! ```
//! $ hexlevels --write-campaign campaign.json
//! $ hexlevels --campaign campaign.json
//! ```

use clap::Parser;
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::campaign::CampaignConfig;
use crate::config::{COPYRIGHT_NOTICE, DEFAULT_OUTPUT_DIR, PKGNAME, VERSION};
use crate::generator::level::{self, Level};
use crate::saver::campaign::SaverCampaign;
use crate::saver::levels::{OutputFormat, SaverLevels};
use crate::summary::Summary;

/// Generate the levels of a hexagonal tile-matching game.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// JSON file with the campaign configuration
    #[arg(long, value_name = "FILE")]
    campaign: Option<PathBuf>,

    /// Write the campaign configuration to the given JSON file and exit
    #[arg(long, value_name = "FILE")]
    write_campaign: Option<PathBuf>,

    /// Number of levels, overriding the campaign configuration
    #[arg(short, long)]
    levels: Option<usize>,

    /// Number of columns, overriding the campaign configuration
    #[arg(short, long)]
    columns: Option<usize>,

    /// Directory where the level files are written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Seed for the random generator (the current time by default)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Layout of the JSON files
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Do not generate the tutorial level
    #[arg(long, default_value_t = false)]
    no_tutorial: bool,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Build the campaign configuration
    //
    let mut campaign: CampaignConfig = match &args.campaign {
        Some(path) => match SaverCampaign::new(path.clone()).get_campaign() {
            Ok(c) => c,
            Err(e) => {
                error!("Cannot read the campaign file {path:?}: {e}");
                return 1;
            }
        },
        None => CampaignConfig::default(),
    };
    if let Some(n) = args.levels {
        campaign.level_count = n;
    }
    if let Some(n) = args.columns {
        campaign.num_cols = n;
    }
    if let Err(e) = campaign.validate() {
        error!("{e}");
        return 1;
    }
    debug!("Campaign: {campaign:?}");

    if let Some(path) = &args.write_campaign {
        return match SaverCampaign::new(path.clone()).save_campaign(&campaign) {
            Ok(()) => {
                info!("Campaign configuration written to {path:?}");
                0
            }
            Err(e) => {
                error!("Cannot write the campaign file {path:?}: {e}");
                1
            }
        };
    }

    //
    // Generate the levels
    //
    let seed: u64 = args
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp().unsigned_abs());
    info!("{PKGNAME} {VERSION}: generating {} levels with seed {seed}", campaign.level_count);

    let options = RunOptions {
        out_dir: args.output.clone(),
        format: args.format,
        tutorial: !args.no_tutorial,
    };
    let mut summary = Summary::new();
    if let Err(e) = run(&options, &campaign, seed, &mut summary) {
        error!("Level generation failed: {e}");
        return 1;
    }
    summary.finish();

    if args.summary {
        println!("{summary}");
    }
    0
}

/// Where and how a run writes its levels.
struct RunOptions {
    out_dir: PathBuf,
    format: OutputFormat,

    /// Whether to also generate the tutorial level.
    tutorial: bool,
}

/// Generate every level of the campaign, and then the tutorial level.
///
/// The levels are written to `1.json` through `N.json`, and the tutorial to `tutorial.json`.
/// The first error stops the run.
fn run(
    options: &RunOptions,
    campaign: &CampaignConfig,
    seed: u64,
    summary: &mut Summary,
) -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let saver = SaverLevels::new(options.out_dir.clone(), options.format)?;
    info!("Writing levels to {:?}", saver.out_dir());

    for index in 0..campaign.level_count {
        let l: Level = level::generate_level(&mut rng, campaign, index)?;
        saver.save_level(index + 1, &l)?;
        summary.add_level(&l);
    }

    // The tutorial comes last so that the campaign levels do not depend on it for a given seed
    if options.tutorial {
        let l: Level = level::generate_tutorial(&mut rng, campaign)?;
        saver.save_tutorial(&l)?;
        summary.add_level(&l);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use crate::campaign::ParamRange;
    use crate::config::TUTORIAL_NAME;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir: PathBuf =
            env::temp_dir().join(format!("hexlevels-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("readable output directory")
            .map(|e| {
                e.expect("directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    fn run_into(dir: &Path, campaign: &CampaignConfig, tutorial: bool) -> Summary {
        let options = RunOptions {
            out_dir: dir.to_path_buf(),
            format: OutputFormat::Pretty,
            tutorial,
        };
        let mut summary = Summary::new();
        run(&options, campaign, 1234, &mut summary).expect("successful run");
        summary
    }

    #[test]
    fn run_writes_one_file_per_level() {
        let campaign = CampaignConfig {
            level_count: 5,
            ..Default::default()
        };
        let with_dir: PathBuf = scratch_dir("run-tutorial");
        let without_dir: PathBuf = scratch_dir("run-no-tutorial");

        let with = run_into(&with_dir, &campaign, true);
        let without = run_into(&without_dir, &campaign, false);
        assert!(with.to_string().contains("levels = 6"));
        assert!(without.to_string().contains("levels = 5"));

        let mut expected: Vec<String> = (1..=5).map(|n| format!("{n}.json")).collect();
        expected.sort();
        assert_eq!(file_names(&without_dir), expected);

        expected.push(format!("{TUTORIAL_NAME}.json"));
        expected.sort();
        assert_eq!(file_names(&with_dir), expected);

        // The tutorial is generated last, so it does not change the campaign levels
        for n in 1..=5 {
            let name = format!("{n}.json");
            assert_eq!(
                fs::read(with_dir.join(&name)).expect("level file"),
                fs::read(without_dir.join(&name)).expect("level file"),
                "{name}"
            );
        }

        fs::remove_dir_all(&with_dir).expect("removable scratch directory");
        fs::remove_dir_all(&without_dir).expect("removable scratch directory");
    }

    #[test]
    fn run_stops_on_invalid_campaign() {
        let campaign = CampaignConfig {
            level_count: 2,
            target_score: ParamRange::new(100.0, 1.0e10),
            ..Default::default()
        };
        let dir: PathBuf = scratch_dir("run-invalid");
        let options = RunOptions {
            out_dir: dir.clone(),
            format: OutputFormat::Compact,
            tutorial: true,
        };
        let mut summary = Summary::new();
        assert!(run(&options, &campaign, 7, &mut summary).is_err());
        assert_eq!(file_names(&dir), vec!["1.json".to_string()]);

        fs::remove_dir_all(&dir).expect("removable scratch directory");
    }
}
