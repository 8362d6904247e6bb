/*
levels.rs

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

//! Write the generated levels.
//!
//! Each level is saved in its own file in the output directory: `1.json` for the first level,
//! `2.json` for the second, and so on.
//! The tutorial level is saved in `tutorial.json`.

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::TUTORIAL_NAME;
use crate::generator::level::Level;

/// Layout of the JSON files.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented with four spaces.
    #[default]
    Pretty,

    /// Everything on a single line.
    Compact,
}

/// Object to write levels into a directory.
pub struct SaverLevels {
    /// Output directory.
    out_dir: PathBuf,

    format: OutputFormat,
}

impl SaverLevels {
    /// Create a [`SaverLevels`] object.
    ///
    /// The output directory is created if it does not exist.
    pub fn new(out_dir: PathBuf, format: OutputFormat) -> Result<Self, Box<dyn Error>> {
        fs::create_dir_all(&out_dir)?;
        debug!("Output directory: {out_dir:?}");
        Ok(Self { out_dir, format })
    }

    /// Return the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Save the provided level. Level numbers start from 1.
    pub fn save_level(&self, number: usize, level: &Level) -> Result<PathBuf, Box<dyn Error>> {
        self.write(&format!("{number}.json"), level)
    }

    /// Save the tutorial level.
    pub fn save_tutorial(&self, level: &Level) -> Result<PathBuf, Box<dyn Error>> {
        self.write(&format!("{TUTORIAL_NAME}.json"), level)
    }

    /// Serialize the level into the given file of the output directory.
    fn write(&self, file_name: &str, level: &Level) -> Result<PathBuf, Box<dyn Error>> {
        let path: PathBuf = self.out_dir.join(file_name);
        let file: File = File::create(&path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        match self.format {
            OutputFormat::Pretty => {
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
                level.serialize(&mut ser)?;
            }
            OutputFormat::Compact => serde_json::to_writer(&mut writer, level)?,
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        debug!("Saved {path:?}");
        Ok(path)
    }
}
