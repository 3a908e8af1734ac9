use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use log::LevelFilter;
use pmaze::{DepthFirstSearch, Dims, GoalPlacement, RecursiveBacktracker};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");
const DEFAULT_SIZE: Dims = Dims(10, 10);

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory on this platform")]
    NoConfigDir,
    #[error("could not access settings file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("error reading settings file ({path:?}), {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum MazeGenAlgo {
    #[default]
    #[value(name = "iterative")]
    DepthFirstSearch,
    #[value(name = "recursive")]
    RecursiveBacktracker,
}

impl MazeGenAlgo {
    pub fn apply(self, generator: pmaze::Generator) -> pmaze::Generator {
        match self {
            MazeGenAlgo::DepthFirstSearch => generator.with_algorithm(DepthFirstSearch),
            MazeGenAlgo::RecursiveBacktracker => generator.with_algorithm(RecursiveBacktracker),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MazeGenAlgo::DepthFirstSearch => "depth first search (explicit stack)",
            MazeGenAlgo::RecursiveBacktracker => "recursive backtracker",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// ASCII drawing
    #[default]
    Text,
    /// (2R+1)x(2C+1) occupancy grid, 1 is walkable
    Grid,
    /// The whole board as RON
    Ron,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub rows: Option<i32>,
    #[serde(default)]
    pub columns: Option<i32>,
    #[serde(default)]
    pub algorithm: Option<MazeGenAlgo>,
    #[serde(default)]
    pub goal: Option<GoalPlacement>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub log_level: Option<LevelFilter>,
}

impl Settings {
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join("pmaze").join("settings.ron"))
            .ok_or(SettingsError::NoConfigDir)
    }

    pub fn get_size(&self) -> Dims {
        Dims(
            self.rows.unwrap_or(DEFAULT_SIZE.0),
            self.columns.unwrap_or(DEFAULT_SIZE.1),
        )
    }

    pub fn get_algorithm(&self) -> MazeGenAlgo {
        self.algorithm.unwrap_or_default()
    }

    pub fn get_goal(&self) -> GoalPlacement {
        self.goal.unwrap_or_default()
    }

    pub fn get_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn get_log_level(&self) -> LevelFilter {
        self.log_level.unwrap_or(LevelFilter::Warn)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, SettingsError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads settings from `path`, writing the defaults there first if the
    /// file doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("creating default settings at {:?}", path);
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS, path)
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, DEFAULT_SETTINGS).map_err(io_err)
    }
}
