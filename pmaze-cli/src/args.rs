use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use pmaze::{Dims, GoalPlacement};

use crate::settings::{MazeGenAlgo, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GoalMode {
    OppositeStart,
    FarCorner,
}

impl From<GoalMode> for GoalPlacement {
    fn from(mode: GoalMode) -> Self {
        match mode {
            GoalMode::OppositeStart => GoalPlacement::OppositeStart,
            GoalMode::FarCorner => GoalPlacement::FarCorner,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "pmaze")]
pub struct Args {
    #[clap(short, long, help = "Number of cell rows")]
    pub rows: Option<i32>,
    #[clap(short, long, help = "Number of cell columns")]
    pub columns: Option<i32>,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    pub seed: Option<u64>,
    #[clap(
        long,
        num_args = 2,
        allow_negative_numbers = true,
        value_names = ["ROW", "COLUMN"],
        help = "Start cell instead of a random one"
    )]
    pub start: Option<Vec<i32>>,
    #[clap(short, long, value_enum)]
    pub algorithm: Option<MazeGenAlgo>,
    #[clap(short, long, value_enum, help = "Where to put the goal cell")]
    pub goal: Option<GoalMode>,
    #[clap(short, long, value_enum)]
    pub format: Option<OutputFormat>,
    #[clap(long, help = "Use this settings file instead of the default one")]
    pub config: Option<PathBuf>,
    #[clap(short, long, action = ArgAction::Count, help = "Log more, repeat for even more")]
    pub verbose: u8,
    #[clap(short, long, action, help = "Don't log anything")]
    pub quiet: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    pub reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    pub show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    pub debug_config: bool,
}

impl Args {
    /// `--start ROW COLUMN` as a cell.
    pub fn start_cell(&self) -> Option<Dims> {
        match self.start.as_deref() {
            Some(&[row, column]) => Some(Dims(row, column)),
            _ => None,
        }
    }
}
