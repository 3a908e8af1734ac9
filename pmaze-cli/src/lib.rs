pub mod args;
pub mod logging;
pub mod output;
pub mod settings;

use std::io;

use pmaze::{Board, BoardError, Dims, GenerationError, Generator, GoalPlacement};
use args::Args;
use settings::{MazeGenAlgo, Settings, SettingsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("could not serialize board: {0}")]
    Serialize(#[from] ron::Error),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Everything needed for one run, after flags have been merged over settings.
#[derive(Debug, Clone)]
pub struct Request {
    pub size: Dims,
    pub seed: Option<u64>,
    pub start: Option<Dims>,
    pub algorithm: MazeGenAlgo,
    pub goal: GoalPlacement,
}

impl Request {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            size: settings.get_size(),
            seed: None,
            start: None,
            algorithm: settings.get_algorithm(),
            goal: settings.get_goal(),
        }
    }

    /// Settings with any flags given on the command line laid over them.
    pub fn from_args(settings: &Settings, args: &Args) -> Self {
        let mut request = Self::from_settings(settings);
        let Dims(rows, columns) = request.size;
        request.size = Dims(args.rows.unwrap_or(rows), args.columns.unwrap_or(columns));
        request.seed = args.seed;
        request.start = args.start_cell();
        if let Some(algorithm) = args.algorithm {
            request.algorithm = algorithm;
        }
        if let Some(goal) = args.goal {
            request.goal = goal.into();
        }
        request
    }
}

pub fn generate_board(request: &Request) -> Result<Board, AppError> {
    let mut generator = request.algorithm.apply(Generator::new(request.size)?);
    if let Some(seed) = request.seed {
        generator = generator.with_seed(seed);
    }
    if let Some(start) = request.start {
        generator = generator.with_start(start);
    }

    let maze = generator.generate()?;
    if let Some(seed) = maze.seed() {
        log::info!(
            "generated {}x{} maze with {}, seed {}",
            request.size.0,
            request.size.1,
            request.algorithm.name(),
            seed
        );
    }

    let board = maze.into_board_with(request.goal)?;
    log::debug!("start {:?}, goal {:?}", board.start(), board.goal());
    Ok(board)
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    fn parse(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pmaze").chain(flags.iter().copied())).unwrap()
    }

    fn file_settings() -> Settings {
        Settings {
            rows: Some(7),
            columns: Some(8),
            algorithm: Some(MazeGenAlgo::RecursiveBacktracker),
            goal: Some(GoalPlacement::Fixed(Dims(0, 0))),
            ..Default::default()
        }
    }

    fn request(size: Dims) -> Request {
        Request {
            size,
            seed: Some(3),
            start: None,
            algorithm: MazeGenAlgo::DepthFirstSearch,
            goal: GoalPlacement::FarCorner,
        }
    }

    #[test]
    fn settings_become_request() {
        let settings = Settings {
            rows: Some(4),
            goal: Some(GoalPlacement::FarCorner),
            ..Default::default()
        };
        let request = Request::from_settings(&settings);
        assert_eq!(request.size, Dims(4, 10));
        assert_eq!(request.goal, GoalPlacement::FarCorner);
        assert_eq!(request.seed, None);
    }

    #[test]
    fn flags_beat_settings() {
        let args = parse(&["-r", "3", "-s", "99", "-a", "iterative", "-g", "far-corner"]);
        let request = Request::from_args(&file_settings(), &args);
        assert_eq!(request.size, Dims(3, 8));
        assert_eq!(request.seed, Some(99));
        assert_eq!(request.algorithm, MazeGenAlgo::DepthFirstSearch);
        assert_eq!(request.goal, GoalPlacement::FarCorner);
    }

    #[test]
    fn missing_flags_keep_settings() {
        let request = Request::from_args(&file_settings(), &parse(&[]));
        assert_eq!(request.size, Dims(7, 8));
        assert_eq!(request.seed, None);
        assert_eq!(request.start, None);
        assert_eq!(request.algorithm, MazeGenAlgo::RecursiveBacktracker);
        assert_eq!(request.goal, GoalPlacement::Fixed(Dims(0, 0)));
    }

    #[test]
    fn start_flag_becomes_a_cell() {
        let request = Request::from_args(&file_settings(), &parse(&["--start", "4", "1"]));
        assert_eq!(request.start, Some(Dims(4, 1)));

        let request = Request::from_args(&file_settings(), &parse(&["--start", "-1", "0"]));
        assert!(matches!(
            generate_board(&request),
            Err(AppError::Generation(GenerationError::StartOutOfBounds(Dims(-1, 0))))
        ));
    }

    #[test]
    fn oversized_request_is_an_error() {
        let args = parse(&["-r", "100000", "-c", "100000"]);
        let request = Request::from_args(&file_settings(), &args);
        assert!(matches!(
            generate_board(&request),
            Err(AppError::Generation(GenerationError::TooLarge(_)))
        ));
    }

    #[test]
    fn board_honours_request() {
        let mut req = request(Dims(6, 4));
        req.start = Some(Dims(2, 1));
        let board = generate_board(&req).unwrap();
        assert_eq!(board.start(), Dims(2, 1));
        assert_eq!(board.goal(), Dims(5, 3));
        assert_eq!(board.maze().seed(), Some(3));
    }

    #[test]
    fn algorithms_give_same_board() {
        let iterative = generate_board(&request(Dims(9, 9))).unwrap();
        let mut req = request(Dims(9, 9));
        req.algorithm = MazeGenAlgo::RecursiveBacktracker;
        let recursive = generate_board(&req).unwrap();
        assert_eq!(iterative, recursive);
    }

    #[test]
    fn errors_surface() {
        assert!(matches!(
            generate_board(&request(Dims(0, 5))),
            Err(AppError::Generation(GenerationError::InvalidDimensions(_)))
        ));

        let mut req = request(Dims(3, 3));
        req.goal = GoalPlacement::Fixed(Dims(9, 9));
        assert!(matches!(
            generate_board(&req),
            Err(AppError::Board(BoardError::GoalOutOfBounds(_)))
        ));
    }
}
