use pmaze::Board;
use ron::ser::PrettyConfig;

use crate::{settings::OutputFormat, AppError};

/// Renders `board` for stdout. The result always ends with a newline.
pub fn render(board: &Board, format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => board.to_string(),
        OutputFormat::Grid => board
            .to_binary_grid()
            .row_slices()
            .map(|row| row.iter().map(|tile| char::from(b'0' + tile)).collect::<String>() + "\n")
            .collect(),
        OutputFormat::Ron => {
            let mut text = ron::ser::to_string_pretty(board, PrettyConfig::default())?;
            text.push('\n');
            text
        }
    })
}

#[cfg(test)]
mod tests {
    use pmaze::{Dims, Generator, GoalPlacement};

    use super::*;

    fn board() -> Board {
        Generator::new(Dims(1, 3))
            .unwrap()
            .with_seed(0)
            .with_start(Dims(0, 0))
            .generate()
            .unwrap()
            .into_board_with(GoalPlacement::FarCorner)
            .unwrap()
    }

    #[test]
    fn corridor_as_text() {
        assert_eq!(
            render(&board(), OutputFormat::Text).unwrap(),
            "+---+---+---+\n| S       G |\n+---+---+---+\n"
        );
    }

    #[test]
    fn corridor_as_grid() {
        assert_eq!(
            render(&board(), OutputFormat::Grid).unwrap(),
            "0000000\n0111110\n0000000\n"
        );
    }

    #[test]
    fn ron_round_trips() {
        let board = board();
        let text = render(&board, OutputFormat::Ron).unwrap();
        let back: Board = ron::from_str(&text).unwrap();
        assert_eq!(board, back);
    }
}
