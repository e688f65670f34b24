pub mod backtrack;

use crate::{
    board,
};

pub struct Solver {
    board_size: usize,
    start_row: usize,
    start_col: usize,
}

#[derive(Debug, PartialEq)]
pub enum CreateError {
    BoardSizeZero,
    StartOutOfBounds { row: usize, col: usize, },
}

impl Solver {
    // Start coordinates are 0-indexed. Construction fails fast on a zero-sized
    // board or a start cell outside it, instead of silently returning no tours.
    pub fn new(board_size: usize, start_row: usize, start_col: usize) -> Result<Solver, CreateError> {
        if board_size == 0 {
            return Err(CreateError::BoardSizeZero);
        }
        if start_row >= board_size || start_col >= board_size {
            return Err(CreateError::StartOutOfBounds { row: start_row, col: start_col, });
        }

        Ok(Solver {
            board_size,
            start_row,
            start_col,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn is_valid_move(&self, board: &board::Board, row: i64, col: i64) -> bool {
        row >= 0 && row < self.board_size as i64 &&
            col >= 0 && col < self.board_size as i64 &&
            board.value(row as usize, col as usize) == 0
    }
}
