use std::{
    fs,
    io,
    path::Path,
};

use serde_derive::{
    Serialize,
    Deserialize,
};

// All 8 knight displacements as (delta row, delta col). The order is fixed:
// it determines the order in which tours are discovered.
pub const KNIGHT_MOVES: [(i64, i64); 8] = [
    (2, 1), (1, 2), (-1, 2), (-2, 1),
    (-2, -1), (-1, -2), (1, -2), (2, -1),
];

// An N x N grid of move numbers. 0 means the cell has not been visited yet,
// k > 0 means the knight landed there on its k-th move.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<u32>>,
}

pub type Solutions = Vec<Board>;

#[derive(Debug)]
pub enum FromFileError {
    OpenFile(io::Error),
    Deserialize(serde_json::Error),
}

#[derive(Debug)]
pub enum WriteFileError {
    CreateFile(io::Error),
    Serialize(serde_json::Error),
}

impl Board {
    pub fn new(size: usize) -> Board {
        Board {
            size,
            cells: vec![vec![0; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn mark(&mut self, row: usize, col: usize, move_number: u32) {
        self.cells[row][col] = move_number;
    }

    pub fn unmark(&mut self, row: usize, col: usize) {
        self.cells[row][col] = 0;
    }

    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in &self.cells {
            for &value in row {
                result.push_str(&value.to_string());
                result.push_str(if value < 10 {
                    "   "
                } else if value < 100 {
                    "  "
                } else {
                    " "
                });
            }
            result.push('\n');
        }
        result
    }
}

pub fn write_solutions_to_file<P>(solutions: &[Board], filename: P) -> Result<(), WriteFileError> where P: AsRef<Path> {
    let file = fs::File::create(filename)
        .map_err(WriteFileError::CreateFile)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, solutions)
        .map_err(WriteFileError::Serialize)
}

pub fn read_solutions_from_file<P>(filename: P) -> Result<Solutions, FromFileError> where P: AsRef<Path> {
    let file = fs::File::open(filename)
        .map_err(FromFileError::OpenFile)?;
    let reader = io::BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(FromFileError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_unvisited() {
        let board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.value(row, col), 0);
            }
        }
    }

    #[test]
    fn mark_and_unmark() {
        let mut board = Board::new(3);
        board.mark(1, 2, 7);
        assert_eq!(board.value(1, 2), 7);
        board.unmark(1, 2);
        assert_eq!(board.value(1, 2), 0);
    }

    #[test]
    fn render_pads_by_digit_count() {
        let board = Board {
            size: 2,
            cells: vec![
                vec![1, 12],
                vec![123, 4],
            ],
        };
        assert_eq!(board.render(), "1   12  \n123 4   \n");
    }

    #[test]
    fn render_round_trips_cell_values() {
        let board = Board {
            size: 3,
            cells: vec![
                vec![1, 6, 3],
                vec![8, 100, 4],
                vec![5, 2, 97],
            ],
        };
        let parsed: Vec<u32> = board.render()
            .split_whitespace()
            .map(|token| token.parse().unwrap())
            .collect();
        let flat: Vec<u32> = board.cells.iter().flatten().cloned().collect();
        assert_eq!(parsed, flat);
    }

    #[test]
    fn serialize_board_json() {
        let mut board = Board::new(2);
        board.mark(0, 0, 1);
        board.mark(1, 1, 2);
        let data = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&data).unwrap(), board);
    }

    #[test]
    fn knight_moves_table_is_symmetric() {
        for &(d_row, d_col) in KNIGHT_MOVES.iter() {
            assert!(KNIGHT_MOVES.contains(&(-d_row, -d_col)));
            assert_eq!(d_row.abs() + d_col.abs(), 3);
            assert!(d_row != 0 && d_col != 0);
        }
    }
}
