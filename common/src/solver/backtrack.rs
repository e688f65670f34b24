use crate::{
    board,
    solver,
};

pub struct BacktrackSolver {
    solver: solver::Solver,
}

impl BacktrackSolver {
    pub fn new(solver: solver::Solver) -> BacktrackSolver {
        BacktrackSolver {
            solver,
        }
    }

    pub fn find_solutions(&self, max_solutions: usize) -> board::Solutions {
        let mut solutions = Vec::new();
        let mut board = board::Board::new(self.solver.board_size);
        board.mark(self.solver.start_row, self.solver.start_col, 1);

        log::debug!("searching {}x{} board from ({}, {}) for up to {} solutions",
                    self.solver.board_size, self.solver.board_size,
                    self.solver.start_row, self.solver.start_col, max_solutions);

        self.run(&mut board, self.solver.start_row, self.solver.start_col, 2,
                 &mut solutions, max_solutions);
        solutions
    }

    fn run(&self,
           board: &mut board::Board, row: usize, col: usize, move_count: u32,
           solutions: &mut board::Solutions, max_solutions: usize) {
        // Global cutoff: once the last slot is filled anywhere in the tree,
        // every remaining frame unwinds without exploring further.
        if solutions.len() >= max_solutions {
            return;
        }

        let total_cells = (self.solver.board_size * self.solver.board_size) as u32;
        if move_count > total_cells {
            log::debug!("tour {} complete", solutions.len() + 1);
            solutions.push(board.clone());
            return;
        }

        for &(d_row, d_col) in board::KNIGHT_MOVES.iter() {
            let next_row = row as i64 + d_row;
            let next_col = col as i64 + d_col;

            if self.solver.is_valid_move(board, next_row, next_col) {
                let next_row = next_row as usize;
                let next_col = next_col as usize;

                board.mark(next_row, next_col, move_count);
                self.run(board, next_row, next_col, move_count + 1,
                         solutions, max_solutions);
                // The board is shared across sibling branches: undo before
                // trying the next offset.
                board.unmark(next_row, next_col);
            }
        }
    }
}
