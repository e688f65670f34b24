pub mod cli;
pub mod board;
pub mod solver;
