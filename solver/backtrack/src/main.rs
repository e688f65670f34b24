use std::{
    fs,
    io::{
        self,
        Write,
    },
    path::PathBuf,
};

use structopt::{
    StructOpt,
};

use common::{
    cli,
    board,
    solver,
};

#[derive(Clone, StructOpt, Debug)]
pub struct CliArgs {
    #[structopt(flatten)]
    pub common: cli::CommonCliArgs,
    /// maximum number of solutions to collect
    #[structopt(long = "solutions", default_value = "1")]
    pub solutions: usize,
    /// optional file for a json export of the solutions
    #[structopt(long = "export-file")]
    pub export_file: Option<PathBuf>,
}

#[derive(Debug)]
pub enum Error {
    StartRowZero,
    StartColZero,
    SolverCreate(solver::CreateError),
    ReportWrite(io::Error),
    SolutionsExport(board::WriteFileError),
}

fn main() -> Result<(), Error> {
    pretty_env_logger::init();
    let cli_args = CliArgs::from_args();
    log::info!("program starts as: {:?}", cli_args);

    // user-facing coordinates are 1-indexed, the solver wants 0-indexed
    let start_row = cli_args.common.start_row.checked_sub(1)
        .ok_or(Error::StartRowZero)?;
    let start_col = cli_args.common.start_col.checked_sub(1)
        .ok_or(Error::StartColZero)?;

    let solver = solver::Solver::new(cli_args.common.board_size, start_row, start_col)
        .map_err(Error::SolverCreate)?;
    let board_size = solver.board_size();

    let solver = solver::backtrack::BacktrackSolver::new(solver);
    let solutions = solver.find_solutions(cli_args.solutions);
    log::info!("search finished with {} of {} requested solutions",
               solutions.len(), cli_args.solutions);

    let mut out_file = fs::File::create(&cli_args.common.output_file)
        .map_err(Error::ReportWrite)?;
    write!(out_file, "Found {} solutions for a {}x{} board starting at ({}, {})\n\n",
           solutions.len(), board_size, board_size,
           cli_args.common.start_row, cli_args.common.start_col)
        .map_err(Error::ReportWrite)?;
    for (index, solution) in solutions.iter().enumerate() {
        write!(out_file, "Solution {}:\n{}\n", index + 1, solution.render())
            .map_err(Error::ReportWrite)?;
    }
    log::info!("{} solutions written to {:?}", solutions.len(), cli_args.common.output_file);

    if let Some(ref export_file) = cli_args.export_file {
        board::write_solutions_to_file(&solutions, export_file)
            .map_err(Error::SolutionsExport)?;
        log::info!("solutions exported to {:?}", export_file);
    }

    Ok(())
}
