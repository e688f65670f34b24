use std::{
    path::PathBuf,
};

use structopt::{
    clap::{
        AppSettings,
    },
    StructOpt,
};

#[derive(Clone, StructOpt, Debug)]
#[structopt(setting = AppSettings::DeriveDisplayOrder)]
#[structopt(setting = AppSettings::AllowLeadingHyphen)]
pub struct CommonCliArgs {
    /// board size (N for an N x N board)
    #[structopt(long = "board-size", default_value = "5")]
    pub board_size: usize,
    /// knight starting row, 1-indexed
    #[structopt(long = "start-row", default_value = "1")]
    pub start_row: usize,
    /// knight starting column, 1-indexed
    #[structopt(long = "start-col", default_value = "1")]
    pub start_col: usize,
    /// file for the solutions report
    #[structopt(long = "output-file", default_value = "./knights-tour.out")]
    pub output_file: PathBuf,
}
