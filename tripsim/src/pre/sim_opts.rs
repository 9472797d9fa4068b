use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "TS-TD",
    about = "A time-discrete trip simulator written in Rust"
)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging
    #[clap(short, long)]
    pub debug: bool,

    /// Activate real-time simulation (trip states are then streamed to the console frontend)
    #[clap(short = 'l', long)]
    pub realtime: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path(s) to the simulation parameter file(s), several files are simulated in parallel
    #[clap(short, long, value_parser, required = true)]
    pub parfile_path: Vec<PathBuf>,

    /// Set path to a CSV file with additional roadside elements (appended to every course)
    #[clap(short, long, value_parser)]
    pub elementfile_path: Option<PathBuf>,

    /// Set real-time factor (only relevant in case real-time simulation is activated)
    #[clap(short, long, default_value = "1.0", value_parser)]
    pub realtime_factor: f64,

    /// Set simulation timestep size in seconds, should be in the range [0.001, 1.0]
    #[clap(short, long, default_value = "0.0166667", value_parser)]
    pub timestep_size: f64,
}
