use clap::Parser;
use std::path::PathBuf;

use crate::boundary::BoundarySpec;
use crate::build_info;
use crate::config::{SolveConfig, DEFAULT_CHUNK_SIZE};
use crate::error::SolveError;
use crate::shape::GridShape;

/// relax2d steady-state plate executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Divisions along x.
    #[arg(long, default_value = "100")]
    pub nx: usize,

    /// Divisions along y.
    #[arg(long, default_value = "100")]
    pub ny: usize,

    /// Bottom edge temperature, kelvin.
    #[arg(long, default_value = "300.0")]
    pub bottom: f64,

    /// Top edge temperature, kelvin.
    #[arg(long, default_value = "400.0")]
    pub top: f64,

    /// Left edge temperature, kelvin.
    #[arg(long, default_value = "250.0")]
    pub left: f64,

    /// Right edge temperature, kelvin.
    #[arg(long, default_value = "350.0")]
    pub right: f64,

    /// Convergence bound on the per-sweep maximum fractional change.
    #[arg(long, default_value = "1e-6")]
    pub tolerance: f64,

    /// Give up with an error after this many sweeps.
    #[arg(long)]
    pub max_sweeps: Option<usize>,

    /// Chunk size to use for parallelism, in interior rows.
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Write the converged field to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Render the converged field to this PNG file.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
            .unwrap();

        args
    }

    /// # Errors
    ///
    /// Passes along whatever shape or boundary validation rejects.
    pub fn solve_config(&self) -> Result<SolveConfig, SolveError> {
        let shape = GridShape::new(self.nx, self.ny)?;
        let boundary =
            BoundarySpec::new(self.bottom, self.top, self.left, self.right)?;
        let mut config = SolveConfig::new(shape, boundary, self.tolerance);
        config.max_sweeps = self.max_sweeps;
        config.chunk_size = self.chunk_size;
        Ok(config)
    }
}
