//! CLI command implementations
//!
//! One module per subcommand plus shared helpers; `run` dispatches.

pub mod bounds;
pub mod scan;
pub mod shared;
pub mod show;

use crate::cli::args::{Args, Commands};
use crate::Result;

pub use shared::setup_logging;

/// Dispatch the parsed arguments to the matching command
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Scan(scan_args)) => scan::run_scan(scan_args),
        Some(Commands::Show(show_args)) => show::run_show(show_args),
        Some(Commands::Bounds(bounds_args)) => bounds::run_bounds(bounds_args),
        None => Ok(()),
    }
}
