use clap::Parser;
use loadbook::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Loadbook - Rifle Load Development Records");
    println!("=========================================");
    println!();
    println!("Aggregate precision rifle load-development test directories into a");
    println!("queryable table and filter it by component, date, and result ranges.");
    println!();
    println!("USAGE:");
    println!("    loadbook <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    scan        Build the corpus and list matching tests (main command)");
    println!("    show        Print every known field of a single test");
    println!("    bounds      Print derived min/max filter bounds for the corpus");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # List every test under the configured tests directory:");
    println!("    loadbook scan");
    println!();
    println!("    # Narrow to one calibre and a charge window:");
    println!("    loadbook scan --root ~/shooting/tests --calibre 223 \\");
    println!("                  --charge-min 23.0 --charge-max 24.2");
    println!();
    println!("    # Inspect one test in full:");
    println!("    loadbook show 2025-04-15__300__223__Tikka-T3x__Lapua__...");
    println!();
    println!("For detailed help on any command, use:");
    println!("    loadbook <COMMAND> --help");
}
