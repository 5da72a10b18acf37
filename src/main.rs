use clap::Parser;
use flightdata_ingestor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Flight Data Ingestor - Reference Data Validation Pipeline");
    println!("=========================================================");
    println!();
    println!("Validate airport, airline, and route reference data supplied as");
    println!("line-oriented, comma-separated text, with per-line error reporting");
    println!("and duplicate detection against already-accepted data.");
    println!();
    println!("USAGE:");
    println!("    flightdata-ingestor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load     Validate a file and ingest its accepted records");
    println!("    check    Validate a file without ingesting anything (dry run)");
    println!("    entry    Validate and ingest a single comma-separated entry");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate and ingest an airport file:");
    println!("    flightdata-ingestor load airports.csv --kind airport");
    println!();
    println!("    # Pre-flight check a route file without ingesting:");
    println!("    flightdata-ingestor check routes.csv --kind route");
    println!();
    println!("    # Validate a single airline entry:");
    println!("    flightdata-ingestor entry '3320,Lufthansa,\\N,LH,DLH,LUFTHANSA,Germany,Y' --kind airline");
    println!();
    println!("For detailed help on any command, use:");
    println!("    flightdata-ingestor <COMMAND> --help");
}
