//! pauliq Command-Line Interface
//!
//! Translates a file of weighted Pauli strings into an OpenQASM program.
//!
//! ```text
//! $ pauliq translate -i hamiltonian.txt -o circuit.qasm --qasm-version 3
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{translate, version};

/// pauliq - lower weighted Pauli strings to OpenQASM
#[derive(Parser)]
#[command(name = "pauliq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a Pauli term file to OpenQASM
    Translate {
        /// Input file, one `<pauli> <coefficient> <parameter>` term per line
        #[arg(short, long)]
        input: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// OpenQASM version of the output (2 or 3)
        #[arg(long)]
        qasm_version: Option<u8>,

        /// Scalar folded into every rotation angle
        #[arg(short, long, allow_negative_numbers = true)]
        multiplier: Option<f64>,

        /// Translate terms one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Worker threads for parallel translation
        #[arg(short, long)]
        threads: Option<usize>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Translate {
            input,
            output,
            qasm_version,
            multiplier,
            sequential,
            threads,
            config,
        } => {
            let overrides = translate::Overrides {
                qasm_version,
                multiplier,
                sequential,
                threads,
            };
            translate::execute(&input, output.as_deref(), config.as_deref(), &overrides)
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
