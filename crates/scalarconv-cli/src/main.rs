//! scalarconv command-line interface

mod commands;
mod output;

use clap::{Parser, Subcommand};
use scalarconv::ConverterRegistry;

/// Convert text to and from scalar types
#[derive(Parser)]
#[command(name = "scalarconv")]
#[command(author, version, about = "Parse and format scalar values", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print values as tagged JSON
    #[arg(long, global = true)]
    json: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse inputs and print their canonical form
    Parse {
        /// Scalar type identifier (see `types`)
        scalar_type: String,
        /// Texts to parse
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Report whether each input converts
    Check {
        /// Scalar type identifier (see `types`)
        scalar_type: String,
        /// Texts to check
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// List supported scalar type identifiers
    Types,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    output::setup_logging(cli.verbose);

    let registry = ConverterRegistry::shared();

    let result = match cli.command {
        Commands::Parse { scalar_type, inputs } => {
            let config = commands::ParseConfig {
                scalar_type,
                inputs,
                json: cli.json,
            };
            commands::parse(registry, &config).map(|rendered| (rendered, true))
        }
        Commands::Check { scalar_type, inputs } => {
            let config = commands::CheckConfig { scalar_type, inputs };
            commands::check(registry, &config).map(|report| (report.rendered, report.all_converted))
        }
        Commands::Types => commands::types(registry, cli.json).map(|rendered| (rendered, true)),
    };

    match result {
        Ok((rendered, success)) => {
            println!("{}", rendered);
            if !success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}
