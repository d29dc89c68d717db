use anyhow::Result;
use clap::{Parser, Subcommand};
use openmsg_cli::{commands, EndianArg, WidthArg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "openmsg")]
#[command(about = "openmsg - Inspect fixed binary record layouts", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bytes of the sample record
    Example {
        /// Byte order of the numeric fields
        #[arg(short, long, value_enum, default_value = "big")]
        endian: EndianArg,

        /// Also write the raw bytes to this file
        #[arg(short, long)]
        output: Option<String>,

        /// Print a field-by-field JSON report instead of hex
        #[arg(long)]
        json: bool,
    },

    /// Byte-swap a value and show it in both byte orders
    Swap {
        /// Width of the value in bits
        #[arg(short, long, value_enum, default_value = "32")]
        width: WidthArg,

        /// Decimal or 0x-prefixed hexadecimal value
        value: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe the sample record layout as JSON
    Describe {
        /// Byte order of the numeric fields
        #[arg(short, long, value_enum, default_value = "big")]
        endian: EndianArg,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decode a sample record from a file
    Decode {
        /// Input file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Byte order of the numeric fields
        #[arg(short, long, value_enum, default_value = "big")]
        endian: EndianArg,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Example {
            endian,
            output,
            json,
        } => commands::example::execute(endian.into(), output.as_deref(), json),

        Commands::Swap { width, value, json } => commands::swap::execute(width, &value, json),

        Commands::Describe { endian, output } => {
            commands::describe::execute(endian.into(), output.as_deref())
        }

        Commands::Decode { input, endian } => commands::decode::execute(&input, endian.into()),
    }
}
