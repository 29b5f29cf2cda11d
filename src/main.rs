use clap::{Parser, Subcommand};
use binfile::buffer::BUFFER_LEN;
use binfile::exercise::{run, ExerciseOptions, Operation, DEFAULT_PATH};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binfile", about = "Write and read back a raw binary file")]
struct Cli {
    /// File to operate on
    #[arg(short, long, global = true, default_value = DEFAULT_PATH)]
    file: PathBuf,
    /// Print a JSON report instead of the plain console output
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a buffer with 'a', 'b', 'c', ... and write it to the file
    Write {
        #[arg(short, long, default_value_t = BUFFER_LEN)]
        len: usize,
    },
    /// Read into a fixed-size, zero-filled buffer and print it as characters
    ReadInto {
        #[arg(short, long, default_value_t = BUFFER_LEN)]
        capacity: usize,
    },
    /// Read the whole file and print it as characters
    ReadAll,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let mut opts = ExerciseOptions { path: cli.file, ..Default::default() };
    let op = match cli.command {
        Commands::Write { len } => {
            opts.capacity = len;
            Operation::Write
        }
        Commands::ReadInto { capacity } => {
            opts.capacity = capacity;
            Operation::ReadInto
        }
        Commands::ReadAll => Operation::ReadAll,
    };

    let outcome = run(op, &opts);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer(&mut out, &outcome.report(op, &opts))?;
        writeln!(out)?;
    } else {
        outcome.print(&mut out)?;
    }
    Ok(())
}
