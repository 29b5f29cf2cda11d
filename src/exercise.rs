//! The three file exercises as runnable operations.
//!
//! ```no_run
//! use binfile::exercise::{run, ExerciseOptions, Operation};
//!
//! let opts = ExerciseOptions::default();
//! run(Operation::Write, &opts).print(std::io::stdout())?;
//! run(Operation::ReadAll, &opts).print(std::io::stdout())?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Every operation catches its own I/O failure and turns it into
//! [`Outcome::Failed`]; nothing is propagated to the caller.

use std::io::{self, Write};
use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::buffer::{alphabet, zeroed, BUFFER_LEN};
use crate::error::BinFileError;
use crate::io_stream::{read_file, read_file_into, write_file};
use crate::render::{print_chars, to_chars};

/// File used when no path is given.
pub const DEFAULT_PATH: &str = "file.bin";

// ── ExerciseOptions ──────────────────────────────────────────────────────────

/// Configuration shared by all operations.
#[derive(Debug, Clone)]
pub struct ExerciseOptions {
    pub path:     PathBuf,
    /// Buffer size for [`Operation::Write`] and [`Operation::ReadInto`].
    pub capacity: usize,
}

impl Default for ExerciseOptions {
    fn default() -> Self {
        Self {
            path:     PathBuf::from(DEFAULT_PATH),
            capacity: BUFFER_LEN,
        }
    }
}

// ── Operation ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fill a buffer with `'a' + i` and write it out.
    Write,
    /// Read into a pre-allocated, zeroed buffer of fixed capacity.
    ReadInto,
    /// Read the whole file into a buffer sized to fit.
    ReadAll,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Write    => "write",
            Operation::ReadInto => "read-into",
            Operation::ReadAll  => "read-all",
        }
    }
}

// ── Outcome ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum Outcome {
    Written { bytes: usize },
    /// `data` is the whole buffer; `filled` counts the bytes that came from
    /// the file.  They differ only after a short fixed-capacity read.
    Read { data: Vec<u8>, filled: usize },
    Failed { message: String },
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        !matches!(self, Outcome::Failed { .. })
    }

    /// Console form: the byte count or the error line end with a newline,
    /// the character stream does not.
    pub fn print<W: Write>(&self, mut out: W) -> io::Result<()> {
        match self {
            Outcome::Written { bytes }  => writeln!(out, "{bytes}"),
            Outcome::Read { data, .. }  => print_chars(&mut out, data),
            Outcome::Failed { message } => writeln!(out, "{message}"),
        }?;
        out.flush()
    }

    pub fn report(&self, op: Operation, opts: &ExerciseOptions) -> Report {
        let mut report = Report {
            operation: op.name(),
            path:      opts.path.display().to_string(),
            ok:        self.is_ok(),
            bytes:     0,
            text:      None,
            hex:       None,
            error:     None,
        };
        match self {
            Outcome::Written { bytes } => report.bytes = *bytes,
            Outcome::Read { data, filled } => {
                report.bytes = *filled;
                report.text  = Some(to_chars(data));
                report.hex   = Some(hex::encode(data));
            }
            Outcome::Failed { message } => report.error = Some(message.clone()),
        }
        report
    }
}

impl From<BinFileError> for Outcome {
    fn from(e: BinFileError) -> Self {
        Outcome::Failed { message: e.to_string() }
    }
}

/// Machine-readable summary of one operation, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub path:      String,
    pub ok:        bool,
    /// Bytes written, or bytes taken from the file on a read.
    pub bytes:     usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:     Option<String>,
}

// ── Runners ──────────────────────────────────────────────────────────────────

pub fn run(op: Operation, opts: &ExerciseOptions) -> Outcome {
    debug!("running {} on {}", op.name(), opts.path.display());
    let result = match op {
        Operation::Write    => write_alphabet(opts),
        Operation::ReadInto => read_fixed(opts),
        Operation::ReadAll  => read_whole(opts),
    };
    result.unwrap_or_else(Outcome::from)
}

fn write_alphabet(opts: &ExerciseOptions) -> Result<Outcome, BinFileError> {
    let data = alphabet(opts.capacity)?;
    let bytes = write_file(&opts.path, &data)?;
    Ok(Outcome::Written { bytes })
}

fn read_fixed(opts: &ExerciseOptions) -> Result<Outcome, BinFileError> {
    let mut data = zeroed(opts.capacity)?;
    let filled = read_file_into(&opts.path, &mut data)?;
    Ok(Outcome::Read { data, filled })
}

fn read_whole(opts: &ExerciseOptions) -> Result<Outcome, BinFileError> {
    let data = read_file(&opts.path)?;
    let filled = data.len();
    Ok(Outcome::Read { data, filled })
}
