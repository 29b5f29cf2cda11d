use std::io;
use thiserror::Error;

/// Prefix of every console error line.
pub const IO_ERROR_PREFIX: &str = "I/O error occurred:";

#[derive(Error, Debug)]
pub enum BinFileError {
    #[error("I/O error occurred: {}", os_message(.0))]
    Io(#[from] io::Error),
}

/// Plain OS description of `err`, without the `(os error N)` suffix that
/// `io::Error`'s `Display` appends for raw OS codes.
pub fn os_message(err: &io::Error) -> String {
    let text = err.to_string();
    if let Some(code) = err.raw_os_error() {
        let suffix = format!(" (os error {code})");
        if let Some(detail) = text.strip_suffix(&suffix) {
            return detail.to_owned();
        }
    }
    text
}
