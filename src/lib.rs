pub mod buffer;
pub mod error;
pub mod io_stream;
pub mod render;
pub mod exercise;

pub use buffer::{alphabet, fill_alphabet, BUFFER_LEN};
pub use error::BinFileError;
pub use exercise::{run, ExerciseOptions, Operation, Outcome};
