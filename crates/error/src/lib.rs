use serde::{Deserialize, Serialize};

/// Errors surfaced by the simulator. All of them are recoverable: the caller
/// reports them and the simulation carries on with its state untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// A process id or page number beyond the configured limits.
    OutOfRange { process_id: usize, page_number: usize },
    /// A reference sequence hit its capacity; `dropped` events were discarded.
    SequenceTruncated { capacity: usize, dropped: usize },
    /// Invalid configuration or user input.
    InvalidInput(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange {
                process_id,
                page_number,
            } => write!(
                f,
                "process {process_id} page {page_number} is out of range"
            ),
            Error::SequenceTruncated { capacity, dropped } => write!(
                f,
                "reference sequence truncated at {capacity} events, {dropped} dropped"
            ),
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

/// Constructs an `Err(Error::InvalidInput)` via `format!()`.
#[macro_export]
macro_rules! errinput {
    ($($args:tt)*) => { Err($crate::Error::InvalidInput(format!($($args)*))) };
}

pub type Result<T> = std::result::Result<T, Error>;
