//! Structured logging with a size-rotated log file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter (or stderr)
//! ```
//!
//! Log files rotate at 10 MB with 3 backups kept.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
