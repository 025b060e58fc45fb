//! Logging infrastructure.
//!
//! - [`FileLogger`] is the production [`Logger`](deskshell_core::Logger):
//!   every line goes to stdout and is appended to the log file.
//! - [`LoggerLayer`] is a `tracing_subscriber` layer that hands every
//!   `tracing` event to a [`Logger`], so application code only ever uses the
//!   `tracing` macros.

mod file;
mod layer;

pub use file::FileLogger;
pub use layer::LoggerLayer;
