//! Logger setup.
//!
//! The library itself only talks to the `log` facade; applications and
//! tests that want to see scene activity call [`init_logging`] once.

mod init;

pub use init::{init_logging, FilterSource, LoggingConfig};
