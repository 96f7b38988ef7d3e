//! Runtime configuration. Built from defaults plus CLI flags; there is no
//! config file and no environment override.

pub mod types;

pub use types::{Config, LogLevel};
