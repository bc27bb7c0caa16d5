pub mod cli;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod snapshot;
pub mod stats;

pub use error::{FitlogError, Result};
