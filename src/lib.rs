pub mod config;
pub mod error;
pub mod git;
pub mod semver;
pub mod ui;

pub use error::{Result, SemvError};
