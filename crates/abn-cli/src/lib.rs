//! CLI library components for the ABN checker.

pub mod cli;
pub mod commands;
pub mod input;
pub mod logging;
pub mod summary;
pub mod types;
