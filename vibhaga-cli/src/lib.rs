//! Vibhaga CLI library
//!
//! This library provides the command-line interface for the vibhaga
//! morphological analyzer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon_source;
pub mod output;

pub use error::{CliError, CliResult};
