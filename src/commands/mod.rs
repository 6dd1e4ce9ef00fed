//! CLI command implementations.

pub mod generate;

pub use generate::{handle_generate, GenerateOptions};
