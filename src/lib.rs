// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod emit;
pub mod errors;
pub mod extract;
pub mod generate;
pub mod io;

// Re-export commonly used types
pub use crate::core::{UnwrapFunction, UnwrapParameter, UnwrappedImpl};
pub use crate::emit::{render_artifacts, RenderedArtifact};
pub use crate::errors::UnwrapGenError;
pub use crate::extract::extract_file;
pub use crate::generate::{generate, GenerateConfig, GenerationReport};
pub use crate::io::{ArtifactSink, FileSink, MemorySink, SourceWalker};
