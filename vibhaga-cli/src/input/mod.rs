//! Input resolution: glob patterns to files, files to analysable lines

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
