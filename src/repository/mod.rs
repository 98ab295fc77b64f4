//! Repository Layer
//!
//! Persistence abstractions and implementations.

mod json_file;
mod traits;

#[cfg(test)]
mod tests;

pub use json_file::JsonFileStorage;
pub use traits::RecordStorage;
