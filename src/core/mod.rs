// Public modules
pub mod codemod;
pub mod error;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
