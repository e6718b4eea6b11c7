// Re-export modules
pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod extract;
pub mod filter;
pub mod results;
pub mod storage;

// Re-export commonly used types for convenience
pub use error::Error;
pub use results::{Analysis, ProductRecord, RawPage, SpecTable};
