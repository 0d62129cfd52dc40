/*!
 * Core Module
 * Hint layer, constants and error handling
 */

pub mod errors;
pub mod hints;
pub mod limits;
pub mod optimization;

// Re-export for convenience
pub use errors::*;
pub use hints::*;
