//! Diagnostics for reading grammar text
//!
//! - Categorized error codes
//! - Source ranges
//! - Optional hints for common mistakes

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{SyntaxError, SyntaxErrorBuilder};
