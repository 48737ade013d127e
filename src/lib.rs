//! spanfix: collapse empty `span` elements into their self-closing form
//!
//! This crate provides functionality to:
//! - Rewrite whitespace-only `<span className="...">...</span>` fragments
//!   as `<span className="..." />`
//! - Leave every other byte of a document untouched
//! - Process an ordered list of files in place, skipping missing paths
//! - Handle errors with structured kinds and context
//!
//! # Examples
//! ```
//! use spanfix::rewrite;
//!
//! let out = rewrite(r#"<span className="icon">   </span>"#);
//! assert_eq!(out, r#"<span className="icon" />"#);
//! ```

pub mod error;
pub mod rewriter;
pub mod runner;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use error::{Result, RewriteError, RewriteErrorKind};
pub use rewriter::{rewrite, rewrite_counting, RewriteOutcome};
pub use runner::{rewrite_file, run, RunSummary};
