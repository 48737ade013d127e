//! Shared helpers for integration tests.

use std::{env, fs, path::PathBuf};

/// Path for a scratch file under a crate-specific temp directory.
pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("spanfix_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

// Re-export common test types/traits
pub use crate::{
    error::{Result, RewriteError, RewriteErrorKind},
    rewriter::{rewrite, rewrite_counting, RewriteOutcome},
    runner::{rewrite_file, run, RunSummary},
    utils::{read_file, write_file},
};
