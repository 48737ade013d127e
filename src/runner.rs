//! Sequential processing of a file list through the rewrite pass
//!
//! The path list is an explicit parameter so the whole pipeline stays
//! testable against temporary files. Each file is read, rewritten, and
//! overwritten in strict order; no file's outcome depends on another's.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    error::Result,
    rewriter::rewrite_counting,
    utils::{read_file, write_file},
};

/// Totals for one run over a path list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files read, rewritten, and written back
    pub processed: usize,
    /// Listed paths that did not exist on disk
    pub missing: usize,
    /// Span fragments collapsed across all processed files
    pub replaced: usize,
}

/// Rewrites one file in place, returning the number of collapsed fragments.
///
/// The file is overwritten even when nothing matched; the write happens only
/// after the full new content has been computed.
#[instrument]
pub fn rewrite_file(path: &Path) -> Result<usize> {
    debug!("Reading file: {}", path.display());
    let content = read_file(path)?;

    let outcome = rewrite_counting(&content);
    debug!("Collapsed {} span fragment(s)", outcome.replaced);

    write_file(path, &outcome.text)?;
    Ok(outcome.replaced)
}

/// Runs the rewrite pass over every path in order.
///
/// A path that does not exist is reported and skipped; the rest of the list
/// is still processed. Read, decode, and write failures propagate and abort
/// the remaining list.
pub fn run(paths: &[PathBuf]) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for path in paths {
        if path.exists() {
            let replaced = rewrite_file(path)?;
            info!("Fixed: {}", path.display());
            summary.processed += 1;
            summary.replaced += replaced;
        } else {
            warn!("File not found: {}", path.display());
            summary.missing += 1;
        }
    }

    Ok(summary)
}
