use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{info, info_span};

use crate::config::SniffConfig;
use crate::report::{FileReport, SniffSummary};

/// Sniffs every path, keeping the input order in the returned reports.
///
/// Unreadable files produce a [`crate::report::Verdict::Failed`] report
/// instead of aborting the run.
pub fn sniff_paths(paths: &[PathBuf], config: &SniffConfig) -> Vec<FileReport> {
    let _span = info_span!("sniff", files = paths.len(), parallel = config.parallel).entered();
    let prefix_len = config.prefix_len;

    let reports: Vec<FileReport> = if config.parallel {
        paths
            .par_iter()
            .map(|path| FileReport::sniff_path(path, prefix_len))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| FileReport::sniff_path(path, prefix_len))
            .collect()
    };

    let summary = SniffSummary::from_reports(&reports);
    info!(
        recognized = summary.recognized,
        rejected = summary.rejected,
        failed = summary.failed,
        "sniff complete"
    );
    reports
}
