use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SniffError;
use crate::io::read_prefix;
use crate::sniffer::detect;
use crate::types::ImageFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Recognized,
    Rejected,
    /// The prefix could not be read, so nothing was classified.
    Failed,
}

/// Result of sniffing one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FileReport {
    /// Classifies an already-read prefix.
    pub fn from_prefix(path: impl Into<PathBuf>, prefix: &[u8]) -> Self {
        let path = path.into();
        match detect(prefix) {
            Ok(format) => Self {
                path,
                verdict: Verdict::Recognized,
                format: Some(format),
                mime_type: Some(format.mime_type()),
                reason: None,
            },
            Err(rejection) => Self {
                path,
                verdict: Verdict::Rejected,
                format: None,
                mime_type: None,
                reason: Some(rejection.reason()),
            },
        }
    }

    pub fn failed(path: impl Into<PathBuf>, error: &SniffError) -> Self {
        Self {
            path: path.into(),
            verdict: Verdict::Failed,
            format: None,
            mime_type: None,
            reason: Some(error.to_string()),
        }
    }

    /// Reads up to `prefix_len` bytes of `path` and classifies them.
    pub fn sniff_path(path: &Path, prefix_len: usize) -> Self {
        match read_prefix(path, prefix_len) {
            Ok(prefix) => Self::from_prefix(path, &prefix),
            Err(err) => Self::failed(path, &err),
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.verdict == Verdict::Recognized
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match (self.verdict, self.format, &self.reason) {
            (Verdict::Recognized, Some(format), _) => {
                write!(f, "{path}: {format} ({})", format.mime_type())
            }
            (Verdict::Failed, _, Some(reason)) => write!(f, "{path}: error: {reason}"),
            (_, _, Some(reason)) => write!(f, "{path}: rejected: {reason}"),
            (verdict, _, None) => write!(f, "{path}: {verdict:?}"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SniffSummary {
    pub recognized: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl SniffSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.verdict {
                Verdict::Recognized => summary.recognized += 1,
                Verdict::Rejected => summary.rejected += 1,
                Verdict::Failed => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.recognized + self.rejected + self.failed
    }

    pub fn all_recognized(&self) -> bool {
        self.rejected == 0 && self.failed == 0
    }
}

impl fmt::Display for SniffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s): {} recognized, {} rejected, {} failed",
            self.total(),
            self.recognized,
            self.rejected,
            self.failed
        )
    }
}
