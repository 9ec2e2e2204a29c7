use crate::error::{Result, SniffError};
use crate::io::DEFAULT_PREFIX_LEN;
use crate::sniffer::MIN_INSPECTABLE_LEN;

/// Upper bound on the prefix read per file. Classification never needs more
/// than a few dozen bytes.
pub const MAX_PREFIX_LEN: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Options for a sniffing run
#[derive(Debug, Clone)]
pub struct SniffConfig {
    /// Bytes read from the start of each file
    pub prefix_len: usize,
    pub output: OutputFormat,
    /// Classify files on the rayon pool instead of one at a time
    pub parallel: bool,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
            output: OutputFormat::Text,
            parallel: true,
        }
    }
}

impl SniffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = len;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix_len < MIN_INSPECTABLE_LEN {
            return Err(SniffError::InvalidConfig(format!(
                "prefix length {} is below the {MIN_INSPECTABLE_LEN} bytes needed to classify anything",
                self.prefix_len
            )));
        }
        if self.prefix_len > MAX_PREFIX_LEN {
            return Err(SniffError::InvalidConfig(format!(
                "prefix length {} exceeds the {MAX_PREFIX_LEN} byte limit",
                self.prefix_len
            )));
        }
        Ok(())
    }
}
