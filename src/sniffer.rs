//! Image format classification from the leading bytes of a file.
//!
//! Extensions and client-supplied content types are untrusted; only the bytes
//! decide. Binary signatures are tried first in table order, then the SVG
//! text heuristic, then the buffer is rejected.

use tracing::{debug, trace};

use crate::error::Rejection;
use crate::formats::signatures::match_signature;
use crate::formats::svg::looks_like_markup;
use crate::types::ImageFormat;

/// Shortest buffer on which any rule is evaluated.
pub const MIN_INSPECTABLE_LEN: usize = 2;

/// Outcome of [`classify`]. Recognition carries no payload; use [`detect`] to
/// learn which family matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Recognized,
    Rejected(Rejection),
}

impl Classification {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Classification::Recognized)
    }

    /// Rejection text, or `None` when the buffer was recognised.
    pub fn reason(&self) -> Option<String> {
        match self {
            Classification::Recognized => None,
            Classification::Rejected(rejection) => Some(rejection.reason()),
        }
    }
}

impl From<Result<ImageFormat, Rejection>> for Classification {
    fn from(result: Result<ImageFormat, Rejection>) -> Self {
        match result {
            Ok(_) => Classification::Recognized,
            Err(rejection) => Classification::Rejected(rejection),
        }
    }
}

/// Identifies the image family of a file prefix.
///
/// Total over every input: never panics, never reads past `data`.
pub fn detect(data: &[u8]) -> Result<ImageFormat, Rejection> {
    if data.len() < MIN_INSPECTABLE_LEN {
        debug!(len = data.len(), "buffer too small to classify");
        return Err(Rejection::TooSmall);
    }

    if let Some(signature) = match_signature(data) {
        trace!(format = %signature.format(), "binary signature matched");
        return Ok(signature.format());
    }

    if looks_like_markup(data) {
        trace!("markup prefix matched");
        return Ok(ImageFormat::Svg);
    }

    debug!(
        len = data.len(),
        head = ?&data[..data.len().min(4)],
        "no signature matched"
    );
    Err(Rejection::UnrecognizedFormat)
}

/// Accepts or rejects a file prefix; [`detect`] with the format discarded.
pub fn classify(data: &[u8]) -> Classification {
    detect(data).into()
}
