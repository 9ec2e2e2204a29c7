//! Magic-number table for the binary image containers.
//!
//! Each [`Signature`] is one or more byte patterns anchored at fixed offsets.
//! A format with several valid encodings (TIFF byte orders) gets one
//! signature per encoding. Size fields inside RIFF and ISO-BMFF headers are
//! never read; only the type tags are compared.

use crate::types::ImageFormat;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];
pub const GIF_MAGIC: [u8; 4] = *b"GIF8";
pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WEBP_FOURCC: [u8; 4] = *b"WEBP";
pub const AVIF_BRAND: [u8; 8] = *b"ftypavif";
pub const HEIF_BRAND: [u8; 8] = *b"ftypheif";
pub const HEIC_BRAND: [u8; 8] = *b"ftypheic";
pub const TIFF_LE: [u8; 4] = [0x49, 0x49, 0x2A, 0x00];
pub const TIFF_BE: [u8; 4] = [0x4D, 0x4D, 0x00, 0x2A];
pub const BMP_MAGIC: [u8; 2] = *b"BM";

/// Offset of the RIFF form type (`WEBP`), past the 4-byte chunk size.
pub const RIFF_FORM_OFFSET: usize = 8;
/// Offset of the `ftyp` box type, past the 4-byte box size.
pub const FTYP_OFFSET: usize = 4;

/// A byte pattern expected at a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub offset: usize,
    pub pattern: &'static [u8],
}

impl Anchor {
    pub const fn new(offset: usize, pattern: &'static [u8]) -> Self {
        Self { offset, pattern }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.pattern.len()
    }

    /// A buffer too short to hold the pattern is a non-match, never an error.
    #[inline]
    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.end()) == Some(self.pattern)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    format: ImageFormat,
    anchors: &'static [Anchor],
}

impl Signature {
    pub const fn new(format: ImageFormat, anchors: &'static [Anchor]) -> Self {
        Self { format, anchors }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn anchors(&self) -> &'static [Anchor] {
        self.anchors
    }

    /// Number of leading bytes needed to evaluate every anchor.
    pub fn end(&self) -> usize {
        self.anchors.iter().map(Anchor::end).max().unwrap_or(0)
    }

    #[inline]
    pub fn matches(&self, data: &[u8]) -> bool {
        self.anchors.iter().all(|anchor| anchor.matches(data))
    }
}

const PNG_ANCHORS: &[Anchor] = &[Anchor::new(0, &PNG_SIGNATURE)];
const JPEG_ANCHORS: &[Anchor] = &[Anchor::new(0, &JPEG_SOI)];
const GIF_ANCHORS: &[Anchor] = &[Anchor::new(0, &GIF_MAGIC)];
const WEBP_ANCHORS: &[Anchor] = &[
    Anchor::new(0, &RIFF_TAG),
    Anchor::new(RIFF_FORM_OFFSET, &WEBP_FOURCC),
];
const AVIF_ANCHORS: &[Anchor] = &[Anchor::new(FTYP_OFFSET, &AVIF_BRAND)];
const HEIF_ANCHORS: &[Anchor] = &[Anchor::new(FTYP_OFFSET, &HEIF_BRAND)];
const HEIC_ANCHORS: &[Anchor] = &[Anchor::new(FTYP_OFFSET, &HEIC_BRAND)];
const TIFF_LE_ANCHORS: &[Anchor] = &[Anchor::new(0, &TIFF_LE)];
const TIFF_BE_ANCHORS: &[Anchor] = &[Anchor::new(0, &TIFF_BE)];
const BMP_ANCHORS: &[Anchor] = &[Anchor::new(0, &BMP_MAGIC)];

/// Binary signatures in checking order.
pub static SIGNATURES: [Signature; 10] = [
    Signature::new(ImageFormat::Png, PNG_ANCHORS),
    Signature::new(ImageFormat::Jpeg, JPEG_ANCHORS),
    Signature::new(ImageFormat::Gif, GIF_ANCHORS),
    Signature::new(ImageFormat::WebP, WEBP_ANCHORS),
    Signature::new(ImageFormat::Avif, AVIF_ANCHORS),
    Signature::new(ImageFormat::Heif, HEIF_ANCHORS),
    Signature::new(ImageFormat::Heic, HEIC_ANCHORS),
    Signature::new(ImageFormat::Tiff, TIFF_LE_ANCHORS),
    Signature::new(ImageFormat::Tiff, TIFF_BE_ANCHORS),
    Signature::new(ImageFormat::Bmp, BMP_ANCHORS),
];

/// Returns the first signature in table order that matches `data`.
pub fn match_signature(data: &[u8]) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|sig| sig.matches(data))
}

/// Longest prefix any binary signature inspects.
pub fn max_signature_len() -> usize {
    SIGNATURES.iter().map(Signature::end).max().unwrap_or(0)
}
