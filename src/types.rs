use std::fmt;

use serde::Serialize;

/// Image container families recognised by the sniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Svg,
    Avif,
    Heif,
    Heic,
    Tiff,
    Bmp,
}

impl ImageFormat {
    /// Every supported family, in the order rejection messages list them.
    pub const ALL: [ImageFormat; 10] = [
        ImageFormat::Png,
        ImageFormat::Jpeg,
        ImageFormat::Gif,
        ImageFormat::WebP,
        ImageFormat::Svg,
        ImageFormat::Avif,
        ImageFormat::Heif,
        ImageFormat::Heic,
        ImageFormat::Tiff,
        ImageFormat::Bmp,
    ];

    /// Display name used in rejection messages.
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::WebP => "WebP",
            ImageFormat::Svg => "SVG",
            ImageFormat::Avif => "AVIF",
            ImageFormat::Heif => "HEIF",
            ImageFormat::Heic => "HEIC",
            ImageFormat::Tiff => "TIFF",
            ImageFormat::Bmp => "BMP",
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            ImageFormat::Svg => "svg",
            ImageFormat::Avif => "avif",
            ImageFormat::Heif => "heif",
            ImageFormat::Heic => "heic",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// MIME type to serve the file under once recognised.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Avif => "image/avif",
            ImageFormat::Heif => "image/heif",
            ImageFormat::Heic => "image/heic",
            ImageFormat::Tiff => "image/tiff",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// True for formats identified by a text heuristic rather than a magic number.
    pub fn is_text_based(&self) -> bool {
        matches!(self, ImageFormat::Svg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human-readable list of every supported family, e.g. `"PNG, JPEG, ..., TIFF, or BMP"`.
pub fn supported_formats() -> String {
    let names: Vec<&str> = ImageFormat::ALL.iter().map(|f| f.name()).collect();
    match names.split_last() {
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
        None => String::new(),
    }
}
