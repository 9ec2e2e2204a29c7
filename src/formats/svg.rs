//! Text heuristic for SVG uploads.
//!
//! SVG has no magic number, so a buffer is accepted as markup when, after an
//! optional UTF-8 BOM and any leading whitespace, the next byte is `<`. This
//! also accepts any other XML or HTML document.

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
pub const MARKUP_OPEN: u8 = b'<';

#[inline]
pub fn is_markup_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Offset just past a leading UTF-8 BOM, or 0 if there is none.
#[inline]
pub fn skip_bom(data: &[u8]) -> usize {
    if data.starts_with(&UTF8_BOM) {
        UTF8_BOM.len()
    } else {
        0
    }
}

/// First offset at or after `from` that is not markup whitespace.
///
/// Returns `data.len()` when only whitespace remains.
#[inline]
pub fn skip_whitespace(data: &[u8], from: usize) -> usize {
    let start = from.min(data.len());
    data[start..]
        .iter()
        .position(|&b| !is_markup_whitespace(b))
        .map_or(data.len(), |pos| start + pos)
}

pub fn looks_like_markup(data: &[u8]) -> bool {
    let cursor = skip_whitespace(data, skip_bom(data));
    data.get(cursor) == Some(&MARKUP_OPEN)
}
