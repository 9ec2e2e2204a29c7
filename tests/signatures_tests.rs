use imgsniff::formats::signatures::{match_signature, max_signature_len, Signature, SIGNATURES};
use imgsniff::{detect, supported_formats, ImageFormat};

/// Smallest buffer satisfying every anchor of `sig`, zero-filled elsewhere.
fn minimal_buffer(sig: &Signature) -> Vec<u8> {
    let mut data = vec![0u8; sig.end()];
    for anchor in sig.anchors() {
        data[anchor.offset..anchor.end()].copy_from_slice(anchor.pattern);
    }
    data
}

#[test]
fn test_table_covers_every_binary_format() {
    for format in ImageFormat::ALL {
        let covered = SIGNATURES.iter().any(|sig| sig.format() == format);
        assert_eq!(covered, !format.is_text_based(), "{format}");
    }
}

#[test]
fn test_tiff_has_two_encodings() {
    let tiff = SIGNATURES
        .iter()
        .filter(|sig| sig.format() == ImageFormat::Tiff)
        .count();
    assert_eq!(tiff, 2);
}

#[test]
fn test_every_signature_is_recognized() {
    for sig in &SIGNATURES {
        let data = minimal_buffer(sig);
        assert_eq!(detect(&data), Ok(sig.format()), "{:?}", sig);
    }
}

#[test]
fn test_every_signature_needs_all_its_bytes() {
    for sig in &SIGNATURES {
        let data = minimal_buffer(sig);
        assert!(!sig.matches(&data[..data.len() - 1]), "{:?}", sig);
    }
}

#[test]
fn test_signatures_are_disjoint() {
    for (i, sig) in SIGNATURES.iter().enumerate() {
        let mut data = minimal_buffer(sig);
        data.resize(max_signature_len(), 0);
        for (j, other) in SIGNATURES.iter().enumerate() {
            if i != j {
                assert!(
                    !other.matches(&data),
                    "{:?} also matches a {:?} buffer",
                    other,
                    sig
                );
            }
        }
        assert!(std::ptr::eq(match_signature(&data).unwrap(), sig));
    }
}

#[test]
fn test_max_signature_len_fits_default_prefix() {
    assert!(max_signature_len() <= imgsniff::io::DEFAULT_PREFIX_LEN);
}

#[test]
fn test_supported_formats_list() {
    assert_eq!(
        supported_formats(),
        "PNG, JPEG, GIF, WebP, SVG, AVIF, HEIF, HEIC, TIFF, or BMP"
    );
}

#[test]
fn test_format_metadata() {
    assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
    assert_eq!(ImageFormat::Svg.mime_type(), "image/svg+xml");
    assert_eq!(ImageFormat::Heic.mime_type(), "image/heic");
    assert_eq!(ImageFormat::WebP.to_string(), "WebP");
    assert!(ImageFormat::Svg.is_text_based());
    assert!(!ImageFormat::Png.is_text_based());
}
