use std::io::{Cursor, Write};

use imgsniff::io::{read_prefix, read_prefix_from, DEFAULT_PREFIX_LEN};
use imgsniff::SniffError;
use tempfile::NamedTempFile;

fn temp_file_with(data: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(data).unwrap();
    temp.flush().unwrap();
    temp
}

#[test]
fn test_read_prefix_truncates_to_limit() {
    let temp = temp_file_with(&[0xAA; 4096]);
    let prefix = read_prefix(temp.path(), DEFAULT_PREFIX_LEN).unwrap();
    assert_eq!(prefix, vec![0xAA; DEFAULT_PREFIX_LEN]);
}

#[test]
fn test_read_prefix_short_file() {
    let temp = temp_file_with(b"BM");
    let prefix = read_prefix(temp.path(), DEFAULT_PREFIX_LEN).unwrap();
    assert_eq!(prefix, b"BM");
}

#[test]
fn test_read_prefix_empty_file() {
    let temp = temp_file_with(&[]);
    let prefix = read_prefix(temp.path(), DEFAULT_PREFIX_LEN).unwrap();
    assert!(prefix.is_empty());
}

#[test]
fn test_read_prefix_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    let err = read_prefix(&missing, DEFAULT_PREFIX_LEN).unwrap_err();
    match err {
        SniffError::Io { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_prefix_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        read_prefix(dir.path(), DEFAULT_PREFIX_LEN),
        Err(SniffError::Io { .. })
    ));
}

#[test]
fn test_read_prefix_from_reader() {
    let reader = Cursor::new(b"GIF89a\x01\x00\x01\x00".to_vec());
    assert_eq!(read_prefix_from(reader, 6).unwrap(), b"GIF89a");

    let reader = Cursor::new(Vec::<u8>::new());
    assert!(read_prefix_from(reader, 6).unwrap().is_empty());
}

struct BrokenReader;

impl std::io::Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "device gone"))
    }
}

#[test]
fn test_read_prefix_from_returns_raw_io_error() {
    let err: std::io::Error = read_prefix_from(BrokenReader, 16).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}
