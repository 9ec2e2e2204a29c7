#![no_main]

use imgsniff::formats::svg::{looks_like_markup, skip_bom, skip_whitespace};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let start = skip_bom(data);
    assert!(start <= data.len());
    let cursor = skip_whitespace(data, start);
    assert!(cursor >= start && cursor <= data.len());
    assert_eq!(looks_like_markup(data), data.get(cursor) == Some(&b'<'));
});
