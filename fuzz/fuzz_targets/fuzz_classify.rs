#![no_main]

use imgsniff::{classify, detect, Classification};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let detected = detect(data);
    let classified = classify(data);
    assert_eq!(classified, Classification::from(detected));
    assert_eq!(classified, classify(data));
});
