#![no_main]

use libfuzzer_sys::fuzz_target;
use playground_syntax::{lex, Document};

const MAX_SOURCE_BYTES: usize = 8192;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped);

    let rebuilt: String = lex(&source)
        .iter()
        .map(|token| &source[token.range])
        .collect();
    assert_eq!(rebuilt, source);

    let document = Document::new(source.as_ref());
    for line in 0..document.line_count() {
        let len = document.line_len(line);
        let mut previous_end = 0;
        for token in document.line_tokens(line) {
            assert!(token.start >= previous_end && token.start < token.end);
            assert!(token.end <= len);
            previous_end = token.end;
        }
    }
});
