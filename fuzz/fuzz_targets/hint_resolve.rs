#![no_main]

use libfuzzer_sys::fuzz_target;
use playground_ide::{resolve_hint, ImportBoundary, Selection};
use playground_syntax::{Document, Position};

const MAX_SOURCE_BYTES: usize = 2048;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let import_end = u32::from(data[0] % 8);
    let body = &data[1..data.len().min(MAX_SOURCE_BYTES + 1)];
    let source = String::from_utf8_lossy(body);
    let document = Document::new(source.as_ref());
    let boundary = ImportBoundary::at(import_end);

    for line in 0..document.line_count() {
        for column in 0..=document.line_len(line) + 1 {
            let selection = Selection::cursor(Position::new(line, column));
            let first = resolve_hint(&document, selection, &boundary);
            let second = resolve_hint(&document, selection, &boundary);
            assert_eq!(first, second);
        }
    }
});
