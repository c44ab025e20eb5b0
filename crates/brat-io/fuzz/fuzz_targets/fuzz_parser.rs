//! Fuzz target for the annotation line parser.
//!
//! This fuzzer tests that the parser:
//! 1. Never panics on malformed lines or out-of-range offsets
//! 2. Never panics while serializing or re-chunking what it accepted

#![no_main]

use libfuzzer_sys::fuzz_target;
use brat_io::{Parser, assemble_document};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // First line is the text, the rest are annotation lines.
    let (text, annotations) = input.split_once('\n').unwrap_or((input, ""));
    let text = text.replace('|', "\n");

    let parser = Parser::new();
    if let Ok(document) = parser.parse_str("fuzz", &text, annotations) {
        let serialized = document.to_brat_string();
        let _ = parser.parse_str("fuzz", &text, &serialized);
        let _ = document.embed_json();
        let _ = assemble_document(document.sentences(), "chunk", "\n").to_brat_string();
    }
});
