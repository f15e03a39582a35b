#![no_main]

use libfuzzer_sys::fuzz_target;
use mdrip::{extract_blocks, DocumentParser, MarkdownParser};

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);
    let tree = MarkdownParser::new().parse(&source);
    // The parser only builds consistent trees, so extraction must succeed
    assert!(extract_blocks(&tree, &source, "fuzz.md").is_ok());
});
