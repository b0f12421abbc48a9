#![no_main]

use libfuzzer_sys::fuzz_target;
use slp_types::FrameGrammar;

// Fuzz target: FrameGrammar::parse on arbitrary frame content.
//
// A parsed record must render back to content that parses to the same
// record.
fuzz_target!(|content: &str| {
    let grammar = FrameGrammar::standard();
    if let Ok(record) = grammar.parse(content) {
        assert!(!record.message.contains('\n'));
        let reparsed = grammar.parse(&record.to_string()).unwrap();
        assert_eq!(reparsed, record);
    }
});
