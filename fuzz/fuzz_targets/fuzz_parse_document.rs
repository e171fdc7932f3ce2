#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the text to node tree stage.
///
/// Feeds arbitrary UTF-8 strings to `parse_document_str` and runs version
/// detection on whatever tree comes back.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(root) = oas_tools::parsers::parse_document_str(s) {
            let _ = oas_tools::parsers::detect_spec_version(&root);
        }
    }
});
