#![no_main]
use libfuzzer_sys::fuzz_target;
use oas_tools::config::BuildConfig;

/// Fuzz the full build: parse, index, resolve references and build the
/// typed document, with circular references both forbidden and tolerated.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = oas_tools::pipeline::build_document_str(s, &BuildConfig::default());
        let relaxed = BuildConfig::builder().allow_circular_references(true).build();
        let _ = oas_tools::pipeline::build_document_str(s, &relaxed);
    }
});
