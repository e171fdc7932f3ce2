#![no_main]
use libfuzzer_sys::fuzz_target;
use oas_tools::config::BuildConfig;

/// Fuzz the comparison of two documents split from one input at the first
/// NUL byte.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some((left, right)) = s.split_once('\0') {
            let _ = oas_tools::pipeline::compare_documents_str(left, right, &BuildConfig::default());
        }
    }
});
