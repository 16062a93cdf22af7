#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // First segment is the number, optional second the member state.
        // Must not panic — errors are fine, panics are bugs.
        let (number, member_state) = match s.split_once('|') {
            Some((n, m)) => (n, m),
            None => (s, ""),
        };
        let _ = ustid::validate_format(number, member_state);
    }
});
