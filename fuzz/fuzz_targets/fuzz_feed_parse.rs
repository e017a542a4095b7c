#![no_main]

use hs_feed::parse_headlines;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed feeds must error, never panic
    if let Ok(headlines) = parse_headlines(data, 50) {
        assert!(headlines.len() <= 50);
        for headline in headlines {
            assert!(!headline.trim().is_empty());
        }
    }
});
