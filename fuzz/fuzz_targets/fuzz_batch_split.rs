#![no_main]

use hs_core::batch::split_headlines;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|blob: &str| {
    let headlines = split_headlines(blob);
    for headline in headlines {
        assert!(!headline.trim().is_empty());
    }
});
