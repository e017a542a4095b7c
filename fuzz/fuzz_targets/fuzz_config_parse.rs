#![no_main]

use hs_config::{validate_config, Config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary JSON must parse-or-error cleanly; validation must not panic
    if let Ok(config) = serde_json::from_str::<Config>(data) {
        let _ = validate_config(&config);
    }
});
