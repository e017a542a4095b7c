#![no_main]

use hs_model::{LinearModel, TfidfVectorizer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(vectorizer) = serde_json::from_str::<TfidfVectorizer>(data) {
        if vectorizer.validate().is_ok() {
            let _ = vectorizer.transform("markets rally after crash");
        }
    }
    if let Ok(model) = serde_json::from_str::<LinearModel>(data) {
        if model.validate().is_ok() {
            let _ = model.predict_proba(&[(0, 1.0)]);
        }
    }
});
