//! Fuzz target: allow-list parsing and lookup.
//!
//! Verifies that arbitrary configuration strings never cause panics in
//! `ApiKeySet::parse` or the membership check.

#![no_main]

use libfuzzer_sys::fuzz_target;
use placard_core::ApiKeySet;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(keys) = ApiKeySet::parse(text) {
            let _ = keys.authorizes(text);
            let _ = keys.authorizes("");
        }
    }
});
