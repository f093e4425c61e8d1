//! Fuzz target: manifest query validation.
//!
//! Verifies that arbitrary query pairs fed to `ManifestQuery::from_pairs`
//! never cause panics, UB, or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;
use placard_core::{Manifest, ManifestQuery};

fuzz_target!(|data: &[u8]| {
    // Treat arbitrary bytes as a raw query string. Rejections are expected
    // and fine — we only care that validation and projection never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        let pairs: Vec<(String, String)> = text
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (name.to_owned(), value.to_owned()),
                None => (pair.to_owned(), String::new()),
            })
            .collect();
        if let Ok(query) = ManifestQuery::from_pairs(&pairs) {
            let _ = Manifest::from_query(&query);
        }
    }
});
