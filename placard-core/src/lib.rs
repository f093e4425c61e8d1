//! Core types for the Placard manifest gateway.
//!
//! Defines the manifest document and its query→document projection, query
//! validation, and the API-key allow-list. Framework-free: nothing in this
//! crate depends on the HTTP layer.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod keys;
pub mod manifest;
pub mod query;

pub use error::CoreError;
pub use keys::ApiKeySet;
pub use manifest::{DisplayMode, IconPurpose, Manifest, ManifestIcon};
pub use query::{FieldError, ManifestQuery, ValidationErrors};

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn validated_query_projects_to_full_manifest_json() {
        let query = match ManifestQuery::from_pairs(&pairs(&[
            ("name", "MyApp"),
            ("color", "#fff"),
            ("icon", "http://x/icon.png"),
        ])) {
            Ok(q) => q,
            Err(e) => panic!("validation failed: {e}"),
        };
        let json = match serde_json::to_value(Manifest::from_query(&query)) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };

        assert_eq!(json["name"], "MyApp");
        assert_eq!(json["short_name"], "MyApp");
        assert_eq!(json["display"], "standalone");
        assert_eq!(json["icons"][0]["src"], "http://x/icon.png");
        assert_eq!(json["icons"][0]["purpose"], "maskable");
        assert_eq!(json["background_color"], "#fff");
        assert_eq!(json["theme_color"], "#fff");
    }

    #[test]
    fn projection_is_deterministic() {
        let raw = pairs(&[("name", "MyApp"), ("bg-color", "#000")]);
        let first = ManifestQuery::from_pairs(&raw).map(|q| Manifest::from_query(&q));
        let second = ManifestQuery::from_pairs(&raw).map(|q| Manifest::from_query(&q));
        assert_eq!(first, second, "same pairs must project to the same manifest");
    }

    #[test]
    fn allow_list_and_validation_are_independent() {
        // The `key` parameter authorizes the request but is not a manifest
        // field; validation must not see it as unknown-and-fatal.
        let keys = match ApiKeySet::parse("secret") {
            Ok(k) => k,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert!(keys.authorizes("secret"));

        let query = match ManifestQuery::from_pairs(&pairs(&[
            ("key", "secret"),
            ("name", "MyApp"),
        ])) {
            Ok(q) => q,
            Err(e) => panic!("validation failed: {e}"),
        };
        assert_eq!(query.name, "MyApp");
    }
}
