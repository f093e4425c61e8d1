use serde::Serialize;

/// Wire names of the manifest query parameters.
const PARAM_NAME: &str = "name";
const PARAM_COLOR: &str = "color";
const PARAM_BG_COLOR: &str = "bg-color";
const PARAM_ICON: &str = "icon";

/// Validated query parameters for the manifest endpoint.
///
/// Produced only by [`ManifestQuery::from_pairs`]; holding one of these
/// means `name` is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestQuery {
    /// Application name.
    pub name: String,
    /// General color, used for `theme_color` and as the `background_color`
    /// fallback.
    pub color: Option<String>,
    /// Explicit background color; wire name `bg-color`.
    pub bg_color: Option<String>,
    /// Icon source URL.
    pub icon: Option<String>,
}

impl ManifestQuery {
    /// Validates raw query pairs into a `ManifestQuery`.
    ///
    /// The first occurrence of a parameter wins; unknown parameters
    /// (including the `key` auth parameter) are ignored.
    ///
    /// # Errors
    /// Returns [`ValidationErrors`] listing every failing field. Only
    /// `name` can fail: it must be present and non-empty.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, ValidationErrors> {
        let first = |param: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == param)
                .map(|(_, value)| value.clone())
        };

        match first(PARAM_NAME) {
            Some(name) if !name.is_empty() => Ok(Self {
                name,
                color: first(PARAM_COLOR),
                bg_color: first(PARAM_BG_COLOR),
                icon: first(PARAM_ICON),
            }),
            Some(_) => Err(ValidationErrors::single(PARAM_NAME, "must not be empty")),
            None => Err(ValidationErrors::single(PARAM_NAME, "is required")),
        }
    }
}

/// A single rejected query field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct FieldError {
    /// Wire name of the failing parameter.
    pub field: String,
    /// Human-readable reason.
    pub reason: String,
}

impl FieldError {
    /// Creates a `FieldError` from string-like values.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Validation failure for the manifest query, one entry per failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid query parameters: {}", summarize(.fields))]
#[non_exhaustive]
pub struct ValidationErrors {
    /// The failing fields.
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates a `ValidationErrors` with a single failing field.
    #[must_use]
    pub fn single(field: &str, reason: &str) -> Self {
        Self {
            fields: vec![FieldError::new(field, reason)],
        }
    }
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.field, f.reason))
        .collect::<Vec<_>>()
        .join(", ")
}
