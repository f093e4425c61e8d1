use serde::{Deserialize, Serialize};

use crate::query::ManifestQuery;

/// A web-application manifest document, as consumed by browsers and
/// installers.
///
/// Optional members are omitted from the serialized form entirely rather
/// than emitted as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Manifest {
    /// Application name.
    pub name: String,
    /// Short name shown where space is limited; always mirrors `name`.
    pub short_name: String,
    /// Presentation mode requested from the installer.
    pub display: DisplayMode,
    /// Installable icons; at most one entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<ManifestIcon>>,
    /// Splash-screen background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Toolbar/theme color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

impl Manifest {
    /// Projects a validated query into a manifest document.
    ///
    /// Derivation rules:
    /// - `short_name` mirrors `name`;
    /// - one `maskable` icon iff an icon source was supplied;
    /// - `background_color` prefers `bg-color`, falling back to `color`;
    /// - `theme_color` mirrors `color` only (an explicit `bg-color` with no
    ///   `color` yields no `theme_color`).
    #[must_use]
    pub fn from_query(query: &ManifestQuery) -> Self {
        Self {
            name: query.name.clone(),
            short_name: query.name.clone(),
            display: DisplayMode::Standalone,
            icons: query.icon.as_ref().map(|src| {
                vec![ManifestIcon {
                    src: src.clone(),
                    purpose: IconPurpose::Maskable,
                }]
            }),
            background_color: query.bg_color.clone().or_else(|| query.color.clone()),
            theme_color: query.color.clone(),
        }
    }
}

/// A single icon entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    /// Source URL of the icon image.
    pub src: String,
    /// How the icon may be adapted by the platform.
    pub purpose: IconPurpose,
}

/// Presentation mode for the installed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum DisplayMode {
    /// Runs in its own window, without browser chrome.
    Standalone,
}

/// Icon adaptation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum IconPurpose {
    /// The icon may be masked to the platform's preferred shape.
    Maskable,
}
