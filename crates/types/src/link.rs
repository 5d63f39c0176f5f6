//! Off-application links rendered next to the settings route.

use serde::{Deserialize, Serialize};
use url::Url;

/// A link that leaves the application (repository, documentation, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub href: Url,
}

impl ExternalLink {
    pub fn new(name: impl Into<String>, text: impl Into<String>, icon: Option<&str>, href: Url) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            icon: icon.map(str::to_string),
            href,
        }
    }
}

/// Repository and documentation links shipped with the application.
pub fn default_external_links() -> Vec<ExternalLink> {
    [
        ("github", "GitHub", "code-branch", "https://github.com/sidenav/sidenav"),
        ("wiki", "Wiki", "book", "https://sidenav.github.io/docs/"),
    ]
    .into_iter()
    .filter_map(|(name, text, icon, href)| {
        Url::parse(href)
            .ok()
            .map(|href| ExternalLink::new(name, text, Some(icon), href))
    })
    .collect()
}
