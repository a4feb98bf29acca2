//! Owner profile shown on the home and resume pages.

use serde::{Deserialize, Serialize};

/// Site owner profile.
///
/// Every field is optional in the source document and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Short role line, e.g. `Gameplay Programmer`.
    pub headline: String,
    pub about: String,
    pub location: Option<String>,
    pub email: Option<String>,
    pub links: Vec<ProfileLink>,
}

/// External profile link (GitHub, LinkedIn, itch.io ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

impl Profile {
    /// Returns the first link whose label matches `label` ignoring ASCII case.
    pub fn link(&self, label: &str) -> Option<&ProfileLink> {
        self.links
            .iter()
            .find(|link| link.label.eq_ignore_ascii_case(label.trim()))
    }
}
