//! Team request options

use serde::Serialize;

/// Body for `POST /organizations/{slug}/teams/`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateTeam {
    pub name: String,
    /// Generated from the name by the server when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl CreateTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}
