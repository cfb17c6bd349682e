//! Record types returned by the spaces API.
//!
//! DESIGN
//! ======
//! A space is kept as the raw JSON object the backend sent. The page never
//! validates or rewrites it; [`SpaceSummary`] is a read-only projection used
//! only when drawing a card.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde_json::Value;

/// One record from `GET apiv1/spaces/`, passed through unchanged.
pub type Space = Value;

/// Display fields picked out of a [`Space`].
///
/// Every field is optional: missing keys and non-string values both read as
/// `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpaceSummary {
    /// Space identifier as listed by the backend (`name`).
    pub name: Option<String>,
    /// RO-Crate profile the space was created from (`RO_profile`).
    pub ro_profile: Option<String>,
    /// Storage location on the backend host (`storage_path`).
    pub storage_path: Option<String>,
    /// Link to the space detail resource (`url_space`).
    pub url: Option<String>,
    /// JSON-LD type IRI (`@type`).
    pub type_iri: Option<String>,
}

impl SpaceSummary {
    pub fn from_space(space: &Space) -> Self {
        let field = |key: &str| {
            space
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        Self {
            name: field("name"),
            ro_profile: field("RO_profile"),
            storage_path: field("storage_path"),
            url: field("url_space"),
            type_iri: field("@type"),
        }
    }

    /// Card title, falling back to a placeholder for unnamed records.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed space")
    }
}
