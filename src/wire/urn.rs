//! Entity references.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;

/// Opaque, type-prefixed entity identifier (`urn:li:fsd_profile:ACoAA...`).
///
/// Compared by equality only. The prefix is consulted solely as a type hint
/// for entities that arrive without a `$type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Urn(String);

/// Known prefixes. Each ends with `:` so none shadows another.
const KIND_PREFIXES: &[(&str, EntityKind)] = &[
    ("urn:li:fsd_profile:", EntityKind::Profile),
    ("urn:li:fsd_profilePosition:", EntityKind::Position),
    ("urn:li:fsd_profileEducation:", EntityKind::Education),
    ("urn:li:fsd_skill:", EntityKind::Skill),
    ("urn:li:fsd_profileCertification:", EntityKind::Certification),
    ("urn:li:fsd_entityResultViewModel:", EntityKind::SearchCard),
    ("urn:li:fsd_followingState:", EntityKind::FollowingState),
    ("urn:li:fsd_profileNetworkInfo:", EntityKind::NetworkInfo),
];

impl Urn {
    pub fn new(urn: impl Into<String>) -> Self {
        Self(urn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entity kind suggested by the URN prefix, if it is a known one.
    pub fn kind_hint(&self) -> Option<EntityKind> {
        KIND_PREFIXES
            .iter()
            .find(|(prefix, _)| self.0.starts_with(prefix))
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Urn {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Urn {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Urn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
