//! Profile lookup resolver (single subject).
//!
//! Association policy: a nested entity whose owner is the anchor is
//! attached and one owned by anything else is skipped. An entity with no
//! owner is attached, since the response describes exactly one profile.
//! Network-count URNs that embed another URN name their owner that way.

use tracing::debug;

use super::index::EntityIndex;
use super::project::{profile_scalars, Nested};
use super::finish;
use crate::error::{Result, VoyagerError};
use crate::model::Profile;
use crate::wire::{EntityKind, Payload, ProfileEntity, Urn, WireEntity};

/// Resolve the profile whose public identifier is `public_identifier`.
///
/// Fails with [`VoyagerError::NotFound`] when no profile entity carries
/// that identifier.
pub fn resolve_profile(payload: &Payload, public_identifier: &str) -> Result<Profile> {
    let index = EntityIndex::build(&payload.included);
    let anchor = find_anchor(payload, &index, |p| {
        !public_identifier.is_empty() && p.public_identifier == public_identifier
    })
    .ok_or_else(|| VoyagerError::NotFound {
        identifier: public_identifier.to_string(),
    })?;
    assemble(&index, anchor)
}

/// Resolve whichever profile the payload is about: the first one that
/// carries a public identifier.
pub fn resolve_profile_auto(payload: &Payload) -> Result<Profile> {
    let index = EntityIndex::build(&payload.included);
    let anchor = find_anchor(payload, &index, |p| !p.public_identifier.is_empty())
        .ok_or_else(|| VoyagerError::NotFound {
            identifier: String::new(),
        })?;
    assemble(&index, anchor)
}

/// Root references first, then a scan of every profile entity.
fn find_anchor<'a, F>(payload: &Payload, index: &EntityIndex<'a>, matches: F) -> Option<&'a ProfileEntity>
where
    F: Fn(&ProfileEntity) -> bool,
{
    let referenced = payload.root.all_refs().find_map(|urn| match index.get(urn) {
        Some(WireEntity::Profile(p)) if matches(p) => Some(p),
        _ => None,
    });

    referenced.or_else(|| {
        index.of_kind(EntityKind::Profile).find_map(|e| match e {
            WireEntity::Profile(p) if matches(p) => Some(p),
            _ => None,
        })
    })
}

enum Ownership {
    Anchor,
    Foreign,
    Unowned,
}

fn ownership(entity: &WireEntity, anchor: Option<&Urn>) -> Ownership {
    match (entity.correlated_owner(), anchor) {
        (Some(owner), Some(anchor)) if owner == anchor.as_str() => Ownership::Anchor,
        (Some(_), _) => Ownership::Foreign,
        (None, _) => Ownership::Unowned,
    }
}

fn assemble(index: &EntityIndex<'_>, anchor: &ProfileEntity) -> Result<Profile> {
    let anchor_urn = anchor.entity_urn.as_ref();
    let mut profile = profile_scalars(anchor);
    let mut nested = Nested::default();

    for entity in index.nested() {
        match ownership(entity, anchor_urn) {
            Ownership::Anchor | Ownership::Unowned => nested.attach(entity),
            Ownership::Foreign => {
                debug!(
                    kind = %entity.kind(),
                    urn = ?entity.urn(),
                    owner = ?entity.correlated_owner(),
                    "skipping entity owned by another subject"
                );
            }
        }
    }

    nested.apply(&mut profile);
    finish(profile, "profile lookup")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PROFILE: &str = "com.linkedin.voyager.dash.identity.profile.Profile";
    const POSITION: &str = "com.linkedin.voyager.dash.identity.profile.Position";
    const SKILL: &str = "com.linkedin.voyager.dash.identity.profile.Skill";

    fn jane() -> Payload {
        Payload::from_value(json!({
            "data": {"items": [{"*elements": "urn:li:fsd_profile:A"}]},
            "included": [
                {"$type": PROFILE, "entityUrn": "urn:li:fsd_profile:A",
                 "publicIdentifier": "jane-doe", "firstName": "Jane", "lastName": "Doe"},
                {"$type": POSITION, "entityUrn": "urn:li:fsd_profilePosition:(A,1)",
                 "profileUrn": "urn:li:fsd_profile:A", "title": "Engineer", "companyName": "Acme"},
                {"$type": POSITION, "entityUrn": "urn:li:fsd_profilePosition:(A,2)",
                 "title": {"text": "Intern"}, "companyName": "Initech"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_jane_doe() {
        let profile = resolve_profile(&jane(), "jane-doe").unwrap();
        assert_eq!(profile.full_name, "Jane Doe");
        assert_eq!(profile.urn, "urn:li:fsd_profile:A");
        let titles: Vec<&str> = profile.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Engineer", "Intern"]);
    }

    #[test]
    fn test_not_found() {
        let err = resolve_profile(&jane(), "john-smith").unwrap_err();
        assert!(err.is_not_found());
        assert!(resolve_profile(&jane(), "").unwrap_err().is_not_found());
        assert!(resolve_profile(&Payload::default(), "jane-doe")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_foreign_entities_skipped() {
        let payload = Payload::from_value(json!({
            "included": [
                {"$type": PROFILE, "entityUrn": "urn:li:fsd_profile:A", "publicIdentifier": "jane-doe"},
                {"$type": PROFILE, "entityUrn": "urn:li:fsd_profile:B", "publicIdentifier": "someone"},
                {"$type": SKILL, "profileUrn": "urn:li:fsd_profile:B", "name": "Sales"},
                {"$type": SKILL, "profileUrn": "urn:li:fsd_profile:A", "name": "Rust"},
                {"$type": SKILL, "name": "Go"}
            ]
        }))
        .unwrap();

        let profile = resolve_profile(&payload, "jane-doe").unwrap();
        let skills: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_auto_picks_first_identified_profile() {
        let payload = Payload::from_value(json!({
            "included": [
                {"$type": PROFILE, "entityUrn": "urn:li:fsd_profile:X"},
                {"$type": PROFILE, "entityUrn": "urn:li:fsd_profile:A", "publicIdentifier": "jane-doe"}
            ]
        }))
        .unwrap();
        let profile = resolve_profile_auto(&payload).unwrap();
        assert_eq!(profile.public_identifier, "jane-doe");

        assert!(resolve_profile_auto(&Payload::default())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_anchor_without_urn_fails_validation() {
        let payload = Payload::from_value(json!({
            "included": [{"$type": PROFILE, "publicIdentifier": "jane-doe"}]
        }))
        .unwrap();
        assert!(matches!(
            resolve_profile(&payload, "jane-doe"),
            Err(VoyagerError::MissingIdentifier { .. })
        ));
    }

    #[test]
    fn test_following_state_matched_by_embedded_urn() {
        let payload = Payload::from_value(json!({
            "included": [
                {"$type": PROFILE, "entityUrn": "urn:li:fsd_profile:A", "publicIdentifier": "jane-doe"},
                {"$type": "com.linkedin.voyager.dash.feed.FollowingState",
                 "entityUrn": "urn:li:fsd_followingState:urn:li:fsd_profile:A", "followerCount": 42}
            ]
        }))
        .unwrap();
        let profile = resolve_profile(&payload, "jane-doe").unwrap();
        assert_eq!(profile.connection_info.map(|c| c.follower_count), Some(42));
    }

    #[test]
    fn test_company_following_state_does_not_override_anchor() {
        let following = "com.linkedin.voyager.dash.feed.FollowingState";
        let payload = Payload::from_value(json!({
            "included": [
                {"$type": PROFILE, "entityUrn": "urn:li:fsd_profile:A", "publicIdentifier": "jane-doe"},
                {"$type": following,
                 "entityUrn": "urn:li:fsd_followingState:urn:li:fsd_profile:A", "followerCount": 42},
                {"$type": following,
                 "entityUrn": "urn:li:fsd_followingState:urn:li:fsd_company:1035", "followerCount": 999999},
                {"$type": "com.linkedin.voyager.dash.identity.profile.ProfileNetworkInfo",
                 "entityUrn": "urn:li:fsd_profileNetworkInfo:urn:li:fsd_profile:B",
                 "connectionsCount": 7}
            ]
        }))
        .unwrap();

        let profile = resolve_profile(&payload, "jane-doe").unwrap();
        let info = profile.connection_info.unwrap();
        assert_eq!(info.follower_count, 42);
        assert_eq!(info.connection_count, 0);
    }
}
