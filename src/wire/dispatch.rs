//! Discriminator dispatch.
//!
//! `$type` → decoder. Entities missing a `$type` fall back to the kind
//! their URN prefix suggests; everything unrecognised becomes
//! [`WireEntity::Other`].

use serde_json::{Map, Value};
use tracing::debug;

use super::entity::{
    CertificationEntity, EducationEntity, EntityKind, FollowingStateEntity, NetworkInfoEntity,
    PositionEntity, ProfileEntity, SearchCardEntity, SkillEntity, WireEntity,
};
use super::text::shape;
use super::urn::Urn;
use crate::error::{Result, VoyagerError};

pub const TYPE_KEY: &str = "$type";
pub const URN_KEY: &str = "entityUrn";

pub const PROFILE_TYPE: &str = "com.linkedin.voyager.dash.identity.profile.Profile";
pub const POSITION_TYPE: &str = "com.linkedin.voyager.dash.identity.profile.Position";
pub const EDUCATION_TYPE: &str = "com.linkedin.voyager.dash.identity.profile.Education";
pub const SKILL_TYPE: &str = "com.linkedin.voyager.dash.identity.profile.Skill";
pub const CERTIFICATION_TYPE: &str = "com.linkedin.voyager.dash.identity.profile.Certification";
pub const SEARCH_CARD_TYPE: &str = "com.linkedin.voyager.dash.search.EntityResultViewModel";
pub const FOLLOWING_STATE_TYPE: &str = "com.linkedin.voyager.dash.feed.FollowingState";
pub const NETWORK_INFO_TYPE: &str = "com.linkedin.voyager.dash.identity.profile.ProfileNetworkInfo";

type DecodeFn = fn(Value) -> serde_json::Result<WireEntity>;

macro_rules! decoder {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(value: Value) -> serde_json::Result<WireEntity> {
            serde_json::from_value::<$ty>(value).map(WireEntity::$variant)
        }
    };
}

decoder!(decode_profile, ProfileEntity, Profile);
decoder!(decode_position, PositionEntity, Position);
decoder!(decode_education, EducationEntity, Education);
decoder!(decode_skill, SkillEntity, Skill);
decoder!(decode_certification, CertificationEntity, Certification);
decoder!(decode_search_card, SearchCardEntity, SearchCard);
decoder!(decode_following_state, FollowingStateEntity, FollowingState);
decoder!(decode_network_info, NetworkInfoEntity, NetworkInfo);

/// Tag, kind, decoder.
pub static DISPATCH: &[(&str, EntityKind, DecodeFn)] = &[
    (PROFILE_TYPE, EntityKind::Profile, decode_profile),
    (POSITION_TYPE, EntityKind::Position, decode_position),
    (EDUCATION_TYPE, EntityKind::Education, decode_education),
    (SKILL_TYPE, EntityKind::Skill, decode_skill),
    (CERTIFICATION_TYPE, EntityKind::Certification, decode_certification),
    (SEARCH_CARD_TYPE, EntityKind::SearchCard, decode_search_card),
    (FOLLOWING_STATE_TYPE, EntityKind::FollowingState, decode_following_state),
    (NETWORK_INFO_TYPE, EntityKind::NetworkInfo, decode_network_info),
];

fn by_tag(tag: &str) -> Option<DecodeFn> {
    DISPATCH.iter().find(|(t, _, _)| *t == tag).map(|(_, _, f)| *f)
}

fn by_kind(kind: EntityKind) -> Option<DecodeFn> {
    DISPATCH.iter().find(|(_, k, _)| *k == kind).map(|(_, _, f)| *f)
}

fn urn_of(map: &Map<String, Value>) -> Option<Urn> {
    map.get(URN_KEY).and_then(Value::as_str).map(Urn::from)
}

/// Decode one element of the `included` array.
///
/// `position` is the element's index, used only in error messages.
pub fn decode_entity(value: Value, position: usize) -> Result<WireEntity> {
    let map = match &value {
        Value::Object(map) => map,
        other => {
            return Err(VoyagerError::MalformedPayload(format!(
                "included[{}] is not an object (found {})",
                position,
                shape(other)
            )))
        }
    };

    let (tag, decoder) = match map.get(TYPE_KEY) {
        Some(Value::String(tag)) => (tag.clone(), by_tag(tag)),
        None | Some(Value::Null) => {
            let hinted = urn_of(map).and_then(|u| u.kind_hint());
            debug!(position, hint = ?hinted, "entity without discriminator");
            (String::new(), hinted.and_then(by_kind))
        }
        Some(other) => {
            return Err(VoyagerError::MalformedPayload(format!(
                "included[{}] has a non-string {} (found {})",
                position,
                TYPE_KEY,
                shape(other)
            )))
        }
    };

    match decoder {
        Some(decode) => decode(value).map_err(|e| {
            VoyagerError::MalformedPayload(format!("included[{}] ({}): {}", position, tag, e))
        }),
        None => {
            let urn = urn_of(map);
            Ok(WireEntity::Other { kind_tag: tag, urn })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_by_tag() {
        let entity = decode_entity(
            json!({
                "$type": PROFILE_TYPE,
                "entityUrn": "urn:li:fsd_profile:A",
                "publicIdentifier": "jane-doe",
                "firstName": "Jane"
            }),
            0,
        )
        .unwrap();

        assert_eq!(entity.kind(), EntityKind::Profile);
        assert_eq!(entity.urn(), Some(&Urn::from("urn:li:fsd_profile:A")));
        match entity {
            WireEntity::Profile(p) => {
                assert_eq!(p.public_identifier, "jane-doe");
                assert_eq!(p.first_name, "Jane");
            }
            other => panic!("expected profile, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_is_other() {
        let entity = decode_entity(
            json!({
                "$type": "com.linkedin.voyager.dash.search.SearchFeedbackCard",
                "entityUrn": "urn:li:fsd_searchFeedbackCard:1",
                "headline": {"text": "irrelevant"}
            }),
            3,
        )
        .unwrap();

        assert_eq!(
            entity,
            WireEntity::Other {
                kind_tag: "com.linkedin.voyager.dash.search.SearchFeedbackCard".to_string(),
                urn: Some(Urn::from("urn:li:fsd_searchFeedbackCard:1")),
            }
        );
    }

    #[test]
    fn test_missing_tag_uses_urn_hint() {
        let entity = decode_entity(
            json!({
                "entityUrn": "urn:li:fsd_profilePosition:(A,1)",
                "title": "Engineer"
            }),
            0,
        )
        .unwrap();
        assert_eq!(entity.kind(), EntityKind::Position);

        let unknown = decode_entity(json!({"entityUrn": "urn:li:company:1"}), 0).unwrap();
        assert_eq!(unknown.kind(), EntityKind::Other);
    }

    #[test]
    fn test_foreign_fields_are_ignored() {
        // A position carrying profile-only keys still decodes cleanly.
        let entity = decode_entity(
            json!({
                "$type": POSITION_TYPE,
                "title": "Engineer",
                "publicIdentifier": "not-mine",
                "firstName": "Nope"
            }),
            0,
        )
        .unwrap();
        assert_eq!(entity.kind(), EntityKind::Position);
    }

    #[test]
    fn test_non_string_discriminator_is_malformed() {
        let err = decode_entity(json!({"$type": 42}), 5).unwrap_err();
        match err {
            VoyagerError::MalformedPayload(msg) => {
                assert!(msg.contains("included[5]"));
                assert!(msg.contains("number"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_object_entity_is_malformed() {
        assert!(matches!(
            decode_entity(json!("urn:li:fsd_profile:A"), 0),
            Err(VoyagerError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_every_tag_round_trips_its_kind() {
        for (tag, kind, _) in DISPATCH {
            let entity = decode_entity(json!({ "$type": tag }), 0).unwrap();
            assert_eq!(entity.kind(), *kind, "tag {}", tag);
        }
    }
}
