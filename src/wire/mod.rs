//! Normalized wire format.
//!
//! A response is a root result holding URNs plus a flat `included` array of
//! entities tagged by `$type`. This module decodes both halves into typed
//! values; [`crate::resolve`] reassembles them.

pub mod dispatch;
pub mod entity;
pub mod payload;
pub mod text;
pub mod urn;

pub use dispatch::{decode_entity, DISPATCH};
pub use entity::{
    CertificationEntity, EducationEntity, EntityKind, FollowingStateEntity, NetworkInfoEntity,
    PositionEntity, ProfileEntity, SearchCardEntity, SkillEntity, WireEntity,
};
pub use payload::{Payload, RootItem, RootResult};
pub use text::{flexible_text, FieldError};
pub use urn::Urn;
