//! Tagged wire entities.
//!
//! One struct per discriminator, each owning only the fields that
//! discriminator carries. Unknown keys are ignored; malformed known keys
//! fall back to their default through the adapters in [`super::text`].

use serde::Deserialize;

use super::text::{lenient, text};
use super::urn::Urn;
use crate::model::{DateRange, YearMonth};

/// Which domain shape a wire entity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Profile,
    Position,
    Education,
    Skill,
    Certification,
    SearchCard,
    FollowingState,
    NetworkInfo,
    Other,
}

impl EntityKind {
    /// Kinds that belong to a profile's nested collections.
    pub fn is_nested(self) -> bool {
        matches!(
            self,
            EntityKind::Position
                | EntityKind::Education
                | EntityKind::Skill
                | EntityKind::Certification
                | EntityKind::FollowingState
                | EntityKind::NetworkInfo
        )
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntityKind::Profile => "profile",
            EntityKind::Position => "position",
            EntityKind::Education => "education",
            EntityKind::Skill => "skill",
            EntityKind::Certification => "certification",
            EntityKind::SearchCard => "search_card",
            EntityKind::FollowingState => "following_state",
            EntityKind::NetworkInfo => "network_info",
            EntityKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// A decoded entry from the `included` array.
#[derive(Debug, Clone, PartialEq)]
pub enum WireEntity {
    Profile(ProfileEntity),
    Position(PositionEntity),
    Education(EducationEntity),
    Skill(SkillEntity),
    Certification(CertificationEntity),
    SearchCard(SearchCardEntity),
    FollowingState(FollowingStateEntity),
    NetworkInfo(NetworkInfoEntity),
    /// A discriminator no resolver reads (feedback cards, companies, ...).
    Other { kind_tag: String, urn: Option<Urn> },
}

impl WireEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            WireEntity::Profile(_) => EntityKind::Profile,
            WireEntity::Position(_) => EntityKind::Position,
            WireEntity::Education(_) => EntityKind::Education,
            WireEntity::Skill(_) => EntityKind::Skill,
            WireEntity::Certification(_) => EntityKind::Certification,
            WireEntity::SearchCard(_) => EntityKind::SearchCard,
            WireEntity::FollowingState(_) => EntityKind::FollowingState,
            WireEntity::NetworkInfo(_) => EntityKind::NetworkInfo,
            WireEntity::Other { .. } => EntityKind::Other,
        }
    }

    /// The entity's own identity.
    pub fn urn(&self) -> Option<&Urn> {
        match self {
            WireEntity::Profile(e) => e.entity_urn.as_ref(),
            WireEntity::Position(e) => e.entity_urn.as_ref(),
            WireEntity::Education(e) => e.entity_urn.as_ref(),
            WireEntity::Skill(e) => e.entity_urn.as_ref(),
            WireEntity::Certification(e) => e.entity_urn.as_ref(),
            WireEntity::SearchCard(e) => e.entity_urn.as_ref(),
            WireEntity::FollowingState(e) => e.entity_urn.as_ref(),
            WireEntity::NetworkInfo(e) => e.entity_urn.as_ref(),
            WireEntity::Other { urn, .. } => urn.as_ref(),
        }
    }

    /// The owning profile, for discriminators that carry one.
    pub fn owner(&self) -> Option<&Urn> {
        match self {
            WireEntity::Position(e) => e.profile_urn.as_ref(),
            WireEntity::Education(e) => e.profile_urn.as_ref(),
            WireEntity::Skill(e) => e.profile_urn.as_ref(),
            WireEntity::Certification(e) => e.profile_urn.as_ref(),
            WireEntity::FollowingState(e) => e.profile_urn.as_ref().or(e.followee_urn.as_ref()),
            WireEntity::NetworkInfo(e) => e.profile_urn.as_ref(),
            WireEntity::Profile(_) | WireEntity::SearchCard(_) | WireEntity::Other { .. } => None,
        }
    }

    /// The URN a network-count entity embeds after its own prefix:
    /// `urn:li:fsd_followingState:urn:li:fsd_company:1035` gives
    /// `urn:li:fsd_company:1035`.
    pub fn embedded_owner(&self) -> Option<&str> {
        if !matches!(self, WireEntity::FollowingState(_) | WireEntity::NetworkInfo(_)) {
            return None;
        }
        let urn = self.urn()?.as_str();
        let at = urn.get(1..)?.find("urn:")? + 1;
        Some(&urn[at..])
    }

    /// Explicit owner, else the embedded one.
    pub fn correlated_owner(&self) -> Option<&str> {
        self.owner()
            .map(Urn::as_str)
            .or_else(|| self.embedded_owner())
    }
}

// ─── Profile ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: String,
    #[serde(deserialize_with = "text")]
    pub first_name: String,
    #[serde(deserialize_with = "text")]
    pub last_name: String,
    #[serde(deserialize_with = "text")]
    pub headline: String,
    #[serde(deserialize_with = "text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<WireLocation>,
    #[serde(deserialize_with = "lenient")]
    pub geo_location: Option<WireGeoLocation>,
    #[serde(deserialize_with = "lenient")]
    pub profile_picture: Option<WirePicture>,
    #[serde(deserialize_with = "lenient")]
    pub creator: bool,
    #[serde(deserialize_with = "lenient")]
    pub memorialized: bool,
    #[serde(deserialize_with = "lenient")]
    pub temp_status: String,
    #[serde(deserialize_with = "lenient")]
    pub temp_status_emoji: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireLocation {
    #[serde(deserialize_with = "lenient")]
    pub country_code: String,
    #[serde(deserialize_with = "text")]
    pub default_localized_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireGeoLocation {
    #[serde(deserialize_with = "lenient")]
    pub geo_urn: Option<Urn>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WirePicture {
    #[serde(deserialize_with = "lenient")]
    pub display_image_urn: String,
    #[serde(deserialize_with = "text")]
    pub a11y_text: String,
}

// ─── Dates ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WireDate {
    #[serde(deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
}

impl WireDate {
    fn to_year_month(self) -> Option<YearMonth> {
        let year = self.year?;
        Some(YearMonth {
            year,
            month: self.month.filter(|m| (1..=12).contains(m)),
        })
    }
}

/// Position shape: `{start: {year, month}, end: {...}}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WireDateRange {
    #[serde(deserialize_with = "lenient")]
    pub start: Option<WireDate>,
    #[serde(deserialize_with = "lenient")]
    pub end: Option<WireDate>,
}

/// Education shape: `{startDate: {year, month}, endDate: {...}}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireTimePeriod {
    #[serde(deserialize_with = "lenient")]
    pub start_date: Option<WireDate>,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<WireDate>,
}

fn unify(start: Option<WireDate>, end: Option<WireDate>) -> Option<DateRange> {
    let range = DateRange {
        start: start.and_then(WireDate::to_year_month),
        end: end.and_then(WireDate::to_year_month),
    };
    (!range.is_empty()).then_some(range)
}

impl WireDateRange {
    pub fn to_range(self) -> Option<DateRange> {
        unify(self.start, self.end)
    }
}

impl WireTimePeriod {
    pub fn to_range(self) -> Option<DateRange> {
        unify(self.start_date, self.end_date)
    }
}

/// Prefer `dateRange`, fall back to `timePeriod`.
fn either_range(range: Option<WireDateRange>, period: Option<WireTimePeriod>) -> Option<DateRange> {
    range
        .and_then(WireDateRange::to_range)
        .or_else(|| period.and_then(WireTimePeriod::to_range))
}

// ─── Nested collection entities ────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub profile_urn: Option<Urn>,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub company_name: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub location_name: String,
    #[serde(deserialize_with = "lenient")]
    pub date_range: Option<WireDateRange>,
}

impl PositionEntity {
    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range.and_then(WireDateRange::to_range)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub profile_urn: Option<Urn>,
    #[serde(deserialize_with = "text")]
    pub school_name: String,
    #[serde(deserialize_with = "text")]
    pub degree_name: String,
    #[serde(deserialize_with = "text")]
    pub field_of_study: String,
    #[serde(deserialize_with = "lenient")]
    pub date_range: Option<WireDateRange>,
    #[serde(deserialize_with = "lenient")]
    pub time_period: Option<WireTimePeriod>,
}

impl EducationEntity {
    pub fn date_range(&self) -> Option<DateRange> {
        either_range(self.date_range, self.time_period)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub profile_urn: Option<Urn>,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub endorsement_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub profile_urn: Option<Urn>,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub authority: String,
    #[serde(deserialize_with = "lenient")]
    pub license_number: String,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    #[serde(deserialize_with = "lenient")]
    pub date_range: Option<WireDateRange>,
    #[serde(deserialize_with = "lenient")]
    pub time_period: Option<WireTimePeriod>,
}

impl CertificationEntity {
    pub fn date_range(&self) -> Option<DateRange> {
        either_range(self.date_range, self.time_period)
    }
}

// ─── Network counts ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FollowingStateEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub profile_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub followee_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub follower_count: u64,
    #[serde(deserialize_with = "lenient")]
    pub following_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInfoEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub profile_urn: Option<Urn>,
    #[serde(deserialize_with = "lenient")]
    pub connections_count: u64,
    #[serde(deserialize_with = "lenient")]
    pub followers_count: u64,
}

// ─── Search ────────────────────────────────────────────────────────

/// Display card for one search hit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCardEntity {
    #[serde(deserialize_with = "lenient")]
    pub entity_urn: Option<Urn>,
    /// URN of the profile the card describes.
    #[serde(deserialize_with = "lenient")]
    pub tracking_urn: Option<Urn>,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub primary_subtitle: String,
    #[serde(deserialize_with = "text")]
    pub secondary_subtitle: String,
    #[serde(deserialize_with = "lenient")]
    pub navigation_url: String,
    #[serde(deserialize_with = "lenient")]
    pub public_identifier: String,
}

impl SearchCardEntity {
    /// The profile identity this card stands for.
    pub fn subject(&self) -> Option<&Urn> {
        self.tracking_urn
            .as_ref()
            .filter(|u| !u.is_empty())
            .or(self.entity_urn.as_ref())
    }
}
