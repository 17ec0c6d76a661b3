//! Resolved domain types.
//!
//! Built once per resolve call from an immutable payload and handed to the
//! caller. Absent wire fields stay at their empty value.

use serde::{Deserialize, Serialize};

/// A fully denormalised profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Entity URN (`urn:li:fsd_profile:...`). Primary identifier.
    pub urn: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub public_identifier: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub headline: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<ProfilePicture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_info: Option<ConnectionInfo>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<Experience>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<Education>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<Skill>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<Certification>,

    pub is_creator: bool,
    pub is_memorialized: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temp_status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temp_status_emoji: String,
}

impl Profile {
    /// Full name rule: `first + " " + last` when both are present and no
    /// explicit full name was supplied.
    pub fn fill_full_name(&mut self) {
        if self.full_name.is_empty() && !self.first_name.is_empty() && !self.last_name.is_empty() {
            self.full_name = format!("{} {}", self.first_name, self.last_name);
        }
    }
}

/// Year plus optional month. Days are not carried by the wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
}

/// Unified date range for positions, schools and certifications.
/// An absent `end` means "present".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<YearMonth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<YearMonth>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_current(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub urn: String,
    pub title: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub urn: String,
    pub school_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub degree_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field_of_study: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub urn: String,
    pub name: String,
    pub endorsement_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub urn: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authority: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub geo_urn: String,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.country_code.is_empty() && self.geo_urn.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_image_urn: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub a11y_text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub connection_count: u64,
    pub follower_count: u64,
}
