//! Entity → domain projections.

use crate::encoder::profile_url;
use crate::model::{
    Certification, ConnectionInfo, Education, Experience, Location, Profile, ProfilePicture,
    Skill,
};
use crate::wire::{
    CertificationEntity, EducationEntity, PositionEntity, ProfileEntity, SearchCardEntity,
    SkillEntity, Urn, WireEntity,
};

fn urn_string(urn: Option<&Urn>) -> String {
    urn.map(|u| u.as_str().to_string()).unwrap_or_default()
}

/// Scalar fields of a profile lookup anchor.
pub fn profile_scalars(entity: &ProfileEntity) -> Profile {
    let location = Location {
        name: entity
            .location
            .as_ref()
            .map(|l| l.default_localized_name.clone())
            .unwrap_or_default(),
        country_code: entity
            .location
            .as_ref()
            .map(|l| l.country_code.clone())
            .unwrap_or_default(),
        geo_urn: urn_string(entity.geo_location.as_ref().and_then(|g| g.geo_urn.as_ref())),
    };

    let picture = entity.profile_picture.as_ref().map(|p| ProfilePicture {
        display_image_urn: p.display_image_urn.clone(),
        a11y_text: p.a11y_text.clone(),
    });

    let profile_url = if entity.public_identifier.is_empty() {
        String::new()
    } else {
        profile_url(&entity.public_identifier)
    };

    Profile {
        urn: urn_string(entity.entity_urn.as_ref()),
        public_identifier: entity.public_identifier.clone(),
        first_name: entity.first_name.clone(),
        last_name: entity.last_name.clone(),
        headline: entity.headline.clone(),
        summary: entity.summary.clone(),
        profile_url,
        location: (!location.is_empty()).then_some(location),
        profile_picture: picture.filter(|p| {
            !p.display_image_urn.is_empty() || !p.a11y_text.is_empty()
        }),
        is_creator: entity.creator,
        is_memorialized: entity.memorialized,
        temp_status: entity.temp_status.clone(),
        temp_status_emoji: entity.temp_status_emoji.clone(),
        ..Default::default()
    }
}

/// Scalar fields of a search hit. `urn` is the card's subject.
pub fn card_scalars(card: &SearchCardEntity, urn: Option<&Urn>) -> Profile {
    let location = Location {
        name: card.secondary_subtitle.clone(),
        ..Default::default()
    };
    Profile {
        urn: urn_string(urn),
        public_identifier: card.public_identifier.clone(),
        full_name: card.title.clone(),
        headline: card.primary_subtitle.clone(),
        profile_url: card.navigation_url.clone(),
        location: (!location.is_empty()).then_some(location),
        ..Default::default()
    }
}

/// Fill gaps in a search hit from the profile entity it points at.
/// Card values take precedence.
pub fn enrich_from_profile(profile: &mut Profile, entity: &ProfileEntity) {
    fn fill(slot: &mut String, value: &str) {
        if slot.is_empty() {
            *slot = value.to_string();
        }
    }
    fill(&mut profile.public_identifier, &entity.public_identifier);
    fill(&mut profile.first_name, &entity.first_name);
    fill(&mut profile.last_name, &entity.last_name);
    fill(&mut profile.headline, &entity.headline);
}

pub fn experience(entity: &PositionEntity) -> Experience {
    Experience {
        urn: urn_string(entity.entity_urn.as_ref()),
        title: entity.title.clone(),
        company_name: entity.company_name.clone(),
        description: entity.description.clone(),
        location_name: entity.location_name.clone(),
        date_range: entity.date_range(),
    }
}

pub fn education(entity: &EducationEntity) -> Education {
    Education {
        urn: urn_string(entity.entity_urn.as_ref()),
        school_name: entity.school_name.clone(),
        degree_name: entity.degree_name.clone(),
        field_of_study: entity.field_of_study.clone(),
        date_range: entity.date_range(),
    }
}

pub fn skill(entity: &SkillEntity) -> Skill {
    Skill {
        urn: urn_string(entity.entity_urn.as_ref()),
        name: entity.name.clone(),
        endorsement_count: entity.endorsement_count,
    }
}

pub fn certification(entity: &CertificationEntity) -> Certification {
    Certification {
        urn: urn_string(entity.entity_urn.as_ref()),
        name: entity.name.clone(),
        authority: entity.authority.clone(),
        license_number: entity.license_number.clone(),
        url: entity.url.clone(),
        date_range: entity.date_range(),
    }
}

/// Nested collections accumulated for one subject.
#[derive(Debug, Default)]
pub struct Nested {
    experience: Vec<Experience>,
    education: Vec<Education>,
    skills: Vec<Skill>,
    certifications: Vec<Certification>,
    connections: Option<u64>,
    /// From FollowingState; preferred over the network info count.
    followers: Option<u64>,
    network_followers: Option<u64>,
}

impl Nested {
    /// Append one entity. Non-nested kinds are ignored.
    pub fn attach(&mut self, entity: &WireEntity) {
        match entity {
            WireEntity::Position(e) => self.experience.push(experience(e)),
            WireEntity::Education(e) => self.education.push(education(e)),
            WireEntity::Skill(e) => self.skills.push(skill(e)),
            WireEntity::Certification(e) => self.certifications.push(certification(e)),
            // Counts: the first attached entity of each kind wins.
            WireEntity::NetworkInfo(e) => {
                self.connections.get_or_insert(e.connections_count);
                if e.followers_count > 0 {
                    self.network_followers.get_or_insert(e.followers_count);
                }
            }
            WireEntity::FollowingState(e) => {
                self.followers.get_or_insert(e.follower_count);
            }
            WireEntity::Profile(_) | WireEntity::SearchCard(_) | WireEntity::Other { .. } => {}
        }
    }

    pub fn apply(self, profile: &mut Profile) {
        profile.experience = self.experience;
        profile.education = self.education;
        profile.skills = self.skills;
        profile.certifications = self.certifications;
        let followers = self.followers.or(self.network_followers);
        if self.connections.is_some() || followers.is_some() {
            profile.connection_info = Some(ConnectionInfo {
                connection_count: self.connections.unwrap_or_default(),
                follower_count: followers.unwrap_or_default(),
            });
        }
    }
}
