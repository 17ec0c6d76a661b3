//! Normalized graph resolver.
//!
//! Turns a decoded [`Payload`](crate::wire::Payload) back into nested
//! domain values:
//!
//! 1. index the `included` array by URN and by kind
//! 2. find the anchor (a profile or a search card)
//! 3. project the anchor's scalar fields
//! 4. attach nested entities according to the endpoint's association policy
//! 5. sanitise, apply the full name rule, validate
//!
//! Every step is a pure function of the payload, so resolving the same
//! payload twice yields identical values.

pub mod index;
pub mod profile;
pub mod project;
pub mod search;

pub use index::EntityIndex;
pub use profile::{resolve_profile, resolve_profile_auto};
pub use search::{resolve_search, SearchPage};

use crate::error::{Result, VoyagerError};
use crate::model::Profile;

/// Strip NULs and surrounding whitespace.
fn sanitize(value: &mut String) {
    if value.contains('\0') {
        value.retain(|c| c != '\0');
    }
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn sanitize_profile(p: &mut Profile) {
    for field in [
        &mut p.urn,
        &mut p.public_identifier,
        &mut p.first_name,
        &mut p.last_name,
        &mut p.full_name,
        &mut p.headline,
        &mut p.summary,
        &mut p.profile_url,
        &mut p.temp_status,
        &mut p.temp_status_emoji,
    ] {
        sanitize(field);
    }
    if let Some(location) = p.location.as_mut() {
        sanitize(&mut location.name);
        sanitize(&mut location.country_code);
    }
    for e in &mut p.experience {
        sanitize(&mut e.title);
        sanitize(&mut e.company_name);
        sanitize(&mut e.description);
        sanitize(&mut e.location_name);
    }
    for e in &mut p.education {
        sanitize(&mut e.school_name);
        sanitize(&mut e.degree_name);
        sanitize(&mut e.field_of_study);
    }
    for s in &mut p.skills {
        sanitize(&mut s.name);
    }
    for c in &mut p.certifications {
        sanitize(&mut c.name);
        sanitize(&mut c.authority);
    }
}

/// Last step of every resolve call.
pub(crate) fn finish(mut profile: Profile, context: &str) -> Result<Profile> {
    sanitize_profile(&mut profile);
    profile.fill_full_name();
    if profile.urn.is_empty() {
        return Err(VoyagerError::MissingIdentifier {
            context: context.to_string(),
        });
    }
    Ok(profile)
}
