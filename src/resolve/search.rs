//! Search resolver (multi subject).
//!
//! One hit per search card referenced from the root, first root item
//! wins. Nested entities attach to a hit only when their owner (explicit,
//! or embedded in a network-count URN) is the hit's profile or when they
//! share a root item with its card. Anything else is reported in
//! [`SearchPage::unassociated`] rather than guessed at.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use super::finish;
use super::index::EntityIndex;
use super::project::{card_scalars, enrich_from_profile, Nested};
use crate::error::Result;
use crate::model::Profile;
use crate::wire::{EntityKind, Payload, RootItem, SearchCardEntity, Urn, WireEntity};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Hits in root item order.
    pub profiles: Vec<Profile>,
    /// Nested entities that could not be tied to any hit.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unassociated: Vec<Urn>,
}

impl SearchPage {
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

struct Hit<'a> {
    card: &'a SearchCardEntity,
    item: Option<&'a RootItem>,
}

impl Hit<'_> {
    fn subject(&self) -> Option<&Urn> {
        self.card.subject()
    }
}

fn card_in<'a>(item: &RootItem, index: &EntityIndex<'a>) -> Option<&'a SearchCardEntity> {
    item.refs.iter().find_map(|urn| match index.get(urn) {
        Some(WireEntity::SearchCard(card)) => Some(card),
        _ => None,
    })
}

fn hits<'a>(payload: &'a Payload, index: &EntityIndex<'a>) -> Vec<Hit<'a>> {
    let mut seen = HashSet::new();
    let mut from_items = Vec::new();
    for item in &payload.root.items {
        let Some(card) = card_in(item, index) else {
            continue;
        };
        if seen.insert(card.entity_urn.as_ref()) {
            from_items.push(Hit {
                card,
                item: Some(item),
            });
        } else {
            debug!(urn = ?card.entity_urn, "card referenced by more than one root item");
        }
    }

    if !from_items.is_empty() {
        return from_items;
    }

    debug!("no root item references a card, scanning included entities");
    index
        .of_kind(EntityKind::SearchCard)
        .filter_map(|e| match e {
            WireEntity::SearchCard(card) => Some(Hit { card, item: None }),
            _ => None,
        })
        .collect()
}

/// Index of the hit `entity` belongs to, if any.
fn owning_hit(entity: &WireEntity, hits: &[Hit<'_>]) -> Option<usize> {
    if let Some(owner) = entity.correlated_owner() {
        if let Some(i) = hits
            .iter()
            .position(|h| h.subject().map(Urn::as_str) == Some(owner))
        {
            return Some(i);
        }
    }
    let urn = entity.urn()?;
    hits.iter()
        .position(|h| h.item.map_or(false, |item| item.references(urn)))
}

/// Resolve a search response into its hits, in root item order.
pub fn resolve_search(payload: &Payload) -> Result<SearchPage> {
    let index = EntityIndex::build(&payload.included);
    let hits = hits(payload, &index);

    let mut nested: Vec<Nested> = hits.iter().map(|_| Nested::default()).collect();
    let mut unassociated = Vec::new();

    for entity in index.nested() {
        match owning_hit(entity, &hits) {
            Some(i) => nested[i].attach(entity),
            None => {
                warn!(
                    kind = %entity.kind(),
                    urn = ?entity.urn(),
                    owner = ?entity.correlated_owner(),
                    "entity not associated with any search hit"
                );
                if let Some(urn) = entity.urn() {
                    unassociated.push(urn.clone());
                }
            }
        }
    }

    let mut profiles = Vec::with_capacity(hits.len());
    for (hit, nested) in hits.iter().zip(nested) {
        let subject = hit.subject();
        let mut profile = card_scalars(hit.card, subject);
        if let Some(WireEntity::Profile(entity)) = subject.and_then(|u| index.get(u)) {
            enrich_from_profile(&mut profile, entity);
        }
        nested.apply(&mut profile);
        profiles.push(finish(profile, "search hit")?);
    }

    Ok(SearchPage {
        profiles,
        unassociated,
    })
}
