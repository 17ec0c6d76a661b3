//! Lookup tables over the `included` array.

use std::collections::HashMap;

use tracing::debug;

use crate::wire::{EntityKind, Urn, WireEntity};

/// URN → entity and kind → entities, both in payload order.
///
/// Borrowed from the payload; built once per resolve call.
pub struct EntityIndex<'a> {
    entities: &'a [WireEntity],
    by_urn: HashMap<&'a Urn, usize>,
    by_kind: HashMap<EntityKind, Vec<usize>>,
}

impl<'a> EntityIndex<'a> {
    pub fn build(entities: &'a [WireEntity]) -> Self {
        let mut by_urn = HashMap::with_capacity(entities.len());
        let mut by_kind: HashMap<EntityKind, Vec<usize>> = HashMap::new();

        for (position, entity) in entities.iter().enumerate() {
            by_kind.entry(entity.kind()).or_default().push(position);

            let Some(urn) = entity.urn().filter(|u| !u.is_empty()) else {
                continue;
            };
            if by_urn.contains_key(urn) {
                // First occurrence wins.
                debug!(urn = %urn, position, "duplicate entity urn ignored");
                continue;
            }
            by_urn.insert(urn, position);
        }

        Self {
            entities,
            by_urn,
            by_kind,
        }
    }

    pub fn get(&self, urn: &Urn) -> Option<&'a WireEntity> {
        self.by_urn.get(urn).map(|&i| &self.entities[i])
    }

    /// Entities of one kind in encounter order.
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &'a WireEntity> + '_ {
        let entities = self.entities;
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(move |&i| &entities[i])
    }

    /// Every nested-collection entity, in encounter order.
    pub fn nested(&self) -> impl Iterator<Item = &'a WireEntity> + '_ {
        self.entities.iter().filter(|e| e.kind().is_nested())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
