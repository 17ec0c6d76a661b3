//! Top-level normalized response.
//!
//! ```text
//! { "data": { "items": [ {"*entityResult": "urn:..."} ] },
//!   "included": [ {"$type": "...", "entityUrn": "urn:..."}, ... ] }
//! ```

use serde_json::{Map, Value};

use super::dispatch::decode_entity;
use super::entity::WireEntity;
use super::text::shape;
use super::urn::Urn;
use crate::error::{Result, VoyagerError};

const ROOT_KEYS: &[&str] = &["rootResult", "data"];
const ITEMS_KEY: &str = "items";
const INCLUDED_KEY: &str = "included";

/// One root-level item. Holds references only, never inline data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootItem {
    pub refs: Vec<Urn>,
}

impl RootItem {
    pub fn references(&self, urn: &Urn) -> bool {
        self.refs.iter().any(|r| r == urn)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootResult {
    pub items: Vec<RootItem>,
}

impl RootResult {
    /// Every referenced URN, item order first, deduplicated.
    pub fn all_refs(&self) -> impl Iterator<Item = &Urn> {
        let mut seen = std::collections::HashSet::new();
        self.items
            .iter()
            .flat_map(|item| item.refs.iter())
            .filter(move |urn| seen.insert(*urn))
    }
}

/// A decoded response: root references plus the flat entity collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub root: RootResult,
    pub included: Vec<WireEntity>,
}

impl Payload {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let mut top = match value {
            Value::Object(map) => map,
            other => {
                return Err(VoyagerError::MalformedPayload(format!(
                    "top level is not an object (found {})",
                    shape(&other)
                )))
            }
        };

        let root = match ROOT_KEYS.iter().find_map(|k| top.get(*k)) {
            Some(value) => parse_root(value)?,
            None => RootResult::default(),
        };

        let included = match top.remove(INCLUDED_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(elements)) => elements
                .into_iter()
                .enumerate()
                .map(|(position, element)| decode_entity(element, position))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(VoyagerError::MalformedPayload(format!(
                    "{} is not an array (found {})",
                    INCLUDED_KEY,
                    shape(&other)
                )))
            }
        };

        Ok(Payload { root, included })
    }
}

fn parse_root(value: &Value) -> Result<RootResult> {
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(RootResult::default()),
        other => {
            return Err(VoyagerError::MalformedPayload(format!(
                "root result is not an object (found {})",
                shape(other)
            )))
        }
    };

    let items = match map.get(ITEMS_KEY) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(position, item)| parse_item(item, position))
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(VoyagerError::MalformedPayload(format!(
                "root items is not an array (found {})",
                shape(other)
            )))
        }
    };

    Ok(RootResult { items })
}

fn parse_item(item: &Value, position: usize) -> Result<RootItem> {
    let mut refs = Vec::new();
    match item {
        Value::String(urn) => refs.push(Urn::from(urn.as_str())),
        Value::Object(map) => collect_refs(map, &mut refs),
        other => {
            return Err(VoyagerError::MalformedPayload(format!(
                "items[{}] is neither a reference nor an object (found {})",
                position,
                shape(other)
            )))
        }
    }
    Ok(RootItem { refs })
}

fn is_ref_key(key: &str) -> bool {
    key == "ref" || key == "refs" || key.starts_with('*')
}

fn collect_refs(map: &Map<String, Value>, out: &mut Vec<Urn>) {
    for (key, value) in map {
        if is_ref_key(key) {
            push_ref_values(value, out);
        } else {
            match value {
                Value::Object(inner) => collect_refs(inner, out),
                Value::Array(elements) => {
                    for element in elements {
                        if let Value::Object(inner) = element {
                            collect_refs(inner, out);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn push_ref_values(value: &Value, out: &mut Vec<Urn>) {
    match value {
        Value::String(s) if !s.is_empty() => {
            let urn = Urn::from(s.as_str());
            if !out.contains(&urn) {
                out.push(urn);
            }
        }
        Value::Array(elements) => {
            for element in elements {
                push_ref_values(element, out);
            }
        }
        _ => {}
    }
}
