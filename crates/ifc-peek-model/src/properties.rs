// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity attribute access
//!
//! The viewer hands back a loosely typed object per entity where every
//! attribute is either `null` or a `{ "type": .., "value": .. }` wrapper.
//! Only the attributes the inspector shows are modelled here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute value as reported by the viewer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl AttributeValue {
    /// Text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Display form of the value, or `None` when it carries nothing to show
    ///
    /// Empty text counts as absent. Numbers and booleans are always shown,
    /// including zero and `false`.
    pub fn to_display(&self) -> Option<String> {
        match self {
            AttributeValue::Text(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// `{ value }` wrapper used by the viewer for every attribute
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub value: Option<AttributeValue>,
}

/// Attributes of a picked entity that the inspector displays
///
/// Every field is optional: the viewer reports missing attributes as `null`
/// and some entity types simply do not carry them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyBag {
    #[serde(default)]
    pub global_id: Option<Attribute>,
    #[serde(default)]
    pub name: Option<Attribute>,
    #[serde(default)]
    pub object_type: Option<Attribute>,
    #[serde(default)]
    pub predefined_type: Option<Attribute>,
}

impl PropertyBag {
    /// Raw value of an attribute, if present and not null
    fn value(attr: &Option<Attribute>) -> Option<&AttributeValue> {
        attr.as_ref().and_then(|a| a.value.as_ref())
    }

    pub fn global_id(&self) -> Option<&AttributeValue> {
        Self::value(&self.global_id)
    }

    pub fn name(&self) -> Option<&AttributeValue> {
        Self::value(&self.name)
    }

    pub fn object_type(&self) -> Option<&AttributeValue> {
        Self::value(&self.object_type)
    }

    pub fn predefined_type(&self) -> Option<&AttributeValue> {
        Self::value(&self.predefined_type)
    }
}
