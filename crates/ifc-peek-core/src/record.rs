// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property record shown in the inspector popover

use crate::text::decode_ifc_text;
use ifc_peek_model::{AttributeValue, PropertyBag};

/// Display keys, in popover order
pub const ENTITY_TYPE: &str = "Entity Type";
pub const GLOBAL_ID: &str = "GlobalId";
pub const NAME: &str = "Name";
pub const OBJECT_TYPE: &str = "ObjectType";
pub const PREDEFINED_TYPE: &str = "PredefinedType";

fn raw(value: Option<&AttributeValue>) -> Option<String> {
    value.and_then(AttributeValue::to_display)
}

fn decoded(value: Option<&AttributeValue>) -> Option<String> {
    raw(value)
        .map(|s| decode_ifc_text(&s))
        .filter(|s| !s.is_empty())
}

/// Properties of one picked entity, ready for display
///
/// Built fresh for every pick and dropped when the popover closes. Absent,
/// null and empty-text values are `None` and are not displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityPropertyRecord {
    pub entity_type: Option<String>,
    pub global_id: Option<String>,
    pub name: Option<String>,
    pub object_type: Option<String>,
    pub predefined_type: Option<String>,
}

impl EntityPropertyRecord {
    /// Build a record from the viewer's type name and attributes
    ///
    /// `Name` and `ObjectType` are free text and go through the escape
    /// decoder; the other fields are identifiers or enumerations and are
    /// shown raw.
    pub fn from_properties(entity_type: &str, props: Option<&PropertyBag>) -> Self {
        let mut record = Self {
            entity_type: Some(entity_type.to_string()).filter(|s| !s.is_empty()),
            ..Self::default()
        };

        if let Some(props) = props {
            record.global_id = raw(props.global_id());
            record.name = decoded(props.name());
            record.object_type = decoded(props.object_type());
            record.predefined_type = raw(props.predefined_type());
        }

        record
    }

    /// Rows to display as `(key, value)`, skipping absent values
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (ENTITY_TYPE, &self.entity_type),
            (GLOBAL_ID, &self.global_id),
            (NAME, &self.name),
            (OBJECT_TYPE, &self.object_type),
            (PREDEFINED_TYPE, &self.predefined_type),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }

    /// True when there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.rows().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_peek_model::Attribute;

    fn attr(value: AttributeValue) -> Option<Attribute> {
        Some(Attribute { value: Some(value) })
    }

    fn text(s: &str) -> Option<Attribute> {
        attr(AttributeValue::Text(s.to_string()))
    }

    #[test]
    fn test_decodes_name_and_object_type_only() {
        let props = PropertyBag {
            global_id: text("\\X2\\0041\\X0\\"),
            name: text("\\X2\\58C1\\X0\\"),
            object_type: text("\\X2\\0042\\X0\\"),
            predefined_type: text("\\X2\\0043\\X0\\"),
        };

        let record = EntityPropertyRecord::from_properties("IFCWALL", Some(&props));
        assert_eq!(record.entity_type.as_deref(), Some("IFCWALL"));
        assert_eq!(record.global_id.as_deref(), Some("\\X2\\0041\\X0\\"));
        assert_eq!(record.name.as_deref(), Some("壁"));
        assert_eq!(record.object_type.as_deref(), Some("B"));
        assert_eq!(record.predefined_type.as_deref(), Some("\\X2\\0043\\X0\\"));
    }

    #[test]
    fn test_rows_skip_absent_and_empty() {
        let props = PropertyBag {
            global_id: text("3vB2YO$MX4xv5uCqZZG05x"),
            name: text(""),
            object_type: Some(Attribute { value: None }),
            predefined_type: attr(AttributeValue::Number(0.0)),
        };

        let record = EntityPropertyRecord::from_properties("IFCSLAB", Some(&props));
        let rows: Vec<_> = record.rows().collect();
        assert_eq!(
            rows,
            vec![
                (ENTITY_TYPE, "IFCSLAB"),
                (GLOBAL_ID, "3vB2YO$MX4xv5uCqZZG05x"),
                (PREDEFINED_TYPE, "0"),
            ]
        );
    }

    #[test]
    fn test_type_only_when_no_properties() {
        let record = EntityPropertyRecord::from_properties("IFCDOOR", None);
        assert_eq!(record.rows().collect::<Vec<_>>(), vec![(ENTITY_TYPE, "IFCDOOR")]);
        assert!(!record.is_empty());
        assert!(EntityPropertyRecord::from_properties("", None).is_empty());
    }
}
