//! Stable identifiers for rendered diagram elements.
//!
//! Every rendered element carries an id derived from what it depicts (class
//! name, member name, relationship endpoints), never from its position in an
//! input list. Styles are keyed by these ids, so reordering the input does not
//! change which style an element receives.

use std::fmt;

use crate::model::RelationshipKind;

/// Identifier of a single rendered element, safe for use as an SVG `id`.
///
/// An id is a `-` separated list of segments. Inside a segment ASCII
/// alphanumerics are kept and every other byte, `-` and `_` included, is
/// written as `_` followed by two uppercase hex digits. Distinct names
/// therefore never share an id.
///
/// # Examples
///
/// ```
/// use lattice_core::identifier::ElementId;
/// use lattice_core::model::RelationshipKind;
///
/// let class_id = ElementId::for_class("Order Line");
/// assert_eq!(class_id.as_str(), "class-Order_20Line");
/// assert_eq!(class_id.child("name").as_str(), "class-Order_20Line-name");
///
/// let rel_id = ElementId::for_relationship(RelationshipKind::Composition, "Order", "Line");
/// assert_eq!(rel_id.as_str(), "rel-composition-Order-Line");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Identifier of a standalone element such as the canvas background.
    pub fn new(name: &str) -> Self {
        Self(escape(name))
    }

    /// Identifier of the box drawn for a class.
    pub fn for_class(class_name: &str) -> Self {
        Self(format!("class-{}", escape(class_name)))
    }

    /// Identifier of the connector drawn for a relationship.
    pub fn for_relationship(kind: RelationshipKind, source: &str, destination: &str) -> Self {
        Self(format!(
            "rel-{}-{}-{}",
            kind.name(),
            escape(source),
            escape(destination)
        ))
    }

    /// Derives the identifier of a part of this element.
    pub fn child(&self, part: &str) -> Self {
        Self(format!("{}-{}", self.0, escape(part)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() {
            escaped.push(char::from(byte));
        } else {
            escaped.push_str(&format!("_{byte:02X}"));
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("List<String>"), "List_3CString_3E");
        assert_eq!(escape("a.b c"), "a_2Eb_20c");
        assert_eq!(escape("ok-name_1"), "ok_2Dname_5F1");
        assert_eq!(escape("Größe"), "Gr_C3_B6_C3_9Fe");
    }

    #[test]
    fn test_child_ids_are_escaped() {
        let id = ElementId::for_class("Repo").child("method").child("find(int)");
        assert_eq!(id.as_str(), "class-Repo-method-find_28int_29");
    }

    #[test]
    fn test_similar_names_get_distinct_ids() {
        assert_ne!(ElementId::for_class("A B"), ElementId::for_class("A_B"));
        assert_ne!(ElementId::for_class("A_B"), ElementId::for_class("A_5FB"));

        let kind = RelationshipKind::Inheritance;
        assert_ne!(
            ElementId::for_relationship(kind, "A", "B-C"),
            ElementId::for_relationship(kind, "A-B", "C")
        );
        assert_ne!(
            ElementId::for_class("A").child("name"),
            ElementId::for_class("A-name")
        );
    }

    #[test]
    fn test_ids_depend_on_identity_only() {
        let first = ElementId::for_relationship(RelationshipKind::Aggregation, "A", "B");
        let second = ElementId::for_relationship(RelationshipKind::Aggregation, "A", "B");
        let reversed = ElementId::for_relationship(RelationshipKind::Aggregation, "B", "A");
        let other_kind = ElementId::for_relationship(RelationshipKind::Composition, "A", "B");

        assert_eq!(first, second);
        assert_ne!(first, reversed);
        assert_ne!(first, other_kind);
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = ElementId::for_class("Widget");
        assert_eq!(id.to_string(), id.as_str());
    }
}
