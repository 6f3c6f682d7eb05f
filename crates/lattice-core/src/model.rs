//! Input data model for class diagrams.
//!
//! These are the plain descriptors handed to the layout engine: classes with
//! their fields, methods and position hints, and typed relationships that
//! refer to classes by name. They deserialize from the JSON form
//!
//! ```json
//! {
//!   "classes": [{ "name": "A", "fields": [{"name": "id", "type": "int"}], "x": 0, "y": 0 }],
//!   "relationships": [{ "type": "Inheritance", "source": "B", "destination": "A" }]
//! }
//! ```
//!
//! The model owns no layout state and is never mutated by a build.

use std::fmt;

use serde::Deserialize;

/// A complete diagram description: classes in display order plus relationships.
///
/// # Examples
///
/// ```
/// # use lattice_core::model::{ClassDiagram, ClassSpec, RelationshipKind, RelationshipSpec};
/// let diagram = ClassDiagram::new(
///     vec![
///         ClassSpec::new("Animal").with_field("name", "String"),
///         ClassSpec::new("Dog").with_position(200.0, 0.0),
///     ],
///     vec![RelationshipSpec::new(RelationshipKind::Inheritance, "Dog", "Animal")],
/// );
///
/// assert_eq!(diagram.classes().len(), 2);
/// assert_eq!(diagram.relationships()[0].source(), "Dog");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClassDiagram {
    #[serde(default)]
    classes: Vec<ClassSpec>,
    #[serde(default)]
    relationships: Vec<RelationshipSpec>,
}

impl ClassDiagram {
    pub fn new(classes: Vec<ClassSpec>, relationships: Vec<RelationshipSpec>) -> Self {
        Self {
            classes,
            relationships,
        }
    }

    /// Returns the classes in input order.
    pub fn classes(&self) -> &[ClassSpec] {
        &self.classes
    }

    /// Returns the relationships in input order.
    pub fn relationships(&self) -> &[RelationshipSpec] {
        &self.relationships
    }
}

/// Description of one class box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassSpec {
    name: String,
    #[serde(default)]
    fields: Vec<FieldSpec>,
    #[serde(default)]
    methods: Vec<MethodSpec>,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

impl ClassSpec {
    /// Creates a class at the origin with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Sets the initial position hint.
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Appends a field.
    pub fn with_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(FieldSpec::new(name, type_name));
        self
    }

    /// Appends a method.
    pub fn with_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    /// Horizontal position hint
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position hint
    pub fn y(&self) -> f32 {
        self.y
    }
}

/// A typed attribute of a class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldSpec {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// A method of a class: name, return type and ordered parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodSpec {
    name: String,
    #[serde(rename = "returnType")]
    return_type: String,
    #[serde(default)]
    params: Vec<ParamSpec>,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter.
    pub fn with_param(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.params.push(ParamSpec::new(name, type_name));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Iterates the parameter type names in declaration order.
    pub fn param_types(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(ParamSpec::type_name)
    }
}

/// A method parameter. Only the type is displayed; the name is kept for
/// completeness of the input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParamSpec {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// The four supported relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RelationshipKind {
    Aggregation,
    Composition,
    Inheritance,
    Realization,
}

impl RelationshipKind {
    /// All kinds, in declaration order.
    pub const ALL: [RelationshipKind; 4] = [
        Self::Aggregation,
        Self::Composition,
        Self::Inheritance,
        Self::Realization,
    ];

    /// Lowercase name used in element identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aggregation => "aggregation",
            Self::Composition => "composition",
            Self::Inheritance => "inheritance",
            Self::Realization => "realization",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed, directed relationship between two classes named by `source` and
/// `destination`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelationshipSpec {
    #[serde(rename = "type")]
    kind: RelationshipKind,
    source: String,
    destination: String,
}

impl RelationshipSpec {
    pub fn new(
        kind: RelationshipKind,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Name of the class the relationship starts at.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name of the class the relationship points to.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_diagram() {
        let json = r#"{
            "classes": [
                {
                    "name": "Shape",
                    "fields": [{"name": "origin", "type": "Point"}],
                    "methods": [
                        {"name": "area", "returnType": "f64", "params": []},
                        {"name": "scale", "returnType": "void",
                         "params": [{"name": "factor", "type": "f64"}, {"name": "pivot", "type": "Point"}]}
                    ],
                    "x": 10, "y": 20.5
                },
                {"name": "Circle", "x": 200, "y": 0}
            ],
            "relationships": [
                {"type": "Inheritance", "source": "Circle", "destination": "Shape"}
            ]
        }"#;

        let diagram: ClassDiagram = serde_json::from_str(json).unwrap();
        assert_eq!(diagram.classes().len(), 2);

        let shape = &diagram.classes()[0];
        assert_eq!(shape.name(), "Shape");
        assert_eq!(shape.x(), 10.0);
        assert_eq!(shape.y(), 20.5);
        assert_eq!(shape.fields()[0].type_name(), "Point");
        assert_eq!(shape.methods()[1].return_type(), "void");
        assert_eq!(
            shape.methods()[1].param_types().collect::<Vec<_>>(),
            vec!["f64", "Point"]
        );

        let circle = &diagram.classes()[1];
        assert!(circle.fields().is_empty());
        assert!(circle.methods().is_empty());

        let rel = &diagram.relationships()[0];
        assert_eq!(rel.kind(), RelationshipKind::Inheritance);
        assert_eq!(rel.source(), "Circle");
        assert_eq!(rel.destination(), "Shape");
    }

    #[test]
    fn test_deserialize_defaults() {
        let diagram: ClassDiagram = serde_json::from_str(r#"{"classes": [{"name": "A"}]}"#).unwrap();
        let class = &diagram.classes()[0];
        assert_eq!(class.x(), 0.0);
        assert_eq!(class.y(), 0.0);
        assert!(diagram.relationships().is_empty());
    }

    #[test]
    fn test_deserialize_unknown_kind_fails() {
        let json = r#"{"relationships": [{"type": "Dependency", "source": "A", "destination": "B"}]}"#;
        assert!(serde_json::from_str::<ClassDiagram>(json).is_err());
    }

    #[test]
    fn test_builders_match_deserialized() {
        let built = ClassSpec::new("A")
            .with_position(1.0, 2.0)
            .with_field("id", "int")
            .with_method(MethodSpec::new("run", "void").with_param("n", "int"));

        let json = r#"{"name": "A", "x": 1, "y": 2,
            "fields": [{"name": "id", "type": "int"}],
            "methods": [{"name": "run", "returnType": "void", "params": [{"name": "n", "type": "int"}]}]}"#;
        let parsed: ClassSpec = serde_json::from_str(json).unwrap();

        assert_eq!(built, parsed);
    }

    #[test]
    fn test_relationship_kind_names() {
        let names: Vec<_> = RelationshipKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            vec!["aggregation", "composition", "inheritance", "realization"]
        );
    }
}
