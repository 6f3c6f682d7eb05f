//! Input validation for class diagrams.
//!
//! Validation runs before layout and reports the first violation found, in
//! this order: class names, class positions, repeated members, duplicate
//! names, relationship references, then repeated relationships.
//!
//! Every rendered element gets an id derived from what it depicts, so two
//! fields of one class with the same name, two methods with the same
//! signature, or two identical relationships are rejected rather than drawn
//! on top of each other.

use std::collections::HashSet;

use log::{debug, warn};

use lattice_core::model::{ClassDiagram, ClassSpec};

use crate::LatticeError;

/// Checks that `diagram` can be laid out.
///
/// # Errors
///
/// Returns [`LatticeError::InvalidInput`] when a class name is empty, a
/// position is negative or not finite, a class repeats a member, two classes
/// share a name, a relationship references an unknown class, or a
/// relationship is declared twice.
pub fn validate_diagram(diagram: &ClassDiagram) -> Result<(), LatticeError> {
    let mut names = HashSet::with_capacity(diagram.classes().len());

    for (index, class) in diagram.classes().iter().enumerate() {
        if class.name().trim().is_empty() {
            return Err(invalid(format!("class #{index} has an empty name")));
        }

        for (axis, value) in [("x", class.x()), ("y", class.y())] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "class `{}` has invalid {axis} position {value}; positions must be finite and non-negative",
                    class.name()
                )));
            }
        }

        validate_members(class)?;

        if !names.insert(class.name()) {
            return Err(invalid(format!(
                "class name `{}` is defined more than once",
                class.name()
            )));
        }
    }

    let mut relationships = HashSet::with_capacity(diagram.relationships().len());
    for relationship in diagram.relationships() {
        for (role, name) in [
            ("source", relationship.source()),
            ("destination", relationship.destination()),
        ] {
            if !names.contains(name) {
                return Err(invalid(format!(
                    "{} relationship {role} `{name}` does not name a class",
                    relationship.kind()
                )));
            }
        }

        let key = (
            relationship.kind(),
            relationship.source(),
            relationship.destination(),
        );
        if !relationships.insert(key) {
            return Err(invalid(format!(
                "{} relationship from `{}` to `{}` is declared more than once",
                relationship.kind(),
                relationship.source(),
                relationship.destination()
            )));
        }
    }

    debug!(
        classes = diagram.classes().len(),
        relationships = diagram.relationships().len();
        "Diagram validated"
    );
    Ok(())
}

fn validate_members(class: &ClassSpec) -> Result<(), LatticeError> {
    let mut fields = HashSet::with_capacity(class.fields().len());
    for field in class.fields() {
        if !fields.insert(field.name()) {
            return Err(invalid(format!(
                "class `{}` declares field `{}` more than once",
                class.name(),
                field.name()
            )));
        }
    }

    let mut signatures = HashSet::with_capacity(class.methods().len());
    for method in class.methods() {
        let params = method.param_types().collect::<Vec<_>>();
        if !signatures.insert((method.name(), params.clone())) {
            return Err(invalid(format!(
                "class `{}` declares method `{}({})` more than once",
                class.name(),
                method.name(),
                params.join(", ")
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> LatticeError {
    warn!(message = message.as_str(); "Rejecting diagram");
    LatticeError::InvalidInput(message)
}
