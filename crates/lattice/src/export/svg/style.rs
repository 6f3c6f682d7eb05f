//! The per-document `<style>` block.

use indexmap::IndexMap;
use svg::node::element::Style;

use lattice_core::{draw::ElementStyle, identifier::ElementId};

/// CSS rules keyed by element id, kept in the order elements were emitted.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: IndexMap<ElementId, ElementStyle>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style of `id`. Restyling an id keeps its original position.
    pub fn insert(&mut self, id: ElementId, style: ElementStyle) {
        self.rules.insert(id, style);
    }

    #[cfg(test)]
    pub fn get(&self, id: &ElementId) -> Option<&ElementStyle> {
        self.rules.get(id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders every rule, one per line.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|(id, style)| style.to_css_rule(id.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_svg(&self) -> Style {
        Style::new(self.to_css())
    }
}
