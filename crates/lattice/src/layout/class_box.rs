//! Class box sizing and text row placement.
//!
//! A class box holds a title row followed by one row per field and one row
//! per method. Its size is derived from the measured rows; its position comes
//! from the class position hint and may later be moved horizontally by
//! collision resolution, which re-runs row placement only.

use log::trace;

use lattice_core::{
    geometry::{Point, Rect, Size},
    identifier::ElementId,
    metrics::GlyphMetrics,
    model::{ClassSpec, FieldSpec, MethodSpec},
};

/// Role of a text row inside a class box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Class name, centered and bold
    Name,
    /// `+name:type`
    Field,
    /// `-name(paramType,...):returnType`
    Method,
}

/// One measured and positioned line of text.
///
/// `position` is the text anchor point: horizontally the row center for the
/// name row and the left edge for member rows; vertically the row's middle.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRow {
    id: ElementId,
    kind: RowKind,
    text: String,
    font_size: u16,
    size: Size,
    position: Point,
}

impl TextRow {
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Measured width and line height.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A positioned class rectangle with its text rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBox {
    id: ElementId,
    name: String,
    rect: Rect,
    rows: Vec<TextRow>,
    divider_y: f32,
    padding_x: f32,
    padding_y: f32,
}

impl ClassBox {
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// The class name this box was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rows in display order; the name row is always first.
    pub fn rows(&self) -> &[TextRow] {
        &self.rows
    }

    /// Vertical position of the line separating the name from the members.
    pub fn divider_y(&self) -> f32 {
        self.divider_y
    }

    /// Moves the box horizontally and re-places its rows. The size is kept.
    pub fn set_x(&mut self, x: f32) {
        self.rect.set_x(x);
        self.place_rows();
    }

    /// Computes row positions top-down from the current rectangle.
    fn place_rows(&mut self) {
        let mut top = self.rect.y() + self.padding_y;
        for row in &mut self.rows {
            let x = match row.kind {
                RowKind::Name => self.rect.center().x(),
                RowKind::Field | RowKind::Method => self.rect.x() + self.padding_x,
            };
            row.position = Point::new(x, top + row.size.height() / 2.0);
            top += row.size.height() + self.padding_y;

            if row.kind == RowKind::Name {
                self.divider_y = top;
                top += self.padding_y;
            }
        }
    }
}

/// Formats a field row.
pub fn field_text(field: &FieldSpec) -> String {
    format!("+{}:{}", field.name(), field.type_name())
}

/// Formats a method row.
pub fn method_text(method: &MethodSpec) -> String {
    let params = method.param_types().collect::<Vec<_>>().join(",");
    format!("-{}({params}):{}", method.name(), method.return_type())
}

/// Builds class boxes from class descriptions.
///
/// # Examples
///
/// ```
/// # use lattice::layout::ClassBoxLayout;
/// # use lattice_core::{metrics::GlyphMetrics, model::ClassSpec};
/// let metrics = GlyphMetrics::default();
/// let layout = ClassBoxLayout::new(&metrics, 10.0, 5.0, 14, 12);
///
/// let class_box = layout.layout(&ClassSpec::new("Order").with_field("id", "int"));
/// assert_eq!(class_box.rows().len(), 2);
/// assert_eq!(class_box.rows()[1].text(), "+id:int");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClassBoxLayout<'a> {
    metrics: &'a GlyphMetrics,
    padding_x: f32,
    padding_y: f32,
    name_font_size: u16,
    member_font_size: u16,
}

impl<'a> ClassBoxLayout<'a> {
    pub fn new(
        metrics: &'a GlyphMetrics,
        padding_x: f32,
        padding_y: f32,
        name_font_size: u16,
        member_font_size: u16,
    ) -> Self {
        Self {
            metrics,
            padding_x,
            padding_y,
            name_font_size,
            member_font_size,
        }
    }

    /// Measures the rows of `class`, sizes its box and places it at the
    /// class position hint.
    pub fn layout(&self, class: &ClassSpec) -> ClassBox {
        let id = ElementId::for_class(class.name());

        let mut rows = Vec::with_capacity(1 + class.fields().len() + class.methods().len());
        rows.push(self.row(
            id.child("name"),
            RowKind::Name,
            class.name().to_string(),
            self.name_font_size,
        ));
        for field in class.fields() {
            rows.push(self.row(
                id.child("field").child(field.name()),
                RowKind::Field,
                field_text(field),
                self.member_font_size,
            ));
        }
        for method in class.methods() {
            let row_id = method
                .param_types()
                .fold(id.child("method").child(method.name()), |row_id, param| {
                    row_id.child(param)
                });
            rows.push(self.row(
                row_id,
                RowKind::Method,
                method_text(method),
                self.member_font_size,
            ));
        }

        let content_width = rows
            .iter()
            .map(|row| row.size.width())
            .fold(0.0_f32, f32::max);
        let content_height: f32 = rows.iter().map(|row| row.size.height()).sum();

        let width = content_width + 2.0 * self.padding_x;
        let height = content_height + self.padding_y * (rows.len() as f32 + 2.0);

        let mut class_box = ClassBox {
            id,
            name: class.name().to_string(),
            rect: Rect::new(class.x(), class.y(), width, height),
            rows,
            divider_y: 0.0,
            padding_x: self.padding_x,
            padding_y: self.padding_y,
        };
        class_box.place_rows();

        trace!(
            class = class.name(),
            width = width,
            height = height;
            "Class box sized"
        );

        class_box
    }

    fn row(&self, id: ElementId, kind: RowKind, text: String, font_size: u16) -> TextRow {
        let size = self.metrics.measure(&text, f32::from(font_size));
        TextRow {
            id,
            kind,
            text,
            font_size,
            size,
            position: Point::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use lattice_core::model::MethodSpec;

    use super::*;

    fn layout_with(metrics: &GlyphMetrics, class: &ClassSpec) -> ClassBox {
        ClassBoxLayout::new(metrics, 10.0, 5.0, 14, 12).layout(class)
    }

    #[test]
    fn test_name_only_box() {
        let metrics = GlyphMetrics::default();
        let class_box = layout_with(&metrics, &ClassSpec::new("A"));

        let name = metrics.measure("A", 14.0);
        assert_eq!(class_box.rows().len(), 1);
        assert_approx_eq!(f32, class_box.rect().width(), name.width() + 20.0);
        assert_approx_eq!(f32, class_box.rect().height(), name.height() + 15.0);
        // Single row: top padding, row, divider gap, bottom padding
        assert_approx_eq!(
            f32,
            class_box.divider_y(),
            class_box.rect().bottom() - 5.0
        );
    }

    #[test]
    fn test_row_formats() {
        let method = MethodSpec::new("move", "void")
            .with_param("dx", "int")
            .with_param("dy", "int");
        assert_eq!(method_text(&method), "-move(int,int):void");
        assert_eq!(method_text(&MethodSpec::new("run", "bool")), "-run():bool");
        assert_eq!(field_text(&FieldSpec::new("id", "long")), "+id:long");
    }

    #[test]
    fn test_row_ids() {
        let metrics = GlyphMetrics::default();
        let class = ClassSpec::new("Shape")
            .with_field("area", "float")
            .with_method(
                MethodSpec::new("scale", "void")
                    .with_param("x", "float")
                    .with_param("y", "float"),
            );
        let class_box = layout_with(&metrics, &class);

        let ids: Vec<_> = class_box.rows().iter().map(|row| row.id().as_str()).collect();
        assert_eq!(
            ids,
            [
                "class-Shape-name",
                "class-Shape-field-area",
                "class-Shape-method-scale-float-float",
            ]
        );
        assert_eq!(class_box.id().as_str(), "class-Shape");
    }

    #[test]
    fn test_rows_stack_top_down() {
        let metrics = GlyphMetrics::default();
        let class = ClassSpec::new("Account")
            .with_position(40.0, 30.0)
            .with_field("owner", "String")
            .with_field("balance", "f64")
            .with_method(MethodSpec::new("close", "void"));
        let class_box = layout_with(&metrics, &class);
        let rect = class_box.rect();
        let rows = class_box.rows();

        assert_eq!(rows[0].kind(), RowKind::Name);
        assert_approx_eq!(f32, rows[0].position().x(), rect.center().x());
        assert!(rows[0].position().y() < class_box.divider_y());

        for row in &rows[1..] {
            assert_approx_eq!(f32, row.position().x(), rect.x() + 10.0);
            assert!(row.position().y() > class_box.divider_y());
        }
        for pair in rows.windows(2) {
            assert!(pair[0].position().y() < pair[1].position().y());
        }

        let last = rows.last().unwrap();
        assert_approx_eq!(
            f32,
            last.position().y() + last.size().height() / 2.0 + 5.0,
            rect.bottom(),
            epsilon = 0.001
        );
    }

    #[test]
    fn test_set_x_keeps_size_and_moves_rows() {
        let metrics = GlyphMetrics::default();
        let class = ClassSpec::new("Node").with_field("next", "Node");
        let mut class_box = layout_with(&metrics, &class);
        let before = class_box.clone();

        class_box.set_x(120.0);

        assert_approx_eq!(f32, class_box.rect().x(), 120.0);
        assert_approx_eq!(f32, class_box.rect().width(), before.rect().width());
        assert_approx_eq!(f32, class_box.rect().height(), before.rect().height());
        assert_approx_eq!(f32, class_box.divider_y(), before.divider_y());
        for (moved, original) in class_box.rows().iter().zip(before.rows()) {
            assert_approx_eq!(f32, moved.position().x() - original.position().x(), 120.0);
            assert_approx_eq!(f32, moved.position().y(), original.position().y());
        }
    }

    #[test]
    fn test_substituted_metrics() {
        let metrics = GlyphMetrics::default().with_advance('W', 20.0);
        let wide = layout_with(&metrics, &ClassSpec::new("W"));
        let narrow = layout_with(&GlyphMetrics::default(), &ClassSpec::new("W"));
        assert!(wide.rect().width() > narrow.rect().width());
    }
}
