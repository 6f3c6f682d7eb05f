//! Approximate text measurement.
//!
//! Lattice does not shape text. Widths come from a per-character advance
//! table expressed at font size 10; a string's width is the sum of its
//! characters' advances scaled by `font_size / 10`. Characters missing from
//! the table use the configured default advance instead of failing.
//!
//! The table is an explicit value, so callers can substitute their own
//! metrics per build.
//!
//! # Examples
//!
//! ```
//! # use lattice_core::metrics::GlyphMetrics;
//! let metrics = GlyphMetrics::default();
//!
//! // 'a' advances 5.56 units at font size 10
//! assert!((metrics.char_width('a', 10.0) - 5.56).abs() < 0.001);
//! assert!((metrics.char_width('a', 20.0) - 11.12).abs() < 0.001);
//!
//! // Line height = ceil(size * 0.7) * 1.5
//! assert_eq!(metrics.line_height(12.0), 13.5);
//! ```

use std::collections::HashMap;

use log::trace;

use crate::geometry::Size;

/// Advance used for characters absent from the table, at font size 10.
pub const DEFAULT_ADVANCE: f32 = 5.56;

/// Helvetica advance widths at font size 10 for printable ASCII.
const HELVETICA_ADVANCES: &[(char, f32)] = &[
    (' ', 2.78),
    ('!', 2.78),
    ('"', 3.55),
    ('#', 5.56),
    ('$', 5.56),
    ('%', 8.89),
    ('&', 6.67),
    ('\'', 1.91),
    ('(', 3.33),
    (')', 3.33),
    ('*', 3.89),
    ('+', 5.84),
    (',', 2.78),
    ('-', 3.33),
    ('.', 2.78),
    ('/', 2.78),
    ('0', 5.56),
    ('1', 5.56),
    ('2', 5.56),
    ('3', 5.56),
    ('4', 5.56),
    ('5', 5.56),
    ('6', 5.56),
    ('7', 5.56),
    ('8', 5.56),
    ('9', 5.56),
    (':', 2.78),
    (';', 2.78),
    ('<', 5.84),
    ('=', 5.84),
    ('>', 5.84),
    ('?', 5.56),
    ('@', 10.15),
    ('A', 6.67),
    ('B', 6.67),
    ('C', 7.22),
    ('D', 7.22),
    ('E', 6.67),
    ('F', 6.11),
    ('G', 7.78),
    ('H', 7.22),
    ('I', 2.78),
    ('J', 5.00),
    ('K', 6.67),
    ('L', 5.56),
    ('M', 8.33),
    ('N', 7.22),
    ('O', 7.78),
    ('P', 6.67),
    ('Q', 7.78),
    ('R', 7.22),
    ('S', 6.67),
    ('T', 6.11),
    ('U', 7.22),
    ('V', 6.67),
    ('W', 9.44),
    ('X', 6.67),
    ('Y', 6.67),
    ('Z', 6.11),
    ('[', 2.78),
    ('\\', 2.78),
    (']', 2.78),
    ('^', 4.69),
    ('_', 5.56),
    ('`', 3.33),
    ('a', 5.56),
    ('b', 5.56),
    ('c', 5.00),
    ('d', 5.56),
    ('e', 5.56),
    ('f', 2.78),
    ('g', 5.56),
    ('h', 5.56),
    ('i', 2.22),
    ('j', 2.22),
    ('k', 5.00),
    ('l', 2.22),
    ('m', 8.33),
    ('n', 5.56),
    ('o', 5.56),
    ('p', 5.56),
    ('q', 5.56),
    ('r', 3.33),
    ('s', 5.00),
    ('t', 2.78),
    ('u', 5.56),
    ('v', 5.00),
    ('w', 7.22),
    ('x', 5.00),
    ('y', 5.00),
    ('z', 5.00),
    ('{', 3.34),
    ('|', 2.60),
    ('}', 3.34),
    ('~', 5.84),
];

/// Per-character advance table used to approximate rendered text size.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMetrics {
    advances: HashMap<char, f32>,
    default_advance: f32,
}

impl GlyphMetrics {
    /// Creates metrics from an explicit advance table.
    ///
    /// # Arguments
    ///
    /// * `advances` - Advance per character at font size 10.
    /// * `default_advance` - Advance for characters not in `advances`.
    pub fn new(advances: HashMap<char, f32>, default_advance: f32) -> Self {
        Self {
            advances,
            default_advance,
        }
    }

    /// Returns the built-in Helvetica-like table.
    pub fn helvetica() -> Self {
        Self::new(
            HELVETICA_ADVANCES.iter().copied().collect(),
            DEFAULT_ADVANCE,
        )
    }

    /// Returns a copy with a single character's advance replaced.
    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    /// Returns a copy with a different fallback advance.
    pub fn with_default_advance(mut self, advance: f32) -> Self {
        self.default_advance = advance;
        self
    }

    /// Returns the fallback advance at font size 10.
    pub fn default_advance(&self) -> f32 {
        self.default_advance
    }

    /// Returns the table advance of `ch` at font size 10.
    pub fn advance(&self, ch: char) -> f32 {
        match self.advances.get(&ch) {
            Some(advance) => *advance,
            None => {
                trace!(ch:?; "No advance for character, using default");
                self.default_advance
            }
        }
    }

    /// Approximate advance width of `ch` at `font_size`.
    pub fn char_width(&self, ch: char, font_size: f32) -> f32 {
        font_size / 10.0 * self.advance(ch)
    }

    /// Approximate width of a single line of text.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }

    /// Height of one text line at `font_size`.
    pub fn line_height(&self, font_size: f32) -> f32 {
        (font_size * 0.7).ceil() * 1.5
    }

    /// Size of a single line of text.
    pub fn measure(&self, text: &str, font_size: f32) -> Size {
        Size::new(self.text_width(text, font_size), self.line_height(font_size))
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::helvetica()
    }
}
