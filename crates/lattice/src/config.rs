//! Configuration types for Lattice diagram rendering.
//!
//! This module provides configuration structures that control how class
//! diagrams are laid out, routed and styled. All types implement
//! [`serde::Deserialize`] and fill missing fields with defaults, so partial
//! configuration files are valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Box padding, collision, grid and routing parameters.
//! - [`StyleConfig`] - Colors and font family.
//! - [`MetricsConfig`] - Overrides for the text measurement table.
//!
//! # Example
//!
//! ```
//! # use lattice::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().turn_penalty(), 5);
//! assert!(config.style().background_color().is_ok());
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use lattice_core::{color::Color, metrics::GlyphMetrics};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Text measurement overrides.
    #[serde(default)]
    metrics: MetricsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, metrics: MetricsConfig) -> Self {
        Self {
            layout,
            style,
            metrics,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the metrics configuration.
    pub fn metrics(&self) -> &MetricsConfig {
        &self.metrics
    }
}

/// Parameters of box sizing, collision resolution and connector routing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal padding inside a class box.
    padding_x: f32,
    /// Vertical padding above, between and below text rows.
    padding_y: f32,
    /// Gap inserted between two boxes when one is moved off another.
    collision_padding: f32,
    /// Number of collision sweeps; `1` is a single ordered pass.
    collision_sweeps: usize,
    /// Empty margin added right of and below the rightmost/lowest box.
    border_padding: f32,
    /// Keep-out distance around each box on the occupancy grid, in cells.
    grid_buffer: u32,
    /// Extra routing cost for every change of direction.
    turn_penalty: u32,
    /// Size of relationship glyphs.
    glyph_size: f32,
    /// Font size of class names.
    name_font_size: u16,
    /// Font size of field and method rows.
    member_font_size: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_x: 10.0,
            padding_y: 5.0,
            collision_padding: 20.0,
            collision_sweeps: 1,
            border_padding: 20.0,
            grid_buffer: 2,
            turn_penalty: 5,
            glyph_size: 8.0,
            name_font_size: 14,
            member_font_size: 12,
        }
    }
}

impl LayoutConfig {
    pub fn padding_x(&self) -> f32 {
        self.padding_x
    }

    pub fn padding_y(&self) -> f32 {
        self.padding_y
    }

    pub fn collision_padding(&self) -> f32 {
        self.collision_padding
    }

    pub fn collision_sweeps(&self) -> usize {
        self.collision_sweeps
    }

    pub fn border_padding(&self) -> f32 {
        self.border_padding
    }

    pub fn grid_buffer(&self) -> u32 {
        self.grid_buffer
    }

    pub fn turn_penalty(&self) -> u32 {
        self.turn_penalty
    }

    pub fn glyph_size(&self) -> f32 {
        self.glyph_size
    }

    pub fn name_font_size(&self) -> u16 {
        self.name_font_size
    }

    pub fn member_font_size(&self) -> u16 {
        self.member_font_size
    }

    /// Sets the number of collision sweeps.
    ///
    /// Values above one repeat the sweep until nothing moves or the limit is
    /// reached. Zero disables collision resolution.
    pub fn with_collision_sweeps(mut self, sweeps: usize) -> Self {
        self.collision_sweeps = sweeps;
        self
    }

    /// Sets the per-box keep-out buffer on the occupancy grid.
    pub fn with_grid_buffer(mut self, buffer: u32) -> Self {
        self.grid_buffer = buffer;
        self
    }

    /// Sets the routing turn penalty.
    pub fn with_turn_penalty(mut self, penalty: u32) -> Self {
        self.turn_penalty = penalty;
        self
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color, as a CSS color string. No background when unset.
    background_color: Option<String>,
    /// Font family used for every text row.
    font_family: String,
    /// Color of box borders, connectors and glyph outlines.
    stroke_color: String,
    /// Fill of class boxes and open glyphs.
    box_fill: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            stroke_color: "black".to_string(),
            box_fill: "white".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the parsed stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke_color(&self) -> Result<Color, String> {
        Color::new(&self.stroke_color)
            .map_err(|err| format!("Invalid stroke color in config: {err}"))
    }

    /// Returns the parsed box fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn box_fill(&self) -> Result<Color, String> {
        Color::new(&self.box_fill).map_err(|err| format!("Invalid box fill in config: {err}"))
    }
}

/// Overrides applied on top of the built-in text measurement table.
///
/// ```toml
/// [metrics]
/// default_advance = 6.0
/// advances = { "W" = 10.0, "i" = 2.0 }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Advance for characters missing from the table, at font size 10.
    default_advance: Option<f32>,
    /// Per-character advances at font size 10. Keys are single characters.
    advances: HashMap<String, f32>,
}

impl MetricsConfig {
    /// Builds the [`GlyphMetrics`] for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an `advances` key is not exactly one character.
    pub fn glyph_metrics(&self) -> Result<GlyphMetrics, String> {
        let mut metrics = GlyphMetrics::default();
        if let Some(advance) = self.default_advance {
            metrics = metrics.with_default_advance(advance);
        }

        for (key, advance) in &self.advances {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => metrics = metrics.with_advance(ch, *advance),
                _ => {
                    return Err(format!(
                        "Invalid metrics key `{key}` in config: expected a single character"
                    ));
                }
            }
        }

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_approx_eq!(f32, layout.padding_x(), 10.0);
        assert_approx_eq!(f32, layout.padding_y(), 5.0);
        assert_approx_eq!(f32, layout.collision_padding(), 20.0);
        assert_eq!(layout.collision_sweeps(), 1);
        assert_approx_eq!(f32, layout.border_padding(), 20.0);
        assert_eq!(layout.grid_buffer(), 2);
        assert_eq!(layout.turn_penalty(), 5);
        assert_approx_eq!(f32, layout.glyph_size(), 8.0);
        assert_eq!(layout.name_font_size(), 14);
        assert_eq!(layout.member_font_size(), 12);
    }

    #[test]
    fn test_style_colors() {
        let style = StyleConfig::default();
        assert!(style.background_color().unwrap().is_none());
        assert_eq!(style.stroke_color().unwrap().to_string(), "black");
        assert_eq!(style.box_fill().unwrap().to_string(), "white");
    }

    #[test]
    fn test_invalid_style_color() {
        let style = StyleConfig {
            stroke_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };
        let err = style.stroke_color().unwrap_err();
        assert!(err.contains("stroke color"));
    }

    #[test]
    fn test_metrics_overrides() {
        let config = MetricsConfig {
            default_advance: Some(7.0),
            advances: HashMap::from([("W".to_string(), 12.0)]),
        };
        let metrics = config.glyph_metrics().unwrap();
        assert_approx_eq!(f32, metrics.advance('W'), 12.0);
        assert_approx_eq!(f32, metrics.advance('ü'), 7.0);
        assert_approx_eq!(f32, metrics.advance('a'), 5.56);
    }

    #[test]
    fn test_metrics_rejects_multi_char_key() {
        let config = MetricsConfig {
            default_advance: None,
            advances: HashMap::from([("ab".to_string(), 1.0)]),
        };
        assert!(config.glyph_metrics().is_err());

        let empty = MetricsConfig {
            default_advance: None,
            advances: HashMap::from([(String::new(), 1.0)]),
        };
        assert!(empty.glyph_metrics().is_err());
    }

    #[test]
    fn test_builder_setters() {
        let layout = LayoutConfig::default()
            .with_collision_sweeps(3)
            .with_grid_buffer(0)
            .with_turn_penalty(9);
        assert_eq!(layout.collision_sweeps(), 3);
        assert_eq!(layout.grid_buffer(), 0);
        assert_eq!(layout.turn_penalty(), 9);
    }
}
