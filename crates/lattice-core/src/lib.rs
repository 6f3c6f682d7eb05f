//! Lattice Core Types and Definitions
//!
//! This crate provides the foundational types for Lattice class diagrams.
//! It includes:
//!
//! - **Model**: Class and relationship descriptors ([`model`] module)
//! - **Geometry**: Points, sizes, rectangles and grid cells ([`geometry`] module)
//! - **Metrics**: Approximate text measurement ([`metrics::GlyphMetrics`])
//! - **Identifiers**: Stable element ids ([`identifier::ElementId`])
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Draw**: Visual definitions for diagram elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod metrics;
pub mod model;
