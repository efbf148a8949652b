//! Sketchwright Core Types and Definitions
//!
//! This crate provides the foundational types for Sketchwright diagrams. It
//! includes:
//!
//! - **Element model**: drawable elements and their file-format fields ([`element`] module)
//! - **Identifiers**: element/group ids and the per-document allocator ([`identifier`] module)
//! - **Colors**: validated CSS colors and cyclic palettes ([`color::Color`], [`color::Palette`])
//! - **Geometry**: points, sizes and bounds ([`geometry`] module)

pub mod color;
pub mod element;
pub mod geometry;
pub mod identifier;
