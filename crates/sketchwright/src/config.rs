//! Configuration types for Sketchwright diagram generation.
//!
//! This module provides configuration structures that control element sizing,
//! spacing and document styling. All types implement [`serde::Deserialize`]
//! for loading from external sources; every field is optional and falls back
//! to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Element sizes and spacing used by the layouts.
//! - [`StyleConfig`] - Document-level styling such as the canvas background.
//!
//! # Example
//!
//! ```
//! # use sketchwright::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().spacing_x(), 150.0);
//! assert!(config.style().background_color().is_none());
//! ```

use serde::Deserialize;

use sketchwright_core::{color::Color, geometry::Size};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Element sizes and spacing used by the factory and the layouts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between neighbouring shapes.
    spacing_x: f64,
    /// Vertical gap between fanned-out shapes.
    spacing_y: f64,
    /// Default shape width.
    element_width: f64,
    /// Default shape height.
    element_height: f64,
    /// Default font size for labels.
    font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing_x: 150.0,
            spacing_y: 100.0,
            element_width: 120.0,
            element_height: 60.0,
            font_size: 16.0,
        }
    }
}

impl LayoutConfig {
    /// Set the horizontal spacing (builder style)
    pub fn with_spacing_x(mut self, spacing: f64) -> Self {
        self.spacing_x = spacing;
        self
    }

    /// Set the vertical spacing (builder style)
    pub fn with_spacing_y(mut self, spacing: f64) -> Self {
        self.spacing_y = spacing;
        self
    }

    /// Set the default shape size (builder style)
    pub fn with_element_size(mut self, size: Size) -> Self {
        self.element_width = size.width();
        self.element_height = size.height();
        self
    }

    /// Set the default label font size (builder style)
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn spacing_x(&self) -> f64 {
        self.spacing_x
    }

    pub fn spacing_y(&self) -> f64 {
        self.spacing_y
    }

    /// Returns the default shape size.
    pub fn element_size(&self) -> Size {
        Size::new(self.element_width, self.element_height)
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}

/// Document-level styling.
///
/// Fields that are not set fall back to the file-format defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background [`Color`]; colors are validated while loading.
    #[serde(default)]
    background_color: Option<Color>,
}

impl StyleConfig {
    /// Creates a style configuration with the given canvas background.
    pub fn new(background_color: Option<Color>) -> Self {
        Self { background_color }
    }

    /// Returns the configured canvas background, or `None` for the default.
    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }
}
