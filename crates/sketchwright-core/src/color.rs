//! Color handling for Sketchwright diagrams
//!
//! This module provides the [`Color`] type, a validated CSS color string, and
//! [`Palette`], a non-empty list of colors that layouts cycle through.
//!
//! Colors keep the exact text they were created from so that the written
//! document reproduces it verbatim; the `color` crate is only used to reject
//! strings that are not valid CSS colors.

use std::{borrow::Cow, fmt, str::FromStr};

use color::DynamicColor;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Errors produced while building colors and palettes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color `{input}`: {reason}")]
    Invalid { input: String, reason: String },

    #[error("a palette needs at least one color")]
    EmptyPalette,
}

/// A validated CSS color, stored as the original text
///
/// # Examples
///
/// ```
/// use sketchwright_core::color::Color;
///
/// let yellow = Color::new("#ffec99").unwrap();
/// assert_eq!(yellow.as_str(), "#ffec99");
///
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Yellow fill used for language-model steps.
    pub const LLM: Color = Color::from_static("#ffec99");
    /// Blue fill used for code and coordinators.
    pub const CODE: Color = Color::from_static("#a5d8ff");
    /// Green fill used for generic processes.
    pub const PROCESS: Color = Color::from_static("#c2f0c2");
    /// No fill.
    pub const TRANSPARENT: Color = Color::from_static("transparent");
    /// The default stroke color of every element.
    pub const DEFAULT_STROKE: Color = Color::from_static("#1e1e1e");
    /// The default canvas background.
    pub const WHITE: Color = Color::from_static("#ffffff");

    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"`, `"red"` or `"transparent"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Invalid`] if the string is not a CSS color.
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        if color_str.eq_ignore_ascii_case("transparent") {
            return Ok(Self(Cow::Owned(color_str.to_string())));
        }

        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self(Cow::Owned(color_str.to_string()))),
            Err(err) => Err(ColorError::Invalid {
                input: color_str.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    const fn from_static(color_str: &'static str) -> Self {
        Self(Cow::Borrowed(color_str))
    }

    /// Returns the color text exactly as it will be written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the `transparent` keyword
    pub fn is_transparent(&self) -> bool {
        self.0.eq_ignore_ascii_case("transparent")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(de::Error::custom)
    }
}

/// A non-empty, cyclic list of fill colors
///
/// Layouts assign `palette.pick(i)` to their `i`-th item, wrapping around
/// when there are more items than colors.
///
/// # Examples
///
/// ```
/// use sketchwright_core::color::{Color, Palette};
///
/// let palette = Palette::new(vec![Color::LLM, Color::CODE]).unwrap();
/// assert_eq!(palette.pick(0), &Color::LLM);
/// assert_eq!(palette.pick(3), &Color::CODE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette holding a single color
    pub fn single(color: Color) -> Self {
        Self {
            colors: vec![color],
        }
    }

    /// Create a palette from a first color followed by `rest`
    pub fn with_first(first: Color, rest: impl IntoIterator<Item = Color>) -> Self {
        let mut colors = vec![first];
        colors.extend(rest);
        Self { colors }
    }

    /// Returns the color for the `index`-th item, cycling through the palette
    pub fn pick(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    /// Returns the number of distinct entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
