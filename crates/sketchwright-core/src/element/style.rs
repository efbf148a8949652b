//! Styling enums shared by all element kinds.
//!
//! Every type here serializes to the exact string (or number) the Excalidraw
//! file format expects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Line pattern of an element outline or arrow shaft
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Long dashes
    Dashed,
    /// Short dots
    Dotted,
}

impl StrokeStyle {
    /// Returns the file-format name of this style
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!("unknown stroke style `{s}`")),
        }
    }
}

/// How the background color fills a closed shape
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillStyle {
    #[default]
    Solid,
    Hachure,
    CrossHatch,
    Zigzag,
}

/// Horizontal text alignment
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Decoration drawn at an arrow end
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrowhead {
    #[default]
    Arrow,
    Bar,
    Dot,
    Triangle,
}

/// Corner descriptor, serialized as `{"type": n}`.
///
/// The numeric tag is opaque to Sketchwright and round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roundness {
    #[serde(rename = "type")]
    kind: u8,
}

impl Roundness {
    /// Radius proportional to the element size; used by ellipses and arrows.
    pub const PROPORTIONAL: Roundness = Roundness { kind: 2 };
    /// Rounded corners with a size-adaptive radius; used by rectangles.
    pub const ADAPTIVE: Roundness = Roundness { kind: 3 };

    /// Returns the numeric tag
    pub fn kind(self) -> u8 {
        self.kind
    }
}
