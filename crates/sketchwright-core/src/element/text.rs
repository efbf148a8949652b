//! Text element properties.

use serde::{Deserialize, Serialize};

use crate::{
    element::style::{TextAlign, VerticalAlign},
    geometry::Size,
    identifier::ElementId,
};

/// Font family written for every text element (Excalifont)
pub const DEFAULT_FONT_FAMILY: u8 = 5;

/// Line height as a multiple of the font size
pub const DEFAULT_LINE_HEIGHT: f64 = 1.25;

/// Approximate glyph advance as a fraction of the font size
const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Approximate line box height as a multiple of the font size
const LINE_BOX_FACTOR: f64 = 1.2;

/// Estimate the rendered size of a single-line string.
///
/// There is no font measurement: width is `chars * font_size * 0.6` and
/// height is `font_size * 1.2`. Editors re-measure on load, so the estimate
/// only has to be close.
///
/// # Examples
///
/// ```
/// use sketchwright_core::element::estimate_text_size;
///
/// let size = estimate_text_size("Router", 16.0);
/// assert_eq!(size.width(), 6.0 * 16.0 * 0.6);
/// assert_eq!(size.height(), 16.0 * 1.2);
/// ```
pub fn estimate_text_size(content: &str, font_size: f64) -> Size {
    let chars = content.chars().count() as f64;
    Size::new(chars * font_size * CHAR_WIDTH_FACTOR, font_size * LINE_BOX_FACTOR)
}

/// Fields specific to `text` elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    text: String,
    font_size: f64,
    font_family: u8,
    text_align: TextAlign,
    vertical_align: VerticalAlign,
    container_id: Option<ElementId>,
    original_text: String,
    auto_resize: bool,
    line_height: f64,
}

impl TextProps {
    /// Creates text properties.
    ///
    /// Text bound to a container is centered in both directions; free text
    /// is aligned to the top-left.
    pub fn new(content: impl Into<String>, font_size: f64, container_id: Option<ElementId>) -> Self {
        let text = content.into();
        let (text_align, vertical_align) = if container_id.is_some() {
            (TextAlign::Center, VerticalAlign::Middle)
        } else {
            (TextAlign::Left, VerticalAlign::Top)
        };

        Self {
            original_text: text.clone(),
            text,
            font_size,
            font_family: DEFAULT_FONT_FAMILY,
            text_align,
            vertical_align,
            container_id,
            auto_resize: true,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn font_family(&self) -> u8 {
        self.font_family
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }

    /// Returns the shape this text is drawn inside, if any
    pub fn container_id(&self) -> Option<&ElementId> {
        self.container_id.as_ref()
    }

    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }
}
