//! Arrow creation between existing elements.
//!
//! [`Sketch::bind`] is the only operation that changes elements after they
//! were created: both endpoints get a bound-element entry for the new arrow.

use log::debug;

use sketchwright_core::{
    element::{ArrowProps, BoundElement, BoundKind, DEFAULT_STROKE_WIDTH, Element, ElementKind, StrokeStyle},
    geometry::{Point, Size},
    identifier::ElementId,
};

use crate::{Sketch, SketchError};

/// Id prefix for arrows
const ARROW_ID_PREFIX: &str = "arrow";

/// Optional parameters for [`Sketch::bind`].
///
/// Without explicit points an arrow leaves the right-middle of its start
/// element and enters the left-middle of its end element.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowOptions {
    start: Option<Point>,
    end: Option<Point>,
    style: StrokeStyle,
    width: u32,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            style: StrokeStyle::Solid,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ArrowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit start point instead of the start element's right-middle
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Use an explicit end point instead of the end element's left-middle
    pub fn with_end(mut self, end: Point) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

impl Sketch {
    /// Connect two elements of the document with an arrow.
    ///
    /// The arrow is appended to the document and both endpoints record it in
    /// their bound elements. Returns a copy of the new arrow.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::ElementNotFound`] if either id is not in the
    /// document yet. The document is left untouched and no id is consumed.
    pub fn bind(
        &mut self,
        start_id: &ElementId,
        end_id: &ElementId,
        options: &ArrowOptions,
    ) -> Result<Element, SketchError> {
        let start_bounds = self
            .store
            .get(start_id.as_str())
            .ok_or_else(|| SketchError::ElementNotFound(start_id.clone()))?
            .bounds();
        let end_bounds = self
            .store
            .get(end_id.as_str())
            .ok_or_else(|| SketchError::ElementNotFound(end_id.clone()))?
            .bounds();

        let start = options.start.unwrap_or_else(|| start_bounds.right_middle());
        let end = options.end.unwrap_or_else(|| end_bounds.left_middle());
        let delta = end.sub_point(start);
        let extent = delta.abs();

        let id = self.ids.next_element_id(ARROW_ID_PREFIX);
        let sequence = self.ids.element_count();
        let props = ArrowProps::between(start_id.clone(), end_id.clone(), delta);
        let arrow = Element::new(
            id,
            sequence,
            ElementKind::Arrow(props),
            start,
            Size::new(extent.x(), extent.y()),
        )
        .with_stroke_style(options.style)
        .with_stroke_width(options.width)
        .with_group(self.ids.active_group());

        let arrow_id = self.add_element(arrow.clone())?;

        for endpoint in [start_id, end_id] {
            if let Some(element) = self.store.get_mut(endpoint.as_str()) {
                element.add_bound_element(BoundElement::new(arrow_id.clone(), BoundKind::Arrow));
            }
        }

        debug!(
            id:% = arrow_id,
            start:% = start_id,
            end:% = end_id;
            "Bound arrow"
        );

        Ok(arrow)
    }
}
