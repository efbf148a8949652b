//! Shape and text construction.
//!
//! The `make_*` methods only build elements (allocating their ids); the
//! `add_*` methods build and append them to the document in one step.
//! Construction never fails: any position, size or label is accepted.

use log::debug;

use sketchwright_core::{
    color::Color,
    element::{BoundElement, BoundKind, Element, ElementKind, ShapeKind, TextProps, estimate_text_size},
    geometry::{Point, Size},
    identifier::ElementId,
};

use crate::{Sketch, SketchError};

/// Id prefix for text elements
const TEXT_ID_PREFIX: &str = "element";

/// Half of the per-character width factor, used to center a label
const LABEL_CENTERING_FACTOR: f64 = 0.3;

/// Optional parameters for [`Sketch::make_shape`].
///
/// # Examples
///
/// ```
/// use sketchwright::ShapeOptions;
/// use sketchwright::color::Color;
///
/// let options = ShapeOptions::new()
///     .with_label("Router")
///     .with_background_color(Color::CODE);
/// assert_eq!(options.label(), Some("Router"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeOptions {
    size: Option<Size>,
    label: Option<String>,
    background_color: Color,
}

impl ShapeOptions {
    /// Default size, no label, transparent fill
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the configured default size
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Place a centered text label inside the shape
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn background_color(&self) -> &Color {
        &self.background_color
    }
}

impl Sketch {
    /// Build a text element without adding it to the document.
    ///
    /// The size is estimated from the character count (see
    /// [`estimate_text_size`]). Text with a `container_id` is centered,
    /// free text is aligned top-left. `font_size` defaults to the configured
    /// label size.
    pub fn make_text(
        &mut self,
        content: &str,
        position: Point,
        container_id: Option<ElementId>,
        font_size: Option<f64>,
    ) -> Element {
        let font_size = font_size.unwrap_or_else(|| self.config.layout().font_size());
        let size = estimate_text_size(content, font_size);

        let id = self.ids.next_element_id(TEXT_ID_PREFIX);
        let sequence = self.ids.element_count();
        let props = TextProps::new(content, font_size, container_id);

        debug!(id:% = id, chars = content.chars().count(); "Created text");

        Element::new(id, sequence, ElementKind::Text(props), position, size)
            .with_group(self.ids.active_group())
    }

    /// Build a rectangle or ellipse, plus its label, without adding them to
    /// the document.
    ///
    /// When the options carry a non-empty label, the returned text element
    /// has `containerId` set to the shape and the shape lists the text in its
    /// bound elements.
    pub fn make_shape(
        &mut self,
        kind: ShapeKind,
        position: Point,
        options: &ShapeOptions,
    ) -> (Element, Option<Element>) {
        let size = options
            .size
            .unwrap_or_else(|| self.config.layout().element_size());

        let id = self.ids.next_element_id(kind.id_prefix());
        let sequence = self.ids.element_count();
        let mut shape = Element::new(id, sequence, kind.into(), position, size)
            .with_background_color(options.background_color.clone())
            .with_group(self.ids.active_group());

        debug!(id:% = shape.id(), kind:% = kind; "Created shape");

        let label = match options.label() {
            Some(label) if !label.is_empty() => label,
            _ => return (shape, None),
        };

        let font_size = self.config.layout().font_size();
        let chars = label.chars().count() as f64;
        let text_position = Point::new(
            position.x() + size.width() / 2.0 - chars * font_size * LABEL_CENTERING_FACTOR,
            position.y() + size.height() / 2.0 - font_size / 2.0,
        );

        let text = self.make_text(label, text_position, Some(shape.id().clone()), None);
        shape.add_bound_element(BoundElement::new(text.id().clone(), BoundKind::Text));

        (shape, Some(text))
    }

    /// Append a pre-built element to the document.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidInput`] if the id is already taken.
    pub fn add_element(&mut self, element: Element) -> Result<ElementId, SketchError> {
        let id = element.id().clone();
        self.store.insert(element)?;
        Ok(id)
    }

    /// Build a free text element and append it.
    ///
    /// # Errors
    ///
    /// Fails only if the generated id collides with one added through
    /// [`add_element`](Self::add_element).
    pub fn add_text(
        &mut self,
        content: &str,
        position: Point,
        font_size: Option<f64>,
    ) -> Result<ElementId, SketchError> {
        let text = self.make_text(content, position, None, font_size);
        self.add_element(text)
    }

    /// Build a shape with its optional label and append both, shape first.
    ///
    /// # Errors
    ///
    /// Fails only if a generated id collides with one added through
    /// [`add_element`](Self::add_element); nothing is appended in that case.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        position: Point,
        options: &ShapeOptions,
    ) -> Result<(ElementId, Option<ElementId>), SketchError> {
        let (shape, text) = self.make_shape(kind, position, options);

        if let Some(text) = &text {
            if self.store.contains(text.id().as_str()) {
                return Err(SketchError::invalid_input(format!(
                    "duplicate element id `{}`",
                    text.id()
                )));
            }
        }

        let shape_id = self.add_element(shape)?;
        let text_id = text.map(|text| self.add_element(text)).transpose()?;

        Ok((shape_id, text_id))
    }
}
