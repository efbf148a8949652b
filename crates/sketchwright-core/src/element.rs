//! The element model.
//!
//! An [`Element`] is one drawable unit of a document: a text, a rectangle, an
//! ellipse or an arrow. All kinds share the identity, geometry and styling
//! fields stored on [`Element`]; kind-specific fields live in [`ElementKind`].
//!
//! Elements serialize to the Excalidraw element schema. Every field is always
//! written, optional ones as `null`.

mod arrow;
mod style;
mod text;

pub use arrow::{ArrowProps, Binding};
pub use style::{Arrowhead, FillStyle, Roundness, StrokeStyle, TextAlign, VerticalAlign};
pub use text::{DEFAULT_FONT_FAMILY, DEFAULT_LINE_HEIGHT, TextProps, estimate_text_size};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    geometry::{Bounds, Point, Size},
    identifier::{ElementId, GroupId, order_key},
};

/// Base of the `updated` timestamp; the element sequence number is added to it.
pub const UPDATED_BASE: u64 = 1_757_460_000_000;

/// Default outline width
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Kind-specific element data, tagged by the `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text(TextProps),
    Rectangle,
    Ellipse,
    Arrow(ArrowProps),
}

impl ElementKind {
    /// Returns the `type` discriminant as written to the file
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Arrow(_) => "arrow",
        }
    }

    /// Returns the roundness descriptor an element of this kind starts with
    pub fn default_roundness(&self) -> Option<Roundness> {
        match self {
            Self::Text(_) => None,
            Self::Rectangle => Some(Roundness::ADAPTIVE),
            Self::Ellipse | Self::Arrow(_) => Some(Roundness::PROPORTIONAL),
        }
    }
}

/// Closed shapes the factory can build
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    /// Prefix used when allocating ids for this shape
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::Ellipse => "ellipse",
        }
    }
}

impl From<ShapeKind> for ElementKind {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::Rectangle,
            ShapeKind::Ellipse => Self::Ellipse,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => f.write_str("rectangle"),
            Self::Ellipse => f.write_str("ellipse"),
        }
    }
}

/// What kind of element is attached through a bound-element entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundKind {
    Text,
    Arrow,
}

/// A back-reference from an element to something attached to it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundElement {
    id: ElementId,
    #[serde(rename = "type")]
    kind: BoundKind,
}

impl BoundElement {
    pub fn new(id: ElementId, kind: BoundKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> BoundKind {
        self.kind
    }
}

/// One drawable unit of a document
///
/// Elements are created once through [`Element::new`] plus the `with_*`
/// builder methods. The only change allowed afterwards is
/// [`add_bound_element`](Element::add_bound_element), used when text or an
/// arrow is attached to an element that already exists.
///
/// # Examples
///
/// ```
/// use sketchwright_core::{
///     element::{Element, ElementKind},
///     geometry::{Point, Size},
///     identifier::ElementId,
/// };
///
/// let rect = Element::new(
///     ElementId::new("rect-1"),
///     1,
///     ElementKind::Rectangle,
///     Point::new(50.0, 50.0),
///     Size::new(120.0, 60.0),
/// );
///
/// assert_eq!(rect.kind().type_name(), "rectangle");
/// assert_eq!(rect.index(), "a1");
/// assert_eq!(rect.bounds().right_middle(), Point::new(170.0, 80.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    id: ElementId,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    angle: f64,
    stroke_color: Color,
    background_color: Color,
    fill_style: FillStyle,
    stroke_width: u32,
    stroke_style: StrokeStyle,
    roughness: u8,
    opacity: u8,
    group_ids: Vec<GroupId>,
    frame_id: Option<ElementId>,
    index: String,
    roundness: Option<Roundness>,
    seed: u64,
    version: u32,
    version_nonce: u64,
    is_deleted: bool,
    bound_elements: Vec<BoundElement>,
    updated: u64,
    link: Option<String>,
    locked: bool,
    #[serde(flatten)]
    kind: ElementKind,
}

impl Element {
    /// Creates an element with default styling.
    ///
    /// `sequence` is the allocation number that came with `id`; it seeds the
    /// ordering key, `seed`, `versionNonce` and `updated` so that identical
    /// inputs always serialize identically.
    pub fn new(id: ElementId, sequence: u64, kind: ElementKind, position: Point, size: Size) -> Self {
        Self {
            id,
            x: position.x(),
            y: position.y(),
            width: size.width(),
            height: size.height(),
            angle: 0.0,
            stroke_color: Color::DEFAULT_STROKE,
            background_color: Color::TRANSPARENT,
            fill_style: FillStyle::Solid,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_style: StrokeStyle::Solid,
            roughness: 1,
            opacity: 100,
            group_ids: Vec::new(),
            frame_id: None,
            index: order_key(sequence),
            roundness: kind.default_roundness(),
            seed: sequence,
            version: 1,
            version_nonce: sequence * 1000,
            is_deleted: false,
            bound_elements: Vec::new(),
            updated: UPDATED_BASE + sequence,
            link: None,
            locked: false,
            kind,
        }
    }

    /// Tag the element with a group (builder style). `None` leaves it ungrouped.
    pub fn with_group(mut self, group: Option<&GroupId>) -> Self {
        if let Some(group) = group {
            self.group_ids.push(group.clone());
        }
        self
    }

    /// Set the fill color (builder style)
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the outline color (builder style)
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the outline pattern (builder style)
    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.stroke_style = style;
        self
    }

    /// Set the outline width (builder style)
    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Record that `bound` is attached to this element.
    ///
    /// Adding the same entry twice is a no-op.
    pub fn add_bound_element(&mut self, bound: BoundElement) {
        if !self.bound_elements.contains(&bound) {
            self.bound_elements.push(bound);
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Returns the text fields if this is a text element
    pub fn as_text(&self) -> Option<&TextProps> {
        match &self.kind {
            ElementKind::Text(props) => Some(props),
            _ => None,
        }
    }

    /// Returns the arrow fields if this is an arrow element
    pub fn as_arrow(&self) -> Option<&ArrowProps> {
        match &self.kind {
            ElementKind::Arrow(props) => Some(props),
            _ => None,
        }
    }

    /// Returns true for rectangles and ellipses
    pub fn is_shape(&self) -> bool {
        matches!(self.kind, ElementKind::Rectangle | ElementKind::Ellipse)
    }

    /// Returns the top-left corner
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position(), self.size())
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn stroke_color(&self) -> &Color {
        &self.stroke_color
    }

    pub fn background_color(&self) -> &Color {
        &self.background_color
    }

    pub fn fill_style(&self) -> FillStyle {
        self.fill_style
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        self.stroke_style
    }

    pub fn roughness(&self) -> u8 {
        self.roughness
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn group_ids(&self) -> &[GroupId] {
        &self.group_ids
    }

    pub fn frame_id(&self) -> Option<&ElementId> {
        self.frame_id.as_ref()
    }

    /// Returns the fractional ordering key
    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn roundness(&self) -> Option<Roundness> {
        self.roundness
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn version_nonce(&self) -> u64 {
        self.version_nonce
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn bound_elements(&self) -> &[BoundElement] {
        &self.bound_elements
    }

    pub fn updated(&self) -> u64 {
        self.updated
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn locked(&self) -> bool {
        self.locked
    }
}
