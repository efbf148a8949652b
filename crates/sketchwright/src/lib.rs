//! Sketchwright - Programmatic Excalidraw diagrams.
//!
//! Builds `.excalidraw` documents from labelled shapes and bound arrows,
//! either element by element or through canned layouts (sequential chains,
//! routing hubs, parallel fan-outs), and writes them as deterministic JSON.

pub mod config;
pub mod layout;

mod binder;
mod error;
mod export;
mod factory;
mod store;

pub use sketchwright_core::{color, element, geometry, identifier};

pub use binder::ArrowOptions;
pub use error::SketchError;
pub use export::{AppState, DOCUMENT_SOURCE, DOCUMENT_TYPE, DOCUMENT_VERSION, Document};
pub use factory::ShapeOptions;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use element::Element;
use identifier::{ElementId, GroupId, IdAllocator};
use layout::Layout;
use store::ElementStore;

/// Builder for one Excalidraw document.
///
/// A sketch owns the element list, the id counters and the active group.
/// Elements are only ever appended; arrows are the one operation that also
/// updates existing elements (their bound-element lists).
///
/// # Examples
///
/// ```rust
/// use sketchwright::{ArrowOptions, ShapeOptions, Sketch};
/// use sketchwright::{element::ShapeKind, geometry::Point};
///
/// let mut sketch = Sketch::default();
/// let (a, _) = sketch
///     .add_shape(ShapeKind::Rectangle, Point::new(50.0, 50.0), &ShapeOptions::new().with_label("A"))
///     .unwrap();
/// let (b, _) = sketch
///     .add_shape(ShapeKind::Ellipse, Point::new(320.0, 50.0), &ShapeOptions::new())
///     .unwrap();
/// sketch.bind(&a, &b, &ArrowOptions::default()).unwrap();
///
/// let json = sketch.to_document().to_json_string().unwrap();
/// assert!(json.contains("\"type\": \"arrow\""));
/// ```
#[derive(Debug, Default)]
pub struct Sketch {
    config: AppConfig,
    ids: IdAllocator,
    store: ElementStore,
}

impl Sketch {
    /// Create an empty sketch with the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sketchwright::{Sketch, config::{AppConfig, LayoutConfig, StyleConfig}};
    ///
    /// let layout = LayoutConfig::default().with_spacing_x(200.0);
    /// let sketch = Sketch::new(AppConfig::new(layout, StyleConfig::default()));
    /// assert_eq!(sketch.config().layout().spacing_x(), 200.0);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ids: IdAllocator::new(),
            store: ElementStore::default(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Allocate the next element id, `"{prefix}-{n}"`.
    ///
    /// Ids are unique within the sketch until [`clear`](Self::clear).
    pub fn next_element_id(&mut self, prefix: &str) -> ElementId {
        self.ids.next_element_id(prefix)
    }

    /// Allocate a group id without activating it
    pub fn next_group_id(&mut self, name: Option<&str>) -> GroupId {
        self.ids.next_group_id(name)
    }

    /// Allocate a group id and tag every element created from now on with it.
    ///
    /// Groups do not nest: starting a group replaces the active one.
    pub fn start_group(&mut self, name: Option<&str>) -> GroupId {
        self.ids.start_group(name)
    }

    /// Stop tagging new elements with a group
    pub fn end_group(&mut self) {
        self.ids.end_group();
    }

    pub fn set_active_group(&mut self, group: Option<GroupId>) {
        self.ids.set_active_group(group);
    }

    pub fn active_group(&self) -> Option<&GroupId> {
        self.ids.active_group()
    }

    /// Iterate over the document's elements in insertion order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.store.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop every element and restart both id counters.
    pub fn clear(&mut self) {
        debug!(elements = self.store.len(); "Clearing sketch");
        self.store.clear();
        self.ids.reset();
    }

    /// Run a layout against this sketch.
    ///
    /// Returns the ids of the created elements in creation order.
    ///
    /// # Errors
    ///
    /// Propagates the layout's error; see [`Layout::apply`].
    pub fn apply<L: Layout + ?Sized>(&mut self, layout: &L) -> Result<Vec<ElementId>, SketchError> {
        info!(layout = layout.name(); "Applying layout");
        let ids = layout.apply(self)?;
        info!(layout = layout.name(), created = ids.len(); "Layout applied");
        trace!(ids:? = ids; "Created elements");
        Ok(ids)
    }

    /// Pick a layout from keywords in `description` and apply it.
    ///
    /// See [`layout::from_description`] for the keyword table.
    ///
    /// # Errors
    ///
    /// Propagates the chosen layout's error.
    pub fn apply_description(&mut self, description: &str) -> Result<Vec<ElementId>, SketchError> {
        let layout = layout::from_description(description);
        debug!(layout = layout.name(); "Matched description");
        self.apply(&layout)
    }

    /// Snapshot the sketch as a complete document.
    pub fn to_document(&self) -> Document {
        let app_state = AppState::from_style(self.config.style());
        Document::new(self.store.iter().cloned().collect(), app_state)
    }

    /// Write the document to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidInput`] if an element has a non-finite
    /// coordinate, or [`SketchError::Io`] or [`SketchError::Serialization`]
    /// if the file cannot be written. The sketch itself is unaffected.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SketchError> {
        self.to_document().save(path)
    }
}
