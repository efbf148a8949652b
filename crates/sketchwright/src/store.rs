//! Append-only element storage.
//!
//! [`ElementStore`] keeps the elements of one document keyed by id, so the
//! arrow binder can look endpoints up in constant time, while preserving
//! insertion order, which is the order elements are serialized in.

use indexmap::IndexMap;

use sketchwright_core::{element::Element, identifier::ElementId};

use crate::SketchError;

/// Insertion-ordered map from element id to element.
///
/// There is no removal: elements can only be appended, or the whole store
/// cleared.
#[derive(Debug, Default, Clone)]
pub(crate) struct ElementStore {
    elements: IndexMap<ElementId, Element>,
}

impl ElementStore {
    /// Append an element.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidInput`] if an element with the same id
    /// is already stored.
    pub(crate) fn insert(&mut self, element: Element) -> Result<(), SketchError> {
        if self.elements.contains_key(element.id()) {
            return Err(SketchError::invalid_input(format!(
                "duplicate element id `{}`",
                element.id()
            )));
        }
        self.elements.insert(element.id().clone(), element);
        Ok(())
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Mutable access, used only to patch bound-element references.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate in insertion order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub(crate) fn clear(&mut self) {
        self.elements.clear();
    }
}
