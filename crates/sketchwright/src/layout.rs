//! Canned layouts.
//!
//! A layout places a small list of labelled shapes in a fixed pattern and
//! wires them together with arrows. Three patterns exist:
//!
//! - [`Sequential`] - a horizontal chain, each item pointing at the next
//! - [`Routing`] - a hub with destinations on a circle around it
//! - [`Parallel`] - one input fanning out to a column of items and back into one output
//!
//! [`from_description`] picks one of them from a fixed keyword table, and
//! [`Showcase`] combines all three into an overview diagram.
//!
//! Layouts append every element they create to the [`Sketch`] in creation
//! order and return the new ids in that same order.

mod description;
mod parallel;
mod routing;
mod sequential;
mod showcase;

pub use description::{DescribedLayout, from_description};
pub use parallel::Parallel;
pub use routing::Routing;
pub use sequential::Sequential;
pub use showcase::Showcase;

use sketchwright_core::identifier::ElementId;

use crate::{Sketch, SketchError};

/// A deterministic placement of labelled shapes and connecting arrows
pub trait Layout {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Create the layout's elements in `sketch`.
    ///
    /// Returns the ids of every element created, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidInput`] when the layout cannot be built
    /// from its inputs. Layouts validate before creating anything.
    fn apply(&self, sketch: &mut Sketch) -> Result<Vec<ElementId>, SketchError>;
}

/// Collects the ids produced while a layout runs.
#[derive(Debug, Default)]
struct Produced(Vec<ElementId>);

impl Produced {
    /// Record a shape and its optional label
    fn shape(&mut self, (shape, text): (ElementId, Option<ElementId>)) -> ElementId {
        self.0.push(shape.clone());
        self.0.extend(text);
        shape
    }

    fn arrow(&mut self, arrow: ElementId) {
        self.0.push(arrow);
    }

    fn into_ids(self) -> Vec<ElementId> {
        self.0
    }
}
