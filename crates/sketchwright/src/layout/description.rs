//! Keyword-driven layout selection.

use sketchwright_core::identifier::ElementId;

use crate::{
    Sketch, SketchError,
    layout::{Layout, Parallel, Routing, Sequential},
};

/// The layout chosen for a free-text description
#[derive(Debug, Clone)]
pub enum DescribedLayout {
    Sequential(Sequential),
    Routing(Routing),
    Parallel(Parallel),
}

impl Layout for DescribedLayout {
    fn name(&self) -> &'static str {
        match self {
            Self::Sequential(layout) => layout.name(),
            Self::Routing(layout) => layout.name(),
            Self::Parallel(layout) => layout.name(),
        }
    }

    fn apply(&self, sketch: &mut Sketch) -> Result<Vec<ElementId>, SketchError> {
        match self {
            Self::Sequential(layout) => layout.apply(sketch),
            Self::Routing(layout) => layout.apply(sketch),
            Self::Parallel(layout) => layout.apply(sketch),
        }
    }
}

/// Pick a canned layout from keywords in `description`.
///
/// Matching is a case-insensitive substring search, checked in this order:
///
/// | keyword                     | layout                                           |
/// |-----------------------------|--------------------------------------------------|
/// | `sequential` or `chain`     | sequential `Step 1` .. `Step 4`                  |
/// | `routing` or `router`       | routing `Router` to `LLM1` .. `LLM3`             |
/// | `parallel`                  | parallel `Input`, `Process A` .. `C`, `Output`   |
/// | anything else               | sequential `Input`, `Process`, `Output`          |
///
/// # Examples
///
/// ```
/// use sketchwright::layout::{DescribedLayout, Layout, from_description};
///
/// let layout = from_description("A Router in front of three models");
/// assert!(matches!(layout, DescribedLayout::Routing(_)));
/// assert_eq!(layout.name(), "routing");
/// ```
pub fn from_description(description: &str) -> DescribedLayout {
    let description = description.to_lowercase();
    let mentions = |keyword: &str| description.contains(keyword);

    if mentions("sequential") || mentions("chain") {
        DescribedLayout::Sequential(Sequential::new(["Step 1", "Step 2", "Step 3", "Step 4"]))
    } else if mentions("routing") || mentions("router") {
        DescribedLayout::Routing(Routing::new("Router", ["LLM1", "LLM2", "LLM3"]))
    } else if mentions("parallel") {
        DescribedLayout::Parallel(Parallel::new(
            "Input",
            ["Process A", "Process B", "Process C"],
            "Output",
        ))
    } else {
        DescribedLayout::Sequential(Sequential::new(["Input", "Process", "Output"]))
    }
}
