//! Horizontal chain layout.

use sketchwright_core::{
    color::{Color, Palette},
    element::ShapeKind,
    geometry::Point,
    identifier::ElementId,
};

use crate::{
    ArrowOptions, ShapeOptions, Sketch, SketchError,
    layout::{Layout, Produced},
};

/// A left-to-right chain of shapes, each pointing at the next.
///
/// Item `i` sits at `x = start.x + i * (element_width + spacing_x)`. All
/// shapes and labels are created first, then the arrows `i -> i + 1`.
///
/// # Examples
///
/// ```
/// use sketchwright::{Sketch, layout::Sequential};
///
/// let mut sketch = Sketch::default();
/// let ids = sketch.apply(&Sequential::new(["A", "B"])).unwrap();
///
/// // two shapes, two labels, one arrow
/// assert_eq!(ids.len(), 5);
/// assert_eq!(sketch.get("rect-3").unwrap().position().x(), 320.0);
/// ```
#[derive(Debug, Clone)]
pub struct Sequential {
    items: Vec<String>,
    start: Point,
    shape_kind: ShapeKind,
    palette: Palette,
}

impl Sequential {
    /// Chain the given labels starting at `(50, 50)` as yellow rectangles
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            start: Point::new(50.0, 50.0),
            shape_kind: ShapeKind::Rectangle,
            palette: Palette::single(Color::LLM),
        }
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_shape_kind(mut self, kind: ShapeKind) -> Self {
        self.shape_kind = kind;
        self
    }

    /// Fill colors, cycled by item index
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Layout for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn apply(&self, sketch: &mut Sketch) -> Result<Vec<ElementId>, SketchError> {
        let layout = sketch.config().layout();
        let step = layout.element_size().width() + layout.spacing_x();

        let mut produced = Produced::default();
        let mut shapes = Vec::with_capacity(self.items.len());

        for (i, item) in self.items.iter().enumerate() {
            let position = self.start.with_x(self.start.x() + i as f64 * step);
            let options = ShapeOptions::new()
                .with_label(item.as_str())
                .with_background_color(self.palette.pick(i).clone());

            let ids = sketch.add_shape(self.shape_kind, position, &options)?;
            shapes.push(produced.shape(ids));
        }

        for pair in shapes.windows(2) {
            let arrow = sketch.bind(&pair[0], &pair[1], &ArrowOptions::default())?;
            produced.arrow(arrow.id().clone());
        }

        Ok(produced.into_ids())
    }
}

#[cfg(test)]
mod tests {
    use sketchwright_core::element::Element;

    use super::*;

    fn shapes<'a>(sketch: &'a Sketch, ids: &[ElementId]) -> Vec<&'a Element> {
        ids.iter()
            .filter_map(|id| sketch.get(id.as_str()))
            .filter(|e| e.is_shape())
            .collect()
    }

    #[test]
    fn test_two_items_match_reference_geometry() {
        let mut sketch = Sketch::default();
        let ids = sketch.apply(&Sequential::new(["A", "B"])).unwrap();

        let shapes = shapes(&sketch, &ids);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].position(), Point::new(50.0, 50.0));
        assert_eq!(shapes[1].position(), Point::new(320.0, 50.0));

        let arrow = sketch.get(ids.last().unwrap().as_str()).unwrap();
        assert_eq!(arrow.position(), Point::new(170.0, 80.0));
        assert_eq!(arrow.as_arrow().unwrap().points(), &[[0.0, 0.0], [150.0, 0.0]]);
    }

    #[test]
    fn test_shapes_then_arrows_in_order() {
        let mut sketch = Sketch::default();
        let ids = sketch.apply(&Sequential::new(["A", "B", "C"])).unwrap();

        let kinds: Vec<&str> = ids
            .iter()
            .map(|id| sketch.get(id.as_str()).unwrap().kind().type_name())
            .collect();
        assert_eq!(
            kinds,
            ["rectangle", "text", "rectangle", "text", "rectangle", "text", "arrow", "arrow"]
        );

        let arrows: Vec<_> = ids
            .iter()
            .filter_map(|id| sketch.get(id.as_str()).unwrap().as_arrow())
            .map(|a| {
                (
                    a.start_binding().unwrap().element_id().as_str(),
                    a.end_binding().unwrap().element_id().as_str(),
                )
            })
            .collect();
        assert_eq!(arrows, [("rect-1", "rect-3"), ("rect-3", "rect-5")]);
    }

    #[test]
    fn test_empty_items_produce_nothing() {
        let mut sketch = Sketch::default();
        let ids = sketch.apply(&Sequential::new(Vec::<String>::new())).unwrap();

        assert!(ids.is_empty());
        assert!(sketch.is_empty());
    }

    #[test]
    fn test_single_item_has_no_arrow() {
        let mut sketch = Sketch::default();
        let ids = sketch.apply(&Sequential::new(["Only"])).unwrap();

        assert_eq!(ids.len(), 2);
        assert!(sketch.elements().all(|e| e.as_arrow().is_none()));
    }

    #[test]
    fn test_palette_cycles_and_ellipses() {
        let palette = Palette::new(vec![Color::TRANSPARENT, Color::LLM]).unwrap();
        let layout = Sequential::new(["a", "b", "c"])
            .with_palette(palette)
            .with_shape_kind(ShapeKind::Ellipse)
            .with_start(Point::new(0.0, 10.0));

        let mut sketch = Sketch::default();
        let ids = sketch.apply(&layout).unwrap();
        let shapes = shapes(&sketch, &ids);

        assert_eq!(shapes[0].background_color(), &Color::TRANSPARENT);
        assert_eq!(shapes[1].background_color(), &Color::LLM);
        assert_eq!(shapes[2].background_color(), &Color::TRANSPARENT);
        assert!(shapes.iter().all(|s| s.kind().type_name() == "ellipse"));
        assert_eq!(shapes[2].position(), Point::new(540.0, 10.0));
    }

    #[test]
    fn test_empty_label_still_gets_shape() {
        let mut sketch = Sketch::default();
        let ids = sketch.apply(&Sequential::new(["", "B"])).unwrap();

        // shape, shape, label, arrow
        assert_eq!(ids.len(), 4);
        assert_eq!(shapes(&sketch, &ids).len(), 2);
    }
}
