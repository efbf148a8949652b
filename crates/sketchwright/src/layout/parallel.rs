//! Fan-out / fan-in layout.

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

/// One input fanning out to a column of items that all feed one output.
///
/// The input and output are transparent ellipses on the row `start.y`, at
/// `start.x` and `start.x + 4 * spacing_x`. The items are rectangles in the
/// column `start.x + 2 * spacing_x`; item `i` of `n` sits at
/// `start.y + (i - n / 2) * spacing_y`, so an odd number of items is not
/// centered on the input row.
///
/// Each item is followed by its arrow from the input; the output comes after
/// all items, followed by the arrows into it.
#[derive(Debug, Clone)]
pub struct Parallel {
    input: String,
    items: Vec<String>,
    output: String,
    start: Point,
    palette: Palette,
}

impl Parallel {
    /// Fan `input` out to `items` and back into `output`, starting at `(50, 300)`
    pub fn new<I, S>(input: impl Into<String>, items: I, output: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into(),
            items: items.into_iter().map(Into::into).collect(),
            output: output.into(),
            start: Point::new(50.0, 300.0),
            palette: Palette::with_first(Color::LLM, [Color::CODE]),
        }
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    /// Item fill colors, cycled by index
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn endpoint(
        &self,
        sketch: &mut Sketch,
        label: &str,
        position: Point,
    ) -> Result<(ElementId, Option<ElementId>), SketchError> {
        let options = ShapeOptions::new()
            .with_label(label)
            .with_background_color(Color::TRANSPARENT);
        sketch.add_shape(ShapeKind::Ellipse, position, &options)
    }
}

impl Layout for Parallel {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn apply(&self, sketch: &mut Sketch) -> Result<Vec<ElementId>, SketchError> {
        let layout = sketch.config().layout();
        let spacing_x = layout.spacing_x();
        let spacing_y = layout.spacing_y();
        let half = self.items.len() as f64 / 2.0;

        let mut produced = Produced::default();

        let input = produced.shape(self.endpoint(sketch, &self.input, self.start)?);

        let column_x = self.start.x() + 2.0 * spacing_x;
        let mut items = Vec::with_capacity(self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            let position = Point::new(column_x, self.start.y() + (i as f64 - half) * spacing_y);
            let options = ShapeOptions::new()
                .with_label(item.as_str())
                .with_background_color(self.palette.pick(i).clone());
            let item = produced.shape(sketch.add_shape(ShapeKind::Rectangle, position, &options)?);

            let arrow = sketch.bind(&input, &item, &ArrowOptions::default())?;
            produced.arrow(arrow.id().clone());
            items.push(item);
        }

        let output_position = self.start.with_x(self.start.x() + 4.0 * spacing_x);
        let output = produced.shape(self.endpoint(sketch, &self.output, output_position)?);

        for item in &items {
            let arrow = sketch.bind(item, &output, &ArrowOptions::default())?;
            produced.arrow(arrow.id().clone());
        }

        Ok(produced.into_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(layout: &Parallel) -> (Sketch, Vec<ElementId>) {
        let mut sketch = Sketch::default();
        let ids = sketch.apply(layout).unwrap();
        (sketch, ids)
    }

    #[test]
    fn test_input_and_output_share_row() {
        let (sketch, ids) = apply(&Parallel::new("Input", ["A", "B", "C"], "Output"));

        let ellipses: Vec<_> = ids
            .iter()
            .filter_map(|id| sketch.get(id.as_str()))
            .filter(|e| e.kind().type_name() == "ellipse")
            .collect();
        assert_eq!(ellipses.len(), 2);
        assert_eq!(ellipses[0].position(), Point::new(50.0, 300.0));
        assert_eq!(ellipses[1].position(), Point::new(650.0, 300.0));
        assert!(ellipses.iter().all(|e| e.background_color().is_transparent()));
    }

    #[test]
    fn test_two_arrows_per_item() {
        let (sketch, ids) = apply(&Parallel::new("In", ["A", "B", "C", "D"], "Out"));

        let arrows = ids
            .iter()
            .filter(|id| sketch.get(id.as_str()).unwrap().as_arrow().is_some())
            .count();
        assert_eq!(arrows, 8);
    }

    #[test]
    fn test_odd_count_is_off_center() {
        let (sketch, ids) = apply(&Parallel::new("In", ["A", "B", "C"], "Out"));

        let ys: Vec<f64> = ids
            .iter()
            .filter_map(|id| sketch.get(id.as_str()))
            .filter(|e| e.kind().type_name() == "rectangle")
            .map(|e| e.position().y())
            .collect();
        assert_eq!(ys, [150.0, 250.0, 350.0]);
    }

    #[test]
    fn test_creation_order() {
        let (sketch, ids) = apply(&Parallel::new("In", ["A", "B"], "Out"));

        let kinds: Vec<&str> = ids
            .iter()
            .map(|id| sketch.get(id.as_str()).unwrap().kind().type_name())
            .collect();
        assert_eq!(
            kinds,
            [
                "ellipse", "text", "rectangle", "text", "arrow", "rectangle", "text", "arrow", "ellipse", "text",
                "arrow", "arrow",
            ]
        );

        let output = &ids[8];
        for arrow_id in &ids[10..] {
            let arrow = sketch.get(arrow_id.as_str()).unwrap().as_arrow().unwrap();
            assert_eq!(arrow.end_binding().unwrap().element_id(), output);
        }
    }

    #[test]
    fn test_default_palette_alternates() {
        let (sketch, ids) = apply(&Parallel::new("In", ["A", "B", "C"], "Out"));

        let fills: Vec<&Color> = ids
            .iter()
            .filter_map(|id| sketch.get(id.as_str()))
            .filter(|e| e.kind().type_name() == "rectangle")
            .map(|e| e.background_color())
            .collect();
        assert_eq!(fills, [&Color::LLM, &Color::CODE, &Color::LLM]);
    }

    #[test]
    fn test_no_items_still_draws_endpoints() {
        let (sketch, ids) = apply(&Parallel::new("In", Vec::<String>::new(), "Out"));

        assert_eq!(ids.len(), 4);
        assert!(sketch.elements().all(|e| e.as_arrow().is_none()));
    }
}
