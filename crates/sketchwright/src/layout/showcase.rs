//! Overview diagram combining every canned layout.

use log::debug;

use sketchwright_core::{
    color::{Color, Palette},
    geometry::Point,
    identifier::ElementId,
};

use crate::{
    Sketch, SketchError,
    layout::{Layout, Parallel, Routing, Sequential},
};

const TITLE_FONT_SIZE: f64 = 24.0;
const SECTION_FONT_SIZE: f64 = 18.0;

/// The "Agent Framework Patterns" diagram.
///
/// A title followed by one group per pattern, each group holding an 18pt
/// section title and its layout:
///
/// - `sequential`: `Input`, `LLM1` .. `LLM3`, `Output` on the row `y = 80`
/// - `routing`: `Router` at `(150, 220)` with `LLM1` .. `LLM3` around it
/// - `parallel`: `Input` at `(50, 440)` fanning out to `LLM1` .. `LLM3`
///
/// Every element except the main title carries its group's id.
#[derive(Debug, Clone, Copy, Default)]
pub struct Showcase;

impl Showcase {
    fn section(
        sketch: &mut Sketch,
        name: &str,
        title: &str,
        title_y: f64,
        layout: &dyn Layout,
    ) -> Result<Vec<ElementId>, SketchError> {
        let group = sketch.start_group(Some(name));
        debug!(group:% = group; "Starting showcase section");

        let result = sketch
            .add_text(title, Point::new(50.0, title_y), Some(SECTION_FONT_SIZE))
            .and_then(|title| {
                let mut ids = vec![title];
                ids.extend(layout.apply(sketch)?);
                Ok(ids)
            });

        sketch.end_group();
        result
    }
}

impl Layout for Showcase {
    fn name(&self) -> &'static str {
        "showcase"
    }

    fn apply(&self, sketch: &mut Sketch) -> Result<Vec<ElementId>, SketchError> {
        let mut ids = vec![sketch.add_text(
            "Agent Framework Patterns",
            Point::new(50.0, 20.0),
            Some(TITLE_FONT_SIZE),
        )?];

        let endpoints = Color::TRANSPARENT;
        let sequential = Sequential::new(["Input", "LLM1", "LLM2", "LLM3", "Output"])
            .with_start(Point::new(50.0, 80.0))
            .with_palette(Palette::with_first(
                endpoints.clone(),
                [Color::LLM, Color::LLM, Color::LLM, endpoints],
            ));
        ids.extend(Self::section(sketch, "sequential", "1. Sequential", 60.0, &sequential)?);

        let routing = Routing::new("Router", ["LLM1", "LLM2", "LLM3"]).with_start(Point::new(150.0, 220.0));
        ids.extend(Self::section(sketch, "routing", "2. Routing", 180.0, &routing)?);

        let parallel =
            Parallel::new("Input", ["LLM1", "LLM2", "LLM3"], "Output").with_start(Point::new(50.0, 440.0));
        ids.extend(Self::section(sketch, "parallel", "3. Parallel", 400.0, &parallel)?);

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use sketchwright_core::identifier::GroupId;

    use super::*;

    #[test]
    fn test_showcase_element_count() {
        let mut sketch = Sketch::default();
        let ids = sketch.apply(&Showcase).unwrap();

        // title
        // + sequential: section title, 5 shapes, 5 labels, 4 arrows
        // + routing: section title, 4 shapes, 4 labels, 3 arrows
        // + parallel: section title, 5 shapes, 5 labels, 6 arrows
        assert_eq!(ids.len(), 1 + 15 + 12 + 17);
        assert_eq!(sketch.len(), ids.len());
    }

    #[test]
    fn test_title_is_ungrouped() {
        let mut sketch = Sketch::default();
        sketch.apply(&Showcase).unwrap();

        let title = sketch.get("element-1").unwrap();
        assert_eq!(title.as_text().unwrap().text(), "Agent Framework Patterns");
        assert_eq!(title.as_text().unwrap().font_size(), 24.0);
        assert_eq!(title.position(), Point::new(50.0, 20.0));
        assert!(title.group_ids().is_empty());
        assert!(sketch.active_group().is_none());
    }

    #[test]
    fn test_sections_are_grouped() {
        let mut sketch = Sketch::default();
        sketch.apply(&Showcase).unwrap();

        let groups: Vec<&[GroupId]> = sketch.elements().skip(1).map(|e| e.group_ids()).collect();
        assert!(groups.iter().all(|g| g.len() == 1));

        let mut seen: Vec<&str> = groups.iter().map(|g| g[0].as_str()).collect();
        seen.dedup();
        assert_eq!(seen, ["sequential-group-1", "routing-group-2", "parallel-group-3"]);
    }

    #[test]
    fn test_section_titles() {
        let mut sketch = Sketch::default();
        sketch.apply(&Showcase).unwrap();

        let titles: Vec<(&str, Point)> = sketch
            .elements()
            .filter_map(|e| e.as_text().map(|t| (t, e.position())))
            .filter(|(t, _)| t.font_size() == 18.0)
            .map(|(t, p)| (t.text(), p))
            .collect();
        assert_eq!(
            titles,
            [
                ("1. Sequential", Point::new(50.0, 60.0)),
                ("2. Routing", Point::new(50.0, 180.0)),
                ("3. Parallel", Point::new(50.0, 400.0)),
            ]
        );
    }

    #[test]
    fn test_sequential_endpoints_are_transparent() {
        let mut sketch = Sketch::default();
        sketch.apply(&Showcase).unwrap();

        let fills: Vec<&Color> = sketch
            .elements()
            .filter(|e| e.is_shape() && e.group_ids()[0] == "sequential-group-1")
            .map(|e| e.background_color())
            .collect();
        assert_eq!(
            fills,
            [&Color::TRANSPARENT, &Color::LLM, &Color::LLM, &Color::LLM, &Color::TRANSPARENT]
        );
    }

    #[test]
    fn test_layout_origins() {
        let mut sketch = Sketch::default();
        sketch.apply(&Showcase).unwrap();

        let first_shape_of = |group: &str| {
            sketch
                .elements()
                .find(|e| e.is_shape() && e.group_ids().first().is_some_and(|g| *g == group))
                .map(|e| e.position())
        };
        assert_eq!(first_shape_of("sequential-group-1"), Some(Point::new(50.0, 80.0)));
        assert_eq!(first_shape_of("routing-group-2"), Some(Point::new(150.0, 220.0)));
        assert_eq!(first_shape_of("parallel-group-3"), Some(Point::new(50.0, 440.0)));
    }
}
