//! Hub-and-spoke layout.

use std::f64::consts::TAU;

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

/// Radius of the destination circle as a multiple of `spacing_x`
const RADIUS_FACTOR: f64 = 1.5;

/// A router with its destinations evenly spaced on a circle around it.
///
/// Destination `i` of `n` sits at angle `i * 2π / n` from the router's
/// position, measured from the positive x-axis; with y pointing down the
/// destinations run clockwise on screen. Each destination is followed by its
/// arrow from the router.
#[derive(Debug, Clone)]
pub struct Routing {
    router: String,
    destinations: Vec<String>,
    start: Point,
    router_color: Color,
    palette: Palette,
}

impl Routing {
    /// Route from `router` at `(50, 150)` in blue to yellow destinations
    pub fn new<I, S>(router: impl Into<String>, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            router: router.into(),
            destinations: destinations.into_iter().map(Into::into).collect(),
            start: Point::new(50.0, 150.0),
            router_color: Color::CODE,
            palette: Palette::single(Color::LLM),
        }
    }

    /// Position of the router, which is also the circle center
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_router_color(mut self, color: Color) -> Self {
        self.router_color = color;
        self
    }

    /// Destination fill colors, cycled by index
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }
}

impl Layout for Routing {
    fn name(&self) -> &'static str {
        "routing"
    }

    fn apply(&self, sketch: &mut Sketch) -> Result<Vec<ElementId>, SketchError> {
        if self.destinations.is_empty() {
            return Err(SketchError::invalid_input(format!(
                "routing layout for `{}` needs at least one destination",
                self.router
            )));
        }

        let radius = sketch.config().layout().spacing_x() * RADIUS_FACTOR;
        let angle_step = TAU / self.destinations.len() as f64;

        let mut produced = Produced::default();

        let router_options = ShapeOptions::new()
            .with_label(self.router.as_str())
            .with_background_color(self.router_color.clone());
        let router = produced.shape(sketch.add_shape(ShapeKind::Rectangle, self.start, &router_options)?);

        for (i, destination) in self.destinations.iter().enumerate() {
            let position = self.start.polar_offset(radius, i as f64 * angle_step);
            let options = ShapeOptions::new()
                .with_label(destination.as_str())
                .with_background_color(self.palette.pick(i).clone());
            let target = produced.shape(sketch.add_shape(ShapeKind::Rectangle, position, &options)?);

            let arrow = sketch.bind(&router, &target, &ArrowOptions::default())?;
            produced.arrow(arrow.id().clone());
        }

        Ok(produced.into_ids())
    }
}
