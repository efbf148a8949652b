//! Arrow element properties.

use serde::{Deserialize, Serialize};

use crate::{element::style::Arrowhead, geometry::Point, identifier::ElementId};

/// Attachment of one arrow end to an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    element_id: ElementId,
    focus: f64,
    gap: f64,
}

impl Binding {
    /// Creates a binding aimed at the element center with a one unit gap
    pub fn new(element_id: ElementId) -> Self {
        Self {
            element_id,
            focus: 0.0,
            gap: 1.0,
        }
    }

    pub fn element_id(&self) -> &ElementId {
        &self.element_id
    }

    pub fn focus(&self) -> f64 {
        self.focus
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }
}

/// Fields specific to `arrow` elements
///
/// The polyline is stored relative to the arrow origin, so its first point is
/// always `[0, 0]`. The sign of the direction lives only in `points`; the
/// element `width`/`height` hold absolute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowProps {
    start_binding: Option<Binding>,
    end_binding: Option<Binding>,
    last_committed_point: Option<[f64; 2]>,
    start_arrowhead: Option<Arrowhead>,
    end_arrowhead: Option<Arrowhead>,
    points: Vec<[f64; 2]>,
}

impl ArrowProps {
    /// Creates a straight arrow from `start` to `start + delta`, bound to both
    /// elements, with an arrowhead only at the end.
    pub fn between(start: ElementId, end: ElementId, delta: Point) -> Self {
        Self {
            start_binding: Some(Binding::new(start)),
            end_binding: Some(Binding::new(end)),
            last_committed_point: None,
            start_arrowhead: None,
            end_arrowhead: Some(Arrowhead::Arrow),
            points: vec![[0.0, 0.0], delta.to_array()],
        }
    }

    pub fn start_binding(&self) -> Option<&Binding> {
        self.start_binding.as_ref()
    }

    pub fn end_binding(&self) -> Option<&Binding> {
        self.end_binding.as_ref()
    }

    pub fn start_arrowhead(&self) -> Option<Arrowhead> {
        self.start_arrowhead
    }

    pub fn end_arrowhead(&self) -> Option<Arrowhead> {
        self.end_arrowhead
    }

    pub fn last_committed_point(&self) -> Option<[f64; 2]> {
        self.last_committed_point
    }

    /// Returns the polyline relative to the arrow origin
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_builds_two_point_polyline() {
        let props = ArrowProps::between(
            ElementId::new("rect-1"),
            ElementId::new("rect-3"),
            Point::new(-40.0, 25.0),
        );

        assert_eq!(props.points(), &[[0.0, 0.0], [-40.0, 25.0]]);
        assert_eq!(props.start_binding().unwrap().element_id(), "rect-1");
        assert_eq!(props.end_binding().unwrap().element_id(), "rect-3");
        assert_eq!(props.start_arrowhead(), None);
        assert_eq!(props.end_arrowhead(), Some(Arrowhead::Arrow));
        assert_eq!(props.last_committed_point(), None);
    }

    #[test]
    fn test_binding_defaults() {
        let binding = Binding::new(ElementId::new("ellipse-1"));
        assert_eq!(binding.focus(), 0.0);
        assert_eq!(binding.gap(), 1.0);
    }

    #[test]
    fn test_arrow_props_keep_null_fields() {
        let props = ArrowProps::between(
            ElementId::new("a-1"),
            ElementId::new("b-2"),
            Point::new(1.0, 2.0),
        );
        let value = serde_json::to_value(&props).unwrap();
        let object = value.as_object().unwrap();

        assert!(object["startArrowhead"].is_null());
        assert!(object["lastCommittedPoint"].is_null());
        assert_eq!(object["endArrowhead"], "arrow");
        assert_eq!(object["startBinding"]["elementId"], "a-1");
        assert_eq!(object["endBinding"]["gap"], 1.0);
    }
}
