//! Excalidraw document assembly and persistence.
//!
//! A [`Document`] is the complete `.excalidraw` file: a fixed header, the
//! elements in insertion order, the editor's [`AppState`] and an empty file
//! table. Serialization is deterministic, so the same builder state always
//! produces byte-identical output.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{info, trace};
use serde::{Deserialize, Serialize};

use sketchwright_core::{
    color::Color,
    element::{Arrowhead, DEFAULT_FONT_FAMILY, DEFAULT_STROKE_WIDTH, Element, FillStyle, StrokeStyle, TextAlign},
};

use crate::{SketchError, config::StyleConfig};

/// Value of the top-level `type` field
pub const DOCUMENT_TYPE: &str = "excalidraw";

/// Schema version written to the top-level `version` field
pub const DOCUMENT_VERSION: u32 = 2;

/// Value of the top-level `source` field
pub const DOCUMENT_SOURCE: &str = concat!("sketchwright/", env!("CARGO_PKG_VERSION"));

/// Editor state stored alongside the elements.
///
/// These are the defaults the editor applies to newly drawn items; only the
/// canvas background is configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    grid_size: u32,
    view_background_color: Color,
    current_item_font_family: u8,
    current_item_font_size: u32,
    current_item_stroke_color: Color,
    current_item_background_color: Color,
    current_item_fill_style: FillStyle,
    current_item_stroke_width: u32,
    current_item_stroke_style: StrokeStyle,
    current_item_roughness: u8,
    current_item_opacity: u8,
    current_item_text_align: TextAlign,
    current_item_start_arrowhead: Option<Arrowhead>,
    current_item_end_arrowhead: Option<Arrowhead>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            grid_size: 20,
            view_background_color: Color::WHITE,
            current_item_font_family: DEFAULT_FONT_FAMILY,
            current_item_font_size: 16,
            current_item_stroke_color: Color::DEFAULT_STROKE,
            current_item_background_color: Color::TRANSPARENT,
            current_item_fill_style: FillStyle::Solid,
            current_item_stroke_width: DEFAULT_STROKE_WIDTH,
            current_item_stroke_style: StrokeStyle::Solid,
            current_item_roughness: 1,
            current_item_opacity: 100,
            current_item_text_align: TextAlign::Left,
            current_item_start_arrowhead: None,
            current_item_end_arrowhead: Some(Arrowhead::Arrow),
        }
    }
}

impl AppState {
    /// Default state with the configured canvas background applied
    pub fn from_style(style: &StyleConfig) -> Self {
        let mut state = Self::default();
        if let Some(color) = style.background_color() {
            state.view_background_color = color.clone();
        }
        state
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn view_background_color(&self) -> &Color {
        &self.view_background_color
    }

    pub fn current_item_end_arrowhead(&self) -> Option<Arrowhead> {
        self.current_item_end_arrowhead
    }
}

/// A complete `.excalidraw` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "type")]
    kind: String,
    version: u32,
    source: String,
    elements: Vec<Element>,
    app_state: AppState,
    files: BTreeMap<String, serde_json::Value>,
}

impl Document {
    /// Wrap `elements` with the standard header and the given editor state
    pub fn new(elements: Vec<Element>, app_state: AppState) -> Self {
        Self {
            kind: DOCUMENT_TYPE.to_string(),
            version: DOCUMENT_VERSION,
            source: DOCUMENT_SOURCE.to_string(),
            elements,
            app_state,
            files: BTreeMap::new(),
        }
    }

    /// Serialize as JSON indented with two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidInput`] if an element has a non-finite
    /// coordinate, or [`SketchError::Serialization`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String, SketchError> {
        self.check_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document previously written by [`save`](Self::save) or by the editor.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Serialization`] if `json` is not a valid document.
    pub fn from_json_str(json: &str) -> Result<Self, SketchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidInput`] if an element has a non-finite
    /// coordinate, in which case no file is created. Returns
    /// [`SketchError::Io`] if the file cannot be created or written, or
    /// [`SketchError::Serialization`] if encoding fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SketchError> {
        let path = path.as_ref();
        self.check_finite()?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        info!(path:? = path, elements = self.elements.len(); "Saved document");
        trace!(document:? = self; "Saved document contents");
        Ok(())
    }

    /// JSON has no encoding for NaN or infinity; serde_json would write `null`.
    fn check_finite(&self) -> Result<(), SketchError> {
        for element in &self.elements {
            let position = element.position();
            let size = element.size();
            let points = element.as_arrow().map(|arrow| arrow.points()).unwrap_or_default();

            let finite = [position.x(), position.y(), size.width(), size.height()]
                .into_iter()
                .chain(points.iter().flatten().copied())
                .all(f64::is_finite);

            if !finite {
                return Err(SketchError::invalid_input(format!(
                    "element `{}` has a non-finite coordinate",
                    element.id()
                )));
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn files(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use sketchwright_core::{
        element::ElementKind,
        geometry::{Point, Size},
        identifier::ElementId,
    };

    use super::*;

    fn rectangle_at(id: &str, position: Point, size: Size) -> Element {
        Element::new(ElementId::new(id), 1, ElementKind::Rectangle, position, size)
    }

    #[test]
    fn test_header_fields() {
        let document = Document::new(Vec::new(), AppState::default());
        let value: Value = serde_json::from_str(&document.to_json_string().unwrap()).unwrap();

        assert_eq!(value["type"], "excalidraw");
        assert_eq!(value["version"], 2);
        assert!(value["source"].as_str().unwrap().starts_with("sketchwright/"));
        assert_eq!(value["elements"], json!([]));
        assert_eq!(value["files"], json!({}));
    }

    #[test]
    fn test_app_state_defaults() {
        let value = serde_json::to_value(AppState::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "gridSize": 20,
                "viewBackgroundColor": "#ffffff",
                "currentItemFontFamily": 5,
                "currentItemFontSize": 16,
                "currentItemStrokeColor": "#1e1e1e",
                "currentItemBackgroundColor": "transparent",
                "currentItemFillStyle": "solid",
                "currentItemStrokeWidth": 2,
                "currentItemStrokeStyle": "solid",
                "currentItemRoughness": 1,
                "currentItemOpacity": 100,
                "currentItemTextAlign": "left",
                "currentItemStartArrowhead": null,
                "currentItemEndArrowhead": "arrow"
            })
        );
    }

    #[test]
    fn test_background_override() {
        let style = StyleConfig::new(Some(Color::new("#f8f9fa").unwrap()));
        let state = AppState::from_style(&style);

        assert_eq!(state.view_background_color().as_str(), "#f8f9fa");
        assert_eq!(state.grid_size(), 20);

        let state = AppState::from_style(&StyleConfig::default());
        assert_eq!(state.view_background_color(), &Color::WHITE);
    }

    #[test]
    fn test_pretty_printed_with_two_spaces() {
        let json = Document::new(Vec::new(), AppState::default())
            .to_json_string()
            .unwrap();

        assert!(json.starts_with("{\n  \"type\": \"excalidraw\",\n  \"version\": 2,"));
    }

    #[test]
    fn test_json_round_trip() {
        let document = Document::new(Vec::new(), AppState::default());
        let parsed = Document::from_json_str(&document.to_json_string().unwrap()).unwrap();

        assert_eq!(parsed, document);
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let err = Document::from_json_str("{\"type\": 3}").unwrap_err();
        assert!(matches!(err, SketchError::Serialization(_)));
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        let cases = [
            (Point::new(f64::NAN, 0.0), Size::new(120.0, 60.0)),
            (Point::new(0.0, f64::INFINITY), Size::new(120.0, 60.0)),
            (Point::default(), Size::new(f64::NEG_INFINITY, 60.0)),
            (Point::default(), Size::new(120.0, f64::NAN)),
        ];

        for (position, size) in cases {
            let document = Document::new(vec![rectangle_at("rect-7", position, size)], AppState::default());
            match document.to_json_string() {
                Err(SketchError::InvalidInput(message)) => assert!(message.contains("rect-7")),
                other => panic!("Expected InvalidInput for {position:?} {size:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_save_with_non_finite_coordinate_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.excalidraw");
        let document = Document::new(
            vec![rectangle_at("rect-1", Point::new(f64::NAN, 5.0), Size::new(120.0, 60.0))],
            AppState::default(),
        );

        let err = document.save(&path).unwrap_err();

        assert!(matches!(err, SketchError::InvalidInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.excalidraw");

        let err = Document::new(Vec::new(), AppState::default())
            .save(&path)
            .unwrap_err();
        assert!(matches!(err, SketchError::Io(_)));
    }
}
