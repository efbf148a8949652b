//! Error adapter for converting SketchError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, LabeledSpan};

use sketchwright::SketchError;

/// Adapter that renders a [`SketchError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a SketchError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SketchError::ElementNotFound(_) => "sketchwright::not_found",
            SketchError::InvalidInput(_) => "sketchwright::invalid_input",
            SketchError::Serialization(_) => "sketchwright::serialization",
            SketchError::Io(_) => "sketchwright::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SketchError::ElementNotFound(_) => "add both endpoints before connecting them with an arrow",
            SketchError::Io(_) => "check that the output directory exists and is writable",
            SketchError::InvalidInput(_) | SketchError::Serialization(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Render `err` as a graphical miette report.
///
/// Falls back to the plain message if the report cannot be formatted.
pub fn render(err: &SketchError) -> String {
    let mut report = String::new();
    match GraphicalReportHandler::new().render_report(&mut report, &ErrorAdapter(err)) {
        Ok(()) => report,
        Err(_) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use sketchwright::identifier::ElementId;

    use super::*;

    fn code_of(err: &SketchError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            code_of(&SketchError::ElementNotFound(ElementId::new("rect-1"))),
            "sketchwright::not_found"
        );
        assert_eq!(
            code_of(&SketchError::invalid_input("no destinations")),
            "sketchwright::invalid_input"
        );
        assert_eq!(
            code_of(&SketchError::Io(io::Error::other("disk full"))),
            "sketchwright::io"
        );

        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        assert_eq!(
            code_of(&SketchError::Serialization(json_err)),
            "sketchwright::serialization"
        );
    }

    #[test]
    fn test_display_passes_through() {
        let err = SketchError::ElementNotFound(ElementId::new("arrow-7"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), "element `arrow-7` not found");
        assert!(adapter.help().is_some());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = SketchError::invalid_input("routing layout needs at least one destination");
        let mut out = String::new();

        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("sketchwright::invalid_input"));
        assert!(out.contains("at least one destination"));
    }

    #[test]
    fn test_render_includes_code_and_help() {
        let report = render(&SketchError::ElementNotFound(ElementId::new("ellipse-4")));

        assert!(report.contains("sketchwright::not_found"));
        assert!(report.contains("ellipse-4"));
        assert!(report.contains("add both endpoints"));
    }
}
