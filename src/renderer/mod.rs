//! Cell renderer module
//!
//! Transforms a parsed notebook value into the ordered display document.
//! Classifies each cell, converts markdown through the shared sanitizer,
//! and delegates code-cell outputs to the output interpreter.

mod output;

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::markdown;
use crate::models::document::{input_label, DisplayDocument, Fragment};
use crate::models::{Cell, CellType, Notebook};
use crate::sanitize::Sanitizer;

/// Notebook renderer
pub struct Renderer<'a> {
    config: &'a Config,
    sanitizer: Sanitizer,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            sanitizer: Sanitizer::new(),
        }
    }

    /// Render a parsed notebook value into a display document.
    ///
    /// The sole failure is a malformed notebook (`cells` missing or not an
    /// array); every other irregularity degrades to absent content.
    pub fn render(&self, value: &Value) -> Result<DisplayDocument> {
        let notebook = Notebook::from_value(value)?;
        Ok(self.render_notebook(&notebook))
    }

    /// Render an already-validated notebook
    pub fn render_notebook(&self, notebook: &Notebook) -> DisplayDocument {
        let language = notebook
            .language
            .clone()
            .unwrap_or_else(|| self.config.display.fallback_language.clone());

        DisplayDocument {
            fragments: notebook
                .cells
                .iter()
                .map(|cell| self.render_cell(cell, &language))
                .collect(),
        }
    }

    /// Render one cell into its top-level fragment
    fn render_cell(&self, cell: &Cell, language: &str) -> Fragment {
        match cell.cell_type {
            CellType::Markdown => self.render_markdown_cell(cell),
            CellType::Code => self.render_code_cell(cell, language),
            // unknown cell types contribute an empty container, never an error
            CellType::Other => Fragment::Group {
                prompt: None,
                children: Vec::new(),
            },
        }
    }

    /// Markdown source becomes sanitized HTML
    fn render_markdown_cell(&self, cell: &Cell) -> Fragment {
        let html = self.sanitizer.clean(&markdown::to_html(&cell.source));
        Fragment::Group {
            prompt: None,
            children: vec![Fragment::RichHtml { html }],
        }
    }

    /// Code cells get an input slot plus one slot per renderable output
    fn render_code_cell(&self, cell: &Cell, language: &str) -> Fragment {
        let count = cell.prompt_count();

        let mut children = vec![Fragment::Group {
            prompt: Some(input_label(count)),
            children: vec![Fragment::Code {
                language: language.to_string(),
                source: cell.source.clone(),
            }],
        }];

        // Outputs keep their recorded order; unrenderable ones leave no slot
        children.extend(
            cell.outputs
                .iter()
                .filter_map(|output| output::interpret(output, count, &self.sanitizer)),
        );

        Fragment::Group {
            prompt: None,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NbviewError;
    use crate::models::TextStyle;
    use serde_json::json;

    fn render(value: serde_json::Value) -> Result<DisplayDocument> {
        let config = Config::default();
        Renderer::new(&config).render(&value)
    }

    fn cell_children(document: &DisplayDocument, index: usize) -> &[Fragment] {
        match &document.fragments[index] {
            Fragment::Group { children, .. } => children,
            other => panic!("expected a cell group, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_cells_is_invalid_format() {
        let err = render(json!({"metadata": {}})).unwrap_err();
        assert!(matches!(err, NbviewError::InvalidFormat(_)));
    }

    #[test]
    fn test_non_array_cells_is_invalid_format() {
        let err = render(json!({"cells": {"cell_type": "code"}})).unwrap_err();
        assert!(matches!(err, NbviewError::InvalidFormat(_)));
    }

    #[test]
    fn test_markdown_cell_renders_heading() {
        let document = render(json!({
            "cells": [{"cell_type": "markdown", "source": ["# Hi"]}]
        }))
        .unwrap();

        assert_eq!(document.cell_count(), 1);
        match &cell_children(&document, 0)[0] {
            Fragment::RichHtml { html } => {
                assert!(html.contains("<h1>Hi</h1>"));
                assert!(!html.contains("<script"));
            }
            other => panic!("expected rich html, got {other:?}"),
        }
    }

    #[test]
    fn test_markdown_cell_is_sanitized() {
        let document = render(json!({
            "cells": [{
                "cell_type": "markdown",
                "source": "hello <script>alert(1)</script> <b onclick=\"x()\">world</b>"
            }]
        }))
        .unwrap();

        match &cell_children(&document, 0)[0] {
            Fragment::RichHtml { html } => {
                assert!(!html.contains("script"));
                assert!(!html.contains("onclick"));
                assert!(html.contains("<b>world</b>"));
            }
            other => panic!("expected rich html, got {other:?}"),
        }
    }

    #[test]
    fn test_code_cell_with_stream_output() {
        let document = render(json!({
            "cells": [{
                "cell_type": "code",
                "execution_count": 3,
                "source": "print(1)",
                "outputs": [{"output_type": "stream", "text": ["1\n"]}]
            }]
        }))
        .unwrap();

        let children = cell_children(&document, 0);
        assert_eq!(children.len(), 2);

        match &children[0] {
            Fragment::Group { prompt, children } => {
                assert_eq!(prompt.as_deref(), Some("In [3]:"));
                assert_eq!(
                    children[0],
                    Fragment::Code {
                        language: "python".to_string(),
                        source: "print(1)".to_string(),
                    }
                );
            }
            other => panic!("expected input slot, got {other:?}"),
        }

        match &children[1] {
            Fragment::Group { prompt, children } => {
                assert_eq!(*prompt, None);
                assert_eq!(
                    children[0],
                    Fragment::Text {
                        text: "1\n".to_string(),
                        style: TextStyle::Plain,
                    }
                );
            }
            other => panic!("expected output slot, got {other:?}"),
        }
    }

    #[test]
    fn test_unrun_code_cell_blank_prompt_no_outputs() {
        let document = render(json!({
            "cells": [{
                "cell_type": "code",
                "execution_count": null,
                "source": "x = 1"
            }]
        }))
        .unwrap();

        let children = cell_children(&document, 0);
        assert_eq!(children.len(), 1);
        match &children[0] {
            Fragment::Group { prompt, .. } => assert_eq!(prompt.as_deref(), Some("In [ ]:")),
            other => panic!("expected input slot, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_execution_count_renders_blank() {
        let document = render(json!({
            "cells": [{"cell_type": "code", "execution_count": 0, "source": ""}]
        }))
        .unwrap();

        match &cell_children(&document, 0)[0] {
            Fragment::Group { prompt, .. } => assert_eq!(prompt.as_deref(), Some("In [ ]:")),
            other => panic!("expected input slot, got {other:?}"),
        }
    }

    #[test]
    fn test_html_output_strips_event_handler() {
        let document = render(json!({
            "cells": [{
                "cell_type": "code",
                "execution_count": 5,
                "source": "df",
                "outputs": [{
                    "output_type": "execute_result",
                    "execution_count": 5,
                    "data": {"text/html": "<img src=x onerror=alert(1)>"}
                }]
            }]
        }))
        .unwrap();

        let children = cell_children(&document, 0);
        match &children[1] {
            Fragment::Group { prompt, children } => {
                assert_eq!(prompt.as_deref(), Some("Out [5]:"));
                match &children[0] {
                    Fragment::RichHtml { html } => assert!(!html.contains("onerror")),
                    other => panic!("expected rich html, got {other:?}"),
                }
            }
            other => panic!("expected output slot, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_data_contributes_no_slot() {
        let document = render(json!({
            "cells": [{
                "cell_type": "code",
                "execution_count": 2,
                "source": "pass",
                "outputs": [{"output_type": "display_data", "data": {}}]
            }]
        }))
        .unwrap();

        // only the input slot remains
        assert_eq!(cell_children(&document, 0).len(), 1);
    }

    #[test]
    fn test_unknown_cell_type_is_empty_container() {
        let document = render(json!({
            "cells": [{"cell_type": "raw", "source": "ignored"}]
        }))
        .unwrap();

        assert_eq!(document.cell_count(), 1);
        assert!(cell_children(&document, 0).is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let document = render(json!({
            "cells": [
                {"cell_type": "markdown", "source": "# One"},
                {"cell_type": "code", "execution_count": 1, "source": "1 + 1"},
                {"cell_type": "markdown", "source": "# Two"}
            ]
        }))
        .unwrap();

        assert_eq!(document.cell_count(), 3);
        assert!(matches!(
            cell_children(&document, 0)[0],
            Fragment::RichHtml { .. }
        ));
        assert!(matches!(
            cell_children(&document, 1)[0],
            Fragment::Group { .. }
        ));
        match &cell_children(&document, 2)[0] {
            Fragment::RichHtml { html } => assert!(html.contains("Two")),
            other => panic!("expected rich html, got {other:?}"),
        }
    }

    #[test]
    fn test_language_from_notebook_metadata() {
        let document = render(json!({
            "cells": [{"cell_type": "code", "source": "IO.puts(1)"}],
            "metadata": {"language_info": {"name": "elixir"}}
        }))
        .unwrap();

        match &cell_children(&document, 0)[0] {
            Fragment::Group { children, .. } => match &children[0] {
                Fragment::Code { language, .. } => assert_eq!(language, "elixir"),
                other => panic!("expected code, got {other:?}"),
            },
            other => panic!("expected input slot, got {other:?}"),
        }
    }

    #[test]
    fn test_outputs_keep_recorded_order() {
        let document = render(json!({
            "cells": [{
                "cell_type": "code",
                "execution_count": 9,
                "source": "run()",
                "outputs": [
                    {"output_type": "stream", "text": "first\n"},
                    {"output_type": "unknown_kind"},
                    {"output_type": "execute_result", "data": {"text/plain": "second"}}
                ]
            }]
        }))
        .unwrap();

        let children = cell_children(&document, 0);
        // input slot + two renderable outputs; the unknown kind left no slot
        assert_eq!(children.len(), 3);

        match &children[1] {
            Fragment::Group { children, .. } => assert_eq!(
                children[0],
                Fragment::Text {
                    text: "first\n".to_string(),
                    style: TextStyle::Plain,
                }
            ),
            other => panic!("expected output slot, got {other:?}"),
        }
        match &children[2] {
            Fragment::Group { prompt, .. } => assert_eq!(prompt.as_deref(), Some("Out [9]:")),
            other => panic!("expected output slot, got {other:?}"),
        }
    }
}
