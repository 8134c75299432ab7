//! HTML page module
//!
//! Emits the rendered document as a self-contained HTML page: fragment
//! markup with prompt gutters, an embedded stylesheet, and a header bar
//! with the print-to-PDF affordance. Rich-HTML fragments are inserted
//! verbatim; everything else is escaped here.

use chrono::Utc;

use crate::config::Config;
use crate::models::document::{DisplayDocument, Fragment, TextStyle};
use crate::sanitize::{escape_attr, escape_text};

/// Embedded stylesheet; the page needs no external assets
const STYLE: &str = include_str!("style.css");

/// HTML page writer
pub struct PageWriter<'a> {
    config: &'a Config,
}

impl<'a> PageWriter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Emit the document as HTML. In standalone mode (the default) the
    /// result is a complete page; otherwise only the notebook markup.
    pub fn write_page(&self, document: &DisplayDocument, title: &str) -> String {
        if !self.config.page.standalone {
            let mut output = String::new();
            output.push_str("<div class=\"notebook\">\n");
            self.write_cells(document, &mut output);
            output.push_str("</div>\n");
            return output;
        }

        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        page.push_str("<title>");
        escape_text(title, &mut page);
        page.push_str("</title>\n<style>\n");
        page.push_str(STYLE);
        page.push_str("</style>\n</head>\n<body>\n");

        self.write_header(document, title, &mut page);
        page.push_str("<main class=\"notebook\">\n");
        self.write_cells(document, &mut page);
        page.push_str("</main>\n");
        self.write_footer(&mut page);

        page.push_str("</body>\n</html>\n");
        page
    }

    /// Header bar: title, cell-count badge, print button
    fn write_header(&self, document: &DisplayDocument, title: &str, output: &mut String) {
        output.push_str("<header class=\"nb-header\">\n<h1>");
        escape_text(title, output);
        output.push_str("</h1>\n");

        let cells = document.cell_count();
        let noun = if cells == 1 { "cell" } else { "cells" };
        output.push_str(&format!("<span class=\"nb-badge\">{cells} {noun}</span>\n"));

        output.push_str(
            "<button class=\"nb-print\" onclick=\"window.print()\">Save as PDF</button>\n",
        );
        output.push_str("</header>\n");
    }

    fn write_footer(&self, output: &mut String) {
        output.push_str(&format!(
            "<footer class=\"nb-footer\">Rendered by nbview on {}</footer>\n",
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));
    }

    fn write_cells(&self, document: &DisplayDocument, output: &mut String) {
        for fragment in &document.fragments {
            output.push_str("<section class=\"nb-cell\">\n");
            match fragment {
                Fragment::Group { children, .. } => {
                    for child in children {
                        self.write_slot(child, output);
                    }
                }
                other => self.write_slot(other, output),
            }
            output.push_str("</section>\n");
        }
    }

    /// One row of a cell: prompt gutter on the left, content on the right
    fn write_slot(&self, fragment: &Fragment, output: &mut String) {
        let (prompt, children) = match fragment {
            Fragment::Group { prompt, children } => (prompt.as_deref(), children.as_slice()),
            single => (None, std::slice::from_ref(single)),
        };

        output.push_str("<div class=\"nb-row\">\n");
        if self.config.display.show_prompts {
            // the gutter is kept even when empty so content stays aligned
            output.push_str("<div class=\"nb-prompt\">");
            if let Some(label) = prompt {
                escape_text(label, output);
            }
            output.push_str("</div>\n");
        }
        output.push_str("<div class=\"nb-content\">");
        for child in children {
            self.write_body(child, output);
        }
        output.push_str("</div>\n</div>\n");
    }

    /// The content of one slot
    fn write_body(&self, fragment: &Fragment, output: &mut String) {
        match fragment {
            Fragment::RichHtml { html } => {
                output.push_str("<div class=\"nb-html\">");
                output.push_str(html);
                output.push_str("</div>\n");
            }
            Fragment::Text { text, style } => {
                let class = match style {
                    TextStyle::Plain => "nb-text",
                    TextStyle::Error => "nb-text nb-error",
                };
                output.push_str("<pre class=\"");
                output.push_str(class);
                output.push_str("\">");
                escape_text(text, output);
                output.push_str("</pre>\n");
            }
            Fragment::Image { format, data } => {
                output.push_str("<img class=\"nb-image\" alt=\"\" src=\"data:image/");
                output.push_str(format.subtype());
                output.push_str(";base64,");
                escape_attr(data, output);
                output.push_str("\">\n");
            }
            Fragment::Code { language, source } => {
                output.push_str("<pre class=\"nb-code\"><code class=\"language-");
                escape_attr(language, output);
                output.push_str("\">");
                escape_text(source, output);
                output.push_str("</code></pre>\n");
            }
            // nested groups become nested rows
            Fragment::Group { .. } => self.write_slot(fragment, output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageFormat;

    fn code_cell_document() -> DisplayDocument {
        DisplayDocument {
            fragments: vec![Fragment::Group {
                prompt: None,
                children: vec![
                    Fragment::Group {
                        prompt: Some("In [2]:".to_string()),
                        children: vec![Fragment::Code {
                            language: "python".to_string(),
                            source: "print(\"a<b\")".to_string(),
                        }],
                    },
                    Fragment::Group {
                        prompt: None,
                        children: vec![Fragment::Text {
                            text: "a<b\n".to_string(),
                            style: TextStyle::Plain,
                        }],
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_page_shell() {
        let config = Config::default();
        let page = PageWriter::new(&config).write_page(&code_cell_document(), "My <Notebook>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>My &lt;Notebook&gt;</title>"));
        assert!(page.contains("<style>"));
        assert!(page.contains("Save as PDF"));
        assert!(page.contains("Rendered by nbview on 2"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_bare_mode_omits_shell() {
        let mut config = Config::default();
        config.page.standalone = false;
        let output = PageWriter::new(&config).write_page(&code_cell_document(), "ignored");

        assert!(!output.contains("<!DOCTYPE html>"));
        assert!(!output.contains("nb-header"));
        assert!(!output.contains("<style>"));
        assert!(output.starts_with("<div class=\"notebook\">"));
        assert!(output.contains("nb-cell"));
    }

    #[test]
    fn test_code_slot_markup() {
        let config = Config::default();
        let page = PageWriter::new(&config).write_page(&code_cell_document(), "t");

        assert!(page.contains("<div class=\"nb-prompt\">In [2]:</div>"));
        // quotes are literal in text context; only & < > are escaped
        assert!(page.contains("<code class=\"language-python\">print(\"a&lt;b\")</code>"));
        assert!(page.contains("<pre class=\"nb-text\">a&lt;b\n</pre>"));
    }

    #[test]
    fn test_prompts_hidden_when_configured() {
        let mut config = Config::default();
        config.display.show_prompts = false;
        let page = PageWriter::new(&config).write_page(&code_cell_document(), "t");

        // the stylesheet still names the class; only the markup must go
        assert!(!page.contains("<div class=\"nb-prompt\">"));
        assert!(!page.contains("In [2]:"));
    }

    #[test]
    fn test_image_data_uri() {
        let config = Config::default();
        let document = DisplayDocument {
            fragments: vec![Fragment::Group {
                prompt: None,
                children: vec![Fragment::Image {
                    format: ImageFormat::Png,
                    data: "iVBORw0K".to_string(),
                }],
            }],
        };
        let page = PageWriter::new(&config).write_page(&document, "t");

        assert!(page.contains("src=\"data:image/png;base64,iVBORw0K\""));
    }

    #[test]
    fn test_error_text_class() {
        let config = Config::default();
        let document = DisplayDocument {
            fragments: vec![Fragment::Group {
                prompt: None,
                children: vec![Fragment::Text {
                    text: "ValueError".to_string(),
                    style: TextStyle::Error,
                }],
            }],
        };
        let page = PageWriter::new(&config).write_page(&document, "t");

        assert!(page.contains("<pre class=\"nb-text nb-error\">ValueError</pre>"));
    }

    #[test]
    fn test_rich_html_inserted_verbatim() {
        let config = Config::default();
        let document = DisplayDocument {
            fragments: vec![Fragment::Group {
                prompt: None,
                children: vec![Fragment::RichHtml {
                    html: "<h1>Hi</h1>".to_string(),
                }],
            }],
        };
        let page = PageWriter::new(&config).write_page(&document, "t");

        assert!(page.contains("<div class=\"nb-html\"><h1>Hi</h1></div>"));
    }

    #[test]
    fn test_cell_count_badge() {
        let config = Config::default();
        let writer = PageWriter::new(&config);

        let one = writer.write_page(&code_cell_document(), "t");
        assert!(one.contains(">1 cell</span>"));

        let empty = writer.write_page(&DisplayDocument::default(), "t");
        assert!(empty.contains(">0 cells</span>"));
    }
}
