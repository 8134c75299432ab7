//! Document to terminal text conversion
//!
//! Flattens a rendered document into markdown-ish text that termimad can
//! style. Rich HTML is reduced to its text content and images become
//! placeholders since neither can be drawn in a terminal.

use scraper::Html;

use crate::config::Config;
use crate::models::{DisplayDocument, Fragment, TextStyle};

/// Convert a rendered document to markdown text for terminal display
pub fn document_to_markdown(document: &DisplayDocument, config: &Config) -> String {
    let mut output = String::new();

    for cell in &document.fragments {
        let rendered = render_cell(cell, config);
        if rendered.trim().is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push_str("---\n\n");
        }
        output.push_str(&rendered);
    }

    output.trim_end().to_string()
}

/// Render one top-level cell fragment
fn render_cell(cell: &Fragment, config: &Config) -> String {
    let mut output = String::new();
    match cell {
        Fragment::Group { children, .. } => {
            for child in children {
                output.push_str(&render_fragment(child, config));
            }
        }
        other => output.push_str(&render_fragment(other, config)),
    }
    output
}

fn render_fragment(fragment: &Fragment, config: &Config) -> String {
    let mut output = String::new();
    match fragment {
        Fragment::Group { prompt, children } => {
            if config.display.show_prompts {
                if let Some(label) = prompt {
                    output.push_str(&format!("**{}**\n\n", label));
                }
            }
            for child in children {
                output.push_str(&render_fragment(child, config));
            }
        }
        Fragment::Code { language, source } => {
            let body = source.trim_end_matches('\n');
            output.push_str(&format!("```{}\n{}\n```\n\n", language, body));
        }
        Fragment::Text { text, style } => match style {
            TextStyle::Plain => {
                let body = text.trim_end_matches('\n');
                output.push_str(&format!("```\n{}\n```\n\n", body));
            }
            TextStyle::Error => {
                for line in text.lines() {
                    output.push_str(&format!("> {}\n", line));
                }
                output.push('\n');
            }
        },
        Fragment::RichHtml { html } => {
            let text = html_to_text(html);
            if !text.is_empty() {
                output.push_str(&text);
                output.push_str("\n\n");
            }
        }
        Fragment::Image { format, .. } => {
            output.push_str(&format!("*[image/{} output]*\n\n", format.subtype()));
        }
    }
    output
}

/// Extract the text content of an HTML fragment
fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::new();
    for piece in fragment.root_element().text() {
        text.push_str(piece);
    }
    text.trim().to_string()
}
