//! Output interpreter
//!
//! Maps one recorded code-cell output to a display fragment, or to nothing
//! when the record carries no renderable payload. Silent skips here are
//! contract, not failure: unknown output types and unmatched MIME bundles
//! must never abort the enclosing render.

use crate::models::document::{output_label, Fragment, ImageFormat, TextStyle};
use crate::models::{MimeBundle, Output};
use crate::sanitize::Sanitizer;

/// Recognized MIME keys, in descending rendering priority
const MIME_PRIORITY: [&str; 4] = ["image/png", "image/jpeg", "text/html", "text/plain"];

/// Interpret one output record.
///
/// `execution_count` is the owning cell's prompt count (null and zero have
/// already collapsed to `None`); it only matters for `execute_result`,
/// the single output kind that carries an `Out [n]:` label. Returns `None`
/// when no body fragment was produced, and the caller must then omit the
/// output slot entirely.
pub(super) fn interpret(
    output: &Output,
    execution_count: Option<i64>,
    sanitizer: &Sanitizer,
) -> Option<Fragment> {
    match output {
        Output::Stream { text } => Some(slot(
            None,
            Fragment::Text {
                text: text.clone(),
                style: TextStyle::Plain,
            },
        )),
        Output::ExecuteResult { data } => {
            select_payload(data, sanitizer).map(|body| slot(output_label(execution_count), body))
        }
        Output::DisplayData { data } => select_payload(data, sanitizer).map(|body| slot(None, body)),
        Output::Error { ename, traceback } => {
            let text = if traceback.is_empty() {
                ename.clone()
            } else {
                traceback.join("\n")
            };
            Some(slot(
                None,
                Fragment::Text {
                    text,
                    style: TextStyle::Error,
                },
            ))
        }
        Output::Unknown => None,
    }
}

/// Wrap a body fragment in its output slot
fn slot(prompt: Option<String>, body: Fragment) -> Fragment {
    Fragment::Group {
        prompt,
        children: vec![body],
    }
}

/// Pick the first present MIME key by priority and build its fragment.
/// An empty bundle, or one with only unrecognized keys, yields nothing.
fn select_payload(data: &MimeBundle, sanitizer: &Sanitizer) -> Option<Fragment> {
    for mime in MIME_PRIORITY {
        if let Some(payload) = data.get(mime) {
            return Some(match mime {
                "image/png" => Fragment::Image {
                    format: ImageFormat::Png,
                    data: payload.trim().to_string(),
                },
                "image/jpeg" => Fragment::Image {
                    format: ImageFormat::Jpeg,
                    data: payload.trim().to_string(),
                },
                "text/html" => Fragment::RichHtml {
                    html: sanitizer.clean(payload),
                },
                _ => Fragment::Text {
                    text: payload.clone(),
                    style: TextStyle::Plain,
                },
            });
        }
    }
    None
}
