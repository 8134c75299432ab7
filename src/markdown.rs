//! Markdown conversion module
//!
//! Converts markdown cell sources to HTML. The result is raw converter
//! output; callers are expected to pass it through the sanitizer before
//! it enters a display fragment.

use pulldown_cmark::{html, Options, Parser};

/// Convert markdown text to HTML with the common notebook extensions
/// (tables, strikethrough, task lists) enabled
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
