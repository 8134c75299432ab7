//! Terminal display module
//!
//! Converts rendered documents to markdown text and prints them with
//! automatic TTY and color detection.

mod formatter;
mod text;

pub use formatter::print_markdown;
pub use text::document_to_markdown;
