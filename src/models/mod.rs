//! Data models module
//!
//! Defines domain models for the notebook document and the rendered output.
//! Includes Notebook, Cell, CellType, Output, DisplayDocument, Fragment.

pub mod document;
pub mod notebook;

#[allow(unused_imports)]
pub use document::{DisplayDocument, Fragment, ImageFormat, TextStyle};
pub use notebook::{Cell, CellType, MimeBundle, Notebook, Output};
