use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{NbviewError, Result};

/// MIME type string mapped to its normalized text payload
pub type MimeBundle = BTreeMap<String, String>;

/// Normalize a notebook text field that arrives either as one string or as
/// an ordered list of string fragments joined with no separator.
///
/// Used for cell sources, stream text, and MIME payloads alike so every
/// ingestion point resolves the dual representation the same way. Anything
/// that is neither a string nor a list yields an empty string; non-string
/// list entries are skipped.
pub fn normalize_source(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}

// ============================================================================
// Cell Models
// ============================================================================

/// Discriminant of a notebook cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    /// Narrative text in markdown syntax
    Markdown,
    /// Executable code with recorded outputs
    Code,
    /// Anything else (raw cells, future types); rendered as nothing
    Other,
}

impl CellType {
    /// Map a `cell_type` tag to its variant; unknown tags are tolerated
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "markdown" => CellType::Markdown,
            "code" => CellType::Code,
            _ => CellType::Other,
        }
    }
}

/// One unit of a notebook document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell discriminant from the `cell_type` tag
    pub cell_type: CellType,
    /// Normalized source text
    pub source: String,
    /// Run sequence number; absent or null when the cell never ran
    pub execution_count: Option<i64>,
    /// Recorded outputs, empty for non-code cells or unrun code
    pub outputs: Vec<Output>,
}

impl Cell {
    /// Build a cell from its JSON value; never fails, unknown shapes
    /// degrade to an empty `Other` cell
    pub fn from_value(value: &Value) -> Self {
        Cell {
            cell_type: CellType::from_tag(value["cell_type"].as_str().unwrap_or_default()),
            source: normalize_source(&value["source"]),
            execution_count: value["execution_count"].as_i64(),
            outputs: value["outputs"]
                .as_array()
                .map(|entries| entries.iter().map(Output::from_value).collect())
                .unwrap_or_default(),
        }
    }

    /// Execution count for prompt labels; zero counts as unset
    pub fn prompt_count(&self) -> Option<i64> {
        self.execution_count.filter(|count| *count != 0)
    }
}

// ============================================================================
// Output Models
// ============================================================================

/// One recorded output of a code cell, discriminated on `output_type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Console text captured while the cell ran
    Stream { text: String },
    /// The cell's result value with its MIME representations
    ExecuteResult { data: MimeBundle },
    /// Rich display data emitted as a side effect
    DisplayData { data: MimeBundle },
    /// A raised exception
    Error { ename: String, traceback: Vec<String> },
    /// Unrecognized output type; contributes nothing
    Unknown,
}

impl Output {
    /// Build an output from its JSON value; unknown or missing tags
    /// degrade to `Unknown`
    pub fn from_value(value: &Value) -> Self {
        match value["output_type"].as_str().unwrap_or_default() {
            "stream" => Output::Stream {
                text: normalize_source(&value["text"]),
            },
            "execute_result" => Output::ExecuteResult {
                data: parse_mime_bundle(&value["data"]),
            },
            "display_data" => Output::DisplayData {
                data: parse_mime_bundle(&value["data"]),
            },
            "error" => Output::Error {
                ename: value["ename"].as_str().unwrap_or_default().to_string(),
                traceback: value["traceback"]
                    .as_array()
                    .map(|lines| {
                        lines
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            _ => Output::Unknown,
        }
    }
}

/// Extract the MIME bundle from a `data` value, keeping only entries whose
/// payload is text (string or list of strings). Structured payloads such as
/// `application/json` objects are dropped so they never match a priority key.
fn parse_mime_bundle(value: &Value) -> MimeBundle {
    match value.as_object() {
        Some(entries) => entries
            .iter()
            .filter(|(_, payload)| payload.is_string() || payload.is_array())
            .map(|(mime, payload)| (mime.clone(), normalize_source(payload)))
            .collect(),
        None => MimeBundle::new(),
    }
}

// ============================================================================
// Notebook Model
// ============================================================================

/// A parsed notebook document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    /// Cells in document order
    pub cells: Vec<Cell>,
    /// Kernel language from `metadata.language_info.name`, if recorded
    pub language: Option<String>,
    /// Document title from `metadata.title`, if recorded
    pub title: Option<String>,
}

impl Notebook {
    /// Build a notebook from its parsed JSON value.
    ///
    /// The only hard requirement is that `cells` is present and is an
    /// array; everything else is optional and tolerated when malformed.
    pub fn from_value(value: &Value) -> Result<Self> {
        let cells = match value.get("cells") {
            None => {
                return Err(NbviewError::InvalidFormat(
                    "missing 'cells' attribute".to_string(),
                ))
            }
            Some(entries) => entries.as_array().ok_or_else(|| {
                NbviewError::InvalidFormat("'cells' is not an array".to_string())
            })?,
        };

        Ok(Notebook {
            cells: cells.iter().map(Cell::from_value).collect(),
            language: value["metadata"]["language_info"]["name"]
                .as_str()
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            title: value["metadata"]["title"].as_str().map(str::to_string),
        })
    }
}
