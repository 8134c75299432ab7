/// Visual treatment of a plain-text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Ordinary output text
    Plain,
    /// Exception output, rendered in the error color
    Error,
}

/// Image media subtype carried by an image fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Subtype half of the `image/...` media type
    pub fn subtype(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

/// One renderer-agnostic unit of visible content.
///
/// Mounting surfaces walk this tree and decide how each kind appears;
/// the core never emits surface-specific markup except inside `RichHtml`,
/// which is always sanitized before it gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Sanitized HTML inserted as markup
    RichHtml { html: String },
    /// Verbatim text, never interpreted as markup
    Text { text: String, style: TextStyle },
    /// Inline image with a base64 payload
    Image { format: ImageFormat, data: String },
    /// Verbatim code with a cosmetic language tag
    Code { language: String, source: String },
    /// A labeled slot holding child fragments in order
    Group {
        prompt: Option<String>,
        children: Vec<Fragment>,
    },
}

/// The rendered document: one top-level fragment per notebook cell,
/// in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayDocument {
    pub fragments: Vec<Fragment>,
}

impl DisplayDocument {
    /// Number of cells this document was rendered from
    pub fn cell_count(&self) -> usize {
        self.fragments.len()
    }
}

// ============================================================================
// Prompt Labels
// ============================================================================

/// Input prompt label; a missing count renders a blank placeholder
pub fn input_label(count: Option<i64>) -> String {
    match count {
        Some(n) => format!("In [{n}]:"),
        None => "In [ ]:".to_string(),
    }
}

/// Output prompt label; only produced when a count is present
pub fn output_label(count: Option<i64>) -> Option<String> {
    count.map(|n| format!("Out [{n}]:"))
}
