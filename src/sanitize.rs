//! HTML sanitization module
//!
//! Strips active content from untrusted HTML before it enters a display
//! fragment. One `Sanitizer` instance is shared by the markdown cell path
//! and the `text/html` output path so both carry the same guarantees:
//! no scripts, no event handlers, no unsafe URL schemes.

use scraper::{ElementRef, Html};

/// Elements kept as-is (with filtered attributes)
const ALLOWED_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "blockquote", "br", "caption", "cite", "code", "col", "colgroup", "dd",
    "del", "details", "dfn", "div", "dl", "dt", "em", "figcaption", "figure", "h1", "h2", "h3",
    "h4", "h5", "h6", "hr", "i", "img", "input", "ins", "kbd", "li", "mark", "ol", "p", "pre",
    "q", "s", "samp", "small", "span", "strong", "sub", "summary", "sup", "table", "tbody", "td",
    "tfoot", "th", "thead", "tr", "u", "ul", "var", "wbr",
];

/// Elements removed together with their entire subtree. Everything not in
/// either list is unwrapped: the tag disappears, its children are kept.
const DROPPED_ELEMENTS: &[&str] = &[
    "applet", "base", "button", "embed", "form", "frame", "frameset", "head", "iframe", "link",
    "math", "meta", "noscript", "object", "script", "select", "style", "svg", "textarea", "title",
];

/// Attributes kept on allowed elements; everything else (including every
/// `on*` handler) is dropped
const ALLOWED_ATTRIBUTES: &[&str] = &[
    "align", "alt", "border", "cellpadding", "cellspacing", "checked", "class", "colspan", "dir",
    "disabled", "height", "href", "id", "lang", "rowspan", "scope", "span", "src", "start",
    "style", "summary", "title", "type", "valign", "width",
];

/// Attributes whose value is a URL and must pass the scheme check
const URL_ATTRIBUTES: &[&str] = &["href", "src"];

/// Allowed elements with no closing tag
const VOID_ELEMENTS: &[&str] = &["br", "col", "hr", "img", "input", "wbr"];

/// Allowlist-based HTML sanitizer.
///
/// Parses the input as an HTML fragment and re-serializes only what the
/// policy permits. Output is deterministic (attributes in name order) and
/// stable: sanitizing already-sanitized markup reproduces it byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Sanitizer {
    pub fn new() -> Self {
        Sanitizer
    }

    /// Sanitize an HTML fragment
    pub fn clean(&self, input: &str) -> String {
        let fragment = Html::parse_fragment(input);
        let mut output = String::new();
        // parse_fragment wraps content in a synthetic <html> element
        self.write_children(fragment.root_element(), &mut output);
        output
    }

    /// Serialize the sanitized children of an element. Text nodes are
    /// escaped; comments, doctypes, and processing instructions vanish.
    fn write_children(&self, element: ElementRef, output: &mut String) {
        for child in element.children() {
            if let Some(child_element) = ElementRef::wrap(child) {
                self.write_element(child_element, output);
            } else if let Some(text_node) = child.value().as_text() {
                escape_text(text_node, output);
            }
        }
    }

    /// Serialize one element if the policy allows it
    fn write_element(&self, element: ElementRef, output: &mut String) {
        let name = element.value().name();

        if DROPPED_ELEMENTS.contains(&name) {
            return;
        }
        if !ALLOWED_ELEMENTS.contains(&name) {
            // unknown but harmless wrapper: keep its content
            self.write_children(element, output);
            return;
        }

        output.push('<');
        output.push_str(name);

        // Sorted emission keeps the output independent of parser-internal
        // attribute ordering, which makes a second pass byte-stable
        let mut attrs: Vec<(&str, &str)> = element
            .value()
            .attrs()
            .filter(|&(attr, value)| keep_attribute(attr, value))
            .collect();
        attrs.sort_unstable_by_key(|(attr, _)| *attr);

        for (attr, value) in attrs {
            output.push(' ');
            output.push_str(attr);
            output.push_str("=\"");
            escape_attr(value, output);
            output.push('"');
        }
        output.push('>');

        if VOID_ELEMENTS.contains(&name) {
            return;
        }

        // HTML parsing eats one newline right after <pre>; re-emit it so
        // the next parse sees the same text content
        if name == "pre" && leading_newline(element) {
            output.push('\n');
        }

        self.write_children(element, output);
        output.push_str("</");
        output.push_str(name);
        output.push('>');
    }
}

/// True when the element's first text child starts with a newline
fn leading_newline(element: ElementRef) -> bool {
    element
        .children()
        .next()
        .and_then(|child| child.value().as_text().map(|text| text.starts_with('\n')))
        .unwrap_or(false)
}

/// Attribute filter: allowlisted names only, URL values with safe schemes
fn keep_attribute(attr: &str, value: &str) -> bool {
    if !ALLOWED_ATTRIBUTES.contains(&attr) {
        return false;
    }
    if URL_ATTRIBUTES.contains(&attr) {
        return safe_url(value);
    }
    true
}

/// Check a URL against the allowed schemes: http, https, mailto, inline
/// raster images, and anything relative (no scheme at all).
fn safe_url(value: &str) -> bool {
    // Browsers tokenize schemes after discarding whitespace and control
    // characters, so "jav\tascript:" must be read as "javascript:"
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match compact.split_once(':') {
        // no scheme: relative path, query, or fragment reference
        None => true,
        Some((scheme, rest)) => {
            if scheme.contains('/') || scheme.contains('?') || scheme.contains('#') {
                // the colon sits inside a path or query, not a scheme
                return true;
            }
            match scheme {
                "http" | "https" | "mailto" => true,
                // raster images only; svg documents can carry scripts
                "data" => rest.starts_with("image/") && !rest.starts_with("image/svg"),
                _ => false,
            }
        }
    }
}

/// Escape text for an HTML text context
pub(crate) fn escape_text(input: &str, output: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
}

/// Escape text for a double-quoted attribute value
pub(crate) fn escape_attr(input: &str, output: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(ch),
        }
    }
}
