//! Minimal streaming XML builder
//!
//! Keeps a stack of open elements so that `close_element` and
//! `close_all_and_extract` always emit matching end tags. Each element goes on its
//! own line, indented by nesting depth.

const INDENT: &str = "  ";

/// Ordered attribute list (`key`, `value`)
pub(crate) type Attributes<'a> = &'a [(&'a str, String)];

#[derive(Debug, Default)]
pub(crate) struct XmlGenerator {
    output: String,
    open_elements: Vec<String>,
}

impl XmlGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declaration(&mut self) {
        self.output
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    /// Open an element and keep it open until the matching close
    pub fn open_element(&mut self, name: &str, attributes: Attributes<'_>) {
        self.indent();
        self.start_tag(name, attributes);
        self.output.push('\n');
        self.open_elements.push(name.to_string());
    }

    /// Emit a complete leaf element with text content
    pub fn element(&mut self, name: &str, attributes: Attributes<'_>, text: &str) {
        self.indent();
        self.start_tag(name, attributes);
        self.output.push_str(&escape_xml(text));
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push_str(">\n");
    }

    /// Close the innermost open element, if any
    pub fn close_element(&mut self) {
        if let Some(name) = self.open_elements.pop() {
            self.indent();
            self.output.push_str("</");
            self.output.push_str(&name);
            self.output.push_str(">\n");
        }
    }

    /// Close every open element and return the document text
    pub fn close_all_and_extract(mut self) -> String {
        while !self.open_elements.is_empty() {
            self.close_element();
        }
        self.output
    }

    fn start_tag(&mut self, name: &str, attributes: Attributes<'_>) {
        self.output.push('<');
        self.output.push_str(name);
        for (key, value) in attributes {
            self.output.push(' ');
            self.output.push_str(key);
            self.output.push_str("=\"");
            self.output.push_str(&escape_xml(value));
            self.output.push('"');
        }
        self.output.push('>');
    }

    fn indent(&mut self) {
        for _ in 0..self.open_elements.len() {
            self.output.push_str(INDENT);
        }
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
