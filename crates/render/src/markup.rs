//! Minimal XML element tree used to build SVG documents.
//!
//! Text and attribute values are escaped on output, so callers pass raw
//! values and never splice markup by hand.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, attrs: Vec::new(), children: Vec::new() }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value of the first attribute called `name`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", escape(value))?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Element(el) => write!(f, "{el}")?,
                Node::Text(text) => f.write_str(&escape(text))?,
            }
        }
        write!(f, "</{}>", self.name)
    }
}

/// Escapes the five XML special characters.
#[must_use]
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let el = Element::new("rect").attr("x", 20).attr("width", 33.5);
        assert_eq!(el.to_string(), r#"<rect x="20" width="33.5"/>"#);
    }

    #[test]
    fn test_nested_elements_and_text() {
        let el = Element::new("g").child(Element::new("text").attr("y", 30).text("FID: 1"));
        assert_eq!(el.to_string(), r#"<g><text y="30">FID: 1</text></g>"#);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let el = Element::new("text").attr("data-x", "a\"b<c").text("Tom & <Jerry>");
        assert_eq!(
            el.to_string(),
            r#"<text data-x="a&quot;b&lt;c">Tom &amp; &lt;Jerry&gt;</text>"#
        );
    }

    #[test]
    fn test_escapes_script_in_text() {
        let svg = Element::new("text").text("fid <script>").to_string();
        assert!(svg.contains("&lt;script&gt;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_get_attr() {
        let el = Element::new("rect").attr("id", "casts-fill").attr("width", 0);
        assert_eq!(el.get_attr("width"), Some("0"));
        assert_eq!(el.get_attr("height"), None);
        assert_eq!(el.name(), "rect");
    }
}
