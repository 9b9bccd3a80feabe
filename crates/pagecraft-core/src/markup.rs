//! Structured markup builder.
//!
//! A small string-backed HTML builder handed to page callbacks. Text nodes and
//! attribute values are escaped; [`Markup::raw`] is the only way to emit
//! unescaped markup.

/// HTML markup under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    buf: String,
}

impl Markup {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `<tag attrs>children</tag>`.
    ///
    /// The value returned by `children` is passed through, so fallible
    /// callbacks can propagate errors with `?`:
    ///
    /// ```
    /// use pagecraft_core::Markup;
    ///
    /// let mut markup = Markup::new();
    /// markup.element("p", &[("class", "lead")], |m| {
    ///     m.text("Fish & chips");
    /// });
    /// assert_eq!(markup.as_str(), r#"<p class="lead">Fish &amp; chips</p>"#);
    /// ```
    pub fn element<R>(
        &mut self,
        tag: &str,
        attrs: &[(&str, &str)],
        children: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.open_tag(tag, attrs);
        let out = children(self);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        out
    }

    /// Emit an element without a closing tag, such as `<meta>` or `<img>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open_tag(tag, attrs);
        self
    }

    /// Emit an escaped text node.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_text(text));
        self
    }

    /// Emit markup verbatim.
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The markup emitted so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the builder and return the markup.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    fn open_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attr(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }
}

/// Escape a string for use as an HTML text node.
#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use inside a double-quoted attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
