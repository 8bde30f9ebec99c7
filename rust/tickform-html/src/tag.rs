//! Minimal HTML element builder.

use std::collections::BTreeMap;

use tickform_core::escape::escape_html;

use crate::attrs::Attributes;
use crate::markup::Markup;

/// How the element's tag is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRenderMode {
    /// `<tag ...>inner</tag>`
    Normal,
    /// `<tag ... />` — void elements such as `input`.
    SelfClosing,
}

/// Builder for a single HTML element with attributes and raw inner HTML.
///
/// Attributes render sorted by name, values escaped at render time.
/// Inner HTML is taken as-is; callers escape text before appending.
#[derive(Debug)]
pub struct TagBuilder {
    tag: &'static str,
    attributes: BTreeMap<String, String>,
    inner_html: String,
    render_mode: TagRenderMode,
}

impl TagBuilder {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: BTreeMap::new(),
            inner_html: String::new(),
            render_mode: TagRenderMode::Normal,
        }
    }

    pub fn render_mode(&mut self, mode: TagRenderMode) -> &mut Self {
        self.render_mode = mode;
        self
    }

    /// Set an attribute unless one with the same name is already set.
    pub fn attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        self.attributes.entry(key).or_insert_with(|| value.into());
        self
    }

    /// Set an attribute, displacing any existing value. Used for the
    /// generated container id, which callers may not override.
    pub fn force_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Merge caller attributes; existing attributes win.
    pub fn merge_attributes(&mut self, attrs: &Attributes) -> &mut Self {
        for (key, value) in attrs.iter() {
            self.attribute(key, value);
        }
        self
    }

    /// Append pre-escaped HTML to the element body.
    pub fn append_html(&mut self, html: &str) -> &mut Self {
        self.inner_html.push_str(html);
        self
    }

    pub fn build(&self) -> Markup {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        match self.render_mode {
            TagRenderMode::SelfClosing => out.push_str(" />"),
            TagRenderMode::Normal => {
                out.push('>');
                out.push_str(&self.inner_html);
                out.push_str("</");
                out.push_str(self.tag);
                out.push('>');
            }
        }
        Markup::raw(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sorted_attributes_and_inner_html() {
        let mut tag = TagBuilder::new("div");
        tag.attribute("style", "width:10em");
        tag.attribute("class", "picker");
        tag.append_html("<span>x</span>");
        assert_eq!(
            tag.build().as_str(),
            r#"<div class="picker" style="width:10em"><span>x</span></div>"#
        );
    }

    #[test]
    fn self_closing_has_no_body() {
        let mut tag = TagBuilder::new("input");
        tag.render_mode(TagRenderMode::SelfClosing);
        tag.attribute("type", "hidden");
        assert_eq!(tag.build().as_str(), r#"<input type="hidden" />"#);
    }

    #[test]
    fn first_attribute_write_wins() {
        let mut tag = TagBuilder::new("div");
        tag.attribute("class", "first");
        tag.attribute("class", "second");
        assert_eq!(tag.build().as_str(), r#"<div class="first"></div>"#);
    }

    #[test]
    fn force_attribute_displaces() {
        let mut tag = TagBuilder::new("div");
        tag.attribute("id", "caller");
        tag.force_attribute("id", "generated");
        assert_eq!(tag.build().as_str(), r#"<div id="generated"></div>"#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut tag = TagBuilder::new("input");
        tag.render_mode(TagRenderMode::SelfClosing);
        tag.attribute("value", r#"a"b<c"#);
        assert_eq!(tag.build().as_str(), r#"<input value="a&quot;b&lt;c" />"#);
    }
}
