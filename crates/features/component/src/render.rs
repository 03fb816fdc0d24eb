//! Markup produced by the bridge component.

use std::fmt::{self, Write as _};
use tracing::debug;
use szn_domain::attributes::EffectiveAttributes;
use szn_domain::constants::{ELEMENT_TAG, UI_CONTAINER_ATTRIBUTE};
use szn_domain::props::SelectProps;

/// A node of rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attributes: Vec::new(), children: Vec::new() }
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, value)| value.as_str())
    }

    /// First direct child element with `tag`.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&Self> {
        self.children.iter().find_map(|child| match child {
            Markup::Element(element) if element.tag == tag => Some(element),
            _ => None,
        })
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Markup {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// HTML serialization with escaped text and attribute values.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => escape(f, text, false),
            Self::Element(element) => {
                write!(f, "<{}", element.tag)?;
                for (name, value) in &element.attributes {
                    if !is_valid_attribute_name(name) {
                        debug!(name = %name, "Attribute with an invalid name skipped");
                        continue;
                    }
                    write!(f, " {name}=\"")?;
                    escape(f, value, true)?;
                    f.write_char('"')?;
                }
                f.write_char('>')?;
                for child in &element.children {
                    child.fmt(f)?;
                }
                write!(f, "</{}>", element.tag)
            },
        }
    }
}

/// Whether `name` can be serialized as an HTML attribute name.
///
/// Rejects what `setAttribute` rejects: the empty name, whitespace, control characters,
/// quotes, `>`, `/` and `=`.
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'))
}

fn escape(f: &mut fmt::Formatter<'_>, text: &str, attribute: bool) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if attribute => f.write_str("&quot;")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Builds the component markup.
///
/// The root carries nothing but `attributes`. Loader options and property-only knobs are
/// never rendered.
#[must_use]
pub fn render(props: &SelectProps, attributes: &EffectiveAttributes, slot: Vec<Markup>) -> Markup {
    let root = attributes.iter().fold(Element::new(ELEMENT_TAG), |root, (name, value)| root.attribute(name, value));

    let mut select = Element::new("select");
    if let Some(name) = &props.name {
        select = select.attribute("name", name);
    }
    if let Some(id) = &props.id {
        select = select.attribute("id", id);
    }
    if props.multiple {
        select = select.attribute("multiple", "");
    }
    if props.disabled {
        select = select.attribute("disabled", "");
    }
    if let Some(label) = &props.aria_label {
        select = select.attribute("aria-label", label);
    }

    root.children([select.children(slot).into(), Element::new("span").attribute(UI_CONTAINER_ATTRIBUTE, "").into()])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use szn_domain::loader::LoaderOptions;

    fn option(value: &str, label: &str) -> Markup {
        Element::new("option").attribute("value", value).children([Markup::text(label)]).into()
    }

    #[test]
    fn renders_the_wrapper_structure() {
        let props = SelectProps::new().with_name("country").multiple(true).with_aria_label("Country");
        let attributes: EffectiveAttributes = [("data-szn-select--state", "open")].into_iter().collect();

        let html = render(&props, &attributes, vec![option("cz", "Czechia")]).to_html();
        assert_eq!(
            html,
            concat!(
                r#"<szn-select data-szn-select--state="open">"#,
                r#"<select name="country" multiple="" aria-label="Country">"#,
                r#"<option value="cz">Czechia</option>"#,
                "</select>",
                r#"<span data-szn-select--ui=""></span>"#,
                "</szn-select>",
            )
        );
    }

    #[test]
    fn loader_options_and_knobs_are_never_rendered() {
        let props = SelectProps::new()
            .with_loader_options(LoaderOptions::default().embedded(true))
            .with_min_bottom_space(120.0)
            .with_dropdown_class_name("wide");

        let html = render(&props, &EffectiveAttributes::default(), Vec::new()).to_html();
        assert!(!html.contains("loader"), "{html}");
        assert!(!html.contains("120"), "{html}");
        assert!(!html.contains("wide"), "{html}");
        assert!(html.starts_with("<szn-select><select></select>"));
    }

    #[test]
    fn invalid_attribute_names_are_skipped() {
        let attributes: EffectiveAttributes = [
            (r#"x"><script>alert(1)</script><i a=""#, "v"),
            ("", "empty"),
            ("data a", "space"),
            ("data-ok", "kept"),
        ]
        .into_iter()
        .collect();

        let html = render(&SelectProps::new(), &attributes, Vec::new()).to_html();
        assert!(html.starts_with(r#"<szn-select data-ok="kept"><select>"#), "{html}");
        assert!(!html.contains("<script>"), "{html}");
    }

    #[test]
    fn attribute_name_rules() {
        for valid in ["data-szn-select--state", "aria-hidden", "x:y", "tabindex"] {
            assert!(is_valid_attribute_name(valid), "{valid}");
        }
        for invalid in ["", "a b", "a\tb", "a\"", "a'", "a>", "a/", "a=", "a\u{7}"] {
            assert!(!is_valid_attribute_name(invalid), "{invalid:?}");
        }
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let markup: Markup = Element::new("option")
            .attribute("title", r#"a "quoted" <b> & c"#)
            .children([Markup::text("1 < 2 & \"3\"")])
            .into();

        assert_eq!(
            markup.to_html(),
            r#"<option title="a &quot;quoted&quot; &lt;b&gt; &amp; c">1 &lt; 2 &amp; "3"</option>"#
        );
    }
}
