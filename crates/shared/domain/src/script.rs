use serde::Serialize;
use std::collections::BTreeMap;

/// Where a script's code comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ScriptSource {
    /// Inline body, executed without a network request.
    Inline(String),
    /// `src` URL fetched by the browser.
    Remote(String),
}

/// A `<script>` element to be appended to the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptTag {
    pub source: ScriptSource,
    pub asynchronous: bool,
    pub attributes: BTreeMap<String, String>,
}

impl ScriptTag {
    #[must_use]
    pub const fn inline(body: String) -> Self {
        Self { source: ScriptSource::Inline(body), asynchronous: false, attributes: BTreeMap::new() }
    }

    #[must_use]
    pub const fn remote(src: String, asynchronous: bool) -> Self {
        Self { source: ScriptSource::Remote(src), asynchronous, attributes: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match &self.source {
            ScriptSource::Remote(src) => Some(src),
            ScriptSource::Inline(_) => None,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match &self.source {
            ScriptSource::Inline(body) => Some(body),
            ScriptSource::Remote(_) => None,
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
