use crate::url::EffectiveUrls;
use serde_json::Error as JsonError;
use szn_domain::constants::BUNDLE_FACTORY;

const BUNDLED_PAYLOAD: &str = include_str!("../assets/embeddable_loader.js");

/// Inline loader payload.
///
/// The payload must define the global `makeSznSelectBundleScript(urls, async)` factory
/// returning a script element; the injected body calls it and appends the result.
///
/// The bundled payload is a minimal stand-in with guessed bundle file names. Deployments
/// should pass the `embeddableLoader.js` shipped with `@jurca/szn-select` through
/// [`EmbeddedLoader::new`].
#[derive(Debug, Clone)]
pub struct EmbeddedLoader {
    payload: String,
}

impl Default for EmbeddedLoader {
    fn default() -> Self {
        Self::new(BUNDLED_PAYLOAD)
    }
}

impl EmbeddedLoader {
    /// Uses `payload` instead of the bundled one, e.g. a vendored `embeddableLoader.js`.
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Body of the inline script.
    ///
    /// # Errors
    /// Fails if the URL map cannot be serialized.
    pub fn script_body(&self, urls: &EffectiveUrls, asynchronous: bool) -> Result<String, JsonError> {
        // `<` is escaped so no URL can close the surrounding script element.
        let urls = serde_json::to_string(urls)?.replace('<', "\\u003c");
        Ok(format!(
            "{payload}\ndocument.head.appendChild({BUNDLE_FACTORY}({urls}, {asynchronous}));\n",
            payload = self.payload.trim_end(),
        ))
    }
}
