use crate::embedded::EmbeddedLoader;
use crate::error::{LoaderError, LoaderErrorExt};
use crate::latch::LoadLatch;
use crate::url::{EffectiveUrls, resolve_urls};
use szn_domain::constants::DEFAULT_PACKAGE_URL;
use szn_domain::loader::LoaderOptions;
use szn_domain::script::ScriptTag;
use szn_kernel::host::HostDocument;
use tracing::{debug, info, trace};

/// What a call to [`LoaderBootstrapper::bootstrap`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Another instance already started loading; nothing was injected.
    AlreadyStarted,
    /// This call won the latch but loading is disabled.
    Disabled,
    /// The inline loader was appended to the head.
    Embedded,
    /// A script referencing the remote loader was appended to the head.
    Remote { src: String },
}

impl BootstrapOutcome {
    #[must_use]
    pub const fn injected(&self) -> bool {
        matches!(self, Self::Embedded | Self::Remote { .. })
    }
}

/// Gets the element implementation onto the page at most once per [`LoadLatch`].
///
/// ```rust
/// use szn_dom::MemoryDocument;
/// use szn_domain::loader::LoaderOptions;
/// use szn_loader::{BootstrapOutcome, LoadLatch, LoaderBootstrapper};
///
/// let bootstrapper = LoaderBootstrapper::builder()
///     .document(MemoryDocument::new())
///     .latch(LoadLatch::new())
///     .build();
///
/// let first = bootstrapper.bootstrap(&LoaderOptions::default()).unwrap();
/// assert!(matches!(first, BootstrapOutcome::Remote { .. }));
/// assert_eq!(bootstrapper.bootstrap(&LoaderOptions::default()).unwrap(), BootstrapOutcome::AlreadyStarted);
/// ```
#[derive(Debug)]
pub struct LoaderBootstrapper<D> {
    document: D,
    latch: LoadLatch,
    default_package_url: String,
    embedded: EmbeddedLoader,
}

#[derive(Debug)]
pub struct NoDocument;
#[derive(Debug)]
pub struct WithDocument<D>(D);

mod private {
    pub trait Sealed {}
}
impl private::Sealed for NoDocument {}
impl<D> private::Sealed for WithDocument<D> {}

/// Builder for [`LoaderBootstrapper`]. A document must be set before [`BootstrapperBuilder::build`].
#[derive(Debug)]
pub struct BootstrapperBuilder<S: private::Sealed = NoDocument> {
    document: S,
    latch: Option<LoadLatch>,
    default_package_url: String,
    embedded: EmbeddedLoader,
}

impl LoaderBootstrapper<()> {
    #[must_use]
    pub fn builder() -> BootstrapperBuilder<NoDocument> {
        BootstrapperBuilder {
            document: NoDocument,
            latch: None,
            default_package_url: DEFAULT_PACKAGE_URL.to_owned(),
            embedded: EmbeddedLoader::default(),
        }
    }
}

impl<S: private::Sealed> BootstrapperBuilder<S> {
    /// Latch to share with other bootstrappers. Defaults to [`LoadLatch::global`].
    #[must_use]
    pub fn latch(mut self, latch: LoadLatch) -> Self {
        self.latch = Some(latch);
        self
    }

    /// Package URL used when the options carry no `package` override.
    #[must_use]
    pub fn default_package_url(mut self, url: impl Into<String>) -> Self {
        self.default_package_url = url.into();
        self
    }

    #[must_use]
    pub fn embedded_loader(mut self, loader: EmbeddedLoader) -> Self {
        self.embedded = loader;
        self
    }
}

impl BootstrapperBuilder<NoDocument> {
    /// Document the loader script is appended to.
    pub fn document<D: HostDocument>(self, document: D) -> BootstrapperBuilder<WithDocument<D>> {
        BootstrapperBuilder {
            document: WithDocument(document),
            latch: self.latch,
            default_package_url: self.default_package_url,
            embedded: self.embedded,
        }
    }
}

impl<D: HostDocument> BootstrapperBuilder<WithDocument<D>> {
    pub fn build(self) -> LoaderBootstrapper<D> {
        LoaderBootstrapper {
            document: self.document.0,
            latch: self.latch.unwrap_or_else(LoadLatch::global),
            default_package_url: self.default_package_url,
            embedded: self.embedded,
        }
    }
}

impl<D: HostDocument> LoaderBootstrapper<D> {
    #[must_use]
    pub const fn latch(&self) -> &LoadLatch {
        &self.latch
    }

    /// Starts loading the element implementation unless some instance already did.
    ///
    /// The first caller takes the latch whatever `options` say, so options passed by later
    /// callers are never honored. The latch stays taken when the injection fails.
    ///
    /// # Errors
    /// [`LoaderError::Host`] if the document refuses the script.
    pub fn bootstrap(&self, options: &LoaderOptions) -> Result<BootstrapOutcome, LoaderError> {
        if !self.latch.try_start() {
            trace!("Loading already started, skipping bootstrap");
            return Ok(BootstrapOutcome::AlreadyStarted);
        }
        trace!("Load latch taken");

        if !options.enable {
            debug!("Loading the szn-select implementation is disabled");
            return Ok(BootstrapOutcome::Disabled);
        }

        let urls = resolve_urls(&options.urls, &self.default_package_url);
        if options.use_embedded_loader {
            self.inject_embedded(&urls, options.use_async_loading)
        } else {
            self.inject_remote(&urls, options.use_async_loading)
        }
    }

    fn inject_embedded(&self, urls: &EffectiveUrls, asynchronous: bool) -> Result<BootstrapOutcome, LoaderError> {
        let body = self
            .embedded
            .script_body(urls, asynchronous)
            .map_err(|e| LoaderError::from(format!("Failed to serialize loader URLs: {e}")))?;

        self.document.append_to_head(&ScriptTag::inline(body)).context("Failed to inject embedded loader")?;
        info!(package = urls.package(), asynchronous, "Embedded szn-select loader injected");
        Ok(BootstrapOutcome::Embedded)
    }

    fn inject_remote(&self, urls: &EffectiveUrls, asynchronous: bool) -> Result<BootstrapOutcome, LoaderError> {
        let src = urls.loader_url();
        let script = urls
            .data_attributes()
            .fold(ScriptTag::remote(src.clone(), asynchronous), |script, (name, url)| {
                script.with_attribute(name, url)
            });

        self.document.append_to_head(&script).context("Failed to inject remote loader")?;
        info!(src = %src, asynchronous, "Remote szn-select loader injected");
        Ok(BootstrapOutcome::Remote { src })
    }
}
