//! # Loader
//!
//! Puts the `<szn-select>` implementation onto the page exactly once, however many
//! components mount.
//!
//! * [`LoadLatch`]: the page-wide one-way "loading started" flag.
//! * [`resolve_urls`]: per-resource URL overrides merged over the default package URL.
//! * [`LoaderBootstrapper`]: takes the latch and injects either the inline
//!   [`EmbeddedLoader`] or a script referencing the remote loader.

mod bootstrap;
mod embedded;
mod error;
mod latch;
mod url;

pub use bootstrap::{BootstrapOutcome, BootstrapperBuilder, LoaderBootstrapper, NoDocument, WithDocument};
pub use embedded::EmbeddedLoader;
pub use error::{LoaderError, LoaderErrorExt};
pub use latch::LoadLatch;
pub use url::{EffectiveUrls, data_attribute_name, resolve_urls};
