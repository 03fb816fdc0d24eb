//! # Host pages
//!
//! Implementations of the kernel host seams.
//!
//! * [`MemoryDocument`] / [`MemoryElement`]: an in-memory page used by tests, the demo and
//!   server-side rendering.
//! * `WebDocument` / `WebSelectElement` (feature `web`): the live browser page via `web-sys`.

mod memory;
#[cfg(feature = "web")]
mod web;

pub use memory::{CountingScheduler, MemoryDocument, MemoryElement};
#[cfg(feature = "web")]
pub use web::{WebDocument, WebSelectElement};
