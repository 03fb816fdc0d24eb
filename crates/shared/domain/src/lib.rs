//! # Domain Models
//!
//! Plain data shared by every bridge crate: loader options, URL keys, attribute sets,
//! component props and injected-script descriptors.
//! Keep it lean: `serde` only, no I/O and no behavior beyond simple accessors.

pub mod attributes;
pub mod constants;
pub mod loader;
pub mod props;
pub mod script;
