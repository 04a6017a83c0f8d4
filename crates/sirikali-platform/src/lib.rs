//! Platform helpers: home directories and executable lookup.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use sirikali_platform::{Os, ResolverOptions, SearchResolver, TargetResolver};
//!
//! let options = ResolverOptions::for_os(Os::Unix).home("/home/alice");
//! let dirs = options.candidate_dirs();
//! assert_eq!(dirs.first(), Some(&PathBuf::from("/usr/local/bin/")));
//! assert_eq!(dirs.last(), Some(&PathBuf::from("/home/alice/.bin")));
//!
//! let resolver = SearchResolver::new(options);
//! assert_eq!(resolver.resolve("definitely-nonexistent-tool-xyz"), None);
//! ```

pub use error::{Error, Result};
pub use options::ResolverOptions;
pub use os::Os;
pub use resolver::{
    OverrideResolver, PairResolver, SearchResolver, TargetResolver, require, resolve, resolve_with,
};

pub mod dir;
mod error;
mod options;
pub mod os;
mod resolver;
