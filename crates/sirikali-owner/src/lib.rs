//! Scoped single-owner wrappers for arbitrary resources.
//!
//! # Architecture
//!
//! An [`Owned`] pairs a handle with the [`Release`] that returns it to the
//! system. It can be built two ways:
//!
//! - **Function pair**: [`Owned::acquire`] runs an acquire operation and binds
//!   the release to its result. A null-equivalent result (see [`Nullable`])
//!   leaves the owner empty and nothing is ever released.
//! - **Value plus release**: [`Owned::adopt`] wraps a handle produced
//!   elsewhere.
//!
//! [`Deferred`] is a release that submits the work to a [`ReleaseQueue`]
//! instead of running it inline, for objects that must be torn down from the
//! event loop. [`PendingReleases`] is a queue for single-threaded loops;
//! owners reach it through a [`ReleaseSender`].
//!
//! # Example
//!
//! ```
//! use std::fs::File;
//! use sirikali_owner::{DropRelease, Owned};
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("volume.conf");
//!
//! let mut config = Owned::try_acquire(|| File::create(&path), DropRelease)?;
//! assert!(!config.is_empty());
//!
//! let moved = config.transfer();
//! assert!(config.is_empty());
//! drop(moved);
//! # Ok::<(), std::io::Error>(())
//! ```

pub use deferred::{Deferred, PendingReleases, ReleaseQueue, ReleaseSender, ReleaseTask};
pub use owned::Owned;
pub use release::{DropRelease, Nullable, Release};

mod deferred;
mod owned;
mod release;
