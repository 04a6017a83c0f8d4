//! Utility toolbox for the SiriKali front end.
//!
//! - [`owner`]: single-owner wrappers that release a handle exactly once,
//!   optionally through an event-loop queue.
//! - [`unpack`]: positional unpacking of string sequences into typed tuples.
//! - [`platform`]: home directories and executable lookup.

pub use sirikali_owner as owner;
pub use sirikali_platform as platform;
pub use sirikali_unpack as unpack;

pub use sirikali_owner::{
    Deferred, DropRelease, Owned, PendingReleases, Release, ReleaseQueue, ReleaseSender,
};
pub use sirikali_platform::{ResolverOptions, TargetResolver, resolve, resolve_with};
