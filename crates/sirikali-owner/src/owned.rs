use crate::release::{Nullable, Release};
use std::fmt;

/// Single owner of a handle and the release bound to it.
///
/// The release runs exactly once, when the owner is dropped or explicitly
/// released. An owner whose acquisition produced nothing, or whose handle was
/// transferred away, is empty and its drop does nothing.
pub struct Owned<H, R>
where
    R: Release<H>,
{
    handle:  Option<H>,
    release: Option<R>,
}

impl<H, R> Owned<H, R>
where
    R: Release<H>,
{
    /// Runs `acquire` and binds `release` to whatever it produced.
    ///
    /// ```
    /// use sirikali_owner::Owned;
    ///
    /// fn open(value: i32) -> *mut i32 { Box::into_raw(Box::new(value)) }
    /// fn close(ptr: *mut i32) { drop(unsafe { Box::from_raw(ptr) }) }
    ///
    /// let owner = Owned::acquire(|| open(7), close);
    /// assert_eq!(unsafe { **owner.get().unwrap() }, 7);
    /// ```
    pub fn acquire<F, N>(acquire: F, release: R) -> Self
    where
        F: FnOnce() -> N,
        N: Nullable<Handle = H>,
    {
        Self::bind(acquire(), release)
    }

    /// Function-pair form of [`Owned::acquire`]: calls `acquire(args)`.
    pub fn acquire_with<F, A, N>(acquire: F, args: A, release: R) -> Self
    where
        F: FnOnce(A) -> N,
        N: Nullable<Handle = H>,
    {
        Self::bind(acquire(args), release)
    }

    /// Like [`Owned::acquire`] for acquire operations that fail with an error.
    ///
    /// The error is returned as is and nothing is released.
    pub fn try_acquire<F, N, E>(acquire: F, release: R) -> Result<Self, E>
    where
        F: FnOnce() -> Result<N, E>,
        N: Nullable<Handle = H>,
    {
        acquire().map(|n| Self::bind(n, release))
    }

    /// Takes ownership of a handle produced elsewhere.
    pub fn adopt<N>(handle: N, release: R) -> Self
    where
        N: Nullable<Handle = H>,
    {
        Self::bind(handle, release)
    }

    /// An owner holding nothing.
    pub fn empty() -> Self {
        Self {
            handle:  None,
            release: None,
        }
    }

    fn bind<N>(handle: N, release: R) -> Self
    where
        N: Nullable<Handle = H>,
    {
        match handle.into_handle() {
            Some(handle) => Self {
                handle:  Some(handle),
                release: Some(release),
            },
            None => {
                tracing::trace!("acquire produced no handle");
                Self::empty()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handle.is_none()
    }

    pub fn get(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut H> {
        self.handle.as_mut()
    }

    /// Moves the handle and its release into a new owner, leaving `self` empty.
    pub fn transfer(&mut self) -> Self {
        Self {
            handle:  self.handle.take(),
            release: self.release.take(),
        }
    }

    /// Releases the handle now. Returns `false` if there was nothing to release.
    pub fn release(&mut self) -> bool {
        match (self.handle.take(), self.release.take()) {
            (Some(handle), Some(release)) => {
                tracing::trace!(handle = std::any::type_name::<H>(), "releasing handle");
                release.release(handle);
                true
            }
            _ => false,
        }
    }

    /// Gives the handle back without releasing it.
    pub fn into_inner(mut self) -> Option<H> {
        self.release = None;
        self.handle.take()
    }
}

impl<T, R> Owned<Box<T>, R>
where
    R: Release<Box<T>>,
{
    /// Allocates `value` and owns the allocation.
    pub fn boxed(value: T, release: R) -> Self {
        Self::adopt(Box::new(value), release)
    }
}

impl<H, R> Default for Owned<H, R>
where
    R: Release<H>,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<H, R> Drop for Owned<H, R>
where
    R: Release<H>,
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<H, R> fmt::Debug for Owned<H, R>
where
    H: fmt::Debug,
    R: Release<H>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owned")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
