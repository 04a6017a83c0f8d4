//! Release operations and acquire results.

/// Returns a handle's resource to the system.
///
/// `release` takes `self` by value, so a bound release can run at most once.
/// Every `FnOnce(H)` is a release, which covers plain function items such as
/// a C-style `close`.
pub trait Release<H> {
    fn release(self, handle: H);
}

impl<H, F> Release<H> for F
where
    F: FnOnce(H),
{
    fn release(self, handle: H) {
        self(handle)
    }
}

/// Release that drops the handle in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropRelease;

impl<H> Release<H> for DropRelease {
    fn release(self, handle: H) {
        drop(handle);
    }
}

/// Result of an acquire operation that may have produced nothing.
///
/// The null-equivalent value (a null pointer, `None`) maps to `None` and
/// leaves the owner empty.
pub trait Nullable {
    type Handle;

    fn into_handle(self) -> Option<Self::Handle>;
}

impl<T> Nullable for Option<T> {
    type Handle = T;

    fn into_handle(self) -> Option<T> {
        self
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Handle = *mut T;

    fn into_handle(self) -> Option<*mut T> {
        (!self.is_null()).then_some(self)
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Handle = *const T;

    fn into_handle(self) -> Option<*const T> {
        (!self.is_null()).then_some(self)
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    type Handle = Box<T>;

    fn into_handle(self) -> Option<Box<T>> {
        Some(self)
    }
}

impl Nullable for std::fs::File {
    type Handle = std::fs::File;

    fn into_handle(self) -> Option<std::fs::File> {
        Some(self)
    }
}
