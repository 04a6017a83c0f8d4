//! Deferred release through an event-loop queue.
//!
//! Some objects must not be torn down from arbitrary call contexts, for
//! example from inside their own event handlers. [`Deferred`] hands the
//! release to a [`ReleaseQueue`] that runs it later at a safe point.

use crate::owned::Owned;
use crate::release::{DropRelease, Nullable, Release};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// A release packaged with its handle, waiting to run.
pub type ReleaseTask = Box<dyn FnOnce()>;

/// Queue that runs release tasks at a later point.
pub trait ReleaseQueue {
    fn submit(&self, task: ReleaseTask);
}

impl<Q> ReleaseQueue for &Q
where
    Q: ReleaseQueue + ?Sized,
{
    fn submit(&self, task: ReleaseTask) {
        (**self).submit(task)
    }
}

/// Release that submits the inner release `R` to queue `Q`.
#[derive(Debug, Clone)]
pub struct Deferred<Q, R = DropRelease> {
    queue:   Q,
    release: R,
}

impl<Q> Deferred<Q> {
    pub fn new(queue: Q) -> Self {
        Self {
            queue,
            release: DropRelease,
        }
    }
}

impl<Q, R> Deferred<Q, R> {
    pub fn with_release(queue: Q, release: R) -> Self {
        Self { queue, release }
    }
}

impl<H, Q, R> Release<H> for Deferred<Q, R>
where
    H: 'static,
    Q: ReleaseQueue,
    R: Release<H> + 'static,
{
    fn release(self, handle: H) {
        let Self { queue, release } = self;
        tracing::trace!(handle = std::any::type_name::<H>(), "deferring release");
        queue.submit(Box::new(move || release.release(handle)));
    }
}

impl<H, Q> Owned<H, Deferred<Q>>
where
    H: 'static,
    Q: ReleaseQueue,
{
    /// Takes ownership of `handle`; dropping it is left to `queue`.
    pub fn adopt_deferred<N>(handle: N, queue: Q) -> Self
    where
        N: Nullable<Handle = H>,
    {
        Self::adopt(handle, Deferred::new(queue))
    }
}

impl<T, Q> Owned<Box<T>, Deferred<Q>>
where
    T: 'static,
    Q: ReleaseQueue,
{
    /// Allocates `value`; freeing it is left to `queue`.
    pub fn deferred(value: T, queue: Q) -> Self {
        Self::adopt_deferred(Box::new(value), queue)
    }
}

/// Single-threaded release queue driven by its owner's event loop.
///
/// The loop keeps the queue; owners get a [`ReleaseSender`]. Tasks still
/// queued when the queue is dropped run at that point, and anything a
/// sender submits after that runs immediately.
///
/// ```
/// use sirikali_owner::{Owned, PendingReleases};
///
/// let queue = PendingReleases::new();
/// let owner = Owned::deferred(String::from("dialog"), queue.sender());
/// drop(owner);
/// assert_eq!(queue.len(), 1);
/// assert_eq!(queue.run_pending(), 1);
/// assert!(queue.is_empty());
/// ```
#[derive(Default)]
pub struct PendingReleases {
    inner: Rc<Pending>,
}

#[derive(Default)]
struct Pending {
    tasks: RefCell<VecDeque<ReleaseTask>>,
}

impl Pending {
    fn push(&self, task: ReleaseTask) {
        self.tasks.borrow_mut().push_back(task);
    }

    fn run(&self) -> usize {
        let mut ran = 0;
        loop {
            let task = self.tasks.borrow_mut().pop_front();
            let Some(task) = task else { break };
            task();
            ran += 1;
        }
        if ran > 0 {
            tracing::trace!(ran, "ran deferred releases");
        }
        ran
    }
}

impl Drop for Pending {
    fn drop(&mut self) {
        self.run();
    }
}

impl PendingReleases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for owners. It does not keep the queue alive.
    pub fn sender(&self) -> ReleaseSender {
        ReleaseSender {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs queued tasks until none are left, including tasks queued by the
    /// tasks themselves. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        self.inner.run()
    }
}

impl ReleaseQueue for PendingReleases {
    fn submit(&self, task: ReleaseTask) {
        self.inner.push(task);
    }
}

impl fmt::Debug for PendingReleases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingReleases")
            .field("pending", &self.len())
            .finish()
    }
}

/// Submits to a [`PendingReleases`] without owning it.
#[derive(Debug, Clone)]
pub struct ReleaseSender {
    inner: Weak<Pending>,
}

impl ReleaseSender {
    /// Whether the queue is still there to accept tasks.
    pub fn is_connected(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl ReleaseQueue for ReleaseSender {
    fn submit(&self, task: ReleaseTask) {
        match self.inner.upgrade() {
            Some(pending) => pending.push(task),
            None => {
                tracing::trace!("release queue is gone; releasing inline");
                task();
            }
        }
    }
}
