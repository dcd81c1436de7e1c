//! Overlays and the background scroll lock
//!
//! Any number of overlays may be open at once (a modal can open another
//! modal). The background stays non-scrollable while at least one of them
//! is open and becomes scrollable again once the last one closes, in any
//! closing order.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reference-counted "background scroll suspended" flag.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holds: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a hold. Scrolling stays suspended until the guard is dropped.
    #[must_use = "dropping the guard releases the hold immediately"]
    pub fn acquire(&self) -> ScrollGuard {
        if self.holds.fetch_add(1, Ordering::SeqCst) == 0 {
            log::trace!("Background scroll suspended");
        }
        ScrollGuard {
            holds: Arc::clone(&self.holds),
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.depth() > 0
    }

    /// Number of live holds.
    pub fn depth(&self) -> usize {
        self.holds.load(Ordering::SeqCst)
    }
}

/// One hold on a [`ScrollLock`]; released on drop.
#[derive(Debug)]
pub struct ScrollGuard {
    holds: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        if self.holds.fetch_sub(1, Ordering::SeqCst) == 1 {
            log::trace!("Background scroll restored");
        }
    }
}

/// An overlay slot owned by the component that opens it.
///
/// While open it holds the scroll lock; closing (or dropping the slot)
/// releases it.
#[derive(Debug)]
pub struct Overlay<T> {
    content: Option<T>,
    guard: Option<ScrollGuard>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self {
            content: None,
            guard: None,
        }
    }
}

impl<T> Overlay<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with `content`. Re-opening replaces the content and keeps the
    /// existing hold.
    pub fn open(&mut self, content: T, lock: &ScrollLock) {
        if self.guard.is_none() {
            self.guard = Some(lock.acquire());
        }
        self.content = Some(content);
    }

    /// Close and hand back the content, if it was open.
    pub fn close(&mut self) -> Option<T> {
        self.guard = None;
        self.content.take()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut T> {
        self.content.as_mut()
    }
}
