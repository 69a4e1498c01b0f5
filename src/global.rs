//! The process-wide global region.
//!
//! A single [`Region`] lazily created on first use and torn down exactly
//! once, via a [`ctor`]-crate exit hook, when the process exits. This is the
//! idiomatic analogue of the original's "lazily created on first use,
//! registers a process-exit hook that releases it" global region.
//!
//! [`Region`] is deliberately not [`Sync`] (nothing about it is safe to
//! touch from two threads at once) and not [`Send`] either, by default.
//! Storing one inside a `static` requires a [`Mutex`] wrapper to satisfy
//! `Sync`, which in turn requires `Region: Send`. The `unsafe impl` below is
//! the one, explicit, documented opt-in this crate makes for that purpose;
//! it does not make `Region` safe to use from multiple threads
//! concurrently, only safe to *relocate* to whichever single thread happens
//! to call [`get_global_region`] first.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::region::Region;

// SAFETY: `Region`'s only non-`Send` ingredients are the raw pointers used
// internally for bump allocation and intrusive linked lists; none of them
// are ever read or written except through a `&mut Region` (guarded here by
// a `Mutex`), so moving a whole `Region` to another thread is sound. This
// does not grant concurrent access: the crate remains single-threaded by
// design, and using a `Region` from two threads at once, even serialized
// through this mutex, is still undefined behavior per the crate's
// non-goals.
unsafe impl Send for Region {}

static GLOBAL: OnceLock<Mutex<Option<Region>>> = OnceLock::new();

/// A locked handle to the global region, obtained from
/// [`get_global_region`]. Derefs to [`Region`] for the duration of the
/// borrow.
pub struct GlobalRegionGuard(MutexGuard<'static, Option<Region>>);

impl Deref for GlobalRegionGuard {
    type Target = Region;

    fn deref(&self) -> &Region {
        self.0
            .as_ref()
            .expect("global region accessed after process-exit release")
    }
}

impl DerefMut for GlobalRegionGuard {
    fn deref_mut(&mut self) -> &mut Region {
        self.0
            .as_mut()
            .expect("global region accessed after process-exit release")
    }
}

/// Returns a locked handle to the process-wide global region, creating it
/// on first call.
///
/// The returned guard holds the lock for as long as it is alive; the lock
/// exists only to let this live behind a `static`, not to arbitrate real
/// contention, since the crate is single-threaded by design.
pub fn get_global_region() -> GlobalRegionGuard {
    let mutex = GLOBAL.get_or_init(|| Mutex::new(Some(Region::new())));
    let guard = mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    GlobalRegionGuard(guard)
}

/// Releases the global region, if it was ever created, running every
/// callback attached to it in LIFO order. Registered once as a process-exit
/// hook; never called directly.
#[ctor::dtor]
fn release_global_region() {
    if let Some(mutex) = GLOBAL.get() {
        let mut guard = mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(region) = guard.take() {
            region.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_region_is_reachable_and_allocates() {
        let mut region = get_global_region();
        let ptr = region.alloc(16);
        assert_eq!(ptr.as_ptr() as usize % 8, 0);
    }
}
