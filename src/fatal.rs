//! The fatal-failure channel.
//!
//! Every invariant violation in this crate (zero-size allocations,
//! arithmetic overflow, double-release of a pooled object) is terminal:
//! there is no recoverable error path inside the core. [`fail`] panics
//! with the documented, bit-exact message, which is the idiomatic analogue
//! of "print a message and exit non-zero" and plays nicely with
//! `std::panic::catch_unwind` for tests that need to assert on the exact
//! text.

/// Panics with `message`. Never returns.
///
/// All call sites pass one of the four documented, bit-exact failure
/// strings (see the module docs of [`crate::region`] and
/// [`crate::mempool`]).
#[cold]
#[inline(never)]
pub(crate) fn fail(message: &str) -> ! {
    panic!("{message}")
}

/// `"unable to allocate 0 bytes"`
pub(crate) const ZERO_SIZE_ALLOC: &str = "unable to allocate 0 bytes";

/// `"overflow calculating object size"`
pub(crate) const OVERFLOW: &str = "overflow calculating object size";

/// `"unable to create memory pool for allocating zero size objects"`
pub(crate) const ZERO_SIZE_POOL: &str =
    "unable to create memory pool for allocating zero size objects";

/// `"passed the same object to CR_DestroyObject() twice"`
pub(crate) const DOUBLE_DESTROY: &str = "passed the same object to CR_DestroyObject() twice";

/// Rounds `n` up to the next multiple of 8, failing with [`OVERFLOW`] if
/// that would exceed `usize::MAX`.
pub(crate) fn round_up_8_checked(n: usize) -> usize {
    n.checked_add(7)
        .map(|padded| padded & !7)
        .unwrap_or_else(|| fail(OVERFLOW))
}

/// Checked addition, failing with [`OVERFLOW`] on overflow.
pub(crate) fn checked_add(a: usize, b: usize) -> usize {
    a.checked_add(b).unwrap_or_else(|| fail(OVERFLOW))
}
