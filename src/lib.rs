//! A region-based arena allocator with a typed object pool layered on top.
//!
//! A [`Region`] is a chunked bump allocator: it hands out aligned,
//! unaligned, and growable allocations from a chain of backing blocks, runs
//! an ordered chain of teardown callbacks, and frees everything in bulk on
//! [`Region::release`]. There is no per-object free inside a bare region.
//!
//! [`Mempool<T>`][mempool::Mempool] builds per-object free on top of a
//! region: a typed pool of fixed-size `T` slots with a two-phase destructor
//! protocol (disabled until explicitly enabled, then run exactly once,
//! either on explicit [`mempool::destroy`] or implicitly when the owning
//! region is released).
//!
//! This crate is single-threaded by design: [`Region`] is not [`Sync`], and
//! is [`Send`] only through the explicit, documented opt-in in
//! [`global`]. Every invariant violation this crate checks for (zero-size
//! allocations, arithmetic overflow, double-destroying an object) is a
//! fatal, unrecoverable failure — see [`fatal`] — not a `Result` a caller
//! can examine and route around.
//!
//! ```
//! use memregion::Region;
//!
//! let mut region = Region::new();
//! let a = region.alloc(16);
//! let b = region.alloc_unaligned(3);
//! assert_ne!(a, b);
//! region.release();
//! ```

mod fatal;
pub mod global;
pub mod mempool;
pub mod region;

pub use global::get_global_region;
pub use mempool::Mempool;
pub use region::{ensure_capacity, Region};
