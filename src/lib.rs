//! # frozen-counter: one shared Count behind a fixed-shape handle
//!
//! The crate provides a single process-wide signed counter that can only be
//! reached through three operations: increment, decrement and read.
//!
//! ## Layers
//!
//! - Count ownership ([`counter`](mod@counter)): [`Counter`] for shared use across
//!   threads, [`LocalCounter`] for single-threaded use, and the
//!   [`CounterOps`] trait both implement.
//! - Frozen handle ([`handle`]): [`CounterHandle`] exposes exactly the three
//!   operations. Its shape cannot change after construction, while the Count
//!   behind it keeps changing.
//! - Process-wide default ([`singleton`]): [`counter()`] returns the one
//!   handle every caller shares.
//!
//! ## Example
//!
//! ```
//! use frozen_counter::CounterHandle;
//!
//! let handle = CounterHandle::detached();
//! assert_eq!(handle.increment(), 1);
//! assert_eq!(handle.decrement(), 0);
//! assert_eq!(handle.decrement(), -1);
//! assert_eq!(handle.get_count(), -1);
//! ```
//!
//! Configuration ([`config`]) only affects how the counter logs. The Count
//! always starts at 0.

pub mod config;
pub mod counter;
pub mod error;
pub mod handle;
pub mod singleton;

// Re-exports
pub use config::CounterConfig;
pub use counter::{Counter, CounterOps, LocalCounter, Operation};
pub use error::*;
pub use handle::CounterHandle;
pub use singleton::counter;
