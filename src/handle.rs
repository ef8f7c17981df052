//! The frozen counter handle.
//!
//! A [`CounterHandle`] fixes the set of operations exposed over a Count:
//! `increment`, `decrement` and `get_count`. It has no public fields and no
//! `&mut self` methods, so nothing can be added, removed or swapped once it
//! exists. The shape is frozen, the Count behind it is not.
//!
//! Reassigning the bound counter does not compile:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use frozen_counter::{Counter, CounterHandle};
//!
//! let mut handle = CounterHandle::detached();
//! handle.counter = Arc::new(Counter::new());
//! ```
//!
//! Neither does calling an operation the handle never exposed:
//!
//! ```compile_fail
//! use frozen_counter::CounterHandle;
//!
//! let handle = CounterHandle::detached();
//! handle.reset();
//! ```

use std::sync::Arc;

use crate::counter::{Counter, CounterOps};

#[derive(Debug, Clone)]
pub struct CounterHandle {
    counter: Arc<Counter>,
}

impl CounterHandle {
    pub fn new(counter: Arc<Counter>) -> Self {
        Self { counter }
    }

    /// A handle over a fresh counter that nothing else references.
    pub fn detached() -> Self {
        Self::new(Arc::new(Counter::new()))
    }

    pub fn increment(&self) -> i64 {
        self.counter.increment()
    }

    pub fn decrement(&self) -> i64 {
        self.counter.decrement()
    }

    pub fn get_count(&self) -> i64 {
        self.counter.get_count()
    }

    pub fn label(&self) -> &str {
        &self.counter.config().label
    }

    pub fn shares_count_with(&self, other: &CounterHandle) -> bool {
        Arc::ptr_eq(&self.counter, &other.counter)
    }
}

impl CounterOps for CounterHandle {
    fn increment(&self) -> i64 {
        CounterHandle::increment(self)
    }

    fn decrement(&self) -> i64 {
        CounterHandle::decrement(self)
    }

    fn get_count(&self) -> i64 {
        CounterHandle::get_count(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::CounterConfig;

    #[test]
    fn test_detached_handle_starts_at_zero() {
        let handle = CounterHandle::detached();
        assert_eq!(handle.get_count(), 0);
        assert_eq!(handle.label(), "counter");
    }

    #[test]
    fn test_clones_share_count() {
        let handle = CounterHandle::detached();
        let other = handle.clone();

        assert_eq!(handle.increment(), 1);
        assert_eq!(other.increment(), 2);
        assert_eq!(other.decrement(), 1);
        assert_eq!(handle.get_count(), 1);
        assert!(handle.shares_count_with(&other));
    }

    #[test]
    fn test_detached_handles_are_independent() {
        let a = CounterHandle::detached();
        let b = CounterHandle::detached();

        a.increment();
        assert_eq!(b.get_count(), 0);
        assert!(!a.shares_count_with(&b));
    }

    #[test]
    fn test_handle_over_existing_counter() {
        let counter = Arc::new(Counter::with_config(CounterConfig::with_label("shared")));
        let handle = CounterHandle::new(counter.clone());

        counter.increment();
        assert_eq!(handle.get_count(), 1);
        assert_eq!(handle.decrement(), 0);
        assert_eq!(counter.get_count(), 0);
        assert_eq!(handle.label(), "shared");
    }

    #[test]
    fn test_handle_through_trait() {
        fn bump(ops: &impl CounterOps) -> i64 {
            ops.increment()
        }

        let handle = CounterHandle::detached();
        assert_eq!(bump(&handle), 1);
        assert_eq!(bump(&handle), 2);
        assert_eq!(CounterOps::get_count(&handle), 2);
    }
}
