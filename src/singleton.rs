//! The process-wide counter.
//!
//! [`counter`] is the module-level default: one [`CounterHandle`] over one
//! Count, created on first use and kept for the life of the process. The
//! free functions forward to it.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::{config::CounterConfig, counter::Counter, handle::CounterHandle};

const SINGLETON_LABEL: &str = "singleton";

lazy_static! {
    static ref COUNTER: CounterHandle = CounterHandle::new(Arc::new(Counter::with_config(
        CounterConfig::with_label(SINGLETON_LABEL)
    )));
}

pub fn counter() -> &'static CounterHandle {
    &COUNTER
}

pub fn increment() -> i64 {
    counter().increment()
}

pub fn decrement() -> i64 {
    counter().decrement()
}

pub fn get_count() -> i64 {
    counter().get_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only the identity of the handle is checked here; the value is global
    // and asserted in the integration tests, which own their process.
    #[test]
    fn test_counter_is_same_instance() {
        assert!(std::ptr::eq(counter(), counter()));
        assert!(counter().shares_count_with(&counter().clone()));
        assert_eq!(counter().label(), SINGLETON_LABEL);
    }
}
