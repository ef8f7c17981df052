//! The Count and the types that own it.
//!
//! A Count is a signed integer that starts at 0 and only ever moves by
//! exactly +1 or -1 per call. There is no setter and no reset. There is no
//! floor either, so the value may go negative. At the `i64` bounds the value
//! wraps around.
//!
//! Two owners are provided:
//! - [`Counter`] synchronizes the Count with an atomic integer, so
//!   concurrent callers never lose updates.
//! - [`LocalCounter`] keeps the Count in a [`Cell`] and is `!Sync`, which
//!   confines it to a single thread at compile time.

use std::{
    cell::Cell,
    sync::atomic::{AtomicI64, Ordering},
};

use strum::{Display, EnumIter};
use tracing::{debug, trace};

use crate::config::CounterConfig;

/// A mutating call on a Count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Increment,
    Decrement,
}

impl Operation {
    pub fn delta(self) -> i64 {
        match self {
            Operation::Increment => 1,
            Operation::Decrement => -1,
        }
    }
}

/// Read/increment/decrement capability over a Count.
pub trait CounterOps {
    /// Adds one and returns the new value.
    fn increment(&self) -> i64;

    /// Subtracts one and returns the new value.
    fn decrement(&self) -> i64;

    /// Current value. Never mutates.
    fn get_count(&self) -> i64;

    fn apply(&self, operation: Operation) -> i64 {
        match operation {
            Operation::Increment => self.increment(),
            Operation::Decrement => self.decrement(),
        }
    }

    /// Applies every operation in order and returns the final value.
    fn apply_all<I>(&self, operations: I) -> i64
    where
        I: IntoIterator<Item = Operation>,
        Self: Sized,
    {
        operations
            .into_iter()
            .fold(self.get_count(), |_, operation| self.apply(operation))
    }
}

/// Thread-safe owner of a Count.
///
/// The counter this crate models was written for a single-threaded runtime
/// and did no synchronization at all. Here every update is a single atomic
/// read-modify-write, which is stronger than that original contract.
#[derive(Debug)]
pub struct Counter {
    count: AtomicI64,
    config: CounterConfig,
}

impl Counter {
    pub fn new() -> Self {
        Self::with_config(CounterConfig::default())
    }

    pub fn with_config(config: CounterConfig) -> Self {
        debug!(label = %config.label, "counter created");
        Self {
            count: AtomicI64::new(0),
            config,
        }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn increment(&self) -> i64 {
        let value = self.count.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        record(&self.config, Operation::Increment, value);
        value
    }

    pub fn decrement(&self) -> i64 {
        let value = self.count.fetch_sub(1, Ordering::SeqCst).wrapping_sub(1);
        record(&self.config, Operation::Decrement, value);
        value
    }

    pub fn get_count(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterOps for Counter {
    fn increment(&self) -> i64 {
        Counter::increment(self)
    }

    fn decrement(&self) -> i64 {
        Counter::decrement(self)
    }

    fn get_count(&self) -> i64 {
        Counter::get_count(self)
    }
}

/// Single-threaded owner of a Count.
#[derive(Debug)]
pub struct LocalCounter {
    count: Cell<i64>,
    config: CounterConfig,
}

impl LocalCounter {
    pub fn new() -> Self {
        Self::with_config(CounterConfig::default())
    }

    pub fn with_config(config: CounterConfig) -> Self {
        debug!(label = %config.label, "local counter created");
        Self {
            count: Cell::new(0),
            config,
        }
    }

    fn step(&self, operation: Operation) -> i64 {
        let value = self.count.get().wrapping_add(operation.delta());
        self.count.set(value);
        record(&self.config, operation, value);
        value
    }
}

impl Default for LocalCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterOps for LocalCounter {
    fn increment(&self) -> i64 {
        self.step(Operation::Increment)
    }

    fn decrement(&self) -> i64 {
        self.step(Operation::Decrement)
    }

    fn get_count(&self) -> i64 {
        self.count.get()
    }
}

fn record(config: &CounterConfig, operation: Operation, value: i64) {
    if config.trace_operations {
        trace!(label = %config.label, %operation, value, "count changed");
    }
}
