//! The process-wide counter is global, so everything that observes its value
//! lives in a single test to keep the sequence deterministic.

use frozen_counter::{counter, singleton};
use pretty_assertions::assert_eq;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[test]
fn test_singleton_lifecycle() {
    assert_eq!(singleton::get_count(), 0);

    assert_eq!(singleton::increment(), 1);
    assert_eq!(counter().increment(), 2);
    assert_eq!(singleton::increment(), 3);
    assert_eq!(counter().get_count(), 3);

    let copy = counter().clone();
    assert_eq!(copy.decrement(), 2);
    assert_eq!(singleton::decrement(), 1);
    assert_eq!(singleton::decrement(), 0);
    assert_eq!(singleton::decrement(), -1);

    assert_eq!(singleton::get_count(), -1);
    assert_eq!(singleton::get_count(), -1);
    assert!(copy.shares_count_with(counter()));

    let other = std::thread::spawn(singleton::increment).join().unwrap();
    assert_eq!(other, 0);
    assert_eq!(counter().get_count(), 0);
}
