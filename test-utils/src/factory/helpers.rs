//! Shared helper utilities for factory methods.

/// Counter for generating unique identifiers in tests.
///
/// Each factory-created entity derives its unique fields (usernames, emails,
/// navigation keys) from this counter to prevent collisions.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
