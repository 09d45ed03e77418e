//! Shared helper utilities for factory methods.

use uuid::Uuid;

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created document gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets a UUID that no other factory call in this process has produced.
///
/// # Returns
/// - `Uuid` - UUID derived from the next counter value
pub fn next_uuid() -> Uuid {
    Uuid::from_u128(next_id() as u128)
}
