//! Shared test doubles for unit tests.

mod clock;

pub use clock::{MutableClock, fixture_timestamp};
