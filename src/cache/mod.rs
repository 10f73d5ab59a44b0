//! Cache Module
//!
//! In-process TTL cache with lazy, read-time expiration.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// TTL applied when a caller does not supply one (milliseconds)
pub const DEFAULT_TTL_MS: u64 = 60_000;
