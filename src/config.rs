//! Timing knobs for the simulated-latency mockups.

/// Simulated fetch delay when a lazy filter dropdown is opened (ms).
pub const FILTER_LOAD_MS: u32 = 200;

/// Simulated fetch delay for the cacheable status dropdown (ms).
pub const CACHE_LOAD_MS: u32 = 500;

/// Tick rate of the animated loading dots (ms).
pub const DOTS_TICK_MS: u32 = 200;
