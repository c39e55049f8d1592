//! Signal filtering for smoothing joint angle measurements.
//!
//! Per-frame angles derived from pose landmarks jitter by several degrees
//! even when the subject holds still. Each tracked joint runs its raw
//! measurements through a filter before any threshold is applied.

/// Moving average filter over a bounded window
pub mod moving_average;

pub use moving_average::MovingAverageFilter;

/// Trait for all angle filters
pub trait AngleFilter: Send + Sync {
    /// Feed one raw measurement and return the filtered value
    fn apply(&mut self, value: f64) -> f64;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}
