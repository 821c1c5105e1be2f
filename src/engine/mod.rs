//! The PnL core: calendar rollover arithmetic and the per-wallet state machine.

pub mod calendar;
pub mod tracker;

pub use calendar::{start_of_month, start_of_week};
pub use tracker::PnlTracker;
