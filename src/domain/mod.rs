//! Domain types for wallet PnL tracking.
//!
//! This module provides:
//! - `WalletAddress` with Solana base58 format validation
//! - `WalletPnlState` and the derived `PnlReport`
//! - `PnlPercent`, the sentinel-aware percentage-of-baseline result

pub mod percent;
pub mod state;
pub mod wallet;

pub use percent::{PnlPercent, Sign};
pub use state::{round2, PnlReport, WalletPnlState};
pub use wallet::{InvalidWalletAddress, WalletAddress};
