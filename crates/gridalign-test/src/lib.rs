//! gridalign-test - Regression test support
//!
//! A small harness for the workspace's `*_reg.rs` tests, supporting
//! two modes:
//!
//! - **Compare** (default): every comparison contributes to the verdict
//! - **Display**: run and log without failing the verdict
//!
//! # Usage
//!
//! ```
//! use gridalign_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to log without failing

mod params;

pub use params::{RegParams, RegTestMode};
